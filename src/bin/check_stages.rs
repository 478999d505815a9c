//! Runs each lookup stage individually against the live endpoints and prints
//! every intermediate result. Handy for checking which of the three services
//! is misbehaving when the full chain fails.

use clap::Parser;
use iss_watch::core::report;
use iss_watch::domain::ports::{GeoResolver, IpFetcher, PassPredictor};
use iss_watch::{CliConfig, HttpGeoResolver, HttpIpFetcher, HttpPassPredictor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    let config = CliConfig::parse();

    println!("🛰  Exercising each lookup stage individually");

    let ip_fetcher = HttpIpFetcher::new(&config);
    let ip = ip_fetcher.fetch().await?;
    println!("✅ Public IP: {}", ip);

    let geo_resolver = HttpGeoResolver::new(&config);
    let location = geo_resolver.resolve(&ip).await?;
    println!(
        "✅ Coordinates: latitude {}, longitude {}",
        location.latitude, location.longitude
    );

    let pass_predictor = HttpPassPredictor::new(&config);
    let passes = pass_predictor.predict(&location).await?;
    println!("✅ {} upcoming flyovers", passes.len());
    for pass in &passes {
        println!("  - {}", report::format_pass(pass));
    }

    Ok(())
}
