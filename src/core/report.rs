use crate::domain::model::PassRecord;
use chrono::{Local, LocalResult, TimeZone};

/// One output line per flyover, rise time rendered in local time.
pub fn format_pass(pass: &PassRecord) -> String {
    let when = match Local.timestamp_opt(pass.risetime, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.to_string(),
        // risetime outside the representable range
        LocalResult::None => format!("epoch {}", pass.risetime),
    };
    format!("Next pass at {} for {} seconds!", when, pass.duration)
}

pub fn render_pass_times(passes: &[PassRecord]) -> Vec<String> {
    passes.iter().map(format_pass).collect()
}

pub fn print_pass_times(passes: &[PassRecord]) {
    for line in render_pass_times(passes) {
        println!("{}", line);
    }
}
