pub mod engine;
pub mod geo;
pub mod ip;
pub mod passes;
pub mod report;

pub use crate::domain::model::{Coordinate, Coordinates, IpAddress, PassRecord};
pub use crate::domain::ports::{Endpoints, GeoResolver, IpFetcher, PassPredictor};
pub use crate::utils::error::Result;
