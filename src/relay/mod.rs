mod client;
mod error;
mod types;

pub use client::PositionsClient;
pub use error::RelayError;
pub use types::{Observer, PositionReport, PositionSample, SatelliteInfo, Selection, TaggedReport};
