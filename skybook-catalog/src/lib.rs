pub mod catalog;
pub mod latency;
pub mod search;

pub use catalog::FlightCatalog;
pub use latency::{FixedLatency, LatencySimulator, NoLatency};
pub use search::{FlightSource, SearchError, SearchService};
