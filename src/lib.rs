pub mod analysis;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod input;
pub mod metrics;
pub mod model;
pub mod networks;
pub mod pipeline;
pub mod report;
pub mod stats;

pub mod prelude {
    pub use crate::analysis::InteractionTypeAnalyzer;
    pub use crate::analysis::results::{AnalysisResults, ResultRecord};
    pub use crate::config::Config;
    pub use crate::metrics::{ArMetricsTable, PopulationTables};
    pub use crate::model::metric::Metric;
    pub use crate::model::thresholds::{Bounds, Thresholds};
    pub use crate::networks::integration::NetworkIntegration;
    pub use crate::stats::{TestMethod, compare};
}
