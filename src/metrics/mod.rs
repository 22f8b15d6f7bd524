pub mod store;
pub mod table;

pub use store::{PopulationTables, filter_all, load_dir, save_dir};
pub use table::{ArMetricsTable, ArRule, load_ar_metrics, save_ar_metrics};
