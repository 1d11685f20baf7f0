mod collector;
mod table;

pub use collector::CollectionReport;
pub use collector::FeatureCollector;
pub use table::FeatureTableManager;
pub use table::TableError;
