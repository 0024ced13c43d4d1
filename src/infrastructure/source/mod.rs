//! Package source collection.

mod collector;

pub use collector::{CollectedSources, RootSummary, SourceCollector};
