//! Configuration loading and management for the pension bridge engine.
//!
//! This module loads the rule-set metadata and the regional cost-of-living
//! table from YAML files. The table is read once and shared immutably.
//!
//! # Example
//!
//! ```no_run
//! use pension_bridge::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/italy_2025").unwrap();
//! println!("Loaded rule set: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PensionConfig, RegimeMetadata, RegionFactor, RegionalCostTable, RegionsConfig};
