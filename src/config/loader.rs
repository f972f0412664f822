//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pension
//! rule set from YAML files.

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Region;

use super::types::{PensionConfig, RegimeMetadata, RegionalCostTable, RegionsConfig};

/// Loads and provides access to the pension rule-set configuration.
///
/// # Directory Structure
///
/// ```text
/// config/italy_2025/
/// ├── regime.yaml   # Rule-set metadata
/// └── regions.yaml  # Regional cost-of-living factors
/// ```
///
/// # Example
///
/// ```no_run
/// use pension_bridge::config::ConfigLoader;
/// use pension_bridge::models::Region;
///
/// let loader = ConfigLoader::load("./config/italy_2025").unwrap();
/// println!("{}: {}", loader.regime().code, loader.regional_factor(Region::Lazio));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PensionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// lists a region twice or assigns a non-positive factor.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RegimeMetadata>(&path.join("regime.yaml"))?;

        let regions_path = path.join("regions.yaml");
        let regions = Self::load_yaml::<RegionsConfig>(&regions_path)?;
        Self::validate_regions(&regions_path, &regions)?;

        let config = PensionConfig::new(metadata, RegionalCostTable::from_rows(regions.regions));
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_regions(path: &Path, regions: &RegionsConfig) -> EngineResult<()> {
        let mut seen: HashSet<Region> = HashSet::new();

        for row in &regions.regions {
            if !seen.insert(row.region) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate region '{}'", row.region),
                });
            }
            if row.factor <= Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "factor for '{}' must be positive, got {}",
                        row.region, row.factor
                    ),
                });
            }
        }

        Ok(())
    }

    /// Returns the rule-set metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        self.config.regime()
    }

    /// Returns the regional cost-of-living table.
    pub fn regional_costs(&self) -> &RegionalCostTable {
        self.config.regional_costs()
    }

    /// Returns the cost-of-living factor for a region (1.0 when unlisted).
    pub fn regional_factor(&self, region: Region) -> Decimal {
        self.config.regional_costs().factor(region)
    }
}
