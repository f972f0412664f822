//! Configuration types for the pension rule set.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Region;

/// Metadata about the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// Short code of the rule set (e.g., "IT-2025").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the reference documentation.
    pub source_url: String,
}

/// A single row of the regional cost-of-living table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionFactor {
    /// The region.
    pub region: Region,
    /// Cost-of-living multiplier (1.00 = national average).
    pub factor: Decimal,
}

/// regions.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionsConfig {
    /// Table rows.
    pub regions: Vec<RegionFactor>,
}

/// Immutable lookup from region to cost-of-living factor.
///
/// # Example
///
/// ```
/// use pension_bridge::config::{RegionFactor, RegionalCostTable};
/// use pension_bridge::models::Region;
/// use rust_decimal::Decimal;
///
/// let table = RegionalCostTable::from_rows(vec![RegionFactor {
///     region: Region::Calabria,
///     factor: Decimal::new(82, 2),
/// }]);
/// assert_eq!(table.factor(Region::Calabria), Decimal::new(82, 2));
/// assert_eq!(table.factor(Region::Lazio), Decimal::ONE);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalCostTable {
    factors: BTreeMap<Region, Decimal>,
}

impl RegionalCostTable {
    /// Builds a table from rows. Later rows win on duplicates.
    pub fn from_rows(rows: impl IntoIterator<Item = RegionFactor>) -> Self {
        Self {
            factors: rows.into_iter().map(|r| (r.region, r.factor)).collect(),
        }
    }

    /// Returns the factor for a region, or 1.0 if the region is not listed.
    pub fn factor(&self, region: Region) -> Decimal {
        self.factors.get(&region).copied().unwrap_or(Decimal::ONE)
    }

    /// Returns true if the region has an explicit entry.
    pub fn contains(&self, region: Region) -> bool {
        self.factors.contains_key(&region)
    }

    /// Returns all rows ordered by region.
    pub fn rows(&self) -> Vec<RegionFactor> {
        self.factors
            .iter()
            .map(|(region, factor)| RegionFactor {
                region: *region,
                factor: *factor,
            })
            .collect()
    }

    /// Number of listed regions.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns true if no region is listed.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PensionConfig {
    metadata: RegimeMetadata,
    regional_costs: RegionalCostTable,
}

impl PensionConfig {
    /// Creates a new PensionConfig from its component parts.
    pub fn new(metadata: RegimeMetadata, regional_costs: RegionalCostTable) -> Self {
        Self {
            metadata,
            regional_costs,
        }
    }

    /// Returns the rule-set metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns the regional cost-of-living table.
    pub fn regional_costs(&self) -> &RegionalCostTable {
        &self.regional_costs
    }
}
