//! Market data sources and the combined load.

use std::path::{Path, PathBuf};

use audcurve_curves::{BondYieldSet, ShortRateSet};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::error::{SourceError, SourceResult};
use crate::rba::{read_bond_yields, read_short_rates};

const MANUAL: &str = "Manual";
const SHORT_RATE_ERROR: &str = "Failed to load BBSW";
const BOND_YIELD_ERROR: &str = "Failed to load Bonds";

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Supplies the two rate snapshots a curve is built from.
pub trait MarketDataSource {
    /// Human-readable name of the short-rate feed.
    fn short_rate_name(&self) -> &str;

    /// Human-readable name of the bond feed.
    fn bond_yield_name(&self) -> &str;

    /// Latest short rates.
    fn short_rates(&self) -> SourceResult<ShortRateSet>;

    /// Latest bond yields.
    fn bond_yields(&self) -> SourceResult<BondYieldSet>;
}

// =============================================================================
// RBA FILES
// =============================================================================

/// Reads F1.1 and F2 CSV files from disk.
#[derive(Debug, Clone, Default)]
pub struct RbaFileSource {
    f1_path: Option<PathBuf>,
    f2_path: Option<PathBuf>,
}

impl RbaFileSource {
    /// Creates a source from optional file paths.
    pub fn new(f1_path: Option<PathBuf>, f2_path: Option<PathBuf>) -> Self {
        Self { f1_path, f2_path }
    }

    /// F1.1 file path.
    pub fn f1_path(&self) -> Option<&Path> {
        self.f1_path.as_deref()
    }

    /// F2 file path.
    pub fn f2_path(&self) -> Option<&Path> {
        self.f2_path.as_deref()
    }
}

impl MarketDataSource for RbaFileSource {
    fn short_rate_name(&self) -> &str {
        "RBA F1"
    }

    fn bond_yield_name(&self) -> &str {
        "RBA F2"
    }

    fn short_rates(&self) -> SourceResult<ShortRateSet> {
        let path = self.f1_path.as_ref().ok_or(SourceError::NotConfigured("F1"))?;
        read_short_rates(path)
    }

    fn bond_yields(&self) -> SourceResult<BondYieldSet> {
        let path = self.f2_path.as_ref().ok_or(SourceError::NotConfigured("F2"))?;
        read_bond_yields(path)
    }
}

// =============================================================================
// MANUAL INPUT
// =============================================================================

/// Rates typed in by the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualSource {
    short_rates: Option<ShortRateSet>,
    bond_yields: Option<BondYieldSet>,
}

impl ManualSource {
    /// Creates a manual source.
    pub fn new(short_rates: Option<ShortRateSet>, bond_yields: Option<BondYieldSet>) -> Self {
        Self {
            short_rates,
            bond_yields,
        }
    }
}

impl MarketDataSource for ManualSource {
    fn short_rate_name(&self) -> &str {
        MANUAL
    }

    fn bond_yield_name(&self) -> &str {
        MANUAL
    }

    fn short_rates(&self) -> SourceResult<ShortRateSet> {
        self.short_rates.ok_or(SourceError::NotConfigured("short rate"))
    }

    fn bond_yields(&self) -> SourceResult<BondYieldSet> {
        self.bond_yields.ok_or(SourceError::NotConfigured("bond yield"))
    }
}

// =============================================================================
// COMBINED LOAD
// =============================================================================

/// Outcome of loading both snapshots.
///
/// A failed snapshot is `None` and its error message is kept in `errors`;
/// the other snapshot is still usable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResults {
    /// Short rates, if loaded.
    pub short_rates: Option<ShortRateSet>,
    /// Bond yields, if loaded.
    pub bond_yields: Option<BondYieldSet>,
    /// One message per failed snapshot.
    pub errors: Vec<String>,
    /// When the load ran.
    pub last_update: DateTime<Utc>,
    /// Short-rate feed name.
    short_rate_name: String,
    /// Bond feed name.
    bond_yield_name: String,
}

impl FetchResults {
    /// Describes which feeds delivered data, e.g. `RBA F1 & F2 CSV`.
    pub fn data_source(&self) -> String {
        let short = self.short_rates.map(|_| self.short_rate_name.as_str());
        let bonds = self.bond_yields.map(|_| self.bond_yield_name.as_str());

        match (short, bonds) {
            (Some(s), Some(b)) if s == b => s.to_string(),
            (Some(s), Some(b)) => match (s.strip_prefix("RBA "), b.strip_prefix("RBA ")) {
                (Some(s), Some(b)) => format!("RBA {s} & {b} CSV"),
                _ => format!("{s} & {b}"),
            },
            (Some(name), None) | (None, Some(name)) if name.starts_with("RBA ") => {
                format!("{name} CSV")
            }
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => "Unavailable".to_string(),
        }
    }

    /// True when both snapshots loaded.
    pub fn is_complete(&self) -> bool {
        self.short_rates.is_some() && self.bond_yields.is_some()
    }

    /// Replaces loaded snapshots with manually entered ones.
    ///
    /// A replaced snapshot's load error is dropped.
    #[must_use]
    pub fn with_manual(
        mut self,
        short_rates: Option<ShortRateSet>,
        bond_yields: Option<BondYieldSet>,
    ) -> Self {
        if let Some(rates) = short_rates {
            self.short_rates = Some(rates);
            self.short_rate_name = MANUAL.to_string();
            self.errors.retain(|e| !e.starts_with(SHORT_RATE_ERROR));
        }
        if let Some(yields) = bond_yields {
            self.bond_yields = Some(yields);
            self.bond_yield_name = MANUAL.to_string();
            self.errors.retain(|e| !e.starts_with(BOND_YIELD_ERROR));
        }
        self
    }
}

/// Loads both snapshots, recording failures instead of returning them.
pub fn load_market_data(source: &dyn MarketDataSource) -> FetchResults {
    let mut errors = Vec::new();

    let short_rates = source
        .short_rates()
        .map_err(|e| {
            warn!(error = %e, "short rates unavailable");
            errors.push(format!("{SHORT_RATE_ERROR}: {e}"));
        })
        .ok();

    let bond_yields = source
        .bond_yields()
        .map_err(|e| {
            warn!(error = %e, "bond yields unavailable");
            errors.push(format!("{BOND_YIELD_ERROR}: {e}"));
        })
        .ok();

    FetchResults {
        short_rates,
        bond_yields,
        errors,
        last_update: Utc::now(),
        short_rate_name: source.short_rate_name().to_string(),
        bond_yield_name: source.bond_yield_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> ShortRateSet {
        ShortRateSet::new(4.35, 4.34, 4.30, 4.20)
    }

    fn bonds() -> BondYieldSet {
        BondYieldSet::new(3.80, 3.85, 4.00, 4.40)
    }

    #[test]
    fn test_manual_complete() {
        let results = load_market_data(&ManualSource::new(Some(short()), Some(bonds())));
        assert!(results.is_complete());
        assert!(results.errors.is_empty());
        assert_eq!(results.data_source(), "Manual");
    }

    #[test]
    fn test_partial_failure_keeps_other_set() {
        let results = load_market_data(&ManualSource::new(None, Some(bonds())));
        assert!(!results.is_complete());
        assert_eq!(results.bond_yields, Some(bonds()));
        assert_eq!(
            results.errors,
            vec!["Failed to load BBSW: short rate source not configured".to_string()]
        );
    }

    #[test]
    fn test_rba_data_source_labels() {
        let mut results = load_market_data(&RbaFileSource::default());
        assert_eq!(results.errors.len(), 2);
        assert_eq!(results.data_source(), "Unavailable");

        results.short_rates = Some(short());
        assert_eq!(results.data_source(), "RBA F1 CSV");

        results.bond_yields = Some(bonds());
        assert_eq!(results.data_source(), "RBA F1 & F2 CSV");

        results.short_rates = None;
        assert_eq!(results.data_source(), "RBA F2 CSV");
    }

    #[test]
    fn test_manual_overrides_failed_file() {
        let results = load_market_data(&RbaFileSource::default()).with_manual(Some(short()), None);

        assert_eq!(results.short_rates, Some(short()));
        assert_eq!(results.errors.len(), 1);
        assert!(results.errors[0].starts_with("Failed to load Bonds"));
        assert_eq!(results.data_source(), "Manual");

        let both = results.with_manual(None, Some(bonds()));
        assert!(both.is_complete());
        assert!(both.errors.is_empty());
    }
}
