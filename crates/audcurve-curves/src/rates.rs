//! Raw rate snapshots supplied by a data source or typed in by a user.
//!
//! Each set is complete or absent: callers pass `Option<ShortRateSet>` and
//! `Option<BondYieldSet>` and never fill a missing field with zero, since
//! zero is itself a valid rate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Short-end rates, annualized percentages.
///
/// The cash rate is the overnight rate; the three term rates are bank bill
/// swap rates at 1, 3 and 6 months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortRateSet {
    /// Overnight cash rate.
    pub cash: f64,
    /// 1 month term rate.
    pub one_month: f64,
    /// 3 month term rate.
    pub three_month: f64,
    /// 6 month term rate.
    pub six_month: f64,
}

impl ShortRateSet {
    /// Creates a short rate snapshot.
    pub fn new(cash: f64, one_month: f64, three_month: f64, six_month: f64) -> Self {
        Self {
            cash,
            one_month,
            three_month,
            six_month,
        }
    }

    /// Returns the raw value of a short-end field, `None` for bond fields.
    pub fn get(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Cash => Some(self.cash),
            RateField::OneMonth => Some(self.one_month),
            RateField::ThreeMonth => Some(self.three_month),
            RateField::SixMonth => Some(self.six_month),
            _ => None,
        }
    }

    /// Returns a term rate net of the spread, for display next to the raw
    /// input.
    ///
    /// `None` for the cash rate (never adjusted) and for bond fields.
    pub fn adjusted(&self, field: RateField, spread_bps: f64) -> Option<f64> {
        if field == RateField::Cash {
            return None;
        }
        self.get(field).map(|rate| rate - spread_adjustment(spread_bps))
    }
}

/// Government bond yields, annualized percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondYieldSet {
    /// 2 year yield.
    pub two_year: f64,
    /// 3 year yield.
    pub three_year: f64,
    /// 5 year yield.
    pub five_year: f64,
    /// 10 year yield.
    pub ten_year: f64,
}

impl BondYieldSet {
    /// Creates a bond yield snapshot.
    pub fn new(two_year: f64, three_year: f64, five_year: f64, ten_year: f64) -> Self {
        Self {
            two_year,
            three_year,
            five_year,
            ten_year,
        }
    }

    /// Returns the value of a bond field, `None` for short-end fields.
    pub fn get(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::TwoYear => Some(self.two_year),
            RateField::ThreeYear => Some(self.three_year),
            RateField::FiveYear => Some(self.five_year),
            RateField::TenYear => Some(self.ten_year),
            _ => None,
        }
    }
}

/// Names one rate inside a [`ShortRateSet`] or [`BondYieldSet`].
///
/// Tenor schedules use this to say which input feeds each curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateField {
    /// Cash rate.
    Cash,
    /// 1 month bank bill rate.
    OneMonth,
    /// 3 month bank bill rate.
    ThreeMonth,
    /// 6 month bank bill rate.
    SixMonth,
    /// 2 year bond yield.
    TwoYear,
    /// 3 year bond yield.
    ThreeYear,
    /// 5 year bond yield.
    FiveYear,
    /// 10 year bond yield.
    TenYear,
}

impl RateField {
    /// True for fields read from the short rate set.
    pub fn is_short_end(self) -> bool {
        matches!(
            self,
            Self::Cash | Self::OneMonth | Self::ThreeMonth | Self::SixMonth
        )
    }

    /// Reads this field from whichever input set carries it.
    pub fn read(self, short_rates: &ShortRateSet, bond_yields: &BondYieldSet) -> f64 {
        match self {
            Self::Cash => short_rates.cash,
            Self::OneMonth => short_rates.one_month,
            Self::ThreeMonth => short_rates.three_month,
            Self::SixMonth => short_rates.six_month,
            Self::TwoYear => bond_yields.two_year,
            Self::ThreeYear => bond_yields.three_year,
            Self::FiveYear => bond_yields.five_year,
            Self::TenYear => bond_yields.ten_year,
        }
    }
}

impl fmt::Display for RateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cash => "cash",
            Self::OneMonth => "one_month",
            Self::ThreeMonth => "three_month",
            Self::SixMonth => "six_month",
            Self::TwoYear => "two_year",
            Self::ThreeYear => "three_year",
            Self::FiveYear => "five_year",
            Self::TenYear => "ten_year",
        };
        write!(f, "{name}")
    }
}

/// Converts a spread in basis points to percentage points.
pub fn spread_adjustment(spread_bps: f64) -> f64 {
    spread_bps / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_adjusted_skips_cash() {
        let short = ShortRateSet::new(4.35, 4.34, 4.30, 4.20);
        assert_eq!(short.adjusted(RateField::Cash, 30.0), None);
        assert_relative_eq!(
            short.adjusted(RateField::OneMonth, 30.0).unwrap(),
            4.04,
            epsilon = 1e-12
        );
        assert_eq!(short.adjusted(RateField::TenYear, 30.0), None);
    }

    #[test]
    fn test_read_routes_to_correct_set() {
        let short = ShortRateSet::new(1.0, 2.0, 3.0, 4.0);
        let bonds = BondYieldSet::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(RateField::SixMonth.read(&short, &bonds), 4.0);
        assert_eq!(RateField::TwoYear.read(&short, &bonds), 5.0);
        assert_eq!(RateField::TenYear.read(&short, &bonds), 8.0);
        assert!(RateField::Cash.is_short_end());
        assert!(!RateField::FiveYear.is_short_end());
    }

    #[test]
    fn test_negative_spread_raises_rates() {
        let short = ShortRateSet::new(4.35, 4.34, 4.30, 4.20);
        assert_relative_eq!(
            short.adjusted(RateField::SixMonth, -10.0).unwrap(),
            4.30,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_field_names_serialize_snake_case() {
        let json = serde_json::to_string(&RateField::ThreeMonth).unwrap();
        assert_eq!(json, "\"three_month\"");
        assert_eq!(format!("\"{}\"", RateField::ThreeMonth), json);
    }
}
