//! Tenor schedules: which inputs become which curve points.
//!
//! The schedule is validated when it is built, so a curve assembled from it
//! always has distinct, increasing months.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::point::{CurveMode, PointCategory};
use crate::rates::RateField;

/// One row of a tenor schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenorSpec {
    /// Tenor display string.
    pub label: String,
    /// Tenor in whole months.
    pub months: u32,
    /// Provenance tag for the resulting point.
    pub category: PointCategory,
    /// Input rate feeding the point.
    pub field: RateField,
    /// Whether the spread is subtracted from this point.
    #[serde(default)]
    pub adjustable: bool,
}

impl TenorSpec {
    /// Creates a non-adjustable entry.
    pub fn new(
        label: impl Into<String>,
        months: u32,
        category: PointCategory,
        field: RateField,
    ) -> Self {
        Self {
            label: label.into(),
            months,
            category,
            field,
            adjustable: false,
        }
    }

    /// Marks the entry as spread-adjusted.
    #[must_use]
    pub fn adjustable(mut self) -> Self {
        self.adjustable = true;
        self
    }
}

/// A validated, ordered list of [`TenorSpec`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TenorSpec>", into = "Vec<TenorSpec>")]
pub struct TenorSchedule {
    entries: Vec<TenorSpec>,
}

impl TenorSchedule {
    /// Builds a schedule after validating it.
    ///
    /// # Errors
    ///
    /// - [`CurveError::EmptySchedule`] for no entries
    /// - [`CurveError::InvalidLabel`] for a blank label
    /// - [`CurveError::DuplicateTenorMonths`] for repeated months
    /// - [`CurveError::NonMonotonicSchedule`] for decreasing months
    /// - [`CurveError::MultipleCashEntries`] for more than one cash point
    /// - [`CurveError::InvalidSchedule`] for an adjustable entry that is not
    ///   a short rate, or a field that does not belong to the category
    pub fn new(entries: Vec<TenorSpec>) -> CurveResult<Self> {
        if entries.is_empty() {
            return Err(CurveError::EmptySchedule);
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(CurveError::InvalidLabel { index });
            }
            if entry.adjustable && entry.category != PointCategory::ShortRate {
                return Err(CurveError::invalid_schedule(
                    &entry.label,
                    format!("only short-rate entries can be adjustable, got {}", entry.category),
                ));
            }
            if !field_matches_category(entry.field, entry.category) {
                return Err(CurveError::invalid_schedule(
                    &entry.label,
                    format!("{} entry cannot read {}", entry.category, entry.field),
                ));
            }
        }

        for (index, pair) in entries.windows(2).enumerate() {
            let (prev, current) = (&pair[0], &pair[1]);
            if current.months == prev.months {
                return Err(CurveError::DuplicateTenorMonths {
                    label: current.label.clone(),
                    months: current.months,
                });
            }
            if current.months < prev.months {
                return Err(CurveError::NonMonotonicSchedule {
                    index: index + 1,
                    prev: prev.months,
                    current: current.months,
                });
            }
        }

        let cash_entries = entries
            .iter()
            .filter(|e| e.category == PointCategory::CashRate)
            .count();
        if cash_entries > 1 {
            return Err(CurveError::MultipleCashEntries {
                count: cash_entries,
            });
        }

        Ok(Self { entries })
    }

    /// The standard AUD schedule.
    ///
    /// | Label | Months | Category | Adjusted |
    /// |-------|--------|----------|----------|
    /// | Cash | 0 | cash-rate | no |
    /// | 1M | 1 | short-rate | yes |
    /// | 3M | 3 | short-rate | yes |
    /// | 6M | 6 | short-rate | yes |
    /// | 2Y | 24 | bond-yield | no |
    /// | 3Y | 36 | bond-yield | no |
    /// | 5Y | 60 | bond-yield | no |
    /// | 10Y | 120 | bond-yield | no |
    pub fn standard() -> Self {
        use PointCategory::{BondYield, CashRate, ShortRate};

        Self {
            entries: vec![
                TenorSpec::new("Cash", 0, CashRate, RateField::Cash),
                TenorSpec::new("1M", 1, ShortRate, RateField::OneMonth).adjustable(),
                TenorSpec::new("3M", 3, ShortRate, RateField::ThreeMonth).adjustable(),
                TenorSpec::new("6M", 6, ShortRate, RateField::SixMonth).adjustable(),
                TenorSpec::new("2Y", 24, BondYield, RateField::TwoYear),
                TenorSpec::new("3Y", 36, BondYield, RateField::ThreeYear),
                TenorSpec::new("5Y", 60, BondYield, RateField::FiveYear),
                TenorSpec::new("10Y", 120, BondYield, RateField::TenYear),
            ],
        }
    }

    /// All entries in order.
    pub fn entries(&self) -> &[TenorSpec] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated schedule.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TenorSpec> {
        self.entries.iter()
    }

    /// Entries that take part in a curve of the given mode.
    ///
    /// Reduced mode skips the cash-rate entry.
    pub fn for_mode(&self, mode: CurveMode) -> impl Iterator<Item = &TenorSpec> + '_ {
        self.entries
            .iter()
            .filter(move |e| mode.includes_cash() || e.category != PointCategory::CashRate)
    }
}

impl Default for TenorSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<TenorSpec>> for TenorSchedule {
    type Error = CurveError;

    fn try_from(entries: Vec<TenorSpec>) -> CurveResult<Self> {
        Self::new(entries)
    }
}

impl From<TenorSchedule> for Vec<TenorSpec> {
    fn from(schedule: TenorSchedule) -> Self {
        schedule.entries
    }
}

/// Cash reads the cash rate, short rates read a term rate, bonds a bond yield.
fn field_matches_category(field: RateField, category: PointCategory) -> bool {
    match category {
        PointCategory::CashRate => field == RateField::Cash,
        PointCategory::ShortRate => field.is_short_end() && field != RateField::Cash,
        PointCategory::BondYield => !field.is_short_end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_schedule_is_valid() {
        let standard = TenorSchedule::standard();
        let rebuilt = TenorSchedule::new(standard.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, standard);
        assert_eq!(standard.len(), 8);
    }

    #[test]
    fn test_for_mode_drops_cash() {
        let schedule = TenorSchedule::standard();
        assert_eq!(schedule.for_mode(CurveMode::Full).count(), 8);

        let reduced: Vec<_> = schedule.for_mode(CurveMode::Reduced).collect();
        assert_eq!(reduced.len(), 7);
        assert_eq!(reduced[0].label, "1M");
    }

    #[test]
    fn test_rejects_duplicate_months() {
        let mut entries = TenorSchedule::standard().entries().to_vec();
        entries.insert(
            4,
            TenorSpec::new("0.5Y", 6, PointCategory::ShortRate, RateField::SixMonth),
        );

        assert_eq!(
            TenorSchedule::new(entries),
            Err(CurveError::DuplicateTenorMonths {
                label: "0.5Y".into(),
                months: 6
            })
        );
    }

    #[test]
    fn test_rejects_out_of_order() {
        let entries = vec![
            TenorSpec::new("2Y", 24, PointCategory::BondYield, RateField::TwoYear),
            TenorSpec::new("6M", 6, PointCategory::ShortRate, RateField::SixMonth),
        ];
        assert!(matches!(
            TenorSchedule::new(entries),
            Err(CurveError::NonMonotonicSchedule {
                index: 1,
                prev: 24,
                current: 6
            })
        ));
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(TenorSchedule::new(vec![]), Err(CurveError::EmptySchedule));

        let blank = vec![TenorSpec::new(" ", 1, PointCategory::ShortRate, RateField::OneMonth)];
        assert_eq!(TenorSchedule::new(blank), Err(CurveError::InvalidLabel { index: 0 }));
    }

    #[test]
    fn test_rejects_adjustable_bond() {
        let entries =
            vec![TenorSpec::new("2Y", 24, PointCategory::BondYield, RateField::TwoYear).adjustable()];
        assert!(matches!(
            TenorSchedule::new(entries),
            Err(CurveError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_rejects_two_cash_points() {
        let entries = vec![
            TenorSpec::new("Cash", 0, PointCategory::CashRate, RateField::Cash),
            TenorSpec::new("O/N", 1, PointCategory::CashRate, RateField::Cash),
        ];
        assert_eq!(
            TenorSchedule::new(entries),
            Err(CurveError::MultipleCashEntries { count: 2 })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"label": "1M", "months": 1, "category": "short-rate", "field": "one_month", "adjustable": true},
            {"label": "1M again", "months": 1, "category": "short-rate", "field": "one_month"}
        ]"#;
        let result: Result<TenorSchedule, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"[
            {"label": "1M", "months": 1, "category": "short-rate", "field": "one_month", "adjustable": true},
            {"label": "10Y", "months": 120, "category": "bond-yield", "field": "ten_year"}
        ]"#;
        let schedule: TenorSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.len(), 2);
        assert!(schedule.entries()[0].adjustable);
    }

    #[test]
    fn test_rejects_field_outside_category() {
        let cases = [
            TenorSpec::new("2Y", 24, PointCategory::BondYield, RateField::OneMonth),
            TenorSpec::new("Cash", 0, PointCategory::CashRate, RateField::TenYear),
            TenorSpec::new("O/N", 0, PointCategory::ShortRate, RateField::Cash),
            TenorSpec::new("1M", 1, PointCategory::ShortRate, RateField::FiveYear),
        ];
        for spec in cases {
            let label = spec.label.clone();
            assert!(
                matches!(
                    TenorSchedule::new(vec![spec]),
                    Err(CurveError::InvalidSchedule { label: ref l, .. }) if *l == label
                ),
                "{label} should be rejected"
            );
        }
    }

    #[test]
    fn test_toml_schedule_with_mismatched_field_fails() {
        let toml = r#"
            [[schedule]]
            label = "5Y"
            months = 60
            category = "bond-yield"
            field = "six_month"
        "#;
        assert!(crate::CurveConfig::from_toml_str(toml).is_err());
    }
}
