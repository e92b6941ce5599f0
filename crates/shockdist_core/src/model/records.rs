//! Individual income records and the immutable dataset they form

use serde::{Deserialize, Serialize};

use super::ids::SectorId;
use crate::error::DatasetError;

/// One surveyed individual
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub income: f64,
    /// Relative sampling weight (expansion factor)
    pub weight: f64,
    pub sector: SectorId,
}

impl Record {
    pub fn new(income: f64, weight: f64, sector: SectorId) -> Self {
        Self {
            income,
            weight,
            sector,
        }
    }
}

/// Ordered, validated collection of records.
///
/// A `Dataset` is never mutated after construction. Shocks build a new
/// `Dataset` so the original stays usable as the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate and wrap a record set.
    ///
    /// Rejects empty input, non-finite incomes and weights that are not
    /// strictly positive. Distinct-income checks belong to the estimator,
    /// since a valid dataset can still be degenerate for a KDE.
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            if !record.income.is_finite() {
                return Err(DatasetError::NonFiniteIncome {
                    index,
                    income: record.income,
                });
            }
            if !record.weight.is_finite() || record.weight <= 0.0 {
                return Err(DatasetError::NonPositiveWeight {
                    index,
                    weight: record.weight,
                });
            }
        }
        Ok(Self { records })
    }

    /// Build from records derived from an already validated dataset.
    pub(crate) fn from_validated(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn incomes(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.income)
    }

    /// Smallest and largest income
    pub fn income_range(&self) -> (f64, f64) {
        self.incomes()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            })
    }

    pub fn total_weight(&self) -> f64 {
        self.records.iter().map(|r| r.weight).sum()
    }

    /// Sorted, deduplicated sectors present in the data
    pub fn sectors(&self) -> Vec<SectorId> {
        let mut sectors: Vec<SectorId> = self.records.iter().map(|r| r.sector).collect();
        sectors.sort_unstable();
        sectors.dedup();
        sectors
    }

    pub fn contains_sector(&self, sector: SectorId) -> bool {
        self.records.iter().any(|r| r.sector == sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Dataset::new(vec![]), Err(DatasetError::Empty));
    }

    #[test]
    fn test_rejects_bad_weights() {
        let zero = Dataset::new(vec![
            Record::new(100.0, 1.0, SectorId(1)),
            Record::new(200.0, 0.0, SectorId(1)),
        ]);
        assert!(matches!(
            zero,
            Err(DatasetError::NonPositiveWeight { index: 1, .. })
        ));

        let negative = Dataset::new(vec![Record::new(100.0, -3.0, SectorId(1))]);
        assert!(matches!(
            negative,
            Err(DatasetError::NonPositiveWeight { index: 0, .. })
        ));

        let nan = Dataset::new(vec![Record::new(100.0, f64::NAN, SectorId(1))]);
        assert!(nan.is_err());
    }

    #[test]
    fn test_rejects_non_finite_income() {
        let result = Dataset::new(vec![Record::new(f64::INFINITY, 1.0, SectorId(2))]);
        assert!(matches!(
            result,
            Err(DatasetError::NonFiniteIncome { index: 0, .. })
        ));
    }

    #[test]
    fn test_sectors_and_range() {
        let dataset = Dataset::new(vec![
            Record::new(300.0, 1.0, SectorId(3)),
            Record::new(100.0, 2.0, SectorId(1)),
            Record::new(900.0, 1.0, SectorId(3)),
        ])
        .unwrap();

        assert_eq!(dataset.sectors(), vec![SectorId(1), SectorId(3)]);
        assert_eq!(dataset.income_range(), (100.0, 900.0));
        assert_eq!(dataset.total_weight(), 4.0);
        assert!(dataset.contains_sector(SectorId(3)));
        assert!(!dataset.contains_sector(SectorId(2)));
    }
}
