//! The driver × destination score matrix and the kernel that fills it.

use serde::{Deserialize, Serialize};

use crate::error::AddressError;
use crate::score::Scorer;

/// Row-major matrix of `f64`, one row per driver and one column per destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMatrix(Vec<Vec<f64>>);

impl ScoreMatrix {
    pub fn with_capacity(rows: usize) -> Self {
        Self(Vec::with_capacity(rows))
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Width of the first row; every row has the same width.
    pub fn columns(&self) -> usize {
        self.0.first().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.0.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.0.get(row).map(Vec::as_slice)
    }

    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.0
    }

    /// Append a block of rows below the existing ones.
    pub fn append_rows(&mut self, rows: Vec<Vec<f64>>) {
        self.0.extend(rows);
    }
}

impl From<Vec<Vec<f64>>> for ScoreMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self(rows)
    }
}

/// Negated scores for every driver against every destination, in input order.
///
/// Negation turns suitability (higher is better) into a cost for minimising
/// assignment solvers. Both the in-process path and each worker chunk use this
/// kernel, which keeps their output identical.
pub fn cost_rows<S: Scorer + ?Sized>(
    scorer: &S,
    drivers: &[String],
    destinations: &[String],
) -> Result<Vec<Vec<f64>>, AddressError> {
    drivers
        .iter()
        .map(|driver| {
            destinations
                .iter()
                .map(|destination| scorer.score(driver, destination).map(|score| score * -1.0))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::SuitabilityScorer;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cost_rows_negates_scores_in_order() {
        let scorer = SuitabilityScorer::new();
        let drivers = strings(&["Minnie Auer", "Sue Johns"]);
        let destinations = strings(&["23214 Batz Forest", "6659 Rylee Estates"]);

        let rows = cost_rows(&scorer, &drivers, &destinations).unwrap();
        assert_eq!(rows, vec![vec![-9.0, -4.0], vec![-4.5, -5.0]]);
    }

    #[test]
    fn cost_rows_fails_on_first_bad_destination() {
        let scorer = SuitabilityScorer::new();
        let drivers = strings(&["Pat White"]);
        let destinations = strings(&["123 Fake St", ""]);

        let err = cost_rows(&scorer, &drivers, &destinations).unwrap_err();
        assert_eq!(err, AddressError::StreetNameNotFound);
    }

    #[test]
    fn matrix_shape_accessors() {
        let mut matrix = ScoreMatrix::with_capacity(3);
        assert!(matrix.is_empty());
        assert_eq!(matrix.columns(), 0);

        matrix.append_rows(vec![vec![1.0, 2.0]]);
        matrix.append_rows(vec![vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns(), 2);
        assert_eq!(matrix.get(2, 1), Some(6.0));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.row(1), Some(&[3.0, 4.0][..]));
    }
}
