//! Optimal driver/destination assignment over a cost matrix.
//!
//! Feeds the negated-score matrix produced by [`crate::jobs`] to the
//! Kuhn-Munkres solver from `pathfinding`, which maximises total weight.
//! Weights are the negated costs, i.e. the suitability scores themselves.

use pathfinding::kuhn_munkres::{kuhn_munkres, Weights};

use crate::matrix::ScoreMatrix;

/// Suitability is handed to the solver in fixed point, millionths of a point.
const MICROS_PER_POINT: f64 = 1_000_000.0;

/// Solver view of a cost matrix.
///
/// Kuhn-Munkres needs no more rows than columns, so drivers are the rows
/// unless they outnumber destinations. Weights are suitability (negated cost)
/// and are computed per cell rather than copied out of the matrix.
#[derive(Clone, Copy)]
struct SuitabilityWeights<'a> {
    costs: &'a ScoreMatrix,
    transposed: bool,
    negated: bool,
}

impl<'a> SuitabilityWeights<'a> {
    fn new(costs: &'a ScoreMatrix) -> Self {
        Self {
            costs,
            transposed: costs.rows() > costs.columns(),
            negated: false,
        }
    }

    /// `(driver, destination)` for a solver cell.
    fn cell(&self, row: usize, column: usize) -> (usize, usize) {
        if self.transposed {
            (column, row)
        } else {
            (row, column)
        }
    }
}

impl Weights<i64> for SuitabilityWeights<'_> {
    fn rows(&self) -> usize {
        if self.transposed {
            self.costs.columns()
        } else {
            self.costs.rows()
        }
    }

    fn columns(&self) -> usize {
        if self.transposed {
            self.costs.rows()
        } else {
            self.costs.columns()
        }
    }

    fn at(&self, row: usize, column: usize) -> i64 {
        let (driver, destination) = self.cell(row, column);
        let cost = self.costs.get(driver, destination).unwrap_or(0.0);
        // Float-to-int `as` saturates, so huge costs cannot wrap.
        let micros = (-cost * MICROS_PER_POINT).round() as i64;
        if self.negated {
            micros.saturating_neg()
        } else {
            micros
        }
    }

    fn neg(&self) -> Self {
        Self {
            negated: !self.negated,
            ..*self
        }
    }
}

/// Result of solving the assignment problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// `(driver_index, destination_index)` pairs, ordered by driver index.
    pub pairs: Vec<(usize, usize)>,
    /// Sum of suitability (the negated cost) over the chosen pairs.
    pub total_suitability: f64,
}

/// Pick at most one destination per driver and one driver per destination so
/// that total cost is minimal (total suitability maximal).
///
/// With more drivers than destinations some drivers stay unassigned, and the
/// other way round.
pub fn solve_assignment(costs: &ScoreMatrix) -> Assignment {
    if costs.rows() == 0 || costs.columns() == 0 {
        return Assignment {
            pairs: Vec::new(),
            total_suitability: 0.0,
        };
    }

    let weights = SuitabilityWeights::new(costs);
    let (_, columns_by_row) = kuhn_munkres(&weights);

    let mut pairs: Vec<(usize, usize)> = columns_by_row
        .into_iter()
        .enumerate()
        .map(|(row, column)| weights.cell(row, column))
        .collect();
    pairs.sort_unstable();

    let total_suitability = pairs
        .iter()
        .filter_map(|&(driver, destination)| costs.get(driver, destination))
        .map(|cost| -cost)
        .sum();

    Assignment {
        pairs,
        total_suitability,
    }
}
