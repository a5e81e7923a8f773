//! Builds the full driver × destination cost matrix.
//!
//! Small inputs are scored on the calling thread. Large ones are cut into
//! fixed-size driver chunks that run on a [`WorkerPool`]; the chunks come
//! back in plan order, so both paths produce the same matrix.

use tracing::{debug, info, warn};

use crate::config::{MatrixConfig, DEFAULT_MAX_THREADS};
use crate::contract::{ChunkRows, ChunkTask};
use crate::error::{MatrixError, TaskError, WorkerFailure};
use crate::matrix::{cost_rows, ScoreMatrix};
use crate::pool::{WorkerPool, WorkerUnit};
use crate::score::{Scorer, SuitabilityScorer};
use crate::sharding::{compute_chunk_plan, ChunkAssignment};

/// How a matrix of a given shape will be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Serial,
    Parallel { workers: usize, chunk_size: usize },
}

impl ExecutionStrategy {
    pub fn select(drivers: usize, destinations: usize, config: &MatrixConfig) -> Self {
        let cells = drivers.saturating_mul(destinations);
        if drivers == 0 || cells < config.parallel_threshold {
            return ExecutionStrategy::Serial;
        }
        ExecutionStrategy::Parallel {
            workers: pool_size(drivers, config.chunk_size, config.max_threads),
            chunk_size: config.chunk_size,
        }
    }
}

/// One worker per full chunk, capped at `max_threads`, and never fewer than one.
pub fn pool_size(drivers: usize, chunk_size: usize, max_threads: usize) -> usize {
    max_threads.min(drivers / chunk_size.max(1)).max(1)
}

/// Worker unit that turns a [`ChunkTask`] into negated score rows.
#[derive(Debug, Clone, Default)]
pub struct CostMatrixWorker<S = SuitabilityScorer> {
    scorer: S,
}

impl<S: Scorer> CostMatrixWorker<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }
}

impl<S: Scorer + 'static> WorkerUnit for CostMatrixWorker<S> {
    type Task = ChunkTask;
    type Output = ChunkRows;

    fn execute(&mut self, task: ChunkTask) -> Result<ChunkRows, WorkerFailure> {
        cost_rows(&self.scorer, &task.drivers, &task.destinations).map_err(WorkerFailure::from)
    }
}

/// Computes cost matrices with an injected scorer and configuration.
#[derive(Debug, Clone, Default)]
pub struct JobMapper<S = SuitabilityScorer> {
    config: MatrixConfig,
    scorer: S,
}

impl JobMapper<SuitabilityScorer> {
    pub fn new(config: MatrixConfig) -> Self {
        Self::with_scorer(config, SuitabilityScorer::new())
    }
}

impl<S: Scorer + Clone + 'static> JobMapper<S> {
    pub fn with_scorer(config: MatrixConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Negated suitability for every driver (rows) against every destination
    /// (columns), in input order.
    pub fn map(
        &self,
        drivers: &[String],
        destinations: &[String],
    ) -> Result<ScoreMatrix, MatrixError> {
        self.config
            .validate()
            .map_err(|err| MatrixError::InvalidConfig(err.to_string()))?;

        let strategy = ExecutionStrategy::select(drivers.len(), destinations.len(), &self.config);
        debug!(
            drivers = drivers.len(),
            destinations = destinations.len(),
            ?strategy,
            "computing cost matrix"
        );

        match strategy {
            ExecutionStrategy::Serial => {
                Ok(cost_rows(&self.scorer, drivers, destinations)?.into())
            }
            ExecutionStrategy::Parallel {
                workers,
                chunk_size,
            } => self.map_parallel(drivers, destinations, workers, chunk_size),
        }
    }

    fn map_parallel(
        &self,
        drivers: &[String],
        destinations: &[String],
        workers: usize,
        chunk_size: usize,
    ) -> Result<ScoreMatrix, MatrixError> {
        let plan = compute_chunk_plan(drivers.len(), chunk_size)?;
        let scorer = self.scorer.clone();
        let mut pool = WorkerPool::new(move || CostMatrixWorker::new(scorer.clone()), workers)?;
        info!(chunks = plan.len(), workers, "dispatching cost matrix chunks");

        let result = collect_chunks(&pool, &plan, drivers, destinations);
        pool.close();
        result
    }
}

/// Submit every chunk, then gather results in plan order.
fn collect_chunks<S: Scorer + 'static>(
    pool: &WorkerPool<CostMatrixWorker<S>>,
    plan: &[ChunkAssignment],
    drivers: &[String],
    destinations: &[String],
) -> Result<ScoreMatrix, MatrixError> {
    let mut task = ChunkTask {
        drivers: Vec::new(),
        destinations: destinations.to_vec(),
    };

    let mut pending = Vec::with_capacity(plan.len());
    for assignment in plan {
        task.drivers = drivers[assignment.range()].to_vec();
        pending.push((assignment, pool.run(&task)?));
    }

    let mut matrix = ScoreMatrix::with_capacity(drivers.len());
    for (assignment, handle) in pending {
        let rows = handle.wait().map_err(|err| match err {
            TaskError::Failed(failure) => {
                warn!(chunk_id = assignment.chunk_id, %failure, "chunk failed");
                MatrixError::Worker {
                    chunk_id: assignment.chunk_id,
                    failure,
                }
            }
            TaskError::Pool(err) => MatrixError::Pool(err),
        })?;

        if rows.len() != assignment.len() {
            return Err(MatrixError::Chunking(format!(
                "chunk {} returned {} rows, expected {}",
                assignment.chunk_id,
                rows.len(),
                assignment.len()
            )));
        }
        matrix.append_rows(rows);
    }

    Ok(matrix)
}

/// Cost matrix for `drivers` × `destinations` using the default scorer.
///
/// Cells hold `-score(driver, destination)`. `max_threads` bounds the worker
/// pool used for large inputs; [`DEFAULT_MAX_THREADS`] is the usual choice.
pub fn map_jobs(
    drivers: &[String],
    destinations: &[String],
    max_threads: usize,
) -> Result<ScoreMatrix, MatrixError> {
    JobMapper::new(MatrixConfig::default().with_max_threads(max_threads))
        .map(drivers, destinations)
}

/// [`map_jobs`] with [`DEFAULT_MAX_THREADS`].
pub fn map_jobs_default(
    drivers: &[String],
    destinations: &[String],
) -> Result<ScoreMatrix, MatrixError> {
    map_jobs(drivers, destinations, DEFAULT_MAX_THREADS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::StreetNameParser;
    use crate::error::{AddressError, STREET_NAME_NOT_FOUND_ERROR};

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Driver {}{}", "x".repeat(i % 7), i)).collect()
    }

    fn addresses(count: usize) -> Vec<String> {
        let streets = [
            "Batz Forest",
            "Candida Ford",
            "Flatley Glen",
            "Lang Forest",
            "Rylee Estates",
        ];
        (0..count)
            .map(|i| {
                let street = streets[i % streets.len()];
                format!("{} {street} Apt. {i}, Luna, NM 87120", 100 + i)
            })
            .collect()
    }

    #[test]
    fn strategy_threshold_and_pool_floor() {
        let config = MatrixConfig::default();
        assert_eq!(ExecutionStrategy::select(5, 5, &config), ExecutionStrategy::Serial);
        assert_eq!(
            ExecutionStrategy::select(1_499, 100, &config),
            ExecutionStrategy::Serial
        );
        assert_eq!(
            ExecutionStrategy::select(1_500, 100, &config),
            ExecutionStrategy::Parallel {
                workers: 4,
                chunk_size: 100
            }
        );
        // Fewer drivers than one chunk still gets a single worker.
        assert_eq!(
            ExecutionStrategy::select(50, 10_000, &config),
            ExecutionStrategy::Parallel {
                workers: 1,
                chunk_size: 100
            }
        );
        assert_eq!(
            ExecutionStrategy::select(250, 1_000, &config),
            ExecutionStrategy::Parallel {
                workers: 2,
                chunk_size: 100
            }
        );
        assert_eq!(
            ExecutionStrategy::select(0, 1_000_000, &config.clone().with_parallel_threshold(0)),
            ExecutionStrategy::Serial
        );
    }

    #[test]
    fn pool_size_caps_and_floors() {
        assert_eq!(pool_size(1_000, 100, 4), 4);
        assert_eq!(pool_size(300, 100, 4), 3);
        assert_eq!(pool_size(99, 100, 4), 1);
        assert_eq!(pool_size(10_000, 100, 16), 16);
    }

    #[test]
    fn serial_matrix_has_input_shape_and_negated_scores() {
        let drivers = names(6);
        let destinations = addresses(4);
        let matrix = JobMapper::new(MatrixConfig::default())
            .map(&drivers, &destinations)
            .unwrap();

        assert_eq!(matrix.rows(), 6);
        assert_eq!(matrix.columns(), 4);
        for (i, driver) in drivers.iter().enumerate() {
            for (j, destination) in destinations.iter().enumerate() {
                let expected = -crate::score::score(driver, destination).unwrap();
                assert_eq!(matrix.get(i, j), Some(expected));
            }
        }
    }

    #[test]
    fn parallel_matches_serial_with_small_chunks() {
        let drivers = names(23);
        let destinations = addresses(9);
        let serial = JobMapper::new(MatrixConfig::default())
            .map(&drivers, &destinations)
            .unwrap();

        let config = MatrixConfig::default()
            .with_parallel_threshold(1)
            .with_chunk_size(5)
            .with_max_threads(3);
        assert_eq!(
            ExecutionStrategy::select(23, 9, &config),
            ExecutionStrategy::Parallel {
                workers: 3,
                chunk_size: 5
            }
        );
        let parallel = JobMapper::new(config).map(&drivers, &destinations).unwrap();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn empty_inputs_yield_empty_rows() {
        let mapper = JobMapper::new(MatrixConfig::default());
        assert!(mapper.map(&[], &addresses(3)).unwrap().is_empty());

        let matrix = mapper.map(&names(3), &[]).unwrap();
        assert_eq!(matrix.rows(), 3);
        assert!(matrix.as_rows().iter().all(Vec::is_empty));
    }

    #[derive(Clone)]
    struct FailsOn(&'static str);

    impl StreetNameParser for FailsOn {
        fn street_name(&self, address: &str) -> Result<String, AddressError> {
            if address.contains(self.0) {
                Err(AddressError::StreetNameNotFound)
            } else {
                crate::address::street_name(address)
            }
        }
    }

    #[test]
    fn failing_chunk_fails_the_whole_matrix() {
        let drivers = names(12);
        let mut destinations = addresses(3);
        destinations[1] = "poison".to_string();
        let config = MatrixConfig::default()
            .with_parallel_threshold(1)
            .with_chunk_size(4);
        let mapper =
            JobMapper::with_scorer(config, SuitabilityScorer::with_parser(FailsOn("poison")));

        match mapper.map(&drivers, &destinations) {
            Err(MatrixError::Worker { chunk_id, failure }) => {
                assert_eq!(chunk_id, 0);
                assert_eq!(failure.error_code, STREET_NAME_NOT_FOUND_ERROR);
            }
            other => panic!("expected worker failure, got {other:?}"),
        }
    }

    #[test]
    fn serial_path_propagates_address_errors() {
        let destinations = vec!["".to_string()];
        let result = JobMapper::new(MatrixConfig::default()).map(&names(2), &destinations);
        assert!(matches!(
            result,
            Err(MatrixError::Address(AddressError::StreetNameNotFound))
        ));
    }

    #[test]
    fn zero_threads_is_rejected() {
        let result = map_jobs(&names(2), &addresses(2), 0);
        assert!(matches!(result, Err(MatrixError::InvalidConfig(_))));
    }

    #[test]
    fn cost_worker_scores_its_chunk() {
        let mut worker = CostMatrixWorker::new(SuitabilityScorer::new());
        let rows = worker
            .execute(ChunkTask {
                drivers: vec!["Carrie Collier".to_string()],
                destinations: vec!["45262 Lang Forest Apt. 274".to_string()],
            })
            .unwrap();
        assert_eq!(rows, vec![vec![-13.5]]);
    }
}
