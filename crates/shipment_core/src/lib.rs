//! Suitability cost matrices for assigning shipments to drivers.
//!
//! A driver's fit for a destination comes from a character-counting heuristic
//! over the driver's name and the destination's street name. [`map_jobs`]
//! scores every driver against every destination and returns the negated
//! scores as a cost matrix, fanning large inputs out over a bounded pool of
//! worker threads. [`solve_assignment`] consumes that matrix and picks the
//! optimal pairing.
//!
//! ```
//! use shipment_core::{map_jobs, solve_assignment, DEFAULT_MAX_THREADS};
//!
//! let drivers = vec!["Minnie Auer".to_string(), "Sue Johns".to_string()];
//! let destinations = vec![
//!     "23214 Batz Forest, Compton, FL 09954".to_string(),
//!     "6659 Rylee Estates Apt. 768, Mount Pleasant, WI 38130".to_string(),
//! ];
//!
//! let costs = map_jobs(&drivers, &destinations, DEFAULT_MAX_THREADS).unwrap();
//! assert_eq!(costs.get(0, 0), Some(-9.0));
//!
//! let assignment = solve_assignment(&costs);
//! assert_eq!(assignment.total_suitability, 14.0);
//! ```

pub mod address;
pub mod assignment;
pub mod config;
pub mod contract;
pub mod error;
pub mod jobs;
pub mod matrix;
pub mod pool;
pub mod rules;
pub mod score;
pub mod sharding;

pub use address::{street_name, street_name_from_value, StreetNameParser, UsAddressParser};
pub use assignment::{solve_assignment, Assignment};
pub use config::{MatrixConfig, DEFAULT_MAX_THREADS};
pub use error::{AddressError, ConfigError, MatrixError, PoolError, TaskError, WorkerFailure};
pub use jobs::{map_jobs, map_jobs_default, ExecutionStrategy, JobMapper};
pub use matrix::ScoreMatrix;
pub use pool::{TaskHandle, WorkerPool, WorkerUnit};
pub use score::{score, Scorer, SuitabilityScorer};
