//! Monte Carlo path simulation.
//!
//! This module turns return statistics into simulated future price paths.
//!
//! # Architecture
//!
//! ```text
//! SimulationEngine
//! ├── SimulationConfig     (horizon, simulation count, seed)
//! ├── SeededStreams        (one ProjectionRng per simulation)
//! ├── ProgressObserver     (completion events)
//! └── Orchestration
//!     ├── run_simulations()   (Rayon, index-ordered collect)
//!     └── simulate_path()     (multiplicative log-space walk)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pathcast_engine::mc::{SimulationConfig, SimulationEngine};
//! use pathcast_engine::stats::ReturnStatistics;
//!
//! let config = SimulationConfig::builder()
//!     .horizon_days(50)
//!     .simulation_count(5)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let engine = SimulationEngine::new(config);
//! let stats = ReturnStatistics::from_moments(0.0012, 0.0004);
//! let result = engine.run(250.0, &stats).unwrap();
//!
//! assert_eq!(result.len(), 5);
//! assert!(result.paths().iter().all(|p| p.len() == 51));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod paths;
pub mod progress;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_HORIZON_DAYS, MAX_SIMULATIONS};
pub use engine::{run_simulations, SimulationEngine, SimulationResult};
pub use error::ConfigError;
pub use paths::{simulate_path, SimulatedPath};
pub use progress::{NoProgress, ProgressObserver};
