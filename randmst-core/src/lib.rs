//! Monte Carlo estimation of the expected weight of a random minimum
//! spanning tree.
//!
//! Each trial draws `numpoints` points uniformly from the unit cube
//! `[0, 1)^dimension` (or, for `dimension == 0`, a complete graph with
//! independent uniform `[0, 1)` edge weights), builds the MST over the
//! implicit complete graph with dense Prim's, and records its total weight.
//! The estimate is the mean over `numtrials` trials.
//!
//! ```
//! use randmst_core::SimulationBuilder;
//!
//! let result = SimulationBuilder::new()
//!     .with_point_count(256)
//!     .with_trial_count(2)
//!     .with_dimension(2)
//!     .with_seed(1)
//!     .build()?
//!     .run()?;
//! assert!(result.mean_weight() > 0.0);
//! # Ok::<(), randmst_core::SimulationError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod memory;
mod mst;
mod result;
mod simulation;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::SimulationBuilder,
    error::{Result, SimulationError, SimulationErrorCode},
    memory::estimate_trial_bytes,
    mst::{Admission, Extraction, MstBuilder, prim_mst_weight, prim_mst_with_observer},
    result::SimulationResult,
    simulation::{Simulation, run_simulation},
    weight::{
        CachedUniform, EuclideanCloud, FreshUniform, PointCloudGenerator, TrialWeights,
        UniformWeights, WeightModel,
    },
};
