// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for tree operations.

use canopy_aabb::AabbError;
use thiserror::Error;

/// Errors reported by [`Tree`][crate::Tree] operations.
///
/// Every error is rejected at the call site with the tree unchanged; there is
/// no partial mutation. Violations of the tree's internal invariants are not
/// represented here; they indicate a bug in the tree itself and panic.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Insertion of a particle id that is already present.
    #[error("particle is already present in the tree")]
    DuplicateParticle,
    /// An operation referenced a particle id that is not in the tree.
    #[error("particle is not present in the tree")]
    UnknownParticle,
    /// An AABB argument has `lower > upper` on some axis (or a negative
    /// radius).
    #[error("lower bound exceeds upper bound on axis {axis}")]
    InvalidAabb {
        /// First offending axis.
        axis: usize,
    },
    /// A coordinate argument has the wrong number of components.
    #[error("expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Number of coordinates required.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },
    /// The tight bounds leave the simulation box on a non-periodic axis.
    ///
    /// On periodic axes, positions wrap instead.
    #[error("bounds leave the simulation box on non-periodic axis {axis}")]
    OutsideBox {
        /// First offending axis.
        axis: usize,
    },
}

impl From<AabbError> for Error {
    fn from(err: AabbError) -> Self {
        match err {
            AabbError::Unordered { axis } => Self::InvalidAabb { axis },
            AabbError::DimensionMismatch { expected, actual } => {
                Self::DimensionMismatch { expected, actual }
            }
        }
    }
}
