// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_aabb --heading-base-level=0

//! Canopy AABB: d-dimensional axis-aligned bounding boxes.
//!
//! This crate provides the [`Aabb`] value type used throughout Canopy: a pair
//! of lower/upper coordinate vectors of equal length `d ≥ 2`, with the
//! invariant `lower[i] <= upper[i]` on every axis. All operations are pure
//! and run in O(d).
//!
//! The surface measure ([`Aabb::surface_measure`]) is the quantity minimized
//! by surface-area-heuristic tree construction: the perimeter in 2D, the
//! surface area in 3D, and the sum of face measures (times two) in higher
//! dimensions.
//!
//! Coordinates are stored inline for `d <= 4` ([`Coords`] is a
//! `SmallVec<[f64; 4]>`), so the common 2D/3D cases never touch the heap.
//!
//! # Example
//!
//! ```rust
//! use canopy_aabb::Aabb;
//!
//! let a = Aabb::new(&[0.0, 0.0], &[10.0, 10.0])?;
//! let b = Aabb::from_center_radius(&[5.0, 5.0], 1.0)?;
//! assert!(a.contains(&b));
//! assert!(a.overlaps(&b, true));
//!
//! // Perimeter in 2D.
//! assert_eq!(a.surface_measure(), 40.0);
//! # Ok::<(), canopy_aabb::AabbError>(())
//! ```
//!
//! ## Float semantics
//!
//! This crate assumes no NaNs in coordinates. Debug builds may assert.
//! A zero-extent box (`lower == upper`) is legal: a point is a degenerate
//! AABB with surface measure 0.

#![no_std]

extern crate alloc;

use smallvec::SmallVec;
use thiserror::Error;

/// Inline coordinate storage: up to four dimensions without heap allocation.
pub type Coords = SmallVec<[f64; 4]>;

/// Errors from AABB construction.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AabbError {
    /// The lower bound exceeds the upper bound on some axis.
    #[error("lower bound exceeds upper bound on axis {axis}")]
    Unordered {
        /// First axis on which the bounds are inverted.
        axis: usize,
    },
    /// A coordinate slice has the wrong length.
    #[error("expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Number of coordinates required.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },
}

/// A d-dimensional axis-aligned bounding box.
///
/// Maintains `lower[i] <= upper[i]` for every axis; construction through
/// [`Aabb::new`] validates this unconditionally.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb {
    lower: Coords,
    upper: Coords,
}

impl Aabb {
    /// Create an AABB from lower and upper corner coordinates.
    ///
    /// Errors if the slices have different lengths or if `lower[i] > upper[i]`
    /// on any axis. `lower == upper` is accepted (a degenerate point box).
    pub fn new(lower: &[f64], upper: &[f64]) -> Result<Self, AabbError> {
        if lower.len() != upper.len() {
            return Err(AabbError::DimensionMismatch {
                expected: lower.len(),
                actual: upper.len(),
            });
        }
        for (axis, (l, u)) in lower.iter().zip(upper).enumerate() {
            debug_assert!(l.is_finite() && u.is_finite(), "AABB bounds must be finite");
            if l > u {
                return Err(AabbError::Unordered { axis });
            }
        }
        Ok(Self {
            lower: Coords::from_slice(lower),
            upper: Coords::from_slice(upper),
        })
    }

    /// Create the AABB of a sphere given its center and radius.
    ///
    /// Errors if the radius is negative. A zero radius yields a point box.
    pub fn from_center_radius(center: &[f64], radius: f64) -> Result<Self, AabbError> {
        debug_assert!(radius.is_finite(), "radius must be finite");
        if radius < 0.0 {
            return Err(AabbError::Unordered { axis: 0 });
        }
        let lower: Coords = center.iter().map(|c| c - radius).collect();
        let upper: Coords = center.iter().map(|c| c + radius).collect();
        Ok(Self { lower, upper })
    }

    /// Create a degenerate point box.
    pub fn point(position: &[f64]) -> Self {
        Self {
            lower: Coords::from_slice(position),
            upper: Coords::from_slice(position),
        }
    }

    /// Number of axes.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// The lower corner.
    #[inline]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// The upper corner.
    #[inline]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// The center point, `(lower + upper) / 2`.
    pub fn center(&self) -> Coords {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(l, u)| 0.5 * (l + u))
            .collect()
    }

    /// Width along one axis.
    #[inline]
    pub fn extent(&self, axis: usize) -> f64 {
        self.upper[axis] - self.lower[axis]
    }

    /// The smallest AABB enclosing `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        debug_assert_eq!(
            self.dimension(),
            other.dimension(),
            "mixed-dimension AABB operation"
        );
        let lower = self
            .lower
            .iter()
            .zip(&other.lower)
            .map(|(a, b)| a.min(*b))
            .collect();
        let upper = self
            .upper
            .iter()
            .zip(&other.upper)
            .map(|(a, b)| a.max(*b))
            .collect();
        Self { lower, upper }
    }

    /// Whether this AABB overlaps another.
    ///
    /// With `touch_is_overlap` set, boxes that merely share a boundary count
    /// as overlapping; otherwise the interiors must intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopy_aabb::Aabb;
    ///
    /// let a = Aabb::new(&[0.0, 0.0], &[10.0, 10.0])?;
    /// let b = Aabb::new(&[10.0, 0.0], &[20.0, 10.0])?;
    /// assert!(a.overlaps(&b, true));
    /// assert!(!a.overlaps(&b, false));
    /// # Ok::<(), canopy_aabb::AabbError>(())
    /// ```
    pub fn overlaps(&self, other: &Self, touch_is_overlap: bool) -> bool {
        debug_assert_eq!(
            self.dimension(),
            other.dimension(),
            "mixed-dimension AABB operation"
        );
        if touch_is_overlap {
            self.lower
                .iter()
                .zip(&self.upper)
                .zip(other.lower.iter().zip(&other.upper))
                .all(|((l, u), (ol, ou))| l <= ou && u >= ol)
        } else {
            self.lower
                .iter()
                .zip(&self.upper)
                .zip(other.lower.iter().zip(&other.upper))
                .all(|((l, u), (ol, ou))| l < ou && u > ol)
        }
    }

    /// Whether this AABB fully contains another (boundary contact included).
    pub fn contains(&self, other: &Self) -> bool {
        debug_assert_eq!(
            self.dimension(),
            other.dimension(),
            "mixed-dimension AABB operation"
        );
        self.lower
            .iter()
            .zip(&other.lower)
            .all(|(a, b)| a <= b)
            && self.upper.iter().zip(&other.upper).all(|(a, b)| a >= b)
    }

    /// The surface measure used as the SAH cost.
    ///
    /// Perimeter for `d = 2`, surface area for `d = 3`, and in general twice
    /// the sum over axes of the product of the extents of the other axes.
    pub fn surface_measure(&self) -> f64 {
        match self.dimension() {
            2 => 2.0 * (self.extent(0) + self.extent(1)),
            3 => {
                let (wx, wy, wz) = (self.extent(0), self.extent(1), self.extent(2));
                2.0 * (wx * wy + wx * wz + wy * wz)
            }
            d => {
                let mut sum = 0.0;
                for i in 0..d {
                    let mut face = 1.0;
                    for j in 0..d {
                        if j != i {
                            face *= self.extent(j);
                        }
                    }
                    sum += face;
                }
                2.0 * sum
            }
        }
    }

    /// Inflate by `skin * extent` on every side of every axis.
    ///
    /// This is the "fat AABB" used by dynamic trees: storing a slightly
    /// inflated leaf box lets small motions skip structural updates.
    pub fn fattened(&self, skin: f64) -> Self {
        debug_assert!(skin >= 0.0, "skin ratio must be non-negative");
        let lower = self
            .lower
            .iter()
            .zip(&self.upper)
            .map(|(l, u)| l - skin * (u - l))
            .collect();
        let upper = self
            .lower
            .iter()
            .zip(&self.upper)
            .map(|(l, u)| u + skin * (u - l))
            .collect();
        Self { lower, upper }
    }

    /// Translate by an offset vector.
    pub fn shifted(&self, offset: &[f64]) -> Self {
        debug_assert_eq!(
            self.dimension(),
            offset.len(),
            "offset length must match the AABB dimension"
        );
        let lower = self.lower.iter().zip(offset).map(|(l, o)| l + o).collect();
        let upper = self.upper.iter().zip(offset).map(|(u, o)| u + o).collect();
        Self { lower, upper }
    }
}
