// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_tree --heading-base-level=0

//! Canopy Tree: a dynamic AABB tree for broad-phase collision detection.
//!
//! Canopy Tree is a self-balancing binary tree spatial index over the fat
//! bounding boxes of moving particles. It is the structure a physics broad
//! phase or a proximity query in a simulation code sits on:
//!
//! - Insert, move, and remove particles with expected `O(log n)` structural
//!   cost; surface-area-heuristic insertion plus AVL-style rotations keep the
//!   tree shallow.
//! - Leaf boxes are stored *fattened* by a configurable skin, so motions
//!   smaller than the skin are structural no-ops ([`Tree::update`] returns
//!   `false`).
//! - Range queries ([`Tree::query_aabb`]) and per-particle neighbor queries
//!   ([`Tree::query`]) walk the hierarchy in `O(k + log n)`.
//! - Optional per-axis periodic boundaries: positions wrap into the box, and
//!   queries near a boundary are replicated across periodic images (no ghost
//!   particles), with results deduplicated.
//!
//! Nodes live in an index-addressed pool with an intrusive free list; growing
//! the pool never invalidates node references.
//!
//! # Example
//!
//! ```rust
//! use canopy_tree::{Aabb, Tree, TreeBuilder};
//!
//! let mut tree: Tree = TreeBuilder::new(2).skin_thickness(0.1).build();
//! tree.insert(7, &[5.0, 5.0], 1.0)?;
//! tree.insert(3, &[5.5, 5.0], 1.0)?;
//!
//! // Neighbor candidates for particle 7 (excluding itself).
//! assert_eq!(tree.query(7)?, vec![3]);
//!
//! // A motion smaller than the skin changes nothing structurally.
//! assert!(!tree.update(7, &[5.05, 5.0], 1.0, false)?);
//!
//! // Range query over a caller box.
//! let hits = tree.query_aabb(&Aabb::new(&[0.0, 0.0], &[10.0, 10.0])?)?;
//! assert_eq!(hits.len(), 2);
//! # Ok::<(), canopy_tree::Error>(())
//! ```
//!
//! Periodic boundaries:
//!
//! ```rust
//! use canopy_tree::{Tree, TreeBuilder};
//!
//! let mut tree: Tree = TreeBuilder::new(2)
//!     .periodicity(&[true, true])
//!     .box_size(&[10.0, 10.0])
//!     .build();
//! tree.insert(1, &[0.1, 5.0], 0.5)?;
//! tree.insert(2, &[9.9, 5.0], 0.5)?;
//!
//! // Neighbors see each other across the boundary.
//! assert_eq!(tree.query(1)?, vec![2]);
//! # Ok::<(), canopy_tree::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! The tree is single-threaded mutable: all mutation goes through `&mut self`,
//! so concurrent mutation is unrepresentable. A quiescent tree may be read
//! from any number of threads (`Tree<P>` is `Send + Sync` for thread-safe
//! `P`). Parallelizing queries *during* mutation requires an external
//! read-write discipline and is out of scope here.
//!
//! ## Errors
//!
//! Recoverable misuse (duplicate ids, unknown ids, inverted bounds, wrong
//! vector lengths, particles outside a non-periodic box) is reported through
//! [`Error`] with the tree unchanged. Violations of the tree's own
//! invariants panic: they are bugs, and [`Tree::validate`] exists to surface
//! them in tests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod periodic;
mod pool;
mod tree;

pub use canopy_aabb::{Aabb, AabbError, Coords};
pub use error::Error;
pub use periodic::PeriodicBox;
pub use tree::{Tree, TreeBuilder};
