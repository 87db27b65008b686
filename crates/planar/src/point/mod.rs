//! Immutable 2D point/vector with dual (Cartesian + polar) representation.
//!
//! Purpose
//! - One value type that can be built from either coordinate family and always
//!   carries both, canonicalized, plus a cached hash.
//! - Arithmetic that keeps exactness where the construction path allows it
//!   (colinear radius addition, trig-free scaling of Cartesian input).
//!
//! Layout
//! - `types`: struct, canonicalizing constructor, factories, accessors, `ORIGIN`.
//! - `ops`: add/subtract/multiply/divide/dot and the operator impls.
//! - `cmp`: equality, hash, natural order, `Display`.
//!
//! Code cross-refs: `crate::order` (named comparators), `crate::convert` (nalgebra).

mod cmp;
mod ops;
mod types;

pub use types::{Point, ORIGIN};
