/*!
ritter3d
========

**ritter3d** computes approximate bounding spheres of 3-dimensional point
clouds with Ritter's algorithm, written with the rust programming language.

The main entry points live in the [`bounding_volume`] module:

- [`bounding_volume::ritter_bounding_sphere`] performs the fast, "loose"
  computation.
- [`bounding_volume::ritter_bounding_sphere_strict`] additionally guarantees
  that every input point lies inside of the returned sphere.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/ritter3d/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unused_qualifications)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    ///
    /// The radius inflation applied by the loose Ritter pass is far below the
    /// precision of `f32`, so only double precision is supported.
    pub use f64 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};
    use na::U3;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
