//! # setters
//!
//! Composable combinators for pure, immutable value transformations.
//!
//! ## Overview
//!
//! The library is a small toolkit for building updates out of functions
//! instead of assignments:
//!
//! - **Application and Composition**: [`apply`](compose::apply),
//!   [`compose_forward`](compose::compose_forward),
//!   [`compose_backward`](compose::compose_backward) and the `pipe!`,
//!   `flow!` and `compose!` macros
//! - **Pair Setters**: [`map_first`](setter::map_first) and
//!   [`map_second`](setter::map_second) lift a transform on one tuple slot
//!   into a transform on the whole tuple
//! - **Property Setters**: [`over`](setter::over) and [`set`](setter::set)
//!   lift a transform on one field, named by a [`KeyPath`](setter::KeyPath),
//!   into a transform on the whole record
//! - **Collection Lifting**: [`map`](setter::map) reuses any setter across a
//!   batch of values
//!
//! ## Feature Flags
//!
//! - `compose`: Application and composition utilities
//! - `setter`: Pair setters, key paths, property setters, collection lifting
//! - `derive`: `#[derive(KeyPaths)]`
//! - `rayon`: Parallel collection lifting
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use setters::prelude::*;
//! use setters::key_path;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: String, location: String, age: u32 }
//!
//! let birthday = over(key_path!(User, age), |age: u32| age + 1)
//!     .then(over(key_path!(User, name), |name: String| name.to_uppercase()));
//!
//! let user = User { name: "Blob".into(), location: "NYC".into(), age: 42 };
//! let updated = user.clone().pipe(&birthday);
//!
//! assert_eq!(updated.age, 43);
//! assert_eq!(updated.name, "BLOB");
//! assert_eq!(user.age, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the combinators, traits and key path types.
///
/// # Usage
///
/// ```rust
/// use setters::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "setter")]
    pub use crate::setter::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "setter")]
pub mod setter;

#[cfg(feature = "derive")]
pub use setters_derive::KeyPaths;
