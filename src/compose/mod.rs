//! Function application and composition utilities.
//!
//! This module provides functions, macros and extension traits for gluing
//! pure functions together in a point-free style.
//!
//! # Overview
//!
//! - [`apply`]: Apply a value to a function (`a |> f`)
//! - [`compose_forward`]: Glue two functions left-to-right (`f >>> g`)
//! - [`compose_backward`]: Glue two functions right-to-left (`f <<< g`)
//! - [`pipe!`]: Push a value through a chain of functions, left-to-right
//! - [`flow!`]: Build a left-to-right chain of any length
//! - [`compose!`]: Build a right-to-left chain of any length
//! - [`Pipe`] and [`Composable`]: method syntax for the same operations
//! - [`curry2!`] and [`curry3!`]: Convert multi-argument functions to curried form
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Forward composition
//!
//! ```
//! use setters::compose::compose_forward;
//!
//! fn incr(x: i32) -> i32 { x + 1 }
//! fn square(x: i32) -> i32 { x * x }
//!
//! // (incr >>> square)(2) = square(incr(2)) = 9
//! let incr_then_square = compose_forward(incr, square);
//! assert_eq!(incr_then_square(2), 9);
//! ```
//!
//! ## Application binds looser than composition
//!
//! `2 |> incr >>> square` reads as `2 |> (incr >>> square)`:
//!
//! ```
//! use setters::compose::{Composable, Pipe};
//!
//! fn incr(x: i32) -> i32 { x + 1 }
//! fn square(x: i32) -> i32 { x * x }
//!
//! assert_eq!(2_i32.pipe(incr.then(square)), 9);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `flow!(flow!(f, g), h) == flow!(f, flow!(g, h))`
//! - **Identity**: `flow!(identity, f) == f == flow!(f, identity)`
//! - **Mirror**: `compose_backward(g, f) == compose_forward(f, g)`
//! - **Application**: `apply(a, f) == f(a)`

mod compose_macro;
mod curry_macro;
mod functions;
mod pipe_macro;
mod utils;

pub use functions::{Composable, Pipe, apply, compose_backward, compose_forward};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::flow;
pub use crate::pipe;
