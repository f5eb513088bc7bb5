//! Setters for immutable updates.
//!
//! A setter takes a transform of a part and returns a transform of the
//! whole:
//!
//! ```text
//! (Part -> Part') -> (Whole -> Whole')
//! ```
//!
//! Everything here returns ordinary functions, so setters compose with the
//! tools in [`compose`](crate::compose) and lift over collections with
//! [`map`].
//!
//! # Available Setters
//!
//! - [`map_first`], [`map_second`], [`map_both`]: slots of a pair
//! - [`over`], [`set`], [`try_over`], [`prop`]: fields named by a [`KeyPath`]
//! - [`map`], [`filter`]: elements of a `Vec` (`par_map` with the `rayon` feature)
//!
//! # Key Paths
//!
//! - [`KeyPath`]: read and copy-update one field
//! - [`FunctionKeyPath`]: a key path from a getter and a setter
//! - [`ComposedKeyPath`]: two key paths joined with [`KeyPath::appending`]
//! - [`key_path!`](crate::key_path!): a key path from a field name
//! - `#[derive(KeyPaths)]`: one key path per field (feature `derive`)
//!
//! # Example
//!
//! ```
//! use setters::flow;
//! use setters::setter::{map, over, set};
//! use setters::key_path;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: String, location: String, age: u32 }
//!
//! let users = vec![
//!     User { name: "Blob".to_string(), location: "NYC".to_string(), age: 42 },
//!     User { name: "Blob Jr".to_string(), location: "NYC".to_string(), age: 7 },
//! ];
//!
//! let birthday_trip = map(flow!(
//!     over(key_path!(User, age), |age: u32| age + 1),
//!     set(key_path!(User, location), "LA".to_string()),
//! ));
//!
//! let updated = birthday_trip(users);
//! assert_eq!(updated[0].age, 43);
//! assert_eq!(updated[1].age, 8);
//! assert!(updated.iter().all(|user| user.location == "LA"));
//! ```
//!
//! # Laws
//!
//! - **Slot**: `map_first(f)((x, y)) == (f(x), y)` and `map_second(f)((x, y)) == (x, f(y))`
//! - **Disjoint commutativity**: setters on different slots or fields give
//!   the same result in either order
//! - **Constant idempotence**: `set(p, v)` applied twice equals applied once
//! - **Lifting**: `map(f)(xs)` has `xs.len()` elements and element `i` is `f(xs[i])`

mod key_path;
mod pair;
mod property;
mod sequence;

pub use key_path::ComposedKeyPath;
pub use key_path::FunctionKeyPath;
pub use key_path::KeyPath;

pub use pair::first_path;
pub use pair::map_both;
pub use pair::map_first;
pub use pair::map_second;
pub use pair::second_path;

pub use property::PropertySetter;
pub use property::over;
pub use property::prop;
pub use property::set;
pub use property::try_over;

#[cfg(feature = "rayon")]
pub use sequence::par_map;
pub use sequence::filter;
pub use sequence::map;
