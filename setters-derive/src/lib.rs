//! Derive macro generating key paths for the `setters` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use setters::KeyPaths;
//! use setters::setter::{over, KeyPath};
//!
//! #[derive(Clone, KeyPaths)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! // Generated methods:
//! // - User::name_path() -> impl KeyPath<User, String> + Clone
//! // - User::age_path() -> impl KeyPath<User, u32> + Clone
//!
//! let user = User { name: "Blob".to_string(), age: 42 };
//! assert_eq!(*User::age_path().get(&user), 42);
//!
//! let older = over(User::age_path(), |age: u32| age + 1)(user);
//! assert_eq!(older.age, 43);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod key_paths;

use proc_macro::TokenStream;

/// Derive macro generating one key path per struct field.
///
/// For each field `foo` of type `T`, generates (with the field's visibility):
///
/// ```rust,ignore
/// impl StructName {
///     fn foo_path() -> impl KeyPath<StructName, T> + Clone { ... }
/// }
/// ```
///
/// # Requirements
///
/// - The struct must have named fields; tuple structs, unit structs, enums
///   and unions are rejected with a compile error
/// - `over` and `try_over` clone the focused field, so its type should
///   implement `Clone`
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, KeyPaths)]
/// struct Tagged<T> {
///     value: T,
///     tag: String,
/// }
///
/// let tagged = Tagged { value: 42, tag: "answer".to_string() };
/// let value = Tagged::<i32>::value_path();
/// assert_eq!(*value.get(&tagged), 42);
/// ```
#[proc_macro_derive(KeyPaths)]
pub fn derive_key_paths(input: TokenStream) -> TokenStream {
    key_paths::derive_key_paths_impl(input)
}
