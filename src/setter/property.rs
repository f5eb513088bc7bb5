//! Property setters: field updates as composable functions.
//!
//! Given a [`KeyPath`] to a field of type `V` in a record `R`, a transform
//! `V -> V` becomes a transform `R -> R`:
//!
//! ```text
//! prop(path): (V -> V) -> (R -> R)
//! ```
//!
//! The returned functions are plain `Fn(R) -> R` values, so they chain with
//! [`flow!`](crate::flow!), [`Composable::then`](crate::compose::Composable::then)
//! and [`map`](crate::setter::map) like any other function. Setters on
//! different fields commute.
//!
//! # Examples
//!
//! ```
//! use setters::compose::Composable;
//! use setters::setter::{over, set};
//! use setters::key_path;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: String, location: String, age: u32 }
//!
//! let relocate = set(key_path!(User, location), "LA".to_string())
//!     .then(over(key_path!(User, age), |age: u32| age + 1));
//!
//! let user = User { name: "Blob".to_string(), location: "NYC".to_string(), age: 42 };
//! let moved = relocate(user.clone());
//!
//! assert_eq!(moved, User { name: "Blob".to_string(), location: "LA".to_string(), age: 43 });
//! assert_eq!(user.location, "NYC");
//! ```

use std::marker::PhantomData;

use super::key_path::KeyPath;

/// A key path waiting for the transform to apply to its field.
///
/// Created by [`prop`]. Cloning a `PropertySetter` clones its key path, so
/// one setter can produce several updates.
pub struct PropertySetter<K, R, V> {
    key_path: K,
    _marker: PhantomData<fn(R, V) -> R>,
}

/// Starts a property setter for the field named by `key_path`.
///
/// `prop(path).over(transform)` is the curried form of [`over`];
/// `prop(path).set(value)` the curried form of [`set`].
///
/// # Examples
///
/// ```
/// use setters::setter::prop;
/// use setters::key_path;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct User { name: String, age: u32 }
///
/// let age = prop(key_path!(User, age));
/// let birthday = age.clone().over(|age: u32| age + 1);
/// let reset = age.set(0);
///
/// let user = User { name: "Blob".to_string(), age: 42 };
/// assert_eq!(birthday(user.clone()).age, 43);
/// assert_eq!(reset(user).age, 0);
/// ```
pub const fn prop<R, V, K>(key_path: K) -> PropertySetter<K, R, V>
where
    K: KeyPath<R, V>,
{
    PropertySetter {
        key_path,
        _marker: PhantomData,
    }
}

impl<K, R, V> PropertySetter<K, R, V>
where
    K: KeyPath<R, V>,
{
    /// Lifts `transform` to the whole record. See [`over`].
    pub fn over<F>(self, transform: F) -> impl Fn(R) -> R
    where
        F: Fn(V) -> V,
        V: Clone,
    {
        over(self.key_path, transform)
    }

    /// Builds a setter that stores `value` in the field. See [`set`].
    pub fn set(self, value: V) -> impl Fn(R) -> R
    where
        V: Clone,
    {
        set(self.key_path, value)
    }

    /// Lifts a fallible `transform` to the whole record. See [`try_over`].
    pub fn try_over<E, F>(self, transform: F) -> impl Fn(R) -> Result<R, E>
    where
        F: Fn(V) -> Result<V, E>,
        V: Clone,
    {
        try_over(self.key_path, transform)
    }

    /// Returns the key path this setter targets.
    pub fn into_key_path(self) -> K {
        self.key_path
    }
}

impl<K: Clone, R, V> Clone for PropertySetter<K, R, V> {
    fn clone(&self) -> Self {
        Self {
            key_path: self.key_path.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K: std::fmt::Debug, R, V> std::fmt::Debug for PropertySetter<K, R, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PropertySetter")
            .field("key_path", &self.key_path)
            .finish()
    }
}

/// Lifts a transform of one field to a transform of the whole record.
///
/// The returned function reads the field through `key_path`, applies
/// `transform` to a clone of it, and returns the record with the field
/// replaced. Every other field is moved through unchanged.
///
/// # Examples
///
/// ```
/// use setters::setter::over;
/// use setters::key_path;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct User { name: String, location: String, age: u32 }
///
/// let user = User { name: "Blob".to_string(), location: "NYC".to_string(), age: 42 };
/// let incremented = over(key_path!(User, age), |age: u32| age + 1)(user.clone());
///
/// assert_eq!(incremented.age, 43);
/// assert_eq!(incremented.name, "Blob");
/// assert_eq!(user.age, 42);
/// ```
pub fn over<R, V, K, F>(key_path: K, transform: F) -> impl Fn(R) -> R
where
    K: KeyPath<R, V>,
    F: Fn(V) -> V,
    V: Clone,
{
    move |root| key_path.modify(root, &transform)
}

/// Builds a setter that stores a fixed value in one field.
///
/// Equivalent to `over(key_path, constant(value))`: the current field value
/// is ignored. The value is cloned on every application, so applying the
/// setter twice gives the same record as applying it once.
///
/// # Examples
///
/// ```
/// use setters::setter::set;
/// use setters::key_path;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Label { text: String, font_size: u32 }
///
/// let headline = set(key_path!(Label, font_size), 17);
///
/// let label = Label { text: "Title".to_string(), font_size: 12 };
/// assert_eq!(headline(label).font_size, 17);
/// ```
pub fn set<R, V, K>(key_path: K, value: V) -> impl Fn(R) -> R
where
    K: KeyPath<R, V>,
    V: Clone,
{
    move |root| key_path.set(root, value.clone())
}

/// Lifts a fallible transform of one field to a fallible transform of the record.
///
/// The error returned by `transform` is passed through unchanged; on error
/// the record is dropped.
///
/// # Examples
///
/// ```
/// use setters::setter::try_over;
/// use setters::key_path;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct User { name: String, age: u8 }
///
/// let birthday = try_over(key_path!(User, age), |age: u8| age.checked_add(1).ok_or("too old"));
///
/// let young = User { name: "Blob".to_string(), age: 42 };
/// assert_eq!(birthday(young).map(|user| user.age), Ok(43));
///
/// let ancient = User { name: "Blob".to_string(), age: u8::MAX };
/// assert_eq!(birthday(ancient), Err("too old"));
/// ```
pub fn try_over<R, V, E, K, F>(key_path: K, transform: F) -> impl Fn(R) -> Result<R, E>
where
    K: KeyPath<R, V>,
    F: Fn(V) -> Result<V, E>,
    V: Clone,
{
    move |root| {
        let updated = transform(key_path.get(&root).clone())?;
        Ok(key_path.set(root, updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        name: String,
        location: String,
        age: u32,
    }

    fn blob() -> User {
        User {
            name: "Blob".to_string(),
            location: "NYC".to_string(),
            age: 42,
        }
    }

    #[test]
    fn test_over_increments_age() {
        let incremented = over(crate::key_path!(User, age), |age: u32| age + 1)(blob());
        assert_eq!(
            incremented,
            User {
                age: 43,
                ..blob()
            }
        );
    }

    #[test]
    fn test_set_is_idempotent() {
        let relocate = set(crate::key_path!(User, location), "LA".to_string());
        assert_eq!(relocate(relocate(blob())), relocate(blob()));
    }

    #[test]
    fn test_prop_reused_through_clone() {
        let name = prop(crate::key_path!(User, name));
        let shout = name.clone().over(|name: String| name.to_uppercase());
        let rename = name.set("Blob Jr".to_string());

        assert_eq!(shout(blob()).name, "BLOB");
        assert_eq!(rename(blob()).name, "Blob Jr");
    }

    #[test]
    fn test_try_over_propagates_error() {
        let parse_error = try_over(crate::key_path!(User, name), |name: String| {
            if name.is_empty() {
                Err("empty name")
            } else {
                Ok(name)
            }
        });

        let nameless = User {
            name: String::new(),
            ..blob()
        };
        assert_eq!(parse_error(nameless), Err("empty name"));
        assert_eq!(parse_error(blob()), Ok(blob()));
    }
}
