//! Key paths: reified references to a field of a record.
//!
//! A key path names one field of a root type so that the field can be read
//! and copy-updated generically. It is a value: it can be stored, cloned,
//! passed to [`over`](crate::setter::over) and [`set`](crate::setter::set),
//! and appended to another key path to reach a nested field.
//!
//! # Laws
//!
//! Every key path must satisfy three laws:
//!
//! 1. **`GetSet`**: writing back what was read yields the original.
//!    ```text
//!    path.set(root, path.get(&root).clone()) == root
//!    ```
//!
//! 2. **`SetGet`**: reading after a write yields the written value.
//!    ```text
//!    path.get(&path.set(root, value)) == &value
//!    ```
//!
//! 3. **`SetSet`**: the second of two writes wins.
//!    ```text
//!    path.set(path.set(root, v1), v2) == path.set(root, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use setters::setter::KeyPath;
//! use setters::key_path;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, location: String, age: u32 }
//!
//! let age = key_path!(User, age);
//!
//! let user = User { name: "Blob".to_string(), location: "NYC".to_string(), age: 42 };
//! assert_eq!(*age.get(&user), 42);
//!
//! let older = age.set(user, 43);
//! assert_eq!(older.age, 43);
//! assert_eq!(older.name, "Blob");
//! ```

use std::marker::PhantomData;

/// A reference to a field of type `V` inside a root of type `R`.
///
/// # Type Parameters
///
/// - `R`: The root type (the whole record)
/// - `V`: The value type (the named field)
pub trait KeyPath<R, V> {
    /// Reads the field.
    fn get<'a>(&self, root: &'a R) -> &'a V;

    /// Returns `root` with the field replaced by `value`.
    ///
    /// The root is taken by value: the caller's record is never changed
    /// behind its back, and a caller that needs the original keeps a clone.
    fn set(&self, root: R, value: V) -> R;

    /// Returns `root` with the field replaced by `transform(field)`.
    ///
    /// # Example
    ///
    /// ```
    /// use setters::setter::KeyPath;
    /// use setters::key_path;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { name: String, age: u32 }
    ///
    /// let user = User { name: "Blob".to_string(), age: 42 };
    /// let shouted = key_path!(User, name).modify(user, |name| name.to_uppercase());
    /// assert_eq!(shouted.name, "BLOB");
    /// ```
    fn modify<F>(&self, root: R, transform: F) -> R
    where
        F: FnOnce(V) -> V,
        V: Clone,
    {
        let current = self.get(&root).clone();
        self.set(root, transform(current))
    }

    /// Extends this key path with one that starts at its value type.
    ///
    /// `user_address.appending(address_city)` names `user.address.city`.
    ///
    /// # Example
    ///
    /// ```
    /// use setters::setter::KeyPath;
    /// use setters::key_path;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { name: String, address: Address }
    ///
    /// let city = key_path!(User, address).appending(key_path!(Address, city));
    ///
    /// let user = User {
    ///     name: "Blob".to_string(),
    ///     address: Address { city: "NYC".to_string() },
    /// };
    ///
    /// assert_eq!(*city.get(&user), "NYC");
    /// let moved = city.set(user, "Brooklyn".to_string());
    /// assert_eq!(moved.address.city, "Brooklyn");
    /// assert_eq!(moved.name, "Blob");
    /// ```
    fn appending<W, K>(self, next: K) -> ComposedKeyPath<Self, K, V>
    where
        Self: Sized,
        K: KeyPath<V, W>,
    {
        ComposedKeyPath::new(self, next)
    }
}

impl<R, V, K> KeyPath<R, V> for &K
where
    K: KeyPath<R, V> + ?Sized,
{
    fn get<'a>(&self, root: &'a R) -> &'a V {
        (**self).get(root)
    }

    fn set(&self, root: R, value: V) -> R {
        (**self).set(root, value)
    }
}

/// A key path built from a getter and a copy-with setter.
///
/// The [`key_path!`](crate::key_path!) macro and `#[derive(KeyPaths)]`
/// produce this type. It can also be written by hand for fields that are
/// only reachable through accessors.
///
/// # Example
///
/// ```
/// use setters::setter::{KeyPath, FunctionKeyPath};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = FunctionKeyPath::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x.get(&point), 10);
/// assert_eq!(x.set(point, 11), Point { x: 11, y: 20 });
/// ```
pub struct FunctionKeyPath<R, V, G, S>
where
    G: Fn(&R) -> &V,
    S: Fn(R, V) -> R,
{
    getter: G,
    setter: S,
    _marker: PhantomData<fn(R, V) -> R>,
}

impl<R, V, G, S> FunctionKeyPath<R, V, G, S>
where
    G: Fn(&R) -> &V,
    S: Fn(R, V) -> R,
{
    /// Creates a key path from a getter and a setter.
    ///
    /// The setter receives the root by value and returns the updated root.
    #[must_use]
    pub const fn new(getter: G, setter: S) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<R, V, G, S> KeyPath<R, V> for FunctionKeyPath<R, V, G, S>
where
    G: Fn(&R) -> &V,
    S: Fn(R, V) -> R,
{
    fn get<'a>(&self, root: &'a R) -> &'a V {
        (self.getter)(root)
    }

    fn set(&self, root: R, value: V) -> R {
        (self.setter)(root, value)
    }
}

impl<R, V, G, S> Clone for FunctionKeyPath<R, V, G, S>
where
    G: Fn(&R) -> &V + Clone,
    S: Fn(R, V) -> R + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R, V, G, S> std::fmt::Debug for FunctionKeyPath<R, V, G, S>
where
    G: Fn(&R) -> &V,
    S: Fn(R, V) -> R,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionKeyPath")
            .finish_non_exhaustive()
    }
}

/// Two key paths joined end to end.
///
/// `M` is the intermediate type: the value type of `outer` and the root
/// type of `inner`. Setting through the composed path clones the
/// intermediate value, updates it with `inner`, and writes it back with
/// `outer`. `M` must be `'static`, so it cannot hold borrowed data.
pub struct ComposedKeyPath<K1, K2, M> {
    outer: K1,
    inner: K2,
    _marker: PhantomData<fn(M) -> M>,
}

impl<K1, K2, M> ComposedKeyPath<K1, K2, M> {
    /// Joins `outer` and `inner`.
    #[must_use]
    pub const fn new(outer: K1, inner: K2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<R, M, V, K1, K2> KeyPath<R, V> for ComposedKeyPath<K1, K2, M>
where
    K1: KeyPath<R, M>,
    K2: KeyPath<M, V>,
    M: Clone + 'static,
{
    fn get<'a>(&self, root: &'a R) -> &'a V {
        self.inner.get(self.outer.get(root))
    }

    fn set(&self, root: R, value: V) -> R {
        let intermediate = self.outer.get(&root).clone();
        let updated = self.inner.set(intermediate, value);
        self.outer.set(root, updated)
    }
}

impl<K1: Clone, K2: Clone, M> Clone for ComposedKeyPath<K1, K2, M> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K1: std::fmt::Debug, K2: std::fmt::Debug, M> std::fmt::Debug for ComposedKeyPath<K1, K2, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedKeyPath")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

type PointGetter = fn(&(i32, i32)) -> &i32;
type PointSetter = fn((i32, i32), i32) -> (i32, i32);

static_assertions::assert_impl_all!(
    FunctionKeyPath<(i32, i32), i32, PointGetter, PointSetter>: Clone, Send, Sync
);
static_assertions::assert_impl_all!(
    ComposedKeyPath<
        FunctionKeyPath<(i32, i32), i32, PointGetter, PointSetter>,
        FunctionKeyPath<(i32, i32), i32, PointGetter, PointSetter>,
        (i32, i32),
    >: Clone, Send, Sync
);

/// Creates a key path for a struct field.
///
/// # Syntax
///
/// ```text
/// key_path!(StructType, field)
/// key_path!(StructType, field.nested_field)
/// key_path!(StructType<Generic>, field)
/// ```
///
/// A dotted field list reaches into nested structs directly, without
/// cloning intermediate values.
///
/// # Example
///
/// ```
/// use setters::setter::KeyPath;
/// use setters::key_path;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { city: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { age: u32, address: Address }
///
/// let user = User { age: 42, address: Address { city: "NYC".to_string() } };
///
/// let age = key_path!(User, age);
/// let city = key_path!(User, address.city);
///
/// assert_eq!(*age.get(&user), 42);
/// assert_eq!(*city.get(&user), "NYC");
///
/// let moved = city.set(user, "LA".to_string());
/// assert_eq!(moved.address.city, "LA");
/// ```
#[macro_export]
macro_rules! key_path {
    ($root_type:ident, $($field:ident).+) => {
        $crate::setter::FunctionKeyPath::new(
            |root: &$root_type| &root.$($field).+,
            |mut root: $root_type, value| {
                root.$($field).+ = value;
                root
            },
        )
    };
    ($root_type:ident < $($generic:ty),+ >, $($field:ident).+) => {
        $crate::setter::FunctionKeyPath::new(
            |root: &$root_type<$($generic),+>| &root.$($field).+,
            |mut root: $root_type<$($generic),+>, value| {
                root.$($field).+ = value;
                root
            },
        )
    };
    ($root_type:path, $($field:ident).+) => {
        $crate::setter::FunctionKeyPath::new(
            |root: &$root_type| &root.$($field).+,
            |mut root: $root_type, value| {
                root.$($field).+ = value;
                root
            },
        )
    };
}
