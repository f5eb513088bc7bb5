//! Setters over the two slots of a pair.
//!
//! A setter turns a transform of a part into a transform of the whole.
//! For a pair `(A, C)` the parts are the two slots:
//!
//! ```text
//! (A -> B) -> ((A, C) -> (B, C))     map_first
//! (A -> B) -> ((C, A) -> (C, B))     map_second
//! ```
//!
//! Slot setters nest: `map_second(map_first(f))` reaches the first slot of a
//! pair stored in the second slot, and leaves every other part as it was.
//!
//! ```
//! use setters::setter::{map_first, map_second};
//!
//! let nested = ("Hello", (42, "World"));
//! let incr_inner = map_second(map_first(|x: i32| x + 1));
//! assert_eq!(incr_inner(nested), ("Hello", (43, "World")));
//! ```

use super::key_path::{FunctionKeyPath, KeyPath};

/// Lifts `transform` to the first slot of a pair.
///
/// The second slot is moved through as-is.
///
/// # Examples
///
/// ```
/// use setters::setter::map_first;
///
/// let pair = (42, "Hello");
/// assert_eq!(map_first(|x: i32| x + 1)(pair), (43, "Hello"));
///
/// // The slot may change type
/// assert_eq!(map_first(|x: i32| x.to_string())(pair), ("42".to_string(), "Hello"));
/// ```
#[inline]
pub fn map_first<A, B, C, F>(transform: F) -> impl Fn((A, C)) -> (B, C)
where
    F: Fn(A) -> B,
{
    move |(first, second)| (transform(first), second)
}

/// Lifts `transform` to the second slot of a pair.
///
/// The first slot is moved through as-is.
///
/// # Examples
///
/// ```
/// use setters::setter::map_second;
///
/// let pair = (42, "Hello");
/// assert_eq!(map_second(|s: &str| s.len())(pair), (42, 5));
/// ```
#[inline]
pub fn map_second<A, B, C, F>(transform: F) -> impl Fn((C, A)) -> (C, B)
where
    F: Fn(A) -> B,
{
    move |(first, second)| (first, transform(second))
}

/// Lifts one transform per slot to the whole pair.
///
/// `map_both(f, g)` behaves as `map_first(f)` followed by `map_second(g)`
/// (or the other way round: the slots are disjoint).
///
/// # Examples
///
/// ```
/// use setters::setter::map_both;
///
/// let pair = (42, "Hello");
/// assert_eq!(map_both(|x: i32| x * 2, |s: &str| s.len())(pair), (84, 5));
/// ```
#[inline]
pub fn map_both<A, B, C, D, F, G>(first_transform: F, second_transform: G) -> impl Fn((A, C)) -> (B, D)
where
    F: Fn(A) -> B,
    G: Fn(C) -> D,
{
    move |(first, second)| (first_transform(first), second_transform(second))
}

/// The key path to the first slot of a pair.
///
/// With it, [`over`](crate::setter::over) behaves as [`map_first`] for
/// transforms that keep the slot's type.
///
/// # Examples
///
/// ```
/// use setters::setter::{first_path, over, KeyPath};
///
/// let pair = (42, "Hello");
/// assert_eq!(*first_path::<i32, &str>().get(&pair), 42);
/// assert_eq!(over(first_path(), |x: i32| x + 1)(pair), (43, "Hello"));
/// ```
#[must_use]
pub fn first_path<A, B>() -> impl KeyPath<(A, B), A> + Clone {
    FunctionKeyPath::new(
        |pair: &(A, B)| &pair.0,
        |(_, second): (A, B), first: A| (first, second),
    )
}

/// The key path to the second slot of a pair.
///
/// # Examples
///
/// ```
/// use setters::setter::{second_path, set};
///
/// let pair = (42, "Hello");
/// assert_eq!(set(second_path(), "World")(pair), (42, "World"));
/// ```
#[must_use]
pub fn second_path<A, B>() -> impl KeyPath<(A, B), B> + Clone {
    FunctionKeyPath::new(
        |pair: &(A, B)| &pair.1,
        |(first, _): (A, B), second: B| (first, second),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incr(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn test_map_first_chain_equals_composed_transform() {
        let pair = (42, "Hello");
        let step_by_step = map_first(|x: i32| x.to_string())(map_first(|x: i32| x * x)(
            map_first(incr)(pair),
        ));
        let fused = map_first(|x: i32| (incr(x) * incr(x)).to_string())(pair);
        assert_eq!(step_by_step, fused);
        assert_eq!(fused, ("1849".to_string(), "Hello"));
    }

    #[test]
    fn test_map_second_reaches_nested_first() {
        let nested = ("Hello", (42, "World"));
        assert_eq!(map_second(map_first(incr))(nested), ("Hello", (43, "World")));
    }

    #[test]
    fn test_map_both_matches_sequential_setters() {
        let pair = (1, 2.5_f64);
        let both = map_both(incr, |x: f64| x * 2.0)(pair);
        let sequential = map_second(|x: f64| x * 2.0)(map_first(incr)(pair));
        assert_eq!(both, sequential);
    }

    #[test]
    fn test_slot_paths_are_disjoint() {
        let pair = (1, 'a');
        let first = first_path::<i32, char>();
        let second = second_path::<i32, char>();
        let updated = second.set(first.set(pair, 2), 'b');
        assert_eq!(updated, (2, 'b'));
        assert_eq!(*first.get(&updated), 2);
    }
}
