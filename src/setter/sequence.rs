//! Lifting element transforms to whole sequences.
//!
//! ```text
//! (A -> B) -> (Vec<A> -> Vec<B>)     map
//! ```
//!
//! Any pair or property setter can be reused unchanged over a batch of
//! values this way.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Lifts an element transform to a transform over a `Vec`.
///
/// The result has the same length as the input, and element `i` of the
/// result is `transform(input[i])`.
///
/// # Examples
///
/// ```
/// use setters::flow;
/// use setters::setter::map;
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let lifted = flow!(map(incr), map(square));
/// assert_eq!(lifted(vec![1, 2, 3]), vec![4, 9, 16]);
///
/// // Same result, one pass
/// assert_eq!(map(flow!(incr, square))(vec![1, 2, 3]), vec![4, 9, 16]);
/// ```
pub fn map<A, B, F>(transform: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> B,
{
    move |values| values.into_iter().map(&transform).collect()
}

/// Lifts a predicate to a transform that keeps the matching elements.
///
/// The retained elements keep their relative order.
///
/// # Examples
///
/// ```
/// use setters::flow;
/// use setters::setter::{filter, map};
///
/// let even_successors = flow!(map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0));
/// assert_eq!(even_successors((1..=10).collect()), vec![2, 4, 6, 8, 10]);
/// ```
pub fn filter<A, P>(predicate: P) -> impl Fn(Vec<A>) -> Vec<A>
where
    P: Fn(&A) -> bool,
{
    move |values| values.into_iter().filter(|value| predicate(value)).collect()
}

/// Lifts an element transform to a `Vec`, running it on rayon's thread pool.
///
/// Elements are transformed independently; the result is in input order,
/// so `par_map(f)(values) == map(f)(values)` for every pure `f`.
///
/// # Examples
///
/// ```
/// use setters::setter::par_map;
///
/// let squares = par_map(|x: u64| x * x);
/// assert_eq!(squares((1..=5).collect()), vec![1, 4, 9, 16, 25]);
/// ```
#[cfg(feature = "rayon")]
pub fn par_map<A, B, F>(transform: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    A: Send,
    B: Send,
    F: Fn(A) -> B + Send + Sync,
{
    move |values| values.into_par_iter().map(&transform).collect()
}
