//! Combinators that show up as building blocks of setter pipelines.
//!
//! - [`identity`]: the unit of composition, and the "leave this slot alone" transform
//! - [`constant`]: the transform behind [`set`](crate::setter::set)
//! - [`flip`]: swaps the arguments of a binary function

/// Returns the value unchanged.
///
/// `identity` is the unit of composition: `flow!(identity, f)` and
/// `flow!(f, identity)` both behave as `f`. As a setter transform it leaves
/// the focused part untouched.
///
/// # Examples
///
/// ```
/// use setters::compose::identity;
/// use setters::setter::map_first;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(map_first(identity)((1, "one")), (1, "one"));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`, ignoring its input.
///
/// This is the K combinator. Passing it to a setter replaces the focused
/// part regardless of what it held before.
///
/// # Examples
///
/// ```
/// use setters::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`, and `flip(flip(f))` behaves as `f`.
///
/// # Examples
///
/// ```
/// use setters::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let subtract_from = flip(subtract);
/// assert_eq!(subtract_from(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
