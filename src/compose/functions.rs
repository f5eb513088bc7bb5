//! Application and two-function composition.
//!
//! These are the function forms of the `|>`, `>>>` and `<<<` operators.
//! The [`Pipe`] and [`Composable`] extension traits expose the same
//! operations with method syntax, so that a chain reads in the order the
//! data flows.

/// Applies a value to a function.
///
/// `apply(a, f)` is `f(a)`, written with the value first. This is the
/// function form of `a |> f`.
///
/// # Examples
///
/// ```
/// use setters::compose::apply;
///
/// fn incr(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(apply(2, incr), 3);
/// assert_eq!(apply(apply(2, incr), incr), 4);
/// ```
#[inline]
pub fn apply<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// Composes two functions left-to-right.
///
/// Given `first: A -> B` and `second: B -> C`, returns `A -> C` defined as
/// `|x| second(first(x))`. Each call of the result calls `first` and then
/// `second`, exactly once each. This is the function form of
/// `first >>> second`.
///
/// # Laws
///
/// - **Associativity**:
///   `compose_forward(compose_forward(f, g), h) == compose_forward(f, compose_forward(g, h))`
///
/// # Examples
///
/// ```
/// use setters::compose::compose_forward;
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let incr_then_square = compose_forward(incr, square);
/// assert_eq!(incr_then_square(2), 9);
///
/// // Types flow through the chain
/// let describe = compose_forward(incr_then_square, |x: i32| x.to_string());
/// assert_eq!(describe(2), "9");
/// ```
#[inline]
pub fn compose_forward<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Composes two functions right-to-left.
///
/// Given `outer: B -> C` and `inner: A -> B`, returns `A -> C` defined as
/// `|x| outer(inner(x))`. This mirrors [`compose_forward`] and is the
/// function form of `outer <<< inner`: nested setter pipelines can be
/// written outside-in, in the order the structure is traversed.
///
/// # Examples
///
/// ```
/// use setters::compose::{compose_backward, compose_forward};
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let square_after_incr = compose_backward(square, incr);
/// assert_eq!(square_after_incr(2), 9);
/// assert_eq!(square_after_incr(2), compose_forward(incr, square)(2));
/// ```
#[inline]
pub fn compose_backward<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Method-syntax application for every value.
///
/// `value.pipe(f)` is `apply(value, f)`; see [`apply`]. Combined with
/// [`Composable::then`] it spells `a |> f >>> g` as `a.pipe(f.then(g))`,
/// which applies the composed function rather than composing with the
/// result of an application.
///
/// # Examples
///
/// ```
/// use setters::compose::Pipe;
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// assert_eq!(2_i32.pipe(incr).pipe(square), 9);
/// ```
pub trait Pipe: Sized {
    /// Applies `self` to `function`.
    #[inline]
    fn pipe<B, F>(self, function: F) -> B
    where
        F: FnOnce(Self) -> B,
    {
        function(self)
    }
}

impl<T> Pipe for T {}

/// Method-syntax composition for every `Fn(A) -> B`.
///
/// # Examples
///
/// ```
/// use setters::compose::Composable;
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let forward = incr.then(square);
/// let backward = incr.after(square);
///
/// assert_eq!(forward(3), 16);
/// assert_eq!(backward(3), 10);
/// ```
pub trait Composable<A, B>: Fn(A) -> B + Sized {
    /// Composes `self` with `next`, running `self` first.
    ///
    /// Equivalent to `compose_forward(self, next)`; see [`compose_forward`].
    #[inline]
    fn then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        compose_forward(self, next)
    }

    /// Composes `self` with `previous`, running `previous` first.
    ///
    /// Equivalent to `compose_backward(self, previous)`; see [`compose_backward`].
    #[inline]
    fn after<Z, G>(self, previous: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
    {
        compose_backward(self, previous)
    }
}

impl<A, B, F> Composable<A, B> for F where F: Fn(A) -> B {}
