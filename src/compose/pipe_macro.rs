//! The `pipe!` macro: `a |> f |> g` without an operator.

/// Pushes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, the repeated form of
/// [`apply`](crate::compose::apply). Each function is called exactly once,
/// so [`FnOnce`] is enough.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Function positions accept any expression, including closures and calls
/// that build setters:
///
/// ```
/// use setters::pipe;
/// use setters::setter::{map_first, map_second};
///
/// let pair = (42, "Hello");
///
/// let result = pipe!(
///     pair,
///     map_first(|x: i32| x + 1),
///     map_first(|x: i32| x * x),
///     map_first(|x: i32| x.to_string()),
///     map_second(|s: &str| s.len()),
/// );
/// assert_eq!(result, ("1849".to_string(), 5));
/// ```
///
/// # Relationship with flow!
///
/// `pipe!(x, f, g)` equals `flow!(f, g)(x)`; `pipe!` applies immediately,
/// [`flow!`](crate::flow!) builds the function.
///
/// ```
/// use setters::{flow, pipe};
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// assert_eq!(pipe!(2, incr, square), flow!(incr, square)(2));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        ($function)($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!(($function)($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        let result = pipe!(42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_pipe_inline_closure() {
        let result = pipe!(5, |x: i32| x * 2);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_pipe_left_to_right() {
        let incr = |x: i32| x + 1;
        let square = |x: i32| x * x;
        assert_eq!(pipe!(2, incr, square), 9);
        assert_eq!(pipe!(2, square, incr), 5);
    }

    #[test]
    fn test_pipe_trailing_comma() {
        let incr = |x: i32| x + 1;
        assert_eq!(pipe!(1, incr, incr,), 3);
    }
}
