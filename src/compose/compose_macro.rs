//! The `flow!` and `compose!` macros for chains of any length.
//!
//! `flow!` is the variadic [`compose_forward`](crate::compose::compose_forward)
//! (`f >>> g >>> h`), `compose!` the variadic
//! [`compose_backward`](crate::compose::compose_backward) (`f <<< g <<< h`).

/// Composes functions from left to right.
///
/// `flow!(f, g, h)(x)` is `h(g(f(x)))`: the leftmost function runs first.
///
/// # Syntax
///
/// - `flow!(f)` - Returns `f` unchanged
/// - `flow!(f, g)` - Returns `move |x| g(f(x))`
/// - `flow!(f, g, h, ...)` - Chains any number of functions
///
/// # Examples
///
/// ```
/// use setters::flow;
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let pipeline = flow!(incr, square, |x: i32| x.to_string());
/// let strings: Vec<String> = (1..=3).map(pipeline).collect();
/// assert_eq!(strings, vec!["4", "9", "16"]);
/// ```
///
/// Setters built with [`over`](crate::setter::over) chain the same way:
///
/// ```
/// use setters::{flow, key_path};
/// use setters::setter::over;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct User { name: String, age: u32 }
///
/// let birthday = flow!(
///     over(key_path!(User, age), |age: u32| age + 1),
///     over(key_path!(User, name), |name: String| name.to_uppercase()),
/// );
///
/// let user = User { name: "Blob".to_string(), age: 42 };
/// assert_eq!(birthday(user), User { name: "BLOB".to_string(), age: 43 });
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // flow!(f, g, h, ...) = flow!(f, flow!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::flow!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first, following mathematical notation. For nested setters this reads
/// outside-in, matching the order in which the structure is entered.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `move |x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Chains any number of functions
///
/// # Examples
///
/// ```
/// use setters::compose;
///
/// fn incr(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let square_after_incr = compose!(square, incr);
/// assert_eq!(square_after_incr(2), 9);
/// ```
///
/// ```
/// use setters::{compose, flow};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(compose!(f, g, h)(10), flow!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
