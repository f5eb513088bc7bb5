//! Currying: turning `f(a, b)` into `f(a)(b)`.
//!
//! A curried setter factory can be partially applied once and reused, as in
//! "a label color style" that still waits for the color. The function is
//! shared between the nested closures with `std::rc::Rc`; every argument
//! except the last is cloned on each call, so partial applications stay
//! reusable and the returned closures implement [`Fn`].

/// Converts a 2-argument function into curried form.
///
/// `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument type must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use setters::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// let add_five = curried_add(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Curried collection lifting
///
/// ```
/// use setters::curry2;
///
/// fn map_all(values: Vec<i32>, function: fn(i32) -> i32) -> Vec<i32> {
///     values.into_iter().map(function).collect()
/// }
///
/// let over_one_to_three = curry2!(map_all)(vec![1, 2, 3]);
/// assert_eq!(over_one_to_three(|x| x + 1), vec![2, 3, 4]);
/// assert_eq!(over_one_to_three(|x| x * x), vec![1, 4, 9]);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first_argument| {
            let function = ::std::rc::Rc::clone(&function);
            move |second_argument| {
                function(::std::clone::Clone::clone(&first_argument), second_argument)
            }
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first two argument types must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use setters::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let percentage = curry3!(clamp)(0)(100);
/// assert_eq!(percentage(120), 100);
/// assert_eq!(percentage(-5), 0);
/// assert_eq!(percentage(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first_argument| {
            let function = ::std::rc::Rc::clone(&function);
            move |second_argument| {
                let function = ::std::rc::Rc::clone(&function);
                let first_argument = ::std::clone::Clone::clone(&first_argument);
                move |third_argument| {
                    function(
                        ::std::clone::Clone::clone(&first_argument),
                        ::std::clone::Clone::clone(&second_argument),
                        third_argument,
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_curry2_reuses_partial_application() {
        let label = curry2!(|prefix: String, value: i32| format!("{prefix}{value}"));
        let age = label(String::from("age="));
        assert_eq!(age(42), "age=42");
        assert_eq!(age(43), "age=43");
    }

    #[test]
    fn test_curry3_matches_uncurried() {
        let volume = |width: i32, height: i32, depth: i32| width * height * depth;
        assert_eq!(curry3!(volume)(2)(3)(4), volume(2, 3, 4));
    }
}
