//! Functions, piping, composition and collections.

use anyhow::ensure;
use setters::compose::{Composable, Pipe, apply, compose_backward, compose_forward};
use setters::setter::{filter, map, par_map};
use setters::{compose, curry2, flow, pipe};

fn incr(x: i32) -> i32 {
    x + 1
}

fn square(x: i32) -> i32 {
    x * x
}

fn describe(x: i32) -> String {
    format!("the number {x}")
}

pub fn free_functions() -> anyhow::Result<()> {
    let nested = describe(square(incr(2)));
    tracing::debug!(%nested, "nested calls read inside out");

    let applied = apply(2, incr);
    tracing::debug!(applied, "apply(2, incr)");

    ensure!(nested == "the number 9", "unexpected nested result: {nested}");
    ensure!(applied == 3, "apply(2, incr) gave {applied}");
    Ok(())
}

pub fn pipe() -> anyhow::Result<()> {
    let by_macro = pipe!(2, incr, square, describe);
    let by_method = 2_i32.pipe(incr).pipe(square).pipe(describe);
    tracing::debug!(%by_macro, %by_method, "2 |> incr |> square |> describe");

    ensure!(by_macro == by_method, "pipe! and .pipe() disagree");
    ensure!(by_macro == "the number 9", "unexpected pipe result: {by_macro}");
    Ok(())
}

pub fn composition() -> anyhow::Result<()> {
    let forward = compose_forward(incr, square);
    let backward = compose_backward(square, incr);
    let method = incr.then(square);
    let chained = flow!(incr, square, describe);
    let mathematical = compose!(describe, square, incr);

    let results = [forward(2), backward(2), method(2)];
    tracing::debug!(?results, "incr >>> square at 2");
    tracing::debug!(chained = %chained(2), mathematical = %mathematical(2), "three-step chains");

    let add = curry2!(|a: i32, b: i32| a + b);
    let add_five = add(5);
    tracing::debug!(curried = add_five(10), "curry2!(+)(5)(10)");

    ensure!(results == [9, 9, 9], "composition forms disagree: {results:?}");
    ensure!(chained(2) == mathematical(2), "flow! and compose! disagree");
    ensure!(add_five(10) == 15, "curried addition failed");
    Ok(())
}

pub fn collections() -> anyhow::Result<()> {
    let values: Vec<i32> = (1..=5).collect();

    let two_passes = flow!(map(incr), map(square))(values.clone());
    let one_pass = map(incr.then(square))(values.clone());
    let parallel = par_map(incr.then(square))(values.clone());
    let odd_squares = flow!(map(square), filter(|x: &i32| x % 2 == 1))(values);

    tracing::debug!(?two_passes, ?one_pass, ?parallel, "map(incr) >>> map(square)");
    tracing::debug!(?odd_squares, "odd squares");

    ensure!(two_passes == one_pass, "map fusion failed");
    ensure!(parallel == one_pass, "par_map reordered or changed elements");
    ensure!(one_pass == vec![4, 9, 16, 25, 36], "unexpected squares: {one_pass:?}");
    ensure!(odd_squares == vec![1, 9, 25], "unexpected odd squares: {odd_squares:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(2, 9)]
    #[case(-3, 4)]
    fn incr_then_square(#[case] input: i32, #[case] expected: i32) {
        assert_eq!(incr.then(square)(input), expected);
    }
}
