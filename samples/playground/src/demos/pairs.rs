//! Setters over tuples.

use anyhow::ensure;
use setters::compose::{Composable, Pipe, compose_backward};
use setters::setter::{KeyPath, first_path, map_both, map_first, map_second, over};
use setters::{compose, flow};

fn incr(x: i32) -> i32 {
    x + 1
}

fn square(x: i32) -> i32 {
    x * x
}

pub fn pair_setters() -> anyhow::Result<()> {
    let pair = (42, "Hello");

    let first_updated = pair.pipe(map_first(incr));
    let second_updated = pair.pipe(map_second(|greeting: &str| greeting.len()));
    tracing::debug!(?first_updated, ?second_updated, "one slot at a time");

    let chained = pair.pipe(
        map_first(incr)
            .then(map_first(square))
            .then(map_first(|x: i32| x.to_string())),
    );
    let fused = pair.pipe(map_first(flow!(incr, square, |x: i32| x.to_string())));
    tracing::debug!(?chained, ?fused, "chained setters against one fused setter");

    let both = map_both(incr, str::len)(pair);
    let through_key_path = over(first_path(), incr)(pair);
    tracing::debug!(?both, ?through_key_path, first = *first_path::<i32, &str>().get(&pair));

    ensure!(first_updated == (43, "Hello"), "map_first gave {first_updated:?}");
    ensure!(second_updated == (42, 5), "map_second gave {second_updated:?}");
    ensure!(chained == fused, "chained and fused setters disagree");
    ensure!(fused == ("1849".to_string(), "Hello"), "unexpected fused result: {fused:?}");
    ensure!(both == (43, 5), "map_both gave {both:?}");
    ensure!(through_key_path == first_updated, "key path and slot setter disagree");
    Ok(())
}

pub fn nested_pairs() -> anyhow::Result<()> {
    let nested = ("Hello", (42, "World"));

    let inside_out = nested.pipe(map_second(map_first(incr)));
    let second_of_first = compose_backward(
        |inner| map_second::<(i32, &str), (i32, &str), &str, _>(inner),
        map_first::<i32, i32, &str, fn(i32) -> i32>,
    );
    let outside_in = second_of_first(incr)(nested);
    tracing::debug!(?outside_in, "(map_second <<< map_first)(incr)");
    let both_levels = compose!(map_second(map_first(incr)), map_first(str::len))(nested);
    tracing::debug!(?inside_out, ?both_levels, "second slot, then its first slot");

    let deep = (1, (2, (3, 4)));
    let deepest = map_second(map_second(map_second(square)))(deep);
    tracing::debug!(?deepest, "three levels down");

    ensure!(inside_out == ("Hello", (43, "World")), "unexpected nested result: {inside_out:?}");
    ensure!(outside_in == inside_out, "nesting orders disagree: {outside_in:?}");
    ensure!(both_levels == (5, (43, "World")), "unexpected two-level result: {both_levels:?}");
    ensure!(deepest == (1, (2, (3, 16))), "unexpected deep result: {deepest:?}");
    Ok(())
}
