#![cfg(feature = "setter")]
//! Tests for the pair slot setters.

use rstest::rstest;
use setters::compose::{Composable, Pipe, compose_backward};
use setters::setter::{
    KeyPath, first_path, map, map_both, map_first, map_second, over, second_path, set,
};
use setters::{flow, pipe};

fn incr(x: i32) -> i32 {
    x + 1
}

fn square(x: i32) -> i32 {
    x * x
}

// =============================================================================
// Single slot
// =============================================================================

#[rstest]
fn map_first_transforms_slot_zero() {
    let pair = (42, "Hello");
    assert_eq!(pair.pipe(map_first(incr)), (43, "Hello"));
}

#[rstest]
fn map_second_transforms_slot_one() {
    let pair = (42, "Hello");
    assert_eq!(pair.pipe(map_second(|s: &str| s.len())), (42, 5));
}

#[rstest]
fn chained_setters_equal_one_fused_setter() {
    let pair = (42, "Hello");

    let chained = pipe!(
        pair,
        map_first(incr),
        map_first(square),
        map_first(|x: i32| x.to_string()),
    );
    let fused = pair.pipe(map_first(flow!(incr, square, |x: i32| x.to_string())));

    assert_eq!(chained, fused);
    assert_eq!(fused, ("1849".to_string(), "Hello"));
}

#[rstest]
fn both_slots_in_one_pipeline() {
    let pair = (42, "Hello");

    let result = pair.pipe(
        map_first(flow!(incr, square, |x: i32| x.to_string())).then(map_second(|s: &str| s.len())),
    );

    assert_eq!(result, ("1849".to_string(), 5));
}

#[rstest]
fn untouched_slot_is_moved_not_rebuilt() {
    let buffer = vec![1, 2, 3];
    let address = buffer.as_ptr();

    let (label, moved) = map_first(|x: i32| x.to_string())((7, buffer));

    assert_eq!(label, "7");
    assert_eq!(moved.as_ptr(), address);
}

// =============================================================================
// Nested pairs
// =============================================================================

#[rstest]
fn nested_setter_reaches_inner_slot() {
    let nested = ("Hello", (42, "World"));
    assert_eq!(nested.pipe(map_second(map_first(incr))), ("Hello", (43, "World")));
}

#[rstest]
fn nested_setter_written_outside_in() {
    let nested = ("Hello", (42, "World"));

    // map_second <<< map_first, applied to incr
    let second_of_first = compose_backward(
        |inner| map_second::<(i32, &str), (i32, &str), &str, _>(inner),
        map_first::<i32, i32, &str, fn(i32) -> i32>,
    );
    let incr_inner = second_of_first(incr);

    assert_eq!(incr_inner(nested), ("Hello", (43, "World")));
    assert_eq!(incr_inner(nested), nested.pipe(map_second(map_first(incr))));
}

#[rstest]
fn deeply_nested_setter() {
    let deep = (1, (2, (3, 4)));
    let incr_deepest = map_second(map_second(map_second(incr)));
    assert_eq!(incr_deepest(deep), (1, (2, (3, 5))));
}

#[rstest]
fn setters_lift_over_nested_arrays() {
    let nested = vec![vec![1, 2], vec![3, 4]];
    assert_eq!(map(map(incr))(nested), vec![vec![2, 3], vec![4, 5]]);
}

// =============================================================================
// map_both and slot key paths
// =============================================================================

#[rstest]
#[case((1, 2), (2, 4))]
#[case((0, 0), (1, 0))]
#[case((-3, 5), (-2, 25))]
fn map_both_updates_each_slot(#[case] input: (i32, i32), #[case] expected: (i32, i32)) {
    assert_eq!(map_both(incr, square)(input), expected);
}

#[rstest]
fn slot_key_paths_agree_with_slot_setters() {
    let pair = (42, "Hello");

    assert_eq!(over(first_path(), incr)(pair), map_first(incr)(pair));
    assert_eq!(
        over(second_path(), |s: &'static str| &s[1..])(pair),
        map_second(|s: &'static str| &s[1..])(pair)
    );
    assert_eq!(set(first_path(), 0)(pair), (0, "Hello"));
}

#[rstest]
fn slot_key_path_reads_slot() {
    let pair = ("left", 'r');
    assert_eq!(*first_path::<&str, char>().get(&pair), "left");
    assert_eq!(*second_path::<&str, char>().get(&pair), 'r');
}
