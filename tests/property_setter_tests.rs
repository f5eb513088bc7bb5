#![cfg(feature = "setter")]
//! Tests for property setters: `over`, `set`, `try_over` and `prop`.

use rstest::{fixture, rstest};
use setters::compose::{Composable, Pipe, constant};
use setters::setter::{KeyPath, PropertySetter, map, over, prop, set, try_over};
use setters::{flow, key_path};

#[derive(Clone, PartialEq, Debug)]
struct User {
    name: String,
    location: String,
    age: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Company {
    name: String,
    owner: User,
}

#[fixture]
fn blob() -> User {
    User {
        name: "Blob".to_string(),
        location: "NYC".to_string(),
        age: 42,
    }
}

fn incr(x: u32) -> u32 {
    x + 1
}

// =============================================================================
// over
// =============================================================================

#[rstest]
fn over_increments_age_and_keeps_original(blob: User) {
    let incremented = over(key_path!(User, age), incr)(blob.clone());

    assert_eq!(
        incremented,
        User {
            name: "Blob".to_string(),
            location: "NYC".to_string(),
            age: 43,
        }
    );
    assert_eq!(blob.age, 42);
}

#[rstest]
fn over_chains_field_updates(blob: User) {
    let updated = blob.pipe(
        over(key_path!(User, age), incr)
            .then(over(key_path!(User, name), |name: String| name.to_uppercase())),
    );

    assert_eq!(updated.age, 43);
    assert_eq!(updated.name, "BLOB");
    assert_eq!(updated.location, "NYC");
}

#[rstest]
fn over_through_nested_key_path(blob: User) {
    let company = Company {
        name: "Blob Inc".to_string(),
        owner: blob,
    };

    let owner_age = key_path!(Company, owner).appending(key_path!(User, age));
    let updated = over(owner_age, incr)(company.clone());

    assert_eq!(updated.owner.age, 43);
    assert_eq!(updated.name, company.name);
    assert_eq!(updated.owner.name, company.owner.name);
}

#[rstest]
fn over_accepts_borrowed_key_path(blob: User) {
    let age = key_path!(User, age);
    let birthday = over(&age, incr);
    let twice = flow!(birthday, over(&age, incr));

    assert_eq!(*age.get(&blob), 42);
    assert_eq!(twice(blob).age, 44);
}

// =============================================================================
// set
// =============================================================================

#[rstest]
#[case("LA")]
#[case("")]
#[case("NYC")]
fn set_replaces_field_with_value(blob: User, #[case] location: &str) {
    let relocated = set(key_path!(User, location), location.to_string())(blob.clone());

    assert_eq!(relocated.location, location);
    assert_eq!(relocated.name, blob.name);
    assert_eq!(relocated.age, blob.age);
}

#[rstest]
fn set_equals_over_with_constant(blob: User) {
    let by_set = set(key_path!(User, age), 7)(blob.clone());
    let by_over = over(key_path!(User, age), constant(7))(blob);
    assert_eq!(by_set, by_over);
}

#[rstest]
fn set_last_write_wins(blob: User) {
    let styled = blob.pipe(flow!(
        set(key_path!(User, location), "LA".to_string()),
        set(key_path!(User, location), "SF".to_string()),
    ));
    assert_eq!(styled.location, "SF");
}

#[rstest]
fn curried_set_builds_reusable_styles(blob: User) {
    let move_to = |city: &str| set(key_path!(User, location), city.to_string());
    let to_boston = move_to("Boston");
    let to_austin = move_to("Austin");

    assert_eq!(to_boston(blob.clone()).location, "Boston");
    assert_eq!(to_austin(blob).location, "Austin");
}

// =============================================================================
// prop
// =============================================================================

#[rstest]
fn prop_curries_over_and_set(blob: User) {
    let age: PropertySetter<_, User, u32> = prop(key_path!(User, age));

    let birthday = age.clone().over(incr);
    let newborn = age.clone().set(0);
    let checked = age.try_over(|value: u32| value.checked_sub(50).ok_or("too young"));

    assert_eq!(birthday(blob.clone()).age, 43);
    assert_eq!(newborn(blob.clone()).age, 0);
    assert_eq!(checked(blob), Err("too young"));
}

#[rstest]
fn prop_gives_back_its_key_path(blob: User) {
    let name = prop(key_path!(User, name)).into_key_path();
    assert_eq!(name.get(&blob), "Blob");
}

// =============================================================================
// try_over
// =============================================================================

#[derive(Debug, PartialEq)]
enum AgeError {
    Overflow,
}

#[rstest]
#[case(42, Ok(43))]
#[case(u32::MAX, Err(AgeError::Overflow))]
fn try_over_propagates_host_error(
    blob: User,
    #[case] age: u32,
    #[case] expected: Result<u32, AgeError>,
) {
    let birthday = try_over(key_path!(User, age), |age: u32| {
        age.checked_add(1).ok_or(AgeError::Overflow)
    });

    let user = User { age, ..blob };
    assert_eq!(birthday(user).map(|user| user.age), expected);
}

// =============================================================================
// Batches
// =============================================================================

#[rstest]
fn same_pipeline_applies_to_every_user(blob: User) {
    let users = vec![blob.clone(), blob.clone(), blob];

    let pipeline = map(flow!(
        over(key_path!(User, age), incr),
        over(key_path!(User, name), |name: String| name.to_uppercase()),
    ));

    let updated = pipeline(users);

    assert_eq!(updated.len(), 3);
    assert!(updated.iter().all(|user| user.age == 43 && user.name == "BLOB"));
}
