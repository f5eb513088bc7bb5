//! Setters over record fields.

use anyhow::ensure;
use setters::KeyPaths;
use setters::compose::{Pipe, constant};
use setters::setter::{KeyPath, map, over, prop, set, try_over};
use setters::{curry2, curry3, flow, key_path};

#[derive(Clone, Debug, PartialEq)]
struct User {
    name: String,
    location: String,
    age: u32,
}

/// Visual style of a text label.
#[derive(Clone, Debug, PartialEq, KeyPaths)]
struct Label {
    text: String,
    font_size: u32,
    color: Color,
    corner_radius: u32,
    border: Border,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Black,
    Red,
    Blue,
}

#[derive(Clone, Debug, PartialEq, KeyPaths)]
struct Border {
    width: u32,
    color: Color,
}

impl Label {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font_size: 12,
            color: Color::Black,
            corner_radius: 0,
            border: Border {
                width: 0,
                color: Color::Black,
            },
        }
    }
}

fn blob() -> User {
    User {
        name: "Blob".to_string(),
        location: "NYC".to_string(),
        age: 42,
    }
}

pub fn property_setters() -> anyhow::Result<()> {
    let user = blob();

    let birthday = over(key_path!(User, age), |age: u32| age + 1);
    let older = birthday(user.clone());
    tracing::debug!(?older, original_age = user.age, "over(age, incr)");

    let relocate = set(key_path!(User, location), "LA".to_string());
    let shout = prop(key_path!(User, name)).over(|name: String| name.to_uppercase());
    let updated = user.clone().pipe(flow!(&birthday, &relocate, &shout));
    let reordered = user.clone().pipe(flow!(&shout, &relocate, &birthday));
    tracing::debug!(?updated, "three field updates");

    let checked_birthday = try_over(key_path!(User, age), |age: u32| {
        age.checked_add(1).ok_or("age overflow")
    });
    let ancient = User {
        age: u32::MAX,
        ..user.clone()
    };
    let refused = checked_birthday(ancient);
    tracing::debug!(?refused, "try_over at the age limit");

    let crowd = map(&birthday)(vec![user.clone(), older.clone()]);
    let ages: Vec<u32> = crowd.iter().map(|person| person.age).collect();
    tracing::debug!(?ages, "one setter over a batch");

    ensure!(older.age == 43, "birthday gave age {}", older.age);
    ensure!(user.age == 42, "the original user changed");
    ensure!(older.name == user.name && older.location == user.location, "other fields changed");
    ensure!(updated == reordered, "disjoint field setters did not commute");
    ensure!(updated.location == "LA" && updated.name == "BLOB", "unexpected update: {updated:?}");
    ensure!(refused == Err("age overflow"), "try_over did not refuse: {refused:?}");
    ensure!(ages == vec![43, 44], "unexpected batch ages: {ages:?}");
    Ok(())
}

pub fn styling() -> anyhow::Result<()> {
    // Constant setters are styles: they ignore the current value.
    let headline = set(Label::font_size_path(), 17);
    let rounded = over(Label::corner_radius_path(), constant(6));
    let accent = curry2!(|color: Color, label: Label| Label::color_path().set(label, color));
    let bordered = curry3!(|width: u32, color: Color, label: Label| {
        Label::border_path().set(label, Border { width, color })
    });

    let title_style = flow!(&headline, &rounded, accent(Color::Red), bordered(2)(Color::Red));
    let link_style = flow!(&headline, accent(Color::Blue));

    let title = Label::plain("Setters").pipe(&title_style);
    let link = Label::plain("docs").pipe(&link_style);
    tracing::info!(?title, "title label");
    tracing::info!(?link, "link label");

    let restyled = title.clone().pipe(&title_style);

    ensure!(title.font_size == 17 && title.corner_radius == 6, "title not styled: {title:?}");
    ensure!(
        title.border.width == 2 && title.border.color == Color::Red,
        "border not styled: {title:?}"
    );
    ensure!(title.text == "Setters", "text changed");
    ensure!(link.color == Color::Blue && link.corner_radius == 0, "link not styled: {link:?}");
    ensure!(restyled == title, "styles are not idempotent");
    let blue_first = Label::plain("Setters").pipe(flow!(accent(Color::Blue), &title_style));
    ensure!(blue_first == title, "title style depends on the label it starts from");
    Ok(())
}
