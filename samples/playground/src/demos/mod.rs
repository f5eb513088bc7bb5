//! The walkthrough, one demo per topic.
//!
//! Each demo computes a few values with the library, logs them, and returns
//! an error when a value differs from what the walkthrough expects.

mod functions;
mod pairs;
mod properties;

use clap::ValueEnum;

/// A named step of the walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    FreeFunctions,
    Pipe,
    Composition,
    Collections,
    PairSetters,
    NestedPairs,
    PropertySetters,
    Styling,
}

impl Demo {
    /// Every demo, in walkthrough order.
    pub const ALL: [Self; 8] = [
        Self::FreeFunctions,
        Self::Pipe,
        Self::Composition,
        Self::Collections,
        Self::PairSetters,
        Self::NestedPairs,
        Self::PropertySetters,
        Self::Styling,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::FreeFunctions => "free-functions",
            Self::Pipe => "pipe",
            Self::Composition => "composition",
            Self::Collections => "collections",
            Self::PairSetters => "pair-setters",
            Self::NestedPairs => "nested-pairs",
            Self::PropertySetters => "property-setters",
            Self::Styling => "styling",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::FreeFunctions => "plain functions applied to values",
            Self::Pipe => "feeding a value through functions left to right",
            Self::Composition => "building new functions from old ones",
            Self::Collections => "lifting functions over whole vectors",
            Self::PairSetters => "updating one slot of a pair",
            Self::NestedPairs => "reaching into pairs inside pairs",
            Self::PropertySetters => "updating record fields through key paths",
            Self::Styling => "reusable constant setters on a label style",
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::FreeFunctions => functions::free_functions(),
            Self::Pipe => functions::pipe(),
            Self::Composition => functions::composition(),
            Self::Collections => functions::collections(),
            Self::PairSetters => pairs::pair_setters(),
            Self::NestedPairs => pairs::nested_pairs(),
            Self::PropertySetters => properties::property_setters(),
            Self::Styling => properties::styling(),
        }
    }
}
