//! One rendered screen unit, containing one or two publication pages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A spread groups the pages shown together on one screen.
///
/// Indices reference positions in the page sequence the spread was computed
/// from. Either side of a double page may be blank, e.g. the first page of a
/// left-to-right publication shown alone on the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spread {
    /// A page occupying the whole screen.
    SinglePage(usize),

    /// Two side-by-side slots, each holding a page index or a blank.
    DoublePage {
        left: Option<usize>,
        right: Option<usize>,
    },
}

impl Spread {
    /// Shorthand for a double-page spread.
    pub fn double(left: Option<usize>, right: Option<usize>) -> Self {
        Self::DoublePage { left, right }
    }

    /// Iterate the page indices referenced by this spread, left slot first.
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        match *self {
            Self::SinglePage(page) => [Some(page), None],
            Self::DoublePage { left, right } => [left, right],
        }
        .into_iter()
        .flatten()
    }

    /// Check whether this spread shows the given page index.
    pub fn contains(&self, index: usize) -> bool {
        self.pages().any(|page| page == index)
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(page: Option<usize>) -> String {
            page.map_or_else(|| "·".to_string(), |p| p.to_string())
        }
        match *self {
            Self::SinglePage(page) => write!(f, "[ {page} ]"),
            Self::DoublePage { left, right } => {
                write!(f, "[ {} | {} ]", slot(left), slot(right))
            }
        }
    }
}
