//! Player marks and per-mark data storage.
//!
//! ## Mark
//!
//! The two player symbols. By convention `X` is the first player (and
//! always the human in computer matches), `O` the second.
//!
//! ## MarkMap
//!
//! Fixed two-slot per-mark storage with indexing by `Mark`. Used for
//! the match score and the display names.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player's symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

/// A board cell: a mark or empty.
pub type Cell = Option<Mark>;

impl Mark {
    /// The mark that moves first in every round.
    pub const FIRST: Mark = Mark::X;

    /// Get the opposing mark.
    ///
    /// ```
    /// use ttt_engine::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Both marks, first player first.
    #[must_use]
    pub const fn both() -> [Mark; 2] {
        [Mark::X, Mark::O]
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Per-mark data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ttt_engine::{Mark, MarkMap};
///
/// let mut score: MarkMap<u32> = MarkMap::with_value(0);
///
/// score[Mark::X] += 1;
/// assert_eq!(score[Mark::X], 1);
/// assert_eq!(score[Mark::O], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkMap<T> {
    x: T,
    o: T,
}

impl<T> MarkMap<T> {
    /// Create a new MarkMap with values from a factory function.
    pub fn new(factory: impl Fn(Mark) -> T) -> Self {
        Self {
            x: factory(Mark::X),
            o: factory(Mark::O),
        }
    }

    /// Create a new MarkMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            o: value,
        }
    }

    /// Get a reference to a mark's data.
    #[must_use]
    pub fn get(&self, mark: Mark) -> &T {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Get a mutable reference to a mark's data.
    pub fn get_mut(&mut self, mark: Mark) -> &mut T {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Iterate over (Mark, &T) pairs, first player first.
    pub fn iter(&self) -> impl Iterator<Item = (Mark, &T)> {
        [(Mark::X, &self.x), (Mark::O, &self.o)].into_iter()
    }
}

impl<T> Index<Mark> for MarkMap<T> {
    type Output = T;

    fn index(&self, mark: Mark) -> &Self::Output {
        self.get(mark)
    }
}

impl<T> IndexMut<Mark> for MarkMap<T> {
    fn index_mut(&mut self, mark: Mark) -> &mut Self::Output {
        self.get_mut(mark)
    }
}
