//! Filter state and its controller.
//!
//! [`FilterState`] is always total: an empty list or an empty query means
//! "no restriction" for that dimension. [`FilterUpdate`] is the partial form
//! used to change it; fields left as `None` are not touched, and list fields
//! that are set replace the current list wholesale.

use crate::error::DeckError;
use crate::model::{Classification, Difficulty};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOption {
    #[default]
    Alphabetical,
    Difficulty,
    Date,
    Classification,
    /// Any sort name not listed above. Leaves the filtered order as it is.
    Unsorted,
}

/// The sort options offered to users, in display order.
pub const SORT_OPTIONS: [SortOption; 4] = [
    SortOption::Alphabetical,
    SortOption::Difficulty,
    SortOption::Date,
    SortOption::Classification,
];

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Alphabetical => "alphabetical",
            SortOption::Difficulty => "difficulty",
            SortOption::Date => "date",
            SortOption::Classification => "classification",
            SortOption::Unsorted => "unsorted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Alphabetical => "Alphabetical",
            SortOption::Difficulty => "Difficulty",
            SortOption::Date => "Date Added",
            SortOption::Classification => "Classification",
            SortOption::Unsorted => "Unsorted",
        }
    }

    /// Maps a sort name to an option. Unrecognized names become
    /// [`SortOption::Unsorted`] rather than an error.
    pub fn from_name(name: &str) -> Self {
        SORT_OPTIONS
            .iter()
            .copied()
            .find(|opt| opt.as_str() == name)
            .unwrap_or(SortOption::Unsorted)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parse, for user input where a typo should be reported.
impl FromStr for SortOption {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SortOption::from_name(s) {
            SortOption::Unsorted => Err(DeckError::invalid("sort option", s)),
            opt => Ok(opt),
        }
    }
}

impl From<String> for SortOption {
    fn from(name: String) -> Self {
        SortOption::from_name(&name)
    }
}

impl From<SortOption> for String {
    fn from(opt: SortOption) -> Self {
        opt.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub classifications: Vec<Classification>,
    pub difficulties: Vec<Difficulty>,
    pub tags: Vec<String>,
    pub search_query: String,
    pub sort_by: SortOption,
}

impl FilterState {
    /// True when any filter dimension restricts the result. The sort order
    /// does not count.
    pub fn has_active_filters(&self) -> bool {
        !self.classifications.is_empty()
            || !self.difficulties.is_empty()
            || !self.tags.is_empty()
            || !self.search_query.trim().is_empty()
    }
}

/// A partial [`FilterState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub classifications: Option<Vec<Classification>>,
    pub difficulties: Option<Vec<Difficulty>>,
    pub tags: Option<Vec<String>>,
    pub search_query: Option<String>,
    pub sort_by: Option<SortOption>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classifications(mut self, values: Vec<Classification>) -> Self {
        self.classifications = Some(values);
        self
    }

    pub fn difficulties(mut self, values: Vec<Difficulty>) -> Self {
        self.difficulties = Some(values);
        self
    }

    pub fn tags<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn sort_by(mut self, sort: SortOption) -> Self {
        self.sort_by = Some(sort);
        self
    }
}

/// Owns the filter state of one browsing session.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    state: FilterState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Shallow-merges `update` into the current state.
    pub fn update(&mut self, update: FilterUpdate) {
        let FilterUpdate {
            classifications,
            difficulties,
            tags,
            search_query,
            sort_by,
        } = update;

        if let Some(values) = classifications {
            self.state.classifications = values;
        }
        if let Some(values) = difficulties {
            self.state.difficulties = values;
        }
        if let Some(values) = tags {
            self.state.tags = values;
        }
        if let Some(query) = search_query {
            self.state.search_query = query;
        }
        if let Some(sort) = sort_by {
            self.state.sort_by = sort;
        }
    }

    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    /// Update that adds `value` to the selection, or removes it if present.
    pub fn toggle_classification(&self, value: Classification) -> FilterUpdate {
        FilterUpdate::new().classifications(toggled(&self.state.classifications, value))
    }

    pub fn toggle_difficulty(&self, value: Difficulty) -> FilterUpdate {
        FilterUpdate::new().difficulties(toggled(&self.state.difficulties, value))
    }

    pub fn toggle_tag(&self, tag: &str) -> FilterUpdate {
        FilterUpdate::new().tags(toggled(&self.state.tags, tag.to_string()))
    }
}

fn toggled<T: PartialEq + Clone>(current: &[T], value: T) -> Vec<T> {
    if current.contains(&value) {
        current.iter().filter(|v| **v != value).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(value);
        next
    }
}
