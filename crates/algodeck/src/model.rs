//! Core data types: [`Card`] and the closed enumerations it draws from.
//!
//! Classification and difficulty are closed sets. Strings only become these
//! types through [`FromStr`], so an out-of-set value is rejected where it
//! enters the program instead of silently matching nothing in a filter.

use crate::error::DeckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Sorts,
    Searches,
    Algorithms,
    Heuristics,
    Patterns,
    DataStructures,
}

/// All classifications, in the order filter controls list them.
pub const CLASSIFICATIONS: [Classification; 6] = [
    Classification::Sorts,
    Classification::Searches,
    Classification::Algorithms,
    Classification::Heuristics,
    Classification::Patterns,
    Classification::DataStructures,
];

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Sorts => "sorts",
            Classification::Searches => "searches",
            Classification::Algorithms => "algorithms",
            Classification::Heuristics => "heuristics",
            Classification::Patterns => "patterns",
            Classification::DataStructures => "data-structures",
        }
    }

    /// Human label, e.g. "Data Structures".
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Sorts => "Sorts",
            Classification::Searches => "Searches",
            Classification::Algorithms => "Algorithms",
            Classification::Heuristics => "Heuristics",
            Classification::Patterns => "Patterns",
            Classification::DataStructures => "Data Structures",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Classification {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CLASSIFICATIONS
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DeckError::invalid("classification", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

pub const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

/// Sort rank for a card without a difficulty; after every real difficulty.
pub const NO_DIFFICULTY_RANK: u8 = 4;

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Badge color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "#3eb870",
            Difficulty::Medium => "#c99a1c",
            Difficulty::Hard => "#c65a5a",
        }
    }
}

/// Badge color used for cards that carry no difficulty.
pub const DEFAULT_DIFFICULTY_COLOR: &str = "#6b7280";

/// Rank of an optional difficulty, with absent sorting last.
pub fn difficulty_rank(difficulty: Option<Difficulty>) -> u8 {
    difficulty.map_or(NO_DIFFICULTY_RANK, |d| d.rank())
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DIFFICULTIES
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DeckError::invalid("difficulty", s))
    }
}

/// One reference entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    pub classification: Classification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    pub code: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_complexity: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_problems: Vec<String>,
    /// ISO-8601 date the card was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        classification: Classification,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            classification,
            difficulty: None,
            code: String::new(),
            explanation: String::new(),
            time_complexity: None,
            space_complexity: None,
            tags: Vec::new(),
            use_cases: Vec::new(),
            related_problems: Vec::new(),
            date_added: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_text(mut self, explanation: impl Into<String>, code: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self.code = code.into();
        self
    }

    pub fn with_complexity(mut self, time: impl Into<String>, space: impl Into<String>) -> Self {
        self.time_complexity = Some(time.into());
        self.space_complexity = Some(space.into());
        self
    }

    pub fn with_date_added(mut self, date: impl Into<String>) -> Self {
        self.date_added = Some(date.into());
        self
    }

    /// The date key used for sorting; undated cards compare as "".
    pub fn date_key(&self) -> &str {
        self.date_added.as_deref().unwrap_or("")
    }

    pub fn difficulty_color(&self) -> &'static str {
        self.difficulty
            .map_or(DEFAULT_DIFFICULTY_COLOR, |d| d.color())
    }
}
