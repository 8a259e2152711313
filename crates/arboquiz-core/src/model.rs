//! Core data model types for arboquiz.
//!
//! The fundamental types the whole quiz system builds on: tree records,
//! the three guessable field kinds, and difficulty levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single tree of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRecord {
    /// French common name, possibly accented (e.g. "Chêne pédonculé").
    pub common_name: String,
    /// Latin genus, capitalized (e.g. "Quercus").
    pub genus: String,
    /// Latin species epithet, possibly with a cultivar (e.g. "alba 'Tristis'").
    pub species: String,
    /// Reference to an external image asset. Opaque to the engine.
    #[serde(default)]
    pub image_path: String,
}

impl TreeRecord {
    /// Ground-truth value for one field of this record.
    pub fn field(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.common_name,
            FieldKind::Genus => &self.genus,
            FieldKind::Species => &self.species,
        }
    }
}

/// One of the three guessable fields of a tree record.
///
/// Serialized with the French wire keys of the original quiz API
/// (`nom`, `genre`, `espèce`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FieldKind {
    /// French common name.
    #[serde(rename = "nom")]
    Name,
    /// Latin genus.
    #[serde(rename = "genre")]
    Genus,
    /// Latin species.
    #[serde(rename = "espèce")]
    Species,
}

impl FieldKind {
    /// The three kinds, in the fixed question order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Genus, FieldKind::Species];

    /// Display label used in prompts and hints.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Name => "nom français",
            FieldKind::Genus => "genre (en latin)",
            FieldKind::Species => "espèce (en latin)",
        }
    }

    /// Label with its French article: "le nom français", "l'espèce (en latin)".
    pub fn label_with_article(&self) -> String {
        let label = self.label();
        if label.starts_with(|c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            format!("l'{label}")
        } else {
            format!("le {label}")
        }
    }

    /// Marker shown in front of hint lines.
    pub fn icon(&self) -> &'static str {
        match self {
            FieldKind::Name => "🌳",
            FieldKind::Genus => "🧬",
            FieldKind::Species => "🔍",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Name => write!(f, "nom"),
            FieldKind::Genus => write!(f, "genre"),
            FieldKind::Species => write!(f, "espèce"),
        }
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nom" | "name" => Ok(FieldKind::Name),
            "genre" | "genus" => Ok(FieldKind::Genus),
            "espèce" | "espece" | "species" => Ok(FieldKind::Species),
            other => Err(format!("unknown field kind: {other}")),
        }
    }
}

/// Difficulty level: how many fields must be guessed per question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One field to guess, every other field shown as a hint.
    #[default]
    Facile,
    /// Two fields to guess.
    Moyen,
}

impl Difficulty {
    /// Number of fields the quiz-taker must supply at this level.
    pub fn guess_count(&self) -> usize {
        match self {
            Difficulty::Facile => 1,
            Difficulty::Moyen => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Facile => write!(f, "facile"),
            Difficulty::Moyen => write!(f, "moyen"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facile" | "easy" => Ok(Difficulty::Facile),
            "moyen" | "medium" => Ok(Difficulty::Moyen),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
