//! Character — one displayable record returned by the remote character API.
//!
//! Records are read-only: they are decoded once and never mutated. Only the
//! fields the browser shows are kept; everything else in the payload
//! (species, origin, episodes, …) is ignored on decode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::CharacterId;
use crate::time::{Timestamp, parse_timestamp};

/// Life status of a character.
///
/// The wire values are case-sensitive: `"Alive"`, `"Dead"` and `"unknown"`.
/// Any other string is preserved verbatim as [`Other`](Self::Other) instead of
/// failing the whole decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
    Other(String),
}

impl CharacterStatus {
    /// The exact wire string for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for CharacterStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Alive" => Self::Alive,
            "Dead" => Self::Dead,
            "unknown" => Self::Unknown,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for CharacterStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<CharacterStatus> for String {
    fn from(status: CharacterStatus) -> Self {
        match status {
            CharacterStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single character as delivered by the character API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub name: String,
    pub status: CharacterStatus,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub image: String,
    /// Creation time exactly as received; see [`created_at`](Self::created_at).
    #[serde(default)]
    pub created: String,
}

impl CharacterRecord {
    /// Create a builder for constructing a [`CharacterRecord`].
    #[must_use]
    pub fn builder() -> CharacterRecordBuilder {
        CharacterRecordBuilder::default()
    }

    /// Parsed creation time, or `None` when `created` is not a recognised
    /// timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<Timestamp> {
        parse_timestamp(&self.created)
    }
}

/// Step-by-step builder for [`CharacterRecord`].
///
/// Mostly useful for tests and fixtures; real records come from decoding.
#[derive(Debug, Default)]
pub struct CharacterRecordBuilder {
    id: Option<CharacterId>,
    name: Option<String>,
    status: Option<CharacterStatus>,
    gender: Option<String>,
    image: Option<String>,
    created: Option<String>,
}

impl CharacterRecordBuilder {
    #[must_use]
    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(CharacterId::new(id));
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<CharacterStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Consume the builder and return a [`CharacterRecord`].
    ///
    /// Missing fields fall back to id `0`, empty strings and
    /// [`CharacterStatus::Unknown`].
    #[must_use]
    pub fn build(self) -> CharacterRecord {
        CharacterRecord {
            id: self.id.unwrap_or(CharacterId::new(0)),
            name: self.name.unwrap_or_default(),
            status: self.status.unwrap_or(CharacterStatus::Unknown),
            gender: self.gender.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            created: self.created.unwrap_or_default(),
        }
    }
}

/// Paging metadata that accompanies a listing. Decoded for logging only;
/// the browser never follows `next`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub count: u64,
    pub pages: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// The listing envelope returned by the character endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: PageInfo,
    pub results: Vec<CharacterRecord>,
}
