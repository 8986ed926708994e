//! Card presentation model — what a character card shows, already formatted.
//!
//! Building a card is a pure mapping from a [`CharacterRecord`]. Rendering
//! adapters only place these strings; they never format anything themselves.

use crate::character::{CharacterRecord, CharacterStatus};
use crate::id::CharacterId;
use crate::time::format_date;

/// Shown in place of the creation date when `created` does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Display-ready content of one character card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    /// Key for keyed list rendering.
    pub id: CharacterId,
    pub image: String,
    pub name: String,
    /// Creation date, `M/D/YYYY`, no time component.
    pub created_label: String,
    pub gender_label: String,
    pub status_label: String,
    /// CSS modifier class for the status line.
    pub status_class: &'static str,
}

impl From<&CharacterRecord> for CharacterCard {
    fn from(record: &CharacterRecord) -> Self {
        let created_label = record
            .created_at()
            .map_or_else(|| INVALID_DATE.to_string(), |ts| format_date(&ts));

        Self {
            id: record.id,
            image: record.image.clone(),
            name: record.name.clone(),
            created_label,
            gender_label: format!("Gender: {}", record.gender),
            status_label: format!("Status: {}", record.status),
            status_class: status_class(&record.status),
        }
    }
}

fn status_class(status: &CharacterStatus) -> &'static str {
    match status {
        CharacterStatus::Alive => "status-alive",
        CharacterStatus::Dead => "status-dead",
        CharacterStatus::Unknown => "status-unknown",
        CharacterStatus::Other(_) => "status-other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rick() -> CharacterRecord {
        CharacterRecord::builder()
            .id(1)
            .name("Rick Sanchez")
            .status("Alive")
            .gender("Male")
            .image("https://rickandmortyapi.com/api/character/avatar/1.jpeg")
            .created("2017-11-04T18:48:46.250Z")
            .build()
    }

    #[test]
    fn should_format_every_field() {
        let card = CharacterCard::from(&rick());
        assert_eq!(card.id, CharacterId::new(1));
        assert_eq!(card.name, "Rick Sanchez");
        assert_eq!(
            card.image,
            "https://rickandmortyapi.com/api/character/avatar/1.jpeg"
        );
        assert_eq!(card.created_label, "11/4/2017");
        assert_eq!(card.gender_label, "Gender: Male");
        assert_eq!(card.status_label, "Status: Alive");
        assert_eq!(card.status_class, "status-alive");
    }

    #[test]
    fn should_show_invalid_date_when_created_unparseable() {
        let mut record = rick();
        record.created = "sometime".to_string();
        let card = CharacterCard::from(&record);
        assert_eq!(card.created_label, INVALID_DATE);
    }

    #[test]
    fn should_show_unrecognised_status_verbatim() {
        let mut record = rick();
        record.status = CharacterStatus::from("Squanched");
        let card = CharacterCard::from(&record);
        assert_eq!(card.status_label, "Status: Squanched");
        assert_eq!(card.status_class, "status-other");
    }

    #[test]
    fn should_show_lowercase_unknown_status() {
        let mut record = rick();
        record.status = CharacterStatus::Unknown;
        assert_eq!(CharacterCard::from(&record).status_label, "Status: unknown");
    }
}
