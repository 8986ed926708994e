//! Sort and filter directives — the two user-selected view inputs.
//!
//! Both directives round-trip through the value strings used by the select
//! controls, so a UI can store them as plain `<option value>` strings.

use std::fmt;
use std::str::FromStr;

use crate::character::CharacterStatus;

/// A select value that does not name any directive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} directive {value:?}")]
pub struct DirectiveParseError {
    /// `"sort"` or `"filter"`.
    pub kind: &'static str,
    /// The rejected value.
    pub value: String,
}

/// Comparison rule applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirective {
    /// Keep source order.
    #[default]
    None,
    /// Ascending by name, locale-aware.
    ByNameAscending,
    /// Ascending by creation time, unparseable times first.
    ByCreatedAscending,
}

impl SortDirective {
    /// Every directive, in the order the UI lists them.
    pub const ALL: [Self; 3] = [Self::None, Self::ByNameAscending, Self::ByCreatedAscending];

    /// The `<option value>` for this directive. [`None`](Self::None) is the
    /// empty placeholder value.
    #[must_use]
    pub fn as_value(self) -> &'static str {
        match self {
            Self::None => "",
            Self::ByNameAscending => "name",
            Self::ByCreatedAscending => "created",
        }
    }

    /// Human label shown in the select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Select a sorting option",
            Self::ByNameAscending => "Name (A-Z)",
            Self::ByCreatedAscending => "Date Created (Oldest first)",
        }
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

impl FromStr for SortDirective {
    type Err = DirectiveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::None),
            "name" => Ok(Self::ByNameAscending),
            "created" => Ok(Self::ByCreatedAscending),
            other => Err(DirectiveParseError {
                kind: "sort",
                value: other.to_string(),
            }),
        }
    }
}

/// Status restriction applied to the source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterDirective {
    /// Keep every record.
    #[default]
    All,
    Alive,
    Dead,
    Unknown,
}

impl FilterDirective {
    /// Every directive, in the order the UI lists them.
    pub const ALL: [Self; 4] = [Self::All, Self::Alive, Self::Dead, Self::Unknown];

    /// The `<option value>` for this directive; for anything but
    /// [`All`](Self::All) this is also the status string it matches.
    #[must_use]
    pub fn as_value(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }

    /// Human label shown in the select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether a record with `status` passes this filter.
    ///
    /// Comparison is exact string equality on the wire value, so an
    /// unrecognised status only ever passes [`All`](Self::All).
    #[must_use]
    pub fn matches(self, status: &CharacterStatus) -> bool {
        match self {
            Self::All => true,
            restricted => status.as_str() == restricted.as_value(),
        }
    }
}

impl fmt::Display for FilterDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

impl FromStr for FilterDirective {
    type Err = DirectiveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|directive| directive.as_value() == s)
            .ok_or_else(|| DirectiveParseError {
                kind: "filter",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_no_sort_and_all_filter() {
        assert_eq!(SortDirective::default(), SortDirective::None);
        assert_eq!(FilterDirective::default(), FilterDirective::All);
    }

    #[test]
    fn should_parse_every_sort_value() {
        for directive in SortDirective::ALL {
            assert_eq!(directive.as_value().parse::<SortDirective>(), Ok(directive));
        }
    }

    #[test]
    fn should_parse_every_filter_value() {
        for directive in FilterDirective::ALL {
            assert_eq!(
                directive.as_value().parse::<FilterDirective>(),
                Ok(directive)
            );
        }
    }

    #[test]
    fn should_reject_unknown_sort_value() {
        let err = "species".parse::<SortDirective>().unwrap_err();
        assert_eq!(err.kind, "sort");
        assert_eq!(err.to_string(), "unknown sort directive \"species\"");
    }

    #[test]
    fn should_reject_filter_value_with_wrong_case() {
        assert!("Unknown".parse::<FilterDirective>().is_err());
        assert!("alive".parse::<FilterDirective>().is_err());
    }

    #[test]
    fn should_match_every_status_when_all() {
        assert!(FilterDirective::All.matches(&CharacterStatus::Alive));
        assert!(FilterDirective::All.matches(&CharacterStatus::Other("?".into())));
    }

    #[test]
    fn should_match_only_equal_status_when_restricted() {
        assert!(FilterDirective::Dead.matches(&CharacterStatus::Dead));
        assert!(!FilterDirective::Dead.matches(&CharacterStatus::Alive));
        assert!(FilterDirective::Unknown.matches(&CharacterStatus::Unknown));
        assert!(!FilterDirective::Unknown.matches(&CharacterStatus::Other("Unknown".into())));
    }

    #[test]
    fn should_label_placeholder_sort_option() {
        assert_eq!(SortDirective::None.label(), "Select a sorting option");
        assert_eq!(FilterDirective::Unknown.label(), "Unknown");
    }
}
