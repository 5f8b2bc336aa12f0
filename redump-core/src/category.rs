//! Small closed vocabularies used by individual submission fields.

use serde::{Deserialize, Serialize};

use crate::names::{HumanReadable, human_readable_str};

/// Content category of a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiscCategory {
    Games,
    Demos,
    Video,
    Audio,
    Multimedia,
    Applications,
    Coverdiscs,
    Educational,
    BonusDiscs,
    Preproduction,
    AddOns,
}

const ALL_DISC_CATEGORIES: &[DiscCategory] = &[
    DiscCategory::Games,
    DiscCategory::Demos,
    DiscCategory::Video,
    DiscCategory::Audio,
    DiscCategory::Multimedia,
    DiscCategory::Applications,
    DiscCategory::Coverdiscs,
    DiscCategory::Educational,
    DiscCategory::BonusDiscs,
    DiscCategory::Preproduction,
    DiscCategory::AddOns,
];

impl HumanReadable for DiscCategory {
    const KIND: &'static str = "disc category";

    fn all() -> &'static [Self] {
        ALL_DISC_CATEGORIES
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Games => "Games",
            Self::Demos => "Demos",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Multimedia => "Multimedia",
            Self::Applications => "Applications",
            Self::Coverdiscs => "Coverdiscs",
            Self::Educational => "Educational",
            Self::BonusDiscs => "Bonus Discs",
            Self::Preproduction => "Preproduction",
            Self::AddOns => "Add-Ons",
        })
    }
}

human_readable_str!(DiscCategory);

/// Tri-state answer for yes/no submission fields.
///
/// `Null` means "not determined" and renders as the literal `Yes/No`
/// prompt so a reviewer sees that the field still needs an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YesNo {
    #[default]
    Null,
    No,
    Yes,
}

const ALL_YES_NO: &[YesNo] = &[YesNo::Null, YesNo::No, YesNo::Yes];

impl YesNo {
    pub fn from_bool(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }

    /// `Some(bool)` for a real answer, `None` for `Null`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Null => None,
            Self::No => Some(false),
            Self::Yes => Some(true),
        }
    }

    /// Whether a real yes/no answer was given.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Null)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        Self::from_bool(value)
    }
}

impl HumanReadable for YesNo {
    const KIND: &'static str = "yes/no";

    fn all() -> &'static [Self] {
        ALL_YES_NO
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Null => "Yes/No",
            Self::No => "No",
            Self::Yes => "Yes",
        })
    }
}

human_readable_str!(YesNo);

/// Verification status of a dump entry in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DumpStatus {
    BadDumpRed,
    PossibleBadDumpYellow,
    OriginalMediaBlue,
    TwoOrMoreGreen,
}

const ALL_DUMP_STATUSES: &[DumpStatus] = &[
    DumpStatus::BadDumpRed,
    DumpStatus::PossibleBadDumpYellow,
    DumpStatus::OriginalMediaBlue,
    DumpStatus::TwoOrMoreGreen,
];

impl HumanReadable for DumpStatus {
    const KIND: &'static str = "dump status";

    fn all() -> &'static [Self] {
        ALL_DUMP_STATUSES
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::BadDumpRed => "Bad dump",
            Self::PossibleBadDumpYellow => "Possible bad dump",
            Self::OriginalMediaBlue => "Original media",
            Self::TwoOrMoreGreen => "2 or more dumps",
        })
    }

    /// Colour name the database uses for the status badge.
    fn short_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::BadDumpRed => "red",
            Self::PossibleBadDumpYellow => "yellow",
            Self::OriginalMediaBlue => "blue",
            Self::TwoOrMoreGreen => "green",
        })
    }
}

human_readable_str!(DumpStatus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_round_trip_with_and_without_spaces() {
        for &category in DiscCategory::all() {
            let long = category.long_name().unwrap();
            assert_eq!(long.parse::<DiscCategory>().unwrap(), category);
            let stripped: String = long.split_whitespace().collect();
            assert_eq!(stripped.parse::<DiscCategory>().unwrap(), category);
        }
    }

    #[test]
    fn yes_no_null_renders_as_prompt() {
        assert_eq!(YesNo::Null.long_name(), Some("Yes/No"));
        assert!(!YesNo::Null.is_set());
        assert_eq!(YesNo::from(true), YesNo::Yes);
        assert_eq!(YesNo::No.as_bool(), Some(false));
    }

    #[test]
    fn dump_status_parses_colour() {
        assert_eq!("GREEN".parse::<DumpStatus>().unwrap(), DumpStatus::TwoOrMoreGreen);
        assert_eq!(
            "Possible bad dump".parse::<DumpStatus>().unwrap(),
            DumpStatus::PossibleBadDumpYellow
        );
    }
}
