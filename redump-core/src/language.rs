use serde::{Deserialize, Serialize};

use crate::names::{HumanReadable, human_readable_str};

/// Spoken/written languages a disc can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    Afrikaans,
    Albanian,
    Arabic,
    Armenian,
    Basque,
    Belarusian,
    Bengali,
    Bosnian,
    Bulgarian,
    Burmese,
    Catalan,
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Faroese,
    Filipino,
    Finnish,
    French,
    Gaelic,
    Galician,
    Georgian,
    German,
    Greek,
    Hebrew,
    Hindi,
    Hungarian,
    Icelandic,
    Indonesian,
    Irish,
    Italian,
    Japanese,
    Kazakh,
    Khmer,
    Korean,
    Lao,
    Latin,
    Latvian,
    Lithuanian,
    Luxembourgish,
    Macedonian,
    Malay,
    Maltese,
    Mongolian,
    Nepali,
    Norwegian,
    Persian,
    Polish,
    Portuguese,
    Punjabi,
    Romanian,
    Russian,
    Serbian,
    Sinhala,
    Slovak,
    Slovenian,
    Spanish,
    Swahili,
    Swedish,
    Tamil,
    Thai,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    Welsh,
    Zulu,
}

const ALL_LANGUAGES: &[Language] = &[
    Language::Afrikaans,
    Language::Albanian,
    Language::Arabic,
    Language::Armenian,
    Language::Basque,
    Language::Belarusian,
    Language::Bengali,
    Language::Bosnian,
    Language::Bulgarian,
    Language::Burmese,
    Language::Catalan,
    Language::Chinese,
    Language::Croatian,
    Language::Czech,
    Language::Danish,
    Language::Dutch,
    Language::English,
    Language::Esperanto,
    Language::Estonian,
    Language::Faroese,
    Language::Filipino,
    Language::Finnish,
    Language::French,
    Language::Gaelic,
    Language::Galician,
    Language::Georgian,
    Language::German,
    Language::Greek,
    Language::Hebrew,
    Language::Hindi,
    Language::Hungarian,
    Language::Icelandic,
    Language::Indonesian,
    Language::Irish,
    Language::Italian,
    Language::Japanese,
    Language::Kazakh,
    Language::Khmer,
    Language::Korean,
    Language::Lao,
    Language::Latin,
    Language::Latvian,
    Language::Lithuanian,
    Language::Luxembourgish,
    Language::Macedonian,
    Language::Malay,
    Language::Maltese,
    Language::Mongolian,
    Language::Nepali,
    Language::Norwegian,
    Language::Persian,
    Language::Polish,
    Language::Portuguese,
    Language::Punjabi,
    Language::Romanian,
    Language::Russian,
    Language::Serbian,
    Language::Sinhala,
    Language::Slovak,
    Language::Slovenian,
    Language::Spanish,
    Language::Swahili,
    Language::Swedish,
    Language::Tamil,
    Language::Thai,
    Language::Turkish,
    Language::Ukrainian,
    Language::Urdu,
    Language::Vietnamese,
    Language::Welsh,
    Language::Zulu,
];

impl HumanReadable for Language {
    const KIND: &'static str = "language";

    fn all() -> &'static [Self] {
        ALL_LANGUAGES
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Afrikaans => "Afrikaans",
            Self::Albanian => "Albanian",
            Self::Arabic => "Arabic",
            Self::Armenian => "Armenian",
            Self::Basque => "Basque",
            Self::Belarusian => "Belarusian",
            Self::Bengali => "Bengali",
            Self::Bosnian => "Bosnian",
            Self::Bulgarian => "Bulgarian",
            Self::Burmese => "Burmese",
            Self::Catalan => "Catalan",
            Self::Chinese => "Chinese",
            Self::Croatian => "Croatian",
            Self::Czech => "Czech",
            Self::Danish => "Danish",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Esperanto => "Esperanto",
            Self::Estonian => "Estonian",
            Self::Faroese => "Faroese",
            Self::Filipino => "Filipino",
            Self::Finnish => "Finnish",
            Self::French => "French",
            Self::Gaelic => "Gaelic",
            Self::Galician => "Galician",
            Self::Georgian => "Georgian",
            Self::German => "German",
            Self::Greek => "Greek",
            Self::Hebrew => "Hebrew",
            Self::Hindi => "Hindi",
            Self::Hungarian => "Hungarian",
            Self::Icelandic => "Icelandic",
            Self::Indonesian => "Indonesian",
            Self::Irish => "Irish",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Kazakh => "Kazakh",
            Self::Khmer => "Khmer",
            Self::Korean => "Korean",
            Self::Lao => "Lao",
            Self::Latin => "Latin",
            Self::Latvian => "Latvian",
            Self::Lithuanian => "Lithuanian",
            Self::Luxembourgish => "Luxembourgish",
            Self::Macedonian => "Macedonian",
            Self::Malay => "Malay",
            Self::Maltese => "Maltese",
            Self::Mongolian => "Mongolian",
            Self::Nepali => "Nepali",
            Self::Norwegian => "Norwegian",
            Self::Persian => "Persian",
            Self::Polish => "Polish",
            Self::Portuguese => "Portuguese",
            Self::Punjabi => "Punjabi",
            Self::Romanian => "Romanian",
            Self::Russian => "Russian",
            Self::Serbian => "Serbian",
            Self::Sinhala => "Sinhala",
            Self::Slovak => "Slovak",
            Self::Slovenian => "Slovenian",
            Self::Spanish => "Spanish",
            Self::Swahili => "Swahili",
            Self::Swedish => "Swedish",
            Self::Tamil => "Tamil",
            Self::Thai => "Thai",
            Self::Turkish => "Turkish",
            Self::Ukrainian => "Ukrainian",
            Self::Urdu => "Urdu",
            Self::Vietnamese => "Vietnamese",
            Self::Welsh => "Welsh",
            Self::Zulu => "Zulu",
        })
    }

    /// Three-letter bibliographic code (ISO 639-2/B).
    fn short_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Afrikaans => "afr",
            Self::Albanian => "alb",
            Self::Arabic => "ara",
            Self::Armenian => "arm",
            Self::Basque => "baq",
            Self::Belarusian => "bel",
            Self::Bengali => "ben",
            Self::Bosnian => "bos",
            Self::Bulgarian => "bul",
            Self::Burmese => "bur",
            Self::Catalan => "cat",
            Self::Chinese => "chi",
            Self::Croatian => "hrv",
            Self::Czech => "cze",
            Self::Danish => "dan",
            Self::Dutch => "dut",
            Self::English => "eng",
            Self::Esperanto => "epo",
            Self::Estonian => "est",
            Self::Faroese => "fao",
            Self::Filipino => "fil",
            Self::Finnish => "fin",
            Self::French => "fre",
            Self::Gaelic => "gla",
            Self::Galician => "glg",
            Self::Georgian => "geo",
            Self::German => "ger",
            Self::Greek => "gre",
            Self::Hebrew => "heb",
            Self::Hindi => "hin",
            Self::Hungarian => "hun",
            Self::Icelandic => "ice",
            Self::Indonesian => "ind",
            Self::Irish => "gle",
            Self::Italian => "ita",
            Self::Japanese => "jpn",
            Self::Kazakh => "kaz",
            Self::Khmer => "khm",
            Self::Korean => "kor",
            Self::Lao => "lao",
            Self::Latin => "lat",
            Self::Latvian => "lav",
            Self::Lithuanian => "lit",
            Self::Luxembourgish => "ltz",
            Self::Macedonian => "mac",
            Self::Malay => "may",
            Self::Maltese => "mlt",
            Self::Mongolian => "mon",
            Self::Nepali => "nep",
            Self::Norwegian => "nor",
            Self::Persian => "per",
            Self::Polish => "pol",
            Self::Portuguese => "por",
            Self::Punjabi => "pan",
            Self::Romanian => "rum",
            Self::Russian => "rus",
            Self::Serbian => "srp",
            Self::Sinhala => "sin",
            Self::Slovak => "slo",
            Self::Slovenian => "slv",
            Self::Spanish => "spa",
            Self::Swahili => "swa",
            Self::Swedish => "swe",
            Self::Tamil => "tam",
            Self::Thai => "tha",
            Self::Turkish => "tur",
            Self::Ukrainian => "ukr",
            Self::Urdu => "urd",
            Self::Vietnamese => "vie",
            Self::Welsh => "wel",
            Self::Zulu => "zul",
        })
    }
}

human_readable_str!(Language);

/// How a multi-language PlayStation disc lets the player pick a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageSelection {
    BiosSettings,
    LanguageSelector,
    OptionsMenu,
}

const ALL_LANGUAGE_SELECTIONS: &[LanguageSelection] = &[
    LanguageSelection::BiosSettings,
    LanguageSelection::LanguageSelector,
    LanguageSelection::OptionsMenu,
];

impl HumanReadable for LanguageSelection {
    const KIND: &'static str = "language selection";

    fn all() -> &'static [Self] {
        ALL_LANGUAGE_SELECTIONS
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::BiosSettings => "Bios settings",
            Self::LanguageSelector => "Language selector",
            Self::OptionsMenu => "Options menu",
        })
    }
}

human_readable_str!(LanguageSelection);
