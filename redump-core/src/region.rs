use serde::{Deserialize, Serialize};

use crate::names::{HumanReadable, human_readable_str};

/// Release regions recognized by the database.
///
/// Includes the composite regions the database lists as their own entries
/// (e.g. "USA, Europe"); those are not decomposed into their parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Argentina,
    Asia,
    Australia,
    Austria,
    Belgium,
    Brazil,
    Bulgaria,
    Canada,
    China,
    Croatia,
    Czechia,
    Denmark,
    Estonia,
    Europe,
    Finland,
    France,
    Germany,
    Greece,
    HongKong,
    Hungary,
    Iceland,
    India,
    Indonesia,
    Ireland,
    Israel,
    Italy,
    Japan,
    Korea,
    LatinAmerica,
    Lithuania,
    Mexico,
    MiddleEast,
    Netherlands,
    NewZealand,
    Norway,
    Poland,
    Portugal,
    Romania,
    Russia,
    Scandinavia,
    Serbia,
    Singapore,
    Slovakia,
    Slovenia,
    SouthAfrica,
    Spain,
    Sweden,
    Switzerland,
    Taiwan,
    Thailand,
    Turkey,
    UnitedArabEmirates,
    UnitedKingdom,
    Ukraine,
    Usa,
    World,

    // Composite regions
    AsiaEurope,
    AsiaUsa,
    AustraliaGermany,
    AustraliaNewZealand,
    AustriaSwitzerland,
    BelgiumNetherlands,
    EuropeAsia,
    EuropeAustralia,
    EuropeCanada,
    EuropeGermany,
    FranceSpain,
    GreaterChina,
    JapanAsia,
    JapanEurope,
    JapanKorea,
    JapanUsa,
    SpainPortugal,
    UkAustralia,
    UsaAsia,
    UsaAustralia,
    UsaBrazil,
    UsaCanada,
    UsaEurope,
    UsaGermany,
    UsaJapan,
    UsaKorea,
}

const ALL_REGIONS: &[Region] = &[
    Region::Argentina,
    Region::Asia,
    Region::Australia,
    Region::Austria,
    Region::Belgium,
    Region::Brazil,
    Region::Bulgaria,
    Region::Canada,
    Region::China,
    Region::Croatia,
    Region::Czechia,
    Region::Denmark,
    Region::Estonia,
    Region::Europe,
    Region::Finland,
    Region::France,
    Region::Germany,
    Region::Greece,
    Region::HongKong,
    Region::Hungary,
    Region::Iceland,
    Region::India,
    Region::Indonesia,
    Region::Ireland,
    Region::Israel,
    Region::Italy,
    Region::Japan,
    Region::Korea,
    Region::LatinAmerica,
    Region::Lithuania,
    Region::Mexico,
    Region::MiddleEast,
    Region::Netherlands,
    Region::NewZealand,
    Region::Norway,
    Region::Poland,
    Region::Portugal,
    Region::Romania,
    Region::Russia,
    Region::Scandinavia,
    Region::Serbia,
    Region::Singapore,
    Region::Slovakia,
    Region::Slovenia,
    Region::SouthAfrica,
    Region::Spain,
    Region::Sweden,
    Region::Switzerland,
    Region::Taiwan,
    Region::Thailand,
    Region::Turkey,
    Region::UnitedArabEmirates,
    Region::UnitedKingdom,
    Region::Ukraine,
    Region::Usa,
    Region::World,
    Region::AsiaEurope,
    Region::AsiaUsa,
    Region::AustraliaGermany,
    Region::AustraliaNewZealand,
    Region::AustriaSwitzerland,
    Region::BelgiumNetherlands,
    Region::EuropeAsia,
    Region::EuropeAustralia,
    Region::EuropeCanada,
    Region::EuropeGermany,
    Region::FranceSpain,
    Region::GreaterChina,
    Region::JapanAsia,
    Region::JapanEurope,
    Region::JapanKorea,
    Region::JapanUsa,
    Region::SpainPortugal,
    Region::UkAustralia,
    Region::UsaAsia,
    Region::UsaAustralia,
    Region::UsaBrazil,
    Region::UsaCanada,
    Region::UsaEurope,
    Region::UsaGermany,
    Region::UsaJapan,
    Region::UsaKorea,
];

impl Region {
    /// Whether this is a multi-country region entry.
    pub fn is_composite(&self) -> bool {
        self.short_name().is_some_and(|code| code.contains(','))
            || matches!(self, Self::GreaterChina)
    }
}

impl HumanReadable for Region {
    const KIND: &'static str = "region";

    fn all() -> &'static [Self] {
        ALL_REGIONS
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Argentina => "Argentina",
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::Austria => "Austria",
            Self::Belgium => "Belgium",
            Self::Brazil => "Brazil",
            Self::Bulgaria => "Bulgaria",
            Self::Canada => "Canada",
            Self::China => "China",
            Self::Croatia => "Croatia",
            Self::Czechia => "Czechia",
            Self::Denmark => "Denmark",
            Self::Estonia => "Estonia",
            Self::Europe => "Europe",
            Self::Finland => "Finland",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::Greece => "Greece",
            Self::HongKong => "Hong Kong",
            Self::Hungary => "Hungary",
            Self::Iceland => "Iceland",
            Self::India => "India",
            Self::Indonesia => "Indonesia",
            Self::Ireland => "Ireland",
            Self::Israel => "Israel",
            Self::Italy => "Italy",
            Self::Japan => "Japan",
            Self::Korea => "Korea",
            Self::LatinAmerica => "Latin America",
            Self::Lithuania => "Lithuania",
            Self::Mexico => "Mexico",
            Self::MiddleEast => "Middle East",
            Self::Netherlands => "Netherlands",
            Self::NewZealand => "New Zealand",
            Self::Norway => "Norway",
            Self::Poland => "Poland",
            Self::Portugal => "Portugal",
            Self::Romania => "Romania",
            Self::Russia => "Russia",
            Self::Scandinavia => "Scandinavia",
            Self::Serbia => "Serbia",
            Self::Singapore => "Singapore",
            Self::Slovakia => "Slovakia",
            Self::Slovenia => "Slovenia",
            Self::SouthAfrica => "South Africa",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::Switzerland => "Switzerland",
            Self::Taiwan => "Taiwan",
            Self::Thailand => "Thailand",
            Self::Turkey => "Turkey",
            Self::UnitedArabEmirates => "United Arab Emirates",
            Self::UnitedKingdom => "UK",
            Self::Ukraine => "Ukraine",
            Self::Usa => "USA",
            Self::World => "World",
            Self::AsiaEurope => "Asia, Europe",
            Self::AsiaUsa => "Asia, USA",
            Self::AustraliaGermany => "Australia, Germany",
            Self::AustraliaNewZealand => "Australia, New Zealand",
            Self::AustriaSwitzerland => "Austria, Switzerland",
            Self::BelgiumNetherlands => "Belgium, Netherlands",
            Self::EuropeAsia => "Europe, Asia",
            Self::EuropeAustralia => "Europe, Australia",
            Self::EuropeCanada => "Europe, Canada",
            Self::EuropeGermany => "Europe, Germany",
            Self::FranceSpain => "France, Spain",
            Self::GreaterChina => "Greater China",
            Self::JapanAsia => "Japan, Asia",
            Self::JapanEurope => "Japan, Europe",
            Self::JapanKorea => "Japan, Korea",
            Self::JapanUsa => "Japan, USA",
            Self::SpainPortugal => "Spain, Portugal",
            Self::UkAustralia => "UK, Australia",
            Self::UsaAsia => "USA, Asia",
            Self::UsaAustralia => "USA, Australia",
            Self::UsaBrazil => "USA, Brazil",
            Self::UsaCanada => "USA, Canada",
            Self::UsaEurope => "USA, Europe",
            Self::UsaGermany => "USA, Germany",
            Self::UsaJapan => "USA, Japan",
            Self::UsaKorea => "USA, Korea",
        })
    }

    /// Region code as used in the database's filters (e.g. `U`, `J,E`).
    fn short_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Argentina => "Ar",
            Self::Asia => "A",
            Self::Australia => "Au",
            Self::Austria => "At",
            Self::Belgium => "Be",
            Self::Brazil => "B",
            Self::Bulgaria => "Bg",
            Self::Canada => "Ca",
            Self::China => "C",
            Self::Croatia => "Hr",
            Self::Czechia => "Cz",
            Self::Denmark => "Dk",
            Self::Estonia => "Ee",
            Self::Europe => "E",
            Self::Finland => "Fi",
            Self::France => "F",
            Self::Germany => "G",
            Self::Greece => "Gr",
            Self::HongKong => "Hk",
            Self::Hungary => "H",
            Self::Iceland => "Is",
            Self::India => "In",
            Self::Indonesia => "Id",
            Self::Ireland => "Ie",
            Self::Israel => "Il",
            Self::Italy => "I",
            Self::Japan => "J",
            Self::Korea => "K",
            Self::LatinAmerica => "LAm",
            Self::Lithuania => "Lt",
            Self::Mexico => "Mx",
            Self::MiddleEast => "ME",
            Self::Netherlands => "N",
            Self::NewZealand => "Nz",
            Self::Norway => "No",
            Self::Poland => "P",
            Self::Portugal => "Pt",
            Self::Romania => "Ro",
            Self::Russia => "R",
            Self::Scandinavia => "Sca",
            Self::Serbia => "Rs",
            Self::Singapore => "Sg",
            Self::Slovakia => "Sk",
            Self::Slovenia => "Si",
            Self::SouthAfrica => "Za",
            Self::Spain => "S",
            Self::Sweden => "Sw",
            Self::Switzerland => "Ch",
            Self::Taiwan => "Tw",
            Self::Thailand => "Th",
            Self::Turkey => "Tr",
            Self::UnitedArabEmirates => "Uae",
            Self::UnitedKingdom => "Uk",
            Self::Ukraine => "Ua",
            Self::Usa => "U",
            Self::World => "W",
            Self::AsiaEurope => "A,E",
            Self::AsiaUsa => "A,U",
            Self::AustraliaGermany => "Au,G",
            Self::AustraliaNewZealand => "Au,Nz",
            Self::AustriaSwitzerland => "At,Ch",
            Self::BelgiumNetherlands => "Be,N",
            Self::EuropeAsia => "E,A",
            Self::EuropeAustralia => "E,Au",
            Self::EuropeCanada => "E,Ca",
            Self::EuropeGermany => "E,G",
            Self::FranceSpain => "F,S",
            Self::GreaterChina => "GC",
            Self::JapanAsia => "J,A",
            Self::JapanEurope => "J,E",
            Self::JapanKorea => "J,K",
            Self::JapanUsa => "J,U",
            Self::SpainPortugal => "S,Pt",
            Self::UkAustralia => "Uk,Au",
            Self::UsaAsia => "U,A",
            Self::UsaAustralia => "U,Au",
            Self::UsaBrazil => "U,B",
            Self::UsaCanada => "U,Ca",
            Self::UsaEurope => "U,E",
            Self::UsaGermany => "U,G",
            Self::UsaJapan => "U,J",
            Self::UsaKorea => "U,K",
        })
    }
}

human_readable_str!(Region);

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
