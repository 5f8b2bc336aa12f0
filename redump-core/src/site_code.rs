//! Site codes: the well-known annotation tags the database recognizes inside
//! the free-text comments and contents fields.
//!
//! Each tag renders as a short bracketed marker (`[T:ISN]`) followed by its
//! value. The per-code facets are fixed: whether the value gets its own
//! paragraph, whether the tag is a bare flag, and which of the two text
//! blocks it belongs to.

use serde::{Deserialize, Serialize};

use crate::names::{HumanReadable, human_readable_str};

/// A well-known annotation kind for the comments/contents blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SiteCode {
    // Identifying info
    AlternativeTitle,
    AlternativeForeignTitle,
    InternalName,
    InternalSerialName,
    VolumeLabel,
    Multisession,
    UniversalHash,
    RingNonZeroDataStart,
    RingPerfectAudioOffset,
    Xmid,
    XeMid,
    DmiHash,
    PfiHash,
    SsHash,
    SsVersion,
    Filename,
    BbfcRegistrationNumber,
    CdProjektId,
    DiscHologramId,
    DnasDiscId,
    Isbn,
    Issn,
    Ppn,
    VfcCode,
    Genre,
    Series,
    PostgapType,
    Vcd,

    // Publisher and company IDs
    TwoKGamesId,
    ThreeDoId,
    AcclaimId,
    ActivisionId,
    BandaiId,
    BethesdaId,
    ElectronicArtsId,
    FoxInteractiveId,
    GtInteractiveId,
    JasracId,
    KingRecordsId,
    KoeiId,
    KonamiId,
    LucasArtsId,
    MicrosoftId,
    NaganoId,
    NamcoId,
    NipponIchiSoftwareId,
    OriginId,
    PonyCanyonId,
    SegaId,
    SelenId,
    SierraId,
    TaitoId,
    UbisoftId,
    ValveId,

    // Other comment tags
    PcMacHybrid,
    CompatibleOs,
    LogsLink,

    // Contents
    Games,
    NetYarozeGames,
    PlayableDemos,
    RollingDemos,
    TechDemos,
    GameFootage,
    Videos,
    Patches,
    Savegames,
    Extras,
    Applications,
}

const ALL_SITE_CODES: &[SiteCode] = &[
    SiteCode::AlternativeTitle,
    SiteCode::AlternativeForeignTitle,
    SiteCode::InternalName,
    SiteCode::InternalSerialName,
    SiteCode::VolumeLabel,
    SiteCode::Multisession,
    SiteCode::UniversalHash,
    SiteCode::RingNonZeroDataStart,
    SiteCode::RingPerfectAudioOffset,
    SiteCode::Xmid,
    SiteCode::XeMid,
    SiteCode::DmiHash,
    SiteCode::PfiHash,
    SiteCode::SsHash,
    SiteCode::SsVersion,
    SiteCode::Filename,
    SiteCode::BbfcRegistrationNumber,
    SiteCode::CdProjektId,
    SiteCode::DiscHologramId,
    SiteCode::DnasDiscId,
    SiteCode::Isbn,
    SiteCode::Issn,
    SiteCode::Ppn,
    SiteCode::VfcCode,
    SiteCode::Genre,
    SiteCode::Series,
    SiteCode::PostgapType,
    SiteCode::Vcd,
    SiteCode::TwoKGamesId,
    SiteCode::ThreeDoId,
    SiteCode::AcclaimId,
    SiteCode::ActivisionId,
    SiteCode::BandaiId,
    SiteCode::BethesdaId,
    SiteCode::ElectronicArtsId,
    SiteCode::FoxInteractiveId,
    SiteCode::GtInteractiveId,
    SiteCode::JasracId,
    SiteCode::KingRecordsId,
    SiteCode::KoeiId,
    SiteCode::KonamiId,
    SiteCode::LucasArtsId,
    SiteCode::MicrosoftId,
    SiteCode::NaganoId,
    SiteCode::NamcoId,
    SiteCode::NipponIchiSoftwareId,
    SiteCode::OriginId,
    SiteCode::PonyCanyonId,
    SiteCode::SegaId,
    SiteCode::SelenId,
    SiteCode::SierraId,
    SiteCode::TaitoId,
    SiteCode::UbisoftId,
    SiteCode::ValveId,
    SiteCode::PcMacHybrid,
    SiteCode::CompatibleOs,
    SiteCode::LogsLink,
    SiteCode::Games,
    SiteCode::NetYarozeGames,
    SiteCode::PlayableDemos,
    SiteCode::RollingDemos,
    SiteCode::TechDemos,
    SiteCode::GameFootage,
    SiteCode::Videos,
    SiteCode::Patches,
    SiteCode::Savegames,
    SiteCode::Extras,
    SiteCode::Applications,
];

impl SiteCode {
    /// Whether the value is written as its own paragraph under the tag
    /// instead of inline after it.
    pub fn is_multi_line(&self) -> bool {
        matches!(
            self,
            Self::Multisession
                | Self::Games
                | Self::NetYarozeGames
                | Self::PlayableDemos
                | Self::RollingDemos
                | Self::TechDemos
                | Self::GameFootage
                | Self::Videos
                | Self::Patches
                | Self::Savegames
                | Self::Extras
                | Self::Applications
        )
    }

    /// Whether the tag is a bare flag: emitted with no value when set,
    /// omitted entirely otherwise.
    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            Self::PostgapType
                | Self::Vcd
                | Self::PcMacHybrid
        )
    }

    /// Whether the tag belongs in the contents block by default.
    pub fn is_content_code(&self) -> bool {
        matches!(
            self,
            Self::Games
                | Self::NetYarozeGames
                | Self::PlayableDemos
                | Self::RollingDemos
                | Self::TechDemos
                | Self::GameFootage
                | Self::Videos
                | Self::Patches
                | Self::Savegames
                | Self::Extras
                | Self::Applications
        )
    }

    /// Whether the tag belongs in the comments block by default.
    pub fn is_comment_code(&self) -> bool {
        !self.is_content_code()
    }
}

impl HumanReadable for SiteCode {
    const KIND: &'static str = "site code";

    fn all() -> &'static [Self] {
        ALL_SITE_CODES
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::AlternativeTitle => "Alternative Title",
            Self::AlternativeForeignTitle => "Alternative Foreign Title",
            Self::InternalName => "Internal Name",
            Self::InternalSerialName => "Internal Serial",
            Self::VolumeLabel => "Volume Label",
            Self::Multisession => "Multisession",
            Self::UniversalHash => "Universal Hash (SHA-1)",
            Self::RingNonZeroDataStart => "Ring non-zero data start",
            Self::RingPerfectAudioOffset => "Ring Perfect Audio Offset",
            Self::Xmid => "XMID",
            Self::XeMid => "XeMID",
            Self::DmiHash => "DMI Hash",
            Self::PfiHash => "PFI Hash",
            Self::SsHash => "SS Hash",
            Self::SsVersion => "SS Version",
            Self::Filename => "Filename",
            Self::BbfcRegistrationNumber => "BBFC Reg. No.",
            Self::CdProjektId => "CD Projekt ID",
            Self::DiscHologramId => "Disc Hologram ID",
            Self::DnasDiscId => "DNAS Disc ID",
            Self::Isbn => "ISBN",
            Self::Issn => "ISSN",
            Self::Ppn => "PPN",
            Self::VfcCode => "VFC code",
            Self::Genre => "Genre",
            Self::Series => "Series",
            Self::PostgapType => "Postgap type: Form 2",
            Self::Vcd => "V-CD",
            Self::TwoKGamesId => "2K Games ID",
            Self::ThreeDoId => "3DO ID",
            Self::AcclaimId => "Acclaim ID",
            Self::ActivisionId => "Activision ID",
            Self::BandaiId => "Bandai ID",
            Self::BethesdaId => "Bethesda ID",
            Self::ElectronicArtsId => "Electronic Arts ID",
            Self::FoxInteractiveId => "Fox Interactive ID",
            Self::GtInteractiveId => "GT Interactive ID",
            Self::JasracId => "JASRAC ID",
            Self::KingRecordsId => "King Records ID",
            Self::KoeiId => "Koei ID",
            Self::KonamiId => "Konami ID",
            Self::LucasArtsId => "Lucas Arts ID",
            Self::MicrosoftId => "Microsoft ID",
            Self::NaganoId => "Nagano ID",
            Self::NamcoId => "Namco ID",
            Self::NipponIchiSoftwareId => "Nippon Ichi Software ID",
            Self::OriginId => "Origin ID",
            Self::PonyCanyonId => "Pony Canyon ID",
            Self::SegaId => "Sega ID",
            Self::SelenId => "Selen ID",
            Self::SierraId => "Sierra ID",
            Self::TaitoId => "Taito ID",
            Self::UbisoftId => "Ubisoft ID",
            Self::ValveId => "Valve ID",
            Self::PcMacHybrid => "PC/Mac Hybrid",
            Self::CompatibleOs => "Compatible OS",
            Self::LogsLink => "Logs Link",
            Self::Games => "Games",
            Self::NetYarozeGames => "Net Yaroze Games",
            Self::PlayableDemos => "Playable Demos",
            Self::RollingDemos => "Rolling Demos",
            Self::TechDemos => "Tech Demos",
            Self::GameFootage => "Game Footage",
            Self::Videos => "Videos",
            Self::Patches => "Patches",
            Self::Savegames => "Savegames",
            Self::Extras => "Extras",
            Self::Applications => "Applications",
        })
    }

    /// The bracketed tag written into the text block.
    fn short_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::AlternativeTitle => "[T:ALT]",
            Self::AlternativeForeignTitle => "[T:ALTF]",
            Self::InternalName => "[T:IN]",
            Self::InternalSerialName => "[T:ISN]",
            Self::VolumeLabel => "[T:VOL]",
            Self::Multisession => "[T:MULTISESSION]",
            Self::UniversalHash => "[T:UH]",
            Self::RingNonZeroDataStart => "[T:RNZDS]",
            Self::RingPerfectAudioOffset => "[T:RPAO]",
            Self::Xmid => "[T:XMID]",
            Self::XeMid => "[T:XEMID]",
            Self::DmiHash => "[T:DMIHASH]",
            Self::PfiHash => "[T:PFIHASH]",
            Self::SsHash => "[T:SSHASH]",
            Self::SsVersion => "[T:SSVERSION]",
            Self::Filename => "[T:FILENAME]",
            Self::BbfcRegistrationNumber => "[T:BBFC]",
            Self::CdProjektId => "[T:CPID]",
            Self::DiscHologramId => "[T:DHID]",
            Self::DnasDiscId => "[T:DNAS]",
            Self::Isbn => "[T:ISBN]",
            Self::Issn => "[T:ISSN]",
            Self::Ppn => "[T:PPN]",
            Self::VfcCode => "[T:VFC]",
            Self::Genre => "[T:GEN]",
            Self::Series => "[T:SERIES]",
            Self::PostgapType => "[T:PT2]",
            Self::Vcd => "[T:VCD]",
            Self::TwoKGamesId => "[T:2K]",
            Self::ThreeDoId => "[T:3DO]",
            Self::AcclaimId => "[T:ACC]",
            Self::ActivisionId => "[T:ACT]",
            Self::BandaiId => "[T:BID]",
            Self::BethesdaId => "[T:BETH]",
            Self::ElectronicArtsId => "[T:EAID]",
            Self::FoxInteractiveId => "[T:FIID]",
            Self::GtInteractiveId => "[T:GTID]",
            Self::JasracId => "[T:JID]",
            Self::KingRecordsId => "[T:KIRZ]",
            Self::KoeiId => "[T:KOEI]",
            Self::KonamiId => "[T:KID]",
            Self::LucasArtsId => "[T:LAID]",
            Self::MicrosoftId => "[T:MSID]",
            Self::NaganoId => "[T:NGID]",
            Self::NamcoId => "[T:NID]",
            Self::NipponIchiSoftwareId => "[T:NPS]",
            Self::OriginId => "[T:OID]",
            Self::PonyCanyonId => "[T:PCID]",
            Self::SegaId => "[T:SID]",
            Self::SelenId => "[T:SNID]",
            Self::SierraId => "[T:SIE]",
            Self::TaitoId => "[T:TID]",
            Self::UbisoftId => "[T:UID]",
            Self::ValveId => "[T:VID]",
            Self::PcMacHybrid => "[T:PCMAC]",
            Self::CompatibleOs => "[T:OS]",
            Self::LogsLink => "[T:LOGS]",
            Self::Games => "[T:G]",
            Self::NetYarozeGames => "[T:NYG]",
            Self::PlayableDemos => "[T:PD]",
            Self::RollingDemos => "[T:RD]",
            Self::TechDemos => "[T:TD]",
            Self::GameFootage => "[T:GF]",
            Self::Videos => "[T:V]",
            Self::Patches => "[T:P]",
            Self::Savegames => "[T:SG]",
            Self::Extras => "[T:X]",
            Self::Applications => "[T:APP]",
        })
    }
}

human_readable_str!(SiteCode);

#[cfg(test)]
#[path = "tests/site_code_tests.rs"]
mod tests;
