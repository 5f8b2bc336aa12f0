//! Physical media vocabularies.
//!
//! [`MediaType`] is the coarse family a dumping tool detects ("this is a
//! Blu-ray"). [`DiscType`] is the database's tier-specific vocabulary
//! ("BD-66"). Going from variant to family is lossless; going the other way
//! picks the lowest tier as a placeholder until a normalizer pass refines it.

use serde::{Deserialize, Serialize};

use crate::names::{HumanReadable, human_readable_str};

/// Coarse physical media family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MediaType {
    // Optical
    BluRay,
    CdRom,
    Dvd,
    GdRom,
    HdDvd,
    Umd,
    LaserDisc,
    NintendoGameCubeGameDisc,
    NintendoWiiOpticalDisc,
    NintendoWiiUOpticalDisc,

    // Non-optical
    Cartridge,
    Cassette,
    FloppyDisk,
    HardDisk,
}

const ALL_MEDIA_TYPES: &[MediaType] = &[
    MediaType::BluRay,
    MediaType::CdRom,
    MediaType::Dvd,
    MediaType::GdRom,
    MediaType::HdDvd,
    MediaType::Umd,
    MediaType::LaserDisc,
    MediaType::NintendoGameCubeGameDisc,
    MediaType::NintendoWiiOpticalDisc,
    MediaType::NintendoWiiUOpticalDisc,
    MediaType::Cartridge,
    MediaType::Cassette,
    MediaType::FloppyDisk,
    MediaType::HardDisk,
];

impl MediaType {
    /// Default tier-specific variant for this family.
    ///
    /// Lossy: multi-tier families map to their single-layer variant, and
    /// families the database has no disc type for return `None`.
    pub fn to_disc_type(&self) -> Option<DiscType> {
        match self {
            Self::BluRay => Some(DiscType::Bd25),
            Self::CdRom => Some(DiscType::Cd),
            Self::Dvd => Some(DiscType::Dvd5),
            Self::GdRom => Some(DiscType::GdRom),
            Self::HdDvd => Some(DiscType::HdDvdSl),
            Self::Umd => Some(DiscType::UmdSl),
            Self::NintendoGameCubeGameDisc => Some(DiscType::NintendoGameCubeGameDisc),
            Self::NintendoWiiOpticalDisc => Some(DiscType::NintendoWiiOpticalDiscSl),
            Self::NintendoWiiUOpticalDisc => Some(DiscType::NintendoWiiUOpticalDiscSl),
            Self::LaserDisc
            | Self::Cartridge
            | Self::Cassette
            | Self::FloppyDisk
            | Self::HardDisk => None,
        }
    }

    /// Whether this family is an optical disc.
    pub fn is_optical(&self) -> bool {
        !matches!(
            self,
            Self::Cartridge | Self::Cassette | Self::FloppyDisk | Self::HardDisk
        )
    }
}

impl HumanReadable for MediaType {
    const KIND: &'static str = "media type";

    fn all() -> &'static [Self] {
        ALL_MEDIA_TYPES
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::BluRay => "Blu-ray",
            Self::CdRom => "CD-ROM",
            Self::Dvd => "DVD",
            Self::GdRom => "GD-ROM",
            Self::HdDvd => "HD-DVD",
            Self::Umd => "UMD",
            Self::LaserDisc => "LaserDisc",
            Self::NintendoGameCubeGameDisc => "Nintendo GameCube Game Disc",
            Self::NintendoWiiOpticalDisc => "Nintendo Wii Optical Disc",
            Self::NintendoWiiUOpticalDisc => "Nintendo Wii U Optical Disc",
            Self::Cartridge => "Cartridge",
            Self::Cassette => "Cassette Tape",
            Self::FloppyDisk => "Floppy Disk",
            Self::HardDisk => "Hard Disk",
        })
    }

    fn short_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::BluRay => "bd",
            Self::CdRom => "cdrom",
            Self::Dvd => "dvd",
            Self::GdRom => "gdrom",
            Self::HdDvd => "hddvd",
            Self::Umd => "umd",
            Self::LaserDisc => "ld",
            Self::NintendoGameCubeGameDisc => "gcgd",
            Self::NintendoWiiOpticalDisc => "wiiod",
            Self::NintendoWiiUOpticalDisc => "wiiuod",
            Self::Cartridge => "cart",
            Self::Cassette => "cass",
            Self::FloppyDisk => "fd",
            Self::HardDisk => "hdd",
        })
    }
}

human_readable_str!(MediaType);

/// Tier-specific disc type, as accepted by the database's submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiscType {
    Bd25,
    Bd33,
    Bd50,
    Bd66,
    Bd100,
    Bd128,
    Cd,
    Dvd5,
    Dvd9,
    GdRom,
    HdDvdSl,
    HdDvdDl,
    MilCd,
    NintendoGameCubeGameDisc,
    NintendoWiiOpticalDiscSl,
    NintendoWiiOpticalDiscDl,
    NintendoWiiUOpticalDiscSl,
    UmdSl,
    UmdDl,
}

const ALL_DISC_TYPES: &[DiscType] = &[
    DiscType::Bd25,
    DiscType::Bd33,
    DiscType::Bd50,
    DiscType::Bd66,
    DiscType::Bd100,
    DiscType::Bd128,
    DiscType::Cd,
    DiscType::Dvd5,
    DiscType::Dvd9,
    DiscType::GdRom,
    DiscType::HdDvdSl,
    DiscType::HdDvdDl,
    DiscType::MilCd,
    DiscType::NintendoGameCubeGameDisc,
    DiscType::NintendoWiiOpticalDiscSl,
    DiscType::NintendoWiiOpticalDiscDl,
    DiscType::NintendoWiiUOpticalDiscSl,
    DiscType::UmdSl,
    DiscType::UmdDl,
];

impl DiscType {
    /// The coarse family this variant belongs to.
    pub fn to_media_type(&self) -> Option<MediaType> {
        match self {
            Self::Bd25 | Self::Bd33 | Self::Bd50 | Self::Bd66 | Self::Bd100 | Self::Bd128 => {
                Some(MediaType::BluRay)
            }
            Self::Cd | Self::MilCd => Some(MediaType::CdRom),
            Self::Dvd5 | Self::Dvd9 => Some(MediaType::Dvd),
            Self::GdRom => Some(MediaType::GdRom),
            Self::HdDvdSl | Self::HdDvdDl => Some(MediaType::HdDvd),
            Self::NintendoGameCubeGameDisc => Some(MediaType::NintendoGameCubeGameDisc),
            Self::NintendoWiiOpticalDiscSl | Self::NintendoWiiOpticalDiscDl => {
                Some(MediaType::NintendoWiiOpticalDisc)
            }
            Self::NintendoWiiUOpticalDiscSl => Some(MediaType::NintendoWiiUOpticalDisc),
            Self::UmdSl | Self::UmdDl => Some(MediaType::Umd),
        }
    }
}

impl HumanReadable for DiscType {
    const KIND: &'static str = "disc type";

    fn all() -> &'static [Self] {
        ALL_DISC_TYPES
    }

    fn long_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Bd25 => "BD-25",
            Self::Bd33 => "BD-33",
            Self::Bd50 => "BD-50",
            Self::Bd66 => "BD-66",
            Self::Bd100 => "BD-100",
            Self::Bd128 => "BD-128",
            Self::Cd => "CD",
            Self::Dvd5 => "DVD-5",
            Self::Dvd9 => "DVD-9",
            Self::GdRom => "GD-ROM",
            Self::HdDvdSl => "HD-DVD SL",
            Self::HdDvdDl => "HD-DVD DL",
            Self::MilCd => "MIL-CD",
            Self::NintendoGameCubeGameDisc => "Nintendo GameCube Game Disc",
            Self::NintendoWiiOpticalDiscSl => "Nintendo Wii Optical Disc SL",
            Self::NintendoWiiOpticalDiscDl => "Nintendo Wii Optical Disc DL",
            Self::NintendoWiiUOpticalDiscSl => "Nintendo Wii U Optical Disc SL",
            Self::UmdSl => "UMD SL",
            Self::UmdDl => "UMD DL",
        })
    }

    fn short_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Bd25 => "bd25",
            Self::Bd33 => "bd33",
            Self::Bd50 => "bd50",
            Self::Bd66 => "bd66",
            Self::Bd100 => "bd100",
            Self::Bd128 => "bd128",
            Self::Cd => "cd",
            Self::Dvd5 => "dvd5",
            Self::Dvd9 => "dvd9",
            Self::GdRom => "gdrom",
            Self::HdDvdSl => "hddvdsl",
            Self::HdDvdDl => "hddvddl",
            Self::MilCd => "milcd",
            Self::NintendoGameCubeGameDisc => "gcgd",
            Self::NintendoWiiOpticalDiscSl => "wiiodsl",
            Self::NintendoWiiOpticalDiscDl => "wiioddl",
            Self::NintendoWiiUOpticalDiscSl => "wiiuodsl",
            Self::UmdSl => "umdsl",
            Self::UmdDl => "umddl",
        })
    }
}

human_readable_str!(DiscType);

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
