//! Disc-type normalization.
//!
//! Dumping tools usually only know the coarse media family of a disc. The
//! database wants the tier-specific variant (DVD-9 vs DVD-5, BD-66 vs BD-50),
//! which follows from the layer breaks, the disc size and, for Blu-ray, the
//! PIC disc type identifier. The same tier decision drives both the stored
//! [`DiscType`] and the "Media Type" label written into reports, so the two
//! can never disagree.
//!
//! Two Blu-ray size threshold pairs are in circulation. The primary pair is
//! used unless a caller (or the settings file) asks for the alternate one;
//! which of the two is authoritative is still unresolved.

use redump_core::{DiscType, HumanReadable, MediaType, SubmissionInfo};
use serde::{Deserialize, Serialize};

/// PIC disc type identifier of an Ultra HD Blu-ray.
pub const PIC_ULTRA_IDENTIFIER: &str = "BDU";

/// Single-layer sizes above this are BD-33.
pub const BD33_SIZE_THRESHOLD: u64 = 26_843_531_856;

/// Dual-layer sizes above this are BD-66.
pub const BD66_SIZE_THRESHOLD: u64 = 53_687_063_712;

/// Alternate single-layer BD-33 threshold.
pub const ALT_BD33_SIZE_THRESHOLD: u64 = 25_025_314_816;

/// Alternate dual-layer BD-66 threshold.
pub const ALT_BD66_SIZE_THRESHOLD: u64 = 50_050_629_632;

/// Size thresholds separating the Blu-ray capacity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BluRayThresholds {
    /// Single-layer discs larger than this are BD-33.
    pub bd33: u64,
    /// Dual-layer discs larger than this are BD-66.
    pub bd66: u64,
}

impl BluRayThresholds {
    pub const PRIMARY: Self = Self {
        bd33: BD33_SIZE_THRESHOLD,
        bd66: BD66_SIZE_THRESHOLD,
    };

    pub const ALTERNATE: Self = Self {
        bd33: ALT_BD33_SIZE_THRESHOLD,
        bd66: ALT_BD66_SIZE_THRESHOLD,
    };
}

impl Default for BluRayThresholds {
    fn default() -> Self {
        Self::PRIMARY
    }
}

/// Named threshold pair, as stored in the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdProfile {
    #[default]
    Primary,
    Alternate,
}

impl ThresholdProfile {
    pub fn thresholds(&self) -> BluRayThresholds {
        match self {
            Self::Primary => BluRayThresholds::PRIMARY,
            Self::Alternate => BluRayThresholds::ALTERNATE,
        }
    }
}

/// Measured layout of a disc: the inputs every tier decision is made from.
///
/// A layer break of 0 means the break is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscLayout<'a> {
    pub layerbreak: u64,
    pub layerbreak2: u64,
    pub layerbreak3: u64,
    pub pic_identifier: Option<&'a str>,
    pub size: u64,
}

impl<'a> DiscLayout<'a> {
    pub fn new(
        layerbreak: u64,
        layerbreak2: u64,
        layerbreak3: u64,
        pic_identifier: Option<&'a str>,
        size: u64,
    ) -> Self {
        Self {
            layerbreak,
            layerbreak2,
            layerbreak3,
            pic_identifier,
            size,
        }
    }

    fn is_ultra(&self) -> bool {
        self.pic_identifier == Some(PIC_ULTRA_IDENTIFIER)
    }

    fn is_multi_layer(&self) -> bool {
        self.layerbreak != 0
    }
}

/// Capacity tier of a Blu-ray, in nominal gigabytes (25, 33, 50, 66, 100, 128).
///
/// Rules are checked in order and the first match wins.
pub fn bluray_capacity(layout: &DiscLayout<'_>, thresholds: BluRayThresholds) -> u32 {
    if layout.layerbreak3 != 0 {
        128
    } else if layout.layerbreak2 != 0 {
        100
    } else if layout.is_multi_layer() && (layout.is_ultra() || layout.size > thresholds.bd66) {
        66
    } else if layout.is_multi_layer() {
        50
    } else if layout.is_ultra() || layout.size > thresholds.bd33 {
        33
    } else {
        25
    }
}

/// Resolve the tier-specific disc type using the primary thresholds.
///
/// Only DVD, Blu-ray, HD-DVD and UMD have tiers; every other disc type is
/// returned unchanged.
pub fn normalize(
    media: DiscType,
    layerbreak: u64,
    layerbreak2: u64,
    layerbreak3: u64,
    pic_identifier: Option<&str>,
    size: u64,
) -> DiscType {
    let layout = DiscLayout::new(layerbreak, layerbreak2, layerbreak3, pic_identifier, size);
    normalize_with(media, &layout, BluRayThresholds::PRIMARY)
}

/// Resolve the tier-specific disc type for `layout` with explicit Blu-ray
/// thresholds.
pub fn normalize_with(
    media: DiscType,
    layout: &DiscLayout<'_>,
    thresholds: BluRayThresholds,
) -> DiscType {
    let dual = layout.is_multi_layer();
    match media.to_media_type() {
        Some(MediaType::Dvd) => {
            if dual {
                DiscType::Dvd9
            } else {
                DiscType::Dvd5
            }
        }
        Some(MediaType::BluRay) => match bluray_capacity(layout, thresholds) {
            128 => DiscType::Bd128,
            100 => DiscType::Bd100,
            66 => DiscType::Bd66,
            50 => DiscType::Bd50,
            33 => DiscType::Bd33,
            _ => DiscType::Bd25,
        },
        Some(MediaType::HdDvd) => {
            if dual {
                DiscType::HdDvdDl
            } else {
                DiscType::HdDvdSl
            }
        }
        Some(MediaType::Umd) => {
            if dual {
                DiscType::UmdDl
            } else {
                DiscType::UmdSl
            }
        }
        _ => media,
    }
}

/// Normalize the record's disc type in place using the primary thresholds.
///
/// Does nothing unless both the media and the size/checksum section are
/// present.
pub fn normalize_disc_type(info: &mut SubmissionInfo) {
    normalize_disc_type_with(info, BluRayThresholds::PRIMARY);
}

pub fn normalize_disc_type_with(info: &mut SubmissionInfo, thresholds: BluRayThresholds) {
    let Some(sac) = info.size_and_checksums.as_ref() else {
        return;
    };
    let Some(common) = info.common_disc_info.as_mut() else {
        return;
    };
    let Some(media) = common.media else {
        return;
    };

    let layout = DiscLayout::new(
        sac.layerbreak,
        sac.layerbreak2,
        sac.layerbreak3,
        sac.pic_identifier.as_deref(),
        sac.size,
    );
    let normalized = normalize_with(media, &layout, thresholds);
    if normalized != media {
        log::debug!("Normalized disc type {} -> {}", media, normalized);
        common.media = Some(normalized);
    }
}

/// Label for the report's "Media Type" line, using the primary thresholds.
///
/// Tiered families get a capacity suffix (`DVD-9`, `Blu-ray-66`, `UMD-DL`);
/// everything else is the family's long name. `None` when there is no media
/// or it has no display name.
pub fn media_type_label(
    media: Option<MediaType>,
    pic_identifier: Option<&str>,
    size: u64,
    layerbreak: u64,
    layerbreak2: u64,
    layerbreak3: u64,
) -> Option<String> {
    let layout = DiscLayout::new(layerbreak, layerbreak2, layerbreak3, pic_identifier, size);
    media_type_label_with(media, &layout, BluRayThresholds::PRIMARY)
}

pub fn media_type_label_with(
    media: Option<MediaType>,
    layout: &DiscLayout<'_>,
    thresholds: BluRayThresholds,
) -> Option<String> {
    let media = media?;
    let name = media.long_name()?;
    let dual = layout.is_multi_layer();

    let label = match media {
        MediaType::Dvd => format!("{}-{}", name, if dual { 9 } else { 5 }),
        MediaType::BluRay => format!("{}-{}", name, bluray_capacity(layout, thresholds)),
        MediaType::HdDvd | MediaType::Umd => {
            format!("{}-{}", name, if dual { "DL" } else { "SL" })
        }
        _ => name.to_string(),
    };
    Some(label)
}

#[cfg(test)]
#[path = "tests/disc_type_tests.rs"]
mod tests;
