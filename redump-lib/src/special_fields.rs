//! Folding site-code annotations into the comments and contents text.
//!
//! Scrapers and dumping tools collect well-known annotations (internal
//! serial, alternate titles, demo lists, ...) as a `SiteCode -> value` map.
//! Before a report is written those maps are rendered as tagged lines, in a
//! fixed order, and prepended to whatever free text the block already had.

use std::sync::LazyLock;

use redump_core::{HumanReadable, SiteCode, SpecialFields, SubmissionInfo};
use regex::Regex;

/// Value a boolean site code must carry to be emitted.
pub const BOOLEAN_TRUE: &str = "True";

/// Order in which comment tags are written.
pub const COMMENT_CODE_ORDER: &[SiteCode] = &[
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
    // Publisher IDs
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
];

/// Order in which contents tags are written.
pub const CONTENT_CODE_ORDER: &[SiteCode] = &[
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

static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("static regex must compile"));

/// Render one annotation as a tagged line.
///
/// Multi-line codes put the value in its own paragraph under the tag.
/// Boolean codes render as the bare tag when the value is `"True"` and as
/// an empty string otherwise.
pub fn format_site_tag(code: SiteCode, value: &str) -> String {
    let tag = code.short_name().unwrap_or_default();

    if code.is_boolean() {
        return if value == BOOLEAN_TRUE {
            tag.trim().to_string()
        } else {
            String::new()
        };
    }

    if code.is_multi_line() {
        format!("{}\n{}\n", tag, value)
    } else {
        format!("{} {}", tag, value)
    }
}

/// Prepend the tagged lines for `fields` to `existing`.
///
/// Only codes listed in `order` are written, in that order; empty values
/// are skipped. The existing text is always kept.
pub fn assemble(existing: &str, fields: &SpecialFields, order: &[SiteCode]) -> String {
    let lines: Vec<String> = order
        .iter()
        .filter_map(|&code| fields.get(code).map(|value| (code, value)))
        .filter(|(_, value)| !value.is_empty())
        .map(|(code, value)| format_site_tag(code, value))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return existing.to_string();
    }

    let combined = format!("{}\n{}", lines.join("\n"), existing).replace("\r\n", "\n");
    EXTRA_BLANK_LINES
        .replace_all(&combined, "\n\n")
        .trim()
        .to_string()
}

/// Fold both special-field maps into their text blocks.
///
/// The returned record has empty maps; the folded text is the only trace
/// of them. Records without a common disc info section come back as-is.
pub fn process_special_fields(mut info: SubmissionInfo) -> SubmissionInfo {
    let Some(common) = info.common_disc_info.as_mut() else {
        return info;
    };

    if !common.comments_special_fields.is_empty() {
        log::debug!(
            "Folding {} comment tag(s) into comments",
            common.comments_special_fields.len()
        );
        let existing = common.comments.as_deref().unwrap_or_default();
        common.comments = Some(assemble(
            existing,
            &common.comments_special_fields,
            COMMENT_CODE_ORDER,
        ));
        common.comments_special_fields.clear();
    }

    if !common.contents_special_fields.is_empty() {
        log::debug!(
            "Folding {} content tag(s) into contents",
            common.contents_special_fields.len()
        );
        let existing = common.contents.as_deref().unwrap_or_default();
        common.contents = Some(assemble(
            existing,
            &common.contents_special_fields,
            CONTENT_CODE_ORDER,
        ));
        common.contents_special_fields.clear();
    }

    info
}

#[cfg(test)]
#[path = "tests/special_fields_tests.rs"]
mod tests;
