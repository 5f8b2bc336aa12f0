//! Plain-text submission report writer.
//!
//! Walks a [`SubmissionInfo`] section by section and writes the text block
//! a dumper pastes into the database's submission form. Sections appear in
//! a fixed order; some only appear when the system or the data calls for
//! them. Absent values are skipped, except region and languages, which get
//! a loud placeholder so a reviewer notices them.

use std::fmt::{self, Write};
use std::sync::LazyLock;

use redump_core::{
    CommonDiscInfoSection, HumanReadable, MediaType, SizeAndChecksumsSection, SubmissionInfo,
};
use regex::Regex;

use crate::disc_type::{BluRayThresholds, DiscLayout, media_type_label_with, normalize_disc_type_with};
use crate::error::FormatError;
use crate::settings::{FormatterSettings, load_settings};
use crate::special_fields::process_special_fields;

/// Status reported when a report was written.
pub const SUCCESS_STATUS: &str = "Formatting complete!";

/// Written in place of an unknown region.
pub const REGION_PLACEHOLDER: &str = "SPACE! (CHANGE THIS)";

/// Written in place of unknown or missing languages.
pub const LANGUAGE_PLACEHOLDER: &str = "ADD LANGUAGES HERE (ONLY IF YOU TESTED)";

const PREAMBLE: &[&str] = &[
    "Users who wish to submit this information to Redump must ensure that all of the fields below are accurate for the exact media they have.",
    "Please double-check to ensure that there are no fields that need verification, such as the version or copy protection.",
    "If there are no fields in need of verification or all fields are accurate, this preamble can be removed before submission.",
];

/// Field keys of the submission template.
pub mod template {
    // Common disc info
    pub const TITLE: &str = "Title";
    pub const FOREIGN_TITLE: &str = "Foreign Title (Non-latin)";
    pub const DISC_NUMBER: &str = "Disc Number / Letter";
    pub const DISC_TITLE: &str = "Disc Title";
    pub const SYSTEM: &str = "System";
    pub const MEDIA_TYPE: &str = "Media Type";
    pub const CATEGORY: &str = "Category";
    pub const FULLY_MATCHING_ID: &str = "Fully Matching ID";
    pub const PARTIALLY_MATCHING_IDS: &str = "Partially Matching IDs";
    pub const REGION: &str = "Region";
    pub const LANGUAGES: &str = "Languages";
    pub const LANGUAGE_SELECTION: &str = "Language Selection Via";
    pub const DISC_SERIAL: &str = "Disc Serial";
    pub const BARCODE: &str = "Barcode";
    pub const EXE_BUILD_DATE: &str = "EXE/Build Date";
    pub const ERROR_COUNT: &str = "Error Count";
    pub const COMMENTS: &str = "Comments";
    pub const CONTENTS: &str = "Contents";

    // Ring codes
    pub const MASTERING_RING: &str = "Mastering Code (laser branded/etched)";
    pub const MASTERING_SID: &str = "Mastering SID Code";
    pub const TOOLSTAMP: &str = "Toolstamp or Mastering Code (engraved/stamped)";
    pub const MOULD_SID: &str = "Mould SID Code";
    pub const ADDITIONAL_MOULD: &str = "Additional Mould";

    // Version and editions
    pub const VERSION: &str = "Version";
    pub const EDITION: &str = "Edition/Release";

    pub const EDC: &str = "EDC";

    // Extras
    pub const PVD: &str = "Primary Volume Descriptor (PVD)";
    pub const DISC_KEY: &str = "Disc Key";
    pub const DISC_ID: &str = "Disc ID";
    pub const PIC: &str = "Permanent Information & Control (PIC)";
    pub const HEADER: &str = "Header";
    pub const BCA: &str = "BCA";
    pub const SECURITY_SECTOR_RANGES: &str = "Security Sector Ranges";

    // Copy protection
    pub const ANTI_MODCHIP: &str = "Anti-modchip";
    pub const LIBCRYPT: &str = "LibCrypt";
    pub const SUB_INTENTION: &str = "SubIntention Data (SecuROM/LibCrypt)";
    pub const PROTECTION: &str = "Protection";

    // Tracks, offsets, sizes
    pub const DAT: &str = "DAT";
    pub const CUESHEET: &str = "Cuesheet";
    pub const WRITE_OFFSET: &str = "Write Offset";
    pub const LAYERBREAK: &str = "Layerbreak";
    pub const LAYERBREAK_2: &str = "Layerbreak 2";
    pub const LAYERBREAK_3: &str = "Layerbreak 3";
    pub const SIZE: &str = "Size";
    pub const CRC32: &str = "CRC32";
    pub const MD5: &str = "MD5";
    pub const SHA1: &str = "SHA1";

    // Dumping info
    pub const FRONTEND_VERSION: &str = "Frontend Version";
    pub const DUMPING_PROGRAM: &str = "Dumping Program";
    pub const DUMPING_DATE: &str = "Date";
    pub const DUMPING_PARAMETERS: &str = "Parameters";
    pub const DRIVE_MANUFACTURER: &str = "Manufacturer";
    pub const DRIVE_MODEL: &str = "Model";
    pub const DRIVE_FIRMWARE: &str = "Firmware";
    pub const REPORTED_DISC_TYPE: &str = "Reported Disc Type";
    pub const C2_ERROR_COUNT: &str = "C2 Error Count";
}

/// Keys whose values are hex dumps or cuesheets and keep their spacing.
const PRESERVE_WHITESPACE_KEYS: &[&str] = &[template::PVD, template::HEADER, template::CUESHEET];

const SINGLE_LAYER_LABELS: &[&str] = &["Data Side", "Label Side"];
const DUAL_LAYER_LABELS: &[&str] = &["Layer 0 (Inner)", "Layer 1 (Outer)"];
const DUAL_LAYER_REVERSED_LABELS: &[&str] = &["Layer 0 (Outer)", "Layer 1 (Inner)"];
const TRIPLE_LAYER_LABELS: &[&str] = &["Layer 0 (Outer)", "Layer 1", "Layer 2 (Inner)"];
const TRIPLE_LAYER_REVERSED_LABELS: &[&str] = &["Layer 0 (Inner)", "Layer 1", "Layer 2 (Outer)"];
const QUAD_LAYER_LABELS: &[&str] = &["Layer 0 (Inner)", "Layer 1", "Layer 2", "Layer 3 (Outer)"];
const QUAD_LAYER_REVERSED_LABELS: &[&str] =
    &["Layer 0 (Outer)", "Layer 1", "Layer 2", "Layer 3 (Inner)"];

static TAB_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\t\s*").expect("static regex must compile"));
static CRLF_BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r\n){2,}").expect("static regex must compile"));
static LF_BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("static regex must compile"));

/// Ring-code labels for each authored layer, innermost layer first.
///
/// `reversed` is for systems whose manufacturer prints ring codes in the
/// opposite physical order.
pub fn ringcode_labels(layer_count: usize, reversed: bool) -> &'static [&'static str] {
    match (layer_count, reversed) {
        (0 | 1, _) => SINGLE_LAYER_LABELS,
        (2, false) => DUAL_LAYER_LABELS,
        (2, true) => DUAL_LAYER_REVERSED_LABELS,
        (3, false) => TRIPLE_LAYER_LABELS,
        (3, true) => TRIPLE_LAYER_REVERSED_LABELS,
        (_, false) => QUAD_LAYER_LABELS,
        (_, true) => QUAD_LAYER_REVERSED_LABELS,
    }
}

/// Write `key: value` at `indent` tabs, or nothing when the value is empty
/// or only whitespace.
///
/// Outside the hex dump and cuesheet keys, `<tab>`/`<TAB>` and double spaces
/// become tabs and whitespace around a tab collapses to that tab. A value
/// spanning several lines is written as its own paragraph under `key:`.
pub fn add_if_exists<W: Write>(
    out: &mut W,
    key: &str,
    value: Option<&str>,
    indent: usize,
) -> fmt::Result {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(());
    };
    let prefix = "\t".repeat(indent);

    let mut value = value.to_string();
    if !PRESERVE_WHITESPACE_KEYS.contains(&key) {
        value = value
            .replace("<tab>", "\t")
            .replace("<TAB>", "\t")
            .replace("  ", "\t");
        value = TAB_RUN.replace_all(&value, "\t").into_owned();
    }
    let value = value.replace("\r\n", "\n");

    if value.contains('\n') {
        writeln!(out, "{}{}:", prefix, key)?;
        writeln!(out)?;
        for line in value.split('\n') {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)
    } else {
        writeln!(out, "{}{}: {}", prefix, key, value)
    }
}

/// [`add_if_exists`] for a list, joined with `", "`. Empty lists are skipped.
pub fn add_list_if_exists<W: Write, S: AsRef<str>>(
    out: &mut W,
    key: &str,
    values: &[S],
    indent: usize,
) -> fmt::Result {
    if values.is_empty() {
        return Ok(());
    }
    let joined = values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<&str>>()
        .join(", ");
    add_if_exists(out, key, Some(&joined), indent)
}

/// Collapse every run of blank lines to a single blank line.
pub fn remove_consecutive_empty_lines(text: &str) -> String {
    let text = CRLF_BLANK_RUN.replace_all(text, "\r\n\r\n");
    LF_BLANK_RUN.replace_all(&text, "\n\n").into_owned()
}

/// Write a write offset with an explicit sign (`+12`, `-6`, `0`).
///
/// Values that aren't integers are passed through as written.
fn signed_offset(raw: &str) -> String {
    match raw.trim().parse::<i32>() {
        Ok(offset) if offset > 0 => format!("+{}", offset),
        Ok(offset) => offset.to_string(),
        Err(_) => raw.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Format a report with the primary Blu-ray thresholds.
///
/// `enable_redump_compatibility` drops the layerbreak line for discs where
/// the database computes it by itself (Blu-ray and Xbox discs).
pub fn format_output(
    info: Option<&SubmissionInfo>,
    enable_redump_compatibility: bool,
) -> Result<String, FormatError> {
    let info = info.ok_or(FormatError::MissingSubmission)?;
    format_output_with(info, enable_redump_compatibility, BluRayThresholds::PRIMARY)
}

/// Format a report with explicit Blu-ray thresholds for the media label.
pub fn format_output_with(
    info: &SubmissionInfo,
    enable_redump_compatibility: bool,
    thresholds: BluRayThresholds,
) -> Result<String, FormatError> {
    let mut writer = ReportWriter {
        out: String::new(),
        info,
        redump_compatibility: enable_redump_compatibility,
        thresholds,
    };
    writer.write_report()?;
    Ok(remove_consecutive_empty_lines(&writer.out))
}

/// [`format_output`], reporting the outcome as a status string instead of
/// an error.
pub fn format_output_with_status(
    info: Option<&SubmissionInfo>,
    enable_redump_compatibility: bool,
) -> (Option<String>, String) {
    into_status(format_output(info, enable_redump_compatibility))
}

fn into_status(result: Result<String, FormatError>) -> (Option<String>, String) {
    match result {
        Ok(text) => (Some(text), SUCCESS_STATUS.to_string()),
        Err(FormatError::MissingSubmission) => {
            (None, FormatError::MissingSubmission.to_string())
        }
        Err(e) => {
            log::warn!("Error formatting submission info: {}", e);
            (None, format!("Error formatting submission info: {}", e))
        }
    }
}

struct ReportWriter<'a> {
    out: String,
    info: &'a SubmissionInfo,
    redump_compatibility: bool,
    thresholds: BluRayThresholds,
}

impl<'a> ReportWriter<'a> {
    fn line(&mut self, text: &str) -> fmt::Result {
        writeln!(self.out, "{}", text)
    }

    fn blank(&mut self) -> fmt::Result {
        writeln!(self.out)
    }

    fn field(&mut self, key: &str, value: Option<&str>, indent: usize) -> fmt::Result {
        add_if_exists(&mut self.out, key, value, indent)
    }

    fn list<S: AsRef<str>>(&mut self, key: &str, values: &[S], indent: usize) -> fmt::Result {
        add_list_if_exists(&mut self.out, key, values, indent)
    }

    fn common(&self) -> Option<&'a CommonDiscInfoSection> {
        self.info.common_disc_info.as_ref()
    }

    fn sizes(&self) -> Option<&'a SizeAndChecksumsSection> {
        self.info.size_and_checksums.as_ref()
    }

    fn write_report(&mut self) -> Result<(), FormatError> {
        for line in PREAMBLE {
            self.line(line)?;
        }
        self.blank()?;

        self.common_disc_info()?;
        self.blank()?;

        self.version_and_editions()?;
        self.blank()?;

        self.edc()?;
        self.extras()?;
        self.copy_protection()?;

        let has_tracks = self
            .info
            .tracks_and_write_offsets
            .as_ref()
            .is_some_and(|t| non_empty(&t.clrmamepro_data));
        if has_tracks {
            self.tracks_and_write_offsets()?;
        } else {
            self.size_and_checksums()?;
        }

        self.dumping_info()?;
        Ok(())
    }

    fn common_disc_info(&mut self) -> Result<(), FormatError> {
        use template::*;

        let info = self.info;
        let common = self.common();
        let sizes = self.sizes();

        self.line("Common Disc Info:")?;
        self.field(TITLE, common.and_then(|c| c.title.as_deref()), 1)?;
        self.field(
            FOREIGN_TITLE,
            common.and_then(|c| c.foreign_title_non_latin.as_deref()),
            1,
        )?;
        self.field(
            DISC_NUMBER,
            common.and_then(|c| c.disc_number_letter.as_deref()),
            1,
        )?;
        self.field(DISC_TITLE, common.and_then(|c| c.disc_title.as_deref()), 1)?;
        self.field(
            SYSTEM,
            common.and_then(|c| c.system).and_then(|s| s.long_name()),
            1,
        )?;

        let layout = sizes.map_or_else(DiscLayout::default, |s| {
            DiscLayout::new(
                s.layerbreak,
                s.layerbreak2,
                s.layerbreak3,
                s.pic_identifier.as_deref(),
                s.size,
            )
        });
        let media = common
            .and_then(|c| c.media)
            .and_then(|m| m.to_media_type());
        let media_label = media_type_label_with(media, &layout, self.thresholds);
        self.field(MEDIA_TYPE, media_label.as_deref(), 1)?;

        self.field(
            CATEGORY,
            common.and_then(|c| c.category).and_then(|c| c.long_name()),
            1,
        )?;
        let fully_matched = info.fully_matched_id.map(|id| id.to_string());
        self.field(FULLY_MATCHING_ID, fully_matched.as_deref(), 1)?;
        if let Some(ids) = &info.partially_matched_ids {
            let ids: Vec<String> = ids.iter().map(u64::to_string).collect();
            self.list(PARTIALLY_MATCHING_IDS, &ids, 1)?;
        }

        let region = common
            .and_then(|c| c.region)
            .and_then(|r| r.long_name())
            .unwrap_or(REGION_PLACEHOLDER);
        self.field(REGION, Some(region), 1)?;

        let languages: Vec<&str> = match common.and_then(|c| c.languages.as_ref()) {
            Some(languages) if !languages.is_empty() => languages
                .iter()
                .map(|l| l.and_then(|l| l.long_name()).unwrap_or(LANGUAGE_PLACEHOLDER))
                .collect(),
            _ => vec![LANGUAGE_PLACEHOLDER],
        };
        self.list(LANGUAGES, &languages, 1)?;

        if let Some(selection) = common.and_then(|c| c.language_selection.as_ref()) {
            let selection: Vec<&str> = selection.iter().filter_map(|s| s.long_name()).collect();
            self.list(LANGUAGE_SELECTION, &selection, 1)?;
        }
        self.field(DISC_SERIAL, common.and_then(|c| c.serial.as_deref()), 1)?;
        self.blank()?;

        self.line("\tRingcode Information:")?;
        self.blank()?;
        if let Some(common) = common {
            self.ringcodes(common)?;
        }
        self.blank()?;

        self.field(BARCODE, common.and_then(|c| c.barcode.as_deref()), 1)?;
        self.field(
            EXE_BUILD_DATE,
            common.and_then(|c| c.exe_date_build_date.as_deref()),
            1,
        )?;
        self.field(ERROR_COUNT, common.and_then(|c| c.errors_count.as_deref()), 1)?;
        self.field(COMMENTS, common.and_then(|c| c.comments.as_deref()).map(str::trim), 1)?;
        self.field(CONTENTS, common.and_then(|c| c.contents.as_deref()).map(str::trim), 1)?;
        Ok(())
    }

    fn ringcodes(&mut self, common: &CommonDiscInfoSection) -> Result<(), FormatError> {
        use template::*;

        let layer_count = self.sizes().map_or(1, |s| s.layer_count());
        let reversed = common.system.is_some_and(|s| s.has_reversed_ringcodes());

        for (index, label) in ringcode_labels(layer_count, reversed).iter().enumerate() {
            let layer = common
                .layer(index)
                .ok_or_else(|| FormatError::internal(format!("no ring code layer {}", index)))?;

            self.field(
                &format!("{} {}", label, MASTERING_RING),
                layer.mastering_ring.as_deref(),
                2,
            )?;
            self.field(
                &format!("{} {}", label, MASTERING_SID),
                layer.mastering_sid.as_deref(),
                2,
            )?;
            self.field(
                &format!("{} {}", label, TOOLSTAMP),
                layer.toolstamp.as_deref(),
                2,
            )?;

            // Moulds only exist on the two physical sides of the disc
            let side = match index {
                0 => "Data Side",
                1 => "Label Side",
                _ => continue,
            };
            self.field(
                &format!("{} {}", side, MOULD_SID),
                layer.mould_sid.as_deref(),
                2,
            )?;
            self.field(
                &format!("{} {}", side, ADDITIONAL_MOULD),
                layer.additional_mould.as_deref(),
                2,
            )?;
        }

        self.field(WRITE_OFFSET, common.ring_write_offset.as_deref(), 2)?;
        Ok(())
    }

    fn version_and_editions(&mut self) -> fmt::Result {
        let info = self.info;
        let section = info.version_and_editions.as_ref();
        self.line("Version and Editions:")?;
        self.field(
            template::VERSION,
            section.and_then(|s| s.version.as_deref()),
            1,
        )?;
        self.field(
            template::EDITION,
            section.and_then(|s| s.other_editions.as_deref()),
            1,
        )
    }

    fn edc(&mut self) -> fmt::Result {
        if !self.info.system().is_some_and(|s| s.has_edc()) {
            return Ok(());
        }

        let edc = self
            .info
            .edc
            .as_ref()
            .and_then(|e| e.edc)
            .and_then(|e| e.long_name());
        self.line("EDC:")?;
        self.field(template::EDC, edc, 1)?;
        self.blank()
    }

    fn extras(&mut self) -> fmt::Result {
        use template::*;

        let info = self.info;
        let Some(extras) = info
            .extras
            .as_ref()
            .filter(|e| e.has_reportable_data())
        else {
            return Ok(());
        };

        self.line("Extras:")?;
        self.field(PVD, extras.pvd.as_deref(), 1)?;
        self.field(DISC_KEY, extras.disc_key.as_deref(), 1)?;
        self.field(DISC_ID, extras.disc_id.as_deref(), 1)?;
        self.field(PIC, extras.pic.as_deref(), 1)?;
        self.field(HEADER, extras.header.as_deref(), 1)?;
        self.field(BCA, extras.bca.as_deref(), 1)?;
        self.field(SECURITY_SECTOR_RANGES, extras.security_sector_ranges.as_deref(), 1)?;
        self.blank()
    }

    fn copy_protection(&mut self) -> fmt::Result {
        use template::*;

        let info = self.info;
        let Some(protection) = info
            .copy_protection
            .as_ref()
            .filter(|p| p.has_reportable_data())
        else {
            return Ok(());
        };

        self.line("Copy Protection:")?;
        if info.system().is_some_and(|s| s.has_libcrypt()) {
            self.field(
                ANTI_MODCHIP,
                protection.anti_modchip.and_then(|v| v.long_name()),
                1,
            )?;
            self.field(LIBCRYPT, protection.libcrypt.and_then(|v| v.long_name()), 1)?;
            self.field(SUB_INTENTION, protection.libcrypt_data.as_deref(), 1)?;
        }
        self.field(PROTECTION, protection.protection.as_deref(), 1)?;
        self.field(SUB_INTENTION, protection.securom_data.as_deref(), 1)?;
        self.blank()
    }

    fn tracks_and_write_offsets(&mut self) -> fmt::Result {
        use template::*;

        let info = self.info;
        let section = info.tracks_and_write_offsets.as_ref();
        self.line("Tracks and Write Offsets:")?;

        let dat = section
            .and_then(|s| s.clrmamepro_data.as_deref())
            .map(|data| format!("{}\n", data));
        self.field(DAT, dat.as_deref(), 1)?;
        self.field(CUESHEET, section.and_then(|s| s.cuesheet.as_deref()), 1)?;

        let offset = section
            .and_then(|s| s.other_write_offsets.as_deref())
            .map(signed_offset);
        self.field(WRITE_OFFSET, offset.as_deref(), 1)?;
        self.blank()
    }

    fn size_and_checksums(&mut self) -> fmt::Result {
        use template::*;

        let sizes = self.sizes();
        let common = self.common();
        self.line("Size & Checksum:")?;

        // The database derives layerbreaks for these discs on its own
        let is_bluray = common
            .and_then(|c| c.media)
            .and_then(|m| m.to_media_type())
            == Some(MediaType::BluRay);
        let is_xgd = common.and_then(|c| c.system).is_some_and(|s| s.is_xgd());
        if !self.redump_compatibility || (!is_bluray && !is_xgd) {
            let layerbreaks =
                sizes.map_or([0; 3], |s| [s.layerbreak, s.layerbreak2, s.layerbreak3]);
            let keys = [LAYERBREAK, LAYERBREAK_2, LAYERBREAK_3];
            for (key, lb) in keys.into_iter().zip(layerbreaks) {
                let lb = (lb != 0).then(|| lb.to_string());
                self.field(key, lb.as_deref(), 1)?;
            }
        }

        let size = sizes.map(|s| s.size.to_string());
        self.field(SIZE, size.as_deref(), 1)?;
        self.field(CRC32, sizes.and_then(|s| s.crc32.as_deref()), 1)?;
        self.field(MD5, sizes.and_then(|s| s.md5.as_deref()), 1)?;
        self.field(SHA1, sizes.and_then(|s| s.sha1.as_deref()), 1)?;
        self.blank()
    }

    fn dumping_info(&mut self) -> fmt::Result {
        use template::*;

        let info = self.info;
        let section = info.dumping_info.as_ref();
        let fields = [
            (FRONTEND_VERSION, section.and_then(|s| s.frontend_version.as_deref())),
            (DUMPING_PROGRAM, section.and_then(|s| s.dumping_program.as_deref())),
            (DUMPING_DATE, section.and_then(|s| s.dumping_date.as_deref())),
            (DUMPING_PARAMETERS, section.and_then(|s| s.dumping_parameters.as_deref())),
            (DRIVE_MANUFACTURER, section.and_then(|s| s.manufacturer.as_deref())),
            (DRIVE_MODEL, section.and_then(|s| s.model.as_deref())),
            (DRIVE_FIRMWARE, section.and_then(|s| s.firmware.as_deref())),
            (REPORTED_DISC_TYPE, section.and_then(|s| s.reported_disc_type.as_deref())),
            (C2_ERROR_COUNT, section.and_then(|s| s.c2_errors_count.as_deref())),
        ];

        self.line("Dumping Info:")?;
        for (key, value) in fields {
            self.field(key, value, 1)?;
        }
        Ok(())
    }
}

/// Report writer bound to a set of [`FormatterSettings`].
///
/// Runs the configured pre-passes (disc type normalization, special-field
/// folding) on the record before formatting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    settings: FormatterSettings,
}

impl ReportFormatter {
    pub fn new(settings: FormatterSettings) -> Self {
        Self { settings }
    }

    /// Formatter configured from the user's settings file.
    pub fn from_settings_file() -> Self {
        Self::new(load_settings())
    }

    pub fn settings(&self) -> &FormatterSettings {
        &self.settings
    }

    fn thresholds(&self) -> BluRayThresholds {
        self.settings.bluray_thresholds.thresholds()
    }

    /// Apply the configured pre-passes and return the record to format.
    pub fn prepare(&self, mut info: SubmissionInfo) -> SubmissionInfo {
        if self.settings.normalize_disc_type {
            normalize_disc_type_with(&mut info, self.thresholds());
        }
        if self.settings.process_special_fields {
            info = process_special_fields(info);
        }
        info
    }

    pub fn format(&self, info: SubmissionInfo) -> Result<String, FormatError> {
        let info = self.prepare(info);
        format_output_with(
            &info,
            self.settings.enable_redump_compatibility,
            self.thresholds(),
        )
    }

    /// [`ReportFormatter::format`] with the outcome as a status string.
    pub fn format_with_status(&self, info: Option<SubmissionInfo>) -> (Option<String>, String) {
        match info {
            Some(info) => into_status(self.format(info)),
            None => into_status(Err(FormatError::MissingSubmission)),
        }
    }
}

#[cfg(test)]
#[path = "tests/formatter_tests.rs"]
mod tests;
