//! The submission record: everything known about one disc dump, grouped the
//! way the database's submission form groups it.
//!
//! Every section is independently optional. An absent section is skipped
//! when the report is written; it is never defaulted to empty text.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{DiscCategory, DumpStatus, YesNo};
use crate::language::{Language, LanguageSelection};
use crate::media::DiscType;
use crate::region::Region;
use crate::site_code::SiteCode;
use crate::system::RedumpSystem;

/// Schema version written by this crate.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Root aggregate for one disc submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionInfo {
    pub schema_version: i32,

    /// Database ID this dump fully matches (moderator-only).
    pub fully_matched_id: Option<u64>,

    /// Database IDs this dump partially matches (moderator-only).
    pub partially_matched_ids: Option<Vec<u64>>,

    /// When the entry was added to the database, if scraped from it.
    pub added: Option<DateTime<Utc>>,

    /// When the entry was last modified in the database, if scraped from it.
    pub last_modified: Option<DateTime<Utc>>,

    pub common_disc_info: Option<CommonDiscInfoSection>,
    pub version_and_editions: Option<VersionAndEditionsSection>,
    pub edc: Option<EdcSection>,
    pub parent_clone_relationship: Option<ParentCloneRelationshipSection>,
    pub extras: Option<ExtrasSection>,
    pub copy_protection: Option<CopyProtectionSection>,
    pub dumpers_and_status: Option<DumpersAndStatusSection>,
    pub tracks_and_write_offsets: Option<TracksAndWriteOffsetsSection>,
    pub size_and_checksums: Option<SizeAndChecksumsSection>,
    pub dumping_info: Option<DumpingInfoSection>,

    /// Free-form attachments (log excerpts, encoded files) keyed by name.
    pub artifacts: BTreeMap<String, String>,
}

impl Default for SubmissionInfo {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            fully_matched_id: None,
            partially_matched_ids: None,
            added: None,
            last_modified: None,
            common_disc_info: None,
            version_and_editions: None,
            edc: None,
            parent_clone_relationship: None,
            extras: None,
            copy_protection: None,
            dumpers_and_status: None,
            tracks_and_write_offsets: None,
            size_and_checksums: None,
            dumping_info: None,
            artifacts: BTreeMap::new(),
        }
    }
}

impl SubmissionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// The common disc info section, created empty if absent.
    pub fn common_disc_info_mut(&mut self) -> &mut CommonDiscInfoSection {
        self.common_disc_info.get_or_insert_with(Default::default)
    }

    /// The size/checksum section, created empty if absent.
    pub fn size_and_checksums_mut(&mut self) -> &mut SizeAndChecksumsSection {
        self.size_and_checksums.get_or_insert_with(Default::default)
    }

    pub fn system(&self) -> Option<RedumpSystem> {
        self.common_disc_info.as_ref().and_then(|c| c.system)
    }

    pub fn with_system(mut self, system: RedumpSystem) -> Self {
        self.common_disc_info_mut().system = Some(system);
        self
    }

    pub fn with_media(mut self, media: DiscType) -> Self {
        self.common_disc_info_mut().media = Some(media);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.common_disc_info_mut().title = Some(title.into());
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.common_disc_info_mut().region = Some(region);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.common_disc_info_mut()
            .languages
            .get_or_insert_with(Vec::new)
            .push(Some(language));
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size_and_checksums_mut().size = size;
        self
    }

    /// Set the layerbreaks; pass 0 for layers the disc doesn't have.
    pub fn with_layerbreaks(mut self, layerbreak: u64, layerbreak2: u64, layerbreak3: u64) -> Self {
        let sac = self.size_and_checksums_mut();
        sac.layerbreak = layerbreak;
        sac.layerbreak2 = layerbreak2;
        sac.layerbreak3 = layerbreak3;
        self
    }

    /// Attach a site-code annotation, routed to its default block.
    pub fn with_special_field(mut self, code: SiteCode, value: impl Into<String>) -> Self {
        self.common_disc_info_mut().add_special_field(code, value);
        self
    }
}

/// Site-code annotations waiting to be folded into a free-text block.
///
/// Transient: populated by a scraper or caller, drained when the block is
/// assembled, and never written out alongside the assembled text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialFields(BTreeMap<SiteCode, String>);

impl SpecialFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `code`, returning the old value.
    pub fn insert(&mut self, code: SiteCode, value: impl Into<String>) -> Option<String> {
        self.0.insert(code, value.into())
    }

    pub fn get(&self, code: SiteCode) -> Option<&str> {
        self.0.get(&code).map(String::as_str)
    }

    pub fn remove(&mut self, code: SiteCode) -> Option<String> {
        self.0.remove(&code)
    }

    pub fn contains(&self, code: SiteCode) -> bool {
        self.0.contains_key(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SiteCode, &str)> {
        self.0.iter().map(|(code, value)| (*code, value.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(SiteCode, String)> for SpecialFields {
    fn from_iter<I: IntoIterator<Item = (SiteCode, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(SiteCode, &str); N]> for SpecialFields {
    fn from(entries: [(SiteCode, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(code, value)| (code, value.to_string()))
            .collect()
    }
}

/// Ring-code metadata for one physical layer.
///
/// Mould fields only exist physically on the data side (layer 0) and label
/// side (layer 1); they are kept on every layer for a uniform shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingcodeLayer {
    /// Mastering code, laser branded/etched.
    pub mastering_ring: Option<String>,
    pub mastering_sid: Option<String>,
    /// Toolstamp or mastering code, engraved/stamped.
    pub toolstamp: Option<String>,
    pub mould_sid: Option<String>,
    pub additional_mould: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonDiscInfoSection {
    pub system: Option<RedumpSystem>,
    pub media: Option<DiscType>,
    pub title: Option<String>,
    pub foreign_title_non_latin: Option<String>,
    pub disc_number_letter: Option<String>,
    pub disc_title: Option<String>,
    pub category: Option<DiscCategory>,
    pub region: Option<Region>,

    /// Display order; duplicates allowed. `None` entries are languages the
    /// source named but that matched no known value.
    pub languages: Option<Vec<Option<Language>>>,
    pub language_selection: Option<Vec<LanguageSelection>>,
    pub serial: Option<String>,

    pub layer0: RingcodeLayer,
    pub layer1: RingcodeLayer,
    pub layer2: RingcodeLayer,
    pub layer3: RingcodeLayer,
    pub ring_write_offset: Option<String>,

    pub barcode: Option<String>,
    pub exe_date_build_date: Option<String>,
    pub errors_count: Option<String>,
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "SpecialFields::is_empty")]
    pub comments_special_fields: SpecialFields,
    pub contents: Option<String>,
    #[serde(skip_serializing_if = "SpecialFields::is_empty")]
    pub contents_special_fields: SpecialFields,
}

impl CommonDiscInfoSection {
    /// Add an annotation to the comments or contents mapping, whichever the
    /// code belongs to.
    pub fn add_special_field(&mut self, code: SiteCode, value: impl Into<String>) {
        if code.is_content_code() {
            self.contents_special_fields.insert(code, value);
        } else {
            self.comments_special_fields.insert(code, value);
        }
    }

    /// Ring codes for `layer` (0-3).
    pub fn layer(&self, layer: usize) -> Option<&RingcodeLayer> {
        match layer {
            0 => Some(&self.layer0),
            1 => Some(&self.layer1),
            2 => Some(&self.layer2),
            3 => Some(&self.layer3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionAndEditionsSection {
    pub version: Option<String>,
    pub version_datfile: Option<String>,
    pub common_editions: Option<Vec<String>>,
    pub other_editions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdcSection {
    pub edc: Option<YesNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentCloneRelationshipSection {
    pub parent_id: Option<String>,
    pub regional_parent: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrasSection {
    /// Primary Volume Descriptor hex dump; internal whitespace is significant.
    pub pvd: Option<String>,
    pub disc_key: Option<String>,
    pub disc_id: Option<String>,
    /// Permanent Information & Control area dump.
    pub pic: Option<String>,
    /// Raw header dump; internal whitespace is significant.
    pub header: Option<String>,
    pub bca: Option<String>,
    pub security_sector_ranges: Option<String>,
}

impl ExtrasSection {
    /// Whether any of the fields that open the Extras section are set.
    pub fn has_reportable_data(&self) -> bool {
        [&self.pvd, &self.pic, &self.bca, &self.security_sector_ranges]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyProtectionSection {
    pub anti_modchip: Option<YesNo>,
    pub libcrypt: Option<YesNo>,
    pub libcrypt_data: Option<String>,
    pub protection: Option<String>,
    pub securom_data: Option<String>,

    /// Per-file protection scan results, kept for tooling; not reported.
    pub full_protections: Option<BTreeMap<String, Option<Vec<String>>>>,
}

impl CopyProtectionSection {
    /// Whether anything in the section would be worth reporting.
    pub fn has_reportable_data(&self) -> bool {
        let non_empty = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        let answered = |field: &Option<YesNo>| field.is_some_and(|v| v.is_set());

        non_empty(&self.protection)
            || answered(&self.anti_modchip)
            || answered(&self.libcrypt)
            || non_empty(&self.libcrypt_data)
            || non_empty(&self.securom_data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpersAndStatusSection {
    pub status: Option<DumpStatus>,
    pub dumpers: Option<Vec<String>>,
    pub other_dumpers: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracksAndWriteOffsetsSection {
    /// ClrMamePro-format DAT lines, one per track.
    pub clrmamepro_data: Option<String>,
    /// Raw cuesheet; internal whitespace is significant.
    pub cuesheet: Option<String>,
    pub common_write_offsets: Option<Vec<i32>>,
    pub other_write_offsets: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeAndChecksumsSection {
    /// Byte offset of the first layer break; 0 when single-layer.
    pub layerbreak: u64,
    pub layerbreak2: u64,
    pub layerbreak3: u64,
    /// Disc type identifier from the Blu-ray PIC area.
    pub pic_identifier: Option<String>,
    pub size: u64,
    pub crc32: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
}

impl SizeAndChecksumsSection {
    /// Number of physical layers implied by the layerbreaks (1-4).
    pub fn layer_count(&self) -> usize {
        if self.layerbreak3 != 0 {
            4
        } else if self.layerbreak2 != 0 {
            3
        } else if self.layerbreak != 0 {
            2
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpingInfoSection {
    pub frontend_version: Option<String>,
    pub dumping_program: Option<String>,
    pub dumping_date: Option<String>,
    pub dumping_parameters: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub firmware: Option<String>,
    pub reported_disc_type: Option<String>,
    pub c2_errors_count: Option<String>,
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
