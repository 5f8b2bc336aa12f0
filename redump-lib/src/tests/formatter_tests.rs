use super::*;
use redump_core::{
    CopyProtectionSection, DiscType, ExtrasSection, Language, RedumpSystem, RingcodeLayer,
    TracksAndWriteOffsetsSection, YesNo,
};

use crate::disc_type::ThresholdProfile;

const GB: u64 = 1_000_000_000;

fn report(info: &SubmissionInfo) -> String {
    format_output(Some(info), false).unwrap()
}

fn field(key: &str, value: Option<&str>, indent: usize) -> String {
    let mut out = String::new();
    add_if_exists(&mut out, key, value, indent).unwrap();
    out
}

// ---------------------------------------------------------------------------
// Line helpers
// ---------------------------------------------------------------------------

#[test]
fn absent_and_empty_values_are_skipped() {
    assert_eq!(field("Title", None, 1), "");
    assert_eq!(field("Title", Some(""), 1), "");
}

#[test]
fn whitespace_only_values_are_skipped() {
    assert_eq!(field("Disc Serial", Some("   "), 1), "");
    assert_eq!(field("Disc Serial", Some(" \t \r\n"), 1), "");
    assert_eq!(field(template::PVD, Some("  "), 1), "");
}

#[test]
fn inline_value() {
    assert_eq!(field("Title", Some("Game"), 1), "\tTitle: Game\n");
    assert_eq!(field("Title", Some("Game"), 0), "Title: Game\n");
}

#[test]
fn tab_tokens_and_double_spaces_become_tabs() {
    assert_eq!(field("Key", Some("a  b<TAB>c"), 1), "\tKey: a\tb\tc\n");
    assert_eq!(field("Key", Some("a<tab>b"), 1), "\tKey: a\tb\n");
    assert_eq!(field("Key", Some("a \t b"), 1), "\tKey: a\tb\n");
    assert_eq!(field("Key", Some("a    b"), 1), "\tKey: a\tb\n");
}

#[test]
fn multi_line_value_becomes_a_paragraph() {
    assert_eq!(
        field("Comments", Some("one\r\ntwo"), 1),
        "\tComments:\n\none\ntwo\n\n"
    );
}

#[test]
fn hex_dumps_keep_their_spacing() {
    let pvd = "0320 : 20 20  20\n0330 : 41  42";
    assert_eq!(
        field(template::PVD, Some(pvd), 1),
        format!("\t{}:\n\n{}\n\n", template::PVD, pvd)
    );
    assert_eq!(
        field(template::CUESHEET, Some("FILE  \"a.bin\" BINARY"), 1),
        "\tCuesheet: FILE  \"a.bin\" BINARY\n"
    );
}

#[test]
fn lists_are_comma_joined() {
    let mut out = String::new();
    add_list_if_exists(&mut out, "Languages", &["English", "French"], 1).unwrap();
    assert_eq!(out, "\tLanguages: English, French\n");

    let mut out = String::new();
    let empty: [&str; 0] = [];
    add_list_if_exists(&mut out, "Languages", &empty, 1).unwrap();
    assert_eq!(out, "");
}

#[test]
fn blank_line_runs_collapse() {
    assert_eq!(remove_consecutive_empty_lines("a\n\n\n\nb\n\nc\n"), "a\n\nb\n\nc\n");
    assert_eq!(remove_consecutive_empty_lines("a\r\n\r\n\r\nb"), "a\r\n\r\nb");
    assert_eq!(remove_consecutive_empty_lines("a\nb"), "a\nb");
}

#[test]
fn write_offsets_are_signed() {
    assert_eq!(signed_offset("12"), "+12");
    assert_eq!(signed_offset("-6"), "-6");
    assert_eq!(signed_offset("0"), "0");
    assert_eq!(signed_offset(" 7 "), "+7");
    assert_eq!(signed_offset("varies"), "varies");
}

#[test]
fn ringcode_label_tiers() {
    assert_eq!(ringcode_labels(1, false), &["Data Side", "Label Side"]);
    assert_eq!(ringcode_labels(1, true), &["Data Side", "Label Side"]);
    assert_eq!(ringcode_labels(2, false), &["Layer 0 (Inner)", "Layer 1 (Outer)"]);
    assert_eq!(ringcode_labels(2, true), &["Layer 0 (Outer)", "Layer 1 (Inner)"]);
    assert_eq!(ringcode_labels(3, true)[0], "Layer 0 (Inner)");
    assert_eq!(ringcode_labels(3, true)[2], "Layer 2 (Outer)");
    assert_eq!(ringcode_labels(4, false).len(), 4);
    assert_eq!(ringcode_labels(4, true)[3], "Layer 3 (Inner)");
}

// ---------------------------------------------------------------------------
// Whole reports
// ---------------------------------------------------------------------------

#[test]
fn empty_record_report() {
    let expected = format!(
        "{}\n\nCommon Disc Info:\n\tRegion: {}\n\tLanguages: {}\n\n\tRingcode Information:\n\n\
         Version and Editions:\n\nSize & Checksum:\n\nDumping Info:\n",
        PREAMBLE.join("\n"),
        REGION_PLACEHOLDER,
        LANGUAGE_PLACEHOLDER,
    );
    assert_eq!(report(&SubmissionInfo::new()), expected);
}

#[test]
fn missing_record() {
    assert!(matches!(
        format_output(None, true),
        Err(FormatError::MissingSubmission)
    ));
    assert_eq!(
        format_output_with_status(None, true),
        (None, "Submission information was missing".to_string())
    );
}

#[test]
fn success_status() {
    let info = SubmissionInfo::new().with_title("Game");
    let (text, status) = format_output_with_status(Some(&info), false);
    assert_eq!(status, SUCCESS_STATUS);
    assert!(text.unwrap().contains("\tTitle: Game\n"));
}

#[test]
fn internal_errors_become_status_text() {
    let (text, status) = into_status(Err(FormatError::internal("boom")));
    assert!(text.is_none());
    assert_eq!(status, "Error formatting submission info: boom");
}

#[test]
fn identity_lines() {
    let mut info = SubmissionInfo::new()
        .with_system(RedumpSystem::SegaSaturn)
        .with_media(DiscType::Cd)
        .with_region(redump_core::Region::Japan)
        .with_language(Language::Japanese)
        .with_language(Language::English);
    info.fully_matched_id = Some(5);
    info.partially_matched_ids = Some(vec![1, 2]);

    let text = report(&info);
    assert!(text.contains("\tSystem: Sega Saturn\n"));
    assert!(text.contains("\tMedia Type: CD-ROM\n"));
    assert!(text.contains("\tFully Matching ID: 5\n"));
    assert!(text.contains("\tPartially Matching IDs: 1, 2\n"));
    assert!(text.contains("\tRegion: Japan\n"));
    assert!(text.contains("\tLanguages: Japanese, English\n"));
}

#[test]
fn empty_language_list_gets_the_placeholder() {
    let mut info = SubmissionInfo::new()
        .with_system(RedumpSystem::SonyPlayStation2)
        .with_media(DiscType::Dvd5);
    info.common_disc_info_mut().languages = Some(Vec::new());
    assert!(report(&info).contains(&format!("\tLanguages: {}\n", LANGUAGE_PLACEHOLDER)));
}

#[test]
fn unknown_languages_get_a_placeholder_each() {
    let mut info = SubmissionInfo::new();
    info.common_disc_info_mut().languages =
        Some(vec![Some(Language::English), None, Some(Language::Japanese)]);
    assert!(report(&info).contains(&format!(
        "\tLanguages: English, {}, Japanese\n",
        LANGUAGE_PLACEHOLDER
    )));
}

#[test]
fn dual_layer_ring_codes() {
    let mut info = SubmissionInfo::new()
        .with_system(RedumpSystem::MicrosoftXbox360)
        .with_layerbreaks(1_913_760, 0, 0);
    let common = info.common_disc_info_mut();
    common.layer0 = RingcodeLayer {
        mastering_ring: Some("L0".into()),
        mould_sid: Some("M0".into()),
        ..Default::default()
    };
    common.layer1.mastering_ring = Some("L1".into());
    common.ring_write_offset = Some("+0".into());

    let text = report(&info);
    assert!(text.contains(
        "\t\tLayer 0 (Inner) Mastering Code (laser branded/etched): L0\n\
         \t\tData Side Mould SID Code: M0\n\
         \t\tLayer 1 (Outer) Mastering Code (laser branded/etched): L1\n\
         \t\tWrite Offset: +0\n"
    ));
}

#[test]
fn quad_layer_ring_codes_reach_layer_three() {
    let mut info = SubmissionInfo::new()
        .with_system(RedumpSystem::BdVideo)
        .with_layerbreaks(1, 2, 3);
    let common = info.common_disc_info_mut();
    common.layer2.toolstamp = Some("T2".into());
    common.layer3.mastering_sid = Some("S3".into());
    common.layer3.mould_sid = Some("never shown".into());

    let text = report(&info);
    assert!(text.contains("\t\tLayer 2 Toolstamp or Mastering Code (engraved/stamped): T2\n"));
    assert!(text.contains("\t\tLayer 3 (Outer) Mastering SID Code: S3\n"));
    assert!(!text.contains("never shown"));
}

#[test]
fn edc_only_for_playstation() {
    let mut psx = SubmissionInfo::new().with_system(RedumpSystem::SonyPlayStation);
    psx.edc = Some(redump_core::EdcSection { edc: Some(YesNo::Yes) });
    assert!(report(&psx).contains("EDC:\n\tEDC: Yes\n\n"));

    let saturn = SubmissionInfo::new().with_system(RedumpSystem::SegaSaturn);
    assert!(!report(&saturn).contains("EDC:"));
}

#[test]
fn extras_need_a_reportable_field() {
    let mut info = SubmissionInfo::new();
    info.extras = Some(ExtrasSection {
        disc_key: Some("ABCD".into()),
        ..Default::default()
    });
    assert!(!report(&info).contains("Extras:"));

    info.extras = Some(ExtrasSection {
        disc_key: Some("ABCD".into()),
        bca: Some("0001".into()),
        ..Default::default()
    });
    assert!(report(&info).contains("Extras:\n\tDisc Key: ABCD\n\tBCA: 0001\n\n"));
}

#[test]
fn copy_protection_section() {
    let mut info = SubmissionInfo::new().with_system(RedumpSystem::SegaSaturn);
    info.copy_protection = Some(CopyProtectionSection {
        anti_modchip: Some(YesNo::Null),
        ..Default::default()
    });
    assert!(!report(&info).contains("Copy Protection:"));

    info.copy_protection = Some(CopyProtectionSection {
        libcrypt: Some(YesNo::Yes),
        protection: Some("SafeDisc".into()),
        ..Default::default()
    });
    let text = report(&info);
    assert!(text.contains("Copy Protection:\n\tProtection: SafeDisc\n\n"));
    assert!(!text.contains("LibCrypt"));
}

#[test]
fn playstation_copy_protection_fields() {
    let mut info = SubmissionInfo::new().with_system(RedumpSystem::SonyPlayStation);
    info.copy_protection = Some(CopyProtectionSection {
        anti_modchip: Some(YesNo::No),
        libcrypt: Some(YesNo::Yes),
        libcrypt_data: Some("MSF: 00:00:00".into()),
        ..Default::default()
    });
    let text = report(&info);
    assert!(text.contains(
        "Copy Protection:\n\tAnti-modchip: No\n\tLibCrypt: Yes\n\
         \tSubIntention Data (SecuROM/LibCrypt): MSF: 00:00:00\n\n"
    ));
}

#[test]
fn tracks_replace_size_and_checksums() {
    let mut info = SubmissionInfo::new().with_size(1234);
    info.tracks_and_write_offsets = Some(TracksAndWriteOffsetsSection {
        clrmamepro_data: Some("rom1\nrom2".into()),
        other_write_offsets: Some("12".into()),
        ..Default::default()
    });

    let text = report(&info);
    assert!(text.contains(
        "Tracks and Write Offsets:\n\tDAT:\n\nrom1\nrom2\n\n\tWrite Offset: +12\n\nDumping Info:\n"
    ));
    assert!(!text.contains("Size & Checksum:"));
}

#[test]
fn size_and_checksums() {
    let mut info = SubmissionInfo::new()
        .with_media(DiscType::Dvd9)
        .with_system(RedumpSystem::SonyPlayStation2)
        .with_size(8_000_000_000)
        .with_layerbreaks(2_000_000, 0, 0);
    info.size_and_checksums_mut().crc32 = Some("deadbeef".into());

    let text = format_output(Some(&info), true).unwrap();
    assert!(text.contains(
        "Size & Checksum:\n\tLayerbreak: 2000000\n\tSize: 8000000000\n\tCRC32: deadbeef\n\n"
    ));
}

#[test]
fn every_measured_layerbreak_is_listed() {
    let info = SubmissionInfo::new()
        .with_system(RedumpSystem::SonyPlayStation3)
        .with_media(DiscType::Bd100)
        .with_size(90 * GB)
        .with_layerbreaks(1000, 2000, 0);
    let text = format_output(Some(&info), false).unwrap();
    assert!(text.contains(
        "Size & Checksum:\n\tLayerbreak: 1000\n\tLayerbreak 2: 2000\n\tSize: 90000000000\n"
    ));
    assert!(!text.contains("Layerbreak 3"));

    let quad = SubmissionInfo::new()
        .with_system(RedumpSystem::SonyPlayStation3)
        .with_media(DiscType::Bd128)
        .with_layerbreaks(1000, 2000, 3000);
    let text = format_output(Some(&quad), false).unwrap();
    assert!(text.contains("\tLayerbreak: 1000\n\tLayerbreak 2: 2000\n\tLayerbreak 3: 3000\n"));
    assert!(!format_output(Some(&quad), true).unwrap().contains("Layerbreak"));
}

#[test]
fn compatibility_mode_hides_derived_layerbreaks() {
    let bluray = SubmissionInfo::new()
        .with_system(RedumpSystem::SonyPlayStation3)
        .with_media(DiscType::Bd50)
        .with_size(30 * GB)
        .with_layerbreaks(12 * GB, 0, 0);
    assert!(!format_output(Some(&bluray), true).unwrap().contains("Layerbreak"));
    assert!(format_output(Some(&bluray), false).unwrap().contains("\tLayerbreak: 12000000000\n"));

    let xbox = SubmissionInfo::new()
        .with_system(RedumpSystem::MicrosoftXbox)
        .with_media(DiscType::Dvd9)
        .with_layerbreaks(1_913_760, 0, 0);
    assert!(!format_output(Some(&xbox), true).unwrap().contains("Layerbreak"));
    assert!(format_output(Some(&xbox), false).unwrap().contains("Layerbreak"));
}

#[test]
fn comments_are_trimmed() {
    let mut info = SubmissionInfo::new();
    info.common_disc_info_mut().comments = Some("\n  [T:ISN] A  \n".into());
    assert!(report(&info).contains("\tComments: [T:ISN] A\n"));
}

// ---------------------------------------------------------------------------
// ReportFormatter
// ---------------------------------------------------------------------------

#[test]
fn formatter_runs_pre_passes() {
    let info = SubmissionInfo::new()
        .with_system(RedumpSystem::SonyPlayStation2)
        .with_media(DiscType::Dvd5)
        .with_layerbreaks(2_000_000, 0, 0)
        .with_special_field(redump_core::SiteCode::InternalSerialName, "SLUS-20000");

    let formatter = ReportFormatter::default();
    let prepared = formatter.prepare(info.clone());
    let common = prepared.common_disc_info.as_ref().unwrap();
    assert_eq!(common.media, Some(DiscType::Dvd9));
    assert_eq!(common.comments.as_deref(), Some("[T:ISN] SLUS-20000"));

    let text = formatter.format(info).unwrap();
    assert!(text.contains("\tMedia Type: DVD-9\n"));
    assert!(text.contains("\tComments: [T:ISN] SLUS-20000\n"));
}

#[test]
fn formatter_pre_passes_can_be_disabled() {
    let settings = FormatterSettings {
        normalize_disc_type: false,
        process_special_fields: false,
        ..Default::default()
    };
    let info = SubmissionInfo::new()
        .with_media(DiscType::Dvd5)
        .with_layerbreaks(2_000_000, 0, 0)
        .with_special_field(redump_core::SiteCode::Genre, "Puzzle");

    let prepared = ReportFormatter::new(settings).prepare(info.clone());
    assert_eq!(prepared, info);
}

#[test]
fn formatter_uses_configured_thresholds() {
    let info = SubmissionInfo::new()
        .with_media(DiscType::Bd25)
        .with_size(26 * GB);

    let primary = ReportFormatter::default().format(info.clone()).unwrap();
    assert!(primary.contains("\tMedia Type: Blu-ray-25\n"));

    let alternate = ReportFormatter::new(FormatterSettings {
        bluray_thresholds: ThresholdProfile::Alternate,
        ..Default::default()
    });
    let text = alternate.format(info).unwrap();
    assert!(text.contains("\tMedia Type: Blu-ray-33\n"));
}

#[test]
fn formatter_status_for_missing_record() {
    let (text, status) = ReportFormatter::default().format_with_status(None);
    assert!(text.is_none());
    assert_eq!(status, "Submission information was missing");
}
