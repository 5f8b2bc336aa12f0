use super::*;

#[test]
fn default_record_has_no_sections() {
    let info = SubmissionInfo::new();
    assert_eq!(info.schema_version, CURRENT_SCHEMA_VERSION);
    assert!(info.common_disc_info.is_none());
    assert!(info.size_and_checksums.is_none());
    assert!(info.artifacts.is_empty());
}

#[test]
fn builders_create_sections_on_demand() {
    let info = SubmissionInfo::new()
        .with_system(RedumpSystem::SonyPlayStation)
        .with_media(DiscType::Cd)
        .with_title("Example")
        .with_language(Language::English)
        .with_language(Language::English)
        .with_size(734_003_200);

    let common = info.common_disc_info.as_ref().unwrap();
    assert_eq!(common.system, Some(RedumpSystem::SonyPlayStation));
    assert_eq!(common.title.as_deref(), Some("Example"));
    assert_eq!(
        common.languages,
        Some(vec![Some(Language::English), Some(Language::English)])
    );
    assert_eq!(info.size_and_checksums.as_ref().unwrap().size, 734_003_200);
    assert_eq!(info.system(), Some(RedumpSystem::SonyPlayStation));
}

#[test]
fn special_fields_route_to_their_bucket() {
    let info = SubmissionInfo::new()
        .with_special_field(SiteCode::InternalSerialName, "ABC-123")
        .with_special_field(SiteCode::Games, "Game A");

    let common = info.common_disc_info.unwrap();
    assert_eq!(
        common.comments_special_fields.get(SiteCode::InternalSerialName),
        Some("ABC-123")
    );
    assert!(!common.comments_special_fields.contains(SiteCode::Games));
    assert_eq!(common.contents_special_fields.get(SiteCode::Games), Some("Game A"));
}

#[test]
fn clone_is_deep() {
    let original = SubmissionInfo::new()
        .with_title("Original")
        .with_special_field(SiteCode::Series, "Saga");
    let mut copy = original.clone();

    let common = copy.common_disc_info_mut();
    common.title = Some("Changed".into());
    common.comments_special_fields.clear();
    copy.artifacts.insert("log".into(), "data".into());

    let original_common = original.common_disc_info.as_ref().unwrap();
    assert_eq!(original_common.title.as_deref(), Some("Original"));
    assert_eq!(original_common.comments_special_fields.len(), 1);
    assert!(original.artifacts.is_empty());
}

#[test]
fn layer_count_follows_layerbreaks() {
    let mut sac = SizeAndChecksumsSection::default();
    assert_eq!(sac.layer_count(), 1);
    sac.layerbreak = 100;
    assert_eq!(sac.layer_count(), 2);
    sac.layerbreak2 = 200;
    assert_eq!(sac.layer_count(), 3);
    sac.layerbreak3 = 300;
    assert_eq!(sac.layer_count(), 4);
}

#[test]
fn copy_protection_reportability() {
    let mut section = CopyProtectionSection::default();
    assert!(!section.has_reportable_data());

    section.anti_modchip = Some(YesNo::Null);
    assert!(!section.has_reportable_data());

    section.anti_modchip = Some(YesNo::No);
    assert!(section.has_reportable_data());

    let section = CopyProtectionSection {
        protection: Some(String::new()),
        ..Default::default()
    };
    assert!(!section.has_reportable_data());
}

#[test]
fn extras_reportability_ignores_disc_key_alone() {
    let mut extras = ExtrasSection {
        disc_key: Some("0123".into()),
        ..Default::default()
    };
    assert!(!extras.has_reportable_data());
    extras.bca = Some("0001".into());
    assert!(extras.has_reportable_data());
}

#[test]
fn json_round_trip_omits_empty_special_fields() {
    let info = SubmissionInfo::new()
        .with_system(RedumpSystem::SonyPlayStation2)
        .with_region(Region::Europe);
    let json = serde_json::to_string(&info).unwrap();
    assert!(!json.contains("special_fields"));

    let back: SubmissionInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}

#[test]
fn json_keeps_pending_special_fields() {
    let info = SubmissionInfo::new().with_special_field(SiteCode::Isbn, "978-0");
    let json = serde_json::to_string(&info).unwrap();
    let back: SubmissionInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(
        back.common_disc_info
            .unwrap()
            .comments_special_fields
            .get(SiteCode::Isbn),
        Some("978-0")
    );
}
