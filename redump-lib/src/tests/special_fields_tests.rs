use super::*;
use std::collections::HashSet;

#[test]
fn comment_order_covers_every_comment_code() {
    let listed: HashSet<_> = COMMENT_CODE_ORDER.iter().copied().collect();
    assert_eq!(listed.len(), COMMENT_CODE_ORDER.len(), "duplicate in comment order");
    for &code in SiteCode::all() {
        assert_eq!(
            listed.contains(&code),
            code.is_comment_code(),
            "{:?} misplaced in comment order",
            code
        );
    }
}

#[test]
fn content_order_covers_every_content_code() {
    let listed: HashSet<_> = CONTENT_CODE_ORDER.iter().copied().collect();
    assert_eq!(listed.len(), CONTENT_CODE_ORDER.len(), "duplicate in content order");
    for &code in SiteCode::all() {
        assert_eq!(
            listed.contains(&code),
            code.is_content_code(),
            "{:?} misplaced in content order",
            code
        );
    }
}

#[test]
fn inline_tag() {
    assert_eq!(
        format_site_tag(SiteCode::InternalSerialName, "ABC-123"),
        "[T:ISN] ABC-123"
    );
}

#[test]
fn multi_line_tag() {
    assert_eq!(
        format_site_tag(SiteCode::Games, "Game A\nGame B"),
        "[T:G]\nGame A\nGame B\n"
    );
}

#[test]
fn boolean_tags_need_literal_true() {
    assert_eq!(format_site_tag(SiteCode::PcMacHybrid, "True"), "[T:PCMAC]");
    assert_eq!(format_site_tag(SiteCode::PcMacHybrid, "False"), "");
    assert_eq!(format_site_tag(SiteCode::PcMacHybrid, "true"), "");
    assert_eq!(format_site_tag(SiteCode::Vcd, ""), "");
}

#[test]
fn false_boolean_leaves_no_blank_line() {
    let fields = SpecialFields::from([
        (SiteCode::InternalSerialName, "ABC-123"),
        (SiteCode::Vcd, "False"),
        (SiteCode::PcMacHybrid, "True"),
    ]);
    assert_eq!(
        assemble("", &fields, COMMENT_CODE_ORDER),
        "[T:ISN] ABC-123\n[T:PCMAC]"
    );
}

#[test]
fn empty_fields_keep_existing_text() {
    let fields = SpecialFields::new();
    for text in ["Some comment", "  padded  ", "line one\n\n\n\nline two"] {
        assert_eq!(assemble(text, &fields, COMMENT_CODE_ORDER), text);
    }
}

#[test]
fn tags_are_prepended_in_priority_order() {
    let fields = SpecialFields::from([
        (SiteCode::Series, "Saga"),
        (SiteCode::AlternativeTitle, "Alt"),
        (SiteCode::InternalSerialName, "ABC-123"),
    ]);
    assert_eq!(
        assemble("Existing note", &fields, COMMENT_CODE_ORDER),
        "[T:ALT] Alt\n[T:ISN] ABC-123\n[T:SERIES] Saga\nExisting note"
    );
}

#[test]
fn codes_outside_the_order_are_ignored() {
    let fields = SpecialFields::from([
        (SiteCode::Games, "Game A"),
        (SiteCode::Isbn, "978-0"),
    ]);
    assert_eq!(assemble("", &fields, CONTENT_CODE_ORDER), "[T:G]\nGame A");
}

#[test]
fn empty_values_are_skipped() {
    let fields = SpecialFields::from([(SiteCode::Genre, ""), (SiteCode::Isbn, "978-0")]);
    assert_eq!(assemble("", &fields, COMMENT_CODE_ORDER), "[T:ISBN] 978-0");
}

#[test]
fn paragraphs_are_separated_by_one_blank_line() {
    let fields = SpecialFields::from([
        (SiteCode::Games, "Game A\r\nGame B"),
        (SiteCode::PlayableDemos, "Demo C"),
    ]);
    assert_eq!(
        assemble("\n\nNotes", &fields, CONTENT_CODE_ORDER),
        "[T:G]\nGame A\nGame B\n\n[T:PD]\nDemo C\n\nNotes"
    );
}

#[test]
fn processing_routes_and_clears() {
    let info = SubmissionInfo::new()
        .with_special_field(SiteCode::InternalSerialName, "ABC-123")
        .with_special_field(SiteCode::Games, "Game A");

    let info = process_special_fields(info);
    let common = info.common_disc_info.unwrap();
    assert_eq!(common.comments.as_deref(), Some("[T:ISN] ABC-123"));
    assert_eq!(common.contents.as_deref(), Some("[T:G]\nGame A"));
    assert!(common.comments_special_fields.is_empty());
    assert!(common.contents_special_fields.is_empty());
}

#[test]
fn processing_without_fields_leaves_text_alone() {
    let mut info = SubmissionInfo::new();
    info.common_disc_info_mut().comments = Some("  keep me  ".into());
    let info = process_special_fields(info);
    assert_eq!(
        info.common_disc_info.unwrap().comments.as_deref(),
        Some("  keep me  ")
    );
}

#[test]
fn processing_without_common_section_is_a_no_op() {
    let info = SubmissionInfo::new().with_size(10);
    let processed = process_special_fields(info.clone());
    assert_eq!(processed, info);
}
