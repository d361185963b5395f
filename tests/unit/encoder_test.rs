//! Unit tests for the ANSI encoder and visual-style decoder

use chromatext::ansi::{
    decode, encode, encode_scopes, encode_with, EncodeOptions, LinePolicy, VisualStyle,
};
use chromatext::document::{reset_document, StyleScope};
use chromatext::style::{StyleCode, StyleSet, StyleState};

use crate::helpers::styled;

fn body_only(line_policy: LinePolicy) -> EncodeOptions {
    EncodeOptions {
        line_policy,
        fence: false,
    }
}

#[test]
fn fenced_block_matches_expected_bytes() {
    let doc = styled(
        "Hello",
        &[(0, 5, StyleCode::Bold), (0, 5, StyleCode::FgRed)],
    );
    assert_eq!(encode(&doc), "```ansi\n\x1b[1;31mHello\x1b[0m\n```");
}

#[test]
fn empty_document_encodes_to_empty_block() {
    assert_eq!(encode(&reset_document("")), "```ansi\n\n```");
}

#[test]
fn style_change_resets_before_reopening() {
    let doc = styled(
        "redblue plain",
        &[(0, 3, StyleCode::FgRed), (3, 7, StyleCode::FgLightBlue)],
    );
    assert_eq!(
        encode_with(&doc, &body_only(LinePolicy::Carry)),
        "\x1b[31mred\x1b[0m\x1b[34mblue\x1b[0m plain"
    );
}

#[test]
fn carry_keeps_style_open_across_newline() {
    let doc = styled("ab\ncd", &[(0, 5, StyleCode::FgRed)]);
    assert_eq!(
        encode_with(&doc, &body_only(LinePolicy::Carry)),
        "\x1b[31mab\ncd\x1b[0m"
    );
}

#[test]
fn reopen_resets_at_each_newline() {
    let doc = styled("ab\ncd", &[(0, 5, StyleCode::FgRed)]);
    assert_eq!(
        encode_with(&doc, &body_only(LinePolicy::Reopen)),
        "\x1b[31mab\x1b[0m\n\x1b[31mcd\x1b[0m"
    );
}

#[test]
fn nested_scopes_restore_parent_style() {
    let tree = StyleScope::root()
        .child(
            StyleScope::new(StyleCode::FgRed)
                .text("a")
                .child(StyleScope::new(StyleCode::Bold).text("b")),
        )
        .text("c");
    assert_eq!(
        encode_scopes(&tree, &body_only(LinePolicy::Carry)),
        "\x1b[31ma\x1b[0m\x1b[1;31mb\x1b[0mc"
    );
}

#[test]
fn decode_reverses_rendered_state() {
    let state = StyleState::from_codes([
        StyleCode::Underline,
        StyleCode::FgYellowishGreen,
        StyleCode::BgBlueishBlack,
    ]);
    assert_eq!(decode(&VisualStyle::from_state(&state)), state.code_set());
}

#[test]
fn decode_ignores_colors_in_wrong_category() {
    // #dc322f is the red foreground; as a background it means nothing
    let style = VisualStyle::parse_css("background-color: #dc322f; font-weight: 700");
    assert_eq!(decode(&style), StyleSet::from([StyleCode::Bold]));
}

#[test]
fn decode_accepts_rgb_notation_and_decoration_lists() {
    let style = VisualStyle::parse_css(
        "color: rgb(38, 139, 210); text-decoration: underline dotted",
    );
    assert_eq!(
        decode(&style),
        StyleSet::from([StyleCode::FgLightBlue, StyleCode::Underline])
    );
}

#[test]
fn decode_of_empty_style_is_empty() {
    assert!(decode(&VisualStyle::default()).is_empty());
}

#[test]
fn encoding_is_deterministic() {
    let doc = styled(
        "one\ntwo three",
        &[(0, 5, StyleCode::BgRustBrown), (4, 7, StyleCode::Underline)],
    );
    assert_eq!(encode(&doc), encode(&doc));
}

#[test]
fn decode_light_blue_alone_yields_only_that_code() {
    let style = VisualStyle {
        color: Some("#268BD2".to_string()),
        ..VisualStyle::default()
    };
    assert_eq!(decode(&style), StyleSet::from([StyleCode::FgLightBlue]));
}
