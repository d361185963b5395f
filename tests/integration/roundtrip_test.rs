//! Round trips between the document, escape text and markup

use chromatext::ansi::{decode, encode, encode_with, import, EncodeOptions, LinePolicy, VisualStyle};
use chromatext::document::{apply_style, reset_document, Document, Selection};
use chromatext::markup::{ingest, render};
use chromatext::style::{StyleCode, StyleState};

fn sample_document() -> Document {
    let doc = reset_document("Status: OK\nwarn: disk 91%\n\n  done ✓");
    [
        (0, 6, StyleCode::Bold),
        (8, 10, StyleCode::FgYellowishGreen),
        (8, 10, StyleCode::BgBlueishBlack),
        (11, 15, StyleCode::FgGold),
        (11, 15, StyleCode::Underline),
        (16, 25, StyleCode::BgRustBrown),
        (20, 32, StyleCode::FgWhite),
    ]
    .into_iter()
    .fold(doc, |doc, (start, end, code)| {
        apply_style(&doc, Selection::new(start, end), code)
    })
}

#[test]
fn import_restores_encoded_document() {
    let doc = sample_document();
    assert_eq!(import(&encode(&doc)), doc.compact());
}

#[test]
fn import_restores_reopened_encoding() {
    let doc = sample_document();
    let options = EncodeOptions {
        line_policy: LinePolicy::Reopen,
        fence: true,
    };
    assert_eq!(import(&encode_with(&doc, &options)), doc.compact());
}

#[test]
fn markup_round_trip_restores_document() {
    let doc = sample_document();
    assert_eq!(ingest(&render(&doc)), doc.compact());
}

#[test]
fn ingested_markup_encodes_like_direct_styling() {
    let pasted = concat!(
        r#"<div><span style="color: rgb(220, 50, 47); font-weight: 700">Error</span>"#,
        r#" at <span style="text-decoration: underline">line 3</span></div>"#,
    );
    let direct = [
        (0, 5, StyleCode::FgRed),
        (0, 5, StyleCode::Bold),
        (9, 15, StyleCode::Underline),
    ]
    .into_iter()
    .fold(reset_document("Error at line 3"), |doc, (start, end, code)| {
        apply_style(&doc, Selection::new(start, end), code)
    });

    assert_eq!(encode(&ingest(pasted)), encode(&direct));
}

#[test]
fn every_state_survives_render_and_decode() {
    for fg in [None, Some(StyleCode::FgDarkGray), Some(StyleCode::FgPink)] {
        for bg in [None, Some(StyleCode::BgGray45), Some(StyleCode::BgCreamWhite)] {
            for bold in [false, true] {
                for underline in [false, true] {
                    let mut state = StyleState::default();
                    state.set_bold(bold);
                    state.set_underline(underline);
                    if let Some(fg) = fg {
                        state.apply(fg);
                    }
                    if let Some(bg) = bg {
                        state.apply(bg);
                    }
                    let decoded = decode(&VisualStyle::from_state(&state));
                    assert_eq!(decoded, state.code_set(), "{state:?}");
                }
            }
        }
    }
}

#[test]
fn foreign_escapes_are_dropped_on_import() {
    let text = "\x1b[38;5;208morange\x1b[0m \x1b[2Jcleared \x1b[1;90mbright\x1b[22;39m";
    let doc = import(text);
    assert_eq!(doc.plain_text(), "orange cleared bright");
    assert_eq!(encode(&doc), "```ansi\norange cleared \x1b[1mbright\x1b[0m\n```");
}
