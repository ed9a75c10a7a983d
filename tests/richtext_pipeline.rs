//! End-to-end rich-text flow: what the edit page does between the
//! contenteditable surface and the document store.

use plotlist::{
    Alignment, FontSize, align_blocks, normalize_blocks, sanitize, set_font_size_blocks,
    to_plain_text,
};
use proptest::prelude::*;

#[test]
fn editor_content_survives_the_full_pipeline() {
    // Pasted from who-knows-where: junk wrapper, script, bad href, loose text.
    let pasted = concat!(
        "<meta charset=\"utf-8\"><section>",
        "Działka budowlana<script>steal()</script>",
        "<p style=\"font-size: 13; color: red\" class=\"docs-internal x\">1500 m²</p>",
        "<a href=\"javascript:void(0)\">media w drodze</a>",
        "</section>"
    );

    let sanitized = sanitize(pasted);
    assert_eq!(
        sanitized,
        "Działka budowlana<p style=\"font-size: 13px\">1500 m²</p>media w drodze"
    );

    let normalized = normalize_blocks(&sanitized);
    assert_eq!(
        normalized,
        "<p>Działka budowlana</p><p style=\"font-size: 13px\">1500 m²</p><p>media w drodze</p>"
    );

    // What gets persisted is already in fixed point.
    assert_eq!(sanitize(&normalized), normalized);
    assert_eq!(normalize_blocks(&normalized), normalized);
}

#[test]
fn toolbar_formatting_composes() {
    let draft = "intro<p>szczegóły</p>";

    let aligned = align_blocks(draft, 0..1, Some(Alignment::Center));
    assert_eq!(
        aligned,
        "<p class=\"rt-align-center\">intro</p><p>szczegóły</p>"
    );

    let sized = set_font_size_blocks(&aligned, 1..2, Some(FontSize::px(18.0)));
    assert_eq!(
        sized,
        "<p class=\"rt-align-center\">intro</p><p style=\"font-size: 18px\">szczegóły</p>"
    );

    // Formatting output is persistable as-is.
    assert_eq!(sanitize(&sized), sized);
}

#[test]
fn plain_text_projection_never_sees_dropped_markup() {
    let stored = "<p>Cena: <b>250 000 zł</b></p><script>alert(1)</script>";
    assert_eq!(to_plain_text(stored), "Cena: 250 000 zł");
}

#[test]
fn empty_surface_gets_a_caret_block() {
    assert_eq!(normalize_blocks(""), "<p><br></p>");
    assert_eq!(normalize_blocks("<span></span>"), "<p><span></span></p>");
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(input in "[a-zA-Z0-9<>/\"'=&#;:., \n_-]{0,120}") {
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitize_is_idempotent_on_tag_soup(
        parts in prop::collection::vec(
            (
                prop::sample::select(
                    &["p", "div", "span", "b", "u", "a", "h2", "li", "script", "marquee"][..],
                ),
                "[a-z <>&]{0,12}",
            ),
            0..8,
        )
    ) {
        let mut input = String::new();
        for (tag, text) in parts {
            input.push_str(&format!("<{tag} class=\"rt-align-left junk\">{text}"));
        }
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn plain_text_projection_is_stable(input in "[a-z<>/ ]{0,80}") {
        // Projecting already-plain text changes nothing.
        let plain = to_plain_text(&input);
        prop_assert_eq!(to_plain_text(&plain), plain);
    }
}
