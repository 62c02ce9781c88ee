// Integration tests (native) for the `heartfall` crate.
// These tests avoid wasm-specific functionality and exercise the public
// surface so they can run under `cargo test` on the host.

use std::collections::HashSet;

use heartfall::scene::{ASPECT_RATIO, BASE_COLOR, GLYPH_RAMP, OUTLINE_BAND, PINK_PALETTE};

// Before start_background() runs there is no scene, hence no hearts.
#[test]
fn heart_count_is_zero_before_start() {
    assert_eq!(heartfall::active_heart_count(), 0);
}

#[test]
fn glyph_ramp_is_nine_unique_single_chars() {
    let mut seen = HashSet::new();
    assert_eq!(GLYPH_RAMP.len(), 9);
    for glyph in GLYPH_RAMP {
        assert_eq!(glyph.chars().count(), 1, "glyph '{glyph}' is not one char");
        assert!(seen.insert(glyph), "duplicate glyph '{glyph}' in ramp");
    }
}

#[test]
fn palette_entries_are_unique_hex_colors() {
    let mut seen = HashSet::new();
    assert_eq!(PINK_PALETTE.len(), 6);
    for color in PINK_PALETTE {
        assert!(seen.insert(color), "duplicate color '{color}' in palette");
        assert!(color.starts_with('#') && color.len() == 7, "bad color '{color}'");
        assert!(
            color[1..].chars().all(|c| c.is_ascii_hexdigit()),
            "bad hex in '{color}'"
        );
        assert_ne!(color, BASE_COLOR, "palette must not contain the base color");
    }
}

// The two empirically chosen visual constants are tunable but the shipped
// values are part of the rendered look.
#[test]
fn visual_constants_hold_shipped_values() {
    assert_eq!(ASPECT_RATIO, 1.8);
    assert_eq!(OUTLINE_BAND, 0.25);
    assert_eq!(heartfall::scene::SPAWN_RATE, 0.04);
    assert_eq!(heartfall::scene::CELL_SIZE, 14.0);
}
