use std::collections::HashMap;

use zombie_room::renderer::builtin_font;
use zombie_room::renderer::text::*;
use zombie_room::ui::TextMeasure;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── helpers ──────────────────────────────────────────────────────────────────

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

/// 'A' at atlas (0,0) 8×8, advance 10; line height 10; 64×64 texture.
fn tiny_font() -> Font {
    let mut glyphs = HashMap::new();
    glyphs.insert('A', Glyph {
        id: 'A', x: 0, y: 0, width: 8, height: 8, x_offset: 1, y_offset: 2, x_advance: 10,
    });
    glyphs.insert(' ', Glyph {
        id: ' ', x: 0, y: 0, width: 0, height: 0, x_offset: 0, y_offset: 0, x_advance: 10,
    });
    Font { glyphs, line_height: 10, texture_width: 64, texture_height: 64 }
}

// ── Built-in font ────────────────────────────────────────────────────────────

#[test]
fn builtin_font_covers_printable_ascii() {
    let font = builtin_font::font();
    assert_eq!(font.glyphs.len(), 95);
    for code in builtin_font::FIRST_CHAR..=builtin_font::LAST_CHAR {
        assert!(font.glyphs.contains_key(&(code as char)), "missing {:?}", code as char);
    }
    assert!(!font.glyphs.contains_key(&'\t'));
}

#[test]
fn builtin_font_is_monospaced() {
    let font = builtin_font::font();
    assert_eq!(font.line_height, 10);
    assert!(font.glyphs.values().all(|g| g.x_advance == 6));
    assert!(font.glyphs[&' '].is_blank());
    assert!(!font.glyphs[&'A'].is_blank());
}

#[test]
fn builtin_glyph_points_into_its_cell() {
    let font = builtin_font::font();
    // 'A' is cell 33: column 1, row 2.
    let a = &font.glyphs[&'A'];
    assert_eq!((a.x, a.y, a.width, a.height), (6, 21, 5, 7));
}

#[test]
fn builtin_font_matches_atlas_size() {
    let font = builtin_font::font();
    let img = builtin_font::atlas_image();
    assert_eq!((font.texture_width, font.texture_height), img.dimensions());
}

// ── measure ──────────────────────────────────────────────────────────────────

#[test]
fn measure_scales_advances_by_font_size() {
    let font = builtin_font::font();
    assert!(approx(font.measure("AB", 10.0), 12.0));
    assert!(approx(font.measure("AB", 20.0), 24.0));
    assert!(approx(font.measure("A B ", 20.0), 48.0));
}

#[test]
fn measure_skips_unknown_characters() {
    let font = builtin_font::font();
    assert!(approx(font.measure("A\u{e9}", 20.0), 12.0));
    assert_eq!(font.measure("", 20.0), 0.0);
}

#[test]
fn font_is_a_text_measure() {
    let font = builtin_font::font();
    assert_eq!(font.measure_text("hello", 20.0), font.measure("hello", 20.0));
}

#[test]
fn zero_line_height_measures_zero() {
    let mut font = tiny_font();
    font.line_height = 0;
    assert_eq!(font.measure("AAA", 20.0), 0.0);
}

// ── generate_text_mesh ───────────────────────────────────────────────────────

#[test]
fn empty_string_produces_no_geometry() {
    let (v, i) = generate_text_mesh("", &tiny_font(), [0.0, 0.0], 10.0, WHITE);
    assert!(v.is_empty());
    assert!(i.is_empty());
}

#[test]
fn single_glyph_is_one_quad() {
    let (v, i) = generate_text_mesh("A", &tiny_font(), [0.0, 0.0], 10.0, WHITE);
    assert_eq!(v.len(), 4);
    assert_eq!(i, vec![0, 1, 2, 1, 3, 2]);
}

#[test]
fn quad_position_applies_offset_and_scale() {
    let (v, _) = generate_text_mesh("A", &tiny_font(), [100.0, 50.0], 20.0, WHITE);
    // scale 2: offset (2, 4), size 16×16
    assert_eq!(v[0].position, [102.0, 54.0]);
    assert_eq!(v[3].position, [118.0, 70.0]);
}

#[test]
fn quad_uvs_span_the_glyph_region() {
    let (v, _) = generate_text_mesh("A", &tiny_font(), [0.0, 0.0], 10.0, WHITE);
    assert_eq!(v[0].uv, [0.0, 0.0]);
    assert_eq!(v[3].uv, [8.0 / 64.0, 8.0 / 64.0]);
}

#[test]
fn color_is_written_to_every_vertex() {
    let red = [1.0, 0.0, 0.0, 1.0];
    let (v, _) = generate_text_mesh("AA", &tiny_font(), [0.0, 0.0], 10.0, red);
    assert!(v.iter().all(|q| q.color == red));
}

#[test]
fn space_advances_without_geometry() {
    let (v, i) = generate_text_mesh("A A", &tiny_font(), [0.0, 0.0], 10.0, WHITE);
    assert_eq!(v.len(), 8);
    assert_eq!(i.len(), 12);
    // second 'A' starts two advances along
    assert_eq!(v[4].position[0], 21.0);
}

#[test]
fn second_quad_indices_are_offset() {
    let (_, i) = generate_text_mesh("AA", &tiny_font(), [0.0, 0.0], 10.0, WHITE);
    assert_eq!(&i[6..], &[4, 5, 6, 5, 7, 6]);
}

#[test]
fn newline_returns_to_start_column() {
    let (v, _) = generate_text_mesh("A\nA", &tiny_font(), [5.0, 0.0], 10.0, WHITE);
    assert_eq!(v.len(), 8);
    assert_eq!(v[4].position, [6.0, 12.0]);
}

#[test]
fn unknown_characters_are_skipped() {
    let (v, _) = generate_text_mesh("AZA", &tiny_font(), [0.0, 0.0], 10.0, WHITE);
    assert_eq!(v.len(), 8);
    assert_eq!(v[4].position[0], 11.0);
}

#[test]
fn zero_line_height_produces_nothing() {
    let mut font = tiny_font();
    font.line_height = 0;
    let (v, i) = generate_text_mesh("AAA", &font, [0.0, 0.0], 10.0, WHITE);
    assert!(v.is_empty() && i.is_empty());
}

#[test]
fn mesh_width_agrees_with_measure() {
    let font = builtin_font::font();
    let (v, _) = generate_text_mesh("Hi", &font, [0.0, 0.0], 20.0, WHITE);
    // last glyph right edge = one advance + glyph width, both scaled by 2
    assert!(approx(v[7].position[0], 12.0 + 10.0));
    assert!(approx(font.measure("Hi", 20.0), 24.0));
}
