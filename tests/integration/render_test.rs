//! Integration tests for thumbnail rendering

use sketchlist::render::{halfblock, png::encode_png};
use sketchlist::{PixelCanvas, SurfaceRegistry, ThumbnailRenderer};

use crate::helpers::filled;

/// Descriptor whose k-th scan cell uses palette index k % 16.
fn counting_descriptor() -> String {
    (0..256u32)
        .map(|k| char::from(b'A' + (k % 16) as u8))
        .collect()
}

/// One hex digit per pixel: the palette index painted there.
fn palette_grid(canvas: &PixelCanvas, renderer: &ThumbnailRenderer) -> String {
    (0..16)
        .map(|y| {
            (0..16)
                .map(|x| {
                    let color = canvas.pixel(x, y).expect("painted pixel");
                    let index = renderer.palette().index_of(color).expect("palette color");
                    format!("{:X}", index)
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Scan order
// ============================================================================

#[test]
fn serpentine_scan_starts_bottom_left() {
    let renderer = ThumbnailRenderer::default();
    let mut canvas = PixelCanvas::new(16, 16);
    renderer
        .render(&counting_descriptor(), &mut canvas)
        .unwrap();

    insta::assert_snapshot!(palette_grid(&canvas, &renderer), @r"
    FEDCBA9876543210
    0123456789ABCDEF
    FEDCBA9876543210
    0123456789ABCDEF
    FEDCBA9876543210
    0123456789ABCDEF
    FEDCBA9876543210
    0123456789ABCDEF
    FEDCBA9876543210
    0123456789ABCDEF
    FEDCBA9876543210
    0123456789ABCDEF
    FEDCBA9876543210
    0123456789ABCDEF
    FEDCBA9876543210
    0123456789ABCDEF
    ");
}

#[test]
fn single_marker_lands_on_scan_cell() {
    let renderer = ThumbnailRenderer::default();
    // Position 16 is the first cell of the second scanned row: row 14,
    // which runs right to left, so column 15.
    let mut data: Vec<char> = filled('A').chars().collect();
    data[16] = 'I';
    let data: String = data.into_iter().collect();

    let mut canvas = PixelCanvas::new(16, 16);
    renderer.render(&data, &mut canvas).unwrap();

    let palette = renderer.palette();
    assert_eq!(canvas.pixel(15, 14), Some(palette[8]));
    assert_eq!(canvas.pixel(0, 14), Some(palette[0]));
    assert_eq!(canvas.pixel(15, 15), Some(palette[0]));
}

#[test]
fn larger_canvas_scales_cells() {
    let renderer = ThumbnailRenderer::default();
    let mut canvas = PixelCanvas::thumbnail();
    renderer.render(&counting_descriptor(), &mut canvas).unwrap();

    let palette = renderer.palette();
    // 64px canvas: each cell is 4x4. Bottom-left cell is scan position 0.
    for (x, y) in [(0, 60), (3, 63)] {
        assert_eq!(canvas.pixel(x, y), Some(palette[0]));
    }
    assert_eq!(canvas.pixel(4, 63), Some(palette[1]));
    assert_eq!(canvas.pixel(63, 0), Some(palette[0]));
}

// ============================================================================
// Registry and output formats
// ============================================================================

#[test]
fn registry_renders_by_canvas_id() {
    let renderer = ThumbnailRenderer::default();
    let mut registry = SurfaceRegistry::new();
    registry.insert("canvas_cat", PixelCanvas::new(16, 16));

    renderer
        .render_into(&mut registry, "canvas_cat", &filled('H'))
        .unwrap();
    assert!(registry
        .get("canvas_cat")
        .unwrap()
        .is_filled_with(renderer.palette()[7]));

    assert!(renderer
        .render_into(&mut registry, "canvas_dog", &filled('H'))
        .is_err());
}

#[test]
fn halfblock_preview_has_eight_rows() {
    let renderer = ThumbnailRenderer::default();
    let mut canvas = PixelCanvas::new(16, 16);
    renderer.render(&filled('M'), &mut canvas).unwrap();

    let lines = halfblock::to_ansi(&canvas, true);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0].matches(halfblock::HALF_BLOCK).count(), 16);
    assert!(lines[0].contains("\x1b[38;2;41;173;255m"));
}

#[test]
fn png_output_has_signature() {
    let renderer = ThumbnailRenderer::default();
    let mut canvas = PixelCanvas::thumbnail();
    renderer.render(&filled('B'), &mut canvas).unwrap();

    let mut bytes = Vec::new();
    encode_png(&canvas, &mut bytes).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
