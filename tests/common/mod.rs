use image::{DynamicImage, GrayImage, Luma};

pub const CANVAS_W: u32 = 500;
pub const CANVAS_H: u32 = 400;

const BACKGROUND: u8 = 220;
const DOCUMENT: u8 = 40;
const BAND_TEXT: u8 = 200;

// Document rectangle used by the synthetic fixtures: 400x320 on a 500x400
// canvas, covering 64% of the frame.
pub const DOC_X: u32 = 50;
pub const DOC_Y: u32 = 40;
pub const DOC_W: u32 = 400;
pub const DOC_H: u32 = 320;

/// Single-color frame with no contours at all
pub fn uniform(width: u32, height: u32, level: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([level])))
}

/// Solid dark rectangle on a light canvas
pub fn solid_document() -> DynamicImage {
    let img = GrayImage::from_fn(CANVAS_W, CANVAS_H, |x, y| {
        if in_document(x, y) { Luma([DOCUMENT]) } else { Luma([BACKGROUND]) }
    });
    DynamicImage::ImageLuma8(img)
}

/// Document whose bottom band carries a bar pattern with roughly a third of
/// its pixels light, imitating printed machine-readable text.
pub fn document_with_mrz_band() -> DynamicImage {
    // Band occupies the bottom 20% of the document; the pattern is inset a
    // few pixels so its edges stay disconnected from the document outline.
    let band_top = DOC_Y + DOC_H - DOC_H / 5;
    let inset = 8;

    let img = GrayImage::from_fn(CANVAS_W, CANVAS_H, |x, y| {
        if !in_document(x, y) {
            return Luma([BACKGROUND]);
        }
        let in_pattern = y >= band_top + inset
            && y < DOC_Y + DOC_H - inset
            && x >= DOC_X + inset
            && x < DOC_X + DOC_W - inset;
        if in_pattern && ((x - DOC_X - inset) / 10) % 2 == 0 {
            Luma([BAND_TEXT])
        } else {
            Luma([DOCUMENT])
        }
    });
    DynamicImage::ImageLuma8(img)
}

/// Rectangle too small to pass the document-area gate (4% of the frame)
pub fn small_document() -> DynamicImage {
    let img = GrayImage::from_fn(CANVAS_W, CANVAS_H, |x, y| {
        if (30..130).contains(&x) && (30..110).contains(&y) {
            Luma([DOCUMENT])
        } else {
            Luma([BACKGROUND])
        }
    });
    DynamicImage::ImageLuma8(img)
}

/// Maximal high-frequency texture: every interior pixel is a sharp edge
pub fn checkerboard(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 { Luma([255]) } else { Luma([0]) }
    })
}

fn in_document(x: u32, y: u32) -> bool {
    (DOC_X..DOC_X + DOC_W).contains(&x) && (DOC_Y..DOC_Y + DOC_H).contains(&y)
}
