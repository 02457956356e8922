//! Software rasterization of the stroke list for export.
//!
//! Each stroke is turned into a coverage mask first (every pixel whose center lies
//! within half the stroke width of a segment) and then composited once, so
//! translucent strokes do not darken where their segments overlap.

use crate::encoded::{EncodedImage, ImageFormat};
use crate::error::SketchResult;
use crate::stroke::{Stroke, StrokeRef};
use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};
use std::io::Cursor;

/// Everything needed to rasterize the canvas, detached from the live surface
#[derive(Debug, Clone)]
pub struct CanvasSnapshot {
    pub size: [u32; 2],
    pub background: Color32,
    pub strokes: Vec<StrokeRef>,
}

impl CanvasSnapshot {
    /// Width and height, never below one pixel
    pub fn pixel_size(&self) -> [u32; 2] {
        [self.size[0].max(1), self.size[1].max(1)]
    }
}

pub fn rasterize(snapshot: &CanvasSnapshot) -> RgbaImage {
    let [width, height] = snapshot.pixel_size();
    let background = Rgba(snapshot.background.to_srgba_unmultiplied());
    let mut canvas = RgbaImage::from_pixel(width, height, background);

    let mut mask = vec![false; (width * height) as usize];
    for stroke in &snapshot.strokes {
        mask.fill(false);
        cover_stroke(&mut mask, width, height, stroke);

        let color = Rgba(stroke.paint_color(snapshot.background).to_srgba_unmultiplied());
        for (index, covered) in mask.iter().enumerate() {
            if !covered {
                continue;
            }
            let (x, y) = (index as u32 % width, index as u32 / width);
            let pixel = canvas.get_pixel_mut(x, y);
            *pixel = if stroke.is_eraser() {
                background
            } else {
                blend_over(color, *pixel)
            };
        }
    }
    canvas
}

/// Rasterizes and encodes the snapshot
pub fn encode(snapshot: &CanvasSnapshot, format: ImageFormat) -> SketchResult<EncodedImage> {
    let raster = rasterize(snapshot);
    let size = [raster.width(), raster.height()];
    let mut bytes = Cursor::new(Vec::new());
    match format {
        ImageFormat::Png => raster.write_to(&mut bytes, format.into())?,
        // JPEG has no alpha channel
        ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(raster)
            .to_rgb8()
            .write_to(&mut bytes, format.into())?,
    }
    let bytes = bytes.into_inner();
    log::debug!("Encoded {}x{} canvas as {:?} ({} bytes)", size[0], size[1], format, bytes.len());
    Ok(EncodedImage::new(format, size, bytes))
}

fn cover_stroke(mask: &mut [bool], width: u32, height: u32, stroke: &Stroke) {
    let radius = (stroke.width() / 2.0).max(0.5);
    let points = stroke.points();
    match points {
        [] => {}
        [point] => cover_segment(mask, width, height, *point, *point, radius),
        _ => {
            for pair in points.windows(2) {
                cover_segment(mask, width, height, pair[0], pair[1], radius);
            }
        }
    }
}

fn cover_segment(mask: &mut [bool], width: u32, height: u32, a: Pos2, b: Pos2, radius: f32) {
    let min_x = (a.x.min(b.x) - radius).floor().max(0.0) as u32;
    let min_y = (a.y.min(b.y) - radius).floor().max(0.0) as u32;
    let max_x = ((a.x.max(b.x) + radius).ceil().max(0.0) as u32).min(width);
    let max_y = ((a.y.max(b.y) + radius).ceil().max(0.0) as u32).min(height);

    for y in min_y..max_y {
        for x in min_x..max_x {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_segment(center, a, b) <= radius {
                mask[(y * width + x) as usize] = true;
            }
        }
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Source-over compositing on unmultiplied colors
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| {
        let value = (f32::from(src[i]) * sa + f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::StrokeKind;

    fn snapshot(strokes: Vec<StrokeRef>) -> CanvasSnapshot {
        CanvasSnapshot {
            size: [20, 20],
            background: Color32::WHITE,
            strokes,
        }
    }

    fn horizontal(color: Color32, kind: StrokeKind) -> StrokeRef {
        Stroke::new_ref(color, 4.0, kind, vec![Pos2::new(2.0, 10.0), Pos2::new(18.0, 10.0)])
    }

    #[test]
    fn test_empty_canvas_is_background() {
        let image = rasterize(&snapshot(Vec::new()));
        assert_eq!(image.dimensions(), (20, 20));
        assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_stroke_covers_its_path_only() {
        let image = rasterize(&snapshot(vec![horizontal(Color32::RED, StrokeKind::Paint)]));
        assert_eq!(*image.get_pixel(10, 10), Rgba([255, 0, 0, 255]));
        assert_eq!(*image.get_pixel(10, 2), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_eraser_restores_background() {
        let image = rasterize(&snapshot(vec![
            horizontal(Color32::RED, StrokeKind::Paint),
            horizontal(Color32::BLUE, StrokeKind::Erase),
        ]));
        assert_eq!(*image.get_pixel(10, 10), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_erased_area_follows_later_fill() {
        let mut filled = snapshot(vec![
            horizontal(Color32::RED, StrokeKind::Paint),
            horizontal(Color32::WHITE, StrokeKind::Erase),
        ]);
        filled.background = Color32::from_rgb(0, 0, 200);

        let image = rasterize(&filled);
        assert_eq!(*image.get_pixel(10, 10), Rgba([0, 0, 200, 255]));
        assert_eq!(*image.get_pixel(10, 2), Rgba([0, 0, 200, 255]));
    }

    #[test]
    fn test_single_point_stroke_is_a_dot() {
        let dot = Stroke::new_ref(Color32::BLACK, 6.0, StrokeKind::Paint, vec![Pos2::new(5.0, 5.0)]);
        let image = rasterize(&snapshot(vec![dot]));
        assert_eq!(*image.get_pixel(5, 5), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(15, 15), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_translucent_blend() {
        let blended = blend_over(Rgba([0, 0, 0, 128]), Rgba([255, 255, 255, 255]));
        assert_eq!(blended[3], 255);
        assert!((120..=135).contains(&blended[0]));
    }

    #[test]
    fn test_encode_png_signature() {
        let encoded = encode(&snapshot(Vec::new()), ImageFormat::Png).unwrap();
        assert_eq!(&encoded.bytes()[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(encoded.size(), [20, 20]);
    }

    #[test]
    fn test_encode_jpeg() {
        let encoded = encode(&snapshot(Vec::new()), ImageFormat::Jpeg).unwrap();
        assert_eq!(&encoded.bytes()[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_zero_size_canvas_still_encodes() {
        let mut empty = snapshot(Vec::new());
        empty.size = [0, 0];
        let encoded = encode(&empty, ImageFormat::Png).unwrap();
        assert_eq!(encoded.size(), [1, 1]);
    }
}
