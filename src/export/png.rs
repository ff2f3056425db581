//! PNG export: grayscale heightmap, coloured terrain map and band legend.

use super::ExportError;
use crate::noise_map::NoiseMap;
use crate::terrain::{TERRAIN_BANDS, classify, terrain_color, terrain_level, terrain_name};
use font8x8::UnicodeFonts;
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

/// Writes the height field as an 8-bit grayscale PNG, one pixel per cell.
pub fn export_heightmap_png(map: &NoiseMap, path: &Path) -> Result<(), ExportError> {
    if map.is_empty() {
        log::warn!("skipping {}: map has no cells", path.display());
        return Ok(());
    }

    let mut img = GrayImage::new(map.width, map.height);
    for y in 0..map.height {
        for x in 0..map.width {
            img.put_pixel(x, y, Luma([map.get(x, y)]));
        }
    }

    img.save(path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Writes the map as an RGB PNG with each cell coloured by its terrain band.
pub fn export_terrain_png(map: &NoiseMap, path: &Path) -> Result<(), ExportError> {
    if map.is_empty() {
        log::warn!("skipping {}: map has no cells", path.display());
        return Ok(());
    }

    let mut img = RgbImage::new(map.width, map.height);
    for y in 0..map.height {
        for x in 0..map.width {
            let color = terrain_color(classify(map.get(x, y)));
            img.put_pixel(x, y, Rgb(color));
        }
    }

    img.save(path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

// ── Legend PNG ────────────────────────────────────────────────────────────────

/// Scale factor for the bitmap font (each logical pixel becomes `FONT_SCALE`
/// screen pixels).
const FONT_SCALE: u32 = 2;
/// Width of one character in screen pixels.
const CHAR_W: u32 = 8 * FONT_SCALE;
/// Height of one character in screen pixels.
const CHAR_H: u32 = 8 * FONT_SCALE;

/// Draw a single character at (x, y) using the 8×8 bitmap font.
fn draw_char(img: &mut RgbImage, c: char, x: u32, y: u32, color: [u8; 3]) {
    let Some(glyph) = font8x8::BASIC_FONTS.get(c) else {
        return;
    };
    for (row, &byte) in glyph.iter().enumerate() {
        for col in 0u32..8 {
            if byte & (1 << col) != 0 {
                for dy in 0..FONT_SCALE {
                    for dx in 0..FONT_SCALE {
                        let px = x + col * FONT_SCALE + dx;
                        let py = y + row as u32 * FONT_SCALE + dy;
                        if px < img.width() && py < img.height() {
                            img.put_pixel(px, py, Rgb(color));
                        }
                    }
                }
            }
        }
    }
}

/// Draw a string starting at (x, y).
fn draw_str(img: &mut RgbImage, s: &str, x: u32, y: u32, color: [u8; 3]) {
    for (i, c) in s.chars().enumerate() {
        draw_char(img, c, x + i as u32 * CHAR_W, y, color);
    }
}

/// Fill a rectangular area with `color`.
fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: [u8; 3]) {
    for dy in 0..h {
        for dx in 0..w {
            let px = x + dx;
            let py = y + dy;
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, Rgb(color));
            }
        }
    }
}

/// Generate a legend PNG listing every terrain band present on the map,
/// each with its colour swatch and upper height level.
pub fn export_legend_png(map: &NoiseMap, seed: u32, path: &Path) -> Result<(), ExportError> {
    // Bands that actually appear on this map, in ascending height order.
    let bands: Vec<_> = TERRAIN_BANDS
        .into_iter()
        .filter(|&t| map.values.iter().any(|&v| classify(v) == t))
        .collect();

    let labels: Vec<String> = bands
        .iter()
        .map(|&t| format!("{} <= {}", terrain_name(t), terrain_level(t)))
        .collect();

    let meta = [
        format!("Seed: {seed}"),
        format!("Size: {}x{}", map.width, map.height),
    ];

    // ── Layout ────────────────────────────────────────────────────────────────
    const PAD: u32 = 14;
    const SWATCH_W: u32 = 48;
    const SWATCH_GAP: u32 = 8;
    const ROW_H: u32 = CHAR_H + 6;
    const META_ROW_H: u32 = CHAR_H + 5;

    let title = "TERRAIN LEGEND";
    let max_label_len = labels.iter().map(String::len).max().unwrap_or(0) as u32;
    let band_col_w = SWATCH_W + SWATCH_GAP + max_label_len * CHAR_W;
    let meta_col_w = meta.iter().map(String::len).max().unwrap_or(0) as u32 * CHAR_W;

    let content_w = band_col_w.max(meta_col_w).max(title.len() as u32 * CHAR_W);
    let img_w = PAD + content_w + PAD;
    let img_h = PAD
        + CHAR_H
        + META_ROW_H
        + meta.len() as u32 * META_ROW_H
        + bands.len() as u32 * ROW_H
        + PAD;

    const BG: [u8; 3] = [22, 22, 35];
    const TITLE_COLOR: [u8; 3] = [240, 240, 240];
    const META_COLOR: [u8; 3] = [140, 155, 190];
    const TEXT_COLOR: [u8; 3] = [210, 210, 210];

    let mut img = RgbImage::from_pixel(img_w, img_h, Rgb(BG));

    let title_x = (img_w.saturating_sub(title.len() as u32 * CHAR_W)) / 2;
    draw_str(&mut img, title, title_x, PAD, TITLE_COLOR);
    let mut y = PAD + CHAR_H + META_ROW_H;

    for line in &meta {
        draw_str(&mut img, line, PAD, y, META_COLOR);
        y += META_ROW_H;
    }

    for (&band, label) in bands.iter().zip(&labels) {
        fill_rect(&mut img, PAD, y, SWATCH_W, CHAR_H, terrain_color(band));
        draw_str(&mut img, label, PAD + SWATCH_W + SWATCH_GAP, y, TEXT_COLOR);
        y += ROW_H;
    }

    img.save(path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
