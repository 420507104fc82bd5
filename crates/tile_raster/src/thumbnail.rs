//! Thumbnail-Skalierung für Layer- und Composite-Vorschauen.

use image::imageops::FilterType;
use image::RgbaImage;

/// Skaliert ein Bild so, dass die längere Kante `max_edge` Pixel misst.
///
/// Nearest-Neighbor hält Kachelkanten scharf. Bilder, die bereits klein
/// genug sind, werden unverändert zurückgegeben.
pub fn fit_thumbnail(image: &RgbaImage, max_edge: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    let longest = w.max(h);
    if longest == 0 || max_edge == 0 || longest <= max_edge {
        return image.clone();
    }

    let scale = max_edge as f32 / longest as f32;
    let new_w = ((w as f32 * scale).round() as u32).max(1);
    let new_h = ((h as f32 * scale).round() as u32).max(1);
    log::debug!("Thumbnail {}x{} -> {}x{}", w, h, new_w, new_h);
    image::imageops::resize(image, new_w, new_h, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn keeps_aspect_ratio() {
        let img = RgbaImage::from_pixel(200, 100, Rgba([1, 2, 3, 255]));
        let thumb = fit_thumbnail(&img, 64);
        assert_eq!(thumb.dimensions(), (64, 32));
    }

    #[test]
    fn small_images_stay_untouched() {
        let img = RgbaImage::from_pixel(16, 8, Rgba([1, 2, 3, 255]));
        let thumb = fit_thumbnail(&img, 64);
        assert_eq!(thumb.dimensions(), (16, 8));
    }
}
