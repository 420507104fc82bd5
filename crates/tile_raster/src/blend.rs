//! Source-over-Compositing mit Layer-Deckkraft.

use image::{Rgba, RgbaImage};

/// Legt `src` mit zusätzlicher Deckkraft `opacity` über `dst`.
///
/// Beide Bilder müssen dieselbe Größe haben; überstehende Pixel von `src`
/// werden ignoriert. Vollständig transparente Quellpixel lassen `dst`
/// unverändert.
pub fn blend_over(dst: &mut RgbaImage, src: &RgbaImage, opacity: f32) {
    blend_over_at(dst, src, 0, 0, opacity);
}

/// Wie [`blend_over`], aber mit `src` an Pixel-Offset `(left, top)` in `dst`.
///
/// Teile von `src` außerhalb von `dst` werden abgeschnitten.
pub fn blend_over_at(dst: &mut RgbaImage, src: &RgbaImage, left: i64, top: i64, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity == 0.0 {
        return;
    }

    let dst_w = i64::from(dst.width());
    let dst_h = i64::from(dst.height());

    for sy in 0..src.height() {
        let dy = top + i64::from(sy);
        if dy < 0 || dy >= dst_h {
            continue;
        }
        for sx in 0..src.width() {
            let dx = left + i64::from(sx);
            if dx < 0 || dx >= dst_w {
                continue;
            }
            let s = src.get_pixel(sx, sy);
            if s[3] == 0 {
                continue;
            }
            let src_alpha = (s[3] as f32 / 255.0) * opacity;
            let (dx, dy) = (dx as u32, dy as u32);
            let d = dst.get_pixel(dx, dy);
            let blended = blend_pixel(s, d, src_alpha);
            dst.put_pixel(dx, dy, blended);
        }
    }
}

/// Verschmilzt einen Bildstapel (unten → oben) zu einem quadratischen Bild.
///
/// Jeder Eintrag ist `(Bild, Deckkraft)`. Bilder mit abweichender Größe
/// werden an der linken oberen Ecke ausgerichtet.
pub fn flatten_stack<'a, I>(size: u32, layers: I) -> RgbaImage
where
    I: IntoIterator<Item = (&'a RgbaImage, f32)>,
{
    let mut canvas = RgbaImage::new(size, size);
    for (image, opacity) in layers {
        blend_over(&mut canvas, image, opacity);
    }
    canvas
}

fn blend_pixel(src: &Rgba<u8>, dst: &Rgba<u8>, src_alpha: f32) -> Rgba<u8> {
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
