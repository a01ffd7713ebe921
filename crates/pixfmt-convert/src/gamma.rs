//! Color-space change routines.
//!
//! Per-pixel application of the scalar transforms in `pixfmt-transfer`:
//! sRGB encode/decode on the color channels (alpha passes through
//! untouched), subtractive CMY/CMYK to RGB, and the grayscale
//! broadcast. The formulas live in one place — these routines only
//! walk buffers and re-quantize.

use crate::pix::{get_f32, get_u16, put_f32, put_u16, quantize_u8};
use pixfmt_transfer::{cmy, srgb};

/// Decodes three sRGB byte channels per pixel to linear bytes.
pub(crate) fn srgb_decode_3u8(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.iter().zip(dst.iter_mut()).take(n * 3) {
        *d = srgb::decode_u8(*s);
    }
}

/// Encodes three linear byte channels per pixel to sRGB bytes.
pub(crate) fn srgb_encode_3u8(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.iter().zip(dst.iter_mut()).take(n * 3) {
        *d = srgb::encode_u8(*s);
    }
}

/// Decodes the color channels of an sRGB+alpha pixel, copying alpha.
pub(crate) fn srgb_decode_3of4_u8(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)).take(n) {
        d[0] = srgb::decode_u8(s[0]);
        d[1] = srgb::decode_u8(s[1]);
        d[2] = srgb::decode_u8(s[2]);
        d[3] = s[3];
    }
}

/// Encodes the color channels of a linear+alpha pixel, copying alpha.
pub(crate) fn srgb_encode_3of4_u8(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)).take(n) {
        d[0] = srgb::encode_u8(s[0]);
        d[1] = srgb::encode_u8(s[1]);
        d[2] = srgb::encode_u8(s[2]);
        d[3] = s[3];
    }
}

/// Decodes sRGB bytes straight to linear floats.
pub(crate) fn srgb_decode_u8_f32(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.iter().zip(dst.chunks_exact_mut(4)).take(n * 3) {
        put_f32(d, 0, srgb::decode(*s as f32 / 255.0));
    }
}

/// CMY bytes to RGB bytes, the exact byte-domain complement.
pub(crate) fn cmy_u8_to_rgb(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)).take(n) {
        let rgb = cmy::cmy_to_rgb_u8([s[0], s[1], s[2]]);
        d.copy_from_slice(&rgb);
    }
}

/// CMY shorts to RGB shorts, the exact 16-bit-domain complement.
pub(crate) fn cmy_u16_to_rgb(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(6).zip(dst.chunks_exact_mut(6)).take(n) {
        let rgb = cmy::cmy_to_rgb_u16([get_u16(s, 0), get_u16(s, 1), get_u16(s, 2)]);
        put_u16(d, 0, rgb[0]);
        put_u16(d, 1, rgb[1]);
        put_u16(d, 2, rgb[2]);
    }
}

/// CMY floats to RGB floats.
pub(crate) fn cmy_f32_to_rgb(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(12).zip(dst.chunks_exact_mut(12)).take(n) {
        let rgb = cmy::cmy_to_rgb([get_f32(s, 0), get_f32(s, 1), get_f32(s, 2)]);
        put_f32(d, 0, rgb[0]);
        put_f32(d, 1, rgb[1]);
        put_f32(d, 2, rgb[2]);
    }
}

/// CMYK bytes to RGB bytes.
pub(crate) fn cmyk_u8_to_rgb(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)).take(n) {
        let rgb = cmy::cmyk_to_rgb_u8([s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&rgb);
    }
}

/// CMYK shorts to RGB shorts.
pub(crate) fn cmyk_u16_to_rgb(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(8).zip(dst.chunks_exact_mut(6)).take(n) {
        let rgb = cmy::cmyk_to_rgb_u16([
            get_u16(s, 0),
            get_u16(s, 1),
            get_u16(s, 2),
            get_u16(s, 3),
        ]);
        put_u16(d, 0, rgb[0]);
        put_u16(d, 1, rgb[1]);
        put_u16(d, 2, rgb[2]);
    }
}

/// CMYK floats to RGB floats.
pub(crate) fn cmyk_f32_to_rgb(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(16).zip(dst.chunks_exact_mut(12)).take(n) {
        let rgb = cmy::cmyk_to_rgb([get_f32(s, 0), get_f32(s, 1), get_f32(s, 2), get_f32(s, 3)]);
        put_f32(d, 0, rgb[0]);
        put_f32(d, 1, rgb[1]);
        put_f32(d, 2, rgb[2]);
    }
}

/// CMYKA bytes to RGBA bytes: CMYK collapses, alpha copies through.
pub(crate) fn cmyka_u8_to_rgba(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(5).zip(dst.chunks_exact_mut(4)).take(n) {
        let rgb = cmy::cmyk_to_rgb_u8([s[0], s[1], s[2], s[3]]);
        d[..3].copy_from_slice(&rgb);
        d[3] = s[4];
    }
}

/// CMYKA shorts to RGBA shorts.
pub(crate) fn cmyka_u16_to_rgba(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(10).zip(dst.chunks_exact_mut(8)).take(n) {
        let rgb = cmy::cmyk_to_rgb_u16([
            get_u16(s, 0),
            get_u16(s, 1),
            get_u16(s, 2),
            get_u16(s, 3),
        ]);
        put_u16(d, 0, rgb[0]);
        put_u16(d, 1, rgb[1]);
        put_u16(d, 2, rgb[2]);
        put_u16(d, 3, get_u16(s, 4));
    }
}

/// CMYKA floats to RGBA floats.
pub(crate) fn cmyka_f32_to_rgba(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(20).zip(dst.chunks_exact_mut(16)).take(n) {
        let rgb = cmy::cmyk_to_rgb([get_f32(s, 0), get_f32(s, 1), get_f32(s, 2), get_f32(s, 3)]);
        put_f32(d, 0, rgb[0]);
        put_f32(d, 1, rgb[1]);
        put_f32(d, 2, rgb[2]);
        put_f32(d, 3, get_f32(s, 4));
    }
}

/// Broadcasts the single `S`-byte level channel into three channels.
///
/// The level is copied unchanged, so one routine serves RGB and BGR
/// destinations alike.
pub(crate) fn broadcast1_to_3<const S: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(S).zip(dst.chunks_exact_mut(3 * S)).take(n) {
        d[..S].copy_from_slice(s);
        d[S..2 * S].copy_from_slice(s);
        d[2 * S..3 * S].copy_from_slice(s);
    }
}

/// Broadcasts level+alpha pixels into color+alpha pixels.
pub(crate) fn broadcast2_to_4<const S: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src
        .chunks_exact(2 * S)
        .zip(dst.chunks_exact_mut(4 * S))
        .take(n)
    {
        d[..S].copy_from_slice(&s[..S]);
        d[S..2 * S].copy_from_slice(&s[..S]);
        d[2 * S..3 * S].copy_from_slice(&s[..S]);
        d[3 * S..4 * S].copy_from_slice(&s[S..2 * S]);
    }
}

/// Broadcasts a float level into three quantized byte channels.
pub(crate) fn broadcast_f32_to_3u8(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)).take(n) {
        let level = quantize_u8(get_f32(s, 0));
        d[0] = level;
        d[1] = level;
        d[2] = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_decode_darkens_midtones() {
        let src = [128u8, 128, 128];
        let mut dst = [0u8; 3];
        srgb_decode_3u8(&src, &mut dst, 1);
        // linear(0.502) ~ 0.215 -> byte 55
        assert_eq!(dst, [55, 55, 55]);
    }

    #[test]
    fn test_srgb_alpha_passthrough() {
        let src = [128u8, 0, 255, 77];
        let mut dst = [0u8; 4];
        srgb_decode_3of4_u8(&src, &mut dst, 1);
        assert_eq!(dst[3], 77);
        assert_eq!(dst[1], 0);
        assert_eq!(dst[2], 255);
    }

    #[test]
    fn test_cmy_complement() {
        let src = [0u8, 255, 10];
        let mut dst = [0u8; 3];
        cmy_u8_to_rgb(&src, &mut dst, 1);
        assert_eq!(dst, [255, 0, 245]);
    }

    #[test]
    fn test_cmyk_black_swallows() {
        let src = [0u8, 0, 0, 255];
        let mut dst = [0xEE_u8; 3];
        cmyk_u8_to_rgb(&src, &mut dst, 1);
        assert_eq!(dst, [0, 0, 0]);
    }

    #[test]
    fn test_gray_broadcast() {
        let src = [7u8, 9];
        let mut dst = [0u8; 6];
        broadcast1_to_3::<1>(&src, &mut dst, 2);
        assert_eq!(dst, [7, 7, 7, 9, 9, 9]);
    }

    #[test]
    fn test_gray_alpha_broadcast() {
        let src = [5u8, 200];
        let mut dst = [0u8; 4];
        broadcast2_to_4::<1>(&src, &mut dst, 1);
        assert_eq!(dst, [5, 5, 5, 200]);
    }
}
