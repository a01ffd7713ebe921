//! Precision change routines.
//!
//! Integer widths widen by left shift into the larger representation
//! and narrow by right shift — truncation, never rounding, so the
//! packed-field contract (top bits kept, low bits zeroed) holds across
//! every depth change. Half-float conversions go through IEEE754 half
//! encode/decode; float width changes are plain casts.

use crate::pix::{
    get_f32, get_f64, get_u16, get_word16, get_word32, put_f32, put_f64, put_u16, put_word16,
    put_word32, quantize_u8, quantize_u16,
};
use half::f16;

/// Widens `K` byte channels per pixel to shorts (`v << 8`).
pub(crate) fn widen_u8_u16<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.iter().zip(dst.chunks_exact_mut(2)).take(n * K) {
        d.copy_from_slice(&(((*s as u16) << 8).to_ne_bytes()));
    }
}

/// Narrows `K` short channels per pixel to bytes (`v >> 8`).
pub(crate) fn narrow_u16_u8<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(2).zip(dst.iter_mut()).take(n * K) {
        *d = (get_u16(s, 0) >> 8) as u8;
    }
}

/// Decodes `K` half-float channels per pixel to single precision.
pub(crate) fn half_to_single<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src
        .chunks_exact(2)
        .zip(dst.chunks_exact_mut(4))
        .take(n * K)
    {
        put_f32(d, 0, f16::from_bits(get_u16(s, 0)).to_f32());
    }
}

/// Encodes `K` single-precision channels per pixel to half floats.
pub(crate) fn single_to_half<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src
        .chunks_exact(4)
        .zip(dst.chunks_exact_mut(2))
        .take(n * K)
    {
        put_u16(d, 0, f16::from_f32(get_f32(s, 0)).to_bits());
    }
}

/// Widens `K` single-precision channels per pixel to doubles.
pub(crate) fn single_to_double<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src
        .chunks_exact(4)
        .zip(dst.chunks_exact_mut(8))
        .take(n * K)
    {
        put_f64(d, 0, get_f32(s, 0) as f64);
    }
}

/// Narrows `K` double channels per pixel to single precision.
pub(crate) fn double_to_single<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src
        .chunks_exact(8)
        .zip(dst.chunks_exact_mut(4))
        .take(n * K)
    {
        put_f32(d, 0, get_f64(s, 0) as f32);
    }
}

/// Normalizes `K` byte channels per pixel to floats in 0..1.
pub(crate) fn normalize_u8_f32<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.iter().zip(dst.chunks_exact_mut(4)).take(n * K) {
        put_f32(d, 0, *s as f32 / 255.0);
    }
}

/// Quantizes `K` float channels per pixel to bytes, saturating.
pub(crate) fn quantize_f32_u8<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(4).zip(dst.iter_mut()).take(n * K) {
        *d = quantize_u8(get_f32(s, 0));
    }
}

/// Normalizes `K` short channels per pixel to floats in 0..1.
pub(crate) fn normalize_u16_f32<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src
        .chunks_exact(2)
        .zip(dst.chunks_exact_mut(4))
        .take(n * K)
    {
        put_f32(d, 0, get_u16(s, 0) as f32 / 65535.0);
    }
}

/// Quantizes `K` float channels per pixel to shorts, saturating.
pub(crate) fn quantize_f32_u16<const K: usize>(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src
        .chunks_exact(4)
        .zip(dst.chunks_exact_mut(2))
        .take(n * K)
    {
        put_u16(d, 0, quantize_u16(get_f32(s, 0)));
    }
}

// Packed-word depth changes. Field positions are positional within the
// word, so each routine serves the RGB and BGR orderings alike.

/// Unpacks 3-3-2 words to three bytes per pixel.
pub(crate) fn unpack_332(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.iter().zip(dst.chunks_exact_mut(3)).take(n) {
        let w = *s;
        d[0] = (w >> 5) << 5;
        d[1] = ((w >> 2) & 0b111) << 5;
        d[2] = (w & 0b11) << 6;
    }
}

/// Packs three bytes per pixel into 3-3-2 words.
pub(crate) fn pack_332(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(3).zip(dst.iter_mut()).take(n) {
        *d = ((s[0] >> 5) << 5) | ((s[1] >> 5) << 2) | (s[2] >> 6);
    }
}

/// Unpacks 5-5-5 words to three bytes per pixel.
pub(crate) fn unpack_555(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(3)).take(n) {
        let w = get_word16(s);
        d[0] = (((w >> 10) & 0x1F) << 3) as u8;
        d[1] = (((w >> 5) & 0x1F) << 3) as u8;
        d[2] = ((w & 0x1F) << 3) as u8;
    }
}

/// Packs three bytes per pixel into 5-5-5 words, top bit clear.
pub(crate) fn pack_555(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(2)).take(n) {
        let w = (((s[0] >> 3) as u16) << 10) | (((s[1] >> 3) as u16) << 5) | ((s[2] >> 3) as u16);
        put_word16(d, w);
    }
}

/// Unpacks 5-6-5 words to three bytes per pixel.
pub(crate) fn unpack_565(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(3)).take(n) {
        let w = get_word16(s);
        d[0] = ((w >> 11) << 3) as u8;
        d[1] = (((w >> 5) & 0x3F) << 2) as u8;
        d[2] = ((w & 0x1F) << 3) as u8;
    }
}

/// Packs three bytes per pixel into 5-6-5 words.
pub(crate) fn pack_565(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(2)).take(n) {
        let w = (((s[0] >> 3) as u16) << 11) | (((s[1] >> 2) as u16) << 5) | ((s[2] >> 3) as u16);
        put_word16(d, w);
    }
}

/// Unpacks 10-10-10-2 words to four shorts per pixel.
pub(crate) fn unpack_1010102(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(8)).take(n) {
        let w = get_word32(s);
        put_u16(d, 0, (((w >> 22) & 0x3FF) << 6) as u16);
        put_u16(d, 1, (((w >> 12) & 0x3FF) << 6) as u16);
        put_u16(d, 2, (((w >> 2) & 0x3FF) << 6) as u16);
        put_u16(d, 3, ((w & 0b11) << 14) as u16);
    }
}

/// Packs four shorts per pixel into 10-10-10-2 words.
pub(crate) fn pack_1010102(src: &[u8], dst: &mut [u8], n: usize) {
    for (s, d) in src.chunks_exact(8).zip(dst.chunks_exact_mut(4)).take(n) {
        let w = (((get_u16(s, 0) >> 6) as u32) << 22)
            | (((get_u16(s, 1) >> 6) as u32) << 12)
            | (((get_u16(s, 2) >> 6) as u32) << 2)
            | ((get_u16(s, 3) >> 14) as u32);
        put_word32(d, w);
    }
}
