//! Conversion dispatch and the buffer walk.
//!
//! Routines are registered in an explicit table keyed by the
//! `(source, destination)` layout pair, built once on first use. A pair
//! missing from the table is the
//! [`ConversionNotImplemented`](Error::ConversionNotImplemented)
//! outcome — there is no fallback and no guessing; callers consult the
//! capability oracle and pick another pair.
//!
//! Buffers are flat row-major memory with no padding, covering the
//! whole `width * height` extent. Source and destination must not
//! alias; the `&`/`&mut` borrows enforce that at the API boundary.
//! Both extents are validated before any routine runs, so a failed
//! call never leaves a half-written destination. Scanlines are
//! independent and are processed in parallel.

use crate::{alpha, gamma, precision, reorder};
use pixfmt_core::{Error, PixelLayout, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A registered conversion routine: `n` pixels from a source row into
/// a destination row.
type Routine = fn(&[u8], &mut [u8], usize);

/// Whether a routine exists for the pair.
///
/// Equal layouts always convert (the 1:1 copy).
#[inline]
pub fn is_conversion_supported(src: PixelLayout, dst: PixelLayout) -> bool {
    src == dst || ROUTINES.contains_key(&(src, dst))
}

/// Converts a `width * height` pixel buffer between two layouts.
///
/// Fails with [`Error::ConversionNotImplemented`] when no routine is
/// registered for the pair and with [`Error::BufferTooSmall`] when
/// either buffer does not cover the extent. On failure the destination
/// content is unspecified but the call never half-writes it.
///
/// # Example
///
/// ```
/// use pixfmt_convert::convert;
/// use pixfmt_core::PixelLayout;
///
/// let rgb = [10u8, 20, 30, 40, 50, 60];
/// let mut bgr = [0u8; 6];
/// convert(&rgb, PixelLayout::Rgb24, &mut bgr, PixelLayout::Bgr24, 2, 1)?;
/// assert_eq!(bgr, [30, 20, 10, 60, 50, 40]);
/// # Ok::<(), pixfmt_core::Error>(())
/// ```
pub fn convert(
    src: &[u8],
    src_layout: PixelLayout,
    dst: &mut [u8],
    dst_layout: PixelLayout,
    width: u32,
    height: u32,
) -> Result<()> {
    if src_layout == dst_layout {
        let len = src_layout.buffer_len(width, height);
        check_extent("source", src.len(), len)?;
        check_extent("destination", dst.len(), len)?;
        dst[..len].copy_from_slice(&src[..len]);
        return Ok(());
    }

    let routine = *ROUTINES
        .get(&(src_layout, dst_layout))
        .ok_or(Error::not_implemented(src_layout, dst_layout))?;

    // Every registered pair is interleaved; the planar tags never are.
    let (Some(src_bpp), Some(dst_bpp)) =
        (src_layout.bytes_per_pixel(), dst_layout.bytes_per_pixel())
    else {
        return Err(Error::not_implemented(src_layout, dst_layout));
    };

    let w = width as usize;
    let h = height as usize;
    check_extent("source", src.len(), w * h * src_bpp)?;
    check_extent("destination", dst.len(), w * h * dst_bpp)?;
    if w == 0 || h == 0 {
        return Ok(());
    }

    let src_row = w * src_bpp;
    let dst_row = w * dst_bpp;
    dst[..h * dst_row]
        .par_chunks_exact_mut(dst_row)
        .zip(src[..h * src_row].par_chunks_exact(src_row))
        .for_each(|(d, s)| routine(s, d, w));
    Ok(())
}

fn check_extent(side: &'static str, got: usize, expected: usize) -> Result<()> {
    if got < expected {
        return Err(Error::buffer_too_small(side, expected, got));
    }
    Ok(())
}

static ROUTINES: LazyLock<HashMap<(PixelLayout, PixelLayout), Routine>> = LazyLock::new(build);

fn build() -> HashMap<(PixelLayout, PixelLayout), Routine> {
    use PixelLayout as L;

    let mut table: HashMap<(L, L), Routine> = HashMap::new();
    {
        let mut reg = |src: L, dst: L, routine: Routine| {
            table.insert((src, dst), routine);
        };

        // Same-family reorders: byte moves only, no value transform.
        reg(L::Rgb24, L::Bgr24, reorder::reverse3::<1>);
        reg(L::Bgr24, L::Rgb24, reorder::reverse3::<1>);
        reg(L::Rgb48, L::Bgr48, reorder::reverse3::<2>);
        reg(L::Bgr48, L::Rgb48, reorder::reverse3::<2>);
        reg(L::RgbF, L::BgrF, reorder::reverse3::<4>);
        reg(L::BgrF, L::RgbF, reorder::reverse3::<4>);
        reg(L::RgbHF, L::BgrHF, reorder::reverse3::<2>);
        reg(L::BgrHF, L::RgbHF, reorder::reverse3::<2>);
        reg(L::Srgb24, L::Sbgr24, reorder::reverse3::<1>);
        reg(L::Sbgr24, L::Srgb24, reorder::reverse3::<1>);
        reg(L::Rgba32, L::Bgra32, reorder::swap02_of4::<1>);
        reg(L::Bgra32, L::Rgba32, reorder::swap02_of4::<1>);
        reg(L::Rgba64, L::Bgra64, reorder::swap02_of4::<2>);
        reg(L::Bgra64, L::Rgba64, reorder::swap02_of4::<2>);
        reg(L::RgbaF, L::BgraF, reorder::swap02_of4::<4>);
        reg(L::BgraF, L::RgbaF, reorder::swap02_of4::<4>);
        reg(L::RgbaHF, L::BgraHF, reorder::swap02_of4::<2>);
        reg(L::BgraHF, L::RgbaHF, reorder::swap02_of4::<2>);
        reg(L::Srgba32, L::Sbgra32, reorder::swap02_of4::<1>);
        reg(L::Sbgra32, L::Srgba32, reorder::swap02_of4::<1>);
        reg(L::Rgb15, L::Bgr15, reorder::swap_fields_u16::<10, 0, 5>);
        reg(L::Bgr15, L::Rgb15, reorder::swap_fields_u16::<10, 0, 5>);
        reg(L::Rgb16, L::Bgr16, reorder::swap_fields_u16::<11, 0, 5>);
        reg(L::Bgr16, L::Rgb16, reorder::swap_fields_u16::<11, 0, 5>);
        reg(L::Rgb30A2, L::Bgr30A2, reorder::swap_fields_u32::<22, 2, 10>);
        reg(L::Bgr30A2, L::Rgb30A2, reorder::swap_fields_u32::<22, 2, 10>);

        // Precision changes: shifts for integers, IEEE754 for halves.
        reg(L::Rgb8, L::Rgb24, precision::unpack_332);
        reg(L::Rgb24, L::Rgb8, precision::pack_332);
        reg(L::Rgb15, L::Rgb24, precision::unpack_555);
        reg(L::Rgb24, L::Rgb15, precision::pack_555);
        reg(L::Bgr15, L::Bgr24, precision::unpack_555);
        reg(L::Bgr24, L::Bgr15, precision::pack_555);
        reg(L::Rgb16, L::Rgb24, precision::unpack_565);
        reg(L::Rgb24, L::Rgb16, precision::pack_565);
        reg(L::Bgr16, L::Bgr24, precision::unpack_565);
        reg(L::Bgr24, L::Bgr16, precision::pack_565);
        reg(L::Rgb24, L::Rgb48, precision::widen_u8_u16::<3>);
        reg(L::Rgb48, L::Rgb24, precision::narrow_u16_u8::<3>);
        reg(L::Bgr24, L::Bgr48, precision::widen_u8_u16::<3>);
        reg(L::Bgr48, L::Bgr24, precision::narrow_u16_u8::<3>);
        reg(L::Rgba32, L::Rgba64, precision::widen_u8_u16::<4>);
        reg(L::Rgba64, L::Rgba32, precision::narrow_u16_u8::<4>);
        reg(L::Bgra32, L::Bgra64, precision::widen_u8_u16::<4>);
        reg(L::Bgra64, L::Bgra32, precision::narrow_u16_u8::<4>);
        reg(L::Gray8, L::Gray16, precision::widen_u8_u16::<1>);
        reg(L::Gray16, L::Gray8, precision::narrow_u16_u8::<1>);
        reg(L::GrayAlpha16, L::GrayAlpha32, precision::widen_u8_u16::<2>);
        reg(L::GrayAlpha32, L::GrayAlpha16, precision::narrow_u16_u8::<2>);
        reg(L::RgbHF, L::RgbF, precision::half_to_single::<3>);
        reg(L::RgbF, L::RgbHF, precision::single_to_half::<3>);
        reg(L::BgrHF, L::BgrF, precision::half_to_single::<3>);
        reg(L::BgrF, L::BgrHF, precision::single_to_half::<3>);
        reg(L::RgbaHF, L::RgbaF, precision::half_to_single::<4>);
        reg(L::RgbaF, L::RgbaHF, precision::single_to_half::<4>);
        reg(L::BgraHF, L::BgraF, precision::half_to_single::<4>);
        reg(L::BgraF, L::BgraHF, precision::single_to_half::<4>);
        reg(L::GrayHF, L::GrayF, precision::half_to_single::<1>);
        reg(L::GrayF, L::GrayHF, precision::single_to_half::<1>);
        reg(L::RgbF, L::RgbD, precision::single_to_double::<3>);
        reg(L::RgbD, L::RgbF, precision::double_to_single::<3>);
        reg(L::RgbaF, L::RgbaD, precision::single_to_double::<4>);
        reg(L::RgbaD, L::RgbaF, precision::double_to_single::<4>);
        reg(L::Rgb24, L::RgbF, precision::normalize_u8_f32::<3>);
        reg(L::RgbF, L::Rgb24, precision::quantize_f32_u8::<3>);
        reg(L::Rgba32, L::RgbaF, precision::normalize_u8_f32::<4>);
        reg(L::RgbaF, L::Rgba32, precision::quantize_f32_u8::<4>);
        reg(L::Rgb48, L::RgbF, precision::normalize_u16_f32::<3>);
        reg(L::RgbF, L::Rgb48, precision::quantize_f32_u16::<3>);
        reg(L::Rgba64, L::RgbaF, precision::normalize_u16_f32::<4>);
        reg(L::RgbaF, L::Rgba64, precision::quantize_f32_u16::<4>);
        reg(L::Gray8, L::GrayF, precision::normalize_u8_f32::<1>);
        reg(L::GrayF, L::Gray8, precision::quantize_f32_u8::<1>);
        reg(L::Gray16, L::GrayF, precision::normalize_u16_f32::<1>);
        reg(L::GrayF, L::Gray16, precision::quantize_f32_u16::<1>);
        reg(L::Rgb30A2, L::Rgba64, precision::unpack_1010102);
        reg(L::Rgba64, L::Rgb30A2, precision::pack_1010102);
        reg(L::Bgr30A2, L::Bgra64, precision::unpack_1010102);
        reg(L::Bgra64, L::Bgr30A2, precision::pack_1010102);

        // Color-space changes.
        reg(L::Srgb24, L::Rgb24, gamma::srgb_decode_3u8);
        reg(L::Rgb24, L::Srgb24, gamma::srgb_encode_3u8);
        reg(L::Sbgr24, L::Bgr24, gamma::srgb_decode_3u8);
        reg(L::Bgr24, L::Sbgr24, gamma::srgb_encode_3u8);
        reg(L::Srgba32, L::Rgba32, gamma::srgb_decode_3of4_u8);
        reg(L::Rgba32, L::Srgba32, gamma::srgb_encode_3of4_u8);
        reg(L::Sbgra32, L::Bgra32, gamma::srgb_decode_3of4_u8);
        reg(L::Bgra32, L::Sbgra32, gamma::srgb_encode_3of4_u8);
        reg(L::Srgb24, L::RgbF, gamma::srgb_decode_u8_f32);
        reg(L::Cmy24, L::Rgb24, gamma::cmy_u8_to_rgb);
        reg(L::Cmy48, L::Rgb48, gamma::cmy_u16_to_rgb);
        reg(L::CmyF, L::RgbF, gamma::cmy_f32_to_rgb);
        reg(L::Cmyk32, L::Rgb24, gamma::cmyk_u8_to_rgb);
        reg(L::Cmyk64, L::Rgb48, gamma::cmyk_u16_to_rgb);
        reg(L::CmykF, L::RgbF, gamma::cmyk_f32_to_rgb);
        reg(L::Cmyka40, L::Rgba32, gamma::cmyka_u8_to_rgba);
        reg(L::Cmyka80, L::Rgba64, gamma::cmyka_u16_to_rgba);
        reg(L::CmykaF, L::RgbaF, gamma::cmyka_f32_to_rgba);
        reg(L::Gray8, L::Rgb24, gamma::broadcast1_to_3::<1>);
        reg(L::Gray8, L::Bgr24, gamma::broadcast1_to_3::<1>);
        reg(L::Gray16, L::Rgb48, gamma::broadcast1_to_3::<2>);
        reg(L::GrayF, L::RgbF, gamma::broadcast1_to_3::<4>);
        reg(L::GrayF, L::Rgb24, gamma::broadcast_f32_to_3u8);
        reg(L::GrayHF, L::RgbHF, gamma::broadcast1_to_3::<2>);
        reg(L::GrayAlpha16, L::Rgba32, gamma::broadcast2_to_4::<1>);
        reg(L::GrayAlpha32, L::Rgba64, gamma::broadcast2_to_4::<2>);
        reg(L::GrayAlphaF, L::RgbaF, gamma::broadcast2_to_4::<4>);

        // Alpha dropping and adding.
        reg(L::Rgba32, L::Rgb24, alpha::drop_last::<1, 4>);
        reg(L::Rgba64, L::Rgb48, alpha::drop_last::<2, 4>);
        reg(L::RgbaF, L::RgbF, alpha::drop_last::<4, 4>);
        reg(L::RgbaD, L::RgbD, alpha::drop_last::<8, 4>);
        reg(L::RgbaHF, L::RgbHF, alpha::drop_last::<2, 4>);
        reg(L::Bgra32, L::Bgr24, alpha::drop_last::<1, 4>);
        reg(L::Bgra64, L::Bgr48, alpha::drop_last::<2, 4>);
        reg(L::BgraF, L::BgrF, alpha::drop_last::<4, 4>);
        reg(L::BgraHF, L::BgrHF, alpha::drop_last::<2, 4>);
        reg(L::Srgba32, L::Srgb24, alpha::drop_last::<1, 4>);
        reg(L::Sbgra32, L::Sbgr24, alpha::drop_last::<1, 4>);
        reg(L::Cmyka40, L::Cmyk32, alpha::drop_last::<1, 5>);
        reg(L::Cmyka80, L::Cmyk64, alpha::drop_last::<2, 5>);
        reg(L::CmykaF, L::CmykF, alpha::drop_last::<4, 5>);
        reg(L::Rgb24, L::Rgba32, alpha::add_alpha_u8);
        reg(L::Bgr24, L::Bgra32, alpha::add_alpha_u8);
        reg(L::Rgb48, L::Rgba64, alpha::add_alpha_u16);
        reg(L::Bgr48, L::Bgra64, alpha::add_alpha_u16);
        reg(L::RgbF, L::RgbaF, alpha::add_alpha_f32);
        reg(L::BgrF, L::BgraF, alpha::add_alpha_f32);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_roundtrip_is_identity() {
        let rgb: Vec<u8> = (0..24).collect();
        let mut bgr = vec![0u8; 24];
        let mut back = vec![0u8; 24];
        convert(&rgb, PixelLayout::Rgb24, &mut bgr, PixelLayout::Bgr24, 4, 2).unwrap();
        convert(&bgr, PixelLayout::Bgr24, &mut back, PixelLayout::Rgb24, 4, 2).unwrap();
        assert_eq!(back, rgb);
    }

    #[test]
    fn test_unsupported_pair() {
        let src = vec![0u8; 16];
        let mut dst = vec![0u8; 16];
        let err = convert(
            &src,
            PixelLayout::DepthF,
            &mut dst,
            PixelLayout::Cmyk32,
            2,
            2,
        )
        .unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_identity_copy() {
        let src = [9u8, 8, 7, 6];
        let mut dst = [0u8; 4];
        convert(&src, PixelLayout::Rgba32, &mut dst, PixelLayout::Rgba32, 1, 1).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_buffer_extent_validated_before_writing() {
        let src = vec![0u8; 5]; // one byte short of 2x1 rgb24
        let mut dst = vec![0u8; 6];
        let err = convert(&src, PixelLayout::Rgb24, &mut dst, PixelLayout::Bgr24, 2, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferTooSmall {
                side: "source",
                expected: 6,
                got: 5
            }
        ));
    }

    #[test]
    fn test_empty_extent_is_a_noop() {
        let src: Vec<u8> = Vec::new();
        let mut dst: Vec<u8> = Vec::new();
        convert(&src, PixelLayout::Rgb24, &mut dst, PixelLayout::Bgr24, 0, 7).unwrap();
    }

    #[test]
    fn test_gray_broadcast_via_engine() {
        let src = [100u8, 200];
        let mut dst = [0u8; 6];
        convert(&src, PixelLayout::Gray8, &mut dst, PixelLayout::Rgb24, 2, 1).unwrap();
        assert_eq!(dst, [100, 100, 100, 200, 200, 200]);
    }

    #[test]
    fn test_srgb_decode_via_engine() {
        let src = [188u8, 0, 255];
        let mut dst = [0u8; 3];
        convert(&src, PixelLayout::Srgb24, &mut dst, PixelLayout::Rgb24, 1, 1).unwrap();
        assert!(dst[0] < 188); // midtones darken when linearized
        assert_eq!(dst[1], 0);
        assert_eq!(dst[2], 255);
    }

    #[test]
    fn test_alpha_drop_via_engine() {
        let src = [1u8, 2, 3, 99, 4, 5, 6, 98];
        let mut dst = [0u8; 6];
        convert(&src, PixelLayout::Rgba32, &mut dst, PixelLayout::Rgb24, 2, 1).unwrap();
        assert_eq!(dst, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_support_query_matches_table() {
        assert!(is_conversion_supported(
            PixelLayout::Cmyk32,
            PixelLayout::Rgb24
        ));
        assert!(is_conversion_supported(
            PixelLayout::Depth16,
            PixelLayout::Depth16
        ));
        assert!(!is_conversion_supported(
            PixelLayout::Depth16,
            PixelLayout::Rgb24
        ));
        assert!(!is_conversion_supported(
            PixelLayout::Rgb24,
            PixelLayout::Cmyk32
        ));
    }

    #[test]
    fn test_packed_565_chain() {
        // 5-6-5 -> 24-bit widens by shift, so low bits come back zero.
        let word: u16 = (0b10011 << 11) | (0b010101 << 5) | 0b00110;
        let src = word.to_ne_bytes();
        let mut rgb = [0u8; 3];
        convert(&src, PixelLayout::Rgb16, &mut rgb, PixelLayout::Rgb24, 1, 1).unwrap();
        assert_eq!(rgb, [0b10011_000, 0b010101_00, 0b00110_000]);
        let mut back = [0u8; 2];
        convert(&rgb, PixelLayout::Rgb24, &mut back, PixelLayout::Rgb16, 1, 1).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_rows_convert_independently() {
        // A tall buffer exercises the per-scanline parallel path.
        let width = 3u32;
        let height = 64u32;
        let src: Vec<u8> = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0u8; src.len()];
        convert(&src, PixelLayout::Rgb24, &mut dst, PixelLayout::Bgr24, width, height).unwrap();
        for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact(3)) {
            assert_eq!([d[0], d[1], d[2]], [s[2], s[1], s[0]]);
        }
    }
}
