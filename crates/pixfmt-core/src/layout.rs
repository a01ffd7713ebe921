//! Pixel layout tags and their classification.
//!
//! [`PixelLayout`] is the process-wide, immutable set of supported pixel
//! encodings. Every tag identifies one exact bit layout; the registry
//! ([`crate::registry`]) attaches per-channel metadata to the tags that
//! carry a color model.
//!
//! # Families
//!
//! - Packed and planar RGB/BGR words (`Rgb8` 3-3-2 through `Rgb48`),
//!   including the 10-10-10-2 words and the float/double/half variants
//! - sRGB-encoded byte formats (`Srgb24`, `Sbgra32`, ...)
//! - Grayscale, plain and with alpha, including a signed 16-bit variant
//! - Subtractive CMY/CMYK/CMYKA
//! - Pure integer formats (`Integer1..4`, `UInteger1..4`)
//! - Depth and depth+stencil words
//! - Packed and planar YUV
//!
//! The classification queries on this type are total: they answer for
//! every tag, including the YUV tags the registry does not describe.

use std::fmt;

/// Enumerated tag identifying one specific pixel/color encoding.
///
/// The set is fixed at compile time and never extended at runtime.
/// Suffix conventions: a trailing number is the total bit count of one
/// pixel, `F` is 32-bit float, `D` is 64-bit float, `HF` is IEEE754
/// half-float, `S` is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelLayout {
    /// RGB packed into one byte: 3-3-2 bits.
    Rgb8,
    /// RGB packed into one `u16` word: 5-5-5 bits, top bit unused.
    Rgb15,
    /// RGB packed into one `u16` word: 5-6-5 bits.
    Rgb16,
    /// One byte per channel, R G B order.
    Rgb24,
    /// One `u16` per channel, R G B order.
    Rgb48,
    /// RGB + alpha packed into one `u32` word: 10-10-10-2 bits.
    Rgb30A2,
    /// One `f32` per channel, R G B order.
    RgbF,
    /// One `f64` per channel, R G B order.
    RgbD,
    /// One half-float per channel, R G B order.
    RgbHF,

    /// BGR packed into one `u16` word: 5-5-5 bits, top bit unused.
    Bgr15,
    /// BGR packed into one `u16` word: 5-6-5 bits.
    Bgr16,
    /// One byte per channel, B G R order.
    Bgr24,
    /// One `u16` per channel, B G R order.
    Bgr48,
    /// BGR + alpha packed into one `u32` word: 10-10-10-2 bits.
    Bgr30A2,
    /// One `f32` per channel, B G R order.
    BgrF,
    /// One half-float per channel, B G R order.
    BgrHF,

    /// sRGB-encoded bytes, R G B order.
    Srgb24,
    /// sRGB-encoded bytes plus linear alpha, R G B A order.
    Srgba32,
    /// sRGB-encoded bytes, B G R order.
    Sbgr24,
    /// sRGB-encoded bytes plus linear alpha, B G R A order.
    Sbgra32,

    /// One byte per channel, R G B A order.
    Rgba32,
    /// One `u16` per channel, R G B A order.
    Rgba64,
    /// One `f32` per channel, R G B A order.
    RgbaF,
    /// One `f64` per channel, R G B A order.
    RgbaD,
    /// One half-float per channel, R G B A order.
    RgbaHF,

    /// One byte per channel, B G R A order.
    Bgra32,
    /// One `u16` per channel, B G R A order.
    Bgra64,
    /// One `f32` per channel, B G R A order.
    BgraF,
    /// One half-float per channel, B G R A order.
    BgraHF,

    /// Single unsigned byte level.
    Gray8,
    /// Single unsigned `u16` level.
    Gray16,
    /// Single signed `i16` level, normalized to −1..1.
    Gray16S,
    /// Single `f32` level.
    GrayF,
    /// Single half-float level.
    GrayHF,

    /// Byte level plus byte alpha.
    GrayAlpha16,
    /// `u16` level plus `u16` alpha.
    GrayAlpha32,
    /// `f32` level plus `f32` alpha.
    GrayAlphaF,

    /// One byte per channel, C M Y order.
    Cmy24,
    /// One `u16` per channel, C M Y order.
    Cmy48,
    /// One `f32` per channel, C M Y order.
    CmyF,

    /// One byte per channel, C M Y K order.
    Cmyk32,
    /// One `u16` per channel, C M Y K order.
    Cmyk64,
    /// One `f32` per channel, C M Y K order.
    CmykF,

    /// One byte per channel, C M Y K A order.
    Cmyka40,
    /// One `u16` per channel, C M Y K A order.
    Cmyka80,
    /// One `f32` per channel, C M Y K A order.
    CmykaF,

    /// One `i32` channel.
    Integer1,
    /// Two `i32` channels.
    Integer2,
    /// Three `i32` channels.
    Integer3,
    /// Four `i32` channels.
    Integer4,
    /// One `u32` channel.
    UInteger1,
    /// Two `u32` channels.
    UInteger2,
    /// Three `u32` channels.
    UInteger3,
    /// Four `u32` channels.
    UInteger4,

    /// 16-bit depth.
    Depth16,
    /// 24-bit depth in the low bits of a `u32` word.
    Depth24,
    /// 32-bit float depth.
    DepthF,

    /// 24-bit depth plus 8-bit stencil in one `u32` word.
    Depth24Stencil8,
    /// 32-bit float depth plus 8-bit stencil in an 8-byte pixel.
    Depth32FStencil8,

    /// Packed 4:2:2 YUV, Y0 U Y1 V byte order.
    Yuyv,
    /// Packed 4:2:2 YUV, U Y0 V Y1 byte order.
    Uyvy,

    /// Planar 4:2:0 YUV, full Y plane then U then V quarter planes.
    I420,
    /// Planar 4:2:0 YUV, full Y plane then V then U quarter planes.
    Yv12,
    /// Planar 4:2:0 YUV, full Y plane then interleaved UV plane.
    Nv12,
    /// Planar 4:2:0 YUV, full Y plane then interleaved VU plane.
    Nv21,
}

impl PixelLayout {
    /// Every layout tag, in declaration order.
    ///
    /// Declaration order is also the tie-break order of the substitute
    /// search, so it is part of the observable behavior.
    pub const ALL: &'static [PixelLayout] = &[
        Self::Rgb8,
        Self::Rgb15,
        Self::Rgb16,
        Self::Rgb24,
        Self::Rgb48,
        Self::Rgb30A2,
        Self::RgbF,
        Self::RgbD,
        Self::RgbHF,
        Self::Bgr15,
        Self::Bgr16,
        Self::Bgr24,
        Self::Bgr48,
        Self::Bgr30A2,
        Self::BgrF,
        Self::BgrHF,
        Self::Srgb24,
        Self::Srgba32,
        Self::Sbgr24,
        Self::Sbgra32,
        Self::Rgba32,
        Self::Rgba64,
        Self::RgbaF,
        Self::RgbaD,
        Self::RgbaHF,
        Self::Bgra32,
        Self::Bgra64,
        Self::BgraF,
        Self::BgraHF,
        Self::Gray8,
        Self::Gray16,
        Self::Gray16S,
        Self::GrayF,
        Self::GrayHF,
        Self::GrayAlpha16,
        Self::GrayAlpha32,
        Self::GrayAlphaF,
        Self::Cmy24,
        Self::Cmy48,
        Self::CmyF,
        Self::Cmyk32,
        Self::Cmyk64,
        Self::CmykF,
        Self::Cmyka40,
        Self::Cmyka80,
        Self::CmykaF,
        Self::Integer1,
        Self::Integer2,
        Self::Integer3,
        Self::Integer4,
        Self::UInteger1,
        Self::UInteger2,
        Self::UInteger3,
        Self::UInteger4,
        Self::Depth16,
        Self::Depth24,
        Self::DepthF,
        Self::Depth24Stencil8,
        Self::Depth32FStencil8,
        Self::Yuyv,
        Self::Uyvy,
        Self::I420,
        Self::Yv12,
        Self::Nv12,
        Self::Nv21,
    ];

    /// Number of channels a pixel of this layout carries.
    #[inline]
    pub const fn channel_count(&self) -> usize {
        match self {
            Self::Gray8 | Self::Gray16 | Self::Gray16S | Self::GrayF | Self::GrayHF => 1,
            Self::Integer1 | Self::UInteger1 => 1,
            Self::Depth16 | Self::Depth24 | Self::DepthF => 1,
            Self::GrayAlpha16 | Self::GrayAlpha32 | Self::GrayAlphaF => 2,
            Self::Integer2 | Self::UInteger2 => 2,
            Self::Depth24Stencil8 | Self::Depth32FStencil8 => 2,
            Self::Rgb8
            | Self::Rgb15
            | Self::Rgb16
            | Self::Rgb24
            | Self::Rgb48
            | Self::RgbF
            | Self::RgbD
            | Self::RgbHF
            | Self::Bgr15
            | Self::Bgr16
            | Self::Bgr24
            | Self::Bgr48
            | Self::BgrF
            | Self::BgrHF
            | Self::Srgb24
            | Self::Sbgr24
            | Self::Cmy24
            | Self::Cmy48
            | Self::CmyF
            | Self::Integer3
            | Self::UInteger3 => 3,
            Self::Yuyv | Self::Uyvy | Self::I420 | Self::Yv12 | Self::Nv12 | Self::Nv21 => 3,
            Self::Rgb30A2
            | Self::Bgr30A2
            | Self::Srgba32
            | Self::Sbgra32
            | Self::Rgba32
            | Self::Rgba64
            | Self::RgbaF
            | Self::RgbaD
            | Self::RgbaHF
            | Self::Bgra32
            | Self::Bgra64
            | Self::BgraF
            | Self::BgraHF
            | Self::Cmyk32
            | Self::Cmyk64
            | Self::CmykF
            | Self::Integer4
            | Self::UInteger4 => 4,
            Self::Cmyka40 | Self::Cmyka80 | Self::CmykaF => 5,
        }
    }

    /// Bytes one pixel occupies in a flat interleaved buffer.
    ///
    /// `None` for the planar YUV tags, whose pixels do not occupy a
    /// whole number of contiguous bytes; use [`buffer_len`](Self::buffer_len)
    /// for those.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> Option<usize> {
        Some(match self {
            Self::Rgb8 | Self::Gray8 => 1,
            Self::Rgb15
            | Self::Rgb16
            | Self::Bgr15
            | Self::Bgr16
            | Self::Gray16
            | Self::Gray16S
            | Self::GrayHF
            | Self::GrayAlpha16
            | Self::Depth16
            | Self::Yuyv
            | Self::Uyvy => 2,
            Self::Rgb24 | Self::Bgr24 | Self::Srgb24 | Self::Sbgr24 | Self::Cmy24 => 3,
            Self::Rgb30A2
            | Self::Bgr30A2
            | Self::Srgba32
            | Self::Sbgra32
            | Self::Rgba32
            | Self::Bgra32
            | Self::GrayF
            | Self::GrayAlpha32
            | Self::Cmyk32
            | Self::Integer1
            | Self::UInteger1
            | Self::Depth24
            | Self::DepthF
            | Self::Depth24Stencil8 => 4,
            Self::Cmyka40 => 5,
            Self::Rgb48
            | Self::Bgr48
            | Self::RgbHF
            | Self::BgrHF
            | Self::Cmy48 => 6,
            Self::Rgba64
            | Self::Bgra64
            | Self::RgbaHF
            | Self::BgraHF
            | Self::GrayAlphaF
            | Self::Cmyk64
            | Self::Integer2
            | Self::UInteger2
            | Self::Depth32FStencil8 => 8,
            Self::Cmyka80 => 10,
            Self::RgbF | Self::BgrF | Self::CmyF | Self::Integer3 | Self::UInteger3 => 12,
            Self::RgbaF | Self::CmykF | Self::BgraF | Self::Integer4 | Self::UInteger4 => 16,
            Self::CmykaF => 20,
            Self::RgbD => 24,
            Self::RgbaD => 32,
            Self::I420 | Self::Yv12 | Self::Nv12 | Self::Nv21 => return None,
        })
    }

    /// Bytes a `width * height` buffer of this layout occupies.
    ///
    /// Interleaved layouts are `width * height * bytes_per_pixel`; the
    /// planar 4:2:0 layouts are one full luma plane plus two
    /// half-resolution chroma planes (rounded up on odd extents).
    #[inline]
    pub const fn buffer_len(&self, width: u32, height: u32) -> usize {
        let w = width as usize;
        let h = height as usize;
        match self.bytes_per_pixel() {
            Some(bpp) => w * h * bpp,
            None => {
                let luma = w * h;
                let chroma = w.div_ceil(2) * h.div_ceil(2);
                luma + 2 * chroma
            }
        }
    }

    /// `false` only for the depth and depth+stencil families.
    #[inline]
    pub const fn is_color(&self) -> bool {
        !matches!(
            self,
            Self::Depth16
                | Self::Depth24
                | Self::DepthF
                | Self::Depth24Stencil8
                | Self::Depth32FStencil8
        )
    }

    /// Whether channel values are linear light.
    ///
    /// `false` for the sRGB/sBGR families and for every float, double
    /// and half-float variant.
    #[inline]
    pub const fn is_linear(&self) -> bool {
        !matches!(
            self,
            Self::Srgb24 | Self::Srgba32 | Self::Sbgr24 | Self::Sbgra32
        ) && !self.is_float()
    }

    /// `true` only for the four planar YUV tags.
    ///
    /// Packed YUV counts as non-planar.
    #[inline]
    pub const fn is_planar(&self) -> bool {
        matches!(self, Self::I420 | Self::Yv12 | Self::Nv12 | Self::Nv21)
    }

    /// Whether the layout belongs to the pure integer color space.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Integer1
                | Self::Integer2
                | Self::Integer3
                | Self::Integer4
                | Self::UInteger1
                | Self::UInteger2
                | Self::UInteger3
                | Self::UInteger4
        )
    }

    /// Whether channel values are floating point.
    ///
    /// The explicit list: every `F` and `HF` variant plus the double
    /// formats `RgbD` and `RgbaD`.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(
            self,
            Self::RgbF
                | Self::RgbD
                | Self::RgbHF
                | Self::BgrF
                | Self::BgrHF
                | Self::RgbaF
                | Self::RgbaD
                | Self::RgbaHF
                | Self::BgraF
                | Self::BgraHF
                | Self::GrayF
                | Self::GrayHF
                | Self::GrayAlphaF
                | Self::CmyF
                | Self::CmykF
                | Self::CmykaF
                | Self::DepthF
        )
    }

    /// Whether the layout packs several channels into one integer word.
    #[inline]
    pub const fn is_packed_word(&self) -> bool {
        matches!(
            self,
            Self::Rgb8
                | Self::Rgb15
                | Self::Rgb16
                | Self::Rgb30A2
                | Self::Bgr15
                | Self::Bgr16
                | Self::Bgr30A2
                | Self::Depth24
                | Self::Depth24Stencil8
        )
    }

    /// Stable lowercase name of the tag.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb8 => "rgb8",
            Self::Rgb15 => "rgb15",
            Self::Rgb16 => "rgb16",
            Self::Rgb24 => "rgb24",
            Self::Rgb48 => "rgb48",
            Self::Rgb30A2 => "rgb30a2",
            Self::RgbF => "rgbf",
            Self::RgbD => "rgbd",
            Self::RgbHF => "rgbhf",
            Self::Bgr15 => "bgr15",
            Self::Bgr16 => "bgr16",
            Self::Bgr24 => "bgr24",
            Self::Bgr48 => "bgr48",
            Self::Bgr30A2 => "bgr30a2",
            Self::BgrF => "bgrf",
            Self::BgrHF => "bgrhf",
            Self::Srgb24 => "srgb24",
            Self::Srgba32 => "srgba32",
            Self::Sbgr24 => "sbgr24",
            Self::Sbgra32 => "sbgra32",
            Self::Rgba32 => "rgba32",
            Self::Rgba64 => "rgba64",
            Self::RgbaF => "rgbaf",
            Self::RgbaD => "rgbad",
            Self::RgbaHF => "rgbahf",
            Self::Bgra32 => "bgra32",
            Self::Bgra64 => "bgra64",
            Self::BgraF => "bgraf",
            Self::BgraHF => "bgrahf",
            Self::Gray8 => "gray8",
            Self::Gray16 => "gray16",
            Self::Gray16S => "gray16s",
            Self::GrayF => "grayf",
            Self::GrayHF => "grayhf",
            Self::GrayAlpha16 => "grayalpha16",
            Self::GrayAlpha32 => "grayalpha32",
            Self::GrayAlphaF => "grayalphaf",
            Self::Cmy24 => "cmy24",
            Self::Cmy48 => "cmy48",
            Self::CmyF => "cmyf",
            Self::Cmyk32 => "cmyk32",
            Self::Cmyk64 => "cmyk64",
            Self::CmykF => "cmykf",
            Self::Cmyka40 => "cmyka40",
            Self::Cmyka80 => "cmyka80",
            Self::CmykaF => "cmykaf",
            Self::Integer1 => "integer1",
            Self::Integer2 => "integer2",
            Self::Integer3 => "integer3",
            Self::Integer4 => "integer4",
            Self::UInteger1 => "uinteger1",
            Self::UInteger2 => "uinteger2",
            Self::UInteger3 => "uinteger3",
            Self::UInteger4 => "uinteger4",
            Self::Depth16 => "depth16",
            Self::Depth24 => "depth24",
            Self::DepthF => "depthf",
            Self::Depth24Stencil8 => "depth24stencil8",
            Self::Depth32FStencil8 => "depth32fstencil8",
            Self::Yuyv => "yuyv",
            Self::Uyvy => "uyvy",
            Self::I420 => "i420",
            Self::Yv12 => "yv12",
            Self::Nv12 => "nv12",
            Self::Nv21 => "nv21",
        }
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a format's channel semantics.
///
/// RGBA and BGRA formats classify under [`Rgb`](ColorModel::Rgb) and
/// [`Bgr`](ColorModel::Bgr); the alpha channel does not change the
/// model. The YUV tags carry no model and are absent from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorModel {
    /// Red-green-blue, red first.
    Rgb,
    /// Red-green-blue, blue first.
    Bgr,
    /// Gamma-encoded RGB.
    SRgb,
    /// Gamma-encoded BGR.
    SBgr,
    /// Single level channel.
    Gray,
    /// Level plus alpha.
    GrayAlpha,
    /// Subtractive cyan-magenta-yellow.
    Cmy,
    /// Subtractive CMY plus black.
    Cmyk,
    /// Subtractive CMYK plus alpha.
    Cmyka,
    /// Depth only.
    Depth,
    /// Depth plus stencil.
    DepthStencil,
    /// Undecorated integer channels.
    Integer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_complete_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for layout in PixelLayout::ALL {
            assert!(seen.insert(layout), "{layout} listed twice");
        }
        assert_eq!(PixelLayout::ALL.len(), 65);
    }

    #[test]
    fn test_color_classification() {
        assert!(PixelLayout::Rgb24.is_color());
        assert!(PixelLayout::Cmyk32.is_color());
        assert!(PixelLayout::Yuyv.is_color());
        assert!(!PixelLayout::Depth16.is_color());
        assert!(!PixelLayout::Depth24Stencil8.is_color());
    }

    #[test]
    fn test_linearity() {
        assert!(PixelLayout::Rgb24.is_linear());
        assert!(PixelLayout::Gray16S.is_linear());
        assert!(!PixelLayout::Srgb24.is_linear());
        assert!(!PixelLayout::Sbgra32.is_linear());
        assert!(!PixelLayout::RgbF.is_linear());
        assert!(!PixelLayout::RgbHF.is_linear());
        assert!(!PixelLayout::RgbD.is_linear());
    }

    #[test]
    fn test_planar_is_only_the_four_tags() {
        let planar: Vec<_> = PixelLayout::ALL
            .iter()
            .filter(|l| l.is_planar())
            .collect();
        assert_eq!(
            planar,
            [
                &PixelLayout::I420,
                &PixelLayout::Yv12,
                &PixelLayout::Nv12,
                &PixelLayout::Nv21
            ]
        );
        assert!(!PixelLayout::Yuyv.is_planar());
    }

    #[test]
    fn test_float_list() {
        assert!(PixelLayout::RgbF.is_float());
        assert!(PixelLayout::RgbD.is_float());
        assert!(PixelLayout::RgbaHF.is_float());
        assert!(PixelLayout::DepthF.is_float());
        assert!(!PixelLayout::Rgb24.is_float());
        assert!(!PixelLayout::Gray16S.is_float());
        assert!(!PixelLayout::Depth32FStencil8.is_float());
    }

    #[test]
    fn test_buffer_len_interleaved() {
        assert_eq!(PixelLayout::Rgb24.buffer_len(4, 2), 24);
        assert_eq!(PixelLayout::Rgb16.buffer_len(3, 3), 18);
        assert_eq!(PixelLayout::RgbaD.buffer_len(1, 1), 32);
    }

    #[test]
    fn test_buffer_len_planar() {
        // 4x4: 16 luma + 2 * 4 chroma
        assert_eq!(PixelLayout::I420.buffer_len(4, 4), 24);
        // odd extents round the chroma planes up
        assert_eq!(PixelLayout::Nv12.buffer_len(3, 3), 9 + 2 * 4);
        assert_eq!(PixelLayout::I420.bytes_per_pixel(), None);
    }
}
