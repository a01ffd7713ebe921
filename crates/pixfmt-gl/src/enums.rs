//! Native GL enumerant tables.
//!
//! Pure data: each query maps a layout to the GL constant a binding
//! passes to the driver — sized internal format, transfer format, and
//! transfer component type. `None` marks the encodings GL cannot
//! express (the subtractive families and YUV); those go through
//! substitution instead.

use crate::caps::CapabilitySet;
use gl::types::GLenum;
use pixfmt_core::PixelLayout;

/// Sized internal format for a layout.
///
/// The only capability that changes the mapping is sRGB storage: when
/// the context lacks it, the sRGB families fall back to their linear
/// sized formats and the data is uploaded as-is.
pub fn internal_format_of(layout: PixelLayout, caps: CapabilitySet) -> Option<GLenum> {
    use PixelLayout as L;
    let srgb = caps.contains(CapabilitySet::SRGB);
    Some(match layout {
        L::Rgb8 => gl::R3_G3_B2,
        L::Rgb15 | L::Bgr15 => gl::RGB5,
        L::Rgb16 | L::Bgr16 => gl::RGB565,
        L::Rgb24 | L::Bgr24 => gl::RGB8,
        L::Rgb48 | L::Bgr48 => gl::RGB16,
        L::Rgb30A2 | L::Bgr30A2 => gl::RGB10_A2,
        L::RgbF | L::BgrF | L::RgbD => gl::RGB32F,
        L::RgbHF | L::BgrHF => gl::RGB16F,

        L::Srgb24 | L::Sbgr24 => {
            if srgb {
                gl::SRGB8
            } else {
                gl::RGB8
            }
        }
        L::Srgba32 | L::Sbgra32 => {
            if srgb {
                gl::SRGB8_ALPHA8
            } else {
                gl::RGBA8
            }
        }

        L::Rgba32 | L::Bgra32 => gl::RGBA8,
        L::Rgba64 | L::Bgra64 => gl::RGBA16,
        L::RgbaF | L::BgraF | L::RgbaD => gl::RGBA32F,
        L::RgbaHF | L::BgraHF => gl::RGBA16F,

        L::Gray8 => gl::R8,
        L::Gray16 => gl::R16,
        L::Gray16S => gl::R16_SNORM,
        L::GrayF => gl::R32F,
        L::GrayHF => gl::R16F,
        L::GrayAlpha16 => gl::RG8,
        L::GrayAlpha32 => gl::RG16,
        L::GrayAlphaF => gl::RG32F,

        L::Integer1 => gl::R32I,
        L::Integer2 => gl::RG32I,
        L::Integer3 => gl::RGB32I,
        L::Integer4 => gl::RGBA32I,
        L::UInteger1 => gl::R32UI,
        L::UInteger2 => gl::RG32UI,
        L::UInteger3 => gl::RGB32UI,
        L::UInteger4 => gl::RGBA32UI,

        L::Depth16 => gl::DEPTH_COMPONENT16,
        L::Depth24 => gl::DEPTH_COMPONENT24,
        L::DepthF => gl::DEPTH_COMPONENT32F,
        L::Depth24Stencil8 => gl::DEPTH24_STENCIL8,
        L::Depth32FStencil8 => gl::DEPTH32F_STENCIL8,

        L::Cmy24
        | L::Cmy48
        | L::CmyF
        | L::Cmyk32
        | L::Cmyk64
        | L::CmykF
        | L::Cmyka40
        | L::Cmyka80
        | L::CmykaF
        | L::Yuyv
        | L::Uyvy
        | L::I420
        | L::Yv12
        | L::Nv12
        | L::Nv21 => return None,
    })
}

/// Transfer (client data) format for a layout.
pub fn transfer_format_of(layout: PixelLayout) -> Option<GLenum> {
    use PixelLayout as L;
    Some(match layout {
        L::Rgb8 | L::Rgb15 | L::Rgb16 | L::Rgb24 | L::Rgb48 | L::RgbF | L::RgbD | L::RgbHF
        | L::Srgb24 => gl::RGB,
        L::Bgr15 | L::Bgr16 | L::Bgr24 | L::Bgr48 | L::BgrF | L::BgrHF | L::Sbgr24 => gl::BGR,
        // The 10-10-10-2 words transfer all four components in one go.
        L::Rgb30A2 | L::Rgba32 | L::Rgba64 | L::RgbaF | L::RgbaD | L::RgbaHF | L::Srgba32 => {
            gl::RGBA
        }
        L::Bgr30A2 | L::Bgra32 | L::Bgra64 | L::BgraF | L::BgraHF | L::Sbgra32 => gl::BGRA,

        L::Gray8 | L::Gray16 | L::Gray16S | L::GrayF | L::GrayHF => gl::RED,
        L::GrayAlpha16 | L::GrayAlpha32 | L::GrayAlphaF => gl::RG,

        L::Integer1 | L::UInteger1 => gl::RED_INTEGER,
        L::Integer2 | L::UInteger2 => gl::RG_INTEGER,
        L::Integer3 | L::UInteger3 => gl::RGB_INTEGER,
        L::Integer4 | L::UInteger4 => gl::RGBA_INTEGER,

        L::Depth16 | L::Depth24 | L::DepthF => gl::DEPTH_COMPONENT,
        L::Depth24Stencil8 | L::Depth32FStencil8 => gl::DEPTH_STENCIL,

        L::Cmy24
        | L::Cmy48
        | L::CmyF
        | L::Cmyk32
        | L::Cmyk64
        | L::CmykF
        | L::Cmyka40
        | L::Cmyka80
        | L::CmykaF
        | L::Yuyv
        | L::Uyvy
        | L::I420
        | L::Yv12
        | L::Nv12
        | L::Nv21 => return None,
    })
}

/// Transfer component type for a layout.
pub fn transfer_type_of(layout: PixelLayout) -> Option<GLenum> {
    use PixelLayout as L;
    Some(match layout {
        L::Rgb8 => gl::UNSIGNED_BYTE_3_3_2,
        L::Rgb15 | L::Bgr15 => gl::UNSIGNED_SHORT_1_5_5_5_REV,
        L::Rgb16 | L::Bgr16 => gl::UNSIGNED_SHORT_5_6_5,
        L::Rgb30A2 | L::Bgr30A2 => gl::UNSIGNED_INT_10_10_10_2,

        L::Rgb24 | L::Bgr24 | L::Srgb24 | L::Sbgr24 | L::Rgba32 | L::Bgra32 | L::Srgba32
        | L::Sbgra32 | L::Gray8 | L::GrayAlpha16 => gl::UNSIGNED_BYTE,
        L::Rgb48 | L::Bgr48 | L::Rgba64 | L::Bgra64 | L::Gray16 | L::GrayAlpha32 => {
            gl::UNSIGNED_SHORT
        }
        L::Gray16S => gl::SHORT,

        L::RgbF | L::BgrF | L::RgbaF | L::BgraF | L::GrayF | L::GrayAlphaF => gl::FLOAT,
        L::RgbHF | L::BgrHF | L::RgbaHF | L::BgraHF | L::GrayHF => gl::HALF_FLOAT,
        L::RgbD | L::RgbaD => gl::DOUBLE,

        L::Integer1 | L::Integer2 | L::Integer3 | L::Integer4 => gl::INT,
        L::UInteger1 | L::UInteger2 | L::UInteger3 | L::UInteger4 => gl::UNSIGNED_INT,

        L::Depth16 => gl::UNSIGNED_SHORT,
        L::Depth24 => gl::UNSIGNED_INT,
        L::DepthF => gl::FLOAT,
        L::Depth24Stencil8 => gl::UNSIGNED_INT_24_8,
        L::Depth32FStencil8 => gl::FLOAT_32_UNSIGNED_INT_24_8_REV,

        L::Cmy24
        | L::Cmy48
        | L::CmyF
        | L::Cmyk32
        | L::Cmyk64
        | L::CmykF
        | L::Cmyka40
        | L::Cmyka80
        | L::CmykaF
        | L::Yuyv
        | L::Uyvy
        | L::I420
        | L::Yv12
        | L::Nv12
        | L::Nv21 => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_mapping_follows_caps() {
        let with = CapabilitySet::SRGB;
        let without = CapabilitySet::empty();
        assert_eq!(
            internal_format_of(PixelLayout::Srgb24, with),
            Some(gl::SRGB8)
        );
        assert_eq!(
            internal_format_of(PixelLayout::Srgb24, without),
            Some(gl::RGB8)
        );
        assert_eq!(
            internal_format_of(PixelLayout::Srgba32, with),
            Some(gl::SRGB8_ALPHA8)
        );
    }

    #[test]
    fn test_inexpressible_formats_map_to_none() {
        let all = CapabilitySet::all();
        for layout in [PixelLayout::Cmyk32, PixelLayout::Yuyv, PixelLayout::I420] {
            assert_eq!(internal_format_of(layout, all), None, "{layout}");
            assert_eq!(transfer_format_of(layout), None, "{layout}");
            assert_eq!(transfer_type_of(layout), None, "{layout}");
        }
    }

    #[test]
    fn test_every_gl_expressible_layout_has_all_three() {
        let all = CapabilitySet::all();
        for &layout in PixelLayout::ALL {
            let triple = (
                internal_format_of(layout, all),
                transfer_format_of(layout),
                transfer_type_of(layout),
            );
            match triple {
                (Some(_), Some(_), Some(_)) | (None, None, None) => {}
                other => panic!("{layout} has a partial GL mapping: {other:?}"),
            }
        }
    }

    #[test]
    fn test_packed_transfer_types() {
        assert_eq!(
            transfer_type_of(PixelLayout::Rgb8),
            Some(gl::UNSIGNED_BYTE_3_3_2)
        );
        assert_eq!(
            transfer_type_of(PixelLayout::Rgb30A2),
            Some(gl::UNSIGNED_INT_10_10_10_2)
        );
        assert_eq!(transfer_format_of(PixelLayout::Rgb30A2), Some(gl::RGBA));
    }

    #[test]
    fn test_depth_stencil_mapping() {
        let all = CapabilitySet::all();
        assert_eq!(
            internal_format_of(PixelLayout::Depth24Stencil8, all),
            Some(gl::DEPTH24_STENCIL8)
        );
        assert_eq!(
            transfer_type_of(PixelLayout::Depth32FStencil8),
            Some(gl::FLOAT_32_UNSIGNED_INT_24_8_REV)
        );
        assert_eq!(
            transfer_format_of(PixelLayout::Depth16),
            Some(gl::DEPTH_COMPONENT)
        );
    }
}
