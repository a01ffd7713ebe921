//! Per-family format support rules.
//!
//! Hard-coded classification of every layout against a
//! [`CapabilitySet`], split by direction: internal storage versus
//! pixel transfer. The two directions share one rule table and differ
//! only in which bit carries a BGR-ordered format — transfer needs the
//! driver to accept BGR data ([`CapabilitySet::BGR`]), internal
//! storage emulates the order with channel swizzling
//! ([`CapabilitySet::SWIZZLE`]). The 15-bit words are the exception
//! and require packed pixels plus swizzle in both directions.

use crate::caps::CapabilitySet;
use pixfmt_core::PixelLayout;

/// Whether a layout can be used as internal texture storage.
#[inline]
pub fn is_supported_internal(layout: PixelLayout, caps: CapabilitySet) -> bool {
    supported(layout, caps, CapabilitySet::SWIZZLE)
}

/// Whether a layout can be used as a pixel transfer format.
#[inline]
pub fn is_supported_transfer(layout: PixelLayout, caps: CapabilitySet) -> bool {
    supported(layout, caps, CapabilitySet::BGR)
}

/// Whether a transfer/internal format pair is uploadable together.
///
/// Both formats must be individually supported in their direction,
/// agree on color-versus-depth, and agree on integer-versus-normalized
/// — a non-integer internal format never pairs with integer data.
pub fn is_valid_upload_pair(
    data: PixelLayout,
    internal: PixelLayout,
    caps: CapabilitySet,
) -> bool {
    is_supported_transfer(data, caps)
        && is_supported_internal(internal, caps)
        && data.is_color() == internal.is_color()
        && data.is_integer() == internal.is_integer()
}

fn supported(layout: PixelLayout, caps: CapabilitySet, bgr: CapabilitySet) -> bool {
    use CapabilitySet as C;
    use PixelLayout as L;
    match layout {
        // Baseline formats every context handles.
        L::Rgb24 | L::Rgb48 | L::Rgba32 | L::Rgba64 => true,
        L::Gray8 | L::Gray16 | L::Gray16S => true,

        L::Rgb8 | L::Rgb16 | L::Rgb30A2 => caps.contains(C::PACKED_PIXELS),
        L::Rgb15 | L::Bgr15 => caps.contains(C::PACKED_PIXELS | C::SWIZZLE),
        L::Bgr16 | L::Bgr30A2 => caps.contains(C::PACKED_PIXELS) && caps.contains(bgr),

        L::Bgr24 | L::Bgr48 | L::Bgra32 | L::Bgra64 => caps.contains(bgr),

        L::RgbF | L::RgbD | L::RgbaF | L::RgbaD | L::GrayF => caps.contains(C::FLOAT_TEXTURE),
        L::RgbHF | L::RgbaHF | L::GrayHF => caps.contains(C::FLOAT_TEXTURE | C::HALF_FLOAT),
        L::BgrF | L::BgraF => caps.contains(C::FLOAT_TEXTURE) && caps.contains(bgr),
        L::BgrHF | L::BgraHF => {
            caps.contains(C::FLOAT_TEXTURE | C::HALF_FLOAT) && caps.contains(bgr)
        }

        L::Srgb24 | L::Srgba32 => caps.contains(C::SRGB),
        L::Sbgr24 | L::Sbgra32 => caps.contains(C::SRGB) && caps.contains(bgr),

        L::GrayAlpha16 | L::GrayAlpha32 => caps.contains(C::RG_TEXTURE),
        L::GrayAlphaF => caps.contains(C::RG_TEXTURE | C::FLOAT_TEXTURE),

        L::Integer1
        | L::Integer2
        | L::Integer3
        | L::Integer4
        | L::UInteger1
        | L::UInteger2
        | L::UInteger3
        | L::UInteger4 => caps.contains(C::TEXTURE_INTEGER),

        L::Depth16 | L::Depth24 | L::Depth24Stencil8 => caps.contains(C::DEPTH_TEXTURE),
        L::DepthF | L::Depth32FStencil8 => {
            caps.contains(C::DEPTH_TEXTURE | C::FLOAT_TEXTURE)
        }

        // Subtractive and YUV encodings are never native; the oracle
        // routes them through substitution.
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
        | L::Nv21 => false,
    }
}
