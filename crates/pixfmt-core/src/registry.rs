//! The process-wide pixel format registry.
//!
//! One [`FormatInfo`] per registered [`PixelLayout`], built exactly once
//! into an immutable map on first access and read-only for the rest of
//! the process lifetime. The `LazyLock` guarantees initialization
//! completes-before any lookup; concurrent lookups afterwards need no
//! locking.
//!
//! The YUV tags (packed and planar) carry no [`ColorModel`]
//! classification and are not registered: [`lookup`] on them is the
//! [`UnknownFormat`](crate::Error::UnknownFormat) case.

use crate::channel::{ChannelDesc, ChannelName, ChannelStore};
use crate::error::{Error, Result};
use crate::layout::{ColorModel, PixelLayout};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Static metadata describing one registered pixel layout.
#[derive(Debug, Clone)]
pub struct FormatInfo {
    /// The tag this entry describes.
    pub layout: PixelLayout,
    /// Color model classification.
    pub model: ColorModel,
    /// Channel descriptor table driving [`crate::color::ColorValue`].
    ///
    /// Empty for the depth and integer families, whose channels are not
    /// addressable through the color value model.
    pub channels: &'static [ChannelDesc],
    /// Per-channel bit widths, in channel order.
    pub bits: &'static [u8],
    /// Whether channel values are signed (the `Gray16S` case).
    pub signed: bool,
    /// Whether channel values are linear light.
    pub linear: bool,
    /// Bytes one pixel occupies.
    pub bytes_per_pixel: usize,
}

impl FormatInfo {
    /// Number of channels addressable through the color value model.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Whether any channel is a packed bit field.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.channels
            .iter()
            .any(|c| matches!(c.store, ChannelStore::Packed { .. }))
    }

    /// Widest channel in bits; the precision measure of the format.
    #[inline]
    pub fn max_channel_bits(&self) -> u8 {
        self.bits.iter().copied().max().unwrap_or(0)
    }
}

/// Looks up the registered metadata for a layout tag.
///
/// Fails with [`Error::UnknownFormat`] for the unregistered (YUV) tags.
#[inline]
pub fn lookup(layout: PixelLayout) -> Result<&'static FormatInfo> {
    REGISTRY
        .get(&layout)
        .ok_or(Error::UnknownFormat { layout })
}

/// Whether a tag has a registry entry.
#[inline]
pub fn is_registered(layout: PixelLayout) -> bool {
    REGISTRY.contains_key(&layout)
}

static REGISTRY: LazyLock<HashMap<PixelLayout, FormatInfo>> = LazyLock::new(build);

const fn ch(name: ChannelName, store: ChannelStore) -> ChannelDesc {
    ChannelDesc::new(name, store)
}

const fn packed(offset: u8, width: u8) -> ChannelStore {
    ChannelStore::Packed { offset, width }
}

macro_rules! scalar_table {
    ($name:ident, $store:expr, [$($channel:ident),+]) => {
        const $name: &[ChannelDesc] = &[$(ch(ChannelName::$channel, $store)),+];
    };
}

scalar_table!(RGB_U8, ChannelStore::U8, [Red, Green, Blue]);
scalar_table!(RGB_U16, ChannelStore::U16, [Red, Green, Blue]);
scalar_table!(RGB_F16, ChannelStore::F16, [Red, Green, Blue]);
scalar_table!(RGB_F32, ChannelStore::F32, [Red, Green, Blue]);
scalar_table!(RGB_F64, ChannelStore::F64, [Red, Green, Blue]);
scalar_table!(BGR_U8, ChannelStore::U8, [Blue, Green, Red]);
scalar_table!(BGR_U16, ChannelStore::U16, [Blue, Green, Red]);
scalar_table!(BGR_F16, ChannelStore::F16, [Blue, Green, Red]);
scalar_table!(BGR_F32, ChannelStore::F32, [Blue, Green, Red]);
scalar_table!(RGBA_U8, ChannelStore::U8, [Red, Green, Blue, Alpha]);
scalar_table!(RGBA_U16, ChannelStore::U16, [Red, Green, Blue, Alpha]);
scalar_table!(RGBA_F16, ChannelStore::F16, [Red, Green, Blue, Alpha]);
scalar_table!(RGBA_F32, ChannelStore::F32, [Red, Green, Blue, Alpha]);
scalar_table!(RGBA_F64, ChannelStore::F64, [Red, Green, Blue, Alpha]);
scalar_table!(BGRA_U8, ChannelStore::U8, [Blue, Green, Red, Alpha]);
scalar_table!(BGRA_U16, ChannelStore::U16, [Blue, Green, Red, Alpha]);
scalar_table!(BGRA_F16, ChannelStore::F16, [Blue, Green, Red, Alpha]);
scalar_table!(BGRA_F32, ChannelStore::F32, [Blue, Green, Red, Alpha]);
scalar_table!(GRAY_U8, ChannelStore::U8, [Level]);
scalar_table!(GRAY_U16, ChannelStore::U16, [Level]);
scalar_table!(GRAY_I16, ChannelStore::I16, [Level]);
scalar_table!(GRAY_F16, ChannelStore::F16, [Level]);
scalar_table!(GRAY_F32, ChannelStore::F32, [Level]);
scalar_table!(GRAYA_U8, ChannelStore::U8, [Level, Alpha]);
scalar_table!(GRAYA_U16, ChannelStore::U16, [Level, Alpha]);
scalar_table!(GRAYA_F32, ChannelStore::F32, [Level, Alpha]);
scalar_table!(CMY_U8, ChannelStore::U8, [Cyan, Magenta, Yellow]);
scalar_table!(CMY_U16, ChannelStore::U16, [Cyan, Magenta, Yellow]);
scalar_table!(CMY_F32, ChannelStore::F32, [Cyan, Magenta, Yellow]);
scalar_table!(CMYK_U8, ChannelStore::U8, [Cyan, Magenta, Yellow, Black]);
scalar_table!(CMYK_U16, ChannelStore::U16, [Cyan, Magenta, Yellow, Black]);
scalar_table!(CMYK_F32, ChannelStore::F32, [Cyan, Magenta, Yellow, Black]);
scalar_table!(CMYKA_U8, ChannelStore::U8, [Cyan, Magenta, Yellow, Black, Alpha]);
scalar_table!(CMYKA_U16, ChannelStore::U16, [Cyan, Magenta, Yellow, Black, Alpha]);
scalar_table!(CMYKA_F32, ChannelStore::F32, [Cyan, Magenta, Yellow, Black, Alpha]);

// Packed words, fields top-down within the word.
const RGB8_P: &[ChannelDesc] = &[
    ch(ChannelName::Red, packed(5, 3)),
    ch(ChannelName::Green, packed(2, 3)),
    ch(ChannelName::Blue, packed(0, 2)),
];
const RGB15_P: &[ChannelDesc] = &[
    ch(ChannelName::Red, packed(10, 5)),
    ch(ChannelName::Green, packed(5, 5)),
    ch(ChannelName::Blue, packed(0, 5)),
];
const RGB16_P: &[ChannelDesc] = &[
    ch(ChannelName::Red, packed(11, 5)),
    ch(ChannelName::Green, packed(5, 6)),
    ch(ChannelName::Blue, packed(0, 5)),
];
const BGR15_P: &[ChannelDesc] = &[
    ch(ChannelName::Blue, packed(10, 5)),
    ch(ChannelName::Green, packed(5, 5)),
    ch(ChannelName::Red, packed(0, 5)),
];
const BGR16_P: &[ChannelDesc] = &[
    ch(ChannelName::Blue, packed(11, 5)),
    ch(ChannelName::Green, packed(5, 6)),
    ch(ChannelName::Red, packed(0, 5)),
];
const RGB30A2_P: &[ChannelDesc] = &[
    ch(ChannelName::Red, packed(22, 10)),
    ch(ChannelName::Green, packed(12, 10)),
    ch(ChannelName::Blue, packed(2, 10)),
    ch(ChannelName::Alpha, packed(0, 2)),
];
const BGR30A2_P: &[ChannelDesc] = &[
    ch(ChannelName::Blue, packed(22, 10)),
    ch(ChannelName::Green, packed(12, 10)),
    ch(ChannelName::Red, packed(2, 10)),
    ch(ChannelName::Alpha, packed(0, 2)),
];

fn build() -> HashMap<PixelLayout, FormatInfo> {
    let mut map = HashMap::new();
    let mut add = |layout: PixelLayout,
                   model: ColorModel,
                   channels: &'static [ChannelDesc],
                   bits: &'static [u8]| {
        // Planar tags have no interleaved pixel size and are never added.
        let Some(bytes_per_pixel) = layout.bytes_per_pixel() else {
            return;
        };
        map.insert(
            layout,
            FormatInfo {
                layout,
                model,
                channels,
                bits,
                signed: matches!(layout, PixelLayout::Gray16S),
                linear: layout.is_linear(),
                bytes_per_pixel,
            },
        );
    };

    use ColorModel::*;
    use PixelLayout as L;

    add(L::Rgb8, Rgb, RGB8_P, &[3, 3, 2]);
    add(L::Rgb15, Rgb, RGB15_P, &[5, 5, 5]);
    add(L::Rgb16, Rgb, RGB16_P, &[5, 6, 5]);
    add(L::Rgb24, Rgb, RGB_U8, &[8, 8, 8]);
    add(L::Rgb48, Rgb, RGB_U16, &[16, 16, 16]);
    add(L::Rgb30A2, Rgb, RGB30A2_P, &[10, 10, 10, 2]);
    add(L::RgbF, Rgb, RGB_F32, &[32, 32, 32]);
    add(L::RgbD, Rgb, RGB_F64, &[64, 64, 64]);
    add(L::RgbHF, Rgb, RGB_F16, &[16, 16, 16]);

    add(L::Bgr15, Bgr, BGR15_P, &[5, 5, 5]);
    add(L::Bgr16, Bgr, BGR16_P, &[5, 6, 5]);
    add(L::Bgr24, Bgr, BGR_U8, &[8, 8, 8]);
    add(L::Bgr48, Bgr, BGR_U16, &[16, 16, 16]);
    add(L::Bgr30A2, Bgr, BGR30A2_P, &[10, 10, 10, 2]);
    add(L::BgrF, Bgr, BGR_F32, &[32, 32, 32]);
    add(L::BgrHF, Bgr, BGR_F16, &[16, 16, 16]);

    add(L::Srgb24, SRgb, RGB_U8, &[8, 8, 8]);
    add(L::Srgba32, SRgb, RGBA_U8, &[8, 8, 8, 8]);
    add(L::Sbgr24, SBgr, BGR_U8, &[8, 8, 8]);
    add(L::Sbgra32, SBgr, BGRA_U8, &[8, 8, 8, 8]);

    add(L::Rgba32, Rgb, RGBA_U8, &[8, 8, 8, 8]);
    add(L::Rgba64, Rgb, RGBA_U16, &[16, 16, 16, 16]);
    add(L::RgbaF, Rgb, RGBA_F32, &[32, 32, 32, 32]);
    add(L::RgbaD, Rgb, RGBA_F64, &[64, 64, 64, 64]);
    add(L::RgbaHF, Rgb, RGBA_F16, &[16, 16, 16, 16]);

    add(L::Bgra32, Bgr, BGRA_U8, &[8, 8, 8, 8]);
    add(L::Bgra64, Bgr, BGRA_U16, &[16, 16, 16, 16]);
    add(L::BgraF, Bgr, BGRA_F32, &[32, 32, 32, 32]);
    add(L::BgraHF, Bgr, BGRA_F16, &[16, 16, 16, 16]);

    add(L::Gray8, Gray, GRAY_U8, &[8]);
    add(L::Gray16, Gray, GRAY_U16, &[16]);
    add(L::Gray16S, Gray, GRAY_I16, &[16]);
    add(L::GrayF, Gray, GRAY_F32, &[32]);
    add(L::GrayHF, Gray, GRAY_F16, &[16]);

    add(L::GrayAlpha16, GrayAlpha, GRAYA_U8, &[8, 8]);
    add(L::GrayAlpha32, GrayAlpha, GRAYA_U16, &[16, 16]);
    add(L::GrayAlphaF, GrayAlpha, GRAYA_F32, &[32, 32]);

    add(L::Cmy24, Cmy, CMY_U8, &[8, 8, 8]);
    add(L::Cmy48, Cmy, CMY_U16, &[16, 16, 16]);
    add(L::CmyF, Cmy, CMY_F32, &[32, 32, 32]);

    add(L::Cmyk32, Cmyk, CMYK_U8, &[8, 8, 8, 8]);
    add(L::Cmyk64, Cmyk, CMYK_U16, &[16, 16, 16, 16]);
    add(L::CmykF, Cmyk, CMYK_F32, &[32, 32, 32, 32]);

    add(L::Cmyka40, Cmyka, CMYKA_U8, &[8, 8, 8, 8, 8]);
    add(L::Cmyka80, Cmyka, CMYKA_U16, &[16, 16, 16, 16, 16]);
    add(L::CmykaF, Cmyka, CMYKA_F32, &[32, 32, 32, 32, 32]);

    add(L::Integer1, Integer, &[], &[32]);
    add(L::Integer2, Integer, &[], &[32, 32]);
    add(L::Integer3, Integer, &[], &[32, 32, 32]);
    add(L::Integer4, Integer, &[], &[32, 32, 32, 32]);
    add(L::UInteger1, Integer, &[], &[32]);
    add(L::UInteger2, Integer, &[], &[32, 32]);
    add(L::UInteger3, Integer, &[], &[32, 32, 32]);
    add(L::UInteger4, Integer, &[], &[32, 32, 32, 32]);

    add(L::Depth16, Depth, &[], &[16]);
    add(L::Depth24, Depth, &[], &[24]);
    add(L::DepthF, Depth, &[], &[32]);
    add(L::Depth24Stencil8, DepthStencil, &[], &[24, 8]);
    add(L::Depth32FStencil8, DepthStencil, &[], &[32, 8]);

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yuv_tags_are_unregistered() {
        for layout in [
            PixelLayout::Yuyv,
            PixelLayout::Uyvy,
            PixelLayout::I420,
            PixelLayout::Yv12,
            PixelLayout::Nv12,
            PixelLayout::Nv21,
        ] {
            assert!(!is_registered(layout));
            assert!(matches!(
                lookup(layout),
                Err(Error::UnknownFormat { layout: l }) if l == layout
            ));
        }
    }

    #[test]
    fn test_everything_else_is_registered() {
        for &layout in PixelLayout::ALL {
            if layout.is_planar() || matches!(layout, PixelLayout::Yuyv | PixelLayout::Uyvy) {
                continue;
            }
            let info = lookup(layout).unwrap();
            assert_eq!(info.layout, layout);
            assert_eq!(info.linear, layout.is_linear());
            assert_eq!(Some(info.bytes_per_pixel), layout.bytes_per_pixel());
        }
    }

    #[test]
    fn test_channel_order_follows_model() {
        let bgr = lookup(PixelLayout::Bgr24).unwrap();
        assert_eq!(bgr.channels[0].name, ChannelName::Blue);
        assert_eq!(bgr.channels[2].name, ChannelName::Red);

        let cmyk = lookup(PixelLayout::Cmyk32).unwrap();
        assert_eq!(cmyk.channels[3].name, ChannelName::Black);
    }

    #[test]
    fn test_packed_descriptors() {
        let rgb8 = lookup(PixelLayout::Rgb8).unwrap();
        assert!(rgb8.is_packed());
        assert_eq!(rgb8.bits, &[3, 3, 2]);
        assert_eq!(rgb8.bytes_per_pixel, 1);

        let rgb30 = lookup(PixelLayout::Rgb30A2).unwrap();
        assert_eq!(rgb30.channel_count(), 4);
        assert_eq!(rgb30.max_channel_bits(), 10);
    }

    #[test]
    fn test_signed_flag_only_for_gray16s() {
        for &layout in PixelLayout::ALL {
            if let Ok(info) = lookup(layout) {
                assert_eq!(info.signed, layout == PixelLayout::Gray16S, "{layout}");
            }
        }
    }

    #[test]
    fn test_depth_and_integer_have_no_color_channels() {
        assert_eq!(lookup(PixelLayout::Depth24).unwrap().channel_count(), 0);
        assert_eq!(lookup(PixelLayout::Integer4).unwrap().channel_count(), 0);
        assert_eq!(lookup(PixelLayout::Depth24Stencil8).unwrap().bits, &[24, 8]);
    }
}
