//! Hardware capability flags.
//!
//! A [`CapabilitySet`] is the boolean feature vector a graphics
//! context supplies after probing its driver. This crate treats it as
//! opaque input: the oracle reads the bits, it never detects them.

use bitflags::bitflags;

bitflags! {
    /// Optional driver features a context may expose.
    ///
    /// Each bit corresponds to one extension-gated capability the
    /// support rules consult.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CapabilitySet: u32 {
        /// Packed pixel words (3-3-2, 5-6-5, 10-10-10-2, ...).
        const PACKED_PIXELS = 1 << 0;
        /// BGR-ordered transfer formats.
        const BGR = 1 << 1;
        /// Texture channel swizzling.
        const SWIZZLE = 1 << 2;
        /// Half-float pixel transfer.
        const HALF_FLOAT = 1 << 3;
        /// Floating-point texture storage.
        const FLOAT_TEXTURE = 1 << 4;
        /// sRGB texture storage.
        const SRGB = 1 << 5;
        /// Integer (non-normalized) textures.
        const TEXTURE_INTEGER = 1 << 6;
        /// Depth textures.
        const DEPTH_TEXTURE = 1 << 7;
        /// Two-channel RG textures.
        const RG_TEXTURE = 1 << 8;
    }
}
