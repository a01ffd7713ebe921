//! sRGB transfer function.
//!
//! Piecewise curve combining a linear segment near black with a power
//! curve for the rest. Applied per channel to R, G and B — never to
//! alpha.
//!
//! # Range
//!
//! - Input/Output: [0, 1], clamped at the boundaries on encode.

/// Linear threshold of the encode direction.
const ENCODE_CUTOFF: f32 = 0.003138;

/// Encoded threshold of the decode direction.
const DECODE_CUTOFF: f32 = 0.04045;

/// Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if c < 0.003138:
///     srgb = 12.92 * c
/// else:
///     srgb = 1.055 * c^0.41666 - 0.055
/// ```
///
/// The result is clamped to [0, 1] at the boundaries.
///
/// # Example
///
/// ```rust
/// use pixfmt_transfer::srgb::encode;
///
/// let encoded = encode(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(c: f32) -> f32 {
    let srgb = if c < ENCODE_CUTOFF {
        12.92 * c
    } else {
        1.055 * c.powf(0.41666) - 0.055
    };
    srgb.clamp(0.0, 1.0)
}

/// Decodes sRGB to linear light.
///
/// # Formula
///
/// ```text
/// if srgb <= 0.04045:
///     c = srgb / 12.92
/// else:
///     c = ((srgb + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use pixfmt_transfer::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(srgb: f32) -> f32 {
    if srgb <= DECODE_CUTOFF {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes an RGB triplet.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Decodes an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Encodes one linear byte channel to an sRGB byte.
#[inline]
pub fn encode_u8(c: u8) -> u8 {
    (encode(c as f32 / 255.0) * 255.0).round() as u8
}

/// Decodes one sRGB byte channel to a linear byte.
#[inline]
pub fn decode_u8(srgb: u8) -> u8 {
    (decode(srgb as f32 / 255.0) * 255.0).round() as u8
}
