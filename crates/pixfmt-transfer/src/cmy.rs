//! Subtractive CMY and CMYK mixing.
//!
//! CMY is the subtractive complement of RGB; CMYK folds the black
//! component in first and then takes the same complement. The byte and
//! 16-bit entry points scale against their domain's max value so all
//! three domains agree on the same colors.

/// CMY to RGB: the subtractive identity `R = 1 - C`.
#[inline]
pub fn cmy_to_rgb(cmy: [f32; 3]) -> [f32; 3] {
    [1.0 - cmy[0], 1.0 - cmy[1], 1.0 - cmy[2]]
}

/// CMYK to RGB: black is folded into each component before the
/// subtractive complement, `R = 1 - (C * (1 - K) + K)`.
///
/// This is CMYK -> CMY -> RGB composed; each result is clamped to
/// [0, 1] before any re-quantization.
///
/// # Example
///
/// ```rust
/// use pixfmt_transfer::cmy::cmyk_to_rgb;
///
/// // Pure cyan ink: no red, full green and blue.
/// assert_eq!(cmyk_to_rgb([1.0, 0.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
/// // Full black component swallows everything.
/// assert_eq!(cmyk_to_rgb([0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn cmyk_to_rgb(cmyk: [f32; 4]) -> [f32; 3] {
    let [c, m, y, k] = cmyk;
    [
        (1.0 - (c * (1.0 - k) + k)).clamp(0.0, 1.0),
        (1.0 - (m * (1.0 - k) + k)).clamp(0.0, 1.0),
        (1.0 - (y * (1.0 - k) + k)).clamp(0.0, 1.0),
    ]
}

/// Byte-domain CMY to RGB: `R = 255 - C`, exact.
#[inline]
pub fn cmy_to_rgb_u8(cmy: [u8; 3]) -> [u8; 3] {
    [255 - cmy[0], 255 - cmy[1], 255 - cmy[2]]
}

/// 16-bit-domain CMY to RGB: `R = 65535 - C`, exact.
#[inline]
pub fn cmy_to_rgb_u16(cmy: [u16; 3]) -> [u16; 3] {
    [65535 - cmy[0], 65535 - cmy[1], 65535 - cmy[2]]
}

/// Byte-domain CMYK to RGB, quantized with saturating rounding.
#[inline]
pub fn cmyk_to_rgb_u8(cmyk: [u8; 4]) -> [u8; 3] {
    let rgb = cmyk_to_rgb(cmyk.map(|v| v as f32 / 255.0));
    rgb.map(|v| (v * 255.0).round() as u8)
}

/// 16-bit-domain CMYK to RGB, quantized with saturating rounding.
#[inline]
pub fn cmyk_to_rgb_u16(cmyk: [u16; 4]) -> [u16; 3] {
    let rgb = cmyk_to_rgb(cmyk.map(|v| v as f32 / 65535.0));
    rgb.map(|v| (v * 65535.0).round() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmyk_identity_cases() {
        assert_eq!(cmyk_to_rgb([0.0, 0.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);
        assert_eq!(cmyk_to_rgb([0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
        assert_eq!(cmyk_to_rgb([1.0, 0.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_cmy_is_complement() {
        assert_eq!(cmy_to_rgb([0.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);
        assert_eq!(cmy_to_rgb([1.0, 1.0, 1.0]), [0.0, 0.0, 0.0]);
        assert_eq!(cmy_to_rgb_u8([0, 255, 10]), [255, 0, 245]);
        assert_eq!(cmy_to_rgb_u16([0, 65535, 1]), [65535, 0, 65534]);
    }

    #[test]
    fn test_byte_domain_matches_float_domain() {
        let cmyk = [64u8, 128, 192, 32];
        let via_bytes = cmyk_to_rgb_u8(cmyk);
        let via_float = cmyk_to_rgb(cmyk.map(|v| v as f32 / 255.0));
        for (b, f) in via_bytes.iter().zip(via_float.iter()) {
            assert!((*b as f32 / 255.0 - f).abs() < 1.0 / 255.0);
        }
    }

    #[test]
    fn test_clamped_before_requantization() {
        // Saturated inputs drive the intermediate below zero; the clamp
        // keeps the quantized result at the floor instead of wrapping.
        assert_eq!(cmyk_to_rgb_u8([255, 255, 255, 255]), [0, 0, 0]);
    }
}
