//! Integration tests for the pixfmt workspace.
//!
//! These tests exercise the crates together: the registry and color
//! value model feeding the conversion engine, and the capability
//! oracle steering format choices the engine can actually satisfy.

#[cfg(test)]
mod tests {
    use half::f16;
    use pixfmt_convert::{convert, is_conversion_supported};
    use pixfmt_core::{ChannelName, ColorValue, Error, PixelLayout, Sample};
    use pixfmt_gl::{
        CapabilitySet, guess_best_substitute, internal_format_of, is_supported_internal,
        is_valid_upload_pair, transfer_format_of, transfer_type_of,
    };
    use pixfmt_transfer::srgb;

    /// Pure channel reorder loses nothing: rgb -> bgr -> rgb is the
    /// identity for every input byte pattern.
    #[test]
    fn test_reorder_roundtrip_identity() {
        let width = 16u32;
        let height = 16u32;
        let src: Vec<u8> = (0..width * height * 3).map(|i| (i * 7 % 256) as u8).collect();
        let mut bgr = vec![0u8; src.len()];
        let mut back = vec![0u8; src.len()];
        convert(&src, PixelLayout::Rgb24, &mut bgr, PixelLayout::Bgr24, width, height).unwrap();
        convert(&bgr, PixelLayout::Bgr24, &mut back, PixelLayout::Rgb24, width, height).unwrap();
        assert_eq!(back, src);
    }

    /// Both branches of the piecewise sRGB curve survive a round trip
    /// within 1e-3.
    #[test]
    fn test_srgb_roundtrip_tolerance() {
        for c in [0.001_f32, 0.003138, 0.01, 0.5, 1.0] {
            let back = srgb::decode(srgb::encode(c));
            assert!((back - c).abs() < 1e-3, "c={c}, back={back}");
        }
    }

    /// The engine applies the same curve per pixel. Linear bytes
    /// survive encode-then-decode nearly exactly; the reverse direction
    /// is lossy near black, where many sRGB codes share one linear
    /// byte, so this is the direction with a tight bound.
    #[test]
    fn test_srgb_engine_roundtrip_on_linear_bytes() {
        let src: Vec<u8> = (0..=255).flat_map(|v| [v, v, v]).collect();
        let mut encoded = vec![0u8; src.len()];
        let mut back = vec![0u8; src.len()];
        convert(&src, PixelLayout::Rgb24, &mut encoded, PixelLayout::Srgb24, 256, 1).unwrap();
        convert(&encoded, PixelLayout::Srgb24, &mut back, PixelLayout::Rgb24, 256, 1).unwrap();
        for (s, b) in src.iter().zip(back.iter()) {
            assert!(s.abs_diff(*b) <= 2, "linear byte {s} came back as {b}");
        }
    }

    #[test]
    fn test_cmyk_identity_cases_via_engine() {
        let src = [
            0u8, 0, 0, 0, // no ink: white
            0, 0, 0, 255, // full black component
            255, 0, 0, 0, // pure cyan
        ];
        let mut rgb = [0u8; 9];
        convert(&src, PixelLayout::Cmyk32, &mut rgb, PixelLayout::Rgb24, 3, 1).unwrap();
        assert_eq!(rgb, [255, 255, 255, 0, 0, 0, 0, 255, 255]);
    }

    /// Setting a 3-bit packed red from a normalized float keeps the top
    /// three bits of the quantized byte and zeroes the rest.
    #[test]
    fn test_bit_packed_boundary_truncation() {
        for x in [0.0_f32, 0.2, 0.5, 0.7, 1.0] {
            let mut v = ColorValue::new(PixelLayout::Rgb8).unwrap();
            v.set(0, x).unwrap();
            let quantized = (x * 255.0).round() as u8;
            match v.get_named(ChannelName::Red).unwrap() {
                Sample::U8(red) => {
                    assert_eq!(red & 0b1110_0000, quantized & 0b1110_0000, "x={x}");
                    assert_eq!(red & 0b0001_1111, 0, "x={x}");
                }
                other => panic!("expected a byte sample, got {other}"),
            }
        }
    }

    #[test]
    fn test_range_validation() {
        let mut v = ColorValue::new(PixelLayout::Rgba32).unwrap();
        assert!(matches!(v.set(0, 1.5), Err(Error::OutOfRange { .. })));
        assert!(matches!(
            v.get(4),
            Err(Error::InvalidChannelIndex {
                index: 4,
                channels: 4
            })
        ));
    }

    /// Integer data never uploads into a normalized internal format,
    /// regardless of what the context supports.
    #[test]
    fn test_capability_gating_integer_mismatch() {
        for caps in [
            CapabilitySet::empty(),
            CapabilitySet::TEXTURE_INTEGER,
            CapabilitySet::all(),
        ] {
            assert!(!is_valid_upload_pair(
                PixelLayout::Integer1,
                PixelLayout::RgbF,
                caps
            ));
        }
    }

    #[test]
    fn test_unsupported_pair_is_first_class() {
        let src = vec![0u8; PixelLayout::DepthF.buffer_len(2, 2)];
        let mut dst = vec![0u8; PixelLayout::Cmyk32.buffer_len(2, 2)];
        let err = convert(&src, PixelLayout::DepthF, &mut dst, PixelLayout::Cmyk32, 2, 2)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ConversionNotImplemented {
                src: PixelLayout::DepthF,
                dst: PixelLayout::Cmyk32
            }
        ));
    }

    /// The substitute search returns ranked candidates (the selection
    /// step is live); integer formats are the one hard None.
    #[test]
    fn test_substitute_selection_is_live() {
        let caps = CapabilitySet::empty();
        assert_eq!(
            guess_best_substitute(PixelLayout::Cmyk32, caps),
            Some(PixelLayout::Rgb24)
        );
        assert_eq!(guess_best_substitute(PixelLayout::Integer3, caps), None);
    }

    /// End to end: the oracle proposes a substitute the engine can
    /// reach and the driver can store, and the conversion produces the
    /// expected pixels.
    #[test]
    fn test_substitution_flow() {
        let caps = CapabilitySet::empty();
        let src_layout = PixelLayout::Cmy24;
        assert!(!is_supported_internal(src_layout, caps));

        let substitute = guess_best_substitute(src_layout, caps).unwrap();
        assert!(is_supported_internal(substitute, caps));
        assert!(is_conversion_supported(src_layout, substitute));

        let cmy = [0u8, 255, 10];
        let mut out = vec![0u8; substitute.buffer_len(1, 1)];
        convert(&cmy, src_layout, &mut out, substitute, 1, 1).unwrap();
        assert_eq!(out, [255, 0, 245]);

        // The chosen stand-in also has a complete GL mapping.
        assert!(internal_format_of(substitute, caps).is_some());
        assert!(transfer_format_of(substitute).is_some());
        assert!(transfer_type_of(substitute).is_some());
    }

    /// Half-float buffers decode through IEEE754 halves.
    #[test]
    fn test_half_float_precision_chain() {
        let halves: Vec<u8> = [0.25_f32, 0.5, 1.0]
            .iter()
            .flat_map(|&v| f16::from_f32(v).to_bits().to_ne_bytes())
            .collect();
        let mut singles = vec![0u8; 12];
        convert(&halves, PixelLayout::RgbHF, &mut singles, PixelLayout::RgbF, 1, 1).unwrap();
        let red = f32::from_ne_bytes([singles[0], singles[1], singles[2], singles[3]]);
        let blue = f32::from_ne_bytes([singles[8], singles[9], singles[10], singles[11]]);
        assert_eq!(red, 0.25);
        assert_eq!(blue, 1.0);
    }

    /// A pixel poked through the color value model and pushed through
    /// the engine agrees with itself.
    #[test]
    fn test_color_value_feeds_the_engine() {
        let mut v = ColorValue::new(PixelLayout::Rgb16).unwrap();
        v.set(0, 1.0).unwrap();
        v.set(1, 0.5).unwrap();
        v.set(2, 0.0).unwrap();

        let mut rgb = [0u8; 3];
        convert(v.as_bytes(), PixelLayout::Rgb16, &mut rgb, PixelLayout::Rgb24, 1, 1).unwrap();
        // Widening is a shift, so the 5-bit red unpacks with low bits
        // clear and the 6-bit green lands within one step of half.
        assert_eq!(rgb[0], 0b1111_1000);
        assert!(rgb[1].abs_diff(128) <= 4);
        assert_eq!(rgb[2], 0);
    }

    /// Upload pairing composes individual support with family
    /// agreement.
    #[test]
    fn test_upload_pair_flow() {
        let caps = CapabilitySet::DEPTH_TEXTURE;
        assert!(is_valid_upload_pair(
            PixelLayout::Depth16,
            PixelLayout::Depth24,
            caps
        ));
        assert!(!is_valid_upload_pair(
            PixelLayout::Depth16,
            PixelLayout::Rgb24,
            caps
        ));
        assert!(!is_valid_upload_pair(
            PixelLayout::Depth16,
            PixelLayout::Depth24,
            CapabilitySet::empty()
        ));
    }
}
