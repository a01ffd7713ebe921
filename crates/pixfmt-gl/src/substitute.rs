//! Best-fit format substitution.
//!
//! When a layout is not natively usable, [`guess_best_substitute`]
//! searches for a supported stand-in that the conversion engine can
//! actually reach. Candidates are gathered by color model — first the
//! identical model, then its equivalents in a fixed preference order —
//! and ranked by precision: the closest non-narrowing candidate wins,
//! and narrowing is only accepted when nothing wider exists. Ties
//! resolve in [`PixelLayout::ALL`] declaration order.
//!
//! Integer formats never substitute: normalized stand-ins would
//! silently change their sampling semantics, so the search returns
//! `None` for them immediately.

use crate::caps::CapabilitySet;
use crate::support::is_supported_internal;
use pixfmt_core::{ColorModel, FormatInfo, PixelLayout, registry};
use pixfmt_convert::is_conversion_supported;

/// Models an original model may fall back to, in preference order.
fn equivalents(model: ColorModel) -> &'static [ColorModel] {
    use ColorModel as M;
    match model {
        M::Rgb => &[M::Bgr],
        M::Bgr => &[M::Rgb],
        M::SRgb | M::SBgr => &[M::Rgb],
        M::Gray | M::GrayAlpha => &[M::Rgb, M::Bgr],
        M::Cmy | M::Cmyk | M::Cmyka => &[M::Rgb, M::Bgr],
        M::Depth | M::DepthStencil | M::Integer => &[],
    }
}

/// Proposes the hardware-supported layout that best stands in for
/// `layout`, or `None` when nothing reachable is supported.
///
/// A candidate must be internally supported under `caps` and reachable
/// through a registered conversion routine from `layout`.
///
/// # Example
///
/// ```
/// use pixfmt_core::PixelLayout;
/// use pixfmt_gl::{CapabilitySet, guess_best_substitute};
///
/// // CMYK has no native storage anywhere; plain RGB stands in.
/// let sub = guess_best_substitute(PixelLayout::Cmyk32, CapabilitySet::all());
/// assert_eq!(sub, Some(PixelLayout::Rgb24));
/// ```
pub fn guess_best_substitute(layout: PixelLayout, caps: CapabilitySet) -> Option<PixelLayout> {
    if layout.is_integer() {
        return None;
    }
    let info = registry::lookup(layout).ok()?;
    let src_bits = u32::from(info.max_channel_bits());
    let src_channels = info.bits.len();

    let mut chain = vec![info.model];
    chain.extend_from_slice(equivalents(info.model));

    for model in chain {
        let best = PixelLayout::ALL
            .iter()
            .filter(|&&cand| cand != layout)
            .filter_map(|&cand| registry::lookup(cand).ok())
            .filter(|ci| ci.model == model)
            .filter(|ci| is_supported_internal(ci.layout, caps))
            .filter(|ci| is_conversion_supported(layout, ci.layout))
            .min_by_key(|ci| penalty(src_bits, src_channels, ci));
        if let Some(found) = best {
            return Some(found.layout);
        }
    }
    None
}

/// Precision-loss ranking: any widening beats any narrowing, smaller
/// width changes beat larger ones, matching channel counts break ties.
fn penalty(src_bits: u32, src_channels: usize, cand: &FormatInfo) -> (u32, u32) {
    let cand_bits = u32::from(cand.max_channel_bits());
    let bits = if cand_bits >= src_bits {
        cand_bits - src_bits
    } else {
        // Offset past any possible widening distance.
        256 + (src_bits - cand_bits)
    };
    let channels = (cand.bits.len() as i32 - src_channels as i32).unsigned_abs();
    (bits, channels)
}
