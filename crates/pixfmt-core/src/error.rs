//! Error types for pixel format operations.
//!
//! Every failure in this layer is synchronous and final: nothing here is
//! transient, nothing is retried, and no partial results are reported. A
//! failed operation leaves caller-owned buffers in an unspecified state
//! rather than silently half-written.
//!
//! # Categories
//!
//! - **Registry**: [`UnknownFormat`](Error::UnknownFormat)
//! - **Engine**: [`ConversionNotImplemented`](Error::ConversionNotImplemented),
//!   [`BufferTooSmall`](Error::BufferTooSmall)
//! - **Channel access**: [`InvalidChannelIndex`](Error::InvalidChannelIndex),
//!   [`OutOfRange`](Error::OutOfRange),
//!   [`ChannelKindMismatch`](Error::ChannelKindMismatch)
//!
//! The channel access variants are caller programming errors and are
//! surfaced immediately — values are never silently clamped into range.

use crate::channel::ChannelName;
use crate::layout::PixelLayout;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the format registry, the color value model and the
/// conversion engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The layout tag has no entry in the format registry.
    ///
    /// Fatal to the call; an unregistered tag cannot be described, so
    /// there is nothing to retry.
    #[error("no format registered for layout {layout}")]
    UnknownFormat {
        /// The unregistered tag.
        layout: PixelLayout,
    },

    /// No conversion routine is registered for the layout pair.
    ///
    /// Absence is a first-class outcome, not a hint to guess: callers
    /// must pick another pair via the capability oracle instead of
    /// assuming a fallback exists.
    #[error("no conversion routine registered for {src} -> {dst}")]
    ConversionNotImplemented {
        /// Source layout of the rejected pair.
        src: PixelLayout,
        /// Destination layout of the rejected pair.
        dst: PixelLayout,
    },

    /// A channel index outside `[0, channels)` was used.
    #[error("channel index {index} out of range for {channels}-channel value")]
    InvalidChannelIndex {
        /// The offending index.
        index: usize,
        /// Number of channels the value actually has.
        channels: usize,
    },

    /// A normalized channel write was outside the valid range.
    ///
    /// Unsigned stores accept `0.0..=1.0`, the signed grayscale store
    /// accepts `-1.0..=1.0`.
    #[error("normalized value {value} outside valid range [{min}, {max}]")]
    OutOfRange {
        /// The rejected value.
        value: f32,
        /// Lower bound of the valid range.
        min: f32,
        /// Upper bound of the valid range.
        max: f32,
    },

    /// A named channel access referenced a channel the layout lacks.
    #[error("layout {layout} has no {name:?} channel")]
    NoSuchChannel {
        /// Layout that was accessed.
        layout: PixelLayout,
        /// The absent channel name.
        name: ChannelName,
    },

    /// A named channel write carried a sample of the wrong native kind.
    #[error("channel expects a {expected} sample, got {got}")]
    ChannelKindMismatch {
        /// Native kind the channel stores.
        expected: &'static str,
        /// Kind the caller supplied.
        got: &'static str,
    },

    /// A caller-owned buffer is too small for the requested extent.
    #[error("{side} buffer holds {got} bytes, extent requires {expected}")]
    BufferTooSmall {
        /// Which buffer was short ("source" or "destination").
        side: &'static str,
        /// Bytes required by the `width * height` extent.
        expected: usize,
        /// Bytes actually supplied.
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::UnknownFormat`].
    #[inline]
    pub fn unknown_format(layout: PixelLayout) -> Self {
        Self::UnknownFormat { layout }
    }

    /// Creates an [`Error::ConversionNotImplemented`].
    #[inline]
    pub fn not_implemented(src: PixelLayout, dst: PixelLayout) -> Self {
        Self::ConversionNotImplemented { src, dst }
    }

    /// Creates an [`Error::InvalidChannelIndex`].
    #[inline]
    pub fn invalid_channel(index: usize, channels: usize) -> Self {
        Self::InvalidChannelIndex { index, channels }
    }

    /// Creates an [`Error::OutOfRange`].
    #[inline]
    pub fn out_of_range(value: f32, min: f32, max: f32) -> Self {
        Self::OutOfRange { value, min, max }
    }

    /// Creates an [`Error::BufferTooSmall`].
    #[inline]
    pub fn buffer_too_small(side: &'static str, expected: usize, got: usize) -> Self {
        Self::BufferTooSmall {
            side,
            expected,
            got,
        }
    }

    /// Returns `true` for the channel-access caller errors.
    #[inline]
    pub fn is_access_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidChannelIndex { .. }
                | Self::OutOfRange { .. }
                | Self::NoSuchChannel { .. }
                | Self::ChannelKindMismatch { .. }
        )
    }

    /// Returns `true` if this is the missing-routine outcome.
    #[inline]
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::ConversionNotImplemented { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_layout_names() {
        let err = Error::unknown_format(PixelLayout::Yuyv);
        assert!(err.to_string().contains("yuyv"));

        let err = Error::not_implemented(PixelLayout::DepthF, PixelLayout::Cmyk32);
        let msg = err.to_string();
        assert!(msg.contains("depthf"));
        assert!(msg.contains("cmyk32"));
        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_access_error_class() {
        assert!(Error::invalid_channel(4, 3).is_access_error());
        assert!(Error::out_of_range(1.5, 0.0, 1.0).is_access_error());
        assert!(!Error::buffer_too_small("source", 12, 4).is_access_error());
    }
}
