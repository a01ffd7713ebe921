//! # pixfmt-convert
//!
//! Buffer-level pixel format conversion for the pixfmt workspace.
//!
//! The engine dispatches through an explicit routine table keyed by the
//! `(source, destination)` layout pair — absence of a pair is the
//! first-class `ConversionNotImplemented` outcome, never a fallback.
//! Four routine families cover the registered pairs:
//!
//! - **Reorder**: RGB <-> BGR channel reversal and packed-word field
//!   swaps; byte moves only
//! - **Precision**: widen by left shift, narrow by right shift,
//!   IEEE754 half encode/decode, float normalization
//! - **Color space**: sRGB gamma, CMY/CMYK collapse, grayscale
//!   broadcast (via `pixfmt-transfer`)
//! - **Alpha**: dropping and opaque adding
//!
//! Buffers are flat row-major memory; scanlines are independent and
//! run in parallel. See [`convert`] for the entry point and
//! [`is_conversion_supported`] for table membership.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod alpha;
mod engine;
mod gamma;
mod pix;
mod precision;
mod reorder;

pub use engine::{convert, is_conversion_supported};
