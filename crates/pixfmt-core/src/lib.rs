//! # pixfmt-core
//!
//! Pixel format description for GL pixel transfer: the format tag set,
//! the static per-format registry, and the parametric color value model.
//!
//! This crate is the foundation of the pixfmt workspace and has no
//! internal dependencies. The other members build on it:
//!
//! ```text
//! pixfmt-core (this crate)
//!    ^
//!    |
//!    +-- pixfmt-transfer (color-space transforms)
//!    +-- pixfmt-convert (buffer conversion engine)
//!    +-- pixfmt-gl (capability oracle, GL enum tables)
//! ```
//!
//! ## Lifecycle
//!
//! The format registry is built exactly once, on first use, into an
//! immutable map; initialization completes-before any lookup and the
//! map is never mutated afterwards, so concurrent read-only lookups are
//! safe without locking.
//!
//! ## Feature Flags
//!
//! - `serde` - serialization for the public tag types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod color;
pub mod error;
pub mod layout;
pub mod registry;

pub use channel::{ChannelDesc, ChannelName, ChannelStore, Sample};
pub use color::{ColorValue, MAX_PIXEL_BYTES};
pub use error::{Error, Result};
pub use layout::{ColorModel, PixelLayout};
pub use registry::{FormatInfo, is_registered, lookup};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixfmt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{ChannelName, ChannelStore, Sample};
    pub use crate::color::ColorValue;
    pub use crate::error::{Error, Result};
    pub use crate::layout::{ColorModel, PixelLayout};
    pub use crate::registry::{FormatInfo, lookup};
}
