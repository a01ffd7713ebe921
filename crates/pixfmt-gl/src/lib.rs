//! # pixfmt-gl
//!
//! The GL-facing side of the pixfmt workspace: the capability oracle
//! and the native enumerant tables.
//!
//! A graphics context probes its driver once and hands the resulting
//! [`CapabilitySet`] in; everything here is then a pure classification:
//!
//! - [`is_supported_internal`] / [`is_supported_transfer`] - can this
//!   layout be stored / transferred natively?
//! - [`is_valid_upload_pair`] - may these two layouts be used together
//!   for an upload?
//! - [`guess_best_substitute`] - which supported layout stands in for
//!   an unsupported one with the least precision loss?
//! - [`internal_format_of`] / [`transfer_format_of`] /
//!   [`transfer_type_of`] - the GL constants a binding passes through
//!
//! The oracle is consulted *before* any upload or download: a
//! conversion the engine refuses is never papered over here, and a
//! format the driver refuses is never sent to it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod caps;
mod enums;
mod substitute;
mod support;

pub use caps::CapabilitySet;
pub use enums::{internal_format_of, transfer_format_of, transfer_type_of};
pub use substitute::guess_best_substitute;
pub use support::{is_supported_internal, is_supported_transfer, is_valid_upload_pair};
