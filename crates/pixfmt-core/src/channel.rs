//! Channel descriptors: names, native stores and sample values.
//!
//! The per-format struct zoo of a classical pixel library collapses here
//! into data: every registered layout owns a static table of
//! [`ChannelDesc`] entries, and one generic accessor
//! ([`crate::color::ColorValue`]) interprets the table. A descriptor
//! says what a channel is called and how it is stored — a whole scalar
//! (`u8`/`u16`/`i16`/`f16`/`f32`/`f64`) or a bit field packed into the
//! pixel word.

use half::f16;
use std::fmt;

/// Semantic name of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelName {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Alpha.
    Alpha,
    /// Cyan.
    Cyan,
    /// Magenta.
    Magenta,
    /// Yellow.
    Yellow,
    /// Black (the K of CMYK).
    Black,
    /// Grayscale level.
    Level,
}

/// Native storage of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStore {
    /// Unsigned byte.
    U8,
    /// Unsigned short.
    U16,
    /// Signed short, normalized to −1..1.
    I16,
    /// IEEE754 half-float.
    F16,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Bit field inside the layout's packed pixel word.
    Packed {
        /// Bit offset of the field within the word.
        offset: u8,
        /// Field width in bits.
        width: u8,
    },
}

impl ChannelStore {
    /// Bits of precision the store carries.
    #[inline]
    pub const fn bits(&self) -> u8 {
        match self {
            Self::U8 => 8,
            Self::U16 | Self::I16 | Self::F16 => 16,
            Self::F32 => 32,
            Self::F64 => 64,
            Self::Packed { width, .. } => *width,
        }
    }

    /// Bytes a whole-scalar store occupies; `None` for packed fields.
    #[inline]
    pub const fn scalar_size(&self) -> Option<usize> {
        match self {
            Self::U8 => Some(1),
            Self::U16 | Self::I16 | Self::F16 => Some(2),
            Self::F32 => Some(4),
            Self::F64 => Some(8),
            Self::Packed { .. } => None,
        }
    }

    /// Whether normalized values for this store span −1..1 instead of 0..1.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::I16)
    }

    /// Bits of the container a packed field is addressed through.
    ///
    /// Fields up to 8 bits wide exchange native values as bytes, wider
    /// fields as shorts. Irrelevant for whole-scalar stores.
    #[inline]
    pub const fn container_bits(&self) -> u8 {
        match self {
            Self::Packed { width, .. } if *width <= 8 => 8,
            Self::Packed { .. } => 16,
            _ => 0,
        }
    }

    /// Name of the native sample kind this store exchanges.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Packed { width, .. } if *width <= 8 => "u8",
            Self::Packed { .. } => "u16",
        }
    }
}

/// One channel of a pixel layout: name plus native store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelDesc {
    /// Semantic name.
    pub name: ChannelName,
    /// Native storage.
    pub store: ChannelStore,
}

impl ChannelDesc {
    /// Shorthand constructor for the static descriptor tables.
    #[inline]
    pub const fn new(name: ChannelName, store: ChannelStore) -> Self {
        Self { name, store }
    }
}

/// A channel value in its native unit.
///
/// Packed bit fields exchange their value through the container byte or
/// short, field bits at the top and low bits zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Unsigned byte value.
    U8(u8),
    /// Unsigned short value.
    U16(u16),
    /// Signed short value.
    I16(i16),
    /// Half-float value.
    F16(f16),
    /// 32-bit float value.
    F32(f32),
    /// 64-bit float value.
    F64(f64),
}

impl Sample {
    /// Name of the carried kind, for error reporting.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::I16(_) => "i16",
            Self::F16(_) => "f16",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}u8"),
            Self::U16(v) => write!(f, "{v}u16"),
            Self::I16(v) => write!(f, "{v}i16"),
            Self::F16(v) => write!(f, "{v}f16"),
            Self::F32(v) => write!(f, "{v}f32"),
            Self::F64(v) => write!(f, "{v}f64"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_bits() {
        assert_eq!(ChannelStore::U8.bits(), 8);
        assert_eq!(ChannelStore::F64.bits(), 64);
        assert_eq!(ChannelStore::Packed { offset: 5, width: 3 }.bits(), 3);
    }

    #[test]
    fn test_packed_container() {
        let narrow = ChannelStore::Packed { offset: 0, width: 5 };
        let wide = ChannelStore::Packed { offset: 2, width: 10 };
        assert_eq!(narrow.container_bits(), 8);
        assert_eq!(wide.container_bits(), 16);
        assert_eq!(narrow.kind_name(), "u8");
        assert_eq!(wide.kind_name(), "u16");
    }

    #[test]
    fn test_signed_store() {
        assert!(ChannelStore::I16.is_signed());
        assert!(!ChannelStore::U16.is_signed());
    }
}
