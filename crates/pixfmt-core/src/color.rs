//! The parametric color value model.
//!
//! [`ColorValue`] is one pixel of any registered layout, interpreted
//! through the layout's channel descriptor table. It replaces a
//! per-format family of value structs with a single type: the
//! descriptors say where each channel lives and how it is stored, and
//! the accessors do the rest.
//!
//! # Accessor contract
//!
//! For a value of a `k`-channel layout, `get(i)`/`set(i, x)` for
//! `0 <= i < k` exchange the i-th channel as a normalized float —
//! `0.0..=1.0` for unsigned stores, `-1.0..=1.0` for the signed
//! grayscale store. Channel order is the descriptor order, which
//! follows the layout's color model: a BGR layout yields Blue at
//! index 0. An index outside `[0, k)` is
//! [`InvalidChannelIndex`](Error::InvalidChannelIndex); a write outside
//! the valid range is [`OutOfRange`](Error::OutOfRange) and is never
//! silently clamped.
//!
//! # Packed fields
//!
//! Writes into bit-packed fields are read-modify-write: the field's
//! mask is cleared, then the new value is shifted into place and ORed
//! in. A field consumes the top `width` bits of its container byte or
//! short — the low bits are lost by design, and native reads return
//! the field shifted back up with deterministic zero low bits.

use crate::channel::{ChannelDesc, ChannelName, ChannelStore, Sample};
use crate::error::{Error, Result};
use crate::layout::PixelLayout;
use crate::registry::{self, FormatInfo};
use half::f16;

/// Largest pixel any layout occupies (`RgbaD`: four f64 channels).
pub const MAX_PIXEL_BYTES: usize = 32;

/// One pixel of a registered layout, with normalized and native-unit
/// channel access.
///
/// # Example
///
/// ```
/// use pixfmt_core::{ColorValue, PixelLayout};
///
/// let mut v = ColorValue::new(PixelLayout::Bgr24)?;
/// v.set(0, 1.0)?; // Blue is index 0 in a BGR layout
/// assert_eq!(v.as_bytes()[0], 0xFF);
/// # Ok::<(), pixfmt_core::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct ColorValue {
    info: &'static FormatInfo,
    bytes: [u8; MAX_PIXEL_BYTES],
}

impl ColorValue {
    /// Creates a zeroed value of the given layout.
    ///
    /// Fails with [`Error::UnknownFormat`] for unregistered tags.
    pub fn new(layout: PixelLayout) -> Result<Self> {
        let info = registry::lookup(layout)?;
        Ok(Self {
            info,
            bytes: [0; MAX_PIXEL_BYTES],
        })
    }

    /// Creates a value from one raw pixel.
    ///
    /// `bytes` must be exactly the layout's pixel size.
    pub fn from_bytes(layout: PixelLayout, bytes: &[u8]) -> Result<Self> {
        let info = registry::lookup(layout)?;
        if bytes.len() != info.bytes_per_pixel {
            return Err(Error::buffer_too_small(
                "pixel",
                info.bytes_per_pixel,
                bytes.len(),
            ));
        }
        let mut value = Self {
            info,
            bytes: [0; MAX_PIXEL_BYTES],
        };
        value.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(value)
    }

    /// The layout tag of this value.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.info.layout
    }

    /// The registered metadata backing this value.
    #[inline]
    pub fn info(&self) -> &'static FormatInfo {
        self.info
    }

    /// Number of addressable channels.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.info.channels.len()
    }

    /// The raw pixel bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.info.bytes_per_pixel]
    }

    /// Index of the channel carrying `name`, if the layout has one.
    pub fn channel_index(&self, name: ChannelName) -> Option<usize> {
        self.info.channels.iter().position(|c| c.name == name)
    }

    /// Reads channel `i` as a normalized float.
    pub fn get(&self, i: usize) -> Result<f32> {
        let desc = self.desc(i)?;
        Ok(match desc.store {
            ChannelStore::U8 => self.bytes[self.offset(i)] as f32 / 255.0,
            ChannelStore::U16 => self.read_u16(i) as f32 / 65535.0,
            ChannelStore::I16 => self.read_u16(i) as i16 as f32 / 32767.0,
            ChannelStore::F16 => f16::from_bits(self.read_u16(i)).to_f32(),
            ChannelStore::F32 => self.read_f32(i),
            ChannelStore::F64 => self.read_f64(i) as f32,
            ChannelStore::Packed { offset, width } => {
                let max = (1u32 << width) - 1;
                ((self.word() >> offset) & max) as f32 / max as f32
            }
        })
    }

    /// Writes channel `i` from a normalized float.
    ///
    /// The value is quantized with saturating rounding
    /// (`byte = round(0xFF * x)`); packed fields quantize at their
    /// container width first and then keep the top `width` bits.
    pub fn set(&mut self, i: usize, x: f32) -> Result<()> {
        let desc = self.desc(i)?;
        let (min, max) = if desc.store.is_signed() {
            (-1.0, 1.0)
        } else {
            (0.0, 1.0)
        };
        if !(x >= min && x <= max) {
            return Err(Error::out_of_range(x, min, max));
        }
        match desc.store {
            ChannelStore::U8 => {
                self.bytes[self.offset(i)] = (x * 255.0).round() as u8;
            }
            ChannelStore::U16 => self.write_u16(i, (x * 65535.0).round() as u16),
            ChannelStore::I16 => self.write_u16(i, ((x * 32767.0).round() as i16) as u16),
            ChannelStore::F16 => self.write_u16(i, f16::from_f32(x).to_bits()),
            ChannelStore::F32 => self.write_f32(i, x),
            ChannelStore::F64 => self.write_f64(i, x as f64),
            ChannelStore::Packed { offset, width } => {
                let cbits = desc.store.container_bits() as u32;
                let cmax = ((1u64 << cbits) - 1) as f32;
                let quantized = (x * cmax).round() as u32;
                let field = quantized >> (cbits - width as u32);
                self.store_field(offset, width, field);
            }
        }
        Ok(())
    }

    /// Reads the channel carrying `name` in its native unit.
    ///
    /// Packed fields come back through their container byte or short,
    /// field bits at the top, low bits zero.
    pub fn get_named(&self, name: ChannelName) -> Result<Sample> {
        let i = self
            .channel_index(name)
            .ok_or(Error::NoSuchChannel {
                layout: self.info.layout,
                name,
            })?;
        let desc = self.desc(i)?;
        Ok(match desc.store {
            ChannelStore::U8 => Sample::U8(self.bytes[self.offset(i)]),
            ChannelStore::U16 => Sample::U16(self.read_u16(i)),
            ChannelStore::I16 => Sample::I16(self.read_u16(i) as i16),
            ChannelStore::F16 => Sample::F16(f16::from_bits(self.read_u16(i))),
            ChannelStore::F32 => Sample::F32(self.read_f32(i)),
            ChannelStore::F64 => Sample::F64(self.read_f64(i)),
            ChannelStore::Packed { offset, width } => {
                let max = (1u32 << width) - 1;
                let field = (self.word() >> offset) & max;
                if width <= 8 {
                    Sample::U8((field << (8 - width)) as u8)
                } else {
                    Sample::U16((field << (16 - width)) as u16)
                }
            }
        })
    }

    /// Writes the channel carrying `name` from its native unit.
    ///
    /// The sample kind must match the channel's store; packed fields
    /// take the top `width` bits of the supplied byte or short.
    pub fn set_named(&mut self, name: ChannelName, sample: Sample) -> Result<()> {
        let i = self
            .channel_index(name)
            .ok_or(Error::NoSuchChannel {
                layout: self.info.layout,
                name,
            })?;
        let desc = self.desc(i)?;
        let mismatch = || Error::ChannelKindMismatch {
            expected: desc.store.kind_name(),
            got: sample.kind_name(),
        };
        match (desc.store, sample) {
            (ChannelStore::U8, Sample::U8(v)) => {
                let off = self.offset(i);
                self.bytes[off] = v;
            }
            (ChannelStore::U16, Sample::U16(v)) => self.write_u16(i, v),
            (ChannelStore::I16, Sample::I16(v)) => self.write_u16(i, v as u16),
            (ChannelStore::F16, Sample::F16(v)) => self.write_u16(i, v.to_bits()),
            (ChannelStore::F32, Sample::F32(v)) => self.write_f32(i, v),
            (ChannelStore::F64, Sample::F64(v)) => self.write_f64(i, v),
            (ChannelStore::Packed { offset, width }, Sample::U8(v)) if width <= 8 => {
                self.store_field(offset, width, (v >> (8 - width)) as u32);
            }
            (ChannelStore::Packed { offset, width }, Sample::U16(v)) if width > 8 => {
                self.store_field(offset, width, (v >> (16 - width)) as u32);
            }
            _ => return Err(mismatch()),
        }
        Ok(())
    }

    fn desc(&self, i: usize) -> Result<&'static ChannelDesc> {
        self.info
            .channels
            .get(i)
            .ok_or(Error::invalid_channel(i, self.info.channels.len()))
    }

    /// Byte offset of whole-scalar channel `i`.
    fn offset(&self, i: usize) -> usize {
        self.info.channels[..i]
            .iter()
            .map(|c| c.store.scalar_size().unwrap_or(0))
            .sum()
    }

    fn read_u16(&self, i: usize) -> u16 {
        let off = self.offset(i);
        u16::from_ne_bytes([self.bytes[off], self.bytes[off + 1]])
    }

    fn write_u16(&mut self, i: usize, v: u16) {
        let off = self.offset(i);
        self.bytes[off..off + 2].copy_from_slice(&v.to_ne_bytes());
    }

    fn read_f32(&self, i: usize) -> f32 {
        let off = self.offset(i);
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.bytes[off..off + 4]);
        f32::from_ne_bytes(raw)
    }

    fn write_f32(&mut self, i: usize, v: f32) {
        let off = self.offset(i);
        self.bytes[off..off + 4].copy_from_slice(&v.to_ne_bytes());
    }

    fn read_f64(&self, i: usize) -> f64 {
        let off = self.offset(i);
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&self.bytes[off..off + 8]);
        f64::from_ne_bytes(raw)
    }

    fn write_f64(&mut self, i: usize, v: f64) {
        let off = self.offset(i);
        self.bytes[off..off + 8].copy_from_slice(&v.to_ne_bytes());
    }

    /// The packed pixel word (layouts of 1, 2 or 4 bytes).
    fn word(&self) -> u32 {
        match self.info.bytes_per_pixel {
            1 => self.bytes[0] as u32,
            2 => u16::from_ne_bytes([self.bytes[0], self.bytes[1]]) as u32,
            _ => u32::from_ne_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]]),
        }
    }

    fn set_word(&mut self, word: u32) {
        match self.info.bytes_per_pixel {
            1 => self.bytes[0] = word as u8,
            2 => self.bytes[..2].copy_from_slice(&(word as u16).to_ne_bytes()),
            _ => self.bytes[..4].copy_from_slice(&word.to_ne_bytes()),
        }
    }

    /// Read-modify-write of one packed field: clear the mask, OR the
    /// shifted value in.
    fn store_field(&mut self, offset: u8, width: u8, field: u32) {
        let mask = ((1u32 << width) - 1) << offset;
        let mut word = self.word();
        word &= !mask;
        word |= (field << offset) & mask;
        self.set_word(word);
    }
}

impl std::fmt::Debug for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorValue")
            .field("layout", &self.info.layout)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}
