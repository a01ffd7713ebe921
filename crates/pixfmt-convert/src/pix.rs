//! Unaligned sample access within pixel chunks.
//!
//! Conversion routines walk byte buffers in pixel-sized chunks; these
//! helpers read and write multi-byte samples at channel positions
//! without assuming any alignment of the underlying buffer.

/// Reads the `c`-th 16-bit sample of a pixel chunk.
#[inline]
pub(crate) fn get_u16(pixel: &[u8], c: usize) -> u16 {
    bytemuck::pod_read_unaligned(&pixel[c * 2..c * 2 + 2])
}

/// Writes the `c`-th 16-bit sample of a pixel chunk.
#[inline]
pub(crate) fn put_u16(pixel: &mut [u8], c: usize, v: u16) {
    pixel[c * 2..c * 2 + 2].copy_from_slice(bytemuck::bytes_of(&v));
}

/// Reads the `c`-th 32-bit float sample of a pixel chunk.
#[inline]
pub(crate) fn get_f32(pixel: &[u8], c: usize) -> f32 {
    bytemuck::pod_read_unaligned(&pixel[c * 4..c * 4 + 4])
}

/// Writes the `c`-th 32-bit float sample of a pixel chunk.
#[inline]
pub(crate) fn put_f32(pixel: &mut [u8], c: usize, v: f32) {
    pixel[c * 4..c * 4 + 4].copy_from_slice(bytemuck::bytes_of(&v));
}

/// Reads the `c`-th 64-bit float sample of a pixel chunk.
#[inline]
pub(crate) fn get_f64(pixel: &[u8], c: usize) -> f64 {
    bytemuck::pod_read_unaligned(&pixel[c * 8..c * 8 + 8])
}

/// Writes the `c`-th 64-bit float sample of a pixel chunk.
#[inline]
pub(crate) fn put_f64(pixel: &mut [u8], c: usize, v: f64) {
    pixel[c * 8..c * 8 + 8].copy_from_slice(bytemuck::bytes_of(&v));
}

/// Reads a whole packed pixel word of 2 bytes.
#[inline]
pub(crate) fn get_word16(pixel: &[u8]) -> u16 {
    bytemuck::pod_read_unaligned(&pixel[..2])
}

/// Writes a whole packed pixel word of 2 bytes.
#[inline]
pub(crate) fn put_word16(pixel: &mut [u8], v: u16) {
    pixel[..2].copy_from_slice(bytemuck::bytes_of(&v));
}

/// Reads a whole packed pixel word of 4 bytes.
#[inline]
pub(crate) fn get_word32(pixel: &[u8]) -> u32 {
    bytemuck::pod_read_unaligned(&pixel[..4])
}

/// Writes a whole packed pixel word of 4 bytes.
#[inline]
pub(crate) fn put_word32(pixel: &mut [u8], v: u32) {
    pixel[..4].copy_from_slice(bytemuck::bytes_of(&v));
}

/// Quantizes a normalized float to a byte with saturating rounding.
#[inline]
pub(crate) fn quantize_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Quantizes a normalized float to a short with saturating rounding.
#[inline]
pub(crate) fn quantize_u16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}
