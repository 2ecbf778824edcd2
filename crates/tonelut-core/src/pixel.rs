//! Packed pixel words.
//!
//! A pixel is a `u32` laid out from most to least significant byte as
//! `[alpha:8][R:8][G:8][B:8]`. The top byte may hold alpha or nothing at
//! all; tone operations never change it.

/// Mask selecting the top (alpha) byte of a packed word.
pub const ALPHA_MASK: u32 = 0xFF00_0000;

/// Splits a packed word into `[a, r, g, b]`.
///
/// ```rust
/// use tonelut_core::unpack_argb;
///
/// assert_eq!(unpack_argb(0xFF80_4020), [0xFF, 0x80, 0x40, 0x20]);
/// ```
#[inline]
pub const fn unpack_argb(c: u32) -> [u8; 4] {
    c.to_be_bytes()
}

/// Joins `[a, r, g, b]` into a packed word.
#[inline]
pub const fn pack_argb(argb: [u8; 4]) -> u32 {
    u32::from_be_bytes(argb)
}

/// Remaps the three color bytes of `c` through `table`, keeping the top byte.
#[inline(always)]
pub fn remap_rgb(c: u32, table: &[u8; 256]) -> u32 {
    (c & ALPHA_MASK)
        | (table[(c >> 16 & 0xFF) as usize] as u32) << 16
        | (table[(c >> 8 & 0xFF) as usize] as u32) << 8
        | table[(c & 0xFF) as usize] as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let c = pack_argb([0x12, 0x34, 0x56, 0x78]);
        assert_eq!(c, 0x1234_5678);
        assert_eq!(unpack_argb(c), [0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_remap_keeps_alpha() {
        let mut invert = [0u8; 256];
        for (i, v) in invert.iter_mut().enumerate() {
            *v = 255 - i as u8;
        }
        assert_eq!(remap_rgb(0xAB00_FF10, &invert), 0xABFF_00EF);
        assert_eq!(remap_rgb(0x0000_0000, &invert), 0x00FF_FFFF);
    }
}
