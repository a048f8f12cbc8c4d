/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - Matches the premultiplied blend state used by the mesh renderer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Decodes a packed 32-bit vertex color.
    ///
    /// Bytes are taken in little-endian memory order as R, G, B, A, so the
    /// literal reads `0xAABBGGRR`: `0xFF0000FF` is opaque red.
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_le_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Opaque color from a `0xRRGGBB` hex literal.
    #[inline]
    pub fn from_hex_rgb(rgb: u32) -> Self {
        let [_, r, g, b] = rgb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn packed_reads_low_byte_as_red() {
        let c = Color::from_packed(0xFF00_00FF);
        assert_eq!(c, Color::from_premul(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn packed_alpha_premultiplies() {
        // a = 0x80, r = 0xFF
        let c = Color::from_packed(0x8000_00FF);
        let a = 128.0 / 255.0;
        assert!(close(c.a, a));
        assert!(close(c.r, a));
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn hex_rgb_is_opaque() {
        let c = Color::from_hex_rgb(0x00FF00);
        assert_eq!(c, Color::from_premul(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn straight_round_trip() {
        let c = Color::from_straight(0.5, 0.25, 1.0, 0.5);
        let (r, g, b, a) = c.to_straight();
        assert!(close(r, 0.5) && close(g, 0.25) && close(b, 1.0) && close(a, 0.5));
    }

    #[test]
    fn zero_alpha_straight_is_black() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}
