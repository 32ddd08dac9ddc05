use super::Rgba8;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Renderers blend with `One, OneMinusSrcAlpha`, which expects this layout.
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

    /// Creates a premultiplied color from straight alpha linear components.
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

    /// Decodes straight-alpha sRGB bytes into linear premultiplied color.
    ///
    /// Alpha is stored linearly and is not transfer-decoded.
    #[inline]
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self::from_straight(
            srgb_to_linear(c.r),
            srgb_to_linear(c.g),
            srgb_to_linear(c.b),
            c.a as f32 / 255.0,
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl From<Rgba8> for Color {
    #[inline]
    fn from(c: Rgba8) -> Self {
        Color::from_rgba8(c)
    }
}

/// sRGB electro-optical transfer function for one 8-bit channel.
fn srgb_to_linear(v: u8) -> f32 {
    let c = v as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn srgb_endpoints_are_exact() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!(approx(srgb_to_linear(255), 1.0));
    }

    #[test]
    fn srgb_midpoint_is_darker_in_linear_space() {
        // 128/255 in sRGB is roughly 21.6% linear intensity.
        assert!(approx(srgb_to_linear(128), 0.2158605));
    }

    #[test]
    fn opaque_red_decodes_to_unit_red() {
        let c = Color::from(Rgba8::RED);
        assert!(approx(c.r, 1.0));
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
        assert!(approx(c.a, 1.0));
    }

    #[test]
    fn translucent_color_is_premultiplied() {
        let c = Color::from(Rgba8::new(128, 128, 128, 40));
        let a = 40.0 / 255.0;
        assert!(approx(c.a, a));
        assert!(approx(c.r, 0.2158605 * a));
        assert!(c.r <= c.a);
    }

    #[test]
    fn transparent_is_all_zero() {
        assert_eq!(Color::from(Rgba8::TRANSPARENT), Color::transparent());
    }
}
