#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mixes `other` into `self`; `amount` is the share of `other` out of 255.
    #[must_use]
    pub fn blend(self, other: Colour, amount: u8) -> Colour {
        let mix = |a: u8, b: u8| -> u8 {
            let a = a as u16;
            let b = b as u16;
            let t = amount as u16;
            ((a * (255 - t) + b * t) / 255) as u8
        };

        Colour {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        let black = Colour::rgb(0, 0, 0);
        let white = Colour::rgb(255, 255, 255);

        assert_eq!(black.blend(white, 0), black);
        assert_eq!(black.blend(white, 255), white);
    }

    #[test]
    fn test_blend_midpoint() {
        let black = Colour::rgb(0, 0, 0);
        let white = Colour::rgb(255, 255, 255);

        assert_eq!(black.blend(white, 128), Colour::rgb(128, 128, 128));
    }
}
