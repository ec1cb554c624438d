use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Series colors travel through the engine as opaque tokens; raster backends
/// resolve them with [`Color::from_hex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` tokens.
    pub fn from_hex(token: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidData(format!("unsupported color token `{token}`"));
        let digits = token.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |hex: &str| -> ChartResult<f64> {
            let value = u8::from_str_radix(hex, 16).map_err(|_| invalid())?;
            Ok(f64::from(value) / 255.0)
        };

        match digits.len() {
            3 => {
                let mut channels = [0.0; 3];
                for (slot, offset) in channels.iter_mut().zip(0..3) {
                    let nibble = &digits[offset..=offset];
                    *slot = channel(&nibble.repeat(2))?;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 | 8 => {
                let red = channel(&digits[0..2])?;
                let green = channel(&digits[2..4])?;
                let blue = channel(&digits[4..6])?;
                let alpha = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    1.0
                };
                Ok(Self::rgba(red, green, blue, alpha))
            }
            _ => Err(invalid()),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}
