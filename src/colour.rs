use std::fmt;

/// An ARGB colour as stored in the settings file.
///
/// Colours persist as 8-hex-digit `AARRGGBB` strings (e.g. `"fff39636"`).
/// Six-digit strings are accepted on input and treated as fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colour {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Fully opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xff, r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);

    /// Parse an `AARRGGBB` (or `RRGGBB`) hex string, with or without a
    /// leading `#`. Returns `None` for anything malformed; callers fall
    /// back to their own default colour.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('#');
        // Byte length alone is not enough: multi-byte UTF-8 in a corrupt
        // stored value must not reach the digit slicing below.
        if !s.is_ascii() {
            return None;
        }
        match s.len() {
            8 => {
                let a = u8::from_str_radix(&s[0..2], 16).ok()?;
                let r = u8::from_str_radix(&s[2..4], 16).ok()?;
                let g = u8::from_str_radix(&s[4..6], 16).ok()?;
                let b = u8::from_str_radix(&s[6..8], 16).ok()?;
                Some(Self { a, r, g, b })
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16).ok()?;
                let g = u8::from_str_radix(&s[2..4], 16).ok()?;
                let b = u8::from_str_radix(&s[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Render as the persisted `aarrggbb` form (lowercase, no `#`).
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_eight_digit_argb() {
        let c = Colour::from_hex("fff39636").expect("parse");
        assert_eq!(c, Colour::argb(0xff, 0xf3, 0x96, 0x36));
    }

    #[test]
    fn parses_six_digit_as_opaque() {
        assert_eq!(Colour::from_hex("#323232"), Some(Colour::rgb(0x32, 0x32, 0x32)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Colour::from_hex("notacolour"), None);
        assert_eq!(Colour::from_hex(""), None);
        assert_eq!(Colour::from_hex("fff"), None);
    }

    #[test]
    fn rejects_multibyte_input_of_hex_like_byte_length() {
        // "€" is three bytes; these hit the 6- and 8-byte cases without
        // any char boundary at the slice offsets.
        assert_eq!(Colour::from_hex("€€"), None);
        assert_eq!(Colour::from_hex("€€ab"), None);
        assert_eq!(Colour::from_hex("é€ab"), None);
    }

    #[test]
    fn hex_round_trip() {
        let c = Colour::argb(0xe9, 0x99, 0xa7, 0xae);
        assert_eq!(Colour::from_hex(&c.to_hex()), Some(c));
    }
}
