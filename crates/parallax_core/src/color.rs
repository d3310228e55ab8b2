//! RGBA colors with CSS-style parsing and hex formatting
//!
//! Channels are stored as `f32` in `0.0..=1.0`. Parsing accepts the notations
//! the header/tab palettes are usually written in:
//!
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(85, 186, 255)` and `rgba(85, 186, 255, 0.8)`
//! - a small set of named colors (`white`, `black`, `transparent`, ...)
//!
//! Conversion back to 8-bit channels rounds half away from zero, so the
//! midpoint between `#000000` and `#ffffff` formats as `#808080`.

use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map_opt, value},
    error::{Error as NomError, ErrorKind, ParseError as NomParseError},
    multi::separated_list1,
    number::complete::float,
    sequence::{delimited, preceded},
    IResult,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex literal with an unsupported number of digits or a non-hex digit
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    /// `rgb()` / `rgba()` with the wrong arity or a non-numeric component
    #[error("invalid rgb color function `{0}`")]
    InvalidFunction(String),

    /// Named color outside the supported table
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorParseError>;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels and a `0.0..=1.0` alpha
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Same color with the alpha channel replaced
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Interpolate every channel (alpha included) by the same fraction
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Clamp every channel into `0.0..=1.0`
    pub fn clamped(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// 8-bit channels, alpha included
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamped();
        [
            channel_to_u8(c.r),
            channel_to_u8(c.g),
            channel_to_u8(c.b),
            channel_to_u8(c.a),
        ]
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Parse any of the supported notations
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.starts_with('#') {
            return complete(parse_hex_color, s)
                .ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        if tag_no_case::<_, _, NomError<&str>>("rgb")(s).is_ok() {
            return complete(parse_rgb_function, s)
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }

        complete(parse_named_color, s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c * 255.0).round() as u8
}

// ============================================================================
// Parsers
// ============================================================================

/// Run a parser that must consume the whole input
fn complete<'a, P>(parser: P, input: &'a str) -> Option<Color>
where
    P: FnMut(&'a str) -> IResult<&'a str, Color, NomError<&'a str>>,
{
    all_consuming(parser)(input).ok().map(|(_, color)| color)
}

fn ws<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    value((), multispace0)(input)
}

/// Split 3, 4, 6 or 8 hex digits into 8-bit channels
fn hex_channels(hex: &str) -> Option<[u8; 4]> {
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
        4 => Some([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?]),
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}

/// Parse hex color: #RGB, #RGBA, #RRGGBB or #RRGGBBAA
fn parse_hex_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Color, E> {
    let (input, [r, g, b, a]) = map_opt(
        preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit())),
        hex_channels,
    )(input)?;
    Ok((input, Color::from_rgba8(r, g, b, a as f32 / 255.0)))
}

fn component<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f32, E> {
    delimited(ws, float, ws)(input)
}

/// Parse rgb(r, g, b) or rgba(r, g, b, a) with 0-255 channels
fn parse_rgb_function<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Color, E> {
    let start = input;
    let (input, name) = alt((tag_no_case("rgba"), tag_no_case("rgb")))(input)?;
    let (input, _) = ws(input)?;
    let (input, parts) = delimited(
        char('('),
        separated_list1(char(','), component),
        char(')'),
    )(input)?;

    let arity = if name.len() == 4 { 4 } else { 3 };
    if parts.len() != arity || parts.iter().any(|v| !v.is_finite()) {
        return Err(nom::Err::Error(E::from_error_kind(start, ErrorKind::Verify)));
    }

    let alpha = parts.get(3).copied().unwrap_or(1.0);
    let color = Color::rgba(parts[0] / 255.0, parts[1] / 255.0, parts[2] / 255.0, alpha);
    Ok((input, color.clamped()))
}

fn parse_named_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Color, E> {
    alt((
        value(Color::TRANSPARENT, tag_no_case("transparent")),
        value(Color::WHITE, tag_no_case("white")),
        value(Color::BLACK, tag_no_case("black")),
        value(Color::RED, tag_no_case("red")),
        value(Color::BLUE, tag_no_case("blue")),
        value(Color::from_hex(0x008000), tag_no_case("green")),
        value(Color::from_hex(0xC0C0C0), tag_no_case("silver")),
        value(Color::from_hex(0x808080), alt((tag_no_case("gray"), tag_no_case("grey")))),
    ))(input)
}
