//! The immutable look of a clock face.
//!
//! A [`ClockStyle`] is built once, either from the command line or from
//! [`ClockStyle::default`], and then only ever read. Each primitive gets its
//! own [`Pen`] out of it, so nothing depends on the order things are drawn in.

use crossterm::style::Color;

use crate::{canvas::Pen, hand::Hand};

/// The default ratio between neighbouring hands.
pub const RATIO: f32 = 0.62;

/// The default gap between the edge of the surface and the rim.
pub const RIM_INSET: f32 = 5.0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown color {0:?}, expected a name like `red` or a hex code like `#ff8800`")]
    Color(String),
}

/// Parses either a crossterm color name, or a `#rrggbb` hex code.
pub fn parse_color(src: &str) -> Result<Color, Error> {
    let unknown = || Error::Color(src.to_owned());

    if let Some(hex) = src.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(unknown());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| unknown());
        return Ok(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }

    Color::try_from(src).map_err(|()| unknown())
}

/// Colors and stroke widths for every part of the face.
#[derive(Debug, Clone, PartialEq, clap::Args)]
pub struct ClockStyle {
    /// Color of the rim.
    #[clap(long, default_value = "reset", value_parser = parse_color)]
    pub clock_color: Color,

    /// Color of the hour hand.
    #[clap(long, default_value = "reset", value_parser = parse_color)]
    pub hour_color: Color,

    /// Color of the minute hand.
    #[clap(long, default_value = "reset", value_parser = parse_color)]
    pub minute_color: Color,

    /// Color of the second hand.
    #[clap(long, default_value = "red", value_parser = parse_color)]
    pub second_color: Color,

    /// Color of the tick marks.
    #[clap(long, default_value = "dark_grey", value_parser = parse_color)]
    pub tick_color: Color,

    /// Stroke width of the rim, in dots.
    #[clap(long, default_value_t = 1.0)]
    pub clock_stroke: f32,

    /// Stroke width of the hour hand, in dots.
    #[clap(long, default_value_t = 3.0)]
    pub hour_stroke: f32,

    /// Stroke width of the minute hand, in dots.
    #[clap(long, default_value_t = 2.0)]
    pub minute_stroke: f32,

    /// Stroke width of the second hand, in dots.
    #[clap(long, default_value_t = 1.0)]
    pub second_stroke: f32,

    /// Stroke width of the ticks on every fifth minute.
    #[clap(long, default_value_t = 2.0)]
    pub tick_major_stroke: f32,

    /// Stroke width of the remaining ticks.
    #[clap(long, default_value_t = 1.0)]
    pub tick_minor_stroke: f32,

    /// Length ratio between the hour & minute hands.
    #[clap(long, default_value_t = RATIO)]
    pub ratio: f32,

    /// Gap between the edge of the face and the rim, in dots.
    #[clap(long, default_value_t = RIM_INSET)]
    pub rim_inset: f32,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            clock_color: Color::Reset,
            hour_color: Color::Reset,
            minute_color: Color::Reset,
            second_color: Color::Red,
            tick_color: Color::DarkGrey,
            clock_stroke: 1.0,
            hour_stroke: 3.0,
            minute_stroke: 2.0,
            second_stroke: 1.0,
            tick_major_stroke: 2.0,
            tick_minor_stroke: 1.0,
            ratio: RATIO,
            rim_inset: RIM_INSET,
        }
    }
}

impl ClockStyle {
    /// The pen for the outer rim.
    pub const fn rim(&self) -> Pen {
        Pen::new(self.clock_color, self.clock_stroke)
    }

    /// The pen for a tick mark.
    pub const fn tick(&self, major: bool) -> Pen {
        let stroke = if major {
            self.tick_major_stroke
        } else {
            self.tick_minor_stroke
        };

        Pen::new(self.tick_color, stroke)
    }

    /// The pen for one of the hands.
    pub const fn pen(&self, hand: Hand) -> Pen {
        match hand {
            Hand::Hour => Pen::new(self.hour_color, self.hour_stroke),
            Hand::Minute => Pen::new(self.minute_color, self.minute_stroke),
            Hand::Second => Pen::new(self.second_color, self.second_stroke),
        }
    }
}
