//! Derives every length on the face from the side of the surface.

use crate::{hand::Hand, style::ClockStyle};

/// The side length used when the host doesn't insist on a size.
pub const DEFAULT_SIDE: u16 = 200;

/// The second hand's length, as a fraction of the side.
const SECOND_FRACTION: f32 = 2.0 / 3.0;

/// A size constraint handed down by the host for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// No bound at all.
    Unspecified,

    /// Anything up to and including the value.
    AtMost(u16),

    /// Exactly the value.
    Exactly(u16),
}

impl Constraint {
    /// The size this places an upper bound on, if any.
    const fn bound(self) -> Option<u16> {
        match self {
            Self::Unspecified => None,
            Self::AtMost(x) | Self::Exactly(x) => Some(x),
        }
    }
}

/// Picks the side of the square face for the given constraints.
///
/// Unless one of the axes is [`Constraint::Exactly`], the face asks for
/// [`DEFAULT_SIDE`]. Otherwise it takes the smallest of the bounded sides.
pub fn measure(width: Constraint, height: Constraint) -> u16 {
    let exact = |x: Constraint| matches!(x, Constraint::Exactly(_));
    if !exact(width) && !exact(height) {
        return DEFAULT_SIDE;
    }

    [width, height]
        .into_iter()
        .filter_map(Constraint::bound)
        .min()
        .unwrap_or(DEFAULT_SIDE)
}

/// All of the lengths used while drawing, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Half of the side.
    pub radius: f32,

    /// Length of the ticks on every fifth minute.
    pub tick_major: f32,

    /// Length of the other ticks.
    pub tick_minor: f32,

    /// Full length of the hour hand, counterweight included.
    pub hour: f32,

    /// Full length of the minute hand, counterweight included.
    pub minute: f32,

    /// Full length of the second hand, counterweight included.
    pub second: f32,
}

impl Layout {
    /// Computes the layout for a square surface of `side` units.
    ///
    /// A side that isn't positive produces an all zero layout.
    pub fn compute(side: f32, style: &ClockStyle) -> Self {
        if side.is_nan() || side <= 0.0 {
            return Self::default();
        }

        let radius = side / 2.0;
        let tick_major = radius / 12.0;
        let second = side * SECOND_FRACTION;
        let minute = second * style.ratio / SECOND_FRACTION;

        Self {
            radius,
            tick_major,
            tick_minor: tick_major / 2.0,
            hour: minute * style.ratio,
            minute,
            second,
        }
    }

    /// The full length of one of the hands.
    pub const fn length(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }

    /// The length of the tick at `index`, counting clockwise from twelve.
    pub const fn tick(&self, index: usize) -> f32 {
        if index % 5 == 0 {
            self.tick_major
        } else {
            self.tick_minor
        }
    }
}
