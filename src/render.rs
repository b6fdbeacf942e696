//! Turns a [`TimeSample`] and a [`Layout`] into drawing primitives.

use crate::{
    canvas::{Point, Surface},
    hand::Hand,
    layout::Layout,
    style::ClockStyle,
    time::TimeSample,
};

/// Degrees between two neighbouring ticks.
const TICK_STEP: f32 = 360.0 / 60.0;

/// How many ticks go around the face.
const TICKS: usize = 60;

/// The angles of all three hands, in degrees clockwise from twelve.
///
/// Each hand also creeps along with the hand beneath it, so the
/// minute hand moves a little every second, and the hour hand
/// moves a little every minute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerAngle {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl From<TimeSample> for PointerAngle {
    fn from(time: TimeSample) -> Self {
        let (hour, minute, second) = (
            f32::from(time.hour),
            f32::from(time.minute),
            f32::from(time.second),
        );

        Self {
            second: second * 6.0,
            minute: minute * 6.0 + (6.0 / 60.0) * second,
            hour: hour * 30.0 + (30.0 / 60.0) * minute,
        }
    }
}

impl PointerAngle {
    /// The angle of one of the hands.
    pub const fn get(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// Draws the whole face: the rim, the ticks, and then the hands.
pub fn draw(surface: &mut impl Surface, layout: &Layout, time: TimeSample, style: &ClockStyle) {
    rim(surface, layout, style);
    ticks(surface, layout, style);

    let angles = PointerAngle::from(time);
    for hand in Hand::ALL {
        pointer(surface, angles.get(hand), layout.length(hand), hand, style);
    }
}

/// The outer circle.
fn rim(surface: &mut impl Surface, layout: &Layout, style: &ClockStyle) {
    let center = surface.center();
    surface.circle(center, layout.radius - style.rim_inset, style.rim());
}

/// The 60 tick marks, each drawn at twelve o'clock and then rotated into place.
fn ticks(surface: &mut impl Surface, layout: &Layout, style: &ClockStyle) {
    let center = surface.center();
    let top = center.y - layout.radius;

    surface.save();
    for i in 0..TICKS {
        let length = layout.tick(i);
        surface.line(
            Point::new(center.x, top),
            Point::new(center.x, top + length),
            style.tick(i % 5 == 0),
        );
        surface.rotate(TICK_STEP, center);
    }
    surface.restore();
}

/// A single hand, including the short stub behind the center.
///
/// Only two thirds of `length` points forward, the remaining third
/// sticks out the other way as a counterweight.
fn pointer(surface: &mut impl Surface, angle: f32, length: f32, hand: Hand, style: &ClockStyle) {
    let center = surface.center();
    let tail = center.y + length / 3.0;

    surface.rotate(angle, center);
    surface.line(
        Point::new(center.x, tail),
        Point::new(center.x, tail - length),
        style.pen(hand),
    );
    surface.rotate(360.0 - angle, center);
}
