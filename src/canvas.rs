//! The drawing surface that the clock renders into.
//!
//! Rendering only ever goes through [`Surface`], which keeps the geometry
//! independent from whatever ends up putting it on screen.

use crossterm::style::Color;

pub mod raster;
pub use raster::Raster;

/// A point in surface units, where `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// How a single primitive should be stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// The foreground color.
    pub color: Color,

    /// The stroke width, in surface units.
    pub stroke: f32,
}

impl Pen {
    pub const fn new(color: Color, stroke: f32) -> Self {
        Self { color, stroke }
    }
}

/// A 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The transform which leaves everything where it is.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// A clockwise rotation (on a y-down surface) around `pivot`.
    pub fn rotation(degrees: f32, pivot: Point) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();

        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: pivot.x - cos * pivot.x + sin * pivot.y,
            f: pivot.y - sin * pivot.x - cos * pivot.y,
        }
    }

    /// Returns the transform which applies `inner` first, then `self`.
    #[must_use]
    pub fn then(self, inner: Self) -> Self {
        Self {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    /// Maps a point through the transform.
    pub fn apply(self, point: Point) -> Point {
        Point {
            x: self.a * point.x + self.c * point.y + self.e,
            y: self.b * point.x + self.d * point.y + self.f,
        }
    }
}

/// A square-ish area that accepts drawing primitives.
///
/// Every coordinate passes through the current transform, which can be
/// rotated, saved and restored, much like most 2D canvas APIs.
pub trait Surface {
    /// The width & height of the surface, in units.
    fn size(&self) -> (f32, f32);

    /// The middle of the surface.
    fn center(&self) -> Point {
        let (width, height) = self.size();
        Point::new(width / 2.0, height / 2.0)
    }

    /// Strokes the outline of a circle.
    fn circle(&mut self, center: Point, radius: f32, pen: Pen);

    /// Strokes a straight line.
    fn line(&mut self, from: Point, to: Point, pen: Pen);

    /// Rotates the current transform clockwise by `degrees` around `pivot`.
    fn rotate(&mut self, degrees: f32, pivot: Point);

    /// Pushes the current transform onto a stack.
    fn save(&mut self);

    /// Pops the last saved transform, doing nothing if there isn't one.
    fn restore(&mut self);
}
