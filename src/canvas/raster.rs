//! A [`Surface`] made out of braille characters.
//!
//! Each terminal cell holds a 2x4 grid of dots, which on most fonts makes
//! a single dot roughly square. That way a square surface in dots also
//! looks square on screen.

use std::f32::consts::TAU;

use crossterm::style::{Color, Stylize as _};

use super::{Pen, Point, Surface, Transform};

/// Dots per cell, horizontally.
const CELL_WIDTH: usize = 2;

/// Dots per cell, vertically.
const CELL_HEIGHT: usize = 4;

/// The first braille character, which has no dots set.
const BRAILLE: u32 = 0x2800;

/// Which bit of a braille character corresponds to which dot, by `[y][x]`.
const BITS: [[u8; CELL_WIDTH]; CELL_HEIGHT] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// A single terminal cell.
#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    /// The braille dot bitmask.
    dots: u8,

    /// Color of the last thing drawn over this cell.
    color: Option<Color>,
}

/// A grid of braille cells, which is `side` dots across and down.
#[derive(Debug, Clone)]
pub struct Raster {
    /// Side length, in dots.
    side: usize,

    /// Width, in cells.
    width: usize,

    /// Height, in cells.
    height: usize,

    /// All cells, row by row.
    cells: Vec<Cell>,

    /// The transform applied to incoming coordinates.
    transform: Transform,

    /// Transforms pushed by [`Surface::save`].
    saved: Vec<Transform>,
}

impl Raster {
    /// Creates an empty raster which is `side` dots across.
    pub fn new(side: u16) -> Self {
        let side = usize::from(side);
        let width = side.div_ceil(CELL_WIDTH);
        let height = side.div_ceil(CELL_HEIGHT);

        Self {
            side,
            width,
            height,
            cells: vec![Cell::default(); width * height],
            transform: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// The width of the raster, in terminal cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The height of the raster, in terminal cells.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The current transform.
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Wipes all the dots, and resets the transform.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.transform = Transform::IDENTITY;
        self.saved.clear();
    }

    /// Whether the dot at `(x, y)` is set.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.side || y >= self.side {
            return false;
        }

        let cell = self.cells[(y / CELL_HEIGHT) * self.width + x / CELL_WIDTH];
        cell.dots & BITS[y % CELL_HEIGHT][x % CELL_WIDTH] != 0
    }

    /// Sets a single dot, in raw (untransformed) coordinates.
    ///
    /// Anything off the raster is silently dropped.
    fn plot(&mut self, x: f32, y: f32, color: Color) {
        let (x, y) = (x.round(), y.round());
        if x < 0.0 || y < 0.0 {
            return;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.side || y >= self.side {
            return;
        }

        let cell = &mut self.cells[(y / CELL_HEIGHT) * self.width + x / CELL_WIDTH];
        cell.dots |= BITS[y % CELL_HEIGHT][x % CELL_WIDTH];
        cell.color = Some(color);
    }

    /// Sets a round blob of dots as wide as the pen, centered on `point`.
    fn stamp(&mut self, point: Point, pen: Pen) {
        let radius = (pen.stroke / 2.0).max(0.5);
        let reach = radius.ceil() as i32;

        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let (dx, dy) = (dx as f32, dy as f32);
                if dx.hypot(dy) <= radius {
                    self.plot(point.x + dx, point.y + dy, pen.color);
                }
            }
        }
    }

    /// Renders every row of cells into a string, with colors applied.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.color {
                        Some(color) if cell.dots != 0 => {
                            let glyph = char::from_u32(BRAILLE + u32::from(cell.dots)).unwrap_or(' ');
                            glyph.with(color).to_string()
                        }
                        _ => String::from(" "),
                    })
                    .collect()
            })
            .collect()
    }
}

impl Surface for Raster {
    fn size(&self) -> (f32, f32) {
        (self.side as f32, self.side as f32)
    }

    fn circle(&mut self, center: Point, radius: f32, pen: Pen) {
        if radius <= 0.0 {
            return;
        }

        let center = self.transform.apply(center);

        // Enough samples that neighbouring ones are at most half a dot apart.
        let samples = ((TAU * radius * 2.0).ceil() as usize).max(8);
        for i in 0..samples {
            let theta = TAU * i as f32 / samples as f32;
            let (sin, cos) = theta.sin_cos();
            self.stamp(
                Point::new(center.x + radius * cos, center.y + radius * sin),
                pen,
            );
        }
    }

    fn line(&mut self, from: Point, to: Point, pen: Pen) {
        let from = self.transform.apply(from);
        let to = self.transform.apply(to);

        let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp(
                Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t),
                pen,
            );
        }
    }

    fn rotate(&mut self, degrees: f32, pivot: Point) {
        self.transform = self.transform.then(Transform::rotation(degrees, pivot));
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }
}
