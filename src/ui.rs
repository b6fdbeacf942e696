//! The terminal host, which sizes the [`Dial`], feeds it a [`Raster`]
//! to draw on, and puts the result on screen.

use std::io::stdout;

use crossterm::terminal;
use tokio::{select, sync::mpsc};

use crate::{
    canvas::Raster,
    dial::Dial,
    layout::Constraint,
    time::{self, Source as _},
    Args, Message, Tasks,
};

mod environment;
pub use environment::Environment;
mod input;
pub use input::message;
mod titlebar;
mod window;
pub use window::Window;

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the UI, which is used to handle errors that occur
/// while drawing the UI or handling input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to convert number")]
    Conversion(#[from] std::num::TryFromIntError),

    #[error("unable to write output")]
    Write(#[from] std::io::Error),
}

/// Braille dots per terminal column.
const DOTS_ACROSS: u16 = 2;

/// Braille dots per terminal row.
const DOTS_DOWN: u16 = 4;

/// Everything needed to put one frame of the dial on screen.
///
/// This gets rebuilt from scratch whenever the terminal is resized.
pub struct Frame {
    /// The surface the dial draws onto.
    pub(crate) raster: Raster,

    /// The window wrapped around the raster.
    pub(crate) window: Window,

    /// Whether to show the time in the titlebar.
    digital: bool,
}

impl Frame {
    /// Sizes `dial` to fit a terminal of `columns` by `rows`, and builds a frame for it.
    pub fn fit(args: &Args, dial: &mut Dial, (columns, rows): (u16, u16)) -> Self {
        let (columns, rows) = Window::available(columns, rows);
        let (width, height) = (
            columns.saturating_mul(DOTS_ACROSS),
            rows.saturating_mul(DOTS_DOWN),
        );

        let (horizontal, vertical) = if args.wrap {
            (Constraint::AtMost(width), Constraint::AtMost(height))
        } else {
            (Constraint::Exactly(width), Constraint::Exactly(height))
        };

        // The terminal can't grow to fit, so anything bigger is clamped.
        let side = Dial::measure(horizontal, vertical).min(width).min(height);
        tracing::debug!(columns, rows, side, "fitting frame");

        dial.resize(f32::from(side));
        let raster = Raster::new(side);

        Self {
            window: Window::new(raster.width(), args.borderless, true),
            raster,
            digital: args.digital,
        }
    }

    /// Draws the dial into the raster, and then the raster onto `writer`.
    pub fn draw(&mut self, dial: &Dial, writer: impl std::io::Write) -> Result<()> {
        self.raster.clear();

        match dial.draw(&mut self.raster) {
            Some(time) if self.digital => self.window.titlebar.display(time),
            _ => self.window.titlebar.empty(),
        }

        self.window.draw(writer, self.raster.rows())
    }
}

/// Runs the clock until the user quits.
pub async fn run(args: Args) -> crate::Result<()> {
    let (tx, mut rx) = mpsc::channel(8);
    let mut tasks = Tasks::new(tx);

    let source: Box<dyn time::Source> = match args.at {
        Some(sample) => Box::new(time::Fixed(sample)),
        None => Box::new(time::Local),
    };
    tracing::info!(time = %source.sample(), "starting");

    let mut dial = Dial::new(args.style.clone(), source);
    let environment = Environment::ready(args.alternate)?;
    tasks.spawn(input::listen(tasks.tx()));

    let mut frame = Frame::fit(&args, &mut dial, terminal::size()?);
    let invalidator = dial.invalidator();
    dial.attach();

    let result = tasks
        .wait(async {
            loop {
                frame.draw(&dial, stdout().lock())?;

                select! {
                    () = invalidator.invalidated() => (),
                    message = rx.recv() => match message {
                        Some(Message::Redraw) => (),
                        Some(Message::Resize(columns, rows)) => {
                            frame = Frame::fit(&args, &mut dial, (columns, rows));
                        }
                        Some(Message::Quit) | None => break,
                    },
                }
            }

            tracing::info!("quitting");
            Ok::<(), crate::Error>(())
        })
        .await;

    dial.detach().await;
    environment.cleanup(result.is_ok())?;

    result
}
