//! A live analog clock face for the terminal.
pub mod error;
use clap::Parser;
pub use error::{Error, Result};
pub mod message;
pub mod ui;
pub use message::Message;
pub mod tasks;
pub use tasks::Tasks;

pub mod canvas;
pub mod dbg;
pub mod dial;
pub mod hand;
pub mod layout;
pub mod render;
pub mod scheduler;
pub mod style;
pub mod time;

/// A live analog clock face for the terminal.
#[derive(Parser, Clone)]
#[command(about, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Use an alternate terminal screen.
    #[clap(long, short)]
    alternate: bool,

    /// Exclude borders in UI.
    #[clap(long, short)]
    borderless: bool,

    /// Show the time in the titlebar as well.
    #[clap(long, short)]
    digital: bool,

    /// Use the clock's natural size instead of filling the terminal.
    #[clap(long, short)]
    wrap: bool,

    /// Freeze the clock at a time, formatted as HH:MM or HH:MM:SS.
    #[clap(long, value_parser = time::parse)]
    at: Option<time::TimeSample>,

    /// Write debug logs to the cache directory.
    #[clap(long)]
    debug: bool,

    /// Colors & strokes of the clock face.
    #[command(flatten)]
    style: style::ClockStyle,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();

    if args.debug {
        let path = dbg::enable()?;
        tracing::info!(path = %path.display(), "debug logging enabled");
    }

    Ok(ui::run(args).await?)
}
