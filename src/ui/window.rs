use crate::ui::{self, titlebar::TitleBar};
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    style::{Print, Stylize as _},
    terminal::{Clear, ClearType},
};
use std::fmt::Write as _;

/// Columns taken up by the borders & padding on either side of the content.
const HORIZONTAL_CHROME: u16 = 4;

/// Rows taken up by the titlebar & statusbar.
#[cfg(not(windows))]
const VERTICAL_CHROME: u16 = 2;

/// Windows gets an extra row, see [`Window::render`].
#[cfg(windows)]
const VERTICAL_CHROME: u16 = 3;

/// Represents an abstraction for drawing the actual clockface window itself.
///
/// The main purpose of this struct is just to add the fancy border,
/// as well as clear the screen before drawing.
pub struct Window {
    /// Whether or not to include borders in the output.
    borderless: bool,

    /// The titlebar of this window.
    pub titlebar: TitleBar,

    /// The status (bottom) bar of the window, which shouldn't change since initialization.
    pub(crate) statusbar: String,

    /// Whether to cautiously handle ANSI sequences by adding [`crossterm::style::Attribute::Reset`] generously.
    fancy: bool,
}

impl Window {
    /// Initializes a new [Window].
    ///
    /// * `width` - Inner width of the window.
    /// * `borderless` - Whether to include borders in the window, or not.
    /// * `fancy` - Whether to reset styling after each line.
    pub fn new(width: usize, borderless: bool, fancy: bool) -> Self {
        let statusbar = if borderless {
            " ".repeat(width + 4)
        } else {
            let middle = "─".repeat(width + 2);
            format!("└{middle}┘")
        };

        Self {
            statusbar,
            borderless,
            fancy,
            titlebar: TitleBar::new(width, borderless),
        }
    }

    /// The space left for content in a terminal of the given size,
    /// as a `(columns, rows)` pair.
    pub const fn available(columns: u16, rows: u16) -> (u16, u16) {
        (
            columns.saturating_sub(HORIZONTAL_CHROME),
            rows.saturating_sub(VERTICAL_CHROME),
        )
    }

    /// Renders the window itself, but doesn't actually draw it.
    ///
    /// This returns both the final rendered window and also the full
    /// height of the rendered window.
    pub(crate) fn render(&self, content: Vec<String>) -> ui::Result<(String, u16)> {
        const NEWLINE: &str = "\r\n";
        let len: u16 = content.len().try_into()?;

        // Note that this will have a trailing newline, which we use later.
        let menu: String = content.into_iter().fold(String::new(), |mut output, x| {
            // Horizontal Padding & Border
            let padding = if self.borderless { " " } else { "│" };
            let center = if self.fancy { x.reset().to_string() } else { x };
            let _ = write!(output, "{padding} {center} {padding}{NEWLINE}");

            output
        });

        // We're doing this because Windows is stupid and can't stand
        // writing to the last line repeatedly.
        #[cfg(windows)]
        let (height, suffix) = (len + 3, NEWLINE);
        #[cfg(not(windows))]
        let (height, suffix) = (len + 2, "");

        // There's no need for another newline after the main menu content, because it already has one.
        Ok((
            format!(
                "{}{NEWLINE}{menu}{}{suffix}",
                self.titlebar.content, self.statusbar,
            ),
            height,
        ))
    }

    /// Actually draws the window, with each element in `content` being on a new line.
    pub fn draw(&mut self, mut writer: impl std::io::Write, content: Vec<String>) -> ui::Result<()> {
        let (rendered, height) = self.render(content)?;

        crossterm::execute!(
            writer,
            Clear(ClearType::FromCursorDown),
            MoveToColumn(0),
            Print(rendered),
            MoveToColumn(0),
            MoveUp(height - 1),
        )?;

        Ok(())
    }
}
