/// Handles communication between the input listener and the draw loop.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Message {
    /// Redraw right away, without waiting for the next tick.
    Redraw,

    /// The terminal was resized to the given columns & rows.
    Resize(u16, u16),

    /// Quits gracefully.
    Quit,
}
