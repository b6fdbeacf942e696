//! Responsible for specifically recieving terminal input
//! using [`crossterm`].

use crossterm::event::{self, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures_util::StreamExt as _;
use tokio::sync::mpsc::Sender;

use crate::Message;

/// Maps a single terminal event onto a [`Message`], if it means anything to the clock.
pub fn message(event: &event::Event) -> Option<Message> {
    let event = match event {
        event::Event::Resize(columns, rows) => return Some(Message::Resize(*columns, *rows)),
        event::Event::Key(event) => event,
        _ => return None,
    };

    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char(character) => match character.to_ascii_lowercase() {
            // Ctrl+C
            'c' if event.modifiers == KeyModifiers::CONTROL => Some(Message::Quit),

            // Quit
            'q' => Some(Message::Quit),

            // Force a redraw
            'r' => Some(Message::Redraw),

            _ => None,
        },
        _ => None,
    }
}

/// Starts the listener to recieve input from the terminal for various events.
pub async fn listen(sender: Sender<Message>) -> crate::Result<()> {
    let mut reader = EventStream::new();

    while let Some(event) = reader.next().await {
        let Some(message) = message(&event?) else {
            continue;
        };

        sender.send(message).await?;
    }

    Ok(())
}
