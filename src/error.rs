use tokio::sync::mpsc;

use crate::ui;

pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't send internal message: {0}")]
    Send(#[from] mpsc::error::SendError<crate::Message>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory not found")]
    Directory,

    #[error("unable to set up debug logging: {0}")]
    Logging(Box<dyn std::error::Error + Send + Sync>),

    #[error("ui failure")]
    UI(#[from] ui::Error),

    #[error("join error")]
    JoinError(#[from] tokio::task::JoinError),
}
