use crate::app::models::AppEvent;
use crate::geo::models::Coordinate;
use crate::pins::models::Pin;
use commands::Command;
use consts::{
    CANCEL_ANSWER, DELETE_ALL_QUESTION, HELP, PROMPT, REGISTER_MESSAGE, REGISTER_PLACEHOLDER,
    REGISTER_TITLE,
};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tokio::sync::mpsc;

pub mod commands;
pub mod consts;

/// Line-oriented front end. Reads commands, runs the confirmation dialogs and forwards what the
/// user confirmed to the event loop.
pub struct Shell<R, W> {
    lines: Lines<R>,
    out: W,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            lines: input.lines(),
            out,
            events,
        }
    }

    /// Runs until `quit` or end of input, then asks the event loop to stop.
    pub async fn run(mut self) -> io::Result<()> {
        loop {
            self.write(PROMPT).await?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(reason) => {
                    self.write(&format!("{reason}, try `help`\n")).await?;
                    continue;
                }
            };
            if !self.dispatch(command).await? {
                break;
            }
        }
        self.send(AppEvent::Quit);
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Press(coordinate) => {
                if let Some(pin) = self.register_dialog(coordinate).await? {
                    self.send(AppEvent::PinConfirmed(pin));
                }
            }
            Command::Clear => {
                if self.confirm(DELETE_ALL_QUESTION).await? {
                    self.send(AppEvent::DeleteAllConfirmed);
                }
            }
            Command::Locate(fix) => self.send(AppEvent::LocationUpdated(fix)),
            Command::Search(text) => self.send(AppEvent::SearchSubmitted(text)),
            Command::Map => self.send(AppEvent::MapRequested),
            Command::Help => self.write(&format!("{HELP}\n")).await?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// `None` when the user cancels. An empty message gives a pin with an empty label.
    async fn register_dialog(&mut self, coordinate: Coordinate) -> io::Result<Option<Pin>> {
        self.write(&format!(
            "{REGISTER_TITLE}\n{REGISTER_MESSAGE}\n{REGISTER_PLACEHOLDER} ({CANCEL_ANSWER} to cancel): "
        ))
        .await?;
        let Some(answer) = self.lines.next_line().await? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer == CANCEL_ANSWER {
            return Ok(None);
        }
        Ok(Some(Pin::new(coordinate, Some(answer.to_string()))))
    }

    async fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.write(&format!("{question} ")).await?;
        let answer = self.lines.next_line().await?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    fn send(&self, event: AppEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("Event loop is gone, dropping shell event.");
        }
    }
}
