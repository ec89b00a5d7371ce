use crate::app::models::AppEvent;
use crate::geo::models::Coordinate;
use futures_util::{Stream, StreamExt};
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_stream::wrappers::LinesStream;

/// Reads an NDJSON file of coordinates, one fix per line. A `null` line is a missing fix.
/// Lines that are neither are logged and skipped.
pub async fn from_file(path: &Path) -> io::Result<impl Stream<Item = Option<Coordinate>>> {
    let file = File::open(path).await?;
    let lines = LinesStream::new(BufReader::new(file).lines());
    Ok(lines.filter_map(|line| async move {
        match line {
            Ok(line) => parse_fix(&line),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read a line of the location feed.");
                None
            }
        }
    }))
}

/// `None` means "skip this line", `Some(None)` is a missing fix.
pub fn parse_fix(line: &str) -> Option<Option<Coordinate>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<Option<Coordinate>>(line) {
        Ok(fix) => Some(fix),
        Err(err) => {
            tracing::warn!(line, error = %err, "Skipping a malformed location feed line.");
            None
        }
    }
}

/// Posts every fix of `fixes` as a location update, waiting `interval` between them.
pub async fn replay<S>(fixes: S, interval: Duration, events: mpsc::UnboundedSender<AppEvent>)
where
    S: Stream<Item = Option<Coordinate>>,
{
    futures_util::pin_mut!(fixes);
    let mut delivered = 0usize;
    while let Some(fix) = fixes.next().await {
        if events.send(AppEvent::LocationUpdated(fix)).is_err() {
            break;
        }
        delivered += 1;
        if !interval.is_zero() {
            tokio::time::sleep(interval).await;
        }
    }
    tracing::debug!(delivered, "Location feed exhausted.");
}
