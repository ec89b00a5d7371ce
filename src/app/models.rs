use crate::geo::models::{Coordinate, Region};
use crate::map::models::Annotation;
use crate::pins::models::Pin;
use crate::search::errors::SearchError;
use crate::search::models::{Place, PlaceQuery};
use std::fmt;

/// Everything that can happen to the map, delivered one at a time to the event loop.
#[derive(Debug)]
pub enum AppEvent {
    Launched,
    /// The user confirmed the registration dialog.
    PinConfirmed(Pin),
    /// The user confirmed the delete-all dialog.
    DeleteAllConfirmed,
    LocationUpdated(Option<Coordinate>),
    SearchSubmitted(String),
    SearchCompleted {
        query: PlaceQuery,
        outcome: Result<Vec<Place>, SearchError>,
    },
    MapRequested,
    Quit,
}

/// What the event loop reports back to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    PinsLoaded { count: usize },
    PinAdded(Pin),
    PinsCleared,
    Recentered(Region),
    Searching { query: String },
    SearchRejected { reason: String },
    SearchFinished { query: String, results: usize },
    Map {
        region: Option<Region>,
        annotations: Vec<Annotation>,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PinsLoaded { count } => write!(f, "Loaded {count} saved pin(s)."),
            Notice::PinAdded(pin) => write!(
                f,
                "Registered \"{}\" at {}.",
                pin.title(),
                pin.location
            ),
            Notice::PinsCleared => write!(f, "All pins deleted."),
            Notice::Recentered(region) => write!(f, "Map centered on {region}."),
            Notice::Searching { query } => write!(f, "Searching for \"{query}\"..."),
            Notice::SearchRejected { reason } => write!(f, "Search not started: {reason}."),
            Notice::SearchFinished { query, results } => {
                write!(f, "Search for \"{query}\" complete: {results} place(s) found.")
            }
            Notice::Map {
                region,
                annotations,
            } => {
                match region {
                    Some(region) => writeln!(f, "Region: {region}")?,
                    None => writeln!(f, "Region: not set")?,
                }
                write!(f, "{} annotation(s)", annotations.len())?;
                for annotation in annotations {
                    write!(f, "\n  {annotation}")?;
                }
                Ok(())
            }
        }
    }
}
