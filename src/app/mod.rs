use crate::location::LocationAdapter;
use crate::map::surface::MapSurface;
use crate::map::sync::MapSynchronizer;
use crate::search::models::PlaceQuery;
use crate::search::{PlaceSearch, SearchAdapter};
use crate::storage::interface::KeyValueStore;
use models::{AppEvent, Notice};
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

pub mod models;

/// Owns the map and the pins. Every event is handled to completion before the next one.
pub struct App<S: KeyValueStore, M: MapSurface> {
    sync: MapSynchronizer<S, M>,
    location: LocationAdapter,
    search: Arc<dyn PlaceSearch>,
    search_adapter: SearchAdapter,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl<S, M> App<S, M>
where
    S: KeyValueStore,
    M: MapSurface,
{
    /// `events` is where finished searches are posted back to.
    pub fn new(
        sync: MapSynchronizer<S, M>,
        location: LocationAdapter,
        search: Arc<dyn PlaceSearch>,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            sync,
            location,
            search,
            search_adapter: SearchAdapter,
            events,
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Option<Notice> {
        match event {
            AppEvent::Launched => {
                self.sync.reload_all();
                Some(Notice::PinsLoaded {
                    count: self.sync.surface().annotations().len(),
                })
            }
            AppEvent::PinConfirmed(pin) => {
                self.sync.add_one(pin.clone());
                Some(Notice::PinAdded(pin))
            }
            AppEvent::DeleteAllConfirmed => {
                self.sync.clear_all();
                Some(Notice::PinsCleared)
            }
            AppEvent::LocationUpdated(fix) => self
                .location
                .on_update(self.sync.surface_mut(), fix)
                .map(Notice::Recentered),
            AppEvent::SearchSubmitted(text) => {
                let region = self.sync.surface().region();
                match self.search_adapter.query(&text, region) {
                    Ok(query) => {
                        let text = query.text.clone();
                        self.start_search(query);
                        Some(Notice::Searching { query: text })
                    }
                    Err(err) => Some(Notice::SearchRejected {
                        reason: err.to_string(),
                    }),
                }
            }
            AppEvent::SearchCompleted { query, outcome } => {
                let results =
                    self.search_adapter
                        .apply(self.sync.surface_mut(), &query, outcome);
                Some(Notice::SearchFinished {
                    query: query.text,
                    results,
                })
            }
            AppEvent::MapRequested => Some(Notice::Map {
                region: self.sync.surface().region(),
                annotations: self.sync.surface().annotations().to_vec(),
            }),
            AppEvent::Quit => None,
        }
    }

    pub fn synchronizer(&self) -> &MapSynchronizer<S, M> {
        &self.sync
    }

    // Searches are neither deduplicated nor cancelled; each one reports back on its own.
    fn start_search(&self, query: PlaceQuery) {
        let search = Arc::clone(&self.search);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = search.search(&query).await;
            if events
                .send(AppEvent::SearchCompleted { query, outcome })
                .is_err()
            {
                tracing::debug!("Event loop is gone, dropping search results.");
            }
        });
    }
}

/// Runs `app` until a [`AppEvent::Quit`] arrives or every sender is dropped, writing notices to
/// `out`. Gives the app back so its final state can be inspected.
pub async fn run<S, M, W>(
    mut app: App<S, M>,
    mut events: mpsc::UnboundedReceiver<AppEvent>,
    mut out: W,
) -> App<S, M>
where
    S: KeyValueStore,
    M: MapSurface,
    W: AsyncWrite + Unpin,
{
    while let Some(event) = events.recv().await {
        if let AppEvent::Quit = event {
            break;
        }
        if let Some(notice) = app.handle(event) {
            if let Err(err) = out.write_all(format!("{notice}\n").as_bytes()).await {
                tracing::warn!(error = %err, "Failed to print a notice.");
            }
        }
    }
    let _ = out.flush().await;
    app
}
