use app::models::AppEvent;
use app::App;
use clap::Parser;
use cli::{Args, Command};
use geo::models::Coordinate;
use location::LocationAdapter;
use map::surface::InMemoryMapSurface;
use map::sync::MapSynchronizer;
use pins::store::PinStore;
use search::nominatim::NominatimSearch;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use storage::file::JsonFileKeyValueStorage;
use tokio::io::BufReader;
use tokio::sync::mpsc;

mod app;
mod cli;
mod geo;
mod location;
mod logging;
mod map;
mod pins;
mod search;
mod shell;
mod storage;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);

    let pins = PinStore::new(JsonFileKeyValueStorage::open(&args.store));
    tracing::info!(store = %pins.storage().path().display(), "Using pin store.");

    let result = match args.command {
        Command::List => cli::commands::list(&pins, io::stdout().lock()),
        Command::Add { lat, lng, label } => cli::commands::add(
            pins,
            Coordinate::new(lat, lng),
            label,
            io::stdout().lock(),
        ),
        Command::Clear { yes } => match cli::commands::clear(pins, yes, io::stdout().lock()) {
            Ok(true) => Ok(()),
            Ok(false) => return ExitCode::FAILURE,
            Err(err) => Err(err),
        },
        Command::Shell {
            location_feed,
            feed_interval_ms,
        } => {
            let search = match NominatimSearch::new(args.geocoder_url.clone(), &args.user_agent) {
                Ok(search) => search,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to set up place search.");
                    return ExitCode::FAILURE;
                }
            };
            interactive(
                pins,
                search,
                location_feed,
                Duration::from_millis(feed_interval_ms),
            )
            .await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed.");
            ExitCode::FAILURE
        }
    }
}

async fn interactive(
    pins: PinStore<JsonFileKeyValueStorage>,
    search: NominatimSearch,
    location_feed: Option<PathBuf>,
    feed_interval: Duration,
) -> io::Result<()> {
    let (events, receiver) = mpsc::unbounded_channel();
    let app = App::new(
        MapSynchronizer::new(pins, InMemoryMapSurface::default()),
        LocationAdapter::default(),
        Arc::new(search),
        events.clone(),
    );
    if events.send(AppEvent::Launched).is_err() {
        tracing::debug!("Event loop is gone, dropping launch event.");
    }

    if let Some(path) = location_feed {
        let fixes = location::feed::from_file(&path).await?;
        tokio::spawn(location::feed::replay(fixes, feed_interval, events.clone()));
        tracing::info!(feed = %path.display(), "Replaying location feed.");
    }

    let shell = shell::Shell::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), events);
    let shell = tokio::spawn(shell.run());
    run_app(app, receiver).await;
    match shell.await {
        Ok(result) => result,
        Err(err) => Err(io::Error::new(io::ErrorKind::Other, err)),
    }
}

async fn run_app(
    app: App<JsonFileKeyValueStorage, InMemoryMapSurface>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
) {
    let app = app::run(app, receiver, tokio::io::stdout()).await;
    tracing::info!(
        pins = app.synchronizer().pins().load().len(),
        "Map session finished.",
    );
}
