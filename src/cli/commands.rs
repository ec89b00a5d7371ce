use crate::geo::models::Coordinate;
use crate::map::surface::{InMemoryMapSurface, MapSurface};
use crate::map::sync::MapSynchronizer;
use crate::pins::models::Pin;
use crate::pins::store::PinStore;
use crate::storage::interface::KeyValueStore;
use std::io::{self, Write};

pub fn list<S: KeyValueStore>(pins: &PinStore<S>, mut out: impl Write) -> io::Result<()> {
    for record in pins.load() {
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Saves one pin through a headless map and reports how many pins are now displayed.
pub fn add<S: KeyValueStore>(
    pins: PinStore<S>,
    location: Coordinate,
    label: Option<String>,
    mut out: impl Write,
) -> io::Result<()> {
    let mut sync = MapSynchronizer::new(pins, InMemoryMapSurface::default());
    sync.reload_all();
    let pin = Pin::new(location, label);
    sync.add_one(pin.clone());
    writeln!(
        out,
        "Registered \"{}\" at {}, {} pin(s) saved.",
        pin.title(),
        pin.location,
        sync.surface().annotations().len()
    )
}

/// Returns `false` without touching anything unless the deletion was confirmed.
pub fn clear<S: KeyValueStore>(
    pins: PinStore<S>,
    confirmed: bool,
    mut out: impl Write,
) -> io::Result<bool> {
    if !confirmed {
        writeln!(out, "Refusing to delete all pins without `--yes`.")?;
        return Ok(false);
    }
    let mut sync = MapSynchronizer::new(pins, InMemoryMapSurface::default());
    sync.reload_all();
    let count = sync.surface().annotations().len();
    sync.clear_all();
    writeln!(out, "Deleted {count} pin(s).")?;
    Ok(true)
}
