use crate::map::models::Annotation;
use crate::map::surface::MapSurface;
use crate::pins::models::Pin;
use crate::pins::store::PinStore;
use crate::storage::interface::KeyValueStore;

/// Keeps the annotations shown on a [`MapSurface`] consistent with a [`PinStore`].
pub struct MapSynchronizer<S: KeyValueStore, M: MapSurface> {
    pins: PinStore<S>,
    surface: M,
}

impl<S, M> MapSynchronizer<S, M>
where
    S: KeyValueStore,
    M: MapSurface,
{
    pub fn new(pins: PinStore<S>, surface: M) -> Self {
        Self { pins, surface }
    }

    /// Replaces everything on the surface, search results included, with the stored pins.
    pub fn reload_all(&mut self) {
        self.surface.remove_all_annotations();
        let pins = self.pins.load_pins();
        let count = pins.len();
        for pin in &pins {
            self.surface.add_annotation(Annotation::for_pin(pin));
        }
        tracing::info!(task = "pins_reloaded", count);
    }

    /// Pins with a non-finite coordinate can be neither shown nor saved and are dropped.
    pub fn add_one(&mut self, pin: Pin) {
        if !pin.location.is_finite() {
            tracing::warn!(
                latitude = pin.location.latitude,
                longitude = pin.location.longitude,
                "Dropping a pin with a non-finite coordinate.",
            );
            return;
        }
        self.surface.add_annotation(Annotation::for_pin(&pin));
        self.pins.save(&pin);
    }

    pub fn clear_all(&mut self) {
        self.surface.remove_all_annotations();
        self.pins.clear();
    }

    pub fn pins(&self) -> &PinStore<S> {
        &self.pins
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut M {
        &mut self.surface
    }
}
