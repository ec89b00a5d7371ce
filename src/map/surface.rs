use crate::geo::models::Region;
use crate::map::models::{Annotation, AnnotationId};

/// Capabilities the core needs from whatever renders the map.
pub trait MapSurface {
    fn annotations(&self) -> &[Annotation];

    fn add_annotation(&mut self, annotation: Annotation);

    fn remove_annotations(&mut self, ids: &[AnnotationId]);

    fn region(&self) -> Option<Region>;

    fn set_region(&mut self, region: Region);

    fn remove_all_annotations(&mut self) {
        let ids = self
            .annotations()
            .iter()
            .map(|annotation| annotation.id)
            .collect::<Vec<_>>();
        self.remove_annotations(&ids);
    }
}

/// Headless map surface: keeps the annotation list and visible region in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMapSurface {
    annotations: Vec<Annotation>,
    region: Option<Region>,
}

impl MapSurface for InMemoryMapSurface {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    fn remove_annotations(&mut self, ids: &[AnnotationId]) {
        self.annotations
            .retain(|annotation| !ids.contains(&annotation.id));
    }

    fn region(&self) -> Option<Region> {
        self.region
    }

    fn set_region(&mut self, region: Region) {
        self.region = Some(region);
    }
}
