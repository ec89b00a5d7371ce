use crate::geo::models::Coordinate;
use crate::pins::models::Pin;
use std::fmt;
use uuid::Uuid;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationId(Uuid);

impl AnnotationId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Projection of a persisted pin.
    Pin,
    /// Search result, never persisted.
    Transient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub id: AnnotationId,
    pub kind: AnnotationKind,
    pub coordinate: Coordinate,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl Annotation {
    pub fn for_pin(pin: &Pin) -> Self {
        Self {
            id: AnnotationId::random(),
            kind: AnnotationKind::Pin,
            coordinate: pin.location,
            title: pin.label.clone(),
            subtitle: None,
        }
    }

    pub fn transient(
        coordinate: Coordinate,
        title: Option<String>,
        subtitle: Option<String>,
    ) -> Self {
        Self {
            id: AnnotationId::random(),
            kind: AnnotationKind::Transient,
            coordinate,
            title,
            subtitle,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            AnnotationKind::Pin => "pin",
            AnnotationKind::Transient => "result",
        };
        write!(
            f,
            "[{marker}] {} {}",
            self.title.as_deref().unwrap_or("(untitled)"),
            self.coordinate
        )?;
        if let Some(subtitle) = &self.subtitle {
            write!(f, " - {subtitle}")?;
        }
        Ok(())
    }
}
