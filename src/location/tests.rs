use crate::geo::models::{Coordinate, Region};
use crate::location::feed;
use crate::location::filter::DistanceFilter;
use crate::location::LocationAdapter;
use crate::map::surface::{InMemoryMapSurface, MapSurface};
use crate::storage::tests::temp_store_path;
use futures_util::StreamExt;

#[test]
fn first_fix_recenters_with_default_span() {
    let mut adapter = LocationAdapter::default();
    let mut surface = InMemoryMapSurface::default();
    let fix = Coordinate::new(35.0, 139.0);

    let region = adapter.on_update(&mut surface, Some(fix));

    assert_eq!(region, Some(Region::around(fix)));
    assert_eq!(surface.region(), Some(Region::around(fix)));
}

#[test]
fn missing_fix_is_skipped() {
    let mut adapter = LocationAdapter::default();
    let mut surface = InMemoryMapSurface::default();

    assert_eq!(adapter.on_update(&mut surface, None), None);
    assert_eq!(surface.region(), None);
}

#[test]
fn movement_under_ten_meters_is_filtered() {
    let mut adapter = LocationAdapter::default();
    let mut surface = InMemoryMapSurface::default();
    let start = Coordinate::new(35.0, 139.0);
    // Roughly 5.5 m north.
    let nudge = Coordinate::new(35.00005, 139.0);
    // Roughly 111 m north.
    let walk = Coordinate::new(35.001, 139.0);

    adapter.on_update(&mut surface, Some(start));
    assert_eq!(adapter.on_update(&mut surface, Some(nudge)), None);
    assert_eq!(surface.region(), Some(Region::around(start)));

    assert_eq!(
        adapter.on_update(&mut surface, Some(walk)),
        Some(Region::around(walk))
    );
}

#[test]
fn filter_measures_from_last_delivered_fix() {
    let mut filter = DistanceFilter::new(10.0);

    assert!(filter.accept(Coordinate::new(0.0, 0.0)));
    // Each step is about 5.5 m, the second one crosses the threshold.
    assert!(!filter.accept(Coordinate::new(0.00005, 0.0)));
    assert!(filter.accept(Coordinate::new(0.0001, 0.0)));
}

#[test]
fn feed_lines_are_parsed() {
    assert_eq!(
        feed::parse_fix(r#"{"latitude": 1.5, "longitude": 2.5}"#),
        Some(Some(Coordinate::new(1.5, 2.5)))
    );
    assert_eq!(feed::parse_fix("null"), Some(None));
    assert_eq!(feed::parse_fix("   "), None);
    assert_eq!(feed::parse_fix("{\"lat\": 1}"), None);
}

#[tokio::test]
async fn feed_file_yields_fixes_in_order() {
    let path = temp_store_path();
    std::fs::write(
        &path,
        "{\"latitude\": 1.0, \"longitude\": 2.0}\nnull\ngarbage\n{\"latitude\": 3.0, \"longitude\": 4.0}\n",
    )
    .expect("Failed to write test fixture.");

    let fixes = feed::from_file(&path)
        .await
        .expect("Failed to open the feed.")
        .collect::<Vec<_>>()
        .await;

    assert_eq!(
        fixes,
        vec![
            Some(Coordinate::new(1.0, 2.0)),
            None,
            Some(Coordinate::new(3.0, 4.0)),
        ]
    );
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn replay_posts_every_fix_as_an_event() {
    let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
    let fixes = futures_util::stream::iter(vec![Some(Coordinate::new(1.0, 2.0)), None]);

    feed::replay(fixes, std::time::Duration::ZERO, sender).await;

    assert!(matches!(
        receiver.recv().await,
        Some(crate::app::models::AppEvent::LocationUpdated(Some(_)))
    ));
    assert!(matches!(
        receiver.recv().await,
        Some(crate::app::models::AppEvent::LocationUpdated(None))
    ));
    assert!(receiver.recv().await.is_none());
}
