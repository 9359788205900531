use expose_core::{PlacementConfig, PointInt, Rectangle};
use expose_placement::{
    compute_placement, NaturalPlacement, Overview, PlacementApplier, PlacementEntry,
    PlacementError, RedrawScheduler, ThumbnailPlacement, WindowGeometrySource, WindowKind,
    WindowSnapshot,
};
use pretty_assertions::assert_eq;

struct StaticWindows(Vec<WindowSnapshot<u64>>);

impl WindowGeometrySource for StaticWindows {
    type Id = u64;

    fn windows(&self) -> Vec<WindowSnapshot<u64>> {
        self.0.clone()
    }
}

#[derive(Default)]
struct RecordingApplier {
    applied: Vec<ThumbnailPlacement<u64>>,
}

impl PlacementApplier<u64> for RecordingApplier {
    fn apply(&mut self, placement: &ThumbnailPlacement<u64>) {
        self.applied.push(placement.clone());
    }
}

#[derive(Default)]
struct CountingRedraw {
    requests: usize,
}

impl RedrawScheduler for CountingRedraw {
    fn schedule_redraw(&mut self) {
        self.requests += 1;
    }
}

fn window(id: u64, rect: Rectangle, kind: WindowKind) -> WindowSnapshot<u64> {
    WindowSnapshot { id, outer_rect: rect, kind }
}

fn overview() -> Overview {
    Overview::new(NaturalPlacement::default(), Rectangle::new(0, 0, 400, 400))
}

#[test]
fn arrange_places_only_normal_windows_and_redraws_once() {
    let source = StaticWindows(vec![
        window(1, Rectangle::new(0, 0, 100, 100), WindowKind::Normal),
        window(2, Rectangle::new(0, 370, 400, 30), WindowKind::Dock),
        window(3, Rectangle::new(50, 50, 100, 100), WindowKind::Normal),
        window(4, Rectangle::new(60, 60, 40, 20), WindowKind::Dialog),
    ]);
    let mut applier = RecordingApplier::default();
    let mut redraw = CountingRedraw::default();

    let placed = overview().arrange(&source, &mut applier, &mut redraw).unwrap();

    assert_eq!(placed, 2);
    assert_eq!(redraw.requests, 1);
    let ids: Vec<u64> = applier.applied.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let expected = compute_placement(
        &[
            PlacementEntry::new(1u64, Rectangle::new(0, 0, 100, 100)),
            PlacementEntry::new(3u64, Rectangle::new(50, 50, 100, 100)),
        ],
        Rectangle::new(0, 0, 400, 400),
    )
    .unwrap();
    for (thumbnail, result) in applier.applied.iter().zip(&expected) {
        assert_eq!(thumbnail.final_rect, result.final_rect);
        assert_eq!(thumbnail.scale, result.scale);
    }
}

#[test]
fn thumbnails_are_anchored_at_their_scaled_center() {
    let source = StaticWindows(vec![
        window(1, Rectangle::new(0, 0, 100, 100), WindowKind::Normal),
        window(3, Rectangle::new(50, 50, 100, 100), WindowKind::Normal),
    ]);
    let mut applier = RecordingApplier::default();
    let mut redraw = CountingRedraw::default();

    overview().arrange(&source, &mut applier, &mut redraw).unwrap();

    assert_eq!(applier.applied[0].final_rect, Rectangle::new(10, 10, 85, 85));
    assert_eq!(applier.applied[0].anchor, PointInt::new(52, 52));
    assert_eq!(applier.applied[1].final_rect, Rectangle::new(152, 92, 200, 200));
    assert_eq!(applier.applied[1].anchor, PointInt::new(252, 192));
}

#[test]
fn arrange_without_eligible_windows_does_nothing() {
    let source = StaticWindows(vec![
        window(1, Rectangle::new(0, 0, 1920, 1080), WindowKind::Desktop),
        window(2, Rectangle::new(0, 1050, 1920, 30), WindowKind::Dock),
    ]);
    let mut applier = RecordingApplier::default();
    let mut redraw = CountingRedraw::default();

    let placed = overview().arrange(&source, &mut applier, &mut redraw).unwrap();

    assert_eq!(placed, 0);
    assert!(applier.applied.is_empty());
    assert_eq!(redraw.requests, 0);
}

#[test]
fn arrange_surfaces_invalid_windows_without_redrawing() {
    let source =
        StaticWindows(vec![window(9, Rectangle::new(0, 0, 0, 100), WindowKind::Normal)]);
    let mut applier = RecordingApplier::default();
    let mut redraw = CountingRedraw::default();

    let result = overview().arrange(&source, &mut applier, &mut redraw);

    assert!(matches!(result, Err(PlacementError::InvalidWindowRect { index: 0, .. })));
    assert!(applier.applied.is_empty());
    assert_eq!(redraw.requests, 0);
}

#[test]
fn overview_for_viewport_uses_configured_padding() {
    let mut config = PlacementConfig::default();
    config.padding.top = 48;
    let overview = Overview::for_viewport(config, 1280, 800).unwrap();
    assert_eq!(overview.area(), Rectangle::new(12, 48, 1256, 740));
}

#[test]
fn arrange_rejects_zero_accuracy_without_placing() {
    let config = PlacementConfig { accuracy: 0, ..PlacementConfig::default() };
    assert!(matches!(
        Overview::for_viewport(config.clone(), 400, 400),
        Err(PlacementError::Core(_))
    ));

    let overview = Overview::new(NaturalPlacement::new(config), Rectangle::new(0, 0, 400, 400));
    let source =
        StaticWindows(vec![window(1, Rectangle::new(0, 0, 100, 100), WindowKind::Normal)]);
    let mut applier = RecordingApplier::default();
    let mut redraw = CountingRedraw::default();

    let result = overview.arrange(&source, &mut applier, &mut redraw);

    assert!(matches!(result, Err(PlacementError::Core(_))));
    assert!(applier.applied.is_empty());
    assert_eq!(redraw.requests, 0);
}
