use expose_core::{PlacementConfig, Rectangle};
use expose_placement::gap_filler::fill_gaps;
use expose_placement::rescaler::fit_into_area;
use expose_placement::resolver::resolve_overlaps;
use expose_placement::{compute_placement, NaturalPlacement, PlacementEntry, PlacementError};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn r(x: i32, y: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(x, y, width, height)
}

fn entries(rects: &[Rectangle]) -> Vec<PlacementEntry<usize>> {
    rects.iter().enumerate().map(|(i, rect)| PlacementEntry::new(i, *rect)).collect()
}

fn scene(name: &str) -> (Vec<Rectangle>, Rectangle) {
    match name {
        "pair" => (vec![r(0, 0, 100, 100), r(50, 50, 100, 100)], r(0, 0, 400, 400)),
        "five_dense" => (vec![r(0, 0, 600, 500); 5], r(0, 0, 800, 600)),
        "mixed" => (
            vec![r(0, 0, 300, 200), r(100, 50, 300, 200), r(120, 80, 200, 300), r(10, 10, 50, 50)],
            r(0, 0, 1024, 768),
        ),
        "coincident" => (vec![r(100, 100, 50, 50); 3], r(0, 0, 800, 600)),
        "desktop" => (
            vec![
                r(0, 0, 1280, 720),
                r(200, 100, 800, 600),
                r(640, 360, 640, 360),
                r(50, 500, 400, 300),
                r(900, 50, 300, 500),
                r(0, 0, 1920, 1080),
            ],
            r(12, 12, 1896, 1056),
        ),
        "offscreen" => {
            (vec![r(-200, -100, 500, 400), r(1500, 900, 600, 300)], r(12, 12, 1896, 1056))
        }
        other => panic!("unknown scene {}", other),
    }
}

/// Runs the stages one by one to look at the gap-inflated rectangles.
fn filled_layout(windows: &[Rectangle], area: Rectangle) -> Vec<Rectangle> {
    let config = PlacementConfig::default();
    let resolution = resolve_overlaps(windows, area, &config);
    assert!(resolution.converged);
    let mut rects = resolution.rects;
    fit_into_area(&mut rects, resolution.bounds, area);
    fill_gaps(&mut rects, area, config.accuracy);
    rects
}

#[rstest]
#[case("pair")]
#[case("five_dense")]
#[case("mixed")]
#[case("coincident")]
#[case("desktop")]
#[case("offscreen")]
fn filled_rects_do_not_overlap(#[case] name: &str) {
    let (windows, area) = scene(name);
    let rects = filled_layout(&windows, area);
    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate() {
            if i != j {
                assert!(!a.overlaps(b), "{}: {:?} overlaps {:?}", name, a, b);
            }
        }
    }
}

#[rstest]
#[case("pair")]
#[case("five_dense")]
#[case("mixed")]
#[case("coincident")]
#[case("desktop")]
#[case("offscreen")]
fn filled_rects_stay_inside_the_area(#[case] name: &str) {
    let (windows, area) = scene(name);
    for rect in filled_layout(&windows, area) {
        assert!(area.contains(&rect), "{}: {:?} escapes {:?}", name, rect, area);
    }
}

#[rstest]
#[case("pair")]
#[case("mixed")]
#[case("desktop")]
fn scales_respect_the_clamp(#[case] name: &str) {
    let (windows, area) = scene(name);
    let results = compute_placement(&entries(&windows), area).unwrap();
    for (window, result) in windows.iter().zip(&results) {
        let large = window.width > 300 || window.height > 300;
        let limit = if large { 1.0 } else { 2.0 };
        assert!(result.scale <= limit, "{}: {:?} scaled by {}", name, window, result.scale);
        assert!(result.scale > 0.0);
    }
}

#[test]
fn overlapping_pair_is_separated_and_not_upscaled_by_the_fit() {
    let (windows, area) = scene("pair");
    let outcome = NaturalPlacement::default().place(&entries(&windows), area).unwrap();

    assert!(outcome.diagnostics.converged);
    assert_eq!(outcome.diagnostics.corrections, 3);
    assert!(outcome.diagnostics.fit_scale <= 1.0);
    assert_eq!(outcome.placements[0].final_rect, r(10, 10, 85, 85));
    assert_eq!(outcome.placements[1].final_rect, r(152, 92, 200, 200));
    assert!(!outcome.placements[0].final_rect.overlaps(&outcome.placements[1].final_rect));
}

#[test]
fn single_window_with_room_is_not_shrunk() {
    let outcome = NaturalPlacement::default()
        .place(&entries(&[r(100, 100, 400, 300)]), r(0, 0, 1000, 800))
        .unwrap();

    assert_eq!(outcome.diagnostics.fit_scale, 1.0);
    assert_eq!(outcome.placements[0].scale, 1.0);
    assert_eq!(outcome.placements[0].final_rect, r(240, 320, 400, 300));
}

#[test]
fn single_window_is_centered_in_an_offset_area() {
    let outcome = NaturalPlacement::default()
        .place(&entries(&[r(100, 100, 400, 300)]), r(12, 12, 976, 776))
        .unwrap();

    let rect = outcome.placements[0].final_rect;
    assert_eq!(rect, r(200, 280, 400, 300));
    assert_eq!(outcome.diagnostics.fill_passes, 6);
}

#[test]
fn dense_windows_terminate_and_shrink() {
    let (windows, area) = scene("five_dense");
    let outcome = NaturalPlacement::default().place(&entries(&windows), area).unwrap();

    assert!(outcome.diagnostics.converged);
    assert_eq!(outcome.diagnostics.corrections, 243);
    assert!(outcome.diagnostics.fit_scale < 1.0);
    assert_eq!(outcome.diagnostics.resolved_bounds, r(-1250, -10, 3100, 610));

    let xs: Vec<i32> = outcome.placements.iter().map(|p| p.final_rect.x).collect();
    assert_eq!(xs, vec![10, 650, 170, 490, 330]);
    for placement in &outcome.placements {
        let rect = placement.final_rect;
        assert_eq!((rect.y, rect.width, rect.height), (67, 140, 114));
        assert!((placement.scale - 140.0 / 600.0).abs() < 1e-6);
    }
}

#[test]
fn correction_cap_reports_non_convergence_without_failing() {
    let (windows, area) = scene("five_dense");
    let config = PlacementConfig { max_corrections: 1, ..PlacementConfig::default() };
    let outcome = NaturalPlacement::new(config).place(&entries(&windows), area).unwrap();

    assert!(!outcome.diagnostics.converged);
    assert_eq!(outcome.placements.len(), 5);
}

#[test]
fn identical_input_gives_identical_output() {
    let (windows, area) = scene("desktop");
    let first = NaturalPlacement::default().place(&entries(&windows), area).unwrap();
    let second = NaturalPlacement::default().place(&entries(&windows), area).unwrap();
    assert_eq!(first, second);
}

#[test]
fn input_order_changes_the_layout() {
    let (windows, area) = scene("pair");
    let forward = compute_placement(&entries(&windows), area).unwrap();

    let reversed_windows: Vec<Rectangle> = windows.iter().rev().copied().collect();
    let reversed = compute_placement(&entries(&reversed_windows), area).unwrap();

    // Same window, different tie-break index, different spot.
    assert_eq!(forward[1].final_rect, r(152, 92, 200, 200));
    assert_eq!(reversed[0].final_rect, r(153, 93, 200, 200));
    assert_eq!(forward[0].final_rect, reversed[1].final_rect);
}

#[test]
fn resolver_leaves_its_own_output_alone() {
    let (windows, area) = scene("mixed");
    let config = PlacementConfig::default();
    let first = resolve_overlaps(&windows, area, &config);

    let deflated: Vec<Rectangle> = first
        .rects
        .iter()
        .map(|rect| rect.adjusted(config.gap, config.gap, -config.gap, -config.gap))
        .collect();
    let second = resolve_overlaps(&deflated, area, &config);

    assert_eq!(second.corrections, 0);
    assert_eq!(second.rects, first.rects);
}

#[test]
fn contract_violations_are_reported_before_any_work() {
    let area = r(0, 0, 800, 600);
    assert!(matches!(compute_placement::<usize>(&[], area), Err(PlacementError::NoEntries)));
    assert!(matches!(
        compute_placement(&entries(&[r(0, 0, 10, 10)]), r(0, 0, -1, 600)),
        Err(PlacementError::InvalidArea { .. })
    ));
    assert!(matches!(
        compute_placement(&entries(&[r(0, 0, 10, 10), r(5, 5, 10, 0)]), area),
        Err(PlacementError::InvalidWindowRect { index: 1, .. })
    ));
}
