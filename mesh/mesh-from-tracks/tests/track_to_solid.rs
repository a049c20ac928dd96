//! End-to-end pipeline tests: recorded tracks and glyph-like bitmaps in,
//! watertight solids out.
//!
//! Run with: cargo test -p mesh-from-tracks --test track_to_solid

use mesh_from_tracks::{solid_from_heightfield, solid_from_track, TrackSolidParams};
use mesh_io::{load_stl, save_stl};
use mesh_repair::validate;
use relief_grid::ElevationGrid;
use track_curve::TrackSample;

/// A synthetic climb: a quarter-circle switchback with rising elevation.
fn climb_samples() -> Vec<TrackSample> {
    (0..10)
        .map(|i| {
            let angle = std::f64::consts::FRAC_PI_2 * f64::from(i) / 9.0;
            TrackSample::new(
                12.0 * angle.cos(),
                12.0 * angle.sin(),
                850.0 + f64::from(i) * 14.0,
            )
        })
        .collect()
}

fn fast_params() -> TrackSolidParams {
    TrackSolidParams::default()
        .with_resolution(150)
        .with_thickness(1.2)
        .with_z_scale(20.0)
        .with_base_fraction(0.05)
}

#[test]
fn climb_track_becomes_watertight_solid() {
    let solid = solid_from_track(&climb_samples(), 0.3, &fast_params()).unwrap();

    assert!(!solid.soup.is_empty());

    let report = validate(&solid.sealed);
    assert!(report.is_watertight, "open edges: {report}");
    assert!(solid.sealed.signed_volume().abs() > 0.0);
}

#[test]
fn solid_reflects_elevation_range() {
    let solid = solid_from_track(&climb_samples(), 0.3, &fast_params()).unwrap();
    let bounds = solid.soup.bounds();

    // Elevation range is 126 m; grid values span the fill epsilon up to
    // roughly 126 + epsilon, times the vertical scale of 20. The highest
    // vertices sit a couple of cells inside the ribbon end (its rim drops
    // to the floor), so the top lands a little under the full range.
    let expected_top = (126.0 + 0.1) * 20.0;
    let top = bounds.max.z;
    assert!(top <= expected_top + 1e-9, "top {top} above {expected_top}");
    assert!(top > expected_top * 0.95, "top {top} far below {expected_top}");
}

#[test]
fn glyph_bitmap_becomes_watertight_solid() {
    // A blocky "T" drawn into a grayscale bitmap, strokes 3 cells wide.
    let rows = 14;
    let cols = 12;
    let mut bytes = vec![0u8; rows * cols];
    for c in 1..11 {
        for r in 1..4 {
            bytes[r * cols + c] = 255;
        }
    }
    for r in 4..13 {
        for c in 4..7 {
            bytes[r * cols + c] = 255;
        }
    }
    let grid = ElevationGrid::from_grayscale(rows, cols, &bytes).unwrap();

    let params = TrackSolidParams::default()
        .with_z_scale(5.0)
        .with_mask_threshold(0.5);
    let solid = solid_from_heightfield(&grid, &params).unwrap();

    let report = validate(&solid.sealed);
    assert!(report.is_watertight, "open edges: {report}");

    // Glyph height: normalized 1.0 times the scale, above a zero base.
    let bounds = solid.soup.bounds();
    assert!((bounds.max.z - 5.0).abs() < 1e-9);
}

#[test]
fn sealed_solid_round_trips_through_stl() {
    let solid = solid_from_track(&climb_samples(), 0.2, &fast_params()).unwrap();
    let exported = solid.sealed.to_soup();

    let mut path = std::env::temp_dir();
    path.push(format!("ridgeline-pipeline-{}.stl", std::process::id()));

    save_stl(&exported, &path, true).unwrap();
    let loaded = load_stl(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.len(), exported.len());
}

#[test]
fn concurrent_pipelines_share_nothing() {
    // A track solid and a glyph solid built on separate threads.
    let track = std::thread::spawn(|| {
        solid_from_track(&climb_samples(), 0.2, &fast_params()).unwrap()
    });

    let glyph = std::thread::spawn(|| {
        let mut grid = ElevationGrid::new(8, 8);
        for r in 2..6 {
            for c in 2..6 {
                grid.set(r, c, 1.0);
            }
        }
        let params = TrackSolidParams::default().with_z_scale(3.0);
        solid_from_heightfield(&grid, &params).unwrap()
    });

    assert!(!track.join().unwrap().soup.is_empty());
    assert!(!glyph.join().unwrap().soup.is_empty());
}
