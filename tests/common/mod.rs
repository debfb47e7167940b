#![allow(dead_code)]

use rosu_strain::{
    catch::{CatchObject, CatchObjectKind},
    model::hit_object::{
        HitObject, NestedSliderObject, NestedSliderObjectKind, PathControlPoint, PathType, Pos,
        Slider,
    },
    taiko::{HitType, TaikoObject},
};

pub const RADIUS: f64 = 32.0;

/// Circles along a horizontal line with constant spacing and interval.
pub fn collinear_circles(n: u32, spacing: f32, interval: f64) -> Vec<HitObject> {
    (0..n)
        .map(|i| {
            let pos = Pos::new(64.0 + spacing * i as f32, 192.0);

            HitObject::circle(pos, f64::from(i) * interval, RADIUS)
        })
        .collect()
}

/// Circles jumping back and forth between two points.
pub fn jumps(n: u32, interval: f64) -> Vec<HitObject> {
    (0..n)
        .map(|i| {
            let x = if i % 2 == 0 { 64.0 } else { 448.0 };

            HitObject::circle(Pos::new(x, 192.0), f64::from(i) * interval, RADIUS)
        })
        .collect()
}

/// A linear slider going `len` osu!pixels to the right with a tick in the
/// middle.
pub fn linear_slider(pos: Pos, start_time: f64, len: f32, duration: f64) -> HitObject {
    let control_points = vec![
        PathControlPoint {
            pos: Pos::new(0.0, 0.0),
            path_type: Some(PathType::LINEAR),
        },
        PathControlPoint {
            pos: Pos::new(len, 0.0),
            path_type: None,
        },
    ];

    let nested_objects = vec![
        NestedSliderObject {
            pos: pos + Pos::new(len / 2.0, 0.0),
            start_time: start_time + duration / 2.0,
            kind: NestedSliderObjectKind::Tick,
        },
        NestedSliderObject {
            pos: pos + Pos::new(len, 0.0),
            start_time: start_time + duration,
            kind: NestedSliderObjectKind::Tail,
        },
    ];

    let slider = Slider {
        duration,
        repeats: 0,
        expected_dist: Some(f64::from(len)),
        control_points: control_points.into_boxed_slice(),
        nested_objects,
    };

    HitObject::slider(pos, start_time, RADIUS, slider)
}

/// Taiko notes from a pattern where `d` is a center, `k` a rim, and any
/// other character a non-hit.
pub fn taiko_pattern(pattern: &str, interval: f64) -> Vec<TaikoObject> {
    pattern
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let hit_type = match c {
                'd' => HitType::Center,
                'k' => HitType::Rim,
                _ => HitType::NonHit,
            };

            TaikoObject::new(i as f64 * interval, hit_type)
        })
        .collect()
}

/// Fruits alternating between both edges of the playfield.
pub fn catch_jumps(n: u32, interval: f64) -> Vec<CatchObject> {
    (0..n)
        .map(|i| {
            let x = if i % 2 == 0 { 64.0 } else { 448.0 };

            CatchObject::new(x, f64::from(i) * interval, CatchObjectKind::Fruit)
        })
        .collect()
}

#[track_caller]
pub fn assert_eq_float(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "actual={actual} | expected={expected}"
    );
}
