use std::cmp::Ordering;

use rosu_map::section::{
    general::GameMode,
    hit_objects::{Curve, CurveBuffers},
};

pub use rosu_map::{
    section::hit_objects::{PathControlPoint, PathType, SplineType},
    util::Pos,
};

use crate::{any::difficulty::filter::FilterObject, model::error::ValidateObject};

/// An osu!standard hit object.
///
/// Positions are expected to already include the stacking offset.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    /// The effective radius of the object in osu!pixels.
    pub radius: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Create a new circle.
    pub const fn circle(pos: Pos, start_time: f64, radius: f64) -> Self {
        Self {
            pos,
            start_time,
            radius,
            kind: HitObjectKind::Circle,
        }
    }

    /// Create a new slider.
    pub const fn slider(pos: Pos, start_time: f64, radius: f64, slider: Slider) -> Self {
        Self {
            pos,
            start_time,
            radius,
            kind: HitObjectKind::Slider(slider),
        }
    }

    /// Create a new spinner.
    pub const fn spinner(pos: Pos, start_time: f64, radius: f64, duration: f64) -> Self {
        Self {
            pos,
            start_time,
            radius,
            kind: HitObjectKind::Spinner(Spinner { duration }),
        }
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(&self.kind, HitObjectKind::Spinner(_))
    }

    /// Position at which the object is completed, i.e. the slider tail for
    /// sliders and the object's position otherwise.
    pub fn end_pos(&self) -> Pos {
        match self.kind {
            HitObjectKind::Slider(ref slider) => slider
                .nested_objects
                .iter()
                .rfind(|nested| nested.kind == NestedSliderObjectKind::Tail)
                .map_or(self.pos, |tail| tail.pos),
            HitObjectKind::Circle | HitObjectKind::Spinner(_) => self.pos,
        }
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(Slider { duration, .. })
            | HitObjectKind::Spinner(Spinner { duration }) => self.start_time + *duration,
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

impl FilterObject for HitObject {
    fn is_combo(&self) -> bool {
        true
    }
}

impl ValidateObject for HitObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }

    fn is_finite(&self) -> bool {
        let pos_finite = |pos: Pos| pos.x.is_finite() && pos.y.is_finite();

        let kind_finite = match self.kind {
            HitObjectKind::Circle => true,
            HitObjectKind::Slider(ref slider) => {
                slider.duration.is_finite()
                    && slider
                        .nested_objects
                        .iter()
                        .all(|nested| nested.start_time.is_finite() && pos_finite(nested.pos))
            }
            HitObjectKind::Spinner(Spinner { duration }) => duration.is_finite(),
        };

        pos_finite(self.pos) && kind_finite
    }

    fn radius(&self) -> Option<f64> {
        Some(self.radius)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
}

/// A slider.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    /// Duration of all spans combined.
    pub duration: f64,
    pub repeats: usize,
    /// Expected length of the path.
    pub expected_dist: Option<f64>,
    /// Control points relative to the slider head.
    pub control_points: Box<[PathControlPoint]>,
    /// Ticks, repeats, and the tail, sorted by time.
    ///
    /// The head is not included. Positions are absolute.
    pub nested_objects: Vec<NestedSliderObject>,
}

impl Slider {
    /// The amount of spans of the slider.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    /// Creates the [`Curve`] of a [`Slider`].
    pub(crate) fn curve(&self, bufs: &mut CurveBuffers) -> Curve {
        Curve::new(
            GameMode::Osu,
            self.control_points.as_ref(),
            self.expected_dist,
            bufs,
        )
    }
}

/// A nested object of a [`Slider`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NestedSliderObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: NestedSliderObjectKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NestedSliderObjectKind {
    Repeat,
    Tail,
    Tick,
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub duration: f64,
}
