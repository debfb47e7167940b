use std::borrow::Cow;

use rosu_map::{section::hit_objects::CurveBuffers, util::Pos};

use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    model::hit_object::{HitObject, HitObjectKind, NestedSliderObject, NestedSliderObjectKind},
};

use super::{
    movement::{DistanceScaling, Movement},
    HD_FADE_OUT_DURATION_MULTIPLIER,
};

pub struct OsuDifficultyObject<'a> {
    pub idx: usize,
    pub base: &'a HitObject,
    pub start_time: f64,
    pub delta_time: f64,

    pub adjusted_delta_time: f64,
    /// Cursor movements required to complete this object, starting with the
    /// movement that leads to its head.
    pub movements: Vec<Movement>,
    pub lazy_jump_dist: f64,
    pub min_jump_dist: f64,
    pub min_jump_time: f64,
    pub travel_dist: f64,
    pub travel_time: f64,
    pub lazy_end_pos: Option<Pos>,
    pub lazy_travel_dist: f64,
    pub lazy_travel_time: f64,
    pub angle: Option<f64>,
    pub angle_signed: Option<f64>,
    pub normalised_vector_angle: Option<f64>,

    pub small_circle_bonus: f64,
    pub hit_window_great: f64,
    /// Time a player may gain by hitting the object late.
    pub extra_delta_time: f64,
}

impl<'a> OsuDifficultyObject<'a> {
    pub const NORMALIZED_RADIUS: i32 = 50;
    pub const NORMALIZED_DIAMETER: i32 = Self::NORMALIZED_RADIUS * 2;

    pub const MIN_DELTA_TIME: f64 = 25.0;
    const MAX_SLIDER_RADIUS: f32 = Self::NORMALIZED_RADIUS as f32 * 2.4;
    const ASSUMED_SLIDER_RADIUS: f32 = Self::NORMALIZED_RADIUS as f32 * 1.8;

    /// Distance in normalized units the cursor may lag behind a slider's
    /// nested objects.
    const NESTED_LENIENCY: f64 = Self::NORMALIZED_RADIUS as f64;

    fn new(
        hit_object: &'a HitObject,
        last_object: &'a HitObject,
        idx: usize,
        clock_rate: f64,
        hit_window_great: f64,
        scaling: DistanceScaling,
        curve_bufs: &mut CurveBuffers,
    ) -> Self {
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;
        let start_time = hit_object.start_time / clock_rate;

        // * Capped to 25ms to prevent difficulty calculation breaking from simultaneous objects.
        let adjusted_delta_time = delta_time.max(Self::MIN_DELTA_TIME);
        let small_circle_bonus = (1.0 + (30.0 - hit_object.radius) / 40.0).max(1.0);

        let hit_window_great = if hit_object.is_spinner() {
            0.0
        } else {
            hit_window_great
        };

        let mut this = Self {
            idx,
            base: hit_object,
            start_time,
            delta_time,
            adjusted_delta_time,
            movements: Vec::new(),
            lazy_jump_dist: 0.0,
            min_jump_dist: 0.0,
            min_jump_time: 0.0,
            travel_dist: 0.0,
            travel_time: 0.0,
            lazy_end_pos: None,
            lazy_travel_dist: 0.0,
            lazy_travel_time: 0.0,
            angle: None,
            angle_signed: None,
            normalised_vector_angle: None,
            small_circle_bonus,
            hit_window_great,
            extra_delta_time: hit_window_great / 2.0,
        };

        this.compute_slider_movements(clock_rate, scaling, curve_bufs);

        this
    }

    pub fn opacity_at(&self, time: f64, hidden: bool, time_preempt: f64, time_fade_in: f64) -> f64 {
        if time > self.base.start_time {
            // * Consider a hitobject as being invisible when its start time is passed.
            // * In reality the hitobject will be visible beyond its start time up until its hittable window has passed,
            // * but this is an approximation and such a case is unlikely to be hit where this function is used.
            return 0.0;
        }

        let fade_in_start_time = self.base.start_time - time_preempt;
        let fade_in_duration = time_fade_in;

        if hidden {
            // * Taken from OsuModHidden.
            let fade_out_start_time = self.base.start_time - time_preempt + time_fade_in;
            let fade_out_duration = time_preempt * HD_FADE_OUT_DURATION_MULTIPLIER;

            (((time - fade_in_start_time) / fade_in_duration).clamp(0.0, 1.0))
                .min(1.0 - ((time - fade_out_start_time) / fade_out_duration).clamp(0.0, 1.0))
        } else {
            ((time - fade_in_start_time) / fade_in_duration).clamp(0.0, 1.0)
        }
    }

    /// How possible it is to doubletap this object together with the next one
    /// and get a perfect judgement, in range from 0 to 1.
    pub fn get_doubletapness(&self, next: Option<&Self>) -> f64 {
        let Some(next) = next else { return 0.0 };

        let curr_delta_time = self.delta_time.max(1.0);
        let next_delta_time = next.delta_time.max(1.0);
        let delta_diff = (next_delta_time - curr_delta_time).abs();
        let speed_ratio = curr_delta_time / curr_delta_time.max(delta_diff);
        let window_ratio = (curr_delta_time / self.hit_window_great).min(1.0).powf(2.0);

        1.0 - (speed_ratio).powf(1.0 - window_ratio)
    }

    /// Phase one: cursor movements along the object's own slider path.
    fn compute_slider_movements(
        &mut self,
        clock_rate: f64,
        scaling: DistanceScaling,
        curve_bufs: &mut CurveBuffers,
    ) {
        const TAIL_LENIENCY: f64 = -36.0;

        let HitObjectKind::Slider(ref slider) = self.base.kind else {
            return;
        };

        let pos = self.base.pos;
        let radius = self.base.radius;
        let start_time = self.base.start_time;
        let duration = slider.duration;

        let mut nested_objects = Cow::Borrowed(slider.nested_objects.as_slice());

        let mut tracking_end_time =
            (start_time + duration + TAIL_LENIENCY).max(start_time + duration / 2.0);

        let last_real_tick = nested_objects
            .iter()
            .enumerate()
            .rfind(|(_, nested)| nested.kind == NestedSliderObjectKind::Tick);

        if let Some((idx, last_real_tick)) =
            last_real_tick.filter(|(_, tick)| tick.start_time > tracking_end_time)
        {
            tracking_end_time = last_real_tick.start_time;

            // * When the last tick falls after the tracking end time, we need to re-sort the nested objects
            // * based on time. This creates a somewhat weird ordering which is counter to how a user would
            // * understand the slider, but allows a zero-diff with known diffcalc output.
            nested_objects.to_mut()[idx..].rotate_left(1);
        }

        self.lazy_travel_time = tracking_end_time - start_time;

        let span_duration = duration / slider.span_count() as f64;

        let mut end_time_min = if span_duration > 0.0 {
            self.lazy_travel_time / span_duration
        } else {
            0.0
        };

        if end_time_min % 2.0 >= 1.0 {
            end_time_min = 1.0 - end_time_min % 1.0;
        } else {
            end_time_min %= 1.0;
        }

        let mut lazy_end_pos = pos + slider.curve(curve_bufs).position_at(end_time_min);

        let mut curr_cursor_pos = pos;
        let mut curr_cursor_time = start_time;

        // * lazySliderDistance is coded to be sensitive to scaling, this makes the maths easier with the thresholds being used.
        let scaling_factor = f64::from(Self::NORMALIZED_RADIUS) / radius;

        let nested_objects: &[NestedSliderObject] = nested_objects.as_ref();

        for (curr_movement_obj, i) in nested_objects.iter().zip(1..) {
            let is_last = i == nested_objects.len();

            let mut curr_movement = curr_movement_obj.pos - curr_cursor_pos;
            let mut new_cursor_time = curr_movement_obj.start_time;

            if is_last {
                // * The end of a slider has special aim rules due to the relaxed time constraint on position.
                // * We assume the player takes the simpler movement.
                let lazy_movement = lazy_end_pos - curr_cursor_pos;

                if lazy_movement.length() < curr_movement.length() {
                    curr_movement = lazy_movement;
                    new_cursor_time = tracking_end_time;
                }
            }

            let curr_movement_len = scaling_factor * f64::from(curr_movement.length());

            if curr_movement_len > Self::NESTED_LENIENCY {
                let multiplier = (curr_movement_len - Self::NESTED_LENIENCY) / curr_movement_len;
                let new_cursor_pos = curr_cursor_pos + curr_movement * multiplier as f32;

                self.movements.push(Movement {
                    start: curr_cursor_pos,
                    start_time: curr_cursor_time / clock_rate,
                    start_radius: radius,
                    end: new_cursor_pos,
                    end_time: new_cursor_time / clock_rate,
                    end_radius: radius,
                    is_nested: true,
                    scaling,
                });

                self.lazy_travel_dist += curr_movement_len - Self::NESTED_LENIENCY;
                curr_cursor_pos = new_cursor_pos;
                curr_cursor_time = new_cursor_time;
            }

            if is_last {
                lazy_end_pos = curr_cursor_pos;
            }
        }

        self.lazy_end_pos = Some(lazy_end_pos);
    }

    /// Phase two: remove movements of the previous object that the
    /// head-to-head jump onto `self` already covers, then prepend the
    /// movement leading to `self`.
    fn link(
        &mut self,
        last_object: &HitObject,
        prev: Option<&mut Self>,
        clock_rate: f64,
        scaling: DistanceScaling,
    ) {
        let (start, start_time, start_radius) = if let Some(prev) = prev {
            prev.remove_redundant_movements(self, scaling);

            match prev.movements.last() {
                Some(m) => (m.end, m.end_time, m.end_radius),
                None => (prev.base.pos, prev.start_time, prev.base.radius),
            }
        } else {
            // * The first object has no difficulty object to take a radius from
            (
                last_object.end_pos(),
                last_object.start_time / clock_rate,
                1.0,
            )
        };

        let leading = Movement {
            start,
            start_time,
            start_radius,
            end: self.base.pos,
            end_time: self.start_time,
            end_radius: self.base.radius,
            is_nested: false,
            scaling,
        };

        self.movements.insert(0, leading);
    }

    fn remove_redundant_movements(&mut self, next: &Self, scaling: DistanceScaling) {
        let len = self.movements.len();

        if len < 2 {
            return;
        }

        let head_to_head = Movement {
            start: self.base.pos,
            start_time: self.start_time,
            start_radius: self.base.radius,
            end: next.base.pos,
            end_time: next.start_time,
            end_radius: next.base.radius,
            is_nested: false,
            scaling,
        };

        let mut remove = vec![false; len];
        let mut any_candidate = false;

        for i in 1..len {
            if head_to_head.stays_within_radius(&self.movements[i], next.base.radius) {
                // * if a movement repeats head-to-head movement it can be removed,
                // * but only if all subsequent movements also follow the same line
                remove[i] = true;
                any_candidate = true;
            } else if any_candidate {
                remove.iter_mut().for_each(|flag| *flag = false);

                break;
            }
        }

        // Short movements hand their start over to the following movement
        for i in 1..len - 1 {
            let curr = self.movements[i];

            if curr.distance() < Self::NESTED_LENIENCY {
                let next_movement = &mut self.movements[i + 1];
                next_movement.start = curr.start;
                next_movement.start_time = curr.start_time;
                next_movement.start_radius = curr.start_radius;

                remove[i] = true;
            }
        }

        let mut flags = remove.into_iter();
        self.movements.retain(|_| !flags.next().unwrap_or(false));
    }

    fn set_distances(
        &mut self,
        last_object: &HitObject,
        last_diff_obj: Option<&OsuDifficultyObject<'_>>,
        last_last_diff_obj: Option<&OsuDifficultyObject<'_>>,
        clock_rate: f64,
    ) {
        if let HitObjectKind::Slider(ref slider) = self.base.kind {
            self.travel_dist =
                self.lazy_travel_dist * ((1.0 + slider.repeats as f64 / 2.5).powf(1.0 / 2.5));

            self.travel_time = (self.lazy_travel_time / clock_rate).max(Self::MIN_DELTA_TIME);
        }

        if self.base.is_spinner() || last_object.is_spinner() {
            return;
        }

        let scaling_factor = (f64::from(Self::NORMALIZED_RADIUS) / self.base.radius) as f32;

        let last_cursor_pos = last_diff_obj.map_or(last_object.pos, Self::get_end_cursor_pos);

        let jump = self.base.pos * scaling_factor - last_cursor_pos * scaling_factor;

        self.lazy_jump_dist = f64::from(jump.length());
        self.min_jump_time = self.adjusted_delta_time;
        self.min_jump_dist = self.lazy_jump_dist;

        if self.lazy_jump_dist > 0.0 {
            let direction = f64::from(jump.y).atan2(f64::from(jump.x));
            self.normalised_vector_angle = Some(direction.rem_euclid(std::f64::consts::PI));
        }

        let Some(last_diff_obj) = last_diff_obj else {
            return;
        };

        if last_object.is_slider() {
            let last_travel_time =
                (last_diff_obj.lazy_travel_time / clock_rate).max(Self::MIN_DELTA_TIME);
            self.min_jump_time =
                (self.adjusted_delta_time - last_travel_time).max(Self::MIN_DELTA_TIME);

            let tail_jump_dist = (last_object.end_pos() - self.base.pos).length() * scaling_factor;

            let diff = f64::from(Self::MAX_SLIDER_RADIUS - Self::ASSUMED_SLIDER_RADIUS);

            let min = f64::from(tail_jump_dist - Self::MAX_SLIDER_RADIUS);
            self.min_jump_dist = ((self.lazy_jump_dist - diff).min(min)).max(0.0);
        }

        let Some(last_last_diff_obj) = last_last_diff_obj else {
            return;
        };

        if !last_last_diff_obj.base.is_spinner() {
            let last_last_cursor_pos = Self::get_end_cursor_pos(last_last_diff_obj);

            let v1 = last_last_cursor_pos - last_object.pos;
            let v2 = self.base.pos - last_cursor_pos;

            let dot = v1.dot(v2);
            let det = v1.x * v2.y - v1.y * v2.x;

            let angle = f64::from(det).atan2(f64::from(dot));

            self.angle_signed = Some(angle);
            self.angle = Some(angle.abs());
        }
    }

    fn get_end_cursor_pos(hit_object: &OsuDifficultyObject<'_>) -> Pos {
        hit_object.lazy_end_pos.unwrap_or(hit_object.base.pos)
    }
}

/// Creates the difficulty object of every hit object but the first.
///
/// `hit_window_great` is the full window of a great hit i.e. both sides,
/// already adjusted by the clock rate.
pub fn create_difficulty_objects(
    hit_objects: &[HitObject],
    clock_rate: f64,
    hit_window_great: f64,
    scaling: DistanceScaling,
) -> Vec<OsuDifficultyObject<'_>> {
    let mut curve_bufs = CurveBuffers::default();

    let mut diff_objects: Vec<_> = hit_objects
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| {
            OsuDifficultyObject::new(
                &pair[1],
                &pair[0],
                idx,
                clock_rate,
                hit_window_great,
                scaling,
                &mut curve_bufs,
            )
        })
        .collect();

    for idx in 0..diff_objects.len() {
        let (done, rest) = diff_objects.split_at_mut(idx);
        let curr = &mut rest[0];
        let last_object = &hit_objects[idx];

        curr.link(last_object, done.last_mut(), clock_rate, scaling);

        let last_last_diff_obj = idx.checked_sub(2).and_then(|i| done.get(i));

        curr.set_distances(last_object, done.last(), last_last_diff_obj, clock_rate);
    }

    diff_objects
}

impl IDifficultyObject for OsuDifficultyObject<'_> {
    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for OsuDifficultyObject<'_> {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}
