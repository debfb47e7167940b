use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    catch::{catcher::Catcher, CatchObject},
};

/// A combo object alongside its hyper dash state.
#[derive(Clone, Debug, PartialEq)]
pub struct PalpableObject {
    pub x: f32,
    pub start_time: f64,
    pub dist_to_hyper_dash: f32,
    pub hyper_dash: bool,
}

impl PalpableObject {
    pub const fn new(hit_object: &CatchObject) -> Self {
        Self {
            x: hit_object.x,
            start_time: hit_object.start_time,
            dist_to_hyper_dash: 0.0,
            hyper_dash: false,
        }
    }
}

/// Determine which objects require a hyper dash to reach their successor and
/// how far the others are from requiring one.
pub fn initialize_hyper_dash(cs: f32, palpable_objects: &mut [PalpableObject]) {
    let mut half_catcher_width = f64::from(Catcher::calculate_catch_width(cs) / 2.0);
    half_catcher_width /= f64::from(Catcher::ALLOWED_CATCH_RANGE);

    let mut last_dir = 0;
    let mut last_excess = half_catcher_width;

    for i in 0..palpable_objects.len().saturating_sub(1) {
        let next = &palpable_objects[i + 1];
        let curr = &palpable_objects[i];

        let this_dir = if next.x > curr.x { 1 } else { -1 };

        // * Int truncation added to match osu!stable.
        let time_to_next = f64::from(
            (next.start_time as i32 - curr.start_time as i32) as f32 - 1000.0 / 60.0 / 4.0,
        );

        let dist_to_next = f64::from((next.x - curr.x).abs())
            - if last_dir == this_dir {
                last_excess
            } else {
                half_catcher_width
            };

        let dist_to_hyper = (time_to_next * Catcher::BASE_SPEED - dist_to_next) as f32;

        let curr = &mut palpable_objects[i];

        if dist_to_hyper < 0.0 {
            curr.hyper_dash = true;
            last_excess = half_catcher_width;
        } else {
            curr.dist_to_hyper_dash = dist_to_hyper;
            last_excess = f64::from(dist_to_hyper).clamp(0.0, half_catcher_width);
        }

        last_dir = this_dir;
    }
}

pub struct CatchDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    pub normalized_pos: f32,
    pub last_normalized_pos: f32,
    pub player_pos: f32,
    pub last_player_pos: f32,
    pub dist_moved: f32,
    pub exact_dist_moved: f32,
    pub strain_time: f64,
    pub last_object: LastObject,
}

impl CatchDifficultyObject {
    pub const NORMALIZED_HALF_CATCHER_WIDTH: f32 = 41.0;

    const ABSOLUTE_PLAYER_POSITIONING_ERROR: f32 = 16.0;

    pub fn new(
        hit_object: &PalpableObject,
        last_object: &PalpableObject,
        clock_rate: f64,
        scaling_factor: f32,
        last_player_pos: Option<f32>,
        idx: usize,
    ) -> Self {
        let normalized_pos = hit_object.x * scaling_factor;
        let last_normalized_pos = last_object.x * scaling_factor;

        let start_time = hit_object.start_time / clock_rate;
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;

        // * Every strain interval is hard capped at the equivalent of 375 BPM streaming speed as a safety measure
        let strain_time = delta_time.max(40.0);

        let last_object = LastObject {
            hyper_dash: last_object.hyper_dash,
            dist_to_hyper_dash: last_object.dist_to_hyper_dash,
            player_pos: last_player_pos,
        };

        let mut this = Self {
            idx,
            start_time,
            delta_time,
            normalized_pos,
            last_normalized_pos,
            player_pos: 0.0,
            last_player_pos: 0.0,
            dist_moved: 0.0,
            exact_dist_moved: 0.0,
            strain_time,
            last_object,
        };

        this.set_movement_state();

        this
    }

    fn set_movement_state(&mut self) {
        self.last_player_pos = self
            .last_object
            .player_pos
            .unwrap_or(self.last_normalized_pos);

        let term = Self::NORMALIZED_HALF_CATCHER_WIDTH - Self::ABSOLUTE_PLAYER_POSITIONING_ERROR;

        self.player_pos = self
            .last_player_pos
            .clamp(self.normalized_pos - term, self.normalized_pos + term);

        self.dist_moved = self.player_pos - self.last_player_pos;

        // * For the exact position we consider that the catcher is in the correct position for both objects
        self.exact_dist_moved = self.normalized_pos - self.last_player_pos;

        // * After a hyperdash we ARE in the correct position. Always!
        if self.last_object.hyper_dash {
            self.player_pos = self.normalized_pos;
        }
    }
}

/// State of the previous object that carries over.
pub struct LastObject {
    pub hyper_dash: bool,
    pub dist_to_hyper_dash: f32,
    pub player_pos: Option<f32>,
}

impl IDifficultyObject for CatchDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for CatchDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

/// Build the difficulty objects of all but the first palpable object.
///
/// The catcher position carries over from one object to the next.
pub fn create_difficulty_objects(
    palpable_objects: &[PalpableObject],
    clock_rate: f64,
    scaling_factor: f32,
) -> Vec<CatchDifficultyObject> {
    let mut diff_objects: Vec<CatchDifficultyObject> =
        Vec::with_capacity(palpable_objects.len().saturating_sub(1));

    for (idx, (last, curr)) in palpable_objects
        .iter()
        .zip(palpable_objects.iter().skip(1))
        .enumerate()
    {
        let last_player_pos = diff_objects.last().map(|prev| prev.player_pos);

        diff_objects.push(CatchDifficultyObject::new(
            curr,
            last,
            clock_rate,
            scaling_factor,
            last_player_pos,
            idx,
        ));
    }

    diff_objects
}
