use crate::{
    any::difficulty::object::{HasStartTime, IDifficultyObject},
    taiko::{HitType, TaikoObject},
};

/// An osu!taiko object annotated for the difficulty calculation.
#[derive(Clone, Debug)]
pub struct TaikoDifficultyObject {
    pub idx: usize,
    pub hit_type: HitType,
    pub start_time: f64,
    pub delta_time: f64,
    /// Position within the run of consecutive notes sharing this note's
    /// colour. Zero for non-hits.
    pub mono_streak_idx: usize,
}

impl TaikoDifficultyObject {
    pub fn new(
        hit_object: &TaikoObject,
        last_object: &TaikoObject,
        clock_rate: f64,
        idx: usize,
        mono_streak_idx: usize,
    ) -> Self {
        Self {
            idx,
            hit_type: hit_object.hit_type,
            start_time: hit_object.start_time / clock_rate,
            delta_time: (hit_object.start_time - last_object.start_time) / clock_rate,
            mono_streak_idx,
        }
    }

    /// The note `backwards_idx + 1` positions before this one among the notes
    /// of the same colour.
    pub fn previous_mono<'a>(&self, backwards_idx: usize, objects: &'a [Self]) -> Option<&'a Self> {
        if !self.hit_type.is_hit() {
            return None;
        }

        objects
            .get(..self.idx)?
            .iter()
            .rev()
            .filter(|obj| obj.hit_type == self.hit_type)
            .nth(backwards_idx)
    }

    /// Whether the colour changes within `window` milliseconds before or
    /// after this note, i.e. whether the note that precedes this note's mono
    /// streak or the note that follows it is that close.
    pub fn color_change_within(&self, window: f64, objects: &[Self]) -> bool {
        let is_change = |obj: &&Self| obj.hit_type.is_hit() && obj.hit_type != self.hit_type;

        let prev_change = objects
            .get(..self.idx)
            .unwrap_or_default()
            .iter()
            .rev()
            .take_while(|obj| self.start_time - obj.start_time < window)
            .any(|obj| is_change(&obj));

        if prev_change {
            return true;
        }

        objects
            .get(self.idx + 1..)
            .unwrap_or_default()
            .iter()
            .take_while(|obj| obj.start_time - self.start_time < window)
            .any(|obj| is_change(&obj))
    }
}

impl IDifficultyObject for TaikoDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }
}

impl HasStartTime for TaikoDifficultyObject {
    fn start_time(&self) -> f64 {
        self.start_time
    }
}

/// Build the difficulty objects of all but the first hit object.
pub fn create_difficulty_objects(
    hit_objects: &[TaikoObject],
    clock_rate: f64,
) -> Vec<TaikoDifficultyObject> {
    let mut diff_objects = Vec::with_capacity(hit_objects.len().saturating_sub(1));

    // The first object's colour still counts towards the mono streak of its
    // successors.
    let mut last_note = hit_objects
        .first()
        .map(|h| h.hit_type)
        .filter(|hit_type| hit_type.is_hit());
    let mut mono_streak_len = usize::from(last_note.is_some());

    for (idx, (last, curr)) in hit_objects.iter().zip(hit_objects.iter().skip(1)).enumerate() {
        let mono_streak_idx = if curr.is_hit() {
            if last_note != Some(curr.hit_type) {
                mono_streak_len = 0;
                last_note = Some(curr.hit_type);
            }

            mono_streak_len += 1;

            mono_streak_len - 1
        } else {
            0
        };

        diff_objects.push(TaikoDifficultyObject::new(
            curr,
            last,
            clock_rate,
            idx,
            mono_streak_idx,
        ));
    }

    diff_objects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects(pattern: &str, interval: f64) -> Vec<TaikoDifficultyObject> {
        let hit_objects: Vec<_> = pattern
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
            .collect();

        create_difficulty_objects(&hit_objects, 1.0)
    }

    #[test]
    fn mono_streaks_skip_non_hits() {
        let objects = objects("ddd_dkkd", 100.0);
        let indices: Vec<_> = objects.iter().map(|obj| obj.mono_streak_idx).collect();

        assert_eq!(indices, [1, 2, 0, 3, 0, 1, 0]);
    }

    #[test]
    fn previous_mono_only_sees_same_colour() {
        let objects = objects("dkdkdk", 100.0);
        let last = &objects[4];

        assert_eq!(last.hit_type, HitType::Rim);
        assert_eq!(last.previous_mono(0, &objects).map(|obj| obj.idx), Some(2));
        assert_eq!(last.previous_mono(1, &objects).map(|obj| obj.idx), Some(0));
        assert!(last.previous_mono(2, &objects).is_none());
    }

    #[test]
    fn color_changes_within_window() {
        let fast = objects("ddddkkkk", 50.0);
        let slow = objects("ddddkkkk", 400.0);

        assert!(fast[2].color_change_within(300.0, &fast));
        assert!(!slow[0].color_change_within(300.0, &slow));
        assert!(slow[2].color_change_within(500.0, &slow));
    }
}
