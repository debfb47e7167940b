use std::cmp;

use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    catch::{
        attributes::{CatchDifficultyAttributes, CatchStrains},
        catcher::Catcher,
        Catch, CatchObject, CatchObjectKind,
    },
    model::{
        beatmap::BeatmapAttributesBuilder,
        error::{validate_clock_rate, validate_objects, DifficultyError},
    },
    Beatmap,
};

use self::{
    object::{create_difficulty_objects, initialize_hyper_dash, CatchDifficultyObject, PalpableObject},
    skills::movement::Movement,
};

pub mod object;
pub mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 4.59;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap<Catch>,
) -> Result<CatchDifficultyAttributes, DifficultyError> {
    let Some(DifficultyValues {
        movement,
        mut attrs,
    }) = DifficultyValues::calculate(difficulty, map)?
    else {
        return Ok(CatchDifficultyAttributes {
            mods: difficulty.get_mods().clone(),
            ..Default::default()
        });
    };

    attrs.stars = movement.difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER;

    debug!(stars = attrs.stars, "catch difficulty calculated");

    Ok(attrs)
}

pub fn strains(
    difficulty: &Difficulty,
    map: &Beatmap<Catch>,
) -> Result<CatchStrains, DifficultyError> {
    let Some(DifficultyValues { movement, .. }) = DifficultyValues::calculate(difficulty, map)?
    else {
        return Ok(CatchStrains::default());
    };

    Ok(CatchStrains {
        movement: movement.strain_peaks(),
    })
}

pub struct DifficultyValues {
    pub movement: Movement,
    pub attrs: CatchDifficultyAttributes,
}

impl DifficultyValues {
    /// Process all passed objects through the movement skill.
    ///
    /// Returns `None` if there is no object to process.
    pub fn calculate(
        difficulty: &Difficulty,
        map: &Beatmap<Catch>,
    ) -> Result<Option<Self>, DifficultyError> {
        let clock_rate = validate_clock_rate(difficulty.get_clock_rate())?;

        let take = cmp::min(map.hit_objects.len(), difficulty.get_passed_objects());
        let hit_objects = &map.hit_objects[..take];

        validate_objects(hit_objects)?;

        if hit_objects.is_empty() {
            return Ok(None);
        }

        let map_attrs = BeatmapAttributesBuilder::new()
            .map(map)
            .difficulty(difficulty)
            .build();

        let mut attrs = CatchDifficultyAttributes {
            mods: difficulty.get_mods().clone(),
            ar: map_attrs.ar,
            is_convert: map.is_convert,
            ..Default::default()
        };

        count_objects(&mut attrs, hit_objects);

        let cs = map_attrs.cs as f32;

        let mut palpable_objects: Vec<_> = difficulty
            .get_filter::<Catch>()
            .apply(hit_objects)
            .into_iter()
            .map(PalpableObject::new)
            .collect();

        initialize_hyper_dash(cs, &mut palpable_objects);

        let mut half_catcher_width = Catcher::calculate_catch_width(cs) * 0.5;

        // * For circle sizes above 5.5, reduce the catcher width further to simulate imperfect gameplay.
        half_catcher_width *= 1.0 - ((cs - 5.5).max(0.0) * 0.0625);

        let scaling_factor =
            CatchDifficultyObject::NORMALIZED_HALF_CATCHER_WIDTH / half_catcher_width;

        let diff_objects = create_difficulty_objects(&palpable_objects, clock_rate, scaling_factor);

        debug!(
            objects = hit_objects.len(),
            difficulty_objects = diff_objects.len(),
            clock_rate,
            "processing catch objects"
        );

        let mut movement = Movement::new(clock_rate);

        for curr in diff_objects.iter() {
            movement.process(curr, &diff_objects);
        }

        Ok(Some(Self { movement, attrs }))
    }
}

fn count_objects(attrs: &mut CatchDifficultyAttributes, hit_objects: &[CatchObject]) {
    for hit_object in hit_objects {
        match hit_object.kind {
            CatchObjectKind::Fruit => attrs.n_fruits += 1,
            CatchObjectKind::Droplet => attrs.n_droplets += 1,
            CatchObjectKind::TinyDroplet => attrs.n_tiny_droplets += 1,
            CatchObjectKind::Banana => attrs.n_bananas += 1,
        }
    }
}
