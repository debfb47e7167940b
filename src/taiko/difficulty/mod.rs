use std::cmp;

use crate::{
    any::difficulty::{
        skills::{count_top_weighted_strains, difficulty_value, Skill},
        Difficulty,
    },
    model::{
        beatmap::BeatmapAttributesBuilder,
        error::{validate_clock_rate, validate_objects, DifficultyError},
    },
    taiko::{
        attributes::{TaikoDifficultyAttributes, TaikoStrains},
        Taiko,
    },
    util::difficulty::reverse_lerp,
    Beatmap,
};

use self::{object::create_difficulty_objects, skills::TaikoSkills};

pub mod evaluators;
pub mod object;
pub mod skills;

#[allow(clippy::unreadable_literal)]
const DIFFICULTY_MULTIPLIER: f64 = 0.084375;
const STAMINA_SKILL_MULTIPLIER: f64 = 0.445 * DIFFICULTY_MULTIPLIER;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap<Taiko>,
) -> Result<TaikoDifficultyAttributes, DifficultyError> {
    let Some(DifficultyValues { skills, mut attrs }) = DifficultyValues::calculate(difficulty, map)?
    else {
        return Ok(TaikoDifficultyAttributes {
            mods: difficulty.get_mods().clone(),
            ..Default::default()
        });
    };

    DifficultyValues::eval(&mut attrs, difficulty.get_mods().rx(), &skills);

    debug!(
        stars = attrs.stars,
        stamina = attrs.stamina,
        mono_stamina_factor = attrs.mono_stamina_factor,
        "taiko difficulty calculated"
    );

    Ok(attrs)
}

pub fn strains(
    difficulty: &Difficulty,
    map: &Beatmap<Taiko>,
) -> Result<TaikoStrains, DifficultyError> {
    let Some(DifficultyValues { skills, .. }) = DifficultyValues::calculate(difficulty, map)? else {
        return Ok(TaikoStrains::default());
    };

    Ok(TaikoStrains {
        stamina: skills.stamina.strain_peaks(),
        single_color_stamina: skills.single_color_stamina.strain_peaks(),
    })
}

fn rescale(stars: f64) -> f64 {
    if stars < 0.0 {
        stars
    } else {
        10.43 * f64::ln(stars / 8.0 + 1.0)
    }
}

pub struct DifficultyValues {
    pub skills: TaikoSkills,
    pub attrs: TaikoDifficultyAttributes,
}

impl DifficultyValues {
    /// Process all passed objects through the skills.
    ///
    /// Returns `None` if there is no object to process.
    pub fn calculate(
        difficulty: &Difficulty,
        map: &Beatmap<Taiko>,
    ) -> Result<Option<Self>, DifficultyError> {
        let clock_rate = validate_clock_rate(difficulty.get_clock_rate())?;

        let take = cmp::min(map.hit_objects.len(), difficulty.get_passed_objects());
        let hit_objects = &map.hit_objects[..take];

        validate_objects(hit_objects)?;

        if hit_objects.is_empty() {
            return Ok(None);
        }

        let hit_windows = BeatmapAttributesBuilder::new()
            .map(map)
            .difficulty(difficulty)
            .build()
            .hit_windows;

        let attrs = TaikoDifficultyAttributes {
            mods: difficulty.get_mods().clone(),
            great_hit_window: hit_windows.od_great,
            ok_hit_window: hit_windows.od_ok.unwrap_or(0.0),
            max_combo: hit_objects.iter().filter(|h| h.is_hit()).count() as u32,
            is_convert: map.is_convert,
            ..Default::default()
        };

        let filtered = difficulty.get_filter::<Taiko>().apply_slice(hit_objects);
        let diff_objects = create_difficulty_objects(&filtered, clock_rate);

        debug!(
            objects = filtered.len(),
            difficulty_objects = diff_objects.len(),
            clock_rate,
            "processing taiko objects"
        );

        let mut skills = TaikoSkills::new(map.is_convert);

        for hit_object in diff_objects.iter() {
            skills.process(hit_object, &diff_objects);
        }

        Ok(Some(Self { skills, attrs }))
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(attrs: &mut TaikoDifficultyAttributes, is_relax: bool, skills: &TaikoSkills) {
        let TaikoSkills {
            stamina,
            single_color_stamina,
        } = skills;

        let stamina_difficulty_value = stamina.difficulty_value();

        let stamina_skill = stamina_difficulty_value * STAMINA_SKILL_MULTIPLIER;
        let mono_stamina_rating = single_color_stamina.difficulty_value() * STAMINA_SKILL_MULTIPLIER;

        let mono_stamina_factor = if stamina_skill.abs() >= f64::EPSILON {
            (mono_stamina_rating / stamina_skill).powf(5.0)
        } else {
            1.0
        };

        let stamina_difficult_strains =
            count_top_weighted_strains(stamina.object_strains(), stamina_difficulty_value);

        let strain_length_bonus =
            1.0 + 0.15 * reverse_lerp(stamina_difficult_strains, 1000.0, 1555.0);

        // * Available finger count is increased by 150%, thus we adjust accordingly.
        let finger_adjustment = if attrs.is_convert || is_relax { 1.5 } else { 1.0 };

        let peaks: Vec<_> = stamina
            .peak_values()
            .into_iter()
            .map(|peak| peak * STAMINA_SKILL_MULTIPLIER * strain_length_bonus / finger_adjustment)
            .collect();

        let combined_rating = difficulty_value(&peaks, 0.9);

        attrs.stamina = stamina_skill / finger_adjustment;
        attrs.mono_stamina_factor = mono_stamina_factor;
        attrs.stamina_difficult_strain_count = stamina_difficult_strains;
        attrs.stars = rescale(combined_rating * 1.4);
    }
}
