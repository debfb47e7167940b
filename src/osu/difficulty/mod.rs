use std::cmp;

use crate::{
    any::difficulty::{
        skills::{count_top_weighted_strains, Skill},
        Difficulty,
    },
    model::{
        beatmap::{BeatmapAttributes, BeatmapAttributesBuilder},
        error::{validate_clock_rate, validate_objects, DifficultyError},
        hit_object::{HitObject, HitObjectKind},
        mods::GameMods,
    },
    osu::{
        attributes::{OsuDifficultyAttributes, OsuStrains},
        Osu,
    },
    util::difficulty::norm,
    Beatmap,
};

use self::{
    object::create_difficulty_objects,
    rating::OsuRatingCalculator,
    skills::{
        flashlight::Flashlight,
        strain::{count_top_weighted_sliders, difficulty_to_performance},
        OsuSkills,
    },
};

pub mod evaluators;
pub mod movement;
pub mod object;
pub mod rating;
pub mod skills;

const STAR_RATING_MULTIPLIER: f64 = 0.026;
const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.15;

const HD_FADE_IN_DURATION_MULTIPLIER: f64 = 0.4;
const HD_FADE_OUT_DURATION_MULTIPLIER: f64 = 0.3;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap<Osu>,
) -> Result<OsuDifficultyAttributes, DifficultyError> {
    let Some(DifficultyValues { skills, mut attrs }) = DifficultyValues::calculate(difficulty, map)?
    else {
        return Ok(OsuDifficultyAttributes {
            mods: difficulty.get_mods().clone(),
            ..Default::default()
        });
    };

    DifficultyValues::eval(&mut attrs, difficulty.get_mods(), &skills);

    debug!(
        stars = attrs.stars,
        aim = attrs.aim,
        flow_aim = attrs.flow_aim,
        speed = attrs.speed,
        flashlight = attrs.flashlight,
        "osu difficulty calculated"
    );

    Ok(attrs)
}

pub fn strains(difficulty: &Difficulty, map: &Beatmap<Osu>) -> Result<OsuStrains, DifficultyError> {
    let Some(DifficultyValues { skills, .. }) = DifficultyValues::calculate(difficulty, map)? else {
        return Ok(OsuStrains::default());
    };

    let OsuSkills {
        aim,
        aim_no_sliders,
        flow_aim,
        speed,
        flashlight,
    } = skills;

    Ok(OsuStrains {
        aim: aim.strain_peaks(),
        aim_no_sliders: aim_no_sliders.strain_peaks(),
        flow_aim: flow_aim.strain_peaks(),
        speed: speed.strain_peaks(),
        flashlight: flashlight.map_or_else(Vec::new, |flashlight| flashlight.strain_peaks()),
    })
}

pub struct DifficultyValues {
    pub skills: OsuSkills,
    pub attrs: OsuDifficultyAttributes,
}

impl DifficultyValues {
    /// Process all passed objects through the skills.
    ///
    /// Returns `None` if there is no object to process.
    pub fn calculate(
        difficulty: &Difficulty,
        map: &Beatmap<Osu>,
    ) -> Result<Option<Self>, DifficultyError> {
        let clock_rate = validate_clock_rate(difficulty.get_clock_rate())?;

        let take = cmp::min(map.hit_objects.len(), difficulty.get_passed_objects());
        let hit_objects = &map.hit_objects[..take];

        validate_objects(hit_objects)?;

        if hit_objects.is_empty() {
            return Ok(None);
        }

        let mods = difficulty.get_mods();

        let map_attrs = BeatmapAttributesBuilder::new()
            .map(map)
            .difficulty(difficulty)
            .build();

        let attrs = Self::initial_attributes(mods, &map_attrs, hit_objects);

        // The approach time as it would be without any rate adjustment
        let time_preempt = map_attrs.hit_windows.ar * clock_rate;

        let filtered = difficulty.get_filter::<Osu>().apply_slice(hit_objects);

        let diff_objects = create_difficulty_objects(
            &filtered,
            clock_rate,
            2.0 * map_attrs.hit_windows.od_great,
            difficulty.get_distance_scaling(),
        );

        debug!(
            objects = filtered.len(),
            difficulty_objects = diff_objects.len(),
            clock_rate,
            "processing osu objects"
        );

        let mut skills = OsuSkills::new(mods, time_preempt);

        for hit_object in diff_objects.iter() {
            skills.process(hit_object, &diff_objects);
        }

        Ok(Some(Self { skills, attrs }))
    }

    fn initial_attributes(
        mods: &GameMods,
        map_attrs: &BeatmapAttributes,
        hit_objects: &[HitObject],
    ) -> OsuDifficultyAttributes {
        let mut attrs = OsuDifficultyAttributes {
            mods: mods.clone(),
            ar: map_attrs.ar,
            od: map_attrs.od,
            hp: map_attrs.hp,
            great_hit_window: map_attrs.hit_windows.od_great,
            ok_hit_window: map_attrs.hit_windows.od_ok.unwrap_or(0.0),
            meh_hit_window: map_attrs.hit_windows.od_meh.unwrap_or(0.0),
            ..Default::default()
        };

        for hit_object in hit_objects {
            match hit_object.kind {
                HitObjectKind::Circle => {
                    attrs.n_circles += 1;
                    attrs.max_combo += 1;
                }
                HitObjectKind::Slider(ref slider) => {
                    attrs.n_sliders += 1;
                    attrs.max_combo += 1 + slider.nested_objects.len() as u32;
                }
                HitObjectKind::Spinner(_) => {
                    attrs.n_spinners += 1;
                    attrs.max_combo += 1;
                }
            }
        }

        attrs
    }

    /// Process the difficulty values and store the results in `attrs`.
    pub fn eval(attrs: &mut OsuDifficultyAttributes, mods: &GameMods, skills: &OsuSkills) {
        let OsuSkills {
            aim,
            aim_no_sliders,
            flow_aim,
            speed,
            flashlight,
        } = skills;

        let aim_difficulty_value = aim.difficulty_value();
        let aim_difficult_strain_count =
            count_top_weighted_strains(aim.object_strains(), aim_difficulty_value);
        let difficult_sliders = aim.get_difficult_sliders();

        let aim_no_sliders_difficulty_value = aim_no_sliders.difficulty_value();

        let aim_no_sliders_top_weighted_slider_count = count_top_weighted_sliders(
            aim_no_sliders.slider_strains(),
            aim_no_sliders_difficulty_value,
        );

        let aim_no_sliders_difficult_strain_count = count_top_weighted_strains(
            aim_no_sliders.object_strains(),
            aim_no_sliders_difficulty_value,
        );

        let aim_top_weighted_slider_factor = aim_no_sliders_top_weighted_slider_count
            / (aim_no_sliders_difficult_strain_count - aim_no_sliders_top_weighted_slider_count)
                .max(1.0);

        let flow_aim_difficulty_value = flow_aim.difficulty_value();

        let speed_difficulty_value = speed.difficulty_value();
        let speed_top_weighted_slider_count =
            count_top_weighted_sliders(speed.slider_strains(), speed_difficulty_value);
        let speed_difficult_strain_count =
            count_top_weighted_strains(speed.object_strains(), speed_difficulty_value);

        let speed_top_weighted_slider_factor = speed_top_weighted_slider_count
            / (speed_difficult_strain_count - speed_top_weighted_slider_count).max(1.0);

        let rating_calculator =
            OsuRatingCalculator::new(mods, attrs.n_objects(), attrs.ar, attrs.od);

        let aim_rating = rating_calculator.compute_aim_rating(aim_difficulty_value);
        let aim_no_sliders_rating =
            rating_calculator.compute_aim_rating(aim_no_sliders_difficulty_value);
        let flow_aim_rating = rating_calculator.compute_aim_rating(flow_aim_difficulty_value);
        let speed_rating = rating_calculator.compute_speed_rating(speed_difficulty_value);

        let flashlight_rating = flashlight.as_ref().map_or(0.0, |flashlight| {
            rating_calculator.compute_flashlight_rating(flashlight.difficulty_value())
        });

        let slider_factor = if aim_rating > 0.0 {
            aim_no_sliders_rating / aim_rating
        } else {
            1.0
        };

        let base_performance = base_performance(aim_rating, speed_rating, flashlight_rating);
        let multiplier = calculate_multiplier(mods, attrs.n_spinners, attrs.n_objects());

        attrs.aim = aim_rating;
        attrs.aim_no_sliders = aim_no_sliders_rating;
        attrs.aim_difficult_slider_count = difficult_sliders;
        attrs.flow_aim = flow_aim_rating;
        attrs.flow_aim_relevant_object_count = flow_aim.relevant_object_count();
        attrs.speed = speed_rating;
        attrs.speed_note_count = speed.relevant_note_count();
        attrs.speed_cheese_inaccuracy = speed.cheese_inaccuracy();
        attrs.flashlight = flashlight_rating;
        attrs.slider_factor = slider_factor;
        attrs.aim_top_weighted_slider_factor = aim_top_weighted_slider_factor;
        attrs.speed_top_weighted_slider_factor = speed_top_weighted_slider_factor;
        attrs.aim_difficult_strain_count = aim_difficult_strain_count;
        attrs.speed_difficult_strain_count = speed_difficult_strain_count;
        attrs.stars = calculate_star_rating(base_performance, multiplier);
    }
}

// * Flow aim is reported on its own and does not feed into the star rating
fn base_performance(aim_rating: f64, speed_rating: f64, flashlight_rating: f64) -> f64 {
    norm(
        1.1,
        [
            difficulty_to_performance(aim_rating),
            difficulty_to_performance(speed_rating),
            Flashlight::difficulty_to_performance(flashlight_rating),
        ],
    )
}

fn calculate_multiplier(mods: &GameMods, n_spinners: u32, total_hits: u32) -> f64 {
    let mut multiplier = PERFORMANCE_BASE_MULTIPLIER;

    if mods.so() && total_hits > 0 {
        multiplier *= 1.0 - (f64::from(n_spinners) / f64::from(total_hits)).powf(0.85);
    }

    multiplier
}

fn calculate_star_rating(base_performance: f64, multiplier: f64) -> f64 {
    if base_performance <= 0.00001 {
        return 0.0;
    }

    multiplier.cbrt()
        * STAR_RATING_MULTIPLIER
        * ((100_000.0 / 2.0_f64.powf(1.0 / 1.1) * base_performance).cbrt() + 4.0)
}
