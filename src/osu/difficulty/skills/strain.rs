use crate::{
    any::difficulty::skills::{sorted_non_zero, StrainPeak},
    util::{difficulty::logistic, float_ext::FloatExt},
};

pub trait OsuStrainSkill {
    const DECAY_WEIGHT: f64 = 0.9;
    const REDUCED_STRAIN_BASELINE: f64 = 0.75;
}

/// Weighted sum of the peaks after scaling down the highest
/// `reduced_section_count` ones.
pub fn reduced_difficulty_value(
    current_strain_peaks: &[f64],
    reduced_section_count: usize,
    reduced_strain_baseline: f64,
    decay_weight: f64,
) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // Note that we remove all initial zeros here.
    let mut peaks = sorted_non_zero(current_strain_peaks);

    // * We are reducing the highest strains first to account for extreme difficulty spikes
    for (i, strain) in peaks.iter_mut().take(reduced_section_count).enumerate() {
        let clamped = f64::from((i as f32 / reduced_section_count as f32).clamp(0.0, 1.0));
        let scale = f64::log10(f64::lerp(clamped, 1.0, 10.0));
        *strain *= f64::lerp(scale, reduced_strain_baseline, 1.0);
    }

    peaks.sort_unstable_by(|a, b| b.total_cmp(a));

    // * Difficulty is the weighted sum of the highest strains from every section.
    // * We're sorting from highest to lowest strain.
    for strain in peaks {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

/// Continuous weighted sum of peaks whose sections vary in length.
///
/// A section of length `l` starting at normalized time `a` is weighted by
/// the integral of `decay_weight^x` over `[a, a + l / max_section_length]`.
pub fn variable_length_difficulty_value(
    peaks: &[StrainPeak],
    decay_weight: f64,
    max_section_length: f64,
    difficulty_multiplier: f64,
) -> f64 {
    let decay_weight_integral = -1.0 / decay_weight.ln();

    let mut peaks: Vec<_> = peaks.iter().filter(|peak| peak.value > 0.0).collect();
    peaks.sort_unstable_by(|a, b| b.value.total_cmp(&a.value));

    let mut difficulty = 0.0;
    let mut time = 0.0;

    for peak in peaks {
        let length = peak.section_length / max_section_length;

        let weight = decay_weight.powf(time)
            * (decay_weight_integral - decay_weight_integral * decay_weight.powf(length));

        difficulty += peak.value * weight;
        time += length;
    }

    difficulty * difficulty_multiplier
}

/// Number of relevant objects weighted against the top strain, rewarding
/// consistent difficulty over longer maps.
pub fn count_relevant_objects(object_strains: &[f64], difficulty_value: f64) -> f64 {
    // * What would the top strain be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if FloatExt::eq(consistent_top_strain, 0.0) {
        return 0.0;
    }

    // * Being consistently difficult for 1000 notes should be worth more than being consistently difficult for 100.
    let length_factor = 0.74 * 0.9987_f64.powf(object_strains.len() as f64);

    // * Use a weighted sum of all strains. Constants are arbitrary and give nice values
    object_strains
        .iter()
        .map(|s| {
            (1.1 - length_factor)
                / (1.0
                    + f64::exp(-10.0 * (s / consistent_top_strain - 0.88 - length_factor / 4.0)))
        })
        .sum()
}

pub fn count_top_weighted_sliders(slider_strains: &[f64], difficulty_value: f64) -> f64 {
    if slider_strains.is_empty() {
        return 0.0;
    }

    // * What would the top strain be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if FloatExt::eq(consistent_top_strain, 0.0) {
        return 0.0;
    }

    slider_strains
        .iter()
        .map(|s| logistic(*s / consistent_top_strain, 0.88, 10.0, Some(1.1)))
        .sum()
}

/// Logistic count of slider strains against the highest slider strain.
pub fn difficult_sliders(slider_strains: &[f64]) -> f64 {
    let max_slider_strain = slider_strains.iter().copied().fold(0.0, f64::max);

    if FloatExt::eq(max_slider_strain, 0.0) {
        return 0.0;
    }

    slider_strains
        .iter()
        .map(|strain| 1.0 / (1.0 + f64::exp(-(strain / max_slider_strain * 12.0 - 6.0))))
        .sum()
}

pub fn difficulty_to_performance(difficulty: f64) -> f64 {
    f64::powf(5.0 * f64::max(1.0, difficulty / 0.0675) - 4.0, 3.0) / 100_000.0
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::any::difficulty::skills::difficulty_value;

    use super::*;

    fn full_length(values: &[f64]) -> Vec<StrainPeak> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| StrainPeak {
                time: i as f64 * 400.0,
                value,
                section_length: 400.0,
            })
            .collect()
    }

    #[test]
    fn performance_floor() {
        assert!((difficulty_to_performance(0.0) - 0.00001).abs() < 1e-12);
        assert!(difficulty_to_performance(1.0) > difficulty_to_performance(0.5));
    }

    #[test]
    fn reduction_only_touches_top_peaks() {
        let peaks = [10.0; 20];
        let reduced = reduced_difficulty_value(&peaks, 5, 0.75, 0.9);
        let plain = difficulty_value(&peaks, 0.9);

        assert!(reduced < plain);
        assert!(reduced > 0.75 * plain);
    }

    #[test]
    fn relevant_objects_of_nothing() {
        assert_eq!(count_relevant_objects(&[1.0, 2.0], 0.0), 0.0);
        assert_eq!(count_top_weighted_sliders(&[], 10.0), 0.0);
        assert_eq!(difficult_sliders(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn difficult_sliders_midpoint() {
        // The strongest slider contributes 1 / (1 + e^-6)
        let expected = 1.0 / (1.0 + f64::exp(-6.0));

        assert!((difficult_sliders(&[4.0]) - expected).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn full_length_sections_match_discrete_sum(values in prop::collection::vec(0.0_f64..100.0, 1..64)) {
            let w: f64 = 0.9;
            let discrete = difficulty_value(&values, w);
            let continuous = variable_length_difficulty_value(&full_length(&values), w, 400.0, 1.0);

            // Every full section carries the same integral over a unit of time
            let unit_integral = (1.0 - w) / -w.ln();

            prop_assert!((continuous - discrete * unit_integral).abs() <= 1e-9 * discrete.max(1.0));
        }

        #[test]
        fn shorter_sections_weigh_less(value in 0.1_f64..100.0, length in 1.0_f64..399.0) {
            let full = variable_length_difficulty_value(&full_length(&[value]), 0.9, 400.0, 1.0);
            let short = variable_length_difficulty_value(
                &[StrainPeak { time: 0.0, value, section_length: length }],
                0.9,
                400.0,
                1.0,
            );

            prop_assert!(short < full);
        }
    }
}
