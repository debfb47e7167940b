use crate::util::float_ext::FloatExt;

/// A skill that accumulates strain over a sequence of difficulty objects.
///
/// Objects must be processed exactly once each and in sequence order since
/// the strain is a running fold.
pub trait Skill<O> {
    /// Process the next difficulty object.
    fn process(&mut self, curr: &O, objects: &[O]);

    /// The peak strain of every section so far, including the current one.
    fn strain_peaks(&self) -> Vec<StrainPeak>;

    /// The strain emitted for every processed object or movement.
    fn object_strains(&self) -> &[f64];

    /// Aggregate the section peaks into a single difficulty value.
    fn difficulty_value(&self) -> f64;
}

/// The highest strain within one section.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StrainPeak {
    /// Start time of the section.
    pub time: f64,
    /// Highest strain within the section.
    pub value: f64,
    /// Duration of the section.
    pub section_length: f64,
}

/// Bookkeeping for skills whose strains are bucketed into sections of a
/// fixed length.
#[derive(Clone, Debug)]
pub struct StrainSections {
    section_length: f64,
    current_section_peak: f64,
    current_section_end: Option<f64>,
    peaks: Vec<StrainPeak>,
    object_strains: Vec<f64>,
}

impl StrainSections {
    pub fn new(section_length: f64) -> Self {
        Self {
            section_length,
            current_section_peak: 0.0,
            current_section_end: None,
            peaks: Vec::with_capacity(256),
            object_strains: Vec::with_capacity(256),
        }
    }

    /// Returns the end of the current section if a strain at `time` no
    /// longer belongs to it.
    ///
    /// The first call determines the end of the first section. Since the
    /// first object doesn't generate a strain, it's rounded up to the next
    /// multiple of the section length.
    pub fn pending_section_end(&mut self, time: f64) -> Option<f64> {
        let section_length = self.section_length;

        let end = *self
            .current_section_end
            .get_or_insert_with(|| f64::ceil(time / section_length) * section_length);

        (time > end).then_some(end)
    }

    /// Save the current peak and open the next section with the given
    /// initial strain.
    pub fn start_new_section(&mut self, initial_strain: f64) {
        let end = self.current_section_end.unwrap_or(0.0);

        self.peaks.push(StrainPeak {
            time: end - self.section_length,
            value: self.current_section_peak,
            section_length: self.section_length,
        });

        self.current_section_peak = initial_strain;
        self.current_section_end = Some(end + self.section_length);
    }

    /// Record a strain in the current section.
    pub fn record(&mut self, strain: f64) {
        self.current_section_peak = f64::max(strain, self.current_section_peak);
        self.object_strains.push(strain);
    }

    pub fn peaks(&self) -> Vec<StrainPeak> {
        let mut peaks = Vec::with_capacity(self.peaks.len() + 1);
        peaks.extend_from_slice(&self.peaks);

        if let Some(end) = self.current_section_end {
            peaks.push(StrainPeak {
                time: end - self.section_length,
                value: self.current_section_peak,
                section_length: self.section_length,
            });
        }

        peaks
    }

    pub fn peak_values(&self) -> Vec<f64> {
        let mut values: Vec<_> = self.peaks.iter().map(|peak| peak.value).collect();

        if self.current_section_end.is_some() {
            values.push(self.current_section_peak);
        }

        values
    }

    pub fn object_strains(&self) -> &[f64] {
        &self.object_strains
    }
}

/// Bookkeeping for skills whose sections span from one object to the next,
/// capped at a maximum length.
///
/// Gaps longer than the maximum length are filled with full-length sections
/// carrying the decayed strain.
#[derive(Clone, Debug)]
pub struct VariableLengthSections {
    max_section_length: f64,
    current: Option<(f64, f64)>,
    peaks: Vec<StrainPeak>,
    object_strains: Vec<f64>,
}

impl VariableLengthSections {
    pub fn new(max_section_length: f64) -> Self {
        Self {
            max_section_length,
            current: None,
            peaks: Vec::with_capacity(256),
            object_strains: Vec::with_capacity(256),
        }
    }

    pub const fn max_section_length(&self) -> f64 {
        self.max_section_length
    }

    /// Close the current section at `time` and open a new one with the given
    /// strain.
    ///
    /// `strain_at` returns the strain at a point in time between the previous
    /// object and `time` without any new contribution.
    pub fn record(&mut self, time: f64, strain: f64, strain_at: impl Fn(f64) -> f64) {
        if let Some((start, peak)) = self.current.take() {
            self.peaks.push(StrainPeak {
                time: start,
                value: peak,
                section_length: f64::min(time - start, self.max_section_length),
            });

            let mut section_start = start + self.max_section_length;

            while section_start < time {
                self.peaks.push(StrainPeak {
                    time: section_start,
                    value: strain_at(section_start),
                    section_length: f64::min(time - section_start, self.max_section_length),
                });

                section_start += self.max_section_length;
            }
        }

        self.current = Some((time, strain));
        self.object_strains.push(strain);
    }

    pub fn peaks(&self) -> Vec<StrainPeak> {
        let mut peaks = Vec::with_capacity(self.peaks.len() + 1);
        peaks.extend_from_slice(&self.peaks);

        if let Some((time, value)) = self.current {
            peaks.push(StrainPeak {
                time,
                value,
                section_length: self.max_section_length,
            });
        }

        peaks
    }

    pub fn object_strains(&self) -> &[f64] {
        &self.object_strains
    }
}

pub fn count_top_weighted_strains(object_strains: &[f64], difficulty_value: f64) -> f64 {
    if object_strains.is_empty() {
        return 0.0;
    }

    // * What would the top strain be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if FloatExt::eq(consistent_top_strain, 0.0) {
        return object_strains.len() as f64;
    }

    // * Use a weighted sum of all strains. Constants are arbitrary and give nice values
    object_strains
        .iter()
        .map(|s| 1.1 / (1.0 + f64::exp(-10.0 * (s / consistent_top_strain - 0.88))))
        .sum()
}

/// Sorts the peaks descending after removing zeros.
pub fn sorted_non_zero(peaks: &[f64]) -> Vec<f64> {
    let mut peaks: Vec<_> = peaks.iter().copied().filter(|&peak| peak > 0.0).collect();
    peaks.sort_unstable_by(|a, b| b.total_cmp(a));

    peaks
}

pub fn difficulty_value(current_strain_peaks: &[f64], decay_weight: f64) -> f64 {
    let mut difficulty = 0.0;
    let mut weight = 1.0;

    // * Sections with 0 strain are excluded to avoid worst-case time complexity of the following sort (e.g. /b/2351871).
    // * These sections will not contribute to the difficulty.
    let peaks = sorted_non_zero(current_strain_peaks);

    // * Difficulty is the weighted sum of the highest strains from every section.
    // * We're sorting from highest to lowest strain.
    for strain in peaks {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn weighted_sum_skips_empty_sections() {
        let value = difficulty_value(&[0.0, 5.0, 0.0, 10.0, 3.0], 0.9);

        assert!((value - 16.93).abs() < 1e-9, "{value}");
    }

    #[test]
    fn first_section_end_rounds_up() {
        let mut sections = StrainSections::new(400.0);

        assert_eq!(sections.pending_section_end(250.0), None);
        sections.record(1.0);
        assert_eq!(sections.pending_section_end(400.0), None);
        assert_eq!(sections.pending_section_end(401.0), Some(400.0));
        sections.start_new_section(0.5);
        assert_eq!(sections.pending_section_end(401.0), None);
        sections.record(0.25);

        let peaks = sections.peaks();

        assert_eq!(peaks.len(), 2);
        assert_eq!(peaks[0].time, 0.0);
        assert_eq!(peaks[0].value, 1.0);
        assert_eq!(peaks[1].time, 400.0);
        assert_eq!(peaks[1].value, 0.5);
        assert_eq!(sections.object_strains(), &[1.0, 0.25]);
    }

    #[test]
    fn variable_sections_fill_gaps() {
        let mut sections = VariableLengthSections::new(400.0);

        sections.record(0.0, 2.0, |_| unreachable!());
        sections.record(100.0, 3.0, |_| unreachable!());
        sections.record(1000.0, 1.0, |time| 3.0 * strain_decay(time - 100.0, 0.15));

        let peaks = sections.peaks();
        let lengths: Vec<_> = peaks.iter().map(|peak| peak.section_length).collect();

        assert_eq!(lengths, [100.0, 400.0, 400.0, 100.0, 400.0]);
        assert_eq!(peaks[2].time, 500.0);
        assert!(peaks[2].value < peaks[1].value);
        assert!(peaks[3].value < peaks[2].value);
    }

    #[test]
    fn no_objects_no_peaks() {
        let sections = StrainSections::new(400.0);

        assert!(sections.peaks().is_empty());
        assert!(sections.peak_values().is_empty());
        assert_eq!(count_top_weighted_strains(sections.object_strains(), 1.0), 0.0);
    }

    proptest! {
        #[test]
        fn decay_is_monotonic(base in 0.01_f64..0.99, a in 0.0_f64..1e5, d in 1.0_f64..1e5) {
            prop_assert!(strain_decay(a + d, base) < strain_decay(a, base));
            prop_assert!(strain_decay(a, base) <= 1.0);
        }

        #[test]
        fn zeros_dont_contribute(peaks in prop::collection::vec(0.0_f64..100.0, 0..64), zeros in 0_usize..16) {
            let mut with_zeros = peaks.clone();
            with_zeros.extend(std::iter::repeat(0.0).take(zeros));

            let expected = difficulty_value(&peaks, 0.9);
            let actual = difficulty_value(&with_zeros, 0.9);

            prop_assert!((expected - actual).abs() <= f64::EPSILON * expected.max(1.0));
        }
    }
}
