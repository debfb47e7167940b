use crate::GameMods;

/// Turns the difficulty values of the osu!standard skills into ratings.
pub struct OsuRatingCalculator<'mods> {
    mods: &'mods GameMods,
    total_hits: u32,
    approach_rate: f64,
    overall_difficulty: f64,
}

const DIFFICULTY_MULTIPLIER: f64 = 0.0675;

impl<'mods> OsuRatingCalculator<'mods> {
    pub const fn new(
        mods: &'mods GameMods,
        total_hits: u32,
        approach_rate: f64,
        overall_difficulty: f64,
    ) -> Self {
        Self {
            mods,
            total_hits,
            approach_rate,
            overall_difficulty,
        }
    }
}

impl OsuRatingCalculator<'_> {
    pub fn compute_aim_rating(&self, aim_difficulty_value: f64) -> f64 {
        let mut aim_rating = Self::calculate_difficulty_rating(aim_difficulty_value);

        if self.mods.td() {
            aim_rating = aim_rating.powf(0.8);
        }

        if self.mods.rx() {
            aim_rating *= 0.9;
        }

        let length_bonus = self.length_bonus();
        let mut rating_multiplier = length_bonus;

        let ar_factor = if self.mods.rx() {
            0.0
        } else if self.approach_rate > 10.33 {
            0.3 * (self.approach_rate - 10.33)
        } else if self.approach_rate < 8.0 {
            0.05 * (8.0 - self.approach_rate)
        } else {
            0.0
        };

        // * Buff for longer maps with high AR.
        rating_multiplier *= 1.0 + ar_factor * length_bonus;

        if self.mods.hd() || self.mods.tc() {
            // * We want to give more reward for lower AR when it comes to aim and HD. This nerfs high AR and buffs lower AR.
            rating_multiplier *= 1.0 + 0.04 * (12.0 - self.approach_rate);
        }

        // * It is important to consider accuracy difficulty when scaling with accuracy.
        rating_multiplier *= self.accuracy_factor();

        aim_rating * rating_multiplier.cbrt()
    }

    pub fn compute_speed_rating(&self, speed_difficulty_value: f64) -> f64 {
        if self.mods.rx() {
            return 0.0;
        }

        let speed_rating = Self::calculate_difficulty_rating(speed_difficulty_value);

        let length_bonus = self.length_bonus();
        let mut rating_multiplier = length_bonus;

        let ar_factor = if self.approach_rate > 10.33 {
            0.3 * (self.approach_rate - 10.33)
        } else {
            0.0
        };

        // * Buff for longer maps with high AR.
        rating_multiplier *= 1.0 + ar_factor * length_bonus;

        if self.mods.bl() {
            // * Increasing the speed value by object count for Blinds isn't ideal, so the minimum buff is given.
            rating_multiplier *= 1.12;
        } else if self.mods.hd() || self.mods.tc() {
            rating_multiplier *= 1.0 + 0.04 * (12.0 - self.approach_rate);
        }

        speed_rating * rating_multiplier.cbrt()
    }

    pub fn compute_flashlight_rating(&self, flashlight_difficulty_value: f64) -> f64 {
        let mut flashlight_rating = Self::calculate_difficulty_rating(flashlight_difficulty_value);

        if self.mods.td() {
            flashlight_rating = flashlight_rating.powf(0.8);
        }

        if self.mods.rx() {
            flashlight_rating *= 0.7;
        }

        let total_hits = f64::from(self.total_hits);

        let mut rating_multiplier = self.accuracy_factor();

        // * Account for shorter maps having a higher ratio of 0 combo/100 combo flashlight radius.
        rating_multiplier *= 0.7
            + 0.1 * (total_hits / 200.0).min(1.0)
            + if self.total_hits > 200 {
                0.2 * ((total_hits - 200.0) / 200.0).min(1.0)
            } else {
                0.0
            };

        flashlight_rating * rating_multiplier.cbrt()
    }

    pub fn calculate_difficulty_rating(difficulty_value: f64) -> f64 {
        difficulty_value.sqrt() * DIFFICULTY_MULTIPLIER
    }

    fn length_bonus(&self) -> f64 {
        let total_hits = f64::from(self.total_hits);

        0.95 + 0.4 * (total_hits / 2000.0).min(1.0)
            + if self.total_hits > 2000 {
                (total_hits / 2000.0).log10() * 0.5
            } else {
                0.0
            }
    }

    fn accuracy_factor(&self) -> f64 {
        0.98 + self.overall_difficulty.powf(2.0) / 2500.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(mods: &GameMods, total_hits: u32, ar: f64) -> OsuRatingCalculator<'_> {
        OsuRatingCalculator::new(mods, total_hits, ar, 9.0)
    }

    #[test]
    fn relax_removes_speed() {
        let mods = GameMods::from(128);

        assert_eq!(calculator(&mods, 500, 9.0).compute_speed_rating(100.0), 0.0);
        assert!(calculator(&mods, 500, 9.0).compute_aim_rating(100.0) > 0.0);
    }

    #[test]
    fn length_bonus_keeps_growing() {
        let mods = GameMods::default();

        let short = calculator(&mods, 1000, 9.0).length_bonus();
        let medium = calculator(&mods, 2000, 9.0).length_bonus();
        let long = calculator(&mods, 4000, 9.0).length_bonus();

        assert!((medium - 1.35).abs() < 1e-12);
        assert!(short < medium && medium < long);
    }

    #[test]
    fn hidden_rewards_low_ar() {
        let nomod = GameMods::default();
        let hidden = GameMods::from(8);

        let plain = calculator(&nomod, 500, 9.0).compute_aim_rating(100.0);
        let with_hidden = calculator(&hidden, 500, 9.0).compute_aim_rating(100.0);

        assert!(with_hidden > plain);
    }

    #[test]
    fn rating_of_zero_is_zero() {
        let mods = GameMods::from(1024); // FL

        let calculator = calculator(&mods, 100, 9.0);

        assert_eq!(calculator.compute_aim_rating(0.0), 0.0);
        assert_eq!(calculator.compute_speed_rating(0.0), 0.0);
        assert_eq!(calculator.compute_flashlight_rating(0.0), 0.0);
    }
}
