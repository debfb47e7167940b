use thiserror::Error;

/// Reasons why a [`Beatmap`] cannot be used for a difficulty calculation.
///
/// [`Beatmap`]: crate::Beatmap
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum DifficultyError {
    #[error("hit object {idx} starts at {curr}ms, before its predecessor at {prev}ms")]
    UnsortedObjects { idx: usize, prev: f64, curr: f64 },
    #[error("hit object {idx} has a non-finite time or position")]
    NonFiniteObject { idx: usize },
    #[error("hit object {idx} has an invalid radius of {radius}")]
    InvalidRadius { idx: usize, radius: f64 },
    #[error("invalid clock rate {0}")]
    InvalidClockRate(f64),
}

/// Validation of a mode's hit objects.
pub trait ValidateObject {
    fn start_time(&self) -> f64;

    /// Whether all coordinates and durations are finite.
    fn is_finite(&self) -> bool;

    /// The object's radius if the mode has a notion of one.
    fn radius(&self) -> Option<f64> {
        None
    }
}

/// Check that the objects are sorted and carry sane values.
pub fn validate_objects<O: ValidateObject>(objects: &[O]) -> Result<(), DifficultyError> {
    let mut prev_time = f64::NEG_INFINITY;

    for (idx, obj) in objects.iter().enumerate() {
        let start_time = obj.start_time();

        if !obj.is_finite() || !start_time.is_finite() {
            warn!(idx, "non-finite hit object");

            return Err(DifficultyError::NonFiniteObject { idx });
        }

        if start_time < prev_time {
            warn!(idx, prev_time, start_time, "unsorted hit objects");

            return Err(DifficultyError::UnsortedObjects {
                idx,
                prev: prev_time,
                curr: start_time,
            });
        }

        if let Some(radius) = obj.radius() {
            if radius.is_nan() || radius <= 0.0 || radius.is_infinite() {
                warn!(idx, radius, "invalid hit object radius");

                return Err(DifficultyError::InvalidRadius { idx, radius });
            }
        }

        prev_time = start_time;
    }

    Ok(())
}

pub fn validate_clock_rate(clock_rate: f64) -> Result<f64, DifficultyError> {
    if clock_rate.is_finite() && clock_rate > 0.0 {
        Ok(clock_rate)
    } else {
        warn!(clock_rate, "invalid clock rate");

        Err(DifficultyError::InvalidClockRate(clock_rate))
    }
}
