// Pure functions — the prediction engine, series updater, and alert policy.
// Everything here is deterministic given the injected jitter source.

use crate::constants::*;
use crate::jitter::JitterSource;
use crate::types::*;

/// Fixed glycemic offset per meal type.
pub fn meal_offset(meal_type: MealType) -> Glucose {
    match meal_type {
        MealType::LowCarb => 10,
        MealType::Balanced => 30,
        MealType::HighCarb => 60,
    }
}

/// Fixed offset per activity intensity (exercise lowers glucose).
pub fn activity_offset(activity_type: ActivityType) -> Glucose {
    match activity_type {
        ActivityType::None => 0,
        ActivityType::Light => -15,
        ActivityType::Moderate => -25,
        ActivityType::Intense => -40,
    }
}

/// Forecast the 2-hour glucose level: base reading plus meal and activity
/// offsets plus one jitter draw, clamped to [GLUCOSE_FLOOR, GLUCOSE_CEILING].
/// The result is always within the clamp bounds regardless of input.
pub fn predict(input: &PredictionInput, jitter: &mut impl JitterSource) -> Glucose {
    let raw = input.current_glucose
        + meal_offset(input.meal_type)
        + activity_offset(input.activity_type)
        + jitter.next_jitter();
    raw.clamp(GLUCOSE_FLOOR, GLUCOSE_CEILING)
}

/// Integer midpoint of two glucose values, rounding halves toward +infinity.
pub fn midpoint(a: Glucose, b: Glucose) -> Glucose {
    (a + b + 1).div_euclid(2)
}

/// Rewrite the series around the anchor: the anchor takes the current
/// reading, the forecast slot 2 hours out takes the prediction, and the
/// slots 1 and 3 hours out take the midpoint of the two. Forecast slots
/// beyond LAST_RECOMPUTED_SLOT and all pre-anchor points keep their values.
pub fn update_series(
    series: &mut Series,
    current: Glucose,
    predicted: Glucose,
) -> Result<(), EngineError> {
    let anchor = series.anchor_index().ok_or(EngineError::AnchorMissing)?;
    series.point_mut(anchor).value = current;

    for i in anchor + 1..series.len() {
        let hours_past = i - anchor;
        if hours_past == PREDICTED_SLOT {
            series.point_mut(i).value = predicted;
        } else if hours_past == 1 || hours_past == LAST_RECOMPUTED_SLOT {
            series.point_mut(i).value = midpoint(current, predicted);
        }
    }
    Ok(())
}

/// Spike alert: true iff the prediction is strictly above the threshold.
pub fn evaluate_alert(predicted: Glucose) -> bool {
    predicted > ALERT_THRESHOLD
}

/// Parse and validate a submitted glucose reading. Non-numeric input and
/// readings outside READING_MIN..=READING_MAX are rejected.
pub fn parse_reading(raw: &str) -> Result<Glucose, EngineError> {
    let value: Glucose = raw
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidGlucose(raw.to_string()))?;
    if !(READING_MIN..=READING_MAX).contains(&value) {
        return Err(EngineError::GlucoseOutOfRange(value));
    }
    Ok(value)
}
