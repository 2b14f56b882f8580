// Constants — fixed thresholds, clamp bounds, seed data, and the
// parameter pools the simulator draws from.

use crate::types::{ActivityType, Glucose, MealType};

// Prediction clamp bounds (mg/dL)
pub const GLUCOSE_FLOOR: Glucose = 70;
pub const GLUCOSE_CEILING: Glucose = 300;

/// Predictions strictly above this raise the spike alert.
pub const ALERT_THRESHOLD: Glucose = 180;

// Jitter is uniform over [JITTER_MIN, JITTER_MAX), i.e. -10..=9.
pub const JITTER_MIN: Glucose = -10;
pub const JITTER_MAX: Glucose = 10;

// Accepted range for a logged reading (mg/dL)
pub const READING_MIN: Glucose = 40;
pub const READING_MAX: Glucose = 600;

/// Label of the series point separating measured history from forecast.
pub const ANCHOR_LABEL: &str = "Now";

/// Fixed chart width: 8 measured slots (incl. the anchor) + 3 forecast slots.
pub const SERIES_LEN: usize = 11;

/// Hour offset past the anchor that carries the raw 2-hour prediction.
pub const PREDICTED_SLOT: usize = 2;

/// Last forecast slot recomputed on update; slots beyond it keep their value.
pub const LAST_RECOMPUTED_SLOT: usize = 3;

/// Default 24-hour scenario: (label, value, is_forecast).
pub const SEED_POINTS: &[(&str, Glucose, bool)] = &[
    ("12 AM", 110, false),
    ("3 AM", 95, false),
    ("6 AM", 130, false),
    ("9 AM", 158, false),
    ("12 PM", 140, false),
    ("3 PM", 122, false),
    ("6 PM", 142, false),
    ("Now", 142, false),
    ("+1h", 165, true),
    ("+2h", 187, true),
    ("+3h", 160, true),
];

pub const SEED_GLUCOSE: Glucose = 142;
pub const SEED_PREDICTION: Glucose = 187;
pub const SEED_MEAL: &str = "Sandwich and apple";

/// Static recommendation list shown under the chart. Constant copy, not
/// derived from any computation.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Take a 15-minute walk to stabilize your glucose levels",
    "Drink a glass of water before your next meal",
    "Consider lower-carb options for dinner tonight",
];

// Selection pools for the random-walk simulator
pub const GLUCOSE_READINGS: &[&str] = &[
    "80", "95", "110", "120", "142", "150", "165", "180", "181", "210", "250", "300",
];
pub const JUNK_READINGS: &[&str] = &["", "abc", "12.5", "700", "30", "-5"];
pub const MEAL_DESCRIPTIONS: &[&str] = &[
    "Sandwich and apple",
    "Pasta with garlic bread",
    "Grilled chicken salad",
    "Rice bowl",
    "Greek yogurt",
];
pub const MEAL_TYPES: &[MealType] = &[MealType::LowCarb, MealType::Balanced, MealType::HighCarb];
pub const ACTIVITY_TYPES: &[ActivityType] = &[
    ActivityType::None,
    ActivityType::Light,
    ActivityType::Moderate,
    ActivityType::Intense,
];
pub const ACTIVITY_DURATIONS: &[&str] = &["10", "15", "30", "45", "60"];
