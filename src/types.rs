// Types — domain enums, the glucose series, and the labeled user actions.

use thiserror::Error;

use crate::constants::ANCHOR_LABEL;

/// Blood glucose concentration in mg/dL.
pub type Glucose = i64;

/// Meal classification by glycemic impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    LowCarb,
    Balanced,
    HighCarb,
}

/// Physical activity intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    None,
    Light,
    Moderate,
    Intense,
}

impl std::str::FromStr for MealType {
    type Err = EngineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "low-carb" => Ok(MealType::LowCarb),
            "balanced" => Ok(MealType::Balanced),
            "high-carb" => Ok(MealType::HighCarb),
            other => Err(EngineError::UnknownMealType(other.to_string())),
        }
    }
}

impl std::str::FromStr for ActivityType {
    type Err = EngineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "none" => Ok(ActivityType::None),
            "light" => Ok(ActivityType::Light),
            "moderate" => Ok(ActivityType::Moderate),
            "intense" => Ok(ActivityType::Intense),
            other => Err(EngineError::UnknownActivityType(other.to_string())),
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealType::LowCarb => write!(f, "low-carb"),
            MealType::Balanced => write!(f, "balanced"),
            MealType::HighCarb => write!(f, "high-carb"),
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::None => write!(f, "none"),
            ActivityType::Light => write!(f, "light"),
            ActivityType::Moderate => write!(f, "moderate"),
            ActivityType::Intense => write!(f, "intense"),
        }
    }
}

/// One slot of the 24-hour chart: a time label and a glucose value,
/// flagged as forecast when the value came from the prediction engine
/// rather than a logged reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlucosePoint {
    pub label: &'static str,
    pub value: Glucose,
    pub is_forecast: bool,
}

/// Chronologically ordered glucose points. Exactly one point carries the
/// `"Now"` anchor label; everything after it is forecast, everything at or
/// before it is measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    points: Vec<GlucosePoint>,
}

impl Series {
    pub fn new(points: Vec<GlucosePoint>) -> Self {
        Series { points }
    }

    pub fn points(&self) -> &[GlucosePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the `"Now"` anchor point, if present.
    pub fn anchor_index(&self) -> Option<usize> {
        self.points.iter().position(|p| p.label == ANCHOR_LABEL)
    }

    pub(crate) fn point_mut(&mut self, index: usize) -> &mut GlucosePoint {
        &mut self.points[index]
    }
}

/// Fully specified input to the prediction engine. Call sites always fill
/// every field; the engine has no fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionInput {
    pub current_glucose: Glucose,
    pub meal_type: MealType,
    pub activity_type: ActivityType,
}

/// Labeled user actions, enabling deterministic trace replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    LogGlucose { raw: String },
    LogMeal { description: String, meal_type: MealType },
    LogActivity { activity_type: ActivityType, duration_minutes: String },
    DismissAlert,
}

impl std::fmt::Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::LogGlucose { raw } => write!(f, "LogGlucose({:?})", raw),
            UserAction::LogMeal {
                description,
                meal_type,
            } => write!(f, "LogMeal({:?}, {})", description, meal_type),
            UserAction::LogActivity {
                activity_type,
                duration_minutes,
            } => write!(f, "LogActivity({}, {} min)", activity_type, duration_minutes),
            UserAction::DismissAlert => write!(f, "DismissAlert"),
        }
    }
}

/// Everything that can go wrong at the engine boundary. Rejected submissions
/// leave the session untouched; `AnchorMissing` is an invariant violation
/// that callers treat as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("glucose reading {0:?} is not a whole number")]
    InvalidGlucose(String),
    #[error("glucose reading {0} mg/dL is outside the 40-600 mg/dL range")]
    GlucoseOutOfRange(Glucose),
    #[error("meal description is empty")]
    EmptyMealDescription,
    #[error("unknown meal type tag {0:?}")]
    UnknownMealType(String),
    #[error("unknown activity type tag {0:?}")]
    UnknownActivityType(String),
    #[error("series has no \"Now\" anchor point")]
    AnchorMissing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_tags_parse() {
        assert_eq!("low-carb".parse(), Ok(MealType::LowCarb));
        assert_eq!("balanced".parse(), Ok(MealType::Balanced));
        assert_eq!("high-carb".parse(), Ok(MealType::HighCarb));
    }

    #[test]
    fn test_activity_tags_parse() {
        assert_eq!("none".parse(), Ok(ActivityType::None));
        assert_eq!("light".parse(), Ok(ActivityType::Light));
        assert_eq!("moderate".parse(), Ok(ActivityType::Moderate));
        assert_eq!("intense".parse(), Ok(ActivityType::Intense));
    }

    #[test]
    fn test_unknown_tags_rejected() {
        assert_eq!(
            "keto".parse::<MealType>(),
            Err(EngineError::UnknownMealType("keto".to_string()))
        );
        assert_eq!(
            "Balanced".parse::<MealType>(),
            Err(EngineError::UnknownMealType("Balanced".to_string()))
        );
        assert_eq!(
            "".parse::<ActivityType>(),
            Err(EngineError::UnknownActivityType(String::new()))
        );
        assert_eq!(
            "running".parse::<ActivityType>(),
            Err(EngineError::UnknownActivityType("running".to_string()))
        );
    }

    #[test]
    fn test_tags_round_trip_through_display() {
        for meal_type in [MealType::LowCarb, MealType::Balanced, MealType::HighCarb] {
            assert_eq!(meal_type.to_string().parse(), Ok(meal_type));
        }
        for activity_type in [
            ActivityType::None,
            ActivityType::Light,
            ActivityType::Moderate,
            ActivityType::Intense,
        ] {
            assert_eq!(activity_type.to_string().parse(), Ok(activity_type));
        }
    }
}
