// Session — all state owned by one running dashboard session, mutated in
// direct response to user actions. Nothing here is persisted.

use crate::constants::*;
use crate::jitter::JitterSource;
use crate::logic;
use crate::types::*;

/// In-memory session state: the chart series plus the scalar fields backing
/// the dashboard header. The last logged meal type and activity type are
/// tracked so every prediction gets a fully specified input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub series: Series,
    pub current_glucose: Glucose,
    pub last_meal: String,
    pub meal_type: MealType,
    pub activity_type: ActivityType,
    pub last_activity_minutes: Option<String>,
    pub prediction: Glucose,
    pub alert: bool,
}

impl Session {
    /// Session over an arbitrary series. The seeded default lives in
    /// `simulator::init_session`.
    pub fn new(series: Series, current_glucose: Glucose, prediction: Glucose) -> Self {
        Session {
            series,
            current_glucose,
            last_meal: SEED_MEAL.to_string(),
            meal_type: MealType::Balanced,
            activity_type: ActivityType::None,
            last_activity_minutes: None,
            prediction,
            alert: false,
        }
    }

    /// The input the next prediction will see.
    pub fn prediction_input(&self) -> PredictionInput {
        PredictionInput {
            current_glucose: self.current_glucose,
            meal_type: self.meal_type,
            activity_type: self.activity_type,
        }
    }

    // Predict, rewrite the series, re-evaluate the alert. Runs after every
    // accepted submission; prediction and alert are never carried stale.
    fn refresh(&mut self, jitter: &mut impl JitterSource) -> Result<(), EngineError> {
        let predicted = logic::predict(&self.prediction_input(), jitter);
        logic::update_series(&mut self.series, self.current_glucose, predicted)?;
        self.prediction = predicted;
        self.alert = logic::evaluate_alert(predicted);
        Ok(())
    }

    /// Log a glucose reading from raw form input. Invalid input leaves the
    /// session untouched.
    pub fn log_glucose(
        &mut self,
        raw: &str,
        jitter: &mut impl JitterSource,
    ) -> Result<(), EngineError> {
        let value = logic::parse_reading(raw)?;
        self.current_glucose = value;
        self.refresh(jitter)
    }

    /// Log a meal. The description must be non-empty; the meal type feeds
    /// the next prediction.
    pub fn log_meal(
        &mut self,
        description: &str,
        meal_type: MealType,
        jitter: &mut impl JitterSource,
    ) -> Result<(), EngineError> {
        if description.trim().is_empty() {
            return Err(EngineError::EmptyMealDescription);
        }
        self.last_meal = description.to_string();
        self.meal_type = meal_type;
        self.refresh(jitter)
    }

    /// Log physical activity. The duration is recorded for display only and
    /// never feeds the engine.
    pub fn log_activity(
        &mut self,
        activity_type: ActivityType,
        duration_minutes: &str,
        jitter: &mut impl JitterSource,
    ) -> Result<(), EngineError> {
        self.activity_type = activity_type;
        self.last_activity_minutes = Some(duration_minutes.to_string());
        self.refresh(jitter)
    }

    /// Dismiss the alert banner. Display-only: the flag comes back on the
    /// next high prediction.
    pub fn dismiss_alert(&mut self) {
        self.alert = false;
    }

    /// Banner text while the alert is active.
    pub fn alert_banner(&self) -> Option<String> {
        self.alert.then(|| {
            format!(
                "Glucose spike predicted in 2 hours. Try a 15-minute walk now to avoid reaching {} mg/dL",
                self.prediction
            )
        })
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  current glucose:  {} mg/dL", self.current_glucose)?;
        writeln!(
            f,
            "  predicted (2h):   {} mg/dL{}",
            self.prediction,
            if logic::evaluate_alert(self.prediction) {
                "  [HIGH]"
            } else {
                ""
            }
        )?;
        writeln!(f, "  last meal:        {} ({})", self.last_meal, self.meal_type)?;
        match &self.last_activity_minutes {
            Some(minutes) => writeln!(
                f,
                "  last activity:    {} ({} min)",
                self.activity_type, minutes
            )?,
            None => writeln!(f, "  last activity:    {}", self.activity_type)?,
        }
        if let Some(banner) = self.alert_banner() {
            writeln!(f, "  ALERT: {}", banner)?;
        }
        for point in self.series.points() {
            writeln!(
                f,
                "    {:>5}  {:>3} mg/dL  {}",
                point.label,
                point.value,
                if point.is_forecast { "forecast" } else { "measured" }
            )?;
        }
        writeln!(f, "  recommendations:")?;
        for line in RECOMMENDATIONS {
            writeln!(f, "    - {}", line)?;
        }
        Ok(())
    }
}
