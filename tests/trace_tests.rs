// Integration tests — deterministic trace replay via UserAction sequences.
// Jitter is fixed to 0 so every predicted value is exact.

use glucose_trend_sim::constants::*;
use glucose_trend_sim::invariants::check_invariants;
use glucose_trend_sim::jitter::FixedJitter;
use glucose_trend_sim::replay::replay_trace;
use glucose_trend_sim::simulator::{init_session, run_trace};
use glucose_trend_sim::types::*;

/// 1. Baseline reading: balanced meal, no activity -> prediction 172, no alert.
#[test]
fn trace_baseline_reading() {
    let actions = vec![UserAction::LogGlucose {
        raw: "142".to_string(),
    }];

    let trace = replay_trace(init_session(), &actions, &mut FixedJitter(0));
    let session = &trace.last().unwrap().1;

    // 142 + 30 (balanced) + 0 (none) + 0 jitter = 172
    assert_eq!(session.current_glucose, 142);
    assert_eq!(session.prediction, 172);
    assert!(!session.alert);

    let anchor = session.series.anchor_index().unwrap();
    assert_eq!(session.series.points()[anchor].value, 142);
    assert_eq!(session.series.points()[anchor + 1].value, 157); // round((142+172)/2)
    assert_eq!(session.series.points()[anchor + 2].value, 172);
    assert_eq!(session.series.points()[anchor + 3].value, 157);

    // Measured history untouched
    let seed = init_session();
    assert_eq!(
        session.series.points()[..anchor],
        seed.series.points()[..anchor]
    );
}

/// 2. High-carb meal at 142 -> prediction 202, alert raised.
#[test]
fn trace_high_carb_meal_raises_alert() {
    let actions = vec![UserAction::LogMeal {
        description: "Pasta with garlic bread".to_string(),
        meal_type: MealType::HighCarb,
    }];

    let trace = replay_trace(init_session(), &actions, &mut FixedJitter(0));
    let session = &trace.last().unwrap().1;

    // 142 + 60 + 0 + 0 = 202
    assert_eq!(session.prediction, 202);
    assert!(session.alert);
    assert!(session.alert_banner().unwrap().contains("202 mg/dL"));
}

/// 3. High reading with intense activity: 250 + 60 - 40 = 270, within clamp.
#[test]
fn trace_high_reading_intense_activity() {
    let actions = vec![
        UserAction::LogGlucose {
            raw: "250".to_string(),
        },
        UserAction::LogMeal {
            description: "Rice bowl".to_string(),
            meal_type: MealType::HighCarb,
        },
        UserAction::LogActivity {
            activity_type: ActivityType::Intense,
            duration_minutes: "30".to_string(),
        },
    ];

    let trace = replay_trace(init_session(), &actions, &mut FixedJitter(0));
    let session = &trace.last().unwrap().1;

    assert_eq!(session.prediction, 270);
    assert!(session.alert);

    let anchor = session.series.anchor_index().unwrap();
    assert_eq!(session.series.points()[anchor].value, 250);
    assert_eq!(session.series.points()[anchor + 1].value, 260); // round((250+270)/2)
    assert_eq!(session.series.points()[anchor + 2].value, 270);
    assert_eq!(session.series.points()[anchor + 3].value, 260);
}

/// 4. Low reading with intense activity clamps to the floor: 50 + 10 - 40 = 20 -> 70.
#[test]
fn trace_low_reading_clamps_to_floor() {
    let actions = vec![
        UserAction::LogGlucose {
            raw: "50".to_string(),
        },
        UserAction::LogMeal {
            description: "Grilled chicken salad".to_string(),
            meal_type: MealType::LowCarb,
        },
        UserAction::LogActivity {
            activity_type: ActivityType::Intense,
            duration_minutes: "45".to_string(),
        },
    ];

    let trace = replay_trace(init_session(), &actions, &mut FixedJitter(0));
    let session = &trace.last().unwrap().1;

    assert_eq!(session.prediction, GLUCOSE_FLOOR);
    assert!(!session.alert);
}

/// 5. Invalid glucose submissions are strict no-ops.
#[test]
fn invalid_glucose_is_noop() {
    let mut session = init_session();
    let before = session.clone();

    for raw in ["", "abc", "12.5", "700", "30"] {
        let outcome = session.log_glucose(raw, &mut FixedJitter(0));
        assert!(outcome.is_err(), "reading {:?} should be rejected", raw);
        assert_eq!(session, before, "rejected reading {:?} mutated the session", raw);
    }
}

/// 6. Dismissing the alert clears the banner until the next high prediction.
#[test]
fn trace_dismiss_then_retrigger() {
    let actions = vec![
        UserAction::LogMeal {
            description: "Pasta with garlic bread".to_string(),
            meal_type: MealType::HighCarb,
        },
        UserAction::DismissAlert,
        UserAction::LogGlucose {
            raw: "180".to_string(),
        },
    ];

    let trace = replay_trace(init_session(), &actions, &mut FixedJitter(0));

    assert!(trace[0].1.alert);
    assert!(!trace[1].1.alert);
    // 180 + 60 (high-carb sticks) + 0 = 240 -> alert comes back
    assert!(trace[2].1.alert);
    assert_eq!(trace[2].1.prediction, 240);
}

/// 7. Random walk: a seeded trace of mixed valid and junk actions never
/// breaks an invariant.
#[test]
fn random_walk_preserves_invariants() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(42);
    let result = run_trace(500, &mut rng, false);
    assert!(
        result.violation.is_none(),
        "invariant violated: {:?}",
        result.violation.as_ref().map(|(name, step, _)| (name, step)),
    );
    assert_eq!(check_invariants(&result.final_session), Ok(()));
}
