// Simulator — drives a seeded session through random user actions and
// checks every safety invariant after each step.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::*;
use crate::invariants;
use crate::jitter::RngJitter;
use crate::replay;
use crate::session::Session;
use crate::types::*;

/// The set of actions the simulator can choose from.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    LogGlucose,
    LogJunkGlucose,
    LogMeal,
    LogActivity,
    DismissAlert,
}

const ALL_ACTIONS: &[Action] = &[
    Action::LogGlucose,
    Action::LogJunkGlucose,
    Action::LogMeal,
    Action::LogActivity,
    Action::DismissAlert,
];

/// The seeded session every run starts from: the default 24-hour chart with
/// the anchor at 142 mg/dL and the stock 2-hour forecast.
pub fn init_session() -> Session {
    let points = SEED_POINTS
        .iter()
        .map(|&(label, value, is_forecast)| GlucosePoint {
            label,
            value,
            is_forecast,
        })
        .collect();
    Session::new(Series::new(points), SEED_GLUCOSE, SEED_PREDICTION)
}

/// Pick a random action with random parameters from the fixed pools.
fn pick_action(rng: &mut impl Rng) -> UserAction {
    match ALL_ACTIONS.choose(rng).unwrap() {
        Action::LogGlucose => UserAction::LogGlucose {
            raw: GLUCOSE_READINGS.choose(rng).unwrap().to_string(),
        },
        Action::LogJunkGlucose => UserAction::LogGlucose {
            raw: JUNK_READINGS.choose(rng).unwrap().to_string(),
        },
        Action::LogMeal => UserAction::LogMeal {
            description: MEAL_DESCRIPTIONS.choose(rng).unwrap().to_string(),
            meal_type: *MEAL_TYPES.choose(rng).unwrap(),
        },
        Action::LogActivity => UserAction::LogActivity {
            activity_type: *ACTIVITY_TYPES.choose(rng).unwrap(),
            duration_minutes: ACTIVITY_DURATIONS.choose(rng).unwrap().to_string(),
        },
        Action::DismissAlert => UserAction::DismissAlert,
    }
}

/// Execute one random step. Rejected submissions (junk readings) leave the
/// session unchanged; that is part of the modeled behavior, not a failure.
pub fn step(session: &mut Session, rng: &mut impl Rng) -> (UserAction, Result<(), EngineError>) {
    let action = pick_action(rng);
    let mut jitter = RngJitter(&mut *rng);
    let outcome = replay::apply_action(session, &action, &mut jitter);
    (action, outcome)
}

/// Result of running one simulation trace.
pub struct TraceResult {
    pub steps: usize,
    pub violation: Option<(&'static str, usize, Session)>,
    pub final_session: Session,
}

/// Run a single trace for up to `max_steps`, checking all invariants after
/// each step.
pub fn run_trace(max_steps: usize, rng: &mut impl Rng, verbose: bool) -> TraceResult {
    let mut session = init_session();

    if verbose {
        println!("[State 0] init");
        println!("{}", session);
    }

    if let Err(violated) = invariants::check_invariants(&session) {
        return TraceResult {
            steps: 0,
            violation: Some((violated, 0, session.clone())),
            final_session: session,
        };
    }

    for step_num in 1..=max_steps {
        let (action, outcome) = step(&mut session, rng);

        if verbose {
            match &outcome {
                Ok(()) => {
                    println!("[State {}] {}", step_num, action);
                    println!("{}", session);
                }
                Err(err) => println!("[State {}] {} rejected: {}", step_num, action, err),
            }
        }

        if let Err(violated) = invariants::check_invariants(&session) {
            if verbose {
                println!("!!! INVARIANT VIOLATION: {} at step {}", violated, step_num);
            }
            return TraceResult {
                steps: step_num,
                violation: Some((violated, step_num, session.clone())),
                final_session: session,
            };
        }
    }

    TraceResult {
        steps: max_steps,
        violation: None,
        final_session: session,
    }
}

/// Run many traces from a single seed.
pub fn run_simulation(
    max_steps: usize,
    max_samples: usize,
    seed: u64,
    verbose: bool,
) -> SimulationResult {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let start = std::time::Instant::now();
    let mut violation = None;

    for trace_num in 0..max_samples {
        let result = run_trace(max_steps, &mut rng, verbose && trace_num == 0);

        if let Some((inv_name, step, session)) = result.violation {
            violation = Some(ViolationInfo {
                invariant: inv_name,
                trace: trace_num,
                step,
                session,
            });
            break;
        }
    }

    let elapsed = start.elapsed();

    SimulationResult {
        max_steps,
        max_samples,
        seed,
        elapsed,
        violation,
    }
}

pub struct ViolationInfo {
    pub invariant: &'static str,
    pub trace: usize,
    pub step: usize,
    pub session: Session,
}

pub struct SimulationResult {
    pub max_steps: usize,
    pub max_samples: usize,
    pub seed: u64,
    pub elapsed: std::time::Duration,
    pub violation: Option<ViolationInfo>,
}

impl std::fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let traces_per_sec = self.max_samples as f64 / self.elapsed.as_secs_f64();
        writeln!(f)?;
        match &self.violation {
            None => {
                writeln!(
                    f,
                    "[ok] No violation found ({:.0}ms at {:.0} traces/second).",
                    self.elapsed.as_millis(),
                    traces_per_sec,
                )?;
                writeln!(
                    f,
                    "Checked {} traces of {} steps each.",
                    self.max_samples, self.max_steps,
                )?;
            }
            Some(v) => {
                writeln!(
                    f,
                    "[VIOLATION] Invariant '{}' violated at trace {} step {}.",
                    v.invariant, v.trace, v.step,
                )?;
                writeln!(f, "Session at violation:")?;
                writeln!(f, "{}", v.session)?;
            }
        }
        writeln!(f, "Seed: {} ", self.seed)
    }
}
