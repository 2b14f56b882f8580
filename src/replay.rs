// Deterministic trace replay — applies a sequence of labeled user actions
// to a session and returns the resulting state sequence.

use crate::invariants;
use crate::jitter::JitterSource;
use crate::session::Session;
use crate::types::{EngineError, UserAction};

/// Apply a single labeled action to the session. Dispatches to the session
/// operation matching the label, with parameters taken from the label.
pub fn apply_action(
    session: &mut Session,
    action: &UserAction,
    jitter: &mut impl JitterSource,
) -> Result<(), EngineError> {
    match action {
        UserAction::LogGlucose { raw } => session.log_glucose(raw, jitter),
        UserAction::LogMeal {
            description,
            meal_type,
        } => session.log_meal(description, *meal_type, jitter),
        UserAction::LogActivity {
            activity_type,
            duration_minutes,
        } => session.log_activity(*activity_type, duration_minutes, jitter),
        UserAction::DismissAlert => {
            session.dismiss_alert();
            Ok(())
        }
    }
}

/// Replay a full trace of labeled actions starting from `init`.
/// Every action must be accepted; panics with a descriptive message if one
/// is rejected or an invariant breaks. Returns the sequence of
/// (action, resulting session) pairs.
pub fn replay_trace(
    init: Session,
    actions: &[UserAction],
    jitter: &mut impl JitterSource,
) -> Vec<(UserAction, Session)> {
    let mut trace = Vec::with_capacity(actions.len());
    let mut session = init;

    for (i, action) in actions.iter().enumerate() {
        if let Err(err) = apply_action(&mut session, action, jitter) {
            panic!(
                "Action {} rejected at step {} ({})\nSession:\n{}",
                action, i, err, session,
            );
        }

        if let Err(violated) = invariants::check_invariants(&session) {
            panic!(
                "Invariant '{}' violated after step {} ({})\nSession:\n{}",
                violated, i, action, session,
            );
        }

        trace.push((action.clone(), session.clone()));
    }

    trace
}
