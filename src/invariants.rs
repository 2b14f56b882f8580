// Safety invariants — named predicates the session must satisfy after
// every user action.

use crate::constants::*;
use crate::session::Session;

/// The chart layout is fixed at 11 slots.
pub fn series_length_fixed(session: &Session) -> bool {
    session.series.len() == SERIES_LEN
}

/// Exactly one point carries the "Now" anchor label.
pub fn anchor_exists_once(session: &Session) -> bool {
    session
        .series
        .points()
        .iter()
        .filter(|p| p.label == ANCHOR_LABEL)
        .count()
        == 1
}

/// Forecast flags are exactly the slots strictly after the anchor.
pub fn forecast_follows_anchor(session: &Session) -> bool {
    match session.series.anchor_index() {
        None => false,
        Some(anchor) => session
            .series
            .points()
            .iter()
            .enumerate()
            .all(|(i, p)| p.is_forecast == (i > anchor)),
    }
}

/// The anchor point always shows the session's current reading.
pub fn anchor_tracks_current(session: &Session) -> bool {
    match session.series.anchor_index() {
        None => false,
        Some(anchor) => session.series.points()[anchor].value == session.current_glucose,
    }
}

/// Predictions never escape the clamp bounds.
pub fn prediction_within_bounds(session: &Session) -> bool {
    (GLUCOSE_FLOOR..=GLUCOSE_CEILING).contains(&session.prediction)
}

/// The alert flag is only ever set for a high prediction. Implication, not
/// equivalence: the flag starts unset and the user may dismiss it.
pub fn alert_implies_high(session: &Session) -> bool {
    !session.alert || session.prediction > ALERT_THRESHOLD
}

/// All individual invariants with names for reporting.
pub const ALL_INVARIANTS: &[(&str, fn(&Session) -> bool)] = &[
    ("seriesLengthFixed", series_length_fixed),
    ("anchorExistsOnce", anchor_exists_once),
    ("forecastFollowsAnchor", forecast_follows_anchor),
    ("anchorTracksCurrent", anchor_tracks_current),
    ("predictionWithinBounds", prediction_within_bounds),
    ("alertImpliesHigh", alert_implies_high),
];

/// Check all invariants and return the name of the first violated one, if any.
pub fn check_invariants(session: &Session) -> Result<(), &'static str> {
    for (name, check) in ALL_INVARIANTS {
        if !check(session) {
            return Err(name);
        }
    }
    Ok(())
}
