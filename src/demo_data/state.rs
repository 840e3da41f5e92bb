//! Final order state as a function of how far the due date is from today.

use crate::demo_data::random::RandomStream;
use crate::model::OrderState;
use chrono::NaiveDate;

/// Where a due date falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// Before today.
    Past,
    /// Today or tomorrow.
    Imminent,
    /// The day after tomorrow.
    Upcoming,
    /// Later than that.
    Distant,
}

impl DueBucket {
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        match due.signed_duration_since(today).num_days() {
            d if d < 0 => DueBucket::Past,
            0 | 1 => DueBucket::Imminent,
            2 => DueBucket::Upcoming,
            _ => DueBucket::Distant,
        }
    }

    /// Cumulative probability thresholds. The first entry whose threshold exceeds the
    /// draw wins; the last entry takes whatever is left.
    pub fn outcomes(self) -> &'static [(f64, OrderState)] {
        match self {
            DueBucket::Past => &[(0.9, OrderState::Delivered), (1.0, OrderState::Cancelled)],
            DueBucket::Imminent => &[
                (0.6, OrderState::Ready),
                (0.8, OrderState::Delivered),
                (0.9, OrderState::Problem),
                (1.0, OrderState::Cancelled),
            ],
            DueBucket::Upcoming => &[
                (0.8, OrderState::New),
                (0.9, OrderState::Problem),
                (1.0, OrderState::Cancelled),
            ],
            DueBucket::Distant => &[(1.0, OrderState::New)],
        }
    }
}

/// Chooses the final state of an order due on `due`.
///
/// Orders more than two days out are always `New` and consume no randomness; every
/// other bucket consumes exactly one uniform double.
pub fn resolve_state(due: NaiveDate, today: NaiveDate, random: &mut RandomStream) -> OrderState {
    let outcomes = DueBucket::classify(due, today).outcomes();
    if let [(_, only)] = outcomes {
        return *only;
    }
    let draw = random.next_double();
    outcomes
        .iter()
        .find(|(threshold, _)| draw < *threshold)
        .or_else(|| outcomes.last())
        .map(|(_, state)| *state)
        .unwrap_or(OrderState::New)
}
