//! Reconstruction of the event chain that led an order to its final state.

use crate::demo_data::error::GeneratorError;
use crate::demo_data::random::RandomStream;
use crate::model::{HistoryItem, OrderState, UserId};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

pub const PLACED: &str = "Order placed";
pub const CANCELLED: &str = "Order cancelled";
pub const CONFIRMED: &str = "Order confirmed";
pub const PROBLEM: &str = "Can't make it. Did not get any ingredients this morning";
pub const READY: &str = "Order ready for pickup";
pub const DELIVERED: &str = "Order delivered";

/// Who records which events.
///
/// The creator places and cancels orders; every fulfilment step is done by the
/// fulfiller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderActors {
    pub creator: UserId,
    pub fulfiller: UserId,
}

/// Builds the history for an order that ends in `state`.
///
/// The chain always starts with a `New` event two to six days before the due date
/// and ends with an event whose state is `state`. Timestamps never decrease. A
/// cancellation falls strictly between placement and the due moment.
pub fn reconstruct_history(
    state: OrderState,
    due_date: NaiveDate,
    due_time: NaiveTime,
    actors: OrderActors,
    random: &mut RandomStream,
) -> Result<Vec<HistoryItem>, GeneratorError> {
    let due_at = due_date.and_time(due_time);

    let days_before = i64::from(random.next_int(5) + 2);
    let placed_day = shift(due_date.and_time(NaiveTime::MIN), TimeDelta::days(-days_before))?;
    let placed = placed_day.date().and_time(hour(random.next_int(10) + 7, 0));
    let mut history = vec![HistoryItem::new(actors.creator, PLACED, OrderState::New, placed)];

    if state == OrderState::Cancelled {
        let total_hours = due_at.signed_duration_since(placed).num_hours();
        let span = u32::try_from(total_hours - 1).unwrap_or(1).max(1);
        let offset = i64::from(1 + random.next_int(span));
        let cancelled = shift(placed, TimeDelta::hours(offset))?;
        history.push(HistoryItem::new(
            actors.creator,
            CANCELLED,
            OrderState::Cancelled,
            cancelled,
        ));
        return Ok(history);
    }

    if state == OrderState::New {
        return Ok(history);
    }

    let confirmed = shift(
        placed,
        TimeDelta::days(i64::from(random.next_int(2)))
            + TimeDelta::hours(i64::from(random.next_int(5))),
    )?;
    history.push(HistoryItem::new(
        actors.fulfiller,
        CONFIRMED,
        OrderState::Confirmed,
        confirmed,
    ));

    match state {
        OrderState::Problem => {
            let problem = due_date.and_time(hour(random.next_int(4) + 4, 0)).max(confirmed);
            history.push(HistoryItem::new(
                actors.fulfiller,
                PROBLEM,
                OrderState::Problem,
                problem,
            ));
        }
        OrderState::Ready | OrderState::Delivered => {
            let ready_hour = random.next_int(2) + 8;
            let ready_minute = if random.next_bool() { 0 } else { 30 };
            let ready = due_date.and_time(hour(ready_hour, ready_minute)).max(confirmed);
            history.push(HistoryItem::new(
                actors.fulfiller,
                READY,
                OrderState::Ready,
                ready,
            ));

            if state == OrderState::Delivered {
                let early = TimeDelta::minutes(i64::from(random.next_int(120)));
                let delivered = shift(due_at, -early)?.max(ready);
                history.push(HistoryItem::new(
                    actors.fulfiller,
                    DELIVERED,
                    OrderState::Delivered,
                    delivered,
                ));
            }
        }
        _ => {}
    }

    Ok(history)
}

fn shift(at: NaiveDateTime, delta: TimeDelta) -> Result<NaiveDateTime, GeneratorError> {
    at.checked_add_signed(delta)
        .ok_or_else(|| GeneratorError::DateOutOfRange(format!("{} shifted by {}", at, delta)))
}

// Callers only pass hours below 24 and minutes below 60.
fn hour(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_actor::validate_order;

    const ACTORS: OrderActors = OrderActors {
        creator: UserId(2),
        fulfiller: UserId(1),
    };

    fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn states(history: &[HistoryItem]) -> Vec<OrderState> {
        history.iter().map(|h| h.new_state).collect()
    }

    #[test]
    fn chains_follow_the_lifecycle() {
        let mut random = RandomStream::seeded(1);
        let due_time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let cases = [
            (OrderState::New, vec![OrderState::New]),
            (OrderState::Cancelled, vec![OrderState::New, OrderState::Cancelled]),
            (OrderState::Confirmed, vec![OrderState::New, OrderState::Confirmed]),
            (
                OrderState::Problem,
                vec![OrderState::New, OrderState::Confirmed, OrderState::Problem],
            ),
            (
                OrderState::Ready,
                vec![OrderState::New, OrderState::Confirmed, OrderState::Ready],
            ),
            (
                OrderState::Delivered,
                vec![
                    OrderState::New,
                    OrderState::Confirmed,
                    OrderState::Ready,
                    OrderState::Delivered,
                ],
            ),
        ];
        for (state, expected) in cases {
            let history =
                reconstruct_history(state, due_date(), due_time, ACTORS, &mut random).unwrap();
            assert_eq!(states(&history), expected);
        }
    }

    #[test]
    fn histories_are_ordered_and_attributed() {
        let mut random = RandomStream::seeded(21);
        for due_hour in [8, 12, 16] {
            let due_time = NaiveTime::from_hms_opt(due_hour, 0, 0).unwrap();
            for state in [
                OrderState::New,
                OrderState::Cancelled,
                OrderState::Confirmed,
                OrderState::Problem,
                OrderState::Ready,
                OrderState::Delivered,
            ] {
                for _ in 0..200 {
                    let history =
                        reconstruct_history(state, due_date(), due_time, ACTORS, &mut random)
                            .unwrap();
                    let items = vec![crate::model::OrderItem {
                        product: crate::model::ProductId(1),
                        quantity: 1,
                        comment: None,
                    }];
                    assert_eq!(validate_order(state, &items, &history), Ok(()));
                    for event in &history {
                        let expected = match event.new_state {
                            OrderState::New | OrderState::Cancelled => ACTORS.creator,
                            _ => ACTORS.fulfiller,
                        };
                        assert_eq!(event.created_by, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn placement_is_two_to_six_days_ahead() {
        let mut random = RandomStream::seeded(8);
        let due_time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        for _ in 0..500 {
            let history =
                reconstruct_history(OrderState::New, due_date(), due_time, ACTORS, &mut random)
                    .unwrap();
            let placed = history[0].timestamp;
            let days = due_date().signed_duration_since(placed.date()).num_days();
            assert!((2..=6).contains(&days), "{}", days);
            assert!((7..=16).contains(&chrono::Timelike::hour(&placed)));
            assert_eq!(history[0].message, PLACED);
        }
    }

    #[test]
    fn cancellation_falls_strictly_inside_the_window() {
        let mut random = RandomStream::seeded(13);
        let due_time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let due_at = due_date().and_time(due_time);
        for _ in 0..1000 {
            let history = reconstruct_history(
                OrderState::Cancelled,
                due_date(),
                due_time,
                ACTORS,
                &mut random,
            )
            .unwrap();
            let placed = history[0].timestamp;
            let cancelled = history[1].timestamp;
            assert!(placed < cancelled && cancelled < due_at);
            assert_eq!(history[1].message, CANCELLED);
        }
    }

    #[test]
    fn delivery_happens_in_the_two_hours_before_pickup() {
        let mut random = RandomStream::seeded(17);
        let due_time = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
        let due_at = due_date().and_time(due_time);
        for _ in 0..500 {
            let history = reconstruct_history(
                OrderState::Delivered,
                due_date(),
                due_time,
                ACTORS,
                &mut random,
            )
            .unwrap();
            let delivered = history[3].timestamp;
            assert!(delivered <= due_at);
            assert!(due_at.signed_duration_since(delivered) < TimeDelta::minutes(120));
        }
    }
}
