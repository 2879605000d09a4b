use crate::error::{MarqueeError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A booking event on the dashboard calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Event {
    /// Creates an event, rejecting a start after its end
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(MarqueeError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self {
            title: title.into(),
            start,
            end,
        })
    }

    /// Whether the event covers the given calendar day. Spans are
    /// inclusive on both ends.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start.date_naive() <= day && day <= self.end.date_naive()
    }
}

/// The demo bookings the calendar ships with
pub fn demo_events() -> Result<Vec<Event>> {
    Ok(vec![
        Event::new(
            "Movie Booking",
            "2026-01-18T00:00:00Z".parse::<DateTime<Utc>>()?,
            "2026-01-18T00:00:00Z".parse::<DateTime<Utc>>()?,
        )?,
        Event::new(
            "Premiere Show",
            "2026-01-20T00:00:00Z".parse::<DateTime<Utc>>()?,
            "2026-01-20T00:00:00Z".parse::<DateTime<Utc>>()?,
        )?,
    ])
}

/// The events falling on a given day, in their original order
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events.iter().filter(|e| e.covers(day)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_demo_events() {
        let events = demo_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Movie Booking");
        assert_eq!(events[0].start.date_naive(), day(2026, 1, 18));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let start = "2026-01-20T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let end = "2026-01-18T00:00:00Z".parse::<DateTime<Utc>>().unwrap();

        assert!(matches!(
            Event::new("Backwards", start, end),
            Err(MarqueeError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_events_on_day() {
        let events = demo_events().unwrap();

        let on_18th = events_on_day(&events, day(2026, 1, 18));
        assert_eq!(on_18th.len(), 1);
        assert_eq!(on_18th[0].title, "Movie Booking");

        assert!(events_on_day(&events, day(2026, 1, 19)).is_empty());
    }

    #[test]
    fn test_multi_day_event_covers_span() {
        let start = "2026-01-18T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let end = "2026-01-20T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let event = Event::new("Festival", start, end).unwrap();

        assert!(event.covers(day(2026, 1, 18)));
        assert!(event.covers(day(2026, 1, 19)));
        assert!(event.covers(day(2026, 1, 20)));
        assert!(!event.covers(day(2026, 1, 21)));
    }
}
