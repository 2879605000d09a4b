use serde::{Deserialize, Serialize};

/// Headline figure for one of the dashboard's stat cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// One bar of the weekly ticket sales series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPoint {
    pub day: String,
    pub tickets: u32,
}

impl TicketPoint {
    pub fn new(day: impl Into<String>, tickets: u32) -> Self {
        Self {
            day: day.into(),
            tickets,
        }
    }
}

/// The demo stat cards the dashboard ships with
pub fn demo_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Users", "1245"),
        StatCard::new("Tickets", "8430"),
        StatCard::new("Revenue", "₹12.5L"),
    ]
}

/// The demo weekly ticket sales series
pub fn weekly_ticket_sales() -> Vec<TicketPoint> {
    vec![
        TicketPoint::new("Mon", 120),
        TicketPoint::new("Tue", 200),
        TicketPoint::new("Wed", 150),
        TicketPoint::new("Thu", 300),
        TicketPoint::new("Fri", 280),
    ]
}

/// Sums the series
pub fn total_tickets(points: &[TicketPoint]) -> u32 {
    points.iter().map(|p| p.tickets).sum()
}

/// The best-selling day, or `None` for an empty series. Ties go to the
/// earlier day.
pub fn peak_day(points: &[TicketPoint]) -> Option<&TicketPoint> {
    points.iter().reduce(|best, p| {
        if p.tickets > best.tickets {
            p
        } else {
            best
        }
    })
}
