//! Canned records served by the mock service.
//!
//! The set is rebuilt on every call; nothing created through the service is
//! ever added to it.

use crate::models::tickets::{Category, Model as Ticket, Priority, TicketStatus};
use chrono::{DateTime, Duration, Utc};

/// The two sample tickets, timestamped relative to `now`.
///
/// Ticket `"1"` is created at `now`, ticket `"2"` exactly one day earlier.
pub fn sample_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    vec![
        Ticket {
            id: "1".into(),
            title: "Cannot access VPN".into(),
            description: "I try to connect but it times out.".into(),
            category: Category::Technical,
            priority: Priority::High,
            status: TicketStatus::Open,
            created_at: now,
        },
        Ticket {
            id: "2".into(),
            title: "Request for new monitor".into(),
            description: "My current monitor is flickering.".into(),
            category: Category::Hardware,
            priority: Priority::Medium,
            status: TicketStatus::InProgress,
            created_at: now - Duration::days(1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_fixture_is_one_day_older() {
        let now = Utc::now();
        let tickets = sample_tickets(now);

        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].created_at, now);
        assert_eq!(
            (tickets[0].created_at - tickets[1].created_at).num_milliseconds(),
            86_400_000
        );
    }

    #[test]
    fn fixtures_keep_their_ids_and_states() {
        let tickets = sample_tickets(Utc::now());
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(tickets[0].status, TicketStatus::Open);
        assert_eq!(tickets[1].status, TicketStatus::InProgress);
    }
}
