use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-event ticket inventory. One row per event; `tickets_left` is only
/// ever decremented through the guarded reserve update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketInventory {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub max_tickets: i32,
    pub tickets_left: i32,
}

/// Remaining count for a lazily created inventory row: capacity minus the
/// registrations that already exist, floored at zero.
pub fn seed_remaining(capacity: i32, already_booked: i32) -> i32 {
    (capacity - already_booked).max(0)
}

/// Remaining count after a capacity change. Lowering capacity clamps the
/// count down; raising it never replenishes seats already consumed.
pub fn clamp_remaining(tickets_left: i32, capacity: i32) -> i32 {
    tickets_left.min(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_subtracts_existing_bookings() {
        assert_eq!(seed_remaining(100, 60), 40);
        assert_eq!(seed_remaining(100, 0), 100);
    }

    #[test]
    fn seed_floors_at_zero_when_overbooked() {
        assert_eq!(seed_remaining(10, 25), 0);
        assert_eq!(seed_remaining(0, 3), 0);
    }

    #[test]
    fn raising_capacity_does_not_replenish() {
        // 60 of 100 booked, capacity raised to 150: still 40 left.
        assert_eq!(clamp_remaining(40, 150), 40);
    }

    #[test]
    fn lowering_capacity_clamps_remaining() {
        assert_eq!(clamp_remaining(40, 25), 25);
        assert_eq!(clamp_remaining(40, 0), 0);
    }
}
