use crate::models::{EventStatus, UserRole};

/// The one visibility rule for events: admins see everything, organizers
/// see their own plus anything published, attendees see published only.
/// Every event read path goes through this predicate.
pub fn visible_to(role: UserRole, caller_id: i64, organizer_id: i64, status: EventStatus) -> bool {
    match role {
        UserRole::Admin => true,
        UserRole::Organizer => organizer_id == caller_id || status == EventStatus::Published,
        UserRole::Attendee => status == EventStatus::Published,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_sees_everything() {
        assert!(visible_to(UserRole::Admin, 1, 2, EventStatus::Draft));
        assert!(visible_to(UserRole::Admin, 1, 2, EventStatus::Cancelled));
    }

    #[test]
    fn organizer_sees_own_drafts_and_others_published() {
        assert!(visible_to(UserRole::Organizer, 5, 5, EventStatus::Draft));
        assert!(visible_to(UserRole::Organizer, 5, 9, EventStatus::Published));
        assert!(!visible_to(UserRole::Organizer, 5, 9, EventStatus::Draft));
        assert!(!visible_to(UserRole::Organizer, 5, 9, EventStatus::Cancelled));
    }

    #[test]
    fn attendee_sees_published_only() {
        assert!(visible_to(UserRole::Attendee, 7, 9, EventStatus::Published));
        assert!(!visible_to(UserRole::Attendee, 7, 9, EventStatus::Draft));
        assert!(!visible_to(UserRole::Attendee, 7, 7, EventStatus::Draft));
        assert!(!visible_to(UserRole::Attendee, 7, 9, EventStatus::Completed));
    }
}
