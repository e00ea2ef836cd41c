use rust_decimal::Decimal;

use crate::dto::{BookingDetails, InvoiceView};

/// Derive the invoice view for a booking. Pure projection over the stored
/// record: no lookups, no writes, safe to call any number of times.
pub fn project(booking: &BookingDetails) -> InvoiceView {
    let unit_price = booking.ticket_price.unwrap_or(Decimal::ZERO);
    let total_amount = unit_price * Decimal::from(booking.number_of_tickets);

    InvoiceView {
        invoice_number: format!(
            "INV-{}-{}",
            booking.id,
            booking.registered_at.format("%Y%m%d")
        ),
        issue_date: booking.registered_at,
        ticket_code: booking.ticket_code.clone(),
        event_name: booking.event_name.clone(),
        event_date: booking.event_start_date,
        event_location: booking.event_location.clone(),
        attendee_name: format!("{} {}", booking.user_first_name, booking.user_last_name),
        attendee_email: booking.user_email.clone(),
        number_of_tickets: booking.number_of_tickets,
        unit_price,
        total_amount,
        payment_status: booking.payment_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;
    use chrono::{TimeZone, Utc};

    fn booking(ticket_price: Option<Decimal>, number_of_tickets: i32) -> BookingDetails {
        BookingDetails {
            id: 17,
            event_id: 42,
            event_name: "RustConf".to_string(),
            event_location: Some("12 Main St, Springfield".to_string()),
            event_start_date: Utc.with_ymd_and_hms(2026, 9, 1, 18, 0, 0).unwrap(),
            event_end_date: Utc.with_ymd_and_hms(2026, 9, 2, 2, 0, 0).unwrap(),
            ticket_price,
            number_of_tickets,
            payment_status: PaymentStatus::Completed,
            ticket_code: "EVT-42-1A2B3C4D".to_string(),
            registered_at: Utc.with_ymd_and_hms(2026, 8, 7, 10, 30, 0).unwrap(),
            user_id: 7,
            user_first_name: "Ada".to_string(),
            user_last_name: "Lovelace".to_string(),
            user_email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn total_is_unit_price_times_quantity() {
        let invoice = project(&booking(Some(Decimal::new(49900, 2)), 3));
        assert_eq!(invoice.unit_price, Decimal::new(49900, 2));
        assert_eq!(invoice.total_amount, Decimal::new(149700, 2));
    }

    #[test]
    fn invoice_number_embeds_id_and_registration_date() {
        let invoice = project(&booking(Some(Decimal::ONE), 1));
        assert_eq!(invoice.invoice_number, "INV-17-20260807");
        assert_eq!(invoice.issue_date, booking(None, 1).registered_at);
    }

    #[test]
    fn missing_price_projects_zero_totals() {
        let invoice = project(&booking(None, 4));
        assert_eq!(invoice.unit_price, Decimal::ZERO);
        assert_eq!(invoice.total_amount, Decimal::ZERO);
    }

    #[test]
    fn snapshot_fields_come_from_the_booking() {
        let invoice = project(&booking(Some(Decimal::ONE), 2));
        assert_eq!(invoice.attendee_name, "Ada Lovelace");
        assert_eq!(invoice.attendee_email, "ada@example.com");
        assert_eq!(invoice.event_name, "RustConf");
        assert_eq!(invoice.ticket_code, "EVT-42-1A2B3C4D");
        assert_eq!(invoice.payment_status, PaymentStatus::Completed);
    }
}
