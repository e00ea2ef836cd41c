use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::{EventStatus, PaymentStatus, User, UserRole};

// ---- auth ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ---- users ----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            role: user.role,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
}

// ---- venues ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePayload {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub capacity: Option<i32>,
    pub amenities: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct VenueListQuery {
    pub active: Option<bool>,
}

// ---- events ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub status: Option<EventStatus>,
    pub max_attendees: Option<i32>,
    pub ticket_price: Option<Decimal>,
    pub venue_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub status: Option<EventStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub limit: Option<i64>,
}

/// Event row joined with its venue, organizer and inventory, as served to
/// clients.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub status: EventStatus,
    pub max_attendees: Option<i32>,
    pub tickets_left: Option<i32>,
    pub ticket_price: Option<Decimal>,
    pub venue_id: Option<i64>,
    pub venue_name: Option<String>,
    pub organizer_id: i64,
    pub organizer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---- bookings ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub event_id: i64,
    pub number_of_tickets: i32,
}

/// Registration row joined with its event and user snapshot fields.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub event_location: Option<String>,
    pub event_start_date: DateTime<Utc>,
    pub event_end_date: DateTime<Utc>,
    pub ticket_price: Option<Decimal>,
    pub number_of_tickets: i32,
    pub payment_status: PaymentStatus,
    pub ticket_code: String,
    pub registered_at: DateTime<Utc>,
    pub user_id: i64,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    pub invoice_number: String,
    pub issue_date: DateTime<Utc>,
    pub ticket_code: String,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub event_location: Option<String>,
    pub attendee_name: String,
    pub attendee_email: String,
    pub number_of_tickets: i32,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
}

// ---- dashboard ----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub event_count: i64,
    pub venue_count: i64,
    pub user_count: i64,
    pub published_event_count: i64,
}
