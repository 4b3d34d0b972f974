use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Sport {
    pub id: i32,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hall {
    pub id: i32,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Field {
    pub id: i32,
    pub label: String,
    pub active: bool,
    pub hall_id: i32,
}

/// A field set up for one sport. Reservations and closures point here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SportField {
    pub id: i32,
    pub field_id: i32,
    pub sport_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSlot {
    pub id: i32,
    /// e.g. `18:00-19:00`
    pub label: String,
}

/// Period during which a sport field cannot be booked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Closure {
    pub id: i32,
    pub begins_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub sport_field_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub payment_status: Option<String>,
    pub date: DateTime<Utc>,
    pub active: bool,
    pub user_id: i32,
    pub time_slot_id: i32,
    pub sport_field_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub status: String,
    pub price: f64,
    pub user_id: i32,
    /// Discounts applied to this order
    pub discount_ids: Vec<i32>,
    /// Set when the order paid for a subscription
    pub subscription_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Discount {
    pub id: i32,
    pub label: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Subscription {
    pub id: i32,
    pub label: String,
    /// Whole euros
    pub price: i32,
    pub sport_id: Option<i32>,
}

/// A subscription held by a member for a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberSubscription {
    pub id: i32,
    pub subscription_id: Option<i32>,
    pub user_id: Option<i32>,
    pub begins_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SportFilter {
    /// Only sports currently offered
    #[serde(default)]
    pub active_only: bool,
}
