pub mod close;
pub mod discount;
pub mod field;
pub mod hall;
pub mod order;
pub mod orders_discount;
pub mod orders_subscription;
pub mod reservation;
pub mod sport;
pub mod sport_field;
pub mod subscription;
pub mod time_slot;
pub mod users_subscription;

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

pub(crate) fn to_utc(value: DateTimeWithTimeZone) -> DateTime<Utc> {
    value.with_timezone(&Utc)
}
