use async_trait::async_trait;
use std::sync::Arc;

use crate::error::BookingResult;
use crate::models::{
    Closure, Discount, Field, Hall, MemberSubscription, Order, Reservation, Sport, SportField,
    Subscription, TimeSlot,
};

/// Read access to the booking records. Every list is ordered by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list_sports(&self, active_only: bool) -> BookingResult<Vec<Sport>>;

    async fn find_hall_by_id(&self, id: i32) -> BookingResult<Option<Hall>>;

    async fn list_halls(&self) -> BookingResult<Vec<Hall>>;

    async fn list_fields_by_hall(&self, hall_id: i32) -> BookingResult<Vec<Field>>;

    async fn list_sport_fields(&self) -> BookingResult<Vec<SportField>>;

    async fn list_time_slots(&self) -> BookingResult<Vec<TimeSlot>>;

    async fn list_subscriptions(&self) -> BookingResult<Vec<Subscription>>;

    async fn list_discounts(&self) -> BookingResult<Vec<Discount>>;

    async fn list_reservations_for_user(&self, user_id: i32) -> BookingResult<Vec<Reservation>>;

    /// Orders come with their discount and subscription links attached
    async fn list_orders_for_user(&self, user_id: i32) -> BookingResult<Vec<Order>>;

    async fn list_subscriptions_for_user(
        &self,
        user_id: i32,
    ) -> BookingResult<Vec<MemberSubscription>>;

    async fn list_closures_for_sport_field(
        &self,
        sport_field_id: i32,
    ) -> BookingResult<Vec<Closure>>;
}

/// Plain rows backing [`InMemoryBookingRepository`]
#[derive(Debug, Clone, Default)]
pub struct BookingRecords {
    pub sports: Vec<Sport>,
    pub halls: Vec<Hall>,
    pub fields: Vec<Field>,
    pub sport_fields: Vec<SportField>,
    pub time_slots: Vec<TimeSlot>,
    pub closures: Vec<Closure>,
    pub reservations: Vec<Reservation>,
    pub orders: Vec<Order>,
    pub discounts: Vec<Discount>,
    pub subscriptions: Vec<Subscription>,
    pub member_subscriptions: Vec<MemberSubscription>,
}

impl BookingRecords {
    /// Same facilities as the database seed: one hall, two courts, three sports
    pub fn seeded() -> Self {
        let sport = |id: i32, label: &str, active: bool| Sport {
            id,
            label: label.to_string(),
            active,
        };
        let field = |id: i32, label: &str| Field {
            id,
            label: label.to_string(),
            active: true,
            hall_id: 1,
        };
        let sport_field = |id: i32, field_id: i32, sport_id: i32| SportField {
            id,
            field_id,
            sport_id,
        };
        let slot = |id: i32, label: &str| TimeSlot {
            id,
            label: label.to_string(),
        };

        Self {
            sports: vec![
                sport(1, "Badminton", true),
                sport(2, "Squash", true),
                sport(3, "Table tennis", false),
            ],
            halls: vec![Hall {
                id: 1,
                label: "Main hall".to_string(),
                active: true,
            }],
            fields: vec![field(1, "Court 1"), field(2, "Court 2")],
            sport_fields: vec![
                sport_field(1, 1, 1),
                sport_field(2, 2, 1),
                sport_field(3, 2, 2),
            ],
            time_slots: vec![
                slot(1, "08:00-09:00"),
                slot(2, "09:00-10:00"),
                slot(3, "18:00-19:00"),
                slot(4, "19:00-20:00"),
            ],
            ..Self::default()
        }
    }
}

/// In-memory implementation of BookingRepository (for development/testing)
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    records: Arc<BookingRecords>,
}

impl InMemoryBookingRepository {
    pub fn new(records: BookingRecords) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn seeded() -> Self {
        Self::new(BookingRecords::seeded())
    }
}

fn sorted_by_id<T: Clone>(items: impl Iterator<Item = T>, id: impl Fn(&T) -> i32) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort_by_key(|item| id(item));
    items
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn list_sports(&self, active_only: bool) -> BookingResult<Vec<Sport>> {
        let sports = self
            .records
            .sports
            .iter()
            .filter(|s| !active_only || s.active)
            .cloned();
        Ok(sorted_by_id(sports, |s| s.id))
    }

    async fn find_hall_by_id(&self, id: i32) -> BookingResult<Option<Hall>> {
        Ok(self.records.halls.iter().find(|h| h.id == id).cloned())
    }

    async fn list_halls(&self) -> BookingResult<Vec<Hall>> {
        Ok(sorted_by_id(self.records.halls.iter().cloned(), |h| h.id))
    }

    async fn list_fields_by_hall(&self, hall_id: i32) -> BookingResult<Vec<Field>> {
        let fields = self
            .records
            .fields
            .iter()
            .filter(|f| f.hall_id == hall_id)
            .cloned();
        Ok(sorted_by_id(fields, |f| f.id))
    }

    async fn list_sport_fields(&self) -> BookingResult<Vec<SportField>> {
        Ok(sorted_by_id(
            self.records.sport_fields.iter().cloned(),
            |sf| sf.id,
        ))
    }

    async fn list_time_slots(&self) -> BookingResult<Vec<TimeSlot>> {
        Ok(sorted_by_id(self.records.time_slots.iter().cloned(), |t| t.id))
    }

    async fn list_subscriptions(&self) -> BookingResult<Vec<Subscription>> {
        Ok(sorted_by_id(
            self.records.subscriptions.iter().cloned(),
            |s| s.id,
        ))
    }

    async fn list_discounts(&self) -> BookingResult<Vec<Discount>> {
        Ok(sorted_by_id(self.records.discounts.iter().cloned(), |d| d.id))
    }

    async fn list_reservations_for_user(&self, user_id: i32) -> BookingResult<Vec<Reservation>> {
        let reservations = self
            .records
            .reservations
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned();
        Ok(sorted_by_id(reservations, |r| r.id))
    }

    async fn list_orders_for_user(&self, user_id: i32) -> BookingResult<Vec<Order>> {
        let orders = self
            .records
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned();
        Ok(sorted_by_id(orders, |o| o.id))
    }

    async fn list_subscriptions_for_user(
        &self,
        user_id: i32,
    ) -> BookingResult<Vec<MemberSubscription>> {
        let held = self
            .records
            .member_subscriptions
            .iter()
            .filter(|s| s.user_id == Some(user_id))
            .cloned();
        Ok(sorted_by_id(held, |s| s.id))
    }

    async fn list_closures_for_sport_field(
        &self,
        sport_field_id: i32,
    ) -> BookingResult<Vec<Closure>> {
        let closures = self
            .records
            .closures
            .iter()
            .filter(|c| c.sport_field_id == sport_field_id)
            .cloned();
        Ok(sorted_by_id(closures, |c| c.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reservation(id: i32, user_id: i32) -> Reservation {
        Reservation {
            id,
            name: format!("Booking {}", id),
            price: 12.5,
            payment_status: None,
            date: Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap(),
            active: true,
            user_id,
            time_slot_id: 3,
            sport_field_id: 1,
        }
    }

    #[tokio::test]
    async fn test_active_only_hides_retired_sports() {
        let repo = InMemoryBookingRepository::seeded();

        assert_eq!(repo.list_sports(false).await.unwrap().len(), 3);
        let active: Vec<_> = repo
            .list_sports(true)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(active, ["Badminton", "Squash"]);
    }

    #[tokio::test]
    async fn test_reservations_are_scoped_to_user() {
        let repo = InMemoryBookingRepository::new(BookingRecords {
            reservations: vec![reservation(5, 2), reservation(3, 1), reservation(1, 2)],
            ..BookingRecords::seeded()
        });

        let ids: Vec<_> = repo
            .list_reservations_for_user(2)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, [1, 5]);
        assert!(repo.list_reservations_for_user(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fields_by_hall() {
        let repo = InMemoryBookingRepository::seeded();

        assert_eq!(repo.list_fields_by_hall(1).await.unwrap().len(), 2);
        assert!(repo.list_fields_by_hall(2).await.unwrap().is_empty());
    }
}
