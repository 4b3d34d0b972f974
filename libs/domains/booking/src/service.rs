use std::sync::Arc;

use crate::error::{BookingError, BookingResult};
use crate::models::{
    Closure, Discount, Field, Hall, MemberSubscription, Order, Reservation, Sport, SportField,
    Subscription, TimeSlot,
};
use crate::repository::BookingRepository;

/// Read-only view over facilities, price lists and a member's bookings.
#[derive(Clone)]
pub struct CatalogService<R: BookingRepository> {
    repository: Arc<R>,
}

impl<R: BookingRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_sports(&self, active_only: bool) -> BookingResult<Vec<Sport>> {
        self.repository.list_sports(active_only).await
    }

    pub async fn list_halls(&self) -> BookingResult<Vec<Hall>> {
        self.repository.list_halls().await
    }

    /// Unlike the other lists, an unknown hall is an error rather than an empty list
    pub async fn list_fields_by_hall(&self, hall_id: i32) -> BookingResult<Vec<Field>> {
        if self.repository.find_hall_by_id(hall_id).await?.is_none() {
            return Err(BookingError::HallNotFound(hall_id));
        }
        self.repository.list_fields_by_hall(hall_id).await
    }

    pub async fn list_sport_fields(&self) -> BookingResult<Vec<SportField>> {
        self.repository.list_sport_fields().await
    }

    pub async fn list_time_slots(&self) -> BookingResult<Vec<TimeSlot>> {
        self.repository.list_time_slots().await
    }

    pub async fn list_subscriptions(&self) -> BookingResult<Vec<Subscription>> {
        self.repository.list_subscriptions().await
    }

    pub async fn list_discounts(&self) -> BookingResult<Vec<Discount>> {
        self.repository.list_discounts().await
    }

    pub async fn list_reservations_for_user(&self, user_id: i32) -> BookingResult<Vec<Reservation>> {
        self.repository.list_reservations_for_user(user_id).await
    }

    pub async fn list_orders_for_user(&self, user_id: i32) -> BookingResult<Vec<Order>> {
        self.repository.list_orders_for_user(user_id).await
    }

    pub async fn list_subscriptions_for_user(
        &self,
        user_id: i32,
    ) -> BookingResult<Vec<MemberSubscription>> {
        self.repository.list_subscriptions_for_user(user_id).await
    }

    pub async fn list_closures_for_sport_field(
        &self,
        sport_field_id: i32,
    ) -> BookingResult<Vec<Closure>> {
        self.repository
            .list_closures_for_sport_field(sport_field_id)
            .await
    }
}
