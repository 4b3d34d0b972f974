use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::{
    entity::{
        close, discount, field, hall, order, orders_discount, orders_subscription, reservation,
        sport, sport_field, subscription, time_slot, users_subscription,
    },
    error::{BookingError, BookingResult},
    models::{
        Closure, Discount, Field, Hall, MemberSubscription, Order, Reservation, Sport, SportField,
        Subscription, TimeSlot,
    },
    repository::BookingRepository,
};

fn db_error(e: DbErr) -> BookingError {
    BookingError::Internal(format!("Database error: {}", e))
}

/// PostgreSQL implementation of BookingRepository
pub struct PgBookingRepository {
    halls: BaseRepository<hall::Entity>,
}

impl PgBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            halls: BaseRepository::new(db),
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.halls.db()
    }

    /// Discount ids and the subscription id per order
    async fn order_links(
        &self,
        order_ids: &[i32],
    ) -> BookingResult<(HashMap<i32, Vec<i32>>, HashMap<i32, i32>)> {
        let discounts = orders_discount::Entity::find()
            .filter(orders_discount::Column::FkOrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(orders_discount::Column::FkDiscountId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        let subscriptions = orders_subscription::Entity::find()
            .filter(orders_subscription::Column::FkOrderId.is_in(order_ids.iter().copied()))
            .all(self.db())
            .await
            .map_err(db_error)?;

        let mut discount_ids: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in discounts {
            discount_ids
                .entry(link.fk_order_id)
                .or_default()
                .push(link.fk_discount_id);
        }

        let subscription_ids = subscriptions
            .into_iter()
            .map(|link| (link.fk_order_id, link.fk_subscription_id))
            .collect();

        Ok((discount_ids, subscription_ids))
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn list_sports(&self, active_only: bool) -> BookingResult<Vec<Sport>> {
        let mut query = sport::Entity::find();
        if active_only {
            query = query.filter(sport::Column::Active.eq(true));
        }

        let models = query
            .order_by_asc(sport::Column::SportId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_hall_by_id(&self, id: i32) -> BookingResult<Option<Hall>> {
        let model = self.halls.find_by_id(id).await.map_err(db_error)?;
        Ok(model.map(Into::into))
    }

    async fn list_halls(&self) -> BookingResult<Vec<Hall>> {
        let models = hall::Entity::find()
            .order_by_asc(hall::Column::HallId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_fields_by_hall(&self, hall_id: i32) -> BookingResult<Vec<Field>> {
        let models = field::Entity::find()
            .filter(field::Column::FkHallId.eq(hall_id))
            .order_by_asc(field::Column::FieldId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_sport_fields(&self) -> BookingResult<Vec<SportField>> {
        let models = sport_field::Entity::find()
            .order_by_asc(sport_field::Column::SportFieldId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_time_slots(&self) -> BookingResult<Vec<TimeSlot>> {
        let models = time_slot::Entity::find()
            .order_by_asc(time_slot::Column::TimeSlotId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_subscriptions(&self) -> BookingResult<Vec<Subscription>> {
        let models = subscription::Entity::find()
            .order_by_asc(subscription::Column::SubscriptionId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_discounts(&self) -> BookingResult<Vec<Discount>> {
        let models = discount::Entity::find()
            .order_by_asc(discount::Column::DiscountId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_reservations_for_user(&self, user_id: i32) -> BookingResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::FkUserId.eq(user_id))
            .order_by_asc(reservation::Column::ReservationId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        tracing::debug!(user_id, count = models.len(), "Loaded reservations");
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_orders_for_user(&self, user_id: i32) -> BookingResult<Vec<Order>> {
        let models = order::Entity::find()
            .filter(order::Column::FkUserId.eq(user_id))
            .order_by_asc(order::Column::OrderId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = models.iter().map(|m| m.order_id).collect();
        let (mut discount_ids, subscription_ids) = self.order_links(&order_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let id = m.order_id;
                m.into_order(
                    discount_ids.remove(&id).unwrap_or_default(),
                    subscription_ids.get(&id).copied(),
                )
            })
            .collect())
    }

    async fn list_subscriptions_for_user(
        &self,
        user_id: i32,
    ) -> BookingResult<Vec<MemberSubscription>> {
        let models = users_subscription::Entity::find()
            .filter(users_subscription::Column::FkUserId.eq(user_id))
            .order_by_asc(users_subscription::Column::UserSubscriptionId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_closures_for_sport_field(
        &self,
        sport_field_id: i32,
    ) -> BookingResult<Vec<Closure>> {
        let models = close::Entity::find()
            .filter(close::Column::FkSportFieldId.eq(sport_field_id))
            .order_by_asc(close::Column::CloseId)
            .all(self.db())
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
