mod catalog;
mod member;

use utoipa::OpenApi;

use axum_helpers::errors::responses::{
    BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
};

use crate::models::{
    Closure, Discount, Field, Hall, MemberSubscription, Order, Reservation, Sport, SportField,
    Subscription, TimeSlot,
};

pub use catalog::catalog_router;
pub use member::member_router;

pub const CATALOG_TAG: &str = "catalog";
pub const MEMBER_TAG: &str = "member";

/// OpenAPI documentation for the booking domain
#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::list_sports,
        catalog::list_halls,
        catalog::list_hall_fields,
        catalog::list_sport_fields,
        catalog::list_closures,
        catalog::list_time_slots,
        catalog::list_subscriptions,
        catalog::list_discounts,
        member::my_reservations,
        member::my_orders,
        member::my_subscriptions,
    ),
    components(
        schemas(
            Closure,
            Discount,
            Field,
            Hall,
            MemberSubscription,
            Order,
            Reservation,
            Sport,
            SportField,
            Subscription,
            TimeSlot,
        ),
        responses(
            BadRequestIdResponse,
            NotFoundResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse,
        )
    ),
    tags(
        (name = CATALOG_TAG, description = "Sports, facilities and price lists"),
        (name = MEMBER_TAG, description = "Bookings of the signed-in member")
    )
)]
pub struct ApiDoc;
