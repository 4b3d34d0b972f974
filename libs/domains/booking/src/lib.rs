//! Booking Domain
//!
//! Facilities (sports, halls, fields), time slots, closures, price lists and
//! the reservations, orders and subscriptions members hold. Records are read
//! here; creating bookings happens elsewhere.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BookingError, BookingResult};
pub use models::{
    Closure, Discount, Field, Hall, MemberSubscription, Order, Reservation, Sport, SportField,
    SportFilter, Subscription, TimeSlot,
};
pub use postgres::PgBookingRepository;
pub use repository::{BookingRecords, BookingRepository, InMemoryBookingRepository};
pub use service::CatalogService;
