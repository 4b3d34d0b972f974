//! Locations Domain
//!
//! Countries and localities are reference data loaded by migrations. Addresses
//! are owned by members and edited from their profile.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_locations::{
//!     AddressService, InMemoryAddressRepository, InMemoryLocalityRepository, LocalityService,
//!     handlers,
//! };
//!
//! let localities = InMemoryLocalityRepository::seeded();
//! let addresses = AddressService::new(InMemoryAddressRepository::new(), localities.clone());
//! let router = handlers::locality_router(LocalityService::new(localities));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{LocationError, LocationResult};
pub use models::{Address, AddressInput, AddressSearch, Country, Locality, LocalitySummary};
pub use postgres::{PgAddressRepository, PgCountryRepository, PgLocalityRepository};
pub use repository::{
    AddressRepository, CountryRepository, InMemoryAddressRepository, InMemoryCountryRepository,
    InMemoryLocalityRepository, LocalityRepository,
};
pub use service::{AddressService, CountryService, LocalityService};
