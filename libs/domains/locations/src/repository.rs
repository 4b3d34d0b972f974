use async_trait::async_trait;
use domain_users::{InMemoryUserRepository, UserError, UserRepository};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{LocationError, LocationResult};
use crate::models::{Address, Country, Locality};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Stores the address under a fresh id; the input `id` is ignored
    async fn create(&self, address: Address) -> LocationResult<Address>;

    /// Stores the address and points the user's `address_id` at it in one
    /// write. Nothing is stored when the user does not exist.
    async fn create_linked(&self, address: Address, user_id: i32) -> LocationResult<Address>;

    async fn update(&self, address: Address) -> LocationResult<Address>;

    async fn delete_by_id(&self, id: i32) -> LocationResult<bool>;

    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Address>>;

    async fn find_all(&self) -> LocationResult<Vec<Address>>;

    /// Exact match
    async fn find_by_street_name(&self, street_name: &str) -> LocationResult<Vec<Address>>;

    async fn find_by_locality_id(&self, locality_id: i32) -> LocationResult<Vec<Address>>;
}

/// Localities are reference data: read-only for the application.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalityRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Locality>>;

    /// Ordered by postal code, then town
    async fn find_all(&self) -> LocationResult<Vec<Locality>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Country>>;

    async fn find_all(&self) -> LocationResult<Vec<Country>>;
}

#[derive(Debug, Default)]
struct AddressStore {
    next_id: i32,
    addresses: BTreeMap<i32, Address>,
}

/// In-memory implementation of AddressRepository (for development/testing)
///
/// `create_linked` needs the user store, attached with [`Self::with_users`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryAddressRepository {
    store: Arc<RwLock<AddressStore>>,
    users: Option<InMemoryUserRepository>,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: InMemoryUserRepository) -> Self {
        Self {
            store: Arc::default(),
            users: Some(users),
        }
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn create(&self, mut address: Address) -> LocationResult<Address> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        address.id = store.next_id;
        store.addresses.insert(address.id, address.clone());

        tracing::info!(address_id = address.id, "Created address");
        Ok(address)
    }

    async fn create_linked(&self, address: Address, user_id: i32) -> LocationResult<Address> {
        let users = self
            .users
            .as_ref()
            .ok_or_else(|| LocationError::Internal("no user store attached".to_string()))?;
        let mut user = users
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound(user_id))?;

        let created = self.create(address).await?;
        user.address_id = Some(created.id);
        if let Err(e) = users.update(user).await {
            self.store.write().await.addresses.remove(&created.id);
            return Err(e.into());
        }

        Ok(created)
    }

    async fn update(&self, address: Address) -> LocationResult<Address> {
        let mut store = self.store.write().await;
        match store.addresses.get_mut(&address.id) {
            Some(existing) => {
                *existing = address.clone();
                tracing::info!(address_id = address.id, "Updated address");
                Ok(address)
            }
            None => Err(LocationError::AddressNotFound(address.id)),
        }
    }

    async fn delete_by_id(&self, id: i32) -> LocationResult<bool> {
        Ok(self.store.write().await.addresses.remove(&id).is_some())
    }

    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Address>> {
        Ok(self.store.read().await.addresses.get(&id).cloned())
    }

    async fn find_all(&self) -> LocationResult<Vec<Address>> {
        Ok(self.store.read().await.addresses.values().cloned().collect())
    }

    async fn find_by_street_name(&self, street_name: &str) -> LocationResult<Vec<Address>> {
        let store = self.store.read().await;
        Ok(store
            .addresses
            .values()
            .filter(|a| a.street_name == street_name)
            .cloned()
            .collect())
    }

    async fn find_by_locality_id(&self, locality_id: i32) -> LocationResult<Vec<Address>> {
        let store = self.store.read().await;
        Ok(store
            .addresses
            .values()
            .filter(|a| a.locality_id == Some(locality_id))
            .cloned()
            .collect())
    }
}

/// Postal codes and towns sort with missing values last, like `ORDER BY ... ASC` in Postgres.
pub(crate) fn locality_sort_key(l: &Locality) -> (bool, Option<String>, bool, Option<String>) {
    (
        l.postal_code.is_none(),
        l.postal_code.clone(),
        l.town.is_none(),
        l.town.clone(),
    )
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryLocalityRepository {
    localities: Arc<Vec<Locality>>,
}

impl InMemoryLocalityRepository {
    pub fn new(mut localities: Vec<Locality>) -> Self {
        localities.sort_by_key(locality_sort_key);
        Self {
            localities: Arc::new(localities),
        }
    }

    /// A few Belgian localities in country 1
    pub fn seeded() -> Self {
        let locality = |id: i32, postal_code: &str, town: &str, province: &str| Locality {
            id,
            postal_code: Some(postal_code.to_string()),
            town: Some(town.to_string()),
            sub_town: None,
            main_town: Some(town.to_string()),
            province: Some(province.to_string()),
            country_id: 1,
        };

        Self::new(vec![
            locality(4, "5000", "Namur", "Namur"),
            locality(1, "1000", "Bruxelles", "Bruxelles"),
            locality(2, "1300", "Wavre", "Brabant Wallon"),
        ])
    }
}

#[async_trait]
impl LocalityRepository for InMemoryLocalityRepository {
    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Locality>> {
        Ok(self.localities.iter().find(|l| l.id == id).cloned())
    }

    async fn find_all(&self) -> LocationResult<Vec<Locality>> {
        Ok(self.localities.as_ref().clone())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCountryRepository {
    countries: Arc<Vec<Country>>,
}

impl InMemoryCountryRepository {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: Arc::new(countries),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![Country {
            id: 1,
            name: "Belgium".to_string(),
            iso_code: "BEL".to_string(),
        }])
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn find_by_id(&self, id: i32) -> LocationResult<Option<Country>> {
        Ok(self.countries.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> LocationResult<Vec<Country>> {
        Ok(self.countries.as_ref().clone())
    }
}
