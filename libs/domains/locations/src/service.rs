use std::sync::Arc;

use crate::error::{LocationError, LocationResult};
use crate::models::{
    Address, AddressInput, AddressSearch, Country, Locality, MAX_BOX_NUMBER_LEN, MAX_NUMBER_LEN,
    MAX_STREET_NAME_LEN,
};
use crate::repository::{AddressRepository, CountryRepository, LocalityRepository};

/// Address management. Localities are read to check references.
pub struct AddressService<A: AddressRepository, L: LocalityRepository> {
    addresses: Arc<A>,
    localities: Arc<L>,
}

impl<A: AddressRepository, L: LocalityRepository> Clone for AddressService<A, L> {
    fn clone(&self) -> Self {
        Self {
            addresses: self.addresses.clone(),
            localities: self.localities.clone(),
        }
    }
}

impl<A: AddressRepository, L: LocalityRepository> AddressService<A, L> {
    pub fn new(addresses: A, localities: L) -> Self {
        Self {
            addresses: Arc::new(addresses),
            localities: Arc::new(localities),
        }
    }

    pub async fn create_address(&self, input: AddressInput) -> LocationResult<Address> {
        let address = self.checked(0, input).await?;
        self.addresses.create(address).await
    }

    /// Creates the address as the user's own, linking both in one write.
    pub async fn create_address_for_user(
        &self,
        user_id: i32,
        input: AddressInput,
    ) -> LocationResult<Address> {
        let address = self.checked(0, input).await?;
        self.addresses.create_linked(address, user_id).await
    }

    pub async fn update_address(&self, id: i32, input: AddressInput) -> LocationResult<Address> {
        let address = self.checked(id, input).await?;
        self.addresses.update(address).await
    }

    pub async fn delete_address_by_id(&self, id: i32) -> LocationResult<()> {
        if self.addresses.delete_by_id(id).await? {
            tracing::info!(address_id = id, "Deleted address");
            Ok(())
        } else {
            Err(LocationError::AddressNotFound(id))
        }
    }

    pub async fn find_by_id(&self, id: i32) -> LocationResult<Option<Address>> {
        self.addresses.find_by_id(id).await
    }

    pub async fn find_all(&self) -> LocationResult<Vec<Address>> {
        self.addresses.find_all().await
    }

    pub async fn find_by_street_name(&self, street_name: &str) -> LocationResult<Vec<Address>> {
        self.addresses.find_by_street_name(street_name).await
    }

    pub async fn find_by_locality_id(&self, locality_id: i32) -> LocationResult<Vec<Address>> {
        self.addresses.find_by_locality_id(locality_id).await
    }

    /// Street name and locality filters combine; no filter lists everything.
    pub async fn search(&self, search: &AddressSearch) -> LocationResult<Vec<Address>> {
        let street_name = search
            .street_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        match (street_name, search.locality_id) {
            (Some(street), locality_id) => {
                let found = self.find_by_street_name(street).await?;
                Ok(found
                    .into_iter()
                    .filter(|a| locality_id.is_none() || a.locality_id == locality_id)
                    .collect())
            }
            (None, Some(locality_id)) => self.find_by_locality_id(locality_id).await,
            (None, None) => self.find_all().await,
        }
    }

    /// Trims the form, enforces length limits and checks the locality exists.
    async fn checked(&self, id: i32, input: AddressInput) -> LocationResult<Address> {
        let street_name = input.street_name.trim();
        if street_name.is_empty() || street_name.chars().count() > MAX_STREET_NAME_LEN {
            return Err(LocationError::InvalidAddress("street name".into()));
        }

        let number = optional_field(input.number, MAX_NUMBER_LEN, "number")?;
        let box_number = optional_field(input.box_number, MAX_BOX_NUMBER_LEN, "box number")?;

        let locality_id = input.locality_id.ok_or(LocationError::InvalidLocality)?;
        if self.localities.find_by_id(locality_id).await?.is_none() {
            return Err(LocationError::InvalidLocality);
        }

        Ok(Address {
            id,
            street_name: street_name.to_string(),
            number,
            box_number,
            locality_id: Some(locality_id),
        })
    }
}

fn optional_field(
    value: Option<String>,
    max_len: usize,
    field: &str,
) -> LocationResult<Option<String>> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > max_len {
        return Err(LocationError::InvalidAddress(field.to_string()));
    }
    Ok(Some(value))
}

#[derive(Clone)]
pub struct LocalityService<L: LocalityRepository> {
    repository: Arc<L>,
}

impl<L: LocalityRepository> LocalityService<L> {
    pub fn new(repository: L) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn find_by_id(&self, id: i32) -> LocationResult<Option<Locality>> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_all(&self) -> LocationResult<Vec<Locality>> {
        self.repository.find_all().await
    }
}

#[derive(Clone)]
pub struct CountryService<C: CountryRepository> {
    repository: Arc<C>,
}

impl<C: CountryRepository> CountryService<C> {
    pub fn new(repository: C) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn find_by_id(&self, id: i32) -> LocationResult<Option<Country>> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_all(&self) -> LocationResult<Vec<Country>> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        InMemoryAddressRepository, InMemoryLocalityRepository, MockAddressRepository,
        MockLocalityRepository,
    };
    use domain_users::{InMemoryUserRepository, User, UserRepository};
    use mockall::predicate::eq;

    fn input(street: &str, locality_id: Option<i32>) -> AddressInput {
        AddressInput {
            street_name: street.to_string(),
            number: Some(" 12 ".to_string()),
            box_number: Some(String::new()),
            locality_id,
        }
    }

    fn service() -> AddressService<InMemoryAddressRepository, InMemoryLocalityRepository> {
        AddressService::new(
            InMemoryAddressRepository::new(),
            InMemoryLocalityRepository::seeded(),
        )
    }

    #[tokio::test]
    async fn test_create_address_trims_fields() {
        let created = service()
            .create_address(input("  Rue Haute ", Some(1)))
            .await
            .unwrap();

        assert_eq!(created.street_name, "Rue Haute");
        assert_eq!(created.number.as_deref(), Some("12"));
        assert_eq!(created.box_number, None);
        assert_eq!(created.locality_id, Some(1));
    }

    #[tokio::test]
    async fn test_unknown_locality_is_rejected_before_write() {
        let mut addresses = MockAddressRepository::new();
        addresses.expect_create().never();

        let mut localities = MockLocalityRepository::new();
        localities
            .expect_find_by_id()
            .with(eq(999))
            .times(1)
            .returning(|_| Ok(None));

        let service = AddressService::new(addresses, localities);
        let err = service
            .create_address(input("Rue Haute", Some(999)))
            .await
            .unwrap_err();

        assert_eq!(err, LocationError::InvalidLocality);
    }

    #[tokio::test]
    async fn test_missing_locality() {
        let err = service()
            .create_address(input("Rue Haute", None))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_LOCALITY");
    }

    #[tokio::test]
    async fn test_length_limits() {
        let service = service();

        let blank = service.create_address(input("   ", Some(1))).await;
        assert_eq!(blank.unwrap_err().code(), "INVALID_ADDRESS");

        let long_street = "x".repeat(MAX_STREET_NAME_LEN + 1);
        let err = service
            .create_address(input(&long_street, Some(1)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_ADDRESS");

        let mut long_box = input("Rue Haute", Some(1));
        long_box.box_number = Some("B".repeat(MAX_BOX_NUMBER_LEN + 1));
        assert!(service.create_address(long_box).await.is_err());

        let mut long_number = input("Rue Haute", Some(1));
        long_number.number = Some("1".repeat(MAX_NUMBER_LEN + 1));
        assert!(service.create_address(long_number).await.is_err());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let service = service();
        let created = service
            .create_address(input("Rue Haute", Some(1)))
            .await
            .unwrap();

        let updated = service
            .update_address(created.id, input("Rue Basse", Some(2)))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.locality_id, Some(2));

        service.delete_address_by_id(created.id).await.unwrap();
        assert_eq!(
            service.delete_address_by_id(created.id).await.unwrap_err(),
            LocationError::AddressNotFound(created.id)
        );
    }

    #[tokio::test]
    async fn test_create_address_for_user_links_or_stores_nothing() {
        let users = InMemoryUserRepository::new();
        let member = users
            .create(User {
                id: 0,
                email: "member@sportcenter.be".to_string(),
                password_hash: "hash".to_string(),
                first_name: "Mia".to_string(),
                last_name: "Member".to_string(),
                birthdate: None,
                gender: None,
                phone: None,
                blacklist: false,
                active: true,
                role_id: 1,
                address_id: None,
            })
            .await
            .unwrap();

        let service = AddressService::new(
            InMemoryAddressRepository::with_users(users.clone()),
            InMemoryLocalityRepository::seeded(),
        );

        let saved = service
            .create_address_for_user(member.id, input("Rue Haute", Some(1)))
            .await
            .unwrap();
        let linked = users.find_by_id(member.id).await.unwrap().unwrap();
        assert_eq!(linked.address_id, Some(saved.id));

        let err = service
            .create_address_for_user(404, input("Rue Basse", Some(1)))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "USER_NOT_FOUND");
        assert_eq!(service.find_all().await.unwrap(), [saved]);
    }

    #[tokio::test]
    async fn test_create_address_for_user_checks_input_first() {
        let mut addresses = MockAddressRepository::new();
        addresses.expect_create_linked().never();

        let service = AddressService::new(addresses, InMemoryLocalityRepository::seeded());
        let err = service
            .create_address_for_user(1, input("  ", Some(1)))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "INVALID_ADDRESS");
    }

    #[tokio::test]
    async fn test_search_combines_filters() {
        let service = service();
        service.create_address(input("Rue Haute", Some(1))).await.unwrap();
        service.create_address(input("Rue Haute", Some(2))).await.unwrap();
        service.create_address(input("Rue Basse", Some(2))).await.unwrap();

        let by_street = AddressSearch {
            street_name: Some("Rue Haute".to_string()),
            locality_id: None,
        };
        assert_eq!(service.search(&by_street).await.unwrap().len(), 2);

        let both = AddressSearch {
            street_name: Some("Rue Haute".to_string()),
            locality_id: Some(2),
        };
        assert_eq!(service.search(&both).await.unwrap().len(), 1);

        let by_locality = AddressSearch {
            street_name: Some("  ".to_string()),
            locality_id: Some(2),
        };
        assert_eq!(service.search(&by_locality).await.unwrap().len(), 2);

        assert_eq!(service.search(&AddressSearch::default()).await.unwrap().len(), 3);
    }
}
