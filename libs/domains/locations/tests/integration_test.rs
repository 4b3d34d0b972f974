//! Integration tests for the locations domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Seeded reference data maps into countries and localities
//! - Address rows round-trip and honour the locality foreign key
//! - Deleting an address unlinks the users pointing at it

use domain_locations::*;
use domain_users::{Gender, PgUserRepository, User, UserRepository};
use test_utils::{TestDataBuilder, TestDatabase, assertions::*, seed};

fn address(street_name: &str, locality_id: i32) -> Address {
    Address {
        id: 0,
        street_name: street_name.to_string(),
        number: Some("7".to_string()),
        box_number: None,
        locality_id: Some(locality_id),
    }
}

#[tokio::test]
async fn test_seeded_countries_and_localities() {
    let db = TestDatabase::new().await;
    let countries = PgCountryRepository::new(db.connection());
    let localities = PgLocalityRepository::new(db.connection());

    let belgium = assert_some(
        countries.find_by_id(seed::COUNTRY_ID).await.unwrap(),
        "seeded country",
    );
    assert_eq!(belgium.iso_code, "BEL");

    let all = localities.find_all().await.unwrap();
    assert_eq!(all.len(), 7);
    let codes: Vec<_> = all.iter().filter_map(|l| l.postal_code.as_deref()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);

    let brussels = assert_some(
        localities.find_by_id(seed::LOCALITY_ID).await.unwrap(),
        "seeded locality",
    );
    assert_eq!(brussels.town.as_deref(), Some("Bruxelles"));
    assert_eq!(brussels.country_id, seed::COUNTRY_ID);
}

#[tokio::test]
async fn test_address_crud_and_finders() {
    let db = TestDatabase::new().await;
    let repo = PgAddressRepository::new(db.connection());

    let created = repo.create(address("Rue Haute", 1)).await.unwrap();
    repo.create(address("Rue Haute", 2)).await.unwrap();
    repo.create(address("Avenue Louise", 1)).await.unwrap();
    assert!(created.id > 0);

    assert_eq!(repo.find_by_street_name("Rue Haute").await.unwrap().len(), 2);
    assert!(repo.find_by_street_name("rue haute").await.unwrap().is_empty());
    assert_eq!(repo.find_by_locality_id(1).await.unwrap().len(), 2);

    let mut moved = created.clone();
    moved.locality_id = Some(4);
    moved.box_number = Some("B2".to_string());
    let updated = repo.update(moved.clone()).await.unwrap();
    assert_eq!(updated, moved);

    assert!(repo.delete_by_id(created.id).await.unwrap());
    assert!(!repo.delete_by_id(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_address_with_unknown_locality() {
    let db = TestDatabase::new().await;
    let repo = PgAddressRepository::new(db.connection());

    let result = repo.create(address("Rue Haute", 999)).await;
    assert_err_code(result, LocationError::code, "INVALID_LOCALITY");
}

#[tokio::test]
async fn test_update_missing_address() {
    let db = TestDatabase::new().await;
    let repo = PgAddressRepository::new(db.connection());

    let mut missing = address("Rue Haute", 1);
    missing.id = 4242;
    assert_err_code(repo.update(missing).await, LocationError::code, "ADDRESS_NOT_FOUND");
}

#[tokio::test]
async fn test_service_links_address_to_user() {
    let db = TestDatabase::new().await;
    let users = PgUserRepository::new(db.connection());
    let service = AddressService::new(
        PgAddressRepository::new(db.connection()),
        PgLocalityRepository::new(db.connection()),
    );
    let builder = TestDataBuilder::from_test_name("links_address");

    let saved = service
        .create_address(AddressInput {
            street_name: " Grand-Place ".to_string(),
            number: Some("1".to_string()),
            box_number: None,
            locality_id: Some(seed::LOCALITY_ID),
        })
        .await
        .unwrap();
    assert_eq!(saved.street_name, "Grand-Place");

    let user = users
        .create(User {
            id: 0,
            email: builder.email("resident"),
            password_hash: "$argon2id$placeholder".to_string(),
            first_name: "Rita".to_string(),
            last_name: "Resident".to_string(),
            birthdate: None,
            gender: Some(Gender::Other),
            phone: None,
            blacklist: false,
            active: true,
            role_id: seed::MEMBER_ROLE_ID,
            address_id: Some(saved.id),
        })
        .await
        .unwrap();

    service.delete_address_by_id(saved.id).await.unwrap();

    let unlinked = assert_some(users.find_by_id(user.id).await.unwrap(), "resident");
    assert!(unlinked.address_id.is_none());
}

#[tokio::test]
async fn test_create_address_for_user_in_one_transaction() {
    let db = TestDatabase::new().await;
    let users = PgUserRepository::new(db.connection());
    let addresses = PgAddressRepository::new(db.connection());
    let service = AddressService::new(
        PgAddressRepository::new(db.connection()),
        PgLocalityRepository::new(db.connection()),
    );
    let builder = TestDataBuilder::from_test_name("linked_address");

    let user = users
        .create(User {
            id: 0,
            email: builder.email("mover"),
            password_hash: "$argon2id$placeholder".to_string(),
            first_name: "Max".to_string(),
            last_name: "Mover".to_string(),
            birthdate: None,
            gender: None,
            phone: None,
            blacklist: false,
            active: true,
            role_id: seed::MEMBER_ROLE_ID,
            address_id: None,
        })
        .await
        .unwrap();

    let input = |street: &str| AddressInput {
        street_name: street.to_string(),
        number: Some("3".to_string()),
        box_number: None,
        locality_id: Some(seed::LOCALITY_ID),
    };

    let saved = service
        .create_address_for_user(user.id, input("Rue Neuve"))
        .await
        .unwrap();
    let linked = assert_some(users.find_by_id(user.id).await.unwrap(), "mover");
    assert_eq!(linked.address_id, Some(saved.id));

    // Unknown user: the address insert is rolled back with the link
    let result = service
        .create_address_for_user(i32::MAX, input("Rue Perdue"))
        .await;
    assert_err_code(result, LocationError::code, "USER_NOT_FOUND");
    assert!(addresses.find_by_street_name("Rue Perdue").await.unwrap().is_empty());
}
