use chrono::NaiveDate;
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{AdminPatch, Gender, NewUser, ProfileUpdate, User, UserPatch, UsersPage};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;
use crate::role_service::RolePolicy;
use crate::validation::{
    is_iso_date, is_valid_email, is_valid_name, is_valid_password, is_valid_phone,
    normalize_name,
};

/// Users shown per page in the admin list
pub const USERS_PER_PAGE: usize = 10;

/// Service layer for user registration, profile updates and authentication
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    policy: RolePolicy,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, policy: RolePolicy) -> Self {
        Self {
            repository: Arc::new(repository),
            policy,
        }
    }

    pub fn policy(&self) -> RolePolicy {
        self.policy
    }

    /// Registers a new account.
    ///
    /// Every check runs before the gateway is touched, so a rejected
    /// registration writes nothing.
    pub async fn create_user(&self, input: NewUser, confirm_password: &str) -> UserResult<User> {
        if !is_valid_email(&input.email) {
            return Err(UserError::InvalidEmailFormat);
        }

        if !is_valid_name(&input.first_name) {
            return Err(UserError::InvalidFirstName);
        }
        if !is_valid_name(&input.last_name) {
            return Err(UserError::InvalidLastName);
        }

        if input.password != confirm_password {
            return Err(UserError::PasswordsDoNotMatch);
        }
        if !is_valid_password(&input.password) {
            return Err(UserError::InvalidPasswordFormat);
        }

        if self.repository.exists_by_email(&input.email).await? {
            return Err(UserError::EmailAlreadyExists);
        }

        let user = User {
            id: 0,
            email: input.email,
            password_hash: hash_password(&input.password)?,
            first_name: input.first_name,
            last_name: input.last_name,
            birthdate: None,
            gender: None,
            phone: None,
            blacklist: false,
            active: true,
            role_id: input.role_id.unwrap_or(self.policy.member_role_id),
            address_id: None,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = created.id, role_id = created.role_id, "Registered user");
        Ok(created)
    }

    /// Checks every supplied field of `update` against `user` and returns the
    /// accepted changes. Nothing is applied or persisted.
    ///
    /// Absent or empty fields are skipped. Names are trimmed and collapsed
    /// before their check; every other field is checked exactly as received.
    /// Checks run in field order and stop at the first failure; the password
    /// is hashed only once all of them pass.
    pub async fn validate_update(
        &self,
        user: &User,
        update: &ProfileUpdate,
        is_admin: bool,
    ) -> UserResult<UserPatch> {
        let mut patch = UserPatch::default();

        if let Some(first_name) = supplied(&update.first_name) {
            let first_name = normalize_name(first_name);
            if !is_valid_name(&first_name) {
                return Err(UserError::InvalidFirstName);
            }
            patch.first_name = Some(first_name);
        }

        if let Some(last_name) = supplied(&update.last_name) {
            let last_name = normalize_name(last_name);
            if !is_valid_name(&last_name) {
                return Err(UserError::InvalidLastName);
            }
            patch.last_name = Some(last_name);
        }

        if let Some(email) = supplied(&update.email) {
            // An empty confirmation lets the form resubmit the current address
            let confirm = supplied(&update.confirm_email).unwrap_or(email);
            if email != confirm {
                return Err(UserError::EmailsDoNotMatch);
            }
            if !is_valid_email(email) {
                return Err(UserError::InvalidEmailFormat);
            }
            if email != user.email && self.repository.exists_by_email(email).await? {
                return Err(UserError::EmailAlreadyExists);
            }
            patch.email = Some(email.to_string());
        }

        let mut new_password = None;
        if let Some(password) = supplied(&update.password) {
            if update.confirm_password.as_deref() != Some(password) {
                return Err(UserError::PasswordsDoNotMatch);
            }
            if !is_valid_password(password) {
                return Err(UserError::InvalidPasswordFormat);
            }
            new_password = Some(password);
        }

        if let Some(phone) = supplied(&update.phone) {
            if !is_valid_phone(phone) {
                return Err(UserError::InvalidPhoneNumber);
            }
            patch.phone = Some(phone.to_string());
        }

        if let Some(gender) = supplied(&update.gender) {
            let gender = gender
                .parse::<Gender>()
                .map_err(|_| UserError::InvalidGender)?;
            patch.gender = Some(gender);
        }

        if let Some(birthdate) = supplied(&update.birthdate) {
            let birthdate = parse_birthdate(birthdate)?;
            patch.birthdate = Some(birthdate);
        }

        if is_admin {
            let role_id = supplied(&update.role_id)
                .map(str::parse::<i32>)
                .transpose()
                .map_err(|_| UserError::InvalidRoleId)?;

            patch.admin = Some(AdminPatch {
                blacklist: update.blacklist,
                active: update.active,
                role_id,
            });
        }

        if let Some(password) = new_password {
            patch.password_hash = Some(hash_password(password)?);
        }

        Ok(patch)
    }

    /// Validates `update` and returns a copy of `user` with it applied.
    /// The caller persists the result with [`Self::update_user`].
    pub async fn prepare_update(
        &self,
        user: &User,
        update: &ProfileUpdate,
        is_admin: bool,
    ) -> UserResult<User> {
        let patch = self.validate_update(user, update, is_admin).await?;

        let mut prepared = user.clone();
        patch.apply(&mut prepared);
        Ok(prepared)
    }

    pub async fn update_user(&self, user: User) -> UserResult<User> {
        self.repository.update(user).await
    }

    /// Returns `Ok(None)` for an unknown email or a wrong password alike.
    ///
    /// A disabled account is reported as `UserNotActive` before the password
    /// is checked.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<Option<User>> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            tracing::debug!("Login for unknown email");
            return Ok(None);
        };

        if !user.active {
            tracing::warn!(user_id = user.id, "Login attempt on disabled account");
            return Err(UserError::UserNotActive);
        }

        if !verify_password(password, &user.password_hash) {
            tracing::warn!(user_id = user.id, "Login with wrong password");
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        self.repository.find_by_email(email).await
    }

    pub async fn find_all(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        self.repository.exists_by_email(email).await
    }

    pub async fn delete_by_id(&self, id: i32) -> UserResult<bool> {
        self.repository.delete_by_id(id).await
    }

    pub async fn delete_by_email(&self, email: &str) -> UserResult<bool> {
        self.repository.delete_by_email(email).await
    }

    /// Admin user list: filtered by `search_query`, then cut into pages.
    pub async fn list_users_page(
        &self,
        search_query: Option<String>,
        page: Option<usize>,
    ) -> UserResult<UsersPage> {
        let users = filter_users(self.repository.find_all().await?, search_query.as_deref());
        let total_users = users.len();
        let page = page.unwrap_or(1).max(1);
        let (users, total_pages) = paginate(users, page, USERS_PER_PAGE);

        Ok(UsersPage {
            users: users.into_iter().map(Into::into).collect(),
            page,
            total_pages,
            total_users,
            search_query,
        })
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Strict ISO `YYYY-MM-DD`, zero padded.
fn parse_birthdate(raw: &str) -> UserResult<NaiveDate> {
    if !is_iso_date(raw) {
        return Err(UserError::InvalidBirthdate);
    }

    raw.parse::<NaiveDate>()
        .map_err(|_| UserError::InvalidBirthdate)
}

/// Keeps users whose first name, last name or email contains `query`,
/// ignoring case. A missing or blank query keeps everyone, in order; any
/// other query is matched as given, surrounding spaces included.
pub fn filter_users(users: Vec<User>, query: Option<&str>) -> Vec<User> {
    let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
        return users;
    };
    let query = query.to_lowercase();

    users
        .into_iter()
        .filter(|u| {
            u.first_name.to_lowercase().contains(&query)
                || u.last_name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .collect()
}

/// Returns the 1-based `page` of `items` and the page count.
///
/// Page 0 is read as page 1; a page past the end is empty.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> (Vec<T>, usize) {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let skip = (page.max(1) - 1).saturating_mul(per_page);

    let page_items = items.into_iter().skip(skip).take(per_page).collect();
    (page_items, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};

    fn policy() -> RolePolicy {
        RolePolicy::new(1, 3)
    }

    fn john() -> NewUser {
        NewUser {
            email: "john@example.com".to_string(),
            password: "Abcdef12".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            role_id: None,
        }
    }

    fn stored(id: i32, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            password_hash: "hash".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            birthdate: None,
            gender: None,
            phone: None,
            blacklist: false,
            active: true,
            role_id: 1,
            address_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_user_password_mismatch_skips_persistence() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_exists_by_email().never();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo, policy());
        let err = service.create_user(john(), "Abcdef13").await.unwrap_err();

        assert_eq!(err, UserError::PasswordsDoNotMatch);
    }

    #[tokio::test]
    async fn test_create_user_existing_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_exists_by_email()
            .withf(|email| email == "john@example.com")
            .times(1)
            .returning(|_| Ok(true));
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo, policy());
        let err = service.create_user(john(), "Abcdef12").await.unwrap_err();

        assert_eq!(err.code(), "EMAIL_ALREADY_EXISTS");
    }

    #[tokio::test]
    async fn test_create_user_checks_fields_in_order() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());

        let mut input = john();
        input.email = "not-an-email".to_string();
        input.first_name = "J0hn".to_string();
        assert_eq!(
            service.create_user(input, "other").await.unwrap_err(),
            UserError::InvalidEmailFormat
        );

        let mut input = john();
        input.first_name = "J0hn".to_string();
        assert_eq!(
            service.create_user(input, "other").await.unwrap_err(),
            UserError::InvalidFirstName
        );

        let mut input = john();
        input.last_name = "D@e".to_string();
        assert_eq!(
            service.create_user(input, "Abcdef12").await.unwrap_err(),
            UserError::InvalidLastName
        );

        let mut input = john();
        input.password = "abcdefgh".to_string();
        assert_eq!(
            service.create_user(input, "abcdefgh").await.unwrap_err(),
            UserError::InvalidPasswordFormat
        );
    }

    #[tokio::test]
    async fn test_create_user_keeps_names_as_given() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo, policy());

        let mut input = john();
        input.first_name = " John  ".to_string();
        assert_eq!(
            service.create_user(input, "Abcdef12").await.unwrap_err(),
            UserError::InvalidFirstName
        );

        let mut input = john();
        input.last_name = "Van  Damme".to_string();
        assert_eq!(
            service.create_user(input, "Abcdef12").await.unwrap_err(),
            UserError::InvalidLastName
        );
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());

        let created = service.create_user(john(), "Abcdef12").await.unwrap();
        assert_eq!(created.role_id, 1);
        assert_ne!(created.password_hash, "Abcdef12");
        assert!(verify_password("Abcdef12", &created.password_hash));

        let authenticated = service
            .authenticate("john@example.com", "Abcdef12")
            .await
            .unwrap();
        assert_eq!(authenticated, Some(created));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_and_unknown_email() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());
        service.create_user(john(), "Abcdef12").await.unwrap();

        assert_eq!(
            service
                .authenticate("john@example.com", "Wrong123")
                .await
                .unwrap(),
            None
        );
        assert_eq!(
            service
                .authenticate("jane@example.com", "Abcdef12")
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_authenticate_inactive_user() {
        let mut inactive = stored(2, "Ann", "Lee", "ann@example.com");
        inactive.active = false;

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(inactive.clone())));

        let service = UserService::new(mock_repo, policy());
        let err = service
            .authenticate("ann@example.com", "whatever")
            .await
            .unwrap_err();

        assert_eq!(err, UserError::UserNotActive);
    }

    #[tokio::test]
    async fn test_phone_only_update_changes_phone() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_exists_by_email().never();

        let service = UserService::new(mock_repo, policy());
        let user = stored(1, "John", "Doe", "john@example.com");
        let update = ProfileUpdate {
            phone: Some("0499-123-456".to_string()),
            first_name: Some(String::new()),
            email: Some(String::new()),
            password: Some(String::new()),
            ..Default::default()
        };

        let prepared = service.prepare_update(&user, &update, false).await.unwrap();

        assert_eq!(prepared.phone.as_deref(), Some("0499-123-456"));
        assert_eq!(prepared.email, user.email);
        assert_eq!(prepared.password_hash, user.password_hash);
        assert_eq!(prepared.first_name, user.first_name);
        assert_eq!(prepared.last_name, user.last_name);
    }

    #[tokio::test]
    async fn test_update_email_confirmation() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_exists_by_email()
            .withf(|email| email == "new@example.com")
            .returning(|_| Ok(false));

        let service = UserService::new(mock_repo, policy());
        let user = stored(1, "John", "Doe", "john@example.com");

        let mismatched = ProfileUpdate {
            email: Some("new@example.com".to_string()),
            confirm_email: Some("other@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            service
                .validate_update(&user, &mismatched, false)
                .await
                .unwrap_err(),
            UserError::EmailsDoNotMatch
        );

        let unconfirmed = ProfileUpdate {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        };
        let patch = service
            .validate_update(&user, &unconfirmed, false)
            .await
            .unwrap();
        assert_eq!(patch.email.as_deref(), Some("new@example.com"));
    }

    #[tokio::test]
    async fn test_update_email_taken_by_someone_else() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_exists_by_email()
            .withf(|email| email == "jane@example.com")
            .returning(|_| Ok(true));

        let service = UserService::new(mock_repo, policy());
        let user = stored(1, "John", "Doe", "john@example.com");
        let update = ProfileUpdate {
            email: Some("jane@example.com".to_string()),
            confirm_email: Some("jane@example.com".to_string()),
            ..Default::default()
        };

        assert_eq!(
            service.validate_update(&user, &update, false).await.unwrap_err(),
            UserError::EmailAlreadyExists
        );
    }

    #[tokio::test]
    async fn test_failed_update_leaves_user_untouched() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());
        let user = stored(1, "John", "Doe", "john@example.com");
        let update = ProfileUpdate {
            first_name: Some("Johnny".to_string()),
            gender: Some("robot".to_string()),
            ..Default::default()
        };

        let err = service.prepare_update(&user, &update, false).await.unwrap_err();

        assert_eq!(err, UserError::InvalidGender);
        assert_eq!(user.first_name, "John");
    }

    #[tokio::test]
    async fn test_update_normalizes_names_and_parses_fields() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());
        let user = stored(1, "John", "Doe", "john@example.com");
        let update = ProfileUpdate {
            first_name: Some("  Jean   Luc ".to_string()),
            gender: Some("Male".to_string()),
            birthdate: Some("1990-04-21".to_string()),
            ..Default::default()
        };

        let patch = service.validate_update(&user, &update, false).await.unwrap();

        assert_eq!(patch.first_name.as_deref(), Some("Jean Luc"));
        assert_eq!(patch.gender, Some(Gender::Male));
        assert_eq!(patch.birthdate, NaiveDate::from_ymd_opt(1990, 4, 21));
    }

    #[tokio::test]
    async fn test_update_rejects_bad_values() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());
        let user = stored(1, "John", "Doe", "john@example.com");

        let cases = [
            (
                ProfileUpdate {
                    password: Some("Abcdef12".to_string()),
                    confirm_password: Some("Abcdef13".to_string()),
                    ..Default::default()
                },
                UserError::PasswordsDoNotMatch,
            ),
            (
                ProfileUpdate {
                    password: Some("short".to_string()),
                    confirm_password: Some("short".to_string()),
                    ..Default::default()
                },
                UserError::InvalidPasswordFormat,
            ),
            (
                ProfileUpdate {
                    phone: Some("12ab".to_string()),
                    ..Default::default()
                },
                UserError::InvalidPhoneNumber,
            ),
            (
                ProfileUpdate {
                    birthdate: Some("21/04/1990".to_string()),
                    ..Default::default()
                },
                UserError::InvalidBirthdate,
            ),
        ];

        for (update, expected) in cases {
            assert_eq!(
                service.validate_update(&user, &update, false).await.unwrap_err(),
                expected
            );
        }
    }

    #[tokio::test]
    async fn test_update_whitespace_is_not_absence() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_exists_by_email().never();

        let service = UserService::new(mock_repo, policy());
        let user = stored(1, "John", "Doe", "john@example.com");

        let cases = [
            (
                ProfileUpdate {
                    first_name: Some("   ".to_string()),
                    ..Default::default()
                },
                UserError::InvalidFirstName,
            ),
            (
                ProfileUpdate {
                    last_name: Some("\t".to_string()),
                    ..Default::default()
                },
                UserError::InvalidLastName,
            ),
            (
                ProfileUpdate {
                    password: Some("        ".to_string()),
                    confirm_password: Some("x".to_string()),
                    ..Default::default()
                },
                UserError::PasswordsDoNotMatch,
            ),
            (
                ProfileUpdate {
                    email: Some(" new@example.com".to_string()),
                    ..Default::default()
                },
                UserError::InvalidEmailFormat,
            ),
            (
                ProfileUpdate {
                    phone: Some(" 0499-123-456".to_string()),
                    ..Default::default()
                },
                UserError::InvalidPhoneNumber,
            ),
            (
                ProfileUpdate {
                    gender: Some("Male ".to_string()),
                    ..Default::default()
                },
                UserError::InvalidGender,
            ),
        ];

        for (update, expected) in cases {
            assert_eq!(
                service.validate_update(&user, &update, false).await.unwrap_err(),
                expected
            );
        }
    }

    #[tokio::test]
    async fn test_birthdate_must_be_zero_padded() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());
        let user = stored(1, "John", "Doe", "john@example.com");

        for raw in ["1990-4-1", " 1990-04-01", "1990-02-30"] {
            let update = ProfileUpdate {
                birthdate: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(
                service.validate_update(&user, &update, false).await.unwrap_err(),
                UserError::InvalidBirthdate,
                "{raw}"
            );
        }
    }

    #[tokio::test]
    async fn test_admin_fields_only_for_admins() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());
        let user = stored(1, "John", "Doe", "john@example.com");
        let update = ProfileUpdate {
            blacklist: true,
            role_id: Some("3".to_string()),
            ..Default::default()
        };

        let member_patch = service.validate_update(&user, &update, false).await.unwrap();
        assert!(member_patch.admin.is_none());

        let admin_patch = service.validate_update(&user, &update, true).await.unwrap();
        assert_eq!(
            admin_patch.admin,
            Some(AdminPatch {
                blacklist: true,
                active: false,
                role_id: Some(3),
            })
        );
    }

    #[tokio::test]
    async fn test_admin_role_id_must_be_integer() {
        let service = UserService::new(InMemoryUserRepository::new(), policy());
        let user = stored(1, "John", "Doe", "john@example.com");
        let update = ProfileUpdate {
            role_id: Some("admin".to_string()),
            ..Default::default()
        };

        assert_eq!(
            service.validate_update(&user, &update, true).await.unwrap_err(),
            UserError::InvalidRoleId
        );

        let padded = ProfileUpdate {
            role_id: Some(" 3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            service.validate_update(&user, &padded, true).await.unwrap_err(),
            UserError::InvalidRoleId
        );
    }

    #[test]
    fn test_filter_users_empty_query_keeps_input() {
        let users = vec![
            stored(1, "John", "Doe", "john@example.com"),
            stored(2, "Ann", "Lee", "ann@example.com"),
        ];

        assert_eq!(filter_users(users.clone(), Some("")), users);
        assert_eq!(filter_users(users.clone(), Some("   ")), users);
        assert_eq!(filter_users(users.clone(), None), users);
    }

    #[test]
    fn test_filter_users_matches_any_field_ignoring_case() {
        let users = vec![
            stored(1, "John", "Doe", "john@example.com"),
            stored(2, "Ann", "Lee", "ann@sport.be"),
            stored(3, "Marc", "Johnson", "marc@example.com"),
        ];

        let ids = |found: Vec<User>| found.into_iter().map(|u| u.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_users(users.clone(), Some("JOHN"))), [1, 3]);
        assert_eq!(ids(filter_users(users.clone(), Some("sport.be"))), [2]);
        assert!(filter_users(users, Some("zzz")).is_empty());
    }

    #[test]
    fn test_filter_users_keeps_surrounding_spaces() {
        let users = vec![
            stored(1, "John", "Doe", "john@example.com"),
            stored(2, "Mary", "Johnson", "mary@example.com"),
        ];

        let found = filter_users(users.clone(), Some(" john"));
        assert!(found.is_empty());

        let found = filter_users(users, Some("mary "));
        assert!(found.is_empty());
    }

    #[test]
    fn test_paginate() {
        let items: Vec<i32> = (1..=23).collect();

        let (first, total) = paginate(items.clone(), 1, 10);
        assert_eq!(first, (1..=10).collect::<Vec<_>>());
        assert_eq!(total, 3);

        let (last, _) = paginate(items.clone(), 3, 10);
        assert_eq!(last, [21, 22, 23]);

        let (zero, _) = paginate(items.clone(), 0, 10);
        assert_eq!(zero, first);

        let (beyond, total) = paginate(items, 4, 10);
        assert!(beyond.is_empty());
        assert_eq!(total, 3);

        assert_eq!(paginate(Vec::<i32>::new(), 1, 10), (vec![], 0));
    }

    #[tokio::test]
    async fn test_list_users_page() {
        let repo = InMemoryUserRepository::new();
        for i in 0..12 {
            repo.create(stored(0, "Ann", "Lee", &format!("ann{}@example.com", i)))
                .await
                .unwrap();
        }
        repo.create(stored(0, "John", "Doe", "john@example.com"))
            .await
            .unwrap();
        let service = UserService::new(repo, policy());

        let page = service
            .list_users_page(Some("ann".to_string()), Some(2))
            .await
            .unwrap();

        assert_eq!(page.total_users, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.users.len(), 2);
        assert_eq!(page.search_query.as_deref(), Some("ann"));
    }
}
