//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `TestDatabase`: PostgreSQL container with the workspace migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let email = builder.email("member");
//!     let street = builder.name("street", "main");
//! }
//! ```
//!
//! The migrations seed reference data (roles, Belgium and a few localities,
//! one hall with fields), so tests can reference those ids directly.

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Seeded role ids
pub mod seed {
    pub const MEMBER_ROLE_ID: i32 = 1;
    pub const STAFF_ROLE_ID: i32 = 2;
    pub const ADMIN_ROLE_ID: i32 = 3;
    /// Belgium
    pub const COUNTRY_ID: i32 = 1;
    /// 1000 Bruxelles
    pub const LOCALITY_ID: i32 = 1;
}

/// Builder for test data with deterministic randomization
///
/// Values derive from a seed so reruns produce the same data, while different
/// tests sharing one database do not collide on unique columns.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_register_member");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique, well-formed email address
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let email = TestDataBuilder::new(7).email("admin");
    /// assert_eq!(email, "admin.7@test.sportcenter.be");
    /// ```
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@test.sportcenter.be", local, self.seed)
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The type of record (e.g., "street", "role")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "backup")
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a result failed with the given error code
    pub fn assert_err_code<T: std::fmt::Debug, E>(
        result: Result<T, E>,
        code: impl Fn(&E) -> &'static str,
        expected: &str,
    ) {
        match result {
            Ok(value) => panic!("expected error {}, got Ok({:?})", expected, value),
            Err(e) => assert_eq!(code(&e), expected),
        }
    }
}
