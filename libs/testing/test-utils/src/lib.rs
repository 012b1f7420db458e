//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated SQLite database in a temp directory, removed on drop
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: custom assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_sqlite_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let subject = builder.subject("groceries");
//! }
//! ```

mod sqlite;

pub use sqlite::TestDatabase;

/// Builder for test data with deterministic randomization
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_todo");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Todo subject unique to this builder's seed.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.subject("groceries"), "test-7-groceries");
    /// ```
    pub fn subject(&self, suffix: &str) -> String {
        format!("test-{}-{}", self.seed, suffix)
    }

    /// `count` distinct subjects: `<prefix>-0`, `<prefix>-1`, ...
    pub fn subjects(&self, prefix: &str, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| self.subject(&format!("{}-{}", prefix, i)))
            .collect()
    }

    pub fn description(&self, suffix: &str) -> String {
        format!("description {} for seed {}", suffix, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that ids are strictly ascending, as keyset pages must be
    pub fn assert_ascending_ids(ids: &[i64], context: &str) {
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "{}: ids not strictly ascending: {:?}",
            context,
            ids
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
