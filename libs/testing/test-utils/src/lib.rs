//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("pet", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

const SPECIES: [&str; 5] = ["Dog", "Cat", "Rabbit", "Parrot", "Hamster"];

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same values, so failures are reproducible.
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
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_pet");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("pet", "main"), "test-pet-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A species picked from a fixed list by seed.
    pub fn species(&self) -> &'static str {
        SPECIES[(self.seed % SPECIES.len() as u64) as usize]
    }

    /// An age in `0..=50`.
    pub fn age(&self) -> i32 {
        (self.seed % 51) as i32
    }
}

/// Test assertion helpers
pub mod assertions {
    use chrono::{DateTime, Utc};

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `ts` lies within `tolerance_ms` of now.
    pub fn assert_recent(ts: DateTime<Utc>, tolerance_ms: i64, context: &str) {
        let drift = (Utc::now() - ts).num_milliseconds().abs();
        assert!(
            drift <= tolerance_ms,
            "{}: timestamp {} is {}ms away from now (tolerance {}ms)",
            context,
            ts,
            drift,
            tolerance_ms
        );
    }
}
