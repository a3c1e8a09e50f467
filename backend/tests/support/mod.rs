//! Shared helpers for integration tests that need embedded PostgreSQL.

pub mod pg_embed;
pub mod store;

/// Whether the opt-in database suites were requested with `RUN_PG_EMBEDDED=1`.
pub fn embedded_postgres_requested() -> bool {
    std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1")
}

/// Report a cluster bootstrap failure.
///
/// When `SKIP_TEST_CLUSTER` is truthy ("1", "true", "yes"), prints a skip
/// marker and returns `None`; otherwise panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    let skip = std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    if skip {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
