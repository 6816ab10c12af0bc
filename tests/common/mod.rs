//! Common test utilities, fixtures, and mocks shared by the integration tests.

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;
use yt_metadata_resolver::{MetadataResolver, ResolverConfig};

/// API key every mocked endpoint expects.
pub const TEST_API_KEY: &str = "test-api-key";

/// Common test setup and utilities
pub mod test_utils {
    use super::*;

    static INIT: Once = Once::new();

    /// Initialize tracing once for the whole test binary.
    pub fn init() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("yt_metadata_resolver=debug,warn")),
                )
                .with_test_writer()
                .init();
        });
    }
}

/// Builds a resolver talking to the given mock server.
pub fn resolver_for(server: &MockServer) -> MetadataResolver {
    test_utils::init();

    let config = ResolverConfig::new(TEST_API_KEY).with_base_url(server.uri());
    MetadataResolver::from_config(config).expect("Failed to build resolver")
}
