//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use employee_common::WalkthroughConfig;
use employee_core::NewEmployee;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data, distinct across concurrent test processes
pub fn unique_suffix() -> String {
    format!("{}-{}", std::process::id(), COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Name that no other test uses
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", unique_suffix())
}

/// The three employees of the classic sample table, with unique names
pub fn sample_employees() -> Vec<NewEmployee> {
    let suffix = unique_suffix();
    [("Jared", "Australia"), ("Nikita", "India"), ("Tom", "Germany")]
        .into_iter()
        .map(|(name, location)| NewEmployee::new(format!("{name}-{suffix}"), location))
        .collect()
}

/// Walkthrough sample values with a unique employee name
pub fn unique_walkthrough() -> WalkthroughConfig {
    WalkthroughConfig {
        name: unique_name("Jake"),
        ..WalkthroughConfig::default()
    }
}
