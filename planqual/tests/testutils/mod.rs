//! Test utilities for planqual integration tests
//!
//! Provides a shared support table, plan builders and logging setup.

pub mod plan_fixture;
