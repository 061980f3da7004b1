//! Common test fixtures for integration tests
//!
//! Provides a table of battery readings with their expected evaluations,
//! shared by the integration suites.

#![allow(dead_code)]

pub mod scenarios;
