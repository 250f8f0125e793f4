//! Relay scenario tests for backup-relay
//!
//! These tests drive whole invocations against mocked ECS and S3.

mod status;
