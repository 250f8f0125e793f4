//! Unit tests for backup-relay
//!
//! These tests exercise the building blocks without touching AWS.

mod archive;
mod config;
mod status;
mod strategies;
