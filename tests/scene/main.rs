//! Integration tests for the fpn_scene crate.
//!
//! Tests for the composer boundary:
//! - Staging decoded positions into scene requests
//! - Driving a composer, including failure paths
//! - Scene configuration and request handoff

mod composer_tests;
mod config_tests;
mod handoff_tests;
