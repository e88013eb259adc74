//! Integration tests for the validator
//!
//! These tests use wiremock to serve robots.txt and pages and exercise the
//! full validation flow end-to-end.

mod validate_tests;
