//! Integration tests for the backend gateways

pub mod gateways_test;
