//! Networking modules for the external account service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `account` owns the create-account HTTP call behind the `AccountGateway`
//! trait, and `types` defines the wire schema.

pub mod account;
pub mod types;
