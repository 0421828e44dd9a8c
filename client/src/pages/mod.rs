//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's layout and delegates repeated pieces to
//! `components`.

pub mod about;
pub mod cli;
pub mod home;
pub mod login;
pub mod not_found;
pub mod roadmap;
pub mod signup;
pub mod sponsor;
