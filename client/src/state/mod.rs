//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the signup form carries behavior worth modelling; every other page is
//! stateless rendering of static content.

pub mod signup;
