//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and marketing sections from the data they
//! are handed. Only `signup_form` owns state.

pub mod backend_features;
pub mod dropdown;
pub mod footer;
pub mod header;
pub mod nav;
pub mod pricing;
pub mod section_title;
pub mod signup_form;
pub mod terminal;
