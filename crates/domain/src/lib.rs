//! # rickdex-domain
//!
//! Pure domain model for the rickdex character browser.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **character records** as delivered by the remote character API
//! - Define the **sort** and **filter directives** a user can select
//! - Define the **derived-view rule** (`view::recompute`) that turns the source
//!   list and both directives into the displayed list
//! - Define the **card** presentation model and the **theme** tag
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod card;
pub mod character;
pub mod directive;
pub mod theme;
pub mod view;
