//! # rickdex-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CharacterSource` — one read of the remote character listing
//!   - `ThemeStore` — persisted key-value get/set
//!   - `ThemeSurface` — apply a theme to whatever is on screen
//! - Define the **view state** and its event-driven update function
//! - Define **use-case services**:
//!   - `CharacterLoader` — the single startup fetch
//!   - `ThemeService` — read, toggle and persist the theme
//!
//! ## Dependency rule
//! Depends on `rickdex-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod view_model;
