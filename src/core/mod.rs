//! # Core Application Logic
//!
//! This module contains Basket's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • List store           │
//!                    │  • Filter engine        │
//!                    │  • Navigation state     │
//!                    │  • update() (reducer)   │
//!                    │  • present() (view)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ RenderModel
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`list`]: `ShoppingList`, the append-only item store
//! - [`filter`]: case-insensitive search and the derived `FilteredView`
//! - [`navigation`]: active screen, drawer state, transitions
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`presenter`]: `present()`: what the active screen shows
//! - [`config`]: layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod filter;
pub mod list;
pub mod navigation;
pub mod presenter;
pub mod profile;
pub mod state;
