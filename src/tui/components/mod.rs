//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow three patterns:
//!
//! ### Chrome (Props-Based, `Component`)
//!
//! Always-visible frame pieces that receive all data as props:
//! - `TitleBar`: Top app bar with menu button and status
//! - `TabBar`: Bottom navigation
//! - `Drawer`: Modal side panel (wraps persistent `DrawerMenuState`)
//!
//! ### Screens (`Widget`)
//!
//! Screen bodies render into a plain `Buffer` so they can be drawn
//! off-screen and slid into place during a transition:
//! - `HomeScreen`: add/search fields and the filtered list
//! - `ProfileScreen`: fixed detail card
//! - `SettingsScreen`: static text
//!
//! ### Stateful Inputs (`EventHandler`)
//!
//! - `TextField`: single-line editor, emits `FieldEvent`
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (usually borrowed from the
//! presenter's `RenderModel`), not by reaching into `App`. This keeps
//! dependencies explicit and components testable with `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top app bar)
//! ├── tab_bar.rs       (Bottom navigation)
//! ├── drawer.rs        (Side drawer overlay)
//! ├── text_field.rs    (Single-line input)
//! ├── home.rs          (Home screen)
//! ├── profile.rs       (Profile screen)
//! └── settings.rs      (Settings screen)
//! ```

mod drawer;
mod home;
mod profile;
mod settings;
mod tab_bar;
mod text_field;
mod title_bar;

pub use drawer::{Drawer, DrawerEvent, DrawerHit, DrawerMenuState};
pub use home::{Focus, HomeLayout, HomeScreen};
pub use profile::ProfileScreen;
pub use settings::SettingsScreen;
pub use tab_bar::{TAB_BAR_HEIGHT, TabBar};
pub use text_field::{FieldEvent, TextField};
pub use title_bar::TitleBar;
