//! Folio Theme System
//!
//! Light/dark theming for the portfolio site.
//!
//! # Overview
//!
//! - **Color schemes**: [`ColorScheme::Light`] and [`ColorScheme::Dark`], flipped by a toggle
//! - **Palette tokens**: semantic colors ([`ColorToken`]) resolved per scheme
//! - **CSS variables**: the active palette as `--name: #rrggbb` pairs for the page root
//! - **Overrides**: runtime color tweaks layered over the palette
//!
//! The scheme lives in memory only; the language tag is the single persisted
//! preference of the site.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use folio_theme::{ColorScheme, ColorToken, ThemeState};
//!
//! let theme = ThemeState::new(ColorScheme::Light);
//! theme.subscribe(|scheme| println!("now {scheme}"));
//! theme.toggle_scheme();
//! let bg = theme.color(ColorToken::Background);
//! ```

pub mod color;
pub mod palette;
pub mod scheme;
pub mod state;

pub use color::Color;
pub use palette::{ColorToken, Palette};
pub use scheme::ColorScheme;
pub use state::{SubscriptionId, ThemeState};
