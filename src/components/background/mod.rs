//! Ambient canvas background.
//!
//! Renders a full-viewport canvas behind the page with:
//! - Rising particles with soft glow cores
//! - Swaying outlined bubbles
//! - Faint connection lines between nearby particles
//! - A sparse spark trail following the pointer
//!
//! The simulation ([`AmbientField`]) and renderer are independent of the
//! browser; drawing goes through the [`Surface`] trait, implemented for
//! `CanvasRenderingContext2d`.
//!
//! # Example
//!
//! ```ignore
//! use tidewater_fx::{AmbientBackground, FieldConfig};
//!
//! view! { <AmbientBackground config=FieldConfig::default() /> }
//! ```

mod component;
pub mod config;
pub mod connections;
pub mod cursor;
pub mod entity;
pub mod field;
pub mod render;
pub mod surface;
pub mod theme;

pub use component::AmbientBackground;
pub use config::FieldConfig;
pub use field::AmbientField;
pub use surface::Surface;
pub use theme::Theme;
