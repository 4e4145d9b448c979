//! Portfolio core.
//!
//! Catalog data, project filtering, contact form validation and the
//! submission state machine behind the portfolio page. Rendering lives
//! elsewhere; everything here is plain state and logic.

pub mod app;
pub mod catalog;
pub mod config;
pub mod delivery;
pub mod error;
pub mod logger;
pub mod state;

pub use error::{AppError, AppResult};
