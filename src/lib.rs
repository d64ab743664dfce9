//! headless-ui Library
//!
//! Widget logic for a UI component kit without any rendering: pagination
//! ranges, calendar grids with single/range date selection, viewport-aware
//! popover placement and data-table keyboard focus. A presentation layer
//! renders the values produced here and forwards user input back.

rust_i18n::i18n!("locales", fallback = "en");

pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod states;

pub use error::{Error, Result};
