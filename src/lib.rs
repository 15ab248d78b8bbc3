//! Core library for the meraki-bssid-export command line application.
//!
//! The modules keep responsibilities narrow and composable: the dashboard
//! client lives in [`api`], row shaping in [`model`] and [`collect`], workbook
//! output under [`io`], and the glue for a full run in [`export`], [`config`],
//! and [`prompt`].

pub mod api;
pub mod collect;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
pub mod model;
pub mod prompt;

pub use error::{ExportError, Result};
