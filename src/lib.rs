//! Interactive terminal HTTP client
//!
//! Compose a request (method, URL, optional body), send it, and inspect the
//! status line, headers and formatted body of the response.

pub mod actions;
pub mod app;
pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod format;
pub mod logging;
pub mod request;
pub mod state;
pub mod transport;
pub mod types;
pub mod ui;
