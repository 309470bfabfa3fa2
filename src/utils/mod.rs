//! Utility modules shared across the application.
//!
//! Cross-cutting helpers with no UI or storage dependencies. Everything in
//! here is a pure function so it can be unit tested directly.

pub mod datetime;
