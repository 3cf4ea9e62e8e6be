//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `resolution`: Query, condition and data file resolution tests
//! - `loading`: Environment and CLI loading tests

mod helpers;
mod loading;
