//! Shared utilities used across domain modules.

pub mod fmt;
