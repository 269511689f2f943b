//! Command implementations.

/// Language listing command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;
