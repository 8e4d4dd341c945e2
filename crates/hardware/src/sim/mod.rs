//! Simulation setup.
//!
//! This module prepares a run from external inputs. It includes:
//! 1. **Loading:** Reading a flat program image file into instruction words.

/// Program image loader.
pub mod loader;
