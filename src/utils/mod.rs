//! Utility functions for milestone screening.

pub mod logging;
