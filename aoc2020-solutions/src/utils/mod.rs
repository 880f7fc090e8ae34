//! Helpers shared between solutions

pub mod dp_cache;
