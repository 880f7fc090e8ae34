//! Advent of Code 2020 solutions with automatic registration
//!
//! Day 7 (bag containment) and day 11 (seating automaton) register
//! themselves with the solver framework through the `AutoRegisterSolver`
//! derive; linking this crate is enough for a registry built with
//! `register_all_plugins` to find them.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
