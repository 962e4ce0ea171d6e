//! Core types and definitions for the Towerline simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, configuration, errors, events, snapshots,
//! constants, and the pure geometry the simulation is built on.
//! It has no dependency on any host or rendering framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
