//! Demo client for the fight engine.
//!
//! Stands in for the surrounding game: it reads environment configuration,
//! loads combat content, and drives a scripted encounter through
//! [`fight_core::Encounter`].

pub mod config;
pub mod duel;

pub use config::ClientConfig;
pub use duel::{Duel, DuelReport};
