// adcensor/src/lib.rs
//! # adcensor CLI Application
//!
//! Command-line front end for `adcensor-core`: censor chat logs, scan them
//! for advertisements, and inspect the plugin metadata.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
