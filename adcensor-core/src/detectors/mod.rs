//! This module contains the concrete `Detector` implementations.
//!
//! Each detector is a thin adapter from the scanners in
//! `adcensor-heuristics` to the `Detector` trait.
//!
//! # License
//! MIT OR Apache-2.0

pub mod ip_detector;
pub mod domain_detector;
