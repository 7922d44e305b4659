//! Roster extraction and CSV export engine for UKG schedule streams.
//!
//! This crate decodes SockJS-style WebSocket frames carrying schedule payloads,
//! normalizes the heterogeneous record shapes into canonical shifts, resolves
//! employee identifiers to display names, and renders per-day CSV exports with
//! a derived "break required" flag.

#![warn(missing_docs)]

pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
