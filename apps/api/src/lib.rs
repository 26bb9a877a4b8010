//! WorkScope Match API — shared skill-match scoring for job listings.
//!
//! `matching::scorer::compute_match` is the single scoring routine; the HTTP
//! layer in `routes` exposes it to the web client.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;
