//! Résumé / job posting compatibility scoring: a pure engine (`analysis`) and the
//! HTTP service that exposes it.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod routes;
pub mod state;
