//! Holocron CLI Library
//!
//! This module exposes the cache, API, service, and rendering modules for
//! use by the binary and the integration tests.

pub mod api;
pub mod cache;
pub mod cli;
pub mod data;
pub mod render;
pub mod service;
