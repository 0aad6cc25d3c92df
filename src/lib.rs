//! Work Schedule Engine
//!
//! This crate defines daily time intervals, composes them into cyclic
//! shifts, assigns shifts to employees, and resolves the effective
//! schedule for any calendar date by layering per-date exceptions over
//! the cyclic pattern.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
