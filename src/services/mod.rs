// src/services/mod.rs

//! Request logic independent of HTTP. Each function takes the store as an explicit dependency.

pub mod questions;
pub mod quiz;
