//! # Web Request Handlers

pub mod health;
