//! HTTP request handlers

pub mod health;
pub mod practice;
pub mod sounds;
