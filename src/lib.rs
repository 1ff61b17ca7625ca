//! Appointment-booking core for the agency landing page: a form controller
//! that validates a booking draft, runs a simulated submission delay, and
//! appends confirmed bookings to a pluggable key-value store.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;
