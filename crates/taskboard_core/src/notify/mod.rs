//! Urgent-task notifications.
//!
//! # Responsibility
//! - Decide which urgent tasks warrant a new alert and suppress repeats.
//! - Define the contract for the platform notification dispatcher.
//!
//! # Invariants
//! - Each urgent task id yields at most one alert while it stays in the
//!   alerted-set.
//! - The tracker never talks to the dispatcher; the shell forwards alerts.

pub mod dispatcher;
pub mod tracker;
