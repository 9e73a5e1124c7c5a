//! Game services
//!
//! Sensor scans and the interactive game driver.

pub mod game;
pub mod scan;
