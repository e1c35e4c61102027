//! Platform-agnostic I2C target address scanner
//!
//! This crate contains the scanning logic shared by all supported boards.
//! It has NO hardware dependencies: the bus is any
//! [`embedded_hal::i2c::I2c`], pacing is any [`embedded_hal::delay::DelayNs`],
//! and boards open their controllers through
//! [`hal_abstractions::I2cControllerInit`].
//!
//! # Usage
//!
//! ```ignore
//! use bus_scan_core::{DefmtReporter, ScanConfig, Sweep};
//!
//! let mut sweep = Sweep::new(board_i2c, ScanConfig::default());
//! match sweep.run(delay, DefmtReporter) {
//!     Ok(summary) => info!("{} devices found", summary.found_count()),
//!     Err(e) => error!("I2C init failed: {}", e),
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

pub mod address;
pub mod config;
pub mod observer;
pub mod probe;
pub mod scanner;
pub mod summary;
pub mod sweep;

pub use address::{Address, ADDRESS_COUNT, FIRST_ADDRESS, LAST_ADDRESS};
pub use config::{ScanConfig, INTER_PROBE_DELAY_MS};
#[cfg(feature = "defmt")]
pub use observer::DefmtReporter;
pub use observer::{NoopObserver, ScanObserver};
pub use probe::{ProbeOutcome, ScanRequest, ScanResult};
pub use scanner::BusScanner;
pub use summary::ScanSummary;
pub use sweep::{exit_code, Sweep, SweepState, EXIT_SUCCESS};

pub use hal_abstractions::{BusId, BusSpeed, I2cControllerInit, InitError};
