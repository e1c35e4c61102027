//! Hardware abstraction traits for the bus scanner firmware
//!
//! This crate defines traits that abstract over hardware differences
//! between boards. BSPs implement these traits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

pub mod i2c;

pub use i2c::{BusId, BusSpeed, I2cControllerInit, InitError};
