//! Sweep configuration

use hal_abstractions::{BusId, BusSpeed};

/// Pause between two probes
///
/// Some targets need settling time between back-to-back transactions. Fixed:
/// neither boards nor callers can change it.
pub const INTER_PROBE_DELAY_MS: u32 = 200;

/// Which bus to sweep and how
///
/// Boards resolve their pin/peripheral choices into one of these before the
/// bus is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// Controller to open
    pub bus: BusId,
    /// SCL frequency in Hz
    pub frequency_hz: u32,
}

impl ScanConfig {
    /// I2C1 in standard mode
    pub const DEFAULT: Self = Self {
        bus: BusId::I2c1,
        frequency_hz: BusSpeed::STANDARD_HZ,
    };

    pub const fn with_bus(mut self, bus: BusId) -> Self {
        self.bus = bus;
        self
    }

    pub const fn with_frequency_hz(mut self, frequency_hz: u32) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
