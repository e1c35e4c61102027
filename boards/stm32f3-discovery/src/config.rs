//! Board wiring for the scan
//!
//! STM32F3DISCOVERY has no on-board pull-ups on these pins: fit 4.7 kOhm
//! resistors from SCL and SDA to 3V.

use bus_scan_core::ScanConfig;
use hal_abstractions::BusId;

/// I2C1 on PB6 (SCL) / PB7 (SDA), 100 kHz
#[cfg(not(feature = "i2c2"))]
pub const SCAN_CONFIG: ScanConfig = ScanConfig::DEFAULT;

/// I2C2 on PA9 (SCL) / PA10 (SDA), 100 kHz
#[cfg(feature = "i2c2")]
pub const SCAN_CONFIG: ScanConfig = ScanConfig::DEFAULT.with_bus(BusId::I2c2);

/// Pin description for the banner
pub const fn pins(config: &ScanConfig) -> &'static str {
    match config.bus {
        BusId::I2c2 => "SCL - PA9, SDA - PA10",
        _ => "SCL - PB6, SDA - PB7",
    }
}
