//! Board wiring for the scan
//!
//! The Feather's SCL/SDA header and STEMMA QT connector share I2C1. The
//! board has no pull-ups of its own; most breakouts bring them.

use bus_scan_core::ScanConfig;
use hal_abstractions::BusId;

/// I2C1 on PB6 (SCL) / PB7 (SDA), 100 kHz
#[cfg(not(feature = "i2c2"))]
pub const SCAN_CONFIG: ScanConfig = ScanConfig::DEFAULT;

/// I2C2 on PB10 (SCL) / PB11 (SDA), 100 kHz
#[cfg(feature = "i2c2")]
pub const SCAN_CONFIG: ScanConfig = ScanConfig::DEFAULT.with_bus(BusId::I2c2);

/// Pin description for the banner
pub const fn pins(config: &ScanConfig) -> &'static str {
    match config.bus {
        BusId::I2c2 => "SCL - PB10, SDA - PB11",
        _ => "SCL - PB6, SDA - PB7",
    }
}
