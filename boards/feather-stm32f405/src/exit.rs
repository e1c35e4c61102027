//! Sweep exit status
//!
//! With a debugger attached the status ends the session through
//! semihosting. Without the `semihosting` feature it is only logged and the
//! core goes back to sleep.

use defmt::{error, info};

pub fn report(code: i32) {
    if code == bus_scan_core::EXIT_SUCCESS {
        info!("Exit status {}", code);
    } else {
        error!("Exit status {}", code);
    }

    #[cfg(feature = "semihosting")]
    cortex_m_semihosting::debug::exit(if code == bus_scan_core::EXIT_SUCCESS {
        cortex_m_semihosting::debug::EXIT_SUCCESS
    } else {
        cortex_m_semihosting::debug::EXIT_FAILURE
    });
}
