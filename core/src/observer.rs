//! Progress reporting hooks
//!
//! The scanner does no I/O of its own. Whatever should appear on the
//! console (banner, progress markers, found targets, final count) is driven
//! through a [`ScanObserver`].

use hal_abstractions::{BusId, InitError};

use crate::probe::{ProbeOutcome, ScanResult};
use crate::summary::ScanSummary;

/// Receives sweep events in order
///
/// All hooks default to doing nothing.
pub trait ScanObserver {
    fn on_init_complete(&mut self, _bus: BusId, _frequency_hz: u32) {}

    fn on_init_failed(&mut self, _error: &InitError) {}

    fn on_scan_started(&mut self) {}

    /// Called once per address, right after its probe
    fn on_probe(&mut self, _result: &ScanResult, _outcome: ProbeOutcome) {}

    fn on_complete(&mut self, _summary: &ScanSummary) {}
}

impl<T: ScanObserver + ?Sized> ScanObserver for &mut T {
    fn on_init_complete(&mut self, bus: BusId, frequency_hz: u32) {
        (**self).on_init_complete(bus, frequency_hz)
    }

    fn on_init_failed(&mut self, error: &InitError) {
        (**self).on_init_failed(error)
    }

    fn on_scan_started(&mut self) {
        (**self).on_scan_started()
    }

    fn on_probe(&mut self, result: &ScanResult, outcome: ProbeOutcome) {
        (**self).on_probe(result, outcome)
    }

    fn on_complete(&mut self, summary: &ScanSummary) {
        (**self).on_complete(summary)
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Logs the sweep over defmt
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtReporter;

#[cfg(feature = "defmt")]
impl ScanObserver for DefmtReporter {
    fn on_init_complete(&mut self, bus: BusId, frequency_hz: u32) {
        defmt::info!("-->I2C controller {} initialized at {} Hz", bus, frequency_hz);
        defmt::info!("-->Scanning started");
    }

    fn on_init_failed(&mut self, error: &InitError) {
        defmt::error!("-->Failed controller: {}", error);
    }

    fn on_probe(&mut self, result: &ScanResult, outcome: ProbeOutcome) {
        let raw = result.address.get();
        defmt::info!(".");
        match outcome {
            ProbeOutcome::Responded => {
                defmt::info!("Found target ID {=u8}; 0x{=u8:02X}", raw, raw)
            }
            ProbeOutcome::NoResponse => {}
            ProbeOutcome::TransientError(kind) => {
                defmt::warn!("Bus error at 0x{=u8:02X}: {}", raw, kind)
            }
        }
    }

    fn on_complete(&mut self, summary: &ScanSummary) {
        if summary.bus_errors() > 0 {
            defmt::warn!("{} probes ended in a bus error", summary.bus_errors());
        }
        defmt::info!("-->Scan finished. {} devices found", summary.found_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;

    #[derive(Default)]
    struct Counter {
        probes: usize,
        completes: usize,
    }

    impl ScanObserver for Counter {
        fn on_probe(&mut self, _result: &ScanResult, _outcome: ProbeOutcome) {
            self.probes += 1;
        }

        fn on_complete(&mut self, _summary: &ScanSummary) {
            self.completes += 1;
        }
    }

    fn drive<O: ScanObserver>(mut observer: O) {
        let result = ScanResult::new(Address::FIRST, ProbeOutcome::NoResponse);
        observer.on_scan_started();
        observer.on_probe(&result, ProbeOutcome::NoResponse);
        observer.on_init_failed(&InitError::Transport);
        observer.on_complete(&ScanSummary::new());
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut counter = Counter::default();
        drive(&mut counter);
        drive(&mut counter);
        assert_eq!(counter.probes, 2);
        assert_eq!(counter.completes, 2);
    }

    #[test]
    fn test_noop_accepts_everything() {
        drive(NoopObserver);
    }
}
