//! One complete sweep: open the bus, scan it, report
//!
//! ```text
//! NotStarted -> Initializing -> InitFailed
//!                            -> Scanning -> Scanning -> ... -> Complete
//! ```
//!
//! `Scanning` advances once per probed address and becomes `Complete` after
//! the last one. `InitFailed` and `Complete` are terminal.

use embedded_hal::delay::DelayNs;
use hal_abstractions::{I2cControllerInit, InitError};

use crate::address::Address;
use crate::config::ScanConfig;
use crate::observer::ScanObserver;
use crate::probe::{ProbeOutcome, ScanResult};
use crate::scanner::BusScanner;
use crate::summary::ScanSummary;

/// Exit status of a completed sweep
pub const EXIT_SUCCESS: i32 = 0;

/// Where a sweep currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepState {
    NotStarted,
    Initializing,
    InitFailed,
    /// Waiting to probe `next`
    Scanning { next: Address },
    Complete,
}

impl SweepState {
    /// State after `probed` has been handled
    pub fn after_probe(probed: Address) -> Self {
        match probed.next() {
            Some(next) => Self::Scanning { next },
            None => Self::Complete,
        }
    }
}

/// Drives the sweep state machine for one board
pub struct Sweep<I> {
    initializer: I,
    config: ScanConfig,
    state: SweepState,
}

impl<I: I2cControllerInit> Sweep<I> {
    pub fn new(initializer: I, config: ScanConfig) -> Self {
        Self {
            initializer,
            config,
            state: SweepState::NotStarted,
        }
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Open the configured bus and scan it
    ///
    /// Nothing is probed unless the bus opens.
    ///
    /// # Errors
    ///
    /// Returns the board's `InitError` unchanged; the sweep ends in
    /// `SweepState::InitFailed`.
    pub fn run<D, O>(&mut self, delay: D, mut observer: O) -> Result<ScanSummary, InitError>
    where
        D: DelayNs,
        O: ScanObserver,
    {
        let ScanConfig { bus, frequency_hz } = self.config;

        self.state = SweepState::Initializing;
        let handle = match self.initializer.initialize(bus, frequency_hz) {
            Ok(handle) => handle,
            Err(e) => {
                self.state = SweepState::InitFailed;
                observer.on_init_failed(&e);
                return Err(e);
            }
        };
        observer.on_init_complete(bus, frequency_hz);

        self.state = SweepState::Scanning {
            next: Address::FIRST,
        };
        let mut scanner = BusScanner::new(handle, delay);
        let summary = scanner.scan_with(Tracking {
            state: &mut self.state,
            inner: &mut observer,
        });

        Ok(summary)
    }

    /// Hand the board initializer back
    pub fn into_inner(self) -> I {
        self.initializer
    }
}

/// Exit code for a sweep result: 0 when it completed, the error's code otherwise
pub fn exit_code(result: &Result<ScanSummary, InitError>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => e.exit_code(),
    }
}

/// Advances the sweep state while forwarding events
struct Tracking<'a, O> {
    state: &'a mut SweepState,
    inner: O,
}

impl<O: ScanObserver> ScanObserver for Tracking<'_, O> {
    fn on_scan_started(&mut self) {
        self.inner.on_scan_started();
    }

    fn on_probe(&mut self, result: &ScanResult, outcome: ProbeOutcome) {
        *self.state = SweepState::after_probe(result.address);
        self.inner.on_probe(result, outcome);
    }

    fn on_complete(&mut self, summary: &ScanSummary) {
        self.inner.on_complete(summary);
    }
}
