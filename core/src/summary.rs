//! Aggregate over one sweep

use heapless::Vec;

use crate::address::{Address, ADDRESS_COUNT};
use crate::probe::{ProbeOutcome, ScanResult};

/// Addresses that answered, in probe order
pub type FoundAddresses = Vec<Address, ADDRESS_COUNT>;

/// Result of a completed sweep
///
/// Only [`crate::BusScanner`] fills one in. The found count is the length of
/// the address list, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    found_addresses: FoundAddresses,
    bus_errors: u16,
}

impl ScanSummary {
    pub const fn new() -> Self {
        Self {
            found_addresses: Vec::new(),
            bus_errors: 0,
        }
    }

    /// Number of responding targets
    pub fn found_count(&self) -> usize {
        self.found_addresses.len()
    }

    /// Responding targets, strictly ascending
    pub fn found_addresses(&self) -> &[Address] {
        &self.found_addresses
    }

    /// Probes that ended in a bus fault rather than ACK/NACK
    pub fn bus_errors(&self) -> u16 {
        self.bus_errors
    }

    /// Fold one probe into the summary
    ///
    /// Results arrive in ascending address order, one per address, which
    /// keeps the list sorted and within capacity.
    pub(crate) fn record(&mut self, result: &ScanResult, outcome: ProbeOutcome) {
        if let ProbeOutcome::TransientError(_) = outcome {
            self.bus_errors = self.bus_errors.saturating_add(1);
        }
        if result.responded {
            debug_assert!(self
                .found_addresses
                .last()
                .map_or(true, |last| *last < result.address));
            // Cannot overflow: capacity equals the number of probeable addresses
            let _ = self.found_addresses.push(result.address);
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScanSummary {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ScanSummary {{ found_count: {}, found_addresses: {}, bus_errors: {} }}",
            self.found_count(),
            self.found_addresses(),
            self.bus_errors
        );
    }
}
