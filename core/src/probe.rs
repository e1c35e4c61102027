//! Single-address presence probe

use embedded_hal::i2c::{Error, ErrorKind, I2c};

use crate::address::Address;

/// What the bus said about one address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeOutcome {
    /// Target acknowledged its address
    Responded,
    /// Address was not acknowledged, nobody is there
    NoResponse,
    /// Bus-level failure (arbitration loss, bus error, overrun, ...)
    ///
    /// Says nothing about presence. Counted as not responding.
    TransientError(ErrorKind),
}

impl ProbeOutcome {
    /// Classify the result of a probe transaction
    pub fn from_result<E: Error>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Responded,
            Err(e) => match e.kind() {
                ErrorKind::NoAcknowledge(_) => Self::NoResponse,
                kind => Self::TransientError(kind),
            },
        }
    }

    pub const fn responded(&self) -> bool {
        matches!(self, Self::Responded)
    }
}

/// One probe attempt
///
/// Built fresh for every address and consumed by [`ScanRequest::execute`],
/// so nothing carries over between transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a scan request does nothing until executed"]
pub struct ScanRequest {
    target: Address,
}

impl ScanRequest {
    pub const fn new(target: Address) -> Self {
        Self { target }
    }

    pub const fn target(&self) -> Address {
        self.target
    }

    /// Issue a zero-length write to the target and wait for ACK/NACK
    ///
    /// Blocks until the controller finishes the transaction or its own
    /// timeout expires.
    pub fn execute<B: I2c>(self, bus: &mut B) -> ProbeOutcome {
        ProbeOutcome::from_result(bus.write(self.target.get(), &[]))
    }
}

/// Classification of one probed address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanResult {
    pub address: Address,
    pub responded: bool,
}

impl ScanResult {
    pub const fn new(address: Address, outcome: ProbeOutcome) -> Self {
        Self {
            address,
            responded: outcome.responded(),
        }
    }
}
