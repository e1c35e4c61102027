//! Address sweep over an opened bus

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::address::Address;
use crate::config::INTER_PROBE_DELAY_MS;
use crate::observer::{NoopObserver, ScanObserver};
use crate::probe::{ProbeOutcome, ScanRequest, ScanResult};
use crate::summary::ScanSummary;

/// Discovers which addresses on a bus have a responding target
///
/// Owns the bus handle for its whole life. Every call blocks: probes wait on
/// the controller, pacing waits [`INTER_PROBE_DELAY_MS`] on `delay`.
pub struct BusScanner<B, D> {
    bus: B,
    delay: D,
}

impl<B, D> BusScanner<B, D>
where
    B: I2c,
    D: DelayNs,
{
    pub fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Probe a single address, once
    pub fn probe(&mut self, address: Address) -> ProbeOutcome {
        ScanRequest::new(address).execute(&mut self.bus)
    }

    /// Sweep every address without reporting progress
    pub fn scan(&mut self) -> ScanSummary {
        self.scan_with(NoopObserver)
    }

    /// Sweep every address from 0x08 to 0x77, ascending
    ///
    /// Each address is probed exactly once and the sweep always runs to the
    /// end; bus faults are counted as "not responding". The pacing delay is
    /// inserted between consecutive probes.
    pub fn scan_with<O: ScanObserver>(&mut self, mut observer: O) -> ScanSummary {
        let mut summary = ScanSummary::new();
        observer.on_scan_started();

        for address in Address::all() {
            let outcome = self.probe(address);
            let result = ScanResult::new(address, outcome);
            summary.record(&result, outcome);
            observer.on_probe(&result, outcome);

            if address != Address::LAST {
                self.delay.delay_ms(INTER_PROBE_DELAY_MS);
            }
        }

        observer.on_complete(&summary);
        summary
    }

    /// Give the bus and delay back
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug)]
    struct Nack;

    impl embedded_hal::i2c::Error for Nack {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        }
    }

    /// Target present at exactly one address
    struct SingleTarget {
        at: u8,
        probed: Vec<u8>,
    }

    impl ErrorType for SingleTarget {
        type Error = Nack;
    }

    impl I2c for SingleTarget {
        fn transaction(
            &mut self,
            address: u8,
            _operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.probed.push(address);
            if address == self.at {
                Ok(())
            } else {
                Err(Nack)
            }
        }
    }

    #[derive(Default)]
    struct TotalDelay {
        calls: u32,
        total_ns: u64,
        shortest_ns: Option<u64>,
    }

    impl TotalDelay {
        fn wait(&mut self, ns: u64) {
            self.calls += 1;
            self.total_ns += ns;
            self.shortest_ns = Some(self.shortest_ns.map_or(ns, |s| s.min(ns)));
        }
    }

    impl DelayNs for TotalDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.wait(u64::from(ns));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.wait(u64::from(ms) * 1_000_000);
        }
    }

    #[test]
    fn test_probe_single_address() {
        let bus = SingleTarget { at: 0x29, probed: Vec::new() };
        let mut scanner = BusScanner::new(bus, TotalDelay::default());

        assert_eq!(scanner.probe(Address::new(0x29).unwrap()), ProbeOutcome::Responded);
        assert_eq!(scanner.probe(Address::new(0x2A).unwrap()), ProbeOutcome::NoResponse);

        let (bus, delay) = scanner.release();
        assert_eq!(bus.probed, vec![0x29, 0x2A]);
        assert_eq!(delay.calls, 0, "single probes are not paced");
    }

    #[test]
    fn test_pacing_between_probes() {
        let bus = SingleTarget { at: 0x29, probed: Vec::new() };
        let mut scanner = BusScanner::new(bus, TotalDelay::default());
        let summary = scanner.scan();

        assert_eq!(summary.found_addresses(), &[Address::new(0x29).unwrap()]);

        let (bus, delay) = scanner.release();
        assert_eq!(bus.probed.len(), 112);
        assert_eq!(delay.calls, 111);
        assert_eq!(delay.total_ns, 111 * 200 * 1_000_000);
    }

    #[test]
    fn test_pacing_never_below_floor() {
        let bus = SingleTarget { at: 0x08, probed: Vec::new() };
        let mut scanner = BusScanner::new(bus, TotalDelay::default());
        let _ = scanner.scan();
        let _ = scanner.scan();

        let (_, delay) = scanner.release();
        assert_eq!(delay.calls, 2 * 111);
        assert_eq!(
            delay.shortest_ns,
            Some(u64::from(INTER_PROBE_DELAY_MS) * 1_000_000)
        );
    }
}
