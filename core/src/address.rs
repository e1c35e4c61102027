//! 7-bit target addresses that are legal to probe
//!
//! 0x00-0x07 and 0x78-0x7F are reserved by the I2C specification (general
//! call, CBUS, high-speed master codes, 10-bit addressing prefix) and are
//! never probed.

use core::ops::RangeInclusive;

/// Lowest probed address
pub const FIRST_ADDRESS: u8 = 0x08;
/// Highest probed address
pub const LAST_ADDRESS: u8 = 0x77;
/// Number of addresses in one sweep
pub const ADDRESS_COUNT: usize = (LAST_ADDRESS - FIRST_ADDRESS + 1) as usize;

const VALID_RANGE: RangeInclusive<u8> = FIRST_ADDRESS..=LAST_ADDRESS;

/// Target address inside the probeable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    pub const FIRST: Self = Self(FIRST_ADDRESS);
    pub const LAST: Self = Self(LAST_ADDRESS);

    /// Returns `None` for reserved addresses and anything above 7 bits
    pub const fn new(raw: u8) -> Option<Self> {
        if raw >= FIRST_ADDRESS && raw <= LAST_ADDRESS {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every probeable address, ascending
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        VALID_RANGE.map(Self)
    }

    /// Following address in probe order, `None` after [`Address::LAST`]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl TryFrom<u8> for Address {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(raw)
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_addresses_rejected() {
        for raw in (0x00..FIRST_ADDRESS).chain(LAST_ADDRESS + 1..=u8::MAX) {
            assert_eq!(Address::new(raw), None, "0x{:02X} should be rejected", raw);
        }
    }

    #[test]
    fn test_boundaries_accepted() {
        assert_eq!(Address::new(8).map(Address::get), Some(8));
        assert_eq!(Address::new(119).map(Address::get), Some(119));
        assert_eq!(Address::FIRST.get(), 8);
        assert_eq!(Address::LAST.get(), 119);
    }

    #[test]
    fn test_all_is_ascending_and_complete() {
        assert_eq!(ADDRESS_COUNT, 112);
        assert_eq!(Address::all().len(), ADDRESS_COUNT);

        let raw: Vec<u8> = Address::all().map(u8::from).collect();
        assert_eq!(raw.first(), Some(&8));
        assert_eq!(raw.last(), Some(&119));
        assert!(raw.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_next_stops_after_last() {
        assert_eq!(Address::FIRST.next(), Address::new(9));
        assert_eq!(Address::LAST.next(), None);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Address::new(0x3C).unwrap().to_string(), "0x3C");
        assert_eq!(Address::try_from(0x7F), Err(0x7F));
    }
}
