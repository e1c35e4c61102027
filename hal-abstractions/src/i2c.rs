//! I2C controller bring-up
//!
//! Boards own their I2C peripherals and pins. The scanner only knows a bus
//! by its [`BusId`] and asks the board to open it through
//! [`I2cControllerInit`]. Whatever comes back is a plain
//! [`embedded_hal::i2c::I2c`] implementation.

/// Physical I2C controller on the MCU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusId {
    I2c0,
    I2c1,
    I2c2,
    I2c3,
}

impl BusId {
    /// Controller number as printed in datasheets
    pub const fn index(self) -> u8 {
        match self {
            Self::I2c0 => 0,
            Self::I2c1 => 1,
            Self::I2c2 => 2,
            Self::I2c3 => 3,
        }
    }
}

impl core::fmt::Display for BusId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "I2C{}", self.index())
    }
}

/// Bus clock rates defined by the I2C specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusSpeed {
    /// 100 kHz
    Standard,
    /// 400 kHz
    Fast,
    /// 1 MHz
    FastPlus,
}

impl BusSpeed {
    pub const STANDARD_HZ: u32 = 100_000;
    pub const FAST_HZ: u32 = 400_000;
    pub const FAST_PLUS_HZ: u32 = 1_000_000;

    /// Map a requested SCL frequency onto one of the standard speeds
    ///
    /// # Errors
    ///
    /// Returns `InitError::UnsupportedFrequency` for anything that is not
    /// exactly one of the three standard rates.
    pub const fn from_hz(frequency_hz: u32) -> Result<Self, InitError> {
        match frequency_hz {
            Self::STANDARD_HZ => Ok(Self::Standard),
            Self::FAST_HZ => Ok(Self::Fast),
            Self::FAST_PLUS_HZ => Ok(Self::FastPlus),
            other => Err(InitError::UnsupportedFrequency(other)),
        }
    }

    pub const fn hz(self) -> u32 {
        match self {
            Self::Standard => Self::STANDARD_HZ,
            Self::Fast => Self::FAST_HZ,
            Self::FastPlus => Self::FAST_PLUS_HZ,
        }
    }
}

/// Bus bring-up errors
///
/// All of them are fatal for a sweep: nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// HAL rejected the controller configuration
    Transport,
    /// Controller was already handed out
    BusInUse(BusId),
    /// Requested SCL frequency is not supported by the controller
    UnsupportedFrequency(u32),
    /// Board has no controller wired for this bus
    UnknownBus(BusId),
}

impl InitError {
    /// Non-zero process exit code, distinct per variant
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Transport => 1,
            Self::BusInUse(_) => 2,
            Self::UnsupportedFrequency(_) => 3,
            Self::UnknownBus(_) => 4,
        }
    }
}

impl core::fmt::Display for InitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport => write!(f, "I2C controller configuration failed"),
            Self::BusInUse(bus) => write!(f, "{} is already in use", bus),
            Self::UnsupportedFrequency(hz) => write!(f, "Unsupported bus frequency: {} Hz", hz),
            Self::UnknownBus(bus) => write!(f, "{} is not available on this board", bus),
        }
    }
}

// Implement core::error::Error for no_std compatibility
impl core::error::Error for InitError {}

/// Opens an I2C controller in controller (master) mode
pub trait I2cControllerInit {
    /// Opened bus handle
    type Bus: embedded_hal::i2c::I2c;

    /// Configure `bus` for `frequency_hz` and hand over the handle
    ///
    /// Each bus can be opened once; a second call for the same bus must fail
    /// with `InitError::BusInUse`.
    fn initialize(&mut self, bus: BusId, frequency_hz: u32) -> Result<Self::Bus, InitError>;
}
