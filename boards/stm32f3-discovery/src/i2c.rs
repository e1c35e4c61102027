//! I2C controllers wired on the STM32F3DISCOVERY

use defmt::info;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::mode::Blocking;
use embassy_stm32::peripherals;
use embassy_stm32::time::Hertz;
use embassy_stm32::Peri;
use hal_abstractions::{BusId, BusSpeed, I2cControllerInit, InitError};

pub struct I2c1Peripherals {
    pub i2c: Peri<'static, peripherals::I2C1>,
    pub scl: Peri<'static, peripherals::PB6>,
    pub sda: Peri<'static, peripherals::PB7>,
}

pub struct I2c2Peripherals {
    pub i2c: Peri<'static, peripherals::I2C2>,
    pub scl: Peri<'static, peripherals::PA9>,
    pub sda: Peri<'static, peripherals::PA10>,
}

/// Hands out each I2C controller once
pub struct BoardI2c {
    i2c1: Option<I2c1Peripherals>,
    i2c2: Option<I2c2Peripherals>,
}

impl BoardI2c {
    pub fn new(i2c1: I2c1Peripherals, i2c2: I2c2Peripherals) -> Self {
        Self {
            i2c1: Some(i2c1),
            i2c2: Some(i2c2),
        }
    }
}

impl I2cControllerInit for BoardI2c {
    type Bus = I2c<'static, Blocking>;

    fn initialize(&mut self, bus: BusId, frequency_hz: u32) -> Result<Self::Bus, InitError> {
        // I2C v2 peripheral: standard, fast and fast-mode plus all work
        let speed = BusSpeed::from_hz(frequency_hz)?;

        let mut config = i2c::Config::default();
        config.frequency = Hertz(speed.hz());

        let handle = match bus {
            BusId::I2c1 => {
                let p = self.i2c1.take().ok_or(InitError::BusInUse(bus))?;
                I2c::new_blocking(p.i2c, p.scl, p.sda, config)
            }
            BusId::I2c2 => {
                let p = self.i2c2.take().ok_or(InitError::BusInUse(bus))?;
                I2c::new_blocking(p.i2c, p.scl, p.sda, config)
            }
            other => return Err(InitError::UnknownBus(other)),
        };

        info!("{} configured for {}", bus, speed);
        Ok(handle)
    }
}
