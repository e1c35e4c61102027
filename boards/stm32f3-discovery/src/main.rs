#![deny(unsafe_code)]
#![deny(warnings)]
#![no_main]
#![no_std]

use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

mod config;
mod exit;
mod i2c;

#[app(device = stm32_metapac, peripherals = false, dispatchers = [COMP7])]
mod app {
    use super::*;
    use bus_scan_core::{DefmtReporter, Sweep};
    use defmt::{error, info};
    use rtic_monotonics::stm32::prelude::*;

    stm32_tim2_monotonic!(Mono, 1_000_000);

    #[shared]
    struct Shared {}

    #[local]
    struct Local {}

    #[init]
    fn init(_: init::Context) -> (Shared, Local) {
        let mut hal_config = embassy_stm32::Config::default();
        {
            use embassy_stm32::rcc::*;
            hal_config.rcc.hsi = true;
            hal_config.rcc.sys = Sysclk::HSI;
            hal_config.rcc.pll = None;
            hal_config.rcc.ahb_pre = AHBPrescaler::DIV1;
            hal_config.rcc.apb1_pre = APBPrescaler::DIV1;
            hal_config.rcc.apb2_pre = APBPrescaler::DIV1;
        }
        let p = embassy_stm32::init(hal_config);

        info!("******** I2C TARGET ADDRESS SCANNER *********");
        info!(
            "Finds the addresses of any I2C targets on {} ({})",
            config::SCAN_CONFIG.bus,
            config::pins(&config::SCAN_CONFIG)
        );

        let timer_clock_hz = 8_000_000;
        Mono::start(timer_clock_hz);

        let board = i2c::BoardI2c::new(
            i2c::I2c1Peripherals {
                i2c: p.I2C1,
                scl: p.PB6,
                sda: p.PB7,
            },
            i2c::I2c2Peripherals {
                i2c: p.I2C2,
                scl: p.PA9,
                sda: p.PA10,
            },
        );

        sweep::spawn(board).ok();

        (Shared {}, Local {})
    }

    /// Runs the sweep once and reports the result
    ///
    /// Probing and pacing both block; nothing else runs at this priority.
    #[task(priority = 1)]
    async fn sweep(_cx: sweep::Context, board: i2c::BoardI2c) {
        let mut sweep = Sweep::new(board, config::SCAN_CONFIG);
        let result = sweep.run(Mono, DefmtReporter);

        match &result {
            Ok(summary) => info!("{}", summary),
            Err(e) => error!("Sweep aborted: {}", e),
        }
        exit::report(bus_scan_core::exit_code(&result));
    }

    #[idle]
    fn idle(_cx: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }
}
