#![deny(unsafe_code)]
#![deny(warnings)]
#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _;
use rtic::app;
use rtic_monotonics::stm32::prelude::*;

mod config;
mod exit;
mod i2c;

stm32_tim2_monotonic!(Mono, 1_000_000);

#[app(device = embassy_stm32, peripherals = true, dispatchers = [USART1])]
mod app {
    use super::*;
    use bus_scan_core::{DefmtReporter, Sweep};
    use defmt::{error, info};
    use embassy_stm32::rcc::{Hse, HseMode};
    use embassy_stm32::time::Hertz;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {}

    #[init]
    fn init(_cx: init::Context) -> (Shared, Local) {
        // Adafruit Feather STM32F405: 12 MHz HSE
        let mut hal_config = embassy_stm32::Config::default();
        hal_config.rcc.hse = Some(Hse {
            freq: Hertz(12_000_000),
            mode: HseMode::Oscillator,
        });

        // HSE (12 MHz) / PREDIV(6) = 2 MHz (PLL input)
        // 2 MHz * MUL(168) = 336 MHz (VCO)
        // VCO / DIVP(4) = 84 MHz (SYSCLK)
        hal_config.rcc.pll_src = embassy_stm32::rcc::PllSource::HSE;
        hal_config.rcc.pll = Some(embassy_stm32::rcc::Pll {
            prediv: embassy_stm32::rcc::PllPreDiv::DIV6,
            mul: embassy_stm32::rcc::PllMul::MUL168,
            divp: Some(embassy_stm32::rcc::PllPDiv::DIV4),
            divq: None,
            divr: None,
        });
        hal_config.rcc.sys = embassy_stm32::rcc::Sysclk::PLL1_P;
        hal_config.rcc.ahb_pre = embassy_stm32::rcc::AHBPrescaler::DIV1; // 84 MHz
        hal_config.rcc.apb1_pre = embassy_stm32::rcc::APBPrescaler::DIV2; // 42 MHz, I2C kernel clock
        hal_config.rcc.apb2_pre = embassy_stm32::rcc::APBPrescaler::DIV1; // 84 MHz

        let p = embassy_stm32::init(hal_config);
        info!("System initialized with HSE (12MHz), SYSCLK=84MHz");

        // TIM2 on APB1: timer clock = 2*APB1 when prescaler != 1
        let timer_clock_hz = 84_000_000;
        Mono::start(timer_clock_hz);

        info!("******** I2C TARGET ADDRESS SCANNER *********");
        info!(
            "Finds the addresses of any I2C targets on {} ({})",
            config::SCAN_CONFIG.bus,
            config::pins(&config::SCAN_CONFIG)
        );

        let board = i2c::BoardI2c::new(
            i2c::I2c1Peripherals {
                i2c: p.I2C1,
                scl: p.PB6,
                sda: p.PB7,
            },
            i2c::I2c2Peripherals {
                i2c: p.I2C2,
                scl: p.PB10,
                sda: p.PB11,
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

    /// RTIC idle task - WFI sleep mode when no tasks active
    #[idle]
    fn idle(_cx: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }
}
