#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

mod backup;
mod buttons;
mod display;
mod measurement;

#[rtic::app(
    device = stm32l0xx_hal::pac,
    dispatchers = []
)]
mod app {
    use cortex_m::peripheral::SCB;
    use embedded_hal::digital::v2::InputPin;
    use embedded_time::rate::Hertz;
    use stm32l0xx_hal::adc::{Adc, Ready, VRef};
    use stm32l0xx_hal::gpio::gpioa::{PA4, PA5, PA7};
    use stm32l0xx_hal::gpio::{gpiob::PB0, Analog, Input, Output, PullUp, PushPull};
    use stm32l0xx_hal::pac::SPI1;
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::rtc::{Datelike, Timelike};
    use stm32l0xx_hal::spi::{NoMiso, Spi, MODE_0};
    use stm32l0xx_hal::{exti, pwr, rcc, rtc, syscfg};

    use segface::face::{BatteryState, TickUnit, WallTime};
    use segface::field::{ClockStyle, Weekday};
    use segface::stock::{StockTile, StockTiles};
    use segface::tile::Tiles;
    use segface::Face;

    use crate::backup::BackupStore;
    use crate::buttons::{self, AlarmBtn, ModeBtn};
    use crate::display::MemoryLcd;
    use crate::measurement::Voltage;

    type Display = MemoryLcd<Spi<SPI1, (PA5<Analog>, NoMiso, PA7<Analog>)>, PA4<Output<PushPull>>>;

    #[shared]
    struct Shared {
        pwr: pwr::PWR,
        scb: SCB,
        rcc: rcc::Rcc,
        face: Face<Tiles<StockTile>>,
        store: BackupStore,
    }

    #[local]
    struct Local {
        rtc: rtc::Rtc,
        display: Display,
        adc: Adc<Ready>,
        vref: VRef,
        charging: PB0<Input<PullUp>>,
        alarm: AlarmBtn,
        mode: ModeBtn,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let dp = cx.device;
        let cp = cx.core;

        // MSI range 5 (2.097 MHz) is the slowest clock that gets a frame out within a second
        let mut rcc = dp.RCC.freeze(rcc::Config::msi(rcc::MSIRange::Range5));

        let pwr = pwr::PWR::new(dp.PWR, &mut rcc);
        let mut exti = exti::Exti::new(dp.EXTI);
        let mut syscfg = syscfg::SYSCFG::new(dp.SYSCFG, &mut rcc);

        let gpioa = dp.GPIOA.split(&mut rcc);
        let gpiob = dp.GPIOB.split(&mut rcc);

        let mut rtc = match rtc::Rtc::new(dp.RTC, &mut rcc, &pwr, None) {
            Ok(rtc) => rtc,
            Err(_) => defmt::panic!("rtc failed to start"),
        };

        rtc.enable_interrupts(rtc::Interrupts {
            wakeup_timer: true,
            ..rtc::Interrupts::default()
        });

        exti.listen_configurable(exti::ConfigurableLine::RtcWakeup, exti::TriggerEdge::Rising);

        // Start wakeup timer to update watch face every second
        rtc.wakeup_timer().start(1_u32);

        let alarm = gpioa.pa2.into_pull_down_input();
        let mode = gpiob.pb9.into_pull_down_input();
        buttons::init(&alarm, &mode, &mut exti, &mut syscfg);

        let spi = dp.SPI1.spi(
            (gpioa.pa5, NoMiso, gpioa.pa7),
            MODE_0,
            Hertz(1_000_000_u32),
            &mut rcc,
        );
        let mut display = MemoryLcd::new(spi, gpioa.pa4.into_push_pull_output());
        if display.clear_panel().is_err() {
            defmt::warn!("failed to clear the display");
        }

        let mut adc = dp.ADC.constrain(&mut rcc);
        let mut vref = VRef::new();
        vref.enable(&mut adc);

        let store = BackupStore::new(&rtc);
        let face = match Face::load(&mut StockTiles, &store, ClockStyle::TwentyFourHour) {
            Ok(face) => face,
            Err(e) => defmt::panic!("failed to load the face: {}", e),
        };
        defmt::info!("settings {}", face.settings());

        (
            Shared {
                pwr,
                rcc,
                scb: cp.SCB,
                face,
                store,
            },
            Local {
                rtc,
                display,
                adc,
                vref,
                charging: gpiob.pb0.into_pull_up_input(),
                alarm,
                mode,
            },
        )
    }

    #[idle(shared = [pwr, scb, rcc])]
    fn idle(cx: idle::Context) -> ! {
        defmt::info!("idle");

        let mut pwr = cx.shared.pwr;
        let mut scb = cx.shared.scb;
        let mut rcc = cx.shared.rcc;

        loop {
            (&mut pwr, &mut scb, &mut rcc).lock(|pwr, scb, rcc| {
                defmt::trace!("entering stop mode");
                pwr.stop_mode(scb, rcc, pwr::StopModeConfig { ultra_low_power: true })
                    .enter();
            });
        }
    }

    /// Redraw the face, every second while something blinks and every minute otherwise
    #[task(
        binds = RTC,
        shared = [face],
        local = [rtc, display, adc, vref, charging, minute: Option<u8> = None]
    )]
    fn tick(mut cx: tick::Context) {
        let rtc = cx.local.rtc;
        let _ = rtc.wakeup_timer().wait();
        exti::Exti::unpend(exti::ConfigurableLine::RtcWakeup);

        let now = rtc.now();
        let time = WallTime {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            day: now.day() as u8,
            weekday: Weekday::from_days_from_sunday(now.weekday().num_days_from_sunday() as u8),
        };

        let new_minute = *cx.local.minute != Some(time.minute);
        *cx.local.minute = Some(time.minute);

        let battery = if new_minute {
            let raw: Option<u16> = cx.local.adc.read(cx.local.vref).ok();
            raw.map(|raw| BatteryState {
                charge: Voltage::from(raw).charge(),
                charging: cx.local.charging.is_low().unwrap_or(false),
            })
        } else {
            None
        };

        let display = cx.local.display;

        cx.shared.face.lock(|face| {
            if let Some(battery) = battery {
                face.on_battery(battery);
            }

            let idle = face.tick_unit() == TickUnit::Minute && !new_minute;
            if idle && !face.is_dirty() {
                return;
            }

            face.on_tick(time);
            let _ = face.render(display);

            if display.flush().is_err() {
                defmt::warn!("display flush failed");
            }
        });
    }

    /// Alarm button flips inverted colours
    #[task(binds = EXTI2_3, shared = [face, store], local = [alarm])]
    fn alarm(cx: alarm::Context) {
        buttons::unpend(cx.local.alarm.pin_number());

        (cx.shared.face, cx.shared.store).lock(|face, store| face.toggle(buttons::ALARM, store));
    }

    /// Mode button flips halftone
    #[task(binds = EXTI4_15, shared = [face, store], local = [mode])]
    fn mode(cx: mode::Context) {
        buttons::unpend(cx.local.mode.pin_number());

        (cx.shared.face, cx.shared.store).lock(|face, store| face.toggle(buttons::MODE, store));
    }
}
