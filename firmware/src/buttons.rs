use stm32l0xx_hal::exti::{Exti, ExtiLine, GpioLine, TriggerEdge};
use stm32l0xx_hal::gpio::{gpioa::PA2, gpiob::PB9, Input, PullDown};
use stm32l0xx_hal::syscfg::SYSCFG;

use segface::SettingKey;

pub type AlarmBtn = PA2<Input<PullDown>>;
pub type ModeBtn = PB9<Input<PullDown>>;

/// The setting each button flips
pub const ALARM: SettingKey = SettingKey::Invert;
pub const MODE: SettingKey = SettingKey::Halftone;

/// Setup button interrupts
///
/// The alarm button is on interrupt `EXTI2_3` and the mode button is on interrupt `EXTI4_15`
pub fn init(alarm: &AlarmBtn, mode: &ModeBtn, exti: &mut Exti, syscfg: &mut SYSCFG) {
    for (port, pin) in [(alarm.port(), alarm.pin_number()), (mode.port(), mode.pin_number())] {
        if let Some(line) = GpioLine::from_raw_line(pin) {
            exti.listen_gpio(syscfg, port, line, TriggerEdge::Rising);
        }
    }
}

/// Clear a button's pending interrupt
pub fn unpend(pin: u8) {
    if let Some(line) = GpioLine::from_raw_line(pin) {
        Exti::unpend(line);
    }
}
