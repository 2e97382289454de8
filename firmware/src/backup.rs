//! Settings kept in RTC backup register 1, which survives a reset as long as the RTC is powered.
//!
//! Bits 0-5 hold the value of each setting and bits 8-13 mark which settings have been written.
//! Register 0 is left to the ADC calibration.

use segface::config::{SettingKey, SettingsStore};
use stm32l0xx_hal::pac::{rtc::RegisterBlock, RTC};
use stm32l0xx_hal::rtc::Rtc;

const REGISTER: usize = 1;
const WRITTEN: u32 = 8;

pub struct BackupStore {
    _rtc: (),
}

impl BackupStore {
    /// Borrowing the RTC makes sure it's running and the backup domain is writeable
    pub fn new(_rtc: &Rtc) -> Self {
        Self { _rtc: () }
    }

    fn registers(&self) -> &'static RegisterBlock {
        // Rtc owns the peripheral but has no backup register accessors. Only this store touches
        // register 1.
        unsafe { &*RTC::ptr() }
    }

    fn read(&self) -> u32 {
        self.registers().bkpr[REGISTER].read().bkp().bits()
    }

    fn write(&mut self, bits: u32) {
        self.registers().bkpr[REGISTER].write(|w| w.bkp().bits(bits));
    }
}

fn bit(key: SettingKey) -> u32 {
    let index = SettingKey::ALL
        .iter()
        .position(|&k| k == key)
        .unwrap_or_default();

    1 << index
}

impl SettingsStore for BackupStore {
    fn persisted_bool(&self, key: SettingKey, default: bool) -> bool {
        let bits = self.read();

        if bits & (bit(key) << WRITTEN) == 0 {
            default
        } else {
            bits & bit(key) != 0
        }
    }

    fn persist_bool(&mut self, key: SettingKey, value: bool) {
        let mut bits = self.read() | bit(key) << WRITTEN;

        if value {
            bits |= bit(key);
        } else {
            bits &= !bit(key);
        }

        self.write(bits);
        defmt::trace!("backup register {=u32:#x}", bits);
    }
}
