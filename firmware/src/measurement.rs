use core::ops::Deref;
use stm32l0xx_hal::calibration::VrefintCal;

/// Millivolts VREFINT was calibrated against at the factory
const VREFINT_CAL_VREF: u32 = 3000;

/// Cell voltage at 0% and 100%, in millivolts
const EMPTY: u32 = 3300;
const FULL: u32 = 4150;

/// Supply voltage in millivolts, measured against VREFINT
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Voltage(u16);

impl From<u16> for Voltage {
    /// Convert a raw VREFINT reading into millivolts
    fn from(raw: u16) -> Self {
        let vrefint_cal = u32::from(VrefintCal::get().read());
        let millivolts = VREFINT_CAL_VREF * vrefint_cal / u32::from(raw.max(1));

        Self(millivolts.min(u32::from(u16::MAX)) as u16)
    }
}

impl Deref for Voltage {
    type Target = u16;

    fn deref(&self) -> &u16 {
        &self.0
    }
}

impl Voltage {
    /// Linear estimate of the remaining charge
    pub fn charge(&self) -> u8 {
        let millivolts = u32::from(self.0).clamp(EMPTY, FULL);
        ((millivolts - EMPTY) * 100 / (FULL - EMPTY)) as u8
    }
}
