//! Separator blinking
//!
//! The separator is drawn first and toggled afterwards, so the very first frame always shows it.
//! With blinking off it stays visible.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    hidden: bool,
    enabled: bool,
}

impl Blink {
    pub const fn new(enabled: bool) -> Self {
        Self {
            hidden: false,
            enabled,
        }
    }

    /// Visibility for the frame being drawn now. Advances the phase when blinking is enabled.
    pub fn tick(&mut self) -> bool {
        let visible = !self.hidden;

        if self.enabled {
            self.hidden = !self.hidden;
        }

        visible
    }

    /// Visibility the next [`tick`](Self::tick) will report
    pub const fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning blinking off leaves the separator visible
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if !enabled {
            self.hidden = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_visible() {
        assert!(Blink::new(true).tick());
        assert!(Blink::new(false).tick());
    }

    #[test]
    fn enabled_alternates_with_period_two() {
        let mut blink = Blink::new(true);
        let frames: Vec<bool> = (0..6).map(|_| blink.tick()).collect();
        assert_eq!(frames, [true, false, true, false, true, false]);
    }

    #[test]
    fn disabled_is_constant() {
        let mut blink = Blink::new(false);
        assert!((0..25).all(|_| blink.tick()));
    }

    #[test]
    fn disabling_forces_visible() {
        let mut blink = Blink::new(true);
        blink.tick();
        assert!(!blink.is_visible());

        blink.set_enabled(false);
        assert!(blink.is_visible());
        assert!(blink.tick());
        assert!(blink.tick());
    }
}
