//! # Settings
//!
//! Six boolean toggles configure the face. They live in a platform [`SettingsStore`] so they
//! survive restarts, are loaded once into [`Settings`] when the face starts and are updated by
//! configuration messages of the form `("halftone", "false")`.
//!
//! Rendering never reads the settings directly. Each frame gets an immutable [`RenderConfig`]
//! snapshot instead.

use heapless::LinearMap;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKey {
    /// Dark segments on a light background
    Invert,
    /// Draw unlit segments dimmed
    Halftone,
    /// Blink the separator every second
    Blink,
    /// Vibrate when bluetooth disconnects
    Vibrate,
    /// Show the date row
    ShowTop,
    /// Show the status row
    ShowBottom,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::Invert,
        SettingKey::Halftone,
        SettingKey::Blink,
        SettingKey::Vibrate,
        SettingKey::ShowTop,
        SettingKey::ShowBottom,
    ];

    /// Key used in storage and configuration messages
    pub const fn name(self) -> &'static str {
        match self {
            SettingKey::Invert => "invert",
            SettingKey::Halftone => "halftone",
            SettingKey::Blink => "blink",
            SettingKey::Vibrate => "vibrate",
            SettingKey::ShowTop => "showTop",
            SettingKey::ShowBottom => "showBottom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Value used when nothing has been stored yet
    pub const fn default_value(self) -> bool {
        !matches!(self, SettingKey::Invert)
    }
}

/// Durable key to boolean storage provided by the platform
pub trait SettingsStore {
    fn persisted_bool(&self, key: SettingKey, default: bool) -> bool;

    fn persist_bool(&mut self, key: SettingKey, value: bool);
}

/// A settings store that only lives in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: LinearMap<SettingKey, bool, 6>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn persisted_bool(&self, key: SettingKey, default: bool) -> bool {
        self.values.get(&key).copied().unwrap_or(default)
    }

    fn persist_bool(&mut self, key: SettingKey, value: bool) {
        // There is a slot for every key, so this can't run out of space
        let _ = self.values.insert(key, value);
    }
}

/// Everything the renderer needs to know for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    pub invert: bool,
    pub halftone: bool,
    pub blink: bool,
    pub show_top: bool,
    pub show_bottom: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Settings::default().render_config()
    }
}

/// The current value of every setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub invert: bool,
    pub halftone: bool,
    pub blink: bool,
    pub vibrate: bool,
    pub show_top: bool,
    pub show_bottom: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            invert: SettingKey::Invert.default_value(),
            halftone: SettingKey::Halftone.default_value(),
            blink: SettingKey::Blink.default_value(),
            vibrate: SettingKey::Vibrate.default_value(),
            show_top: SettingKey::ShowTop.default_value(),
            show_bottom: SettingKey::ShowBottom.default_value(),
        }
    }
}

impl Settings {
    /// Read every setting, using defaults for the ones never stored
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let mut settings = Self::default();

        for key in SettingKey::ALL {
            let value = store.persisted_bool(key, key.default_value());
            *settings.slot(key) = value;
        }

        debug!("settings loaded: {}", settings);
        settings
    }

    /// Write every setting back
    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        for key in SettingKey::ALL {
            store.persist_bool(key, self.get(key));
        }
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Invert => self.invert,
            SettingKey::Halftone => self.halftone,
            SettingKey::Blink => self.blink,
            SettingKey::Vibrate => self.vibrate,
            SettingKey::ShowTop => self.show_top,
            SettingKey::ShowBottom => self.show_bottom,
        }
    }

    /// Set `key`, returning whether the value changed
    pub fn apply(&mut self, key: SettingKey, value: bool) -> bool {
        let slot = self.slot(key);
        let changed = *slot != value;
        *slot = value;
        changed
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            invert: self.invert,
            halftone: self.halftone,
            blink: self.blink,
            show_top: self.show_top,
            show_bottom: self.show_bottom,
        }
    }

    fn slot(&mut self, key: SettingKey) -> &mut bool {
        match key {
            SettingKey::Invert => &mut self.invert,
            SettingKey::Halftone => &mut self.halftone,
            SettingKey::Blink => &mut self.blink,
            SettingKey::Vibrate => &mut self.vibrate,
            SettingKey::ShowTop => &mut self.show_top,
            SettingKey::ShowBottom => &mut self.show_bottom,
        }
    }
}

/// Parse a configuration message. Values are the strings `"true"` and `"false"`.
pub fn parse_message(key: &str, value: &str) -> Result<(SettingKey, bool), Error> {
    let key = SettingKey::from_name(key).ok_or(Error::UnknownSetting)?;

    let value = match value {
        "true" => true,
        "false" => false,
        _ => return Err(Error::InvalidValue),
    };

    Ok((key, value))
}
