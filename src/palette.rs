use std::{
    collections::HashMap,
    sync::Mutex,
};

use crate::error::{ Error, ErrorKind, Result };

use image::Rgba;
use serde::{
    de::{ self, Deserialize, Deserializer },
    ser::{ Serialize, Serializer },
};

/// Color used before any interaction has picked one.
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fixed frame palette, addressed by a 1-based button selector.
pub const PALETTE: [Rgba<u8>; 4] = [
    Rgba([0, 128, 0, 255]),   // green
    Rgba([128, 0, 128, 255]), // purple
    Rgba([255, 0, 0, 255]),   // red
    Rgba([0, 0, 255, 255]),   // blue
];

/// Maps a button selector to its palette entry. Selectors outside 1..=4
/// have no entry and must leave the stored color untouched.
pub fn color_for(selector: i32) -> Option<Rgba<u8>> {
    if selector < 1 {
        return None;
    }
    PALETTE.get(selector as usize - 1).copied()
}

/// Whether every client shares one canvas color or each cast gets its own.
/// Spelled `"shared"` / `"per-cast"` in configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorScope {
    Shared,
    PerCast,
}

impl ColorScope {
    fn as_str(self) -> &'static str {
        match self {
            ColorScope::Shared => "shared",
            ColorScope::PerCast => "per-cast",
        }
    }
}

// String-based so that the config crate can read it, like the log level.
impl Serialize for ColorScope {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorScope {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where D: Deserializer<'de> {
        let scope = String::deserialize(deserializer)?;
        match scope.as_str() {
            "shared" => Ok(ColorScope::Shared),
            "per-cast" => Ok(ColorScope::PerCast),
            other => Err(de::Error::unknown_variant(other, &["shared", "per-cast"])),
        }
    }
}

/// Owns the mutable color state for both handlers. Writers race for the
/// last word, but a reader can never observe a torn value.
pub struct ColorStore {
    scope: ColorScope,
    shared: Mutex<Rgba<u8>>,
    per_cast: Mutex<HashMap<u64, Rgba<u8>>>,
}

impl ColorStore {
    pub fn new(scope: ColorScope) -> Self {
        Self {
            scope,
            shared: Mutex::new(DEFAULT_COLOR),
            per_cast: Mutex::new(HashMap::new()),
        }
    }

    pub fn scope(&self) -> ColorScope {
        self.scope
    }

    pub fn set(&self, cast: u64, color: Rgba<u8>) -> Result<()> {
        match self.scope {
            ColorScope::Shared => {
                let mut current = self.shared.lock().map_err(|_| Error::new(ErrorKind::StateLock))?;
                *current = color;
            }
            ColorScope::PerCast => {
                let mut colors = self.per_cast.lock().map_err(|_| Error::new(ErrorKind::StateLock))?;
                colors.insert(cast, color);
            }
        }
        Ok(())
    }

    pub fn get(&self, cast: Option<u64>) -> Result<Rgba<u8>> {
        match self.scope {
            ColorScope::Shared => {
                let current = self.shared.lock().map_err(|_| Error::new(ErrorKind::StateLock))?;
                Ok(*current)
            }
            ColorScope::PerCast => {
                let colors = self.per_cast.lock().map_err(|_| Error::new(ErrorKind::StateLock))?;
                Ok(cast.and_then(|fid| colors.get(&fid).copied()).unwrap_or(DEFAULT_COLOR))
            }
        }
    }
}
