#![allow(non_snake_case)]

use crate::error::ErrorDetail;

/// The number of keys on the CHIP-8 keypad.
const NUMBER_OF_KEYS: u8 = 16;

/// An abstraction of the state of the CHIP-8 keypad: which keys are
/// currently held, plus the `FX0A` release-triggered wait latch.
///
/// `FX0A` blocks until a key is *released*, not merely pressed — this gives a
/// deterministic edge signal even on a host that only polls key state and
/// cannot distinguish a held key from a newly pressed one. `waiting` is set
/// the first time an `FX0A` is encountered with no wait already pending;
/// `released` and
/// `last_released_key` are set by the host's call to [KeyState::clear_key]
/// and consumed the next time `FX0A` is re-decoded.
pub(crate) struct KeyState {
    keys_pressed: [bool; NUMBER_OF_KEYS as usize],
    pub(crate) waiting: bool,
    pub(crate) released: bool,
    pub(crate) last_released_key: u8,
}

impl KeyState {
    /// Constructor that returns a [KeyState] instance with no keys pressed
    /// and no `FX0A` wait pending.
    pub(crate) fn new() -> Self {
        KeyState {
            keys_pressed: [false; NUMBER_OF_KEYS as usize],
            waiting: false,
            released: false,
            last_released_key: 0,
        }
    }

    /// Returns true if the specified key is pressed, false if the specified key is not
    /// pressed, and returns an [ErrorDetail::InvalidKey] if the specified key is invalid.
    ///
    /// # Arguments
    ///
    /// * `key` - the hex ordinal of the key (valid range 0x0 to 0xF inclusive)
    pub(crate) fn is_key_pressed(&self, key: u8) -> Result<bool, ErrorDetail> {
        match key {
            n if n < NUMBER_OF_KEYS => Ok(self.keys_pressed[n as usize]),
            _ => Err(ErrorDetail::InvalidKey { key }),
        }
    }

    /// Marks `key` as pressed; returns [ErrorDetail::InvalidKey] if `key` is
    /// out of range.
    pub(crate) fn set_key(&mut self, key: u8) -> Result<(), ErrorDetail> {
        match key {
            n if n < NUMBER_OF_KEYS => {
                self.keys_pressed[n as usize] = true;
                Ok(())
            }
            _ => Err(ErrorDetail::InvalidKey { key }),
        }
    }

    /// Marks `key` as released, and — regardless of whether an `FX0A` is
    /// currently pending — latches it as the most recently released key.
    /// Returns [ErrorDetail::InvalidKey] if `key` is out of range.
    pub(crate) fn clear_key(&mut self, key: u8) -> Result<(), ErrorDetail> {
        match key {
            n if n < NUMBER_OF_KEYS => {
                self.keys_pressed[n as usize] = false;
                self.released = true;
                self.last_released_key = key;
                Ok(())
            }
            _ => Err(ErrorDetail::InvalidKey { key }),
        }
    }
}
