//! Common tools

use embedded_hal::digital::PinState;

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

impl From<BitState> for PinState {
    fn from(bit: BitState) -> Self {
        match bit {
            BitState::Clear => PinState::Low,
            BitState::Set => PinState::High,
        }
    }
}

impl From<bool> for BitState {
    fn from(set: bool) -> Self {
        match set {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }
}

/// Simple bit ops on a byte
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8);
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8);
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> BitState;
    /// Write `state` into bit `pos`
    fn put_bit(&mut self, pos: u8, state: BitState) {
        match state {
            BitState::Set => self.set_bit(pos),
            BitState::Clear => self.clear_bit(pos),
        }
    }
    /// Upper 4 bits, shifted down to bit 0..=3
    fn high_nibble(&self) -> u8;
    /// Lower 4 bits
    fn low_nibble(&self) -> u8;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        *self |= 1u8 << pos;
    }

    fn clear_bit(&mut self, pos: u8) {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        *self &= !(1u8 << pos);
    }

    fn check_bit(&self, pos: u8) -> BitState {
        debug_assert!(pos <= 7, "bit offset larger than 7");
        BitState::from((*self >> pos) & 1 == 1)
    }

    fn high_nibble(&self) -> u8 {
        *self >> 4
    }

    fn low_nibble(&self) -> u8 {
        *self & 0b1111
    }
}
