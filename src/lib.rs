/*!
# LCD 1602 Parallel Driver

Write-only driver for HD44780 compatible character LCDs, over a 4-pin or 8-pin parallel bus.

The bus is never read: RW is held low all the time, and every command is followed by a fixed
wait instead of polling the busy flag. Waits are generous (milliseconds), so the driver is slow,
but it works without any timing tuning.

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include a parallel sender, with 2 bus widths:
    * 4-pin: [`sender::ParallelSender::new_4pin`]
    * 8-pin: [`sender::ParallelSender::new_8pin`]

    You can also use any driver implemented [`sender::SendCommand`].
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] with a [`lcd::Config`] to create a [`lcd::Lcd`].
   No pin is touched here, an invalid config is returned as [`Error::InvalidConfig`]
<br/>
<br/>
3. Call [`lcd::Lcd::begin()`] once to run the power-on sequence
<br/>
<br/>
4. use any methods provide by [`lcd::Lcd`] to control LCD1602

```ignore
let mut sender = ParallelSender::new_4pin(rs, rw, en, db4, db5, db6, db7);
let mut lcd = Lcd::new(&mut sender, &mut delayer, Config::default())?;
lcd.begin()?;
lcd.set_cursor_pos((3, 1))?;
lcd.write_bytes_to_cur(b"hello\0")?;
```
*/

#![no_std]
#![warn(missing_docs)]

use core::fmt;

pub mod command;
pub mod lcd;
pub mod sender;
mod state;
#[cfg(test)]
mod test_utils;
pub mod utils;

/// Errors of this driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A pin of the bus refused to change level
    Pin(E),
    /// The [`lcd::Config`] doesn't describe a display the controller can drive
    InvalidConfig,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin error: {:?}", e),
            Error::InvalidConfig => f.write_str("invalid display config"),
        }
    }
}
