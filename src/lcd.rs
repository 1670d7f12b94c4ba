//! The display itself: cursor bookkeeping and character output

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, Font, LineMode, MoveDirection, ShiftType, State},
    sender::SendCommand,
    state::LcdState,
    Error,
};

mod init;

pub use init::{Config, POWER_ON_DELAY_MS, SETTLE_DELAY_MS, STARTUP_MARGIN_MS};

/// Wait after every command outside of the power-on sequence
pub const COMMAND_DELAY_MS: u32 = 1;

/// A LCD1602 (or any HD44780 compatible display) on a write-only bus
///
/// It borrows the sender and the delayer, so they stay owned by the caller,
/// and no other code can touch the bus while a [`Lcd`] is alive.
pub struct Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
    state: LcdState,
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn send(&mut self, command: CommandSet) -> Result<(), Error<Sender::Error>> {
        self.sender
            .send_and_wait(command, self.delayer, COMMAND_DELAY_MS)
            .map_err(Error::Pin)
    }

    /// Clean all characters on display, cursor goes back to top left
    pub fn clean_display(&mut self) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::ClearDisplay)?;
        self.state.set_cursor_pos((0, 0));
        Ok(())
    }

    /// Cursor goes back to top left, and display shift is undone, characters are kept
    pub fn return_home(&mut self) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::ReturnHome)?;
        self.state.set_cursor_pos((0, 0));
        Ok(())
    }

    /// Move cursor to `pos`, which is `(column, row)`
    ///
    /// Out of range values are not rejected, they wrap around:
    /// column modulo [`Lcd::get_line_capacity`], row modulo [`Lcd::get_rows`]
    pub fn set_cursor_pos(&mut self, pos: (u8, u8)) -> Result<(), Error<Sender::Error>> {
        let wrapped_pos = self.state.wrap_pos(pos);

        #[cfg(feature = "defmt")]
        if wrapped_pos != pos {
            defmt::trace!("cursor {} wrapped to {}", pos, wrapped_pos);
        }

        self.send(CommandSet::SetDDRAM(self.state.ddram_addr(wrapped_pos)))?;
        self.state.set_cursor_pos(wrapped_pos);
        Ok(())
    }

    /// Current cursor position, as `(column, row)`
    pub fn get_cursor_pos(&self) -> (u8, u8) {
        self.state.get_cursor_pos()
    }

    /// Write a raw byte to current position, then move the cursor forward.
    ///
    /// Past the last column the cursor goes to the start of next row,
    /// past the last cell of the display it goes back to top left.
    pub fn write_u8_to_cur(&mut self, byte: impl Into<u8>) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::WriteDataToRAM(byte.into()))?;
        self.follow_cursor(MoveDirection::LeftToRight)
    }

    /// Write bytes one by one, stop at the first `0` byte or at the end of slice
    ///
    /// `0` is a terminator here, it's never sent, so CGRAM character 0 can't be written this way
    pub fn write_bytes_to_cur(&mut self, bytes: &[u8]) -> Result<(), Error<Sender::Error>> {
        bytes
            .iter()
            .take_while(|&&byte| byte != 0)
            .try_for_each(|&byte| self.write_u8_to_cur(byte))
    }

    /// write [char] to current position
    /// In default implementation, character only support
    /// from ASCII 0x20 (white space) to ASCII 0x7D (`}`)
    pub fn write_char_to_cur(&mut self, char: char) -> Result<(), Error<Sender::Error>> {
        // map char out side of ASCII 0x20 and 0x7D to full rectangle
        let out_byte = match char.is_ascii() {
            true if (0x20 <= char as u8) && (char as u8 <= 0x7D) => char as u8,
            _ => 0xFF,
        };

        self.write_u8_to_cur(out_byte)
    }

    /// write string to current position
    pub fn write_str_to_cur(&mut self, str: &str) -> Result<(), Error<Sender::Error>> {
        str.chars()
            .try_for_each(|char| self.write_char_to_cur(char))
    }

    /// write a char to specific position
    pub fn write_char_to_pos(
        &mut self,
        char: char,
        pos: (u8, u8),
    ) -> Result<(), Error<Sender::Error>> {
        self.set_cursor_pos(pos)?;
        self.write_char_to_cur(char)
    }

    /// write string to specific position
    pub fn write_str_to_pos(
        &mut self,
        str: &str,
        pos: (u8, u8),
    ) -> Result<(), Error<Sender::Error>> {
        self.set_cursor_pos(pos)?;
        self.write_str_to_cur(str)
    }

    /// Move the cursor, or scroll the whole display, by one cell
    ///
    /// Display scrolling doesn't change what the cursor position means, so it's kept as is
    pub fn shift_cursor_or_display(
        &mut self,
        shift_type: ShiftType,
        dir: MoveDirection,
    ) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::CursorOrDisplayShift(shift_type, dir))?;

        match shift_type {
            ShiftType::CursorOnly => self.follow_cursor(dir),
            ShiftType::CursorAndDisplay => Ok(()),
        }
    }

    // the LCD steps its address counter by itself, mimic it here.
    // when wrap addressing is on, and our next cell isn't where the LCD went, tell it
    fn follow_cursor(&mut self, dir: MoveDirection) -> Result<(), Error<Sender::Error>> {
        let last_addr = self.state.ddram_addr(self.state.get_cursor_pos());

        self.state.shift_cursor(dir);

        if self.state.get_wrap_addressing() == State::Off {
            return Ok(());
        }

        let lcd_addr = match dir {
            MoveDirection::LeftToRight => last_addr.wrapping_add(1),
            MoveDirection::RightToLeft => last_addr.wrapping_sub(1),
        };
        let new_addr = self.state.ddram_addr(self.state.get_cursor_pos());

        if lcd_addr != new_addr {
            self.send(CommandSet::SetDDRAM(new_addr))?;
        }
        Ok(())
    }

    fn send_display_on_off(&mut self) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::DisplayOnOff {
            display: self.get_display_state(),
            cursor: self.get_cursor_state(),
            cursor_blink: self.get_cursor_blink_state(),
        })
    }

    /// Turn entire display on or off, DDRAM content is kept
    pub fn set_display_state(&mut self, display: State) -> Result<(), Error<Sender::Error>> {
        self.state.set_display_state(display);
        self.send_display_on_off()
    }

    #[allow(missing_docs)]
    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    /// Show or hide the underline cursor
    pub fn set_cursor_state(&mut self, cursor: State) -> Result<(), Error<Sender::Error>> {
        self.state.set_cursor_state(cursor);
        self.send_display_on_off()
    }

    #[allow(missing_docs)]
    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    /// Blink the cell under cursor, or not
    pub fn set_cursor_blink_state(&mut self, blink: State) -> Result<(), Error<Sender::Error>> {
        self.state.set_cursor_blink(blink);
        self.send_display_on_off()
    }

    #[allow(missing_docs)]
    pub fn get_cursor_blink_state(&self) -> State {
        self.state.get_cursor_blink()
    }

    #[allow(missing_docs)]
    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    #[allow(missing_docs)]
    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    /// Visible columns per row
    pub fn get_line_capacity(&self) -> u8 {
        self.state.get_line_capacity()
    }

    /// Visible rows
    pub fn get_rows(&self) -> u8 {
        self.state.get_rows()
    }

    /// Wait for specified milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }
}

impl<'a, 'b, Sender, Delayer> fmt::Write for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_str_to_cur(s).map_err(|_| fmt::Error)
    }
}
