use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, Font, LineMode, MoveDirection, ShiftType, State},
    lcd::Lcd,
    sender::SendCommand,
    state::LcdState,
    Error,
};

/// Wait with all control lines low, before the first command
pub const POWER_ON_DELAY_MS: u32 = 10;
/// Wait after each configuration command of the power-on sequence
pub const SETTLE_DELAY_MS: u32 = 5;
/// Extra wait at the end of the power-on sequence
pub const STARTUP_MARGIN_MS: u32 = 500;

/// [`Config`] is the init config of a [`Lcd`]
///
/// Default is a 16x2 display, 5x8 font, with display, cursor and cursor blink all on
#[derive(Default, Clone, Copy)]
pub struct Config {
    state: LcdState,
}

#[allow(missing_docs)]
impl Config {
    /// Visible columns per row
    pub fn get_line_capacity(&self) -> u8 {
        self.state.get_line_capacity()
    }

    /// Visible columns per row, at most 40 in two line mode and 80 in one line mode
    pub fn set_line_capacity(mut self, columns: u8) -> Self {
        self.state.set_line_capacity(columns);
        self
    }

    pub fn get_line_mode(&self) -> LineMode {
        self.state.get_line_mode()
    }

    pub fn set_line_mode(mut self, line: LineMode) -> Self {
        self.state.set_line_mode(line);
        self
    }

    pub fn get_font(&self) -> Font {
        self.state.get_font()
    }

    /// [`Font::Font5x11`] is only usable in [`LineMode::OneLine`]
    pub fn set_font(mut self, font: Font) -> Self {
        self.state.set_font(font);
        self
    }

    pub fn get_display_state(&self) -> State {
        self.state.get_display_state()
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.state.set_display_state(display);
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.state.get_cursor_state()
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.state.set_cursor_state(cursor);
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.state.get_cursor_blink()
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.state.set_cursor_blink(blink);
        self
    }

    pub fn get_wrap_addressing(&self) -> State {
        self.state.get_wrap_addressing()
    }

    /// When [`State::On`], writing past the end of a row also sends the DDRAM address
    /// of the next row, so the LCD follows the cursor wrap.
    ///
    /// Default is [`State::Off`]: the wrap is bookkeeping only, and the LCD keeps
    /// writing into the invisible part of the current DDRAM line until the next
    /// [`Lcd::set_cursor_pos`].
    pub fn set_wrap_addressing(mut self, wrap_addressing: State) -> Self {
        self.state.set_wrap_addressing(wrap_addressing);
        self
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, cursor starts at top left.
    ///
    /// Nothing is sent to hardware, call [`Lcd::begin`] to initialize it.
    /// Returns [`Error::InvalidConfig`] if `config` can't describe a real display.
    pub fn new(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Result<Self, Error<Sender::Error>> {
        let state = config.state;

        if !state.is_valid() {
            return Err(Error::InvalidConfig);
        }

        Ok(Lcd {
            sender,
            delayer,
            state,
        })
    }

    /// Run the power-on sequence.
    ///
    /// Every step is followed by a fixed wait, there is no busy flag check,
    /// and no step is ever retried.
    pub fn begin(&mut self) -> Result<(), Error<Sender::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("lcd init 1/7: release bus");

        self.sender.release_bus().map_err(Error::Pin)?;
        self.delayer.delay_ms(POWER_ON_DELAY_MS);

        let function_set = CommandSet::FunctionSet(
            self.sender.data_width(),
            self.state.get_line_mode(),
            self.state.get_font(),
        );
        let display_on_off = CommandSet::DisplayOnOff {
            display: self.state.get_display_state(),
            cursor: self.state.get_cursor_state(),
            cursor_blink: self.state.get_cursor_blink(),
        };
        let entry_mode =
            CommandSet::EntryModeSet(MoveDirection::LeftToRight, ShiftType::CursorOnly);

        for (_step, command) in [function_set, display_on_off, entry_mode]
            .into_iter()
            .enumerate()
        {
            #[cfg(feature = "defmt")]
            defmt::debug!("lcd init {=usize}/7: {}", _step + 2, command);

            self.sender
                .send_and_wait(command, self.delayer, SETTLE_DELAY_MS)
                .map_err(Error::Pin)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd init 5/7 and 6/7: clean display, return home");

        self.clean_display()?;
        self.return_home()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("lcd init 7/7: wait {=u32} ms", STARTUP_MARGIN_MS);

        self.delayer.delay_ms(STARTUP_MARGIN_MS);
        Ok(())
    }
}
