use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    command::{Command, DataWidth, RegisterSelection},
    utils::BitOps,
};

use super::{SendCommand, ENABLE_PULSE_MS};

/// Parallel bus writer, with 4 (DB4~DB7) or 8 (DB0~DB7) data pins.
///
/// Use [`ParallelSender::new_4pin`] or [`ParallelSender::new_8pin`] to pick the bus width,
/// each width has its own [`SendCommand`] implementation.
pub struct ParallelSender<ControlPin, DBPin, const PIN_CNT: usize>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
{
    rs_pin: ControlPin,
    rw_pin: ControlPin,
    en_pin: ControlPin,
    db_pins: [DBPin; PIN_CNT],
}

impl<ControlPin, DBPin> ParallelSender<ControlPin, DBPin, 4>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
{
    /// Wire up a 4 pin bus, DB0~DB3 of the LCD are left unconnected
    pub fn new_4pin(
        rs: ControlPin,
        rw: ControlPin,
        en: ControlPin,
        db4: DBPin,
        db5: DBPin,
        db6: DBPin,
        db7: DBPin,
    ) -> Self {
        Self {
            rs_pin: rs,
            rw_pin: rw,
            en_pin: en,
            db_pins: [db4, db5, db6, db7],
        }
    }

    /// Put lower 4 bits of `nibble` on DB4~DB7, then strobe EN
    pub fn write_nibble(
        &mut self,
        nibble: u8,
        delayer: &mut impl DelayNs,
    ) -> Result<(), ControlPin::Error> {
        self.push_bits(nibble.low_nibble())?;
        self.pulse_enable(delayer)
    }
}

impl<ControlPin, DBPin> ParallelSender<ControlPin, DBPin, 8>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
{
    /// Wire up a full 8 pin bus
    #[allow(clippy::too_many_arguments)]
    pub fn new_8pin(
        rs: ControlPin,
        rw: ControlPin,
        en: ControlPin,
        db0: DBPin,
        db1: DBPin,
        db2: DBPin,
        db3: DBPin,
        db4: DBPin,
        db5: DBPin,
        db6: DBPin,
        db7: DBPin,
    ) -> Self {
        Self {
            rs_pin: rs,
            rw_pin: rw,
            en_pin: en,
            db_pins: [db0, db1, db2, db3, db4, db5, db6, db7],
        }
    }
}

impl<ControlPin, DBPin, const PIN_CNT: usize> ParallelSender<ControlPin, DBPin, PIN_CNT>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
{
    /// Give back all the pins, in the order they were passed in
    pub fn free(self) -> (ControlPin, ControlPin, ControlPin, [DBPin; PIN_CNT]) {
        (self.rs_pin, self.rw_pin, self.en_pin, self.db_pins)
    }

    // bit n of raw_bits goes to n-th data pin
    fn push_bits(&mut self, raw_bits: u8) -> Result<(), ControlPin::Error> {
        self.db_pins
            .iter_mut()
            .enumerate()
            .try_for_each(|(index, pin)| pin.set_state(raw_bits.check_bit(index as u8).into()))
    }

    /// Strobe EN: high, low, high again.
    ///
    /// LCD latches the bus on the falling edge, EN is left high on return,
    /// next push_bits happens while EN is still high.
    pub(crate) fn pulse_enable(
        &mut self,
        delayer: &mut impl DelayNs,
    ) -> Result<(), ControlPin::Error> {
        self.en_pin.set_high()?;
        delayer.delay_ms(ENABLE_PULSE_MS);
        self.en_pin.set_low()?;
        delayer.delay_ms(ENABLE_PULSE_MS);
        self.en_pin.set_high()
    }

    fn select_register(&mut self, rs: RegisterSelection) -> Result<(), ControlPin::Error> {
        match rs {
            RegisterSelection::Command => self.rs_pin.set_low()?,
            RegisterSelection::Data => self.rs_pin.set_high()?,
        }
        // always write
        self.rw_pin.set_low()
    }

    fn idle(&mut self) -> Result<(), ControlPin::Error> {
        self.en_pin.set_low()?;
        self.rs_pin.set_low()?;
        self.rw_pin.set_low()
    }
}

impl<ControlPin, DBPin, Delayer> SendCommand<Delayer> for ParallelSender<ControlPin, DBPin, 4>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
    Delayer: DelayNs,
{
    type Error = ControlPin::Error;

    fn data_width(&self) -> DataWidth {
        DataWidth::Bit4
    }

    fn release_bus(&mut self) -> Result<(), Self::Error> {
        self.idle()
    }

    fn send(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
    ) -> Result<(), Self::Error> {
        let command = command.into();
        let raw_bits = command.get_data();

        self.select_register(command.get_register_selection())?;

        // high nibble first, this is how 4 pin mode is wired
        self.write_nibble(raw_bits.high_nibble(), delayer)?;
        self.write_nibble(raw_bits.low_nibble(), delayer)
    }
}

impl<ControlPin, DBPin, Delayer> SendCommand<Delayer> for ParallelSender<ControlPin, DBPin, 8>
where
    ControlPin: OutputPin,
    DBPin: OutputPin<Error = ControlPin::Error>,
    Delayer: DelayNs,
{
    type Error = ControlPin::Error;

    fn data_width(&self) -> DataWidth {
        DataWidth::Bit8
    }

    fn release_bus(&mut self) -> Result<(), Self::Error> {
        self.idle()
    }

    fn send(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
    ) -> Result<(), Self::Error> {
        let command = command.into();

        self.select_register(command.get_register_selection())?;
        self.push_bits(command.get_data())?;
        self.pulse_enable(delayer)
    }
}
