//! Built-in sender
//! If you want to drive the LCD through something else (a shift register, a port expander...),
//! you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::command::{Command, DataWidth};

mod parallel_sender;

pub use parallel_sender::ParallelSender;

/// Delay between the two edges of an enable pulse, and after the falling edge
pub const ENABLE_PULSE_MS: u32 = 1;

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// The bus is write only, nothing is ever read back, so there is no busy flag:
/// callers wait a fixed time after each command instead.
pub trait SendCommand<Delayer: DelayNs> {
    /// Error reported by the underlying pins
    type Error;

    /// The bus width this sender drives, goes into the Function Set command
    fn data_width(&self) -> DataWidth;

    /// Drive EN, RS and RW low, the idle state before the first command
    fn release_bus(&mut self) -> Result<(), Self::Error>;

    /// Put one [`Command`] on the bus and latch it
    fn send(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
    ) -> Result<(), Self::Error>;

    /// Send command, then wait `wait_ms` for the LCD to finish processing it
    fn send_and_wait(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
        wait_ms: u32,
    ) -> Result<(), Self::Error> {
        let command = command.into();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "send {} {=u8:#04x}, wait {=u32} ms",
            command.get_register_selection(),
            command.get_data(),
            wait_ms
        );

        self.send(command, delayer)?;
        delayer.delay_ms(wait_ms);
        Ok(())
    }
}
