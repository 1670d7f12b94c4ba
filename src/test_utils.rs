//! Fakes for the pin and delay providers, shared by unit tests

extern crate std;

use core::cell::RefCell;
use std::{rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, ErrorKind, ErrorType, OutputPin},
};

use crate::{
    command::{Command, DataWidth},
    sender::SendCommand,
};

/// What happened on the fake bus, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Released,
    Sent(Command),
    Waited(u32),
}

pub(crate) type Journal = Rc<RefCell<Vec<Step>>>;

#[derive(Default)]
pub(crate) struct RecordingDelay {
    pub(crate) delays_ms: Vec<u32>,
    journal: Option<Journal>,
}

impl RecordingDelay {
    pub(crate) fn with_journal(journal: &Journal) -> Self {
        Self {
            delays_ms: Vec::new(),
            journal: Some(journal.clone()),
        }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(Step::Waited(ms));
        }
    }
}

/// A sender that only writes down what it was asked to send
pub(crate) struct RecordingSender {
    journal: Journal,
    data_width: DataWidth,
    broken: bool,
}

impl RecordingSender {
    pub(crate) fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            data_width: DataWidth::Bit4,
            broken: false,
        }
    }

    pub(crate) fn broken(journal: &Journal) -> Self {
        Self {
            broken: true,
            ..Self::new(journal)
        }
    }

    pub(crate) fn with_data_width(mut self, data_width: DataWidth) -> Self {
        self.data_width = data_width;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BusFault;

impl<Delayer: DelayNs> SendCommand<Delayer> for RecordingSender {
    type Error = BusFault;

    fn data_width(&self) -> DataWidth {
        self.data_width
    }

    fn release_bus(&mut self) -> Result<(), Self::Error> {
        if self.broken {
            return Err(BusFault);
        }
        self.journal.borrow_mut().push(Step::Released);
        Ok(())
    }

    fn send(
        &mut self,
        command: impl Into<Command>,
        _delayer: &mut Delayer,
    ) -> Result<(), Self::Error> {
        if self.broken {
            return Err(BusFault);
        }
        self.journal.borrow_mut().push(Step::Sent(command.into()));
        Ok(())
    }
}

/// One level change on a named pin, or a wait, as seen on the bus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BusEvent {
    Level(&'static str, bool),
    Waited(u32),
}

type EventList = Rc<RefCell<Vec<BusEvent>>>;

/// Every pin and delay handed out by the same log writes into one ordered list
#[derive(Default)]
pub(crate) struct BusLog {
    events: EventList,
}

impl BusLog {
    pub(crate) fn pin(&self, name: &'static str) -> LoggedPin {
        LoggedPin {
            name,
            events: Some(self.events.clone()),
        }
    }

    pub(crate) fn delay(&self) -> LoggedDelay {
        LoggedDelay {
            events: self.events.clone(),
        }
    }

    pub(crate) fn events(&self) -> Vec<BusEvent> {
        self.events.borrow().clone()
    }
}

pub(crate) struct LoggedDelay {
    events: EventList,
}

impl DelayNs for LoggedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.borrow_mut().push(BusEvent::Waited(ms));
    }
}

pub(crate) struct LoggedPin {
    name: &'static str,
    events: Option<EventList>,
}

impl LoggedPin {
    /// A pin whose every write fails
    pub(crate) fn broken() -> Self {
        Self {
            name: "broken",
            events: None,
        }
    }

    fn record(&mut self, high: bool) -> Result<(), PinFault> {
        match &self.events {
            Some(events) => {
                events.borrow_mut().push(BusEvent::Level(self.name, high));
                Ok(())
            }
            None => Err(PinFault),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for LoggedPin {
    type Error = PinFault;
}

impl OutputPin for LoggedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true)
    }
}
