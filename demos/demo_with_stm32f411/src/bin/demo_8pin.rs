//! Drive LCD1602 with a STM32F411RET6 in 8 Pin Mode
//!
//! Wiring diagram
//!
//! LCD1602 <-> STM32F411RET6
//!     Vss <-> GND
//!     Vdd <-> 5V
//!      V0 <-> potentiometer <-> 5V & GND (to adjust the display contrast)
//!      RS <-> PB0
//!      RW <-> PB1
//!      EN <-> PB2
//!  D0..D7 <-> PA0..PA7
//!       A <-> 5V
//!       K <-> GND

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use lcd1602_parallel::{
    command::State,
    lcd::{Config, Lcd},
    sender::ParallelSender,
};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA.split();
    let gpiob = dp.GPIOB.split();

    let rs_pin = gpiob.pb0.into_push_pull_output().erase();
    let rw_pin = gpiob.pb1.into_push_pull_output().erase();
    let en_pin = gpiob.pb2.into_push_pull_output().erase();

    let mut sender = ParallelSender::new_8pin(
        rs_pin,
        rw_pin,
        en_pin,
        gpioa.pa0.into_push_pull_output().erase(),
        gpioa.pa1.into_push_pull_output().erase(),
        gpioa.pa2.into_push_pull_output().erase(),
        gpioa.pa3.into_push_pull_output().erase(),
        gpioa.pa4.into_push_pull_output().erase(),
        gpioa.pa5.into_push_pull_output().erase(),
        gpioa.pa6.into_push_pull_output().erase(),
        gpioa.pa7.into_push_pull_output().erase(),
    );

    // let the LCD follow the cursor onto the second row by itself
    let config = Config::default()
        .set_cursor_state(State::Off)
        .set_cursor_blink(State::Off)
        .set_wrap_addressing(State::On);

    let mut lcd = Lcd::new(&mut sender, &mut delayer, config).expect("16x2 is a valid config");

    lcd.begin().unwrap();
    rprintln!("LCD ready, 8 pin bus");

    lcd.write_str_to_cur("This line is longer than 16 chars").unwrap();

    #[allow(clippy::empty_loop)]
    loop {}
}
