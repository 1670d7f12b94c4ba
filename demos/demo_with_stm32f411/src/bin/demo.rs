//! Drive LCD1602 with a STM32F411RET6 in 4 Pin Mode
//!
//! Wiring diagram
//!
//! LCD1602 <-> STM32F411RET6
//!     Vss <-> GND
//!     Vdd <-> 5V (It is best to use an external source for the 5V pin, such as the 5V output from a DAPLink device or USB.)
//!      V0 <-> potentiometer <-> 5V & GND (to adjust the display contrast)
//!      RS <-> PA0
//!      RW <-> PA1
//!      EN <-> PA2 (and optionally connect to a 4.7 kOhm Pulldown resistor, to stable voltage level when STM32 reset)
//!      D4 <-> PA3
//!      D5 <-> PA4
//!      D6 <-> PA5
//!      D7 <-> PA6
//!       A <-> 5V
//!       K <-> GND

#![no_std]
#![no_main]

use core::fmt::Write;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use lcd1602_parallel::{
    command::{MoveDirection, ShiftType, State},
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

    // the bus is never read, so every pin can be push-pull
    let rs_pin = gpioa.pa0.into_push_pull_output().erase();
    let rw_pin = gpioa.pa1.into_push_pull_output().erase();
    let en_pin = gpioa.pa2.into_push_pull_output().erase();

    let db4_pin = gpioa.pa3.into_push_pull_output().erase();
    let db5_pin = gpioa.pa4.into_push_pull_output().erase();
    let db6_pin = gpioa.pa5.into_push_pull_output().erase();
    let db7_pin = gpioa.pa6.into_push_pull_output().erase();

    let mut sender =
        ParallelSender::new_4pin(rs_pin, rw_pin, en_pin, db4_pin, db5_pin, db6_pin, db7_pin);

    let config = Config::default().set_cursor_blink(State::Off);

    let mut lcd = Lcd::new(&mut sender, &mut delayer, config).expect("16x2 is a valid config");

    // GPIO of stm32f4xx-hal is infallible
    lcd.begin().unwrap();
    rprintln!("LCD ready");

    // zero byte ends the string, "!!!" never reaches the screen
    lcd.set_cursor_pos((1, 0)).unwrap();
    lcd.write_bytes_to_cur(b"hello,\0!!!").unwrap();

    // column 17 on a 16 column display wraps to column 1
    lcd.set_cursor_pos((17, 1)).unwrap();
    lcd.write_str_to_cur("world!").unwrap();

    lcd.delay_ms(1_000);

    // tilde isn't in CGROM of LCD1602A, it's displayed as a full rectangle
    lcd.write_char_to_pos('~', (15, 0)).unwrap();

    let mut counter: u32 = 0;
    loop {
        lcd.delay_ms(1_000);
        counter = counter.wrapping_add(1);

        lcd.set_cursor_pos((8, 1)).unwrap();
        write!(lcd, "{:>7}s", counter % 10_000_000).unwrap();

        rprintln!("tick {}, cursor at {:?}", counter, lcd.get_cursor_pos());

        if counter % 10 == 0 {
            lcd.shift_cursor_or_display(ShiftType::CursorAndDisplay, MoveDirection::RightToLeft)
                .unwrap();
        }
    }
}
