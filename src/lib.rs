//! ds1307 RTC abstractions and API
//!
//! Platform-agnostic driver for the DS1307 real-time clock. The chip keeps
//! seconds through a two-digit year in seven BCD registers behind an I2C
//! interface, with 56 bytes of battery-backed scratch RAM after them.
//!
//! The driver is generic over [`embedded_hal::i2c::I2c`], so it runs on any
//! blocking HAL. It always operates the chip in 24-hour mode. Calendar
//! arithmetic (day counts, weekday, elapsed seconds) is implemented from
//! scratch in [`calendar`]; the driver never validates field values against
//! the calendar, that is left to callers.
//!
//! Datasheet: <https://datasheets.maximintegrated.com/en/ds/DS1307.pdf>
#![cfg_attr(not(test), no_std)]

pub mod bcd;
pub mod bus;
pub mod calendar;
pub mod datetime;
pub mod rtc;

pub use bus::{Error, Register, RAM_SIZE};
pub use calendar::Weekday;
pub use datetime::DateTime;
pub use rtc::DS1307;
