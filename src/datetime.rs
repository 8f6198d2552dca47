//! The plain time and date record

use ufmt::{uDisplay, uWrite, Formatter};

/// One complete reading of the clock's time and date registers
///
/// Six bare fields. The driver neither validates them against the calendar
/// nor keeps them consistent; a representable-but-nonsensical date such as
/// 31 February passes through untouched. Calendar arithmetic over a record
/// lives in [`crate::calendar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTime {
    /// Seconds, 0 to 59
    pub second: u8,
    /// Minutes, 0 to 59
    pub minute: u8,
    /// Hours, 0 to 23 (the chip runs in 24-hour mode)
    pub hour: u8,
    /// Day of the month, 1 to 31
    pub day: u8,
    /// Month, 1 to 12
    pub month: u8,
    /// Years since the epoch year, 0 to 99
    pub year: u8,
}

/// Renders as `hh:mm:ss-dd.mm.yy`, zero padded
impl uDisplay for DateTime {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        two_digits(f, self.hour)?;
        f.write_char(':')?;
        two_digits(f, self.minute)?;
        f.write_char(':')?;
        two_digits(f, self.second)?;
        f.write_char('-')?;
        two_digits(f, self.day)?;
        f.write_char('.')?;
        two_digits(f, self.month)?;
        f.write_char('.')?;
        two_digits(f, self.year)
    }
}

// ufmt has no zero-padding width specifier; every field is two digits
fn two_digits<W>(f: &mut Formatter<'_, W>, value: u8) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    f.write_char((b'0' + value / 10) as char)?;
    f.write_char((b'0' + value % 10) as char)
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use ufmt::{uwrite, uWrite};

    use super::DateTime;

    struct Sink(String);

    impl uWrite for Sink {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    fn rendered(dt: DateTime) -> String {
        let mut sink = Sink(String::new());
        uwrite!(sink, "{}", dt).unwrap();
        sink.0
    }

    #[test]
    fn renders_zero_padded() {
        let dt = DateTime {
            second: 5,
            minute: 9,
            hour: 7,
            day: 3,
            month: 1,
            year: 1,
        };
        assert_eq!(rendered(dt), "07:09:05-03.01.01");
    }

    #[test]
    fn renders_two_digit_fields_unpadded() {
        let dt = DateTime {
            second: 42,
            minute: 30,
            hour: 23,
            day: 31,
            month: 12,
            year: 99,
        };
        assert_eq!(rendered(dt), "23:30:42-31.12.99");
    }

    #[test]
    fn default_renders_all_zeros() {
        assert_eq!(rendered(DateTime::default()), "00:00:00-00.00.00");
    }
}
