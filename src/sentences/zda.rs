use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{Error, FieldDecoder, Frame, SentenceType};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///        1         2  3  4    5  6
///        |         |  |  |    |  |
/// $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// 1. UTC time (hours, minutes, seconds, may have fractional subseconds)
/// 2. Day, 01 to 31
/// 3. Month, 01 to 12
/// 4. Year (4 digits)
/// 5. Local zone description, 00 to +- 13 hours
/// 6. Local zone minutes description, 00 to 59, apply same sign as local hours
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZdaData {
    pub frame: Frame,
    pub utc_time: Option<NaiveTime>,
    pub day: Option<u8>,
    pub month: Option<u8>,
    pub year: Option<u16>,
    pub local_zone_hours: Option<i8>,
    /// Carries the sign of the hours field.
    pub local_zone_minutes: Option<i8>,
}

impl ZdaData {
    /// Get UTC date by `day`, `month` and `year` fields.
    /// Returns `None` if any field is `None`.
    pub fn utc_date(&self) -> Option<NaiveDate> {
        let ((day, month), year) = self.day.zip(self.month).zip(self.year)?;
        NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
    }

    /// Get UTC date time by `utc_time`, `day`, `month`, and `year` fields.
    /// Returns `None` if any field is `None`.
    pub fn utc_date_time(&self) -> Option<NaiveDateTime> {
        self.utc_time.and_then(|utc_time| {
            self.utc_date()
                .map(|utc_date| NaiveDateTime::new(utc_date, utc_time))
        })
    }

    /// Get `chrono::FixedOffset` by `local_zone_hours` and `local_zone_minutes` fields.
    /// Return `Some` if either `local_zone_hours` or `local_zone_minutes` is `Some`.
    pub fn offset(&self) -> Option<FixedOffset> {
        if self.local_zone_hours.is_none() && self.local_zone_minutes.is_none() {
            return None;
        }
        let minutes = i32::from(self.local_zone_hours.unwrap_or(0)) * 60
            + i32::from(self.local_zone_minutes.unwrap_or(0));
        FixedOffset::east_opt(minutes * 60)
    }

    /// Calculate local datetime
    /// Returns `None` if any field is `None`.
    pub fn local_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.utc_date_time()
            .zip(self.offset())
            .map(|(date_time, offset)| DateTime::from_naive_utc_and_offset(date_time, offset))
    }
}

/// # Parse ZDA message
///
/// ```text
/// $GPZDA,160012.71,11,03,2004,-1,00*7D
/// ```
///
/// Note: some devices, like the u-blox ANTARIS 4h, are known to ship ZDAs
/// with some fields blank under poorly-understood circumstances (probably
/// when they don't have satellite lock yet).
pub fn parse_zda(frame: Frame) -> Result<ZdaData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::ZDA);
    let utc_time = p.time(0, "time");
    let day = p.integer_in_range(1, "day", 1, 31);
    let month = p.integer_in_range(2, "month", 1, 12);
    let year = p.integer_in_range(3, "year", 0, 9999);
    let local_zone_hours = p.integer_in_range(4, "local zone hours", -13, 13);
    let local_zone_minutes = p.integer_in_range(5, "local zone minutes", 0, 59);
    p.finish()?;

    let fields = frame.fields();
    let present = |index: usize| !fields[index].is_empty();
    // "-00" still makes the minutes negative
    let local_zone_minutes = if fields[4].starts_with('-') {
        -local_zone_minutes
    } else {
        local_zone_minutes
    };

    Ok(ZdaData {
        utc_time,
        day: present(1).then(|| u8::try_from(day).ok()).flatten(),
        month: present(2).then(|| u8::try_from(month).ok()).flatten(),
        year: present(3).then(|| u16::try_from(year).ok()).flatten(),
        local_zone_hours: present(4)
            .then(|| i8::try_from(local_zone_hours).ok())
            .flatten(),
        local_zone_minutes: present(5)
            .then(|| i8::try_from(local_zone_minutes).ok())
            .flatten(),
        frame,
    })
}
