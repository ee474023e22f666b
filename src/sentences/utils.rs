use core::iter;

use chrono::{NaiveDate, NaiveTime};
use nom::{
    IResult, Parser as _,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::{map_res, opt, recognize},
    sequence::preceded,
};

use crate::FieldErrorKind;

const ABS_MAX_LAT: f64 = 90.0;
const ABS_MAX_LON: f64 = 180.0;

/// `A`ctive / `V`oid status letters.
pub(crate) const STATUS: &[&str] = &["A", "V"];

/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
pub(crate) const YEAR_PIVOT: u32 = 80;

fn number(count: usize, i: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(count, count, |c: char| c.is_ascii_digit()),
        |d: &str| d.parse::<u32>(),
    )
    .parse(i)
}

fn two_digits(i: &str) -> IResult<&str, u32> {
    number(2, i)
}

fn do_parse_hms(i: &str) -> IResult<&str, (u32, u32, u32, Option<&str>)> {
    (
        two_digits,
        two_digits,
        two_digits,
        opt(preceded(char('.'), digit0)),
    )
        .parse(i)
}

/// Fraction digits to nanoseconds, digits past the ninth are truncated.
fn fraction_to_nanos(fraction: &str) -> u32 {
    fraction
        .bytes()
        .chain(iter::repeat(b'0'))
        .take(9)
        .fold(0, |nanos, digit| nanos * 10 + u32::from(digit - b'0'))
}

/// Parses `hhmmss[.sss]`.
pub(crate) fn parse_hms(i: &str) -> Result<NaiveTime, FieldErrorKind> {
    let (rest, (hour, minutes, sec, fraction)) =
        do_parse_hms(i).map_err(|_| FieldErrorKind::InvalidTime("expected hhmmss[.sss]"))?;
    if !rest.is_empty() {
        return Err(FieldErrorKind::InvalidTime("expected hhmmss[.sss]"));
    }
    if hour >= 24 {
        return Err(FieldErrorKind::InvalidTime("hour >= 24"));
    }
    if minutes >= 60 {
        return Err(FieldErrorKind::InvalidTime("min >= 60"));
    }
    if sec >= 60 {
        return Err(FieldErrorKind::InvalidTime("sec >= 60"));
    }

    NaiveTime::from_hms_nano_opt(hour, minutes, sec, fraction.map_or(0, fraction_to_nanos))
        .ok_or(FieldErrorKind::InvalidTime("out of range"))
}

fn do_parse_dmy(i: &str) -> IResult<&str, (u32, u32, u32)> {
    (two_digits, two_digits, two_digits).parse(i)
}

/// Parses `ddmmyy`.
///
/// Only a two-digit year is available, years `00..=79` map to 2000-2079 and
/// `80..=99` to 1980-1999.
pub(crate) fn parse_date(i: &str) -> Result<NaiveDate, FieldErrorKind> {
    let (rest, (day, month, year)) =
        do_parse_dmy(i).map_err(|_| FieldErrorKind::InvalidDate("expected ddmmyy"))?;
    if !rest.is_empty() {
        return Err(FieldErrorKind::InvalidDate("expected ddmmyy"));
    }
    if !(1..=12).contains(&month) {
        return Err(FieldErrorKind::InvalidDate("month < 1 or > 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(FieldErrorKind::InvalidDate("day < 1 or > 31"));
    }

    let year = if year < YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    };
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or(FieldErrorKind::InvalidDate("no such day in month"))
}

fn minutes(i: &str) -> IResult<&str, f64> {
    map_res(
        recognize((
            take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
            opt((char('.'), digit0)),
        )),
        |m: &str| m.parse::<f64>(),
    )
    .parse(i)
}

fn do_parse_deg_min(i: &str, deg_width: usize) -> IResult<&str, (u32, f64)> {
    let (i, degrees) = number(deg_width, i)?;
    let (i, minutes) = minutes(i)?;
    Ok((i, (degrees, minutes)))
}

/// Parses `ddmm.mmmm` (latitude) or `dddmm.mmmm` (longitude) together with
/// its hemisphere letter into signed decimal degrees.
pub(crate) fn parse_lat_lon(value: &str, hemisphere: &str) -> Result<f64, FieldErrorKind> {
    let (deg_width, abs_max, sign) = match hemisphere {
        "N" => (2, ABS_MAX_LAT, 1.0),
        "S" => (2, ABS_MAX_LAT, -1.0),
        "E" => (3, ABS_MAX_LON, 1.0),
        "W" => (3, ABS_MAX_LON, -1.0),
        _ => return Err(FieldErrorKind::InvalidHemisphere),
    };

    let (rest, (degrees, minutes)) = do_parse_deg_min(value, deg_width).map_err(|_| {
        FieldErrorKind::InvalidCoordinate(if deg_width == 2 {
            "expected ddmm.mmmm"
        } else {
            "expected dddmm.mmmm"
        })
    })?;
    if !rest.is_empty() {
        return Err(FieldErrorKind::InvalidCoordinate("trailing characters"));
    }
    if minutes >= 60.0 {
        return Err(FieldErrorKind::InvalidCoordinate("minutes >= 60"));
    }

    let value = f64::from(degrees) + minutes / 60.;
    if value > abs_max {
        return Err(FieldErrorKind::InvalidCoordinate("out of range"));
    }
    Ok(sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Timelike;

    #[test]
    fn test_parse_lat_lon() {
        assert_relative_eq!(
            parse_lat_lon("4807.038", "N").unwrap(),
            48. + 7.038 / 60.
        );
        assert_relative_eq!(
            parse_lat_lon("01131.324", "E").unwrap(),
            11. + 31.324 / 60.
        );
        assert_relative_eq!(
            parse_lat_lon("5321.6802", "S").unwrap(),
            -(53. + 21.6802 / 60.)
        );
        assert_relative_eq!(
            parse_lat_lon("00630.3372", "W").unwrap(),
            -(6. + 30.3372 / 60.)
        );
        assert_relative_eq!(parse_lat_lon("4807", "N").unwrap(), 48. + 7. / 60.);
    }

    #[test]
    fn test_parse_lat_lon_errors() {
        assert_eq!(
            parse_lat_lon("4807.038", "X"),
            Err(FieldErrorKind::InvalidHemisphere)
        );
        assert_eq!(
            parse_lat_lon("4807.038", "n"),
            Err(FieldErrorKind::InvalidHemisphere)
        );
        assert!(matches!(
            parse_lat_lon("48", "N"),
            Err(FieldErrorKind::InvalidCoordinate(_))
        ));
        assert!(matches!(
            parse_lat_lon("4x07.038", "N"),
            Err(FieldErrorKind::InvalidCoordinate(_))
        ));
        assert!(matches!(
            parse_lat_lon("4807.03x", "N"),
            Err(FieldErrorKind::InvalidCoordinate(_))
        ));
        assert_eq!(
            parse_lat_lon("4860.000", "N"),
            Err(FieldErrorKind::InvalidCoordinate("minutes >= 60"))
        );
        assert_eq!(
            parse_lat_lon("9130.000", "N"),
            Err(FieldErrorKind::InvalidCoordinate("out of range"))
        );
        assert_eq!(
            parse_lat_lon("18100.000", "W"),
            Err(FieldErrorKind::InvalidCoordinate("out of range"))
        );
    }

    #[test]
    fn test_parse_hms() {
        let time = parse_hms("125619").unwrap();
        assert_eq!(time.hour(), 12);
        assert_eq!(time.minute(), 56);
        assert_eq!(time.second(), 19);
        assert_eq!(time.nanosecond(), 0);
        let time = parse_hms("125619.5").unwrap();
        assert_eq!(time.hour(), 12);
        assert_eq!(time.minute(), 56);
        assert_eq!(time.second(), 19);
        assert_eq!(time.nanosecond(), 500_000_000);
        assert_eq!(
            parse_hms("033745.222222222").unwrap(),
            NaiveTime::from_hms_nano_opt(3, 37, 45, 222_222_222).unwrap()
        );
        assert_eq!(
            parse_hms("203415.").unwrap(),
            NaiveTime::from_hms_opt(20, 34, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_hms_errors() {
        assert!(parse_hms("12561").is_err());
        assert!(parse_hms("1256a9").is_err());
        assert!(parse_hms("1256190").is_err());
        assert!(parse_hms("125619.5x").is_err());
        assert_eq!(parse_hms("245619"), Err(FieldErrorKind::InvalidTime("hour >= 24")));
        assert_eq!(parse_hms("126019"), Err(FieldErrorKind::InvalidTime("min >= 60")));
        assert_eq!(parse_hms("125660"), Err(FieldErrorKind::InvalidTime("sec >= 60")));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("191194").unwrap(),
            NaiveDate::from_ymd_opt(1994, 11, 19).unwrap()
        );
        assert_eq!(
            parse_date("311200").unwrap(),
            NaiveDate::from_ymd_opt(2000, 12, 31).unwrap()
        );
        assert_eq!(
            parse_date("180283").unwrap(),
            NaiveDate::from_ymd_opt(1983, 2, 18).unwrap()
        );
    }

    #[test]
    fn test_parse_date_year_pivot() {
        // 79 is the last year mapped to the 2000s, 80 the first to the 1900s
        assert_eq!(
            parse_date("311279").unwrap(),
            NaiveDate::from_ymd_opt(2079, 12, 31).unwrap()
        );
        assert_eq!(
            parse_date("010180").unwrap(),
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date("010199").unwrap(),
            NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_errors() {
        assert!(parse_date("1911944").is_err());
        assert!(parse_date("19119").is_err());
        assert!(parse_date("19a194").is_err());
        assert_eq!(
            parse_date("191394"),
            Err(FieldErrorKind::InvalidDate("month < 1 or > 12"))
        );
        assert_eq!(
            parse_date("001194"),
            Err(FieldErrorKind::InvalidDate("day < 1 or > 31"))
        );
        assert_eq!(
            parse_date("310299"),
            Err(FieldErrorKind::InvalidDate("no such day in month"))
        );
    }
}
