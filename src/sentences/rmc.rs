use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    Error, FieldDecoder, Frame, SentenceType,
    sentences::{FaaMode, utils::STATUS},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///        1         2 3       4 5        6  7   8   9    10 11|
///        |         | |       | |        |  |   |   |    |  | |
/// $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RmcData {
    pub frame: Frame,
    pub fix_time: Option<NaiveTime>,
    /// `A` valid, `V` navigation receiver warning
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Knots
    pub speed_over_ground: f64,
    /// Degrees true
    pub true_course: f64,
    pub fix_date: Option<NaiveDate>,
    /// Degrees, negative for a westerly variation
    pub magnetic_variation: f64,
    /// Empty for receivers older than NMEA 2.3.
    pub faa_mode: String,
}

impl RmcData {
    pub fn is_valid(&self) -> bool {
        self.status == "A"
    }

    pub fn faa_mode(&self) -> Option<FaaMode> {
        FaaMode::from_letter(&self.faa_mode)
    }

    /// Date and time of the fix, `None` unless both were sent.
    pub fn fix_date_time(&self) -> Option<NaiveDateTime> {
        self.fix_date
            .zip(self.fix_time)
            .map(|(date, time)| date.and_time(time))
    }
}

/// Parse RMC message
/// From gpsd:
/// RMC,225446.33,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A*68
/// 1     225446.33    Time of fix 22:54:46 UTC
/// 2     A          Status of Fix: A = valid, V = invalid
/// 3,4   4916.45,N    Latitude 49 deg. 16.45 min North
/// 5,6   12311.12,W   Longitude 123 deg. 11.12 min West
/// 7     000.5      Speed over ground, Knots
/// 8     054.7      Course Made Good, True north
/// 9     181194       Date of fix  18 November 1994
/// 10,11 020.3,E      Magnetic variation 20.3 deg East
/// 12    A      FAA mode indicator (NMEA 2.3 and later)
///
/// SiRF chipsets don't return either Mode Indicator or magnetic variation.
pub fn parse_rmc(frame: Frame) -> Result<RmcData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::RMC);
    let fix_time = p.time(0, "time");
    let status = p.enum_string(1, "validity", STATUS);
    let latitude = p.lat_long(2, 3, "latitude");
    let longitude = p.lat_long(4, 5, "longitude");
    let speed_over_ground = p.float(6, "speed");
    let true_course = p.float(7, "course");
    let fix_date = p.date(8, "date");
    let variation = p.float(9, "variation");
    let variation_direction = p.enum_string(10, "direction", &["E", "W"]);
    let faa_mode = if p.len() > 11 {
        p.enum_string(11, "FAA mode", FaaMode::LETTERS)
    } else {
        String::new()
    };
    p.finish()?;

    Ok(RmcData {
        frame,
        fix_time,
        status,
        latitude,
        longitude,
        speed_over_ground,
        true_course,
        fix_date,
        magnetic_variation: if variation_direction == "W" {
            -variation
        } else {
            variation
        },
        faa_mode,
    })
}
