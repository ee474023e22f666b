use chrono::NaiveTime;

use crate::{Error, FieldDecoder, Frame, SentenceType, sentences::FixType};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                       11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,ddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GgaData {
    pub frame: Frame,
    pub fix_time: Option<NaiveTime>,
    /// Decimal degrees, negative south of the equator.
    pub latitude: f64,
    /// Decimal degrees, negative west of Greenwich.
    pub longitude: f64,
    /// `0` invalid, `1` GPS, `2` DGPS, `3` PPS, `4` RTK, `5` float RTK, `6` estimated
    pub fix_quality: String,
    pub num_satellites: i64,
    pub hdop: f64,
    /// Metres above mean sea level
    pub altitude: f64,
    /// Height of geoid above the WGS84 ellipsoid, in metres
    pub separation: f64,
    /// Seconds since the last DGPS update
    pub dgps_age: String,
    pub dgps_id: String,
}

impl GgaData {
    pub fn fix_type(&self) -> Option<FixType> {
        FixType::from_code(&self.fix_quality)
    }
}

/// # Parse GGA message
///
/// `GGA,123519,4807.038,N,01131.324,E,1,08,0.9,545.4,M,46.9,M, , *42`
/// 1     123519       Fix taken at 12:35:19 UTC
/// 2,3   4807.038,N   Latitude 48 deg 07.038' N
/// 4,5   01131.324,E  Longitude 11 deg 31.324' E
/// 6     1            Fix quality: 0 = invalid, 1 = GPS, 2 = DGPS,
/// 3=PPS (Precise Position Service),
/// 4=RTK (Real Time Kinematic) with fixed integers,
/// 5=Float RTK, 6=Estimated
/// 7     08           Number of satellites being tracked
/// 8     0.9          Horizontal dilution of position
/// 9,10  545.4,M      Altitude, Metres above mean sea level
/// 11,12 46.9,M       Height of geoid (mean sea level) above WGS84
/// ellipsoid, in Meters
/// (empty field) time in seconds since last DGPS update
/// (empty field) DGPS station ID number (0000-1023)
pub fn parse_gga(frame: Frame) -> Result<GgaData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::GGA);
    let fix_time = p.time(0, "time");
    let latitude = p.lat_long(1, 2, "latitude");
    let longitude = p.lat_long(3, 4, "longitude");
    let fix_quality = p.enum_string(5, "fix quality", FixType::CODES);
    let num_satellites = p.integer(6, "number of satellites");
    let hdop = p.float(7, "hdop");
    let altitude = p.float(8, "altitude");
    let separation = p.float(10, "separation");
    let dgps_age = p.string(12, "dgps age");
    let dgps_id = p.string(13, "dgps id");
    p.finish()?;

    Ok(GgaData {
        frame,
        fix_time,
        latitude,
        longitude,
        fix_quality,
        num_satellites,
        hdop,
        altitude,
        separation,
        dgps_age,
        dgps_id,
    })
}
