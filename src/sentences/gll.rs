use chrono::NaiveTime;

use crate::{
    Error, FieldDecoder, Frame, SentenceType,
    sentences::{FaaMode, utils::STATUS},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// | Field | Structure   | Description
/// |-------|-------------|---------------------------------------------------------------------
/// | 1     | lat         | Latitude (DDmm.mm)
/// | 2     | lat dir     | Latitude direction (N = North, S = South)
/// | 3     | lon         | Longitude (DDDmm.mm)
/// | 4     | lon dir     | Longitude direction (E = East, W = West)
/// | 5     | utc         | UTC time status of position (hours/minutes/seconds/decimal seconds)
/// | 6     | data status | Data status: A = Data valid, V = Data invalid
/// | 7     | mode ind    | Positioning system mode indicator, NMEA 2.3 and later
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GllData {
    pub frame: Frame,
    pub latitude: f64,
    pub longitude: f64,
    pub fix_time: Option<NaiveTime>,
    pub status: String,
    /// Empty for receivers older than NMEA 2.3.
    pub faa_mode: String,
}

impl GllData {
    pub fn is_valid(&self) -> bool {
        self.status == "A"
    }

    pub fn faa_mode(&self) -> Option<FaaMode> {
        FaaMode::from_letter(&self.faa_mode)
    }
}

/// # Parse GLL message
pub fn parse_gll(frame: Frame) -> Result<GllData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::GLL);
    let latitude = p.lat_long(0, 1, "latitude");
    let longitude = p.lat_long(2, 3, "longitude");
    let fix_time = p.time(4, "time");
    let status = p.enum_string(5, "status", STATUS);
    let faa_mode = if p.len() > 6 {
        p.enum_string(6, "FAA mode", FaaMode::LETTERS)
    } else {
        String::new()
    };
    p.finish()?;

    Ok(GllData {
        frame,
        latitude,
        longitude,
        fix_time,
        status,
        faa_mode,
    })
}
