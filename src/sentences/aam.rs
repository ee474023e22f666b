use crate::{Error, FieldDecoder, Frame, SentenceType, sentences::utils::STATUS};

/// Distance units: kilometres, nautical miles, statute miles and metres.
const DISTANCE_UNITS: &[&str] = &["K", "N", "S", "M"];

/// AAM - Waypoint Arrival Alarm
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_aam_waypoint_arrival_alarm>
///
/// ```text
///        1 2 3   4 5
///        | | |   | |
/// $--AAM,A,A,x.x,N,c--c*hh<CR><LF>
///
/// Field Number:
///   1. Status, A = Arrival circle entered, V = not entered
///   2. Status, A = Perpendicular passed at waypoint, V = not passed
///   3. Arrival circle radius
///   4. Units of radius, K, N, S or M
///   5. Waypoint ID
///
/// Example: $GPAAM,A,A,0.10,N,WPTNME*32
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AamData {
    pub frame: Frame,
    pub arrival_circle_entered: String,
    pub perpendicular_passed: String,
    pub arrival_circle_radius: f64,
    pub arrival_circle_radius_unit: String,
    pub destination_waypoint_id: String,
}

impl AamData {
    /// `None` when the status field was empty.
    pub fn is_arrival_circle_entered(&self) -> Option<bool> {
        status(&self.arrival_circle_entered)
    }

    pub fn is_perpendicular_passed(&self) -> Option<bool> {
        status(&self.perpendicular_passed)
    }
}

fn status(value: &str) -> Option<bool> {
    match value {
        "A" => Some(true),
        "V" => Some(false),
        _ => None,
    }
}

/// Parse AAM message
pub fn parse_aam(frame: Frame) -> Result<AamData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::AAM);
    let arrival_circle_entered = p.enum_string(0, "arrival circle entered status", STATUS);
    let perpendicular_passed = p.enum_string(1, "perpendicularly passed status", STATUS);
    let arrival_circle_radius = p.float(2, "arrival circle radius");
    let arrival_circle_radius_unit =
        p.enum_string(3, "arrival circle radius units", DISTANCE_UNITS);
    let destination_waypoint_id = p.string(4, "destination waypoint ID");
    p.finish()?;

    Ok(AamData {
        frame,
        arrival_circle_entered,
        perpendicular_passed,
        arrival_circle_radius,
        arrival_circle_radius_unit,
        destination_waypoint_id,
    })
}
