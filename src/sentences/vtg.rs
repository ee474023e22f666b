use crate::{Error, FieldDecoder, Frame, SentenceType, sentences::FaaMode};

/// Knots per kilometre per hour
const KNOTS_PER_KPH: f64 = 1. / 1.852;

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
// NMEA 2.3:
///
/// ```text
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VtgData {
    pub frame: Frame,
    /// Degrees true
    pub true_track: f64,
    /// Degrees magnetic
    pub magnetic_track: f64,
    pub ground_speed_knots: f64,
    pub ground_speed_kph: f64,
    /// Empty for receivers older than NMEA 2.3.
    pub faa_mode: String,
}

impl VtgData {
    /// Speed over ground in knots, converted from km/h when only that is sent.
    pub fn speed_over_ground(&self) -> f64 {
        if self.ground_speed_knots == 0.0 {
            self.ground_speed_kph * KNOTS_PER_KPH
        } else {
            self.ground_speed_knots
        }
    }

    pub fn faa_mode(&self) -> Option<FaaMode> {
        FaaMode::from_letter(&self.faa_mode)
    }
}

/// # Parse VTG message
///
/// eg1. `$GPVTG,360.0,T,348.7,M,000.0,N,000.0,K*43`
/// eg2. `$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K`
///
/// `054.7,T`      True track made good
/// `034.4,M`      Magnetic track made good
/// `005.5,N`      Ground speed, knots
/// `010.2,K`      Ground speed, Kilometers per hour
pub fn parse_vtg(frame: Frame) -> Result<VtgData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::VTG);
    let true_track = p.float(0, "true track");
    p.enum_string(1, "true track unit", &["T"]);
    let magnetic_track = p.float(2, "magnetic track");
    p.enum_string(3, "magnetic track unit", &["M"]);
    let ground_speed_knots = p.float(4, "ground speed (knots)");
    p.enum_string(5, "ground speed unit (knots)", &["N"]);
    let ground_speed_kph = p.float(6, "ground speed (km/h)");
    p.enum_string(7, "ground speed unit (km/h)", &["K"]);
    let faa_mode = if p.len() > 8 {
        p.enum_string(8, "FAA mode", FaaMode::LETTERS)
    } else {
        String::new()
    };
    p.finish()?;

    Ok(VtgData {
        frame,
        true_track,
        magnetic_track,
        ground_speed_knots,
        ground_speed_kph,
        faa_mode,
    })
}
