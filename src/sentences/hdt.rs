use crate::{Error, FieldDecoder, Frame, SentenceType};

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///        1   2
///        |   |
/// $--HDT,x.x,T*hh<CR><LF>
/// ```
/// 1. Heading, degrees True
/// 2. T = True
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HdtData {
    pub frame: Frame,
    /// Heading, degrees True
    pub heading: f64,
}

/// # Parse HDT message
///
/// ```text
/// $HEHDT,341.8,T*21
/// ```
///
/// The only data field is true heading in degrees.
/// The following field is required to be 'T' indicating a true heading.
pub fn parse_hdt(frame: Frame) -> Result<HdtData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::HDT);
    let heading = p.float(0, "heading");
    p.enum_string(1, "true", &["T"]);
    p.finish()?;

    Ok(HdtData { frame, heading })
}
