use crate::{Error, FieldDecoder, Frame, SentenceType};

/// BOD - Bearing - Waypoint to Waypoint
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_bod_bearing_waypoint_to_waypoint>
///
/// ```text
///        1   2 3   4 5    6
///        |   | |   | |    |
/// $--BOD,x.x,T,x.x,M,c--c,c--c*hh<CR><LF>
/// ```
///
/// The origin waypoint (6) is only sent while a route is active.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BodData {
    pub frame: Frame,
    pub bearing_true: f64,
    pub bearing_magnetic: f64,
    pub to_waypoint: String,
    /// Empty when no route is active.
    pub from_waypoint: String,
}

/// # Parse BOD message
///
/// See: <https://gpsd.gitlab.io/gpsd/NMEA.html#_bod_bearing_waypoint_to_waypoint>
pub fn parse_bod(frame: Frame) -> Result<BodData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::BOD);
    let bearing_true = p.float(0, "true bearing");
    p.enum_string(1, "true bearing type", &["T"]);
    let bearing_magnetic = p.float(2, "magnetic bearing");
    p.enum_string(3, "magnetic bearing type", &["M"]);
    let to_waypoint = p.string(4, "destination waypoint ID");
    let from_waypoint = if p.len() > 5 {
        p.string(5, "origin waypoint ID")
    } else {
        String::new()
    };
    p.finish()?;

    Ok(BodData {
        frame,
        bearing_true,
        bearing_magnetic,
        to_waypoint,
        from_waypoint,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::decode_frame;

    #[test]
    fn parse_bod_with_route_active_example_full() {
        let frame = decode_frame("$GPBOD,097.0,T,103.2,M,POINTB,POINTA*4A").unwrap();
        assert!(frame.checksum().is_valid());

        let data = parse_bod(frame).unwrap();
        assert_relative_eq!(data.bearing_true, 97.0);
        assert_relative_eq!(data.bearing_magnetic, 103.2);
        assert_eq!(data.to_waypoint, "POINTB");
        assert_eq!(data.from_waypoint, "POINTA");
    }

    #[test]
    fn parse_bod_no_route_active_example_full() {
        let frame = decode_frame("$GPBOD,099.3,T,105.6,M,POINTB*64").unwrap();
        assert!(frame.checksum().is_valid());

        let data = parse_bod(frame).unwrap();
        assert_relative_eq!(data.bearing_true, 99.3);
        assert_relative_eq!(data.bearing_magnetic, 105.6);
        assert_eq!(data.to_waypoint, "POINTB");
        assert!(data.from_waypoint.is_empty());
    }

    #[test]
    fn parse_bod_swapped_bearing_types() {
        let err = parse_bod(decode_frame("$GPBOD,099.3,M,105.6,T,POINTB").unwrap()).unwrap_err();
        assert_eq!(err.as_field_error().map(|e| e.index), Some(1));
    }
}
