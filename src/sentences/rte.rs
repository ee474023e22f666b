use crate::{Error, FieldDecoder, Frame, SentenceType};

/// `c` - complete route, `w` - working route / waypoint list
const ROUTE_TYPES: &[&str] = &["c", "w"];

/// RTE - Routes
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rte_routes>
///
/// ```text
///        1   2   3 4    5           x    n
///        |   |   | |    |           |    |
/// $--RTE,x.x,x.x,a,c--c,c--c, ..... c--c*hh<CR><LF>
/// ```
///
/// 1. Total number of sentences needed for the full route
/// 2. Sentence number
/// 3. Sentence mode, `c` = complete route, `w` = working route
/// 4. Name or number of the active route
/// 5. onwards, waypoint identifiers in route order
///
/// A long route is split over several sentences, only the waypoints of this
/// sentence are listed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RteData {
    pub frame: Frame,
    pub number_of_sentences: i64,
    pub sentence_number: i64,
    pub active_route_or_waypoint_list: String,
    pub name: String,
    pub idents: Vec<String>,
}

impl RteData {
    /// `true` for the `c` (complete route) mode.
    pub fn is_active_route(&self) -> bool {
        self.active_route_or_waypoint_list == "c"
    }
}

/// # Parse RTE message
///
/// ```text
/// $GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND,PYAMBU,PPFAIR,PWARRN,PMORTL,PLISMR*73
/// ```
pub fn parse_rte(frame: Frame) -> Result<RteData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::RTE);
    let number_of_sentences = p.integer(0, "number of sentences");
    let sentence_number = p.integer(1, "sentence number");
    let active_route_or_waypoint_list =
        p.enum_string(2, "active route or waypoint list", ROUTE_TYPES);
    let name = p.string(3, "name or number");
    let idents = p.list_string(4, "ident of waypoints");
    p.finish()?;

    Ok(RteData {
        frame,
        number_of_sentences,
        sentence_number,
        active_route_or_waypoint_list,
        name,
        idents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Checksum, decode_frame};

    #[test]
    fn test_parse_rte() {
        let frame = decode_frame(
            "$GPRTE,2,1,c,0,PBRCPK,PBRTO,PTELGR,PPLAND,PYAMBU,PPFAIR,PWARRN,PMORTL,PLISMR*73",
        )
        .unwrap();
        let data = parse_rte(frame).unwrap();
        assert_eq!(data.number_of_sentences, 2);
        assert_eq!(data.sentence_number, 1);
        assert_eq!(data.active_route_or_waypoint_list, "c");
        assert!(data.is_active_route());
        assert_eq!(data.name, "0");
        assert_eq!(
            data.idents,
            [
                "PBRCPK", "PBRTO", "PTELGR", "PPLAND", "PYAMBU", "PPFAIR", "PWARRN", "PMORTL",
                "PLISMR"
            ]
        );
    }

    #[test]
    fn test_parse_rte_with_wrong_checksum() {
        // fields decode fine, only the frame knows the checksum is off
        let data = parse_rte(decode_frame("$GPRTE,2,1,c,0,PBRCPK,PBRTO*73").unwrap()).unwrap();
        assert_eq!(data.idents, ["PBRCPK", "PBRTO"]);
        assert_eq!(
            data.frame.checksum(),
            Checksum::Invalid {
                calculated: 0x47,
                found: 0x73
            }
        );
    }

    #[test]
    fn test_parse_rte_without_waypoints() {
        let data = parse_rte(decode_frame("$GPRTE,1,1,w,ROUTE1").unwrap()).unwrap();
        assert!(!data.is_active_route());
        assert_eq!(data.name, "ROUTE1");
        assert!(data.idents.is_empty());
    }

    #[test]
    fn test_parse_rte_invalid_mode() {
        let err = parse_rte(decode_frame("$GPRTE,2,1,C,0,PBRCPK,PBRTO").unwrap()).unwrap_err();
        let err = err.as_field_error().unwrap();
        assert_eq!(err.index, 2);
        assert_eq!(err.value, "C");
    }

    #[test]
    fn test_parse_rte_invalid_count() {
        let err = parse_rte(decode_frame("$GPRTE,two,1,c,0").unwrap()).unwrap_err();
        assert_eq!(err.as_field_error().map(|e| e.index), Some(0));
    }
}
