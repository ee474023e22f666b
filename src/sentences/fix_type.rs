/// Fix quality reported by GGA
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum FixType {
    Invalid,
    Gps,
    DGps,
    /// Precise Position Service
    Pps,
    Rtk,
    FloatRtk,
    Estimated,
}

impl FixType {
    /// Fix quality codes in the order of their numeric value.
    pub(crate) const CODES: &'static [&'static str] = &["0", "1", "2", "3", "4", "5", "6"];

    #[inline]
    pub fn is_valid(self) -> bool {
        match self {
            FixType::Estimated | FixType::Invalid => false,
            FixType::DGps | FixType::Gps | FixType::Rtk | FixType::FloatRtk | FixType::Pps => true,
        }
    }

    /// Maps a GGA fix quality code, `None` for an empty or unknown code.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "0" => FixType::Invalid,
            "1" => FixType::Gps,
            "2" => FixType::DGps,
            "3" => FixType::Pps,
            "4" => FixType::Rtk,
            "5" => FixType::FloatRtk,
            "6" => FixType::Estimated,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_in_order() {
        for (code, expected) in FixType::CODES.iter().zip([
            FixType::Invalid,
            FixType::Gps,
            FixType::DGps,
            FixType::Pps,
            FixType::Rtk,
            FixType::FloatRtk,
            FixType::Estimated,
        ]) {
            assert_eq!(FixType::from_code(code), Some(expected));
        }
        assert_eq!(FixType::from_code(""), None);
        assert_eq!(FixType::from_code("7"), None);
    }

    #[test]
    fn test_validity() {
        assert!(FixType::Rtk.is_valid());
        assert!(!FixType::Estimated.is_valid());
        assert!(!FixType::Invalid.is_valid());
    }
}
