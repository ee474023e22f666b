use super::FixType;

/// Positioning system mode indicator, present from NMEA 2.3 on
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaaMode {
    /// A - Autonomous mode
    Autonomous,
    /// C - Quectel Querk, "Caution"
    Caution,
    /// D - Differential Mode
    Differential,
    /// E - Estimated (dead-reckoning) mode
    Estimated,
    /// F - RTK Float mode
    FloatRtk,
    /// M - Manual Input Mode
    Manual,
    /// N - Data Not Valid
    DataNotValid,
    /// P - Precise (4.00 and later)
    ///
    /// Sort of DGPS, NMEA 4+
    Precise,
    /// R - RTK Integer mode
    FixedRtk,
    /// S - Simulated Mode
    Simulator,
    /// U - Quectel Querk, "Unsafe"
    Unsafe,
}

impl FaaMode {
    /// Mode letters accepted in a mode indicator field.
    pub(crate) const LETTERS: &'static [&'static str] =
        &["A", "C", "D", "E", "F", "M", "N", "P", "R", "S", "U"];

    /// `None` for an empty or unknown letter.
    pub fn from_letter(letter: &str) -> Option<Self> {
        Some(match letter {
            "A" => FaaMode::Autonomous,
            "C" => FaaMode::Caution,
            "D" => FaaMode::Differential,
            "E" => FaaMode::Estimated,
            "F" => FaaMode::FloatRtk,
            "M" => FaaMode::Manual,
            "N" => FaaMode::DataNotValid,
            "P" => FaaMode::Precise,
            "R" => FaaMode::FixedRtk,
            "S" => FaaMode::Simulator,
            "U" => FaaMode::Unsafe,
            _ => return None,
        })
    }

    /// Closest GGA fix quality, `None` for modes GGA cannot express.
    pub fn fix_type(self) -> Option<FixType> {
        match self {
            FaaMode::Autonomous => Some(FixType::Gps),
            FaaMode::Differential | FaaMode::Precise => Some(FixType::DGps),
            FaaMode::Estimated => Some(FixType::Estimated),
            FaaMode::FloatRtk => Some(FixType::FloatRtk),
            FaaMode::FixedRtk => Some(FixType::Rtk),
            FaaMode::Caution | FaaMode::DataNotValid | FaaMode::Unsafe => Some(FixType::Invalid),
            FaaMode::Manual | FaaMode::Simulator => None,
        }
    }
}
