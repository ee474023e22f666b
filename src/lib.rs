//! NMEA 0183 sentence decoder
//!
//! A raw line is first split into a [`Frame`] by [`decode_frame`], which
//! validates the framing and records the checksum outcome. Sentence parsers
//! then read typed fields out of the frame through a [`FieldDecoder`], which
//! keeps the first error it runs into so a parser can read every field in
//! order and check for failure once.
//!
//! [`parse_str`] does all of this in one go and returns a [`ParseResult`]:
//!
//! ```
//! use nmea_decoder::{parse_str, ParseResult};
//!
//! let gga = "$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C";
//! match parse_str(gga).unwrap() {
//!     ParseResult::GGA(data) => {
//!         assert_eq!(data.num_satellites, 8);
//!         assert!((data.latitude - 63.427).abs() < 1e-3);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! Units used everywhere: degrees, knots, meters for altitude
//!
//! # Crate features
#![cfg_attr(
    feature = "features-docs",
    doc = ::document_features::document_features!()
)]
// Copyright (C) 2016 Felix Obenhuber
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
#![cfg_attr(docsrs, feature(doc_cfg))]

mod decoder;
mod error;
pub(crate) mod parse;
pub mod sentences;

#[doc(inline)]
pub use decoder::FieldDecoder;
#[doc(inline)]
pub use error::{Error, FieldError, FieldErrorKind, FramingError};
#[doc(inline)]
pub use parse::*;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

macro_rules! count_tts {
    () => {0usize};
    ($_head:tt , $($tail:tt)*) => {1usize + count_tts!($($tail)*)};
    ($item:tt) => {1usize};
}

macro_rules! define_sentence_type_enum {
    (
        $(#[$outer:meta])*
        pub enum $Name:ident {
            $(
            $(#[$variant:meta])*
            $Variant:ident
            ),* $(,)* }
    ) => {
        $(#[$outer])*
        pub enum $Name {
            $(
                $(#[$variant])*
                $Variant
            ),*,
        }

        impl TryFrom<&str> for $Name {
            type Error = crate::Error;

            fn try_from(s: &str) -> Result<$Name, Self::Error> {
                match s {
                    $(stringify!($Variant) => Ok($Name::$Variant),)*
                    _ => Err(crate::Error::Unknown(s.to_owned())),
                }
            }
        }

        impl $Name {
            const COUNT: usize = count_tts!($($Variant),*);
            /// Every known sentence type, in declaration order.
            pub const TYPES: [$Name; $Name::COUNT] = [$($Name::$Variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($Name::$Variant => stringify!($Variant),)*
                }
            }
        }

        impl core::str::FromStr for $Name {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $Name::try_from(s)
            }
        }

        impl core::fmt::Display for $Name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }
}

define_sentence_type_enum! {
    /// NMEA sentence type
    ///
    /// Every sentence code this crate recognizes. Only some of them have a
    /// parser, see [`ParseResult`]; the others decode to
    /// [`Error::Unsupported`].
    ///
    /// ### Waypoints and routes
    ///
    /// - [`SentenceType::AAM`]
    /// - [`SentenceType::BOD`]
    /// - [`SentenceType::RTE`]
    ///
    /// ### Position and ground speed
    ///
    /// - [`SentenceType::GGA`]
    /// - [`SentenceType::GLL`]
    /// - [`SentenceType::RMC`]
    /// - [`SentenceType::VTG`]
    ///
    /// ### Other
    ///
    /// - [`SentenceType::HDT`]
    /// - [`SentenceType::TXT`]
    /// - [`SentenceType::ZDA`]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
    #[repr(u32)]
    pub enum SentenceType {
        /// AAM - Waypoint Arrival Alarm
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_aam_waypoint_arrival_alarm>
        AAM,
        ABK,
        ACA,
        ACK,
        ACS,
        AIR,
        ALM,
        ALR,
        APA,
        APB,
        ASD,
        BEC,
        /// BOD - Bearing - Waypoint to Waypoint
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_bod_bearing_waypoint_to_waypoint>
        BOD,
        BWC,
        BWR,
        BWW,
        CUR,
        DBK,
        DBS,
        DBT,
        DCN,
        DPT,
        DSC,
        DSE,
        DSI,
        DSR,
        /// DTM - Datum Reference
        DTM,
        FSI,
        GBS,
        /// GGA - Global Positioning System Fix Data
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
        GGA,
        GLC,
        /// GLL - Geographic Position - Latitude/Longitude
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
        GLL,
        GMP,
        GNS,
        GRS,
        GSA,
        GST,
        GSV,
        GTD,
        GXA,
        HDG,
        HDM,
        /// HDT - Heading - True
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
        HDT,
        HFB,
        HMR,
        HMS,
        HSC,
        HTC,
        HTD,
        ITS,
        LCD,
        LRF,
        LRI,
        LR1,
        LR2,
        LR3,
        MDA,
        MLA,
        MSK,
        MSS,
        MWD,
        MTW,
        MWV,
        OLN,
        OSD,
        ROO,
        RLM,
        RMA,
        RMB,
        /// RMC - Recommended Minimum Navigation Information
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
        RMC,
        RMZ,
        ROT,
        RPM,
        RSA,
        RSD,
        /// RTE - Routes
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rte_routes>
        RTE,
        SFI,
        SSD,
        STN,
        TDS,
        TFI,
        TLB,
        TLL,
        TPC,
        TPR,
        TPT,
        TRF,
        TTM,
        TUT,
        /// TXT - Text transmission
        TXT,
        VBW,
        /// VDM - AIS VHF data-link message, usually sent with the `!` start delimiter
        VDM,
        VDO,
        VDR,
        VHW,
        VLW,
        VPW,
        VSD,
        /// VTG - Track made good and Ground speed
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
        VTG,
        VWR,
        WCV,
        WNC,
        WPL,
        XDR,
        XTE,
        XTR,
        /// ZDA - Time & Date - UTC, day, month, year and local time zone
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
        ZDA,
        ZDL,
        ZFO,
        ZTG,
    }
}
