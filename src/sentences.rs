//! All the supported sentence type data and parsers.

#[cfg(feature = "AAM")]
pub mod aam;
#[cfg(feature = "BOD")]
pub mod bod;
#[cfg(feature = "GGA")]
pub mod gga;
#[cfg(feature = "GLL")]
pub mod gll;
#[cfg(feature = "HDT")]
pub mod hdt;
#[cfg(feature = "RMC")]
pub mod rmc;
#[cfg(feature = "RTE")]
pub mod rte;
#[cfg(feature = "TXT")]
pub mod txt;
#[cfg(feature = "VTG")]
pub mod vtg;
#[cfg(feature = "ZDA")]
pub mod zda;

pub mod faa_mode;
pub mod fix_type;
pub(crate) mod utils;

#[doc(inline)]
pub use {faa_mode::FaaMode, fix_type::FixType};

#[cfg(feature = "AAM")]
#[doc(inline)]
pub use aam::{AamData, parse_aam};
#[cfg(feature = "BOD")]
#[doc(inline)]
pub use bod::{BodData, parse_bod};
#[cfg(feature = "GGA")]
#[doc(inline)]
pub use gga::{GgaData, parse_gga};
#[cfg(feature = "GLL")]
#[doc(inline)]
pub use gll::{GllData, parse_gll};
#[cfg(feature = "HDT")]
#[doc(inline)]
pub use hdt::{HdtData, parse_hdt};
#[cfg(feature = "RMC")]
#[doc(inline)]
pub use rmc::{RmcData, parse_rmc};
#[cfg(feature = "RTE")]
#[doc(inline)]
pub use rte::{RteData, parse_rte};
#[cfg(feature = "TXT")]
#[doc(inline)]
pub use txt::{TxtData, parse_txt};
#[cfg(feature = "VTG")]
#[doc(inline)]
pub use vtg::{VtgData, parse_vtg};
#[cfg(feature = "ZDA")]
#[doc(inline)]
pub use zda::{ZdaData, parse_zda};
