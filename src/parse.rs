use core::{fmt, iter, str};

use arrayvec::ArrayString;
use cfg_if::cfg_if;
use nom::{
    IResult, Parser as _,
    bytes::complete::{take_till, take_while_m_n},
    character::complete::{char, one_of},
    combinator::{cut, eof, map_res, opt},
    sequence::preceded,
};

pub use crate::sentences::*;
use crate::{Error, FramingError, SentenceType};

/// Length of the talker ID that prefixes every sentence type code.
pub const TALKER_ID_LEN: usize = 2;

/// The character a sentence starts with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartDelimiter {
    /// `$` - conventional (parametric) sentences
    Parametric,
    /// `!` - encapsulated sentences, e.g. AIS
    Encapsulation,
}

impl StartDelimiter {
    pub fn as_char(self) -> char {
        match self {
            StartDelimiter::Parametric => '$',
            StartDelimiter::Encapsulation => '!',
        }
    }
}

/// Outcome of the checksum comparison done while decoding a [`Frame`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checksum {
    /// Present and matching the calculated value.
    Valid(u8),
    /// Present but different from the calculated value.
    Invalid { calculated: u8, found: u8 },
    /// The sentence has no `*hh` terminator.
    Absent,
}

impl Checksum {
    #[inline]
    pub fn is_valid(self) -> bool {
        matches!(self, Checksum::Valid(_))
    }
}

/// How strictly [`Frame::verify_checksum`] treats the [`Checksum`] outcome.
///
/// Some transports strip checksums, so whether an absent checksum is
/// acceptable is left to the caller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumPolicy {
    /// Accept any sentence, even with a wrong checksum.
    Ignore,
    /// Reject wrong checksums, accept sentences without one.
    #[default]
    AllowMissing,
    /// Reject wrong and missing checksums.
    Require,
}

/// One validated raw sentence.
///
/// ```text
/// $GPAAM,A,A,0.10,N,WPTNME*32
/// ^ ^ ^   ^                ^
/// | | |   |                checksum
/// | | |   fields
/// | | sentence type
/// | talker ID
/// start delimiter
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    start: StartDelimiter,
    talker_id: ArrayString<TALKER_ID_LEN>,
    sentence_type: String,
    fields: Vec<String>,
    checksum: Checksum,
}

impl Frame {
    pub fn start(&self) -> StartDelimiter {
        self.start
    }

    pub fn talker_id(&self) -> &str {
        &self.talker_id
    }

    /// The sentence type code, e.g. `GGA`.
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    /// The raw fields in wire order, empty fields included.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn checksum(&self) -> Checksum {
        self.checksum
    }

    /// Calculates the checksum over talker ID, sentence type and fields.
    pub fn calc_checksum(&self) -> u8 {
        let fields = self
            .fields
            .iter()
            .flat_map(|field| iter::once(&b',').chain(field.as_bytes()));

        checksum(
            self.talker_id
                .as_bytes()
                .iter()
                .chain(self.sentence_type.as_bytes())
                .chain(fields),
        )
    }

    /// Applies `policy` to the checksum outcome recorded for this frame.
    pub fn verify_checksum(&self, policy: ChecksumPolicy) -> Result<(), FramingError> {
        let result = match (policy, self.checksum) {
            (ChecksumPolicy::Ignore, _) | (_, Checksum::Valid(_)) => Ok(()),
            (_, Checksum::Invalid { calculated, found }) => {
                Err(FramingError::ChecksumMismatch { calculated, found })
            }
            (ChecksumPolicy::AllowMissing, Checksum::Absent) => Ok(()),
            (ChecksumPolicy::Require, Checksum::Absent) => Err(FramingError::MissingChecksum),
        };

        if let Err(err) = &result {
            log::debug!("{self} rejected by {policy:?}: {err}");
        }
        result
    }
}

/// Renders the frame back to its wire form with a freshly calculated checksum
/// (without the line terminator).
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.as_char(),
            self.talker_id,
            self.sentence_type
        )?;
        for field in &self.fields {
            write!(f, ",{field}")?;
        }
        write!(f, "*{:02X}", self.calc_checksum())
    }
}

impl str::FromStr for Frame {
    type Err = FramingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_frame(s)
    }
}

/// XOR of all bytes.
pub fn checksum<'a, I: Iterator<Item = &'a u8>>(bytes: I) -> u8 {
    bytes.fold(0, |c, x| c ^ *x)
}

struct RawFrame<'a> {
    start: char,
    address: &'a str,
    data: Option<&'a str>,
    checksum: Option<u8>,
}

fn parse_hex_checksum(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u8::from_str_radix(hex, 16),
    )
    .parse(i)
}

fn do_split_frame(i: &str) -> IResult<&str, RawFrame<'_>> {
    let (i, start) = one_of("$!").parse(i)?;
    let (i, address) = take_till(|c: char| c == ',' || c == '*').parse(i)?;
    let (i, data) = opt(preceded(char(','), take_till(|c: char| c == '*'))).parse(i)?;
    let (i, checksum) = opt(preceded(char('*'), cut(parse_hex_checksum))).parse(i)?;
    let (i, _) = eof(i)?;

    Ok((
        i,
        RawFrame {
            start,
            address,
            data,
            checksum,
        },
    ))
}

/// Splits a raw line into a [`Frame`].
///
/// The checksum outcome is recorded in the frame but never fails decoding,
/// use [`Frame::verify_checksum`] to enforce a [`ChecksumPolicy`].
/// A trailing `\r\n` is ignored.
pub fn decode_frame(line: &str) -> Result<Frame, FramingError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let first = line.chars().next().ok_or(FramingError::Empty)?;
    if !line.is_ascii() {
        return Err(FramingError::NotAscii);
    }
    if first != '$' && first != '!' {
        return Err(FramingError::InvalidStart(first));
    }

    let (_, raw) = do_split_frame(line).map_err(|err| match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => FramingError::Syntax {
            offset: line.len() - e.input.len(),
            kind: e.code,
        },
        nom::Err::Incomplete(_) => FramingError::Syntax {
            offset: line.len(),
            kind: nom::error::ErrorKind::Eof,
        },
    })?;

    if raw.address.len() < TALKER_ID_LEN
        || !raw.address.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return Err(FramingError::MalformedAddress(raw.address.to_owned()));
    }
    if raw.address.len() == TALKER_ID_LEN {
        return Err(FramingError::MissingSentenceType(raw.address.to_owned()));
    }
    let (talker_id, sentence_type) = raw.address.split_at(TALKER_ID_LEN);
    let talker_id = ArrayString::from(talker_id)
        .map_err(|_| FramingError::MalformedAddress(raw.address.to_owned()))?;

    let body_end = line.find('*').unwrap_or(line.len());
    let calculated = checksum(line.as_bytes()[1..body_end].iter());
    let checksum = match raw.checksum {
        Some(found) if found == calculated => Checksum::Valid(found),
        Some(found) => Checksum::Invalid { calculated, found },
        None => Checksum::Absent,
    };

    let fields = raw
        .data
        .map(|data| data.split(',').map(|field| field.to_owned()).collect())
        .unwrap_or_default();

    let frame = Frame {
        start: if raw.start == '!' {
            StartDelimiter::Encapsulation
        } else {
            StartDelimiter::Parametric
        },
        talker_id,
        sentence_type: sentence_type.to_owned(),
        fields,
        checksum,
    };
    log::trace!(
        "decoded {}{} frame with {} fields, checksum {:?}",
        frame.talker_id,
        frame.sentence_type,
        frame.fields.len(),
        frame.checksum
    );

    Ok(frame)
}

/// A decoded sentence, one variant per supported sentence type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    #[cfg(feature = "AAM")]
    AAM(AamData),
    #[cfg(feature = "BOD")]
    BOD(BodData),
    #[cfg(feature = "GGA")]
    GGA(GgaData),
    #[cfg(feature = "GLL")]
    GLL(GllData),
    #[cfg(feature = "HDT")]
    HDT(HdtData),
    #[cfg(feature = "RMC")]
    RMC(RmcData),
    #[cfg(feature = "RTE")]
    RTE(RteData),
    #[cfg(feature = "TXT")]
    TXT(TxtData),
    #[cfg(feature = "VTG")]
    VTG(VtgData),
    #[cfg(feature = "ZDA")]
    ZDA(ZdaData),
}

impl ParseResult {
    /// The frame the sentence was decoded from.
    pub fn frame(&self) -> &Frame {
        match *self {
            #[cfg(feature = "AAM")]
            ParseResult::AAM(ref data) => &data.frame,
            #[cfg(feature = "BOD")]
            ParseResult::BOD(ref data) => &data.frame,
            #[cfg(feature = "GGA")]
            ParseResult::GGA(ref data) => &data.frame,
            #[cfg(feature = "GLL")]
            ParseResult::GLL(ref data) => &data.frame,
            #[cfg(feature = "HDT")]
            ParseResult::HDT(ref data) => &data.frame,
            #[cfg(feature = "RMC")]
            ParseResult::RMC(ref data) => &data.frame,
            #[cfg(feature = "RTE")]
            ParseResult::RTE(ref data) => &data.frame,
            #[cfg(feature = "TXT")]
            ParseResult::TXT(ref data) => &data.frame,
            #[cfg(feature = "VTG")]
            ParseResult::VTG(ref data) => &data.frame,
            #[cfg(feature = "ZDA")]
            ParseResult::ZDA(ref data) => &data.frame,
        }
    }

    pub fn sentence_type(&self) -> SentenceType {
        match *self {
            #[cfg(feature = "AAM")]
            ParseResult::AAM(_) => SentenceType::AAM,
            #[cfg(feature = "BOD")]
            ParseResult::BOD(_) => SentenceType::BOD,
            #[cfg(feature = "GGA")]
            ParseResult::GGA(_) => SentenceType::GGA,
            #[cfg(feature = "GLL")]
            ParseResult::GLL(_) => SentenceType::GLL,
            #[cfg(feature = "HDT")]
            ParseResult::HDT(_) => SentenceType::HDT,
            #[cfg(feature = "RMC")]
            ParseResult::RMC(_) => SentenceType::RMC,
            #[cfg(feature = "RTE")]
            ParseResult::RTE(_) => SentenceType::RTE,
            #[cfg(feature = "TXT")]
            ParseResult::TXT(_) => SentenceType::TXT,
            #[cfg(feature = "VTG")]
            ParseResult::VTG(_) => SentenceType::VTG,
            #[cfg(feature = "ZDA")]
            ParseResult::ZDA(_) => SentenceType::ZDA,
        }
    }
}

/// Routes a frame to the parser of its sentence type.
pub fn parse_frame(frame: Frame) -> Result<ParseResult, Error> {
    let sentence_type = SentenceType::try_from(frame.sentence_type())?;

    match sentence_type {
        SentenceType::AAM => {
            cfg_if! {
                if #[cfg(feature = "AAM")] {
                    return parse_aam(frame).map(ParseResult::AAM);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::BOD => {
            cfg_if! {
                if #[cfg(feature = "BOD")] {
                    return parse_bod(frame).map(ParseResult::BOD);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::GGA => {
            cfg_if! {
                if #[cfg(feature = "GGA")] {
                    return parse_gga(frame).map(ParseResult::GGA);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::GLL => {
            cfg_if! {
                if #[cfg(feature = "GLL")] {
                    return parse_gll(frame).map(ParseResult::GLL);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::HDT => {
            cfg_if! {
                if #[cfg(feature = "HDT")] {
                    return parse_hdt(frame).map(ParseResult::HDT);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::RMC => {
            cfg_if! {
                if #[cfg(feature = "RMC")] {
                    return parse_rmc(frame).map(ParseResult::RMC);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::RTE => {
            cfg_if! {
                if #[cfg(feature = "RTE")] {
                    return parse_rte(frame).map(ParseResult::RTE);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::TXT => {
            cfg_if! {
                if #[cfg(feature = "TXT")] {
                    return parse_txt(frame).map(ParseResult::TXT);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::VTG => {
            cfg_if! {
                if #[cfg(feature = "VTG")] {
                    return parse_vtg(frame).map(ParseResult::VTG);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        SentenceType::ZDA => {
            cfg_if! {
                if #[cfg(feature = "ZDA")] {
                    return parse_zda(frame).map(ParseResult::ZDA);
                } else {
                    return Err(Error::DisabledSentence);
                }
            }
        }
        sentence_type => Err(Error::Unsupported(sentence_type)),
    }
}

/// Parses a NMEA sentence, rejecting wrong checksums.
///
/// Same as [`parse_str_with`] with [`ChecksumPolicy::AllowMissing`].
pub fn parse_str(line: &str) -> Result<ParseResult, Error> {
    parse_str_with(line, ChecksumPolicy::default())
}

/// Parses a NMEA sentence, applying `policy` to its checksum.
pub fn parse_str_with(line: &str, policy: ChecksumPolicy) -> Result<ParseResult, Error> {
    let frame = decode_frame(line)?;
    frame.verify_checksum(policy)?;
    parse_frame(frame)
}

/// Parses a NMEA sentence from raw bytes, rejecting wrong checksums.
pub fn parse_bytes(bytes: &[u8]) -> Result<ParseResult, Error> {
    let line = str::from_utf8(bytes).map_err(|_| FramingError::NotAscii)?;
    parse_str(line)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quickcheck::{QuickCheck, TestResult};

    use super::*;

    #[test]
    fn test_decode_frame() {
        let frame = decode_frame("$GPAAM,A,A,0.10,N,WPTNME*32\r\n").unwrap();
        assert_eq!(frame.start(), StartDelimiter::Parametric);
        assert_eq!(frame.talker_id(), "GP");
        assert_eq!(frame.sentence_type(), "AAM");
        assert_eq!(frame.fields(), ["A", "A", "0.10", "N", "WPTNME"]);
        assert_eq!(frame.checksum(), Checksum::Valid(0x32));
        assert_eq!(frame.calc_checksum(), 0x32);
    }

    #[test]
    fn test_decode_encapsulated_frame() {
        let frame = decode_frame("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C").unwrap();
        assert_eq!(frame.start(), StartDelimiter::Encapsulation);
        assert_eq!(frame.talker_id(), "AI");
        assert_eq!(frame.sentence_type(), "VDM");
        assert_eq!(frame.fields().len(), 6);
        assert_eq!(frame.fields()[2], "");
        assert!(frame.checksum().is_valid());
    }

    #[test]
    fn test_empty_fields_are_preserved() {
        let frame = decode_frame("$GPGGA,,,,,,0,,,,,,,,*66").unwrap();
        assert_eq!(frame.fields().len(), 14);
        assert_eq!(frame.fields()[5], "0");
        assert!(frame.fields().iter().enumerate().all(|(i, f)| i == 5 || f.is_empty()));
        assert!(frame.checksum().is_valid());

        let frame = decode_frame("$GPTXT,").unwrap();
        assert_eq!(frame.fields(), [""]);

        let frame = decode_frame("$GPTXT*4F").unwrap();
        assert!(frame.fields().is_empty());
    }

    #[test]
    fn test_checksum_outcomes() {
        let frame = decode_frame("$GPRTE,2,1,c,0,PBRCPK,PBRTO*73").unwrap();
        assert_eq!(
            frame.checksum(),
            Checksum::Invalid {
                calculated: 0x47,
                found: 0x73
            }
        );
        assert_eq!(
            frame.verify_checksum(ChecksumPolicy::AllowMissing),
            Err(FramingError::ChecksumMismatch {
                calculated: 0x47,
                found: 0x73
            })
        );
        assert_eq!(frame.verify_checksum(ChecksumPolicy::Ignore), Ok(()));

        // lowercase hex digits are accepted
        let frame = decode_frame("$GPRTE,2,1,c,0,PBRCPK,PBRTO*47").unwrap();
        assert_eq!(frame.checksum(), Checksum::Valid(0x47));
        let frame = decode_frame("$GPGGA,133605.0,5521.75946,N,03731.93769,E,0,00,,,M,,M,,*4f")
            .unwrap();
        assert_eq!(frame.checksum(), Checksum::Valid(0x4F));

        let frame = decode_frame("$GPRTE,2,1,c,0,PBRCPK,PBRTO").unwrap();
        assert_eq!(frame.checksum(), Checksum::Absent);
        assert_eq!(frame.verify_checksum(ChecksumPolicy::AllowMissing), Ok(()));
        assert_eq!(
            frame.verify_checksum(ChecksumPolicy::Require),
            Err(FramingError::MissingChecksum)
        );
    }

    #[test]
    fn test_framing_errors() {
        assert_eq!(decode_frame(""), Err(FramingError::Empty));
        assert_eq!(decode_frame("\r\n"), Err(FramingError::Empty));
        assert_eq!(
            decode_frame("GPGGA,1,2"),
            Err(FramingError::InvalidStart('G'))
        );
        assert_eq!(decode_frame("$GPGGA,ü"), Err(FramingError::NotAscii));
        assert_eq!(
            decode_frame("$G,1,2"),
            Err(FramingError::MalformedAddress("G".to_owned()))
        );
        assert_eq!(
            decode_frame("$,GRMC,,A"),
            Err(FramingError::MalformedAddress("".to_owned()))
        );
        assert_eq!(
            decode_frame("$GP-GA,1"),
            Err(FramingError::MalformedAddress("GP-GA".to_owned()))
        );
        assert_eq!(
            decode_frame("$GP,1,2*00"),
            Err(FramingError::MissingSentenceType("GP".to_owned()))
        );
        assert!(matches!(
            decode_frame("$GPRTE,2,1*4"),
            Err(FramingError::Syntax { offset: 11, .. })
        ));
        assert!(matches!(
            decode_frame("$GPRTE,2,1*XY"),
            Err(FramingError::Syntax { .. })
        ));
        assert!(matches!(
            decode_frame("$GPRTE,2,1*4711"),
            Err(FramingError::Syntax { .. })
        ));
    }

    #[test]
    fn test_display_renders_wire_form() {
        let line = "$GNGGA,203415.000,6325.6138,N,01021.4290,E,1,8,2.42,72.5,M,41.5,M,,*7C";
        assert_eq!(decode_frame(line).unwrap().to_string(), line);

        // a wrong checksum is replaced by the calculated one
        let frame: Frame = "$GPRTE,2,1,c,0,PBRCPK,PBRTO*73".parse().unwrap();
        assert_eq!(frame.to_string(), "$GPRTE,2,1,c,0,PBRCPK,PBRTO*47");
    }

    #[test]
    fn test_parse_str_policies() {
        let line = "$GPRTE,2,1,c,0,PBRCPK,PBRTO*73";
        assert_eq!(
            parse_str(line).unwrap_err(),
            Error::Framing(FramingError::ChecksumMismatch {
                calculated: 0x47,
                found: 0x73
            })
        );
        assert_eq!(
            parse_str_with(line, ChecksumPolicy::Ignore)
                .unwrap()
                .sentence_type(),
            SentenceType::RTE
        );
        assert_eq!(
            parse_str_with("$GPHDT,274.07,T", ChecksumPolicy::Require).unwrap_err(),
            Error::Framing(FramingError::MissingChecksum)
        );
    }

    #[test]
    fn test_parse_frame_dispatch_errors() {
        let frame = decode_frame("$GPDTM,W84,,0.0,N,0.0,E,0.0,W84*6F").unwrap();
        assert_eq!(
            parse_frame(frame).unwrap_err(),
            Error::Unsupported(SentenceType::DTM)
        );
        let frame = decode_frame("$GPXYZ,1,2").unwrap();
        assert_eq!(
            parse_frame(frame).unwrap_err(),
            Error::Unknown("XYZ".to_owned())
        );
    }

    #[test]
    fn test_parse_bytes() {
        let result = parse_bytes(b"$HEHDT,274.07,T*19").unwrap();
        assert_eq!(result.frame().talker_id(), "HE");
        assert_eq!(
            parse_bytes(b"$HEHDT,\xff*03").unwrap_err(),
            Error::Framing(FramingError::NotAscii)
        );
    }

    fn check_checksum_verification(sentence_type: Vec<u8>, found: u8) -> TestResult {
        if sentence_type.is_empty() {
            return TestResult::discard();
        }
        let sentence_type: String = sentence_type
            .iter()
            .map(|b| char::from(b'A' + b % 26))
            .collect();
        let line = format!("$GP{sentence_type},1,,x*{found:02x}");
        let frame = decode_frame(&line).unwrap();
        let calculated = checksum(line.as_bytes()[1..line.len() - 3].iter());
        TestResult::from_bool(frame.checksum().is_valid() == (calculated == found))
    }

    fn check_fields_roundtrip(fields: Vec<Vec<u8>>) -> TestResult {
        if fields.is_empty() {
            return TestResult::discard();
        }
        let fields: Vec<String> = fields
            .iter()
            .map(|field| {
                field
                    .iter()
                    .map(|b| match b % 94 + 33 {
                        b'*' | b',' => '_',
                        c => char::from(c),
                    })
                    .collect()
            })
            .collect();
        let line = format!("$GPXXX,{}", fields.join(","));
        let frame = decode_frame(&line).unwrap();
        TestResult::from_bool(frame.fields() == fields.as_slice())
    }

    #[test]
    fn test_checksum_property() {
        assert!(!check_checksum_verification(b"GGA".to_vec(), 0x00).is_failure());
        QuickCheck::new()
            .tests(10_000)
            .quickcheck(check_checksum_verification as fn(Vec<u8>, u8) -> TestResult);
    }

    #[test]
    fn test_fields_property() {
        assert!(!check_fields_roundtrip(vec![vec![], vec![], b"A".to_vec()]).is_failure());
        QuickCheck::new()
            .tests(10_000)
            .quickcheck(check_fields_roundtrip as fn(Vec<Vec<u8>>) -> TestResult);
    }
}
