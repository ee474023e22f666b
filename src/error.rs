use crate::SentenceType;

/// Errors raised while splitting a raw line into a [`Frame`](crate::Frame).
///
/// A framing error aborts decoding, no [`Frame`](crate::Frame) is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FramingError {
    /// The line was empty (after trimming the line terminator).
    #[error("empty sentence")]
    Empty,
    /// The provided input contains other characters apart from ASCII.
    #[error("provided input includes non-ASCII characters")]
    NotAscii,
    /// The line does not start with `$` or `!`.
    #[error("sentence must start with '$' or '!', found '{0}'")]
    InvalidStart(char),
    /// The address token is too short or contains characters other than ASCII alphanumerics.
    #[error("malformed address field '{0}'")]
    MalformedAddress(String),
    /// The address token holds only the talker ID.
    #[error("address field '{0}' is too short to contain a sentence type")]
    MissingSentenceType(String),
    /// The sentence structure could not be parsed, e.g. a broken `*hh` terminator.
    #[error("unparseable sentence structure at byte {offset} ({kind:?})")]
    Syntax {
        offset: usize,
        kind: nom::error::ErrorKind,
    },
    /// The checksum of the sentence was corrupt or wrong.
    #[error("checksum mismatch (calculated = {calculated:02X}, found = {found:02X})")]
    ChecksumMismatch { calculated: u8, found: u8 },
    /// The sentence carries no checksum but the caller requires one.
    #[error("sentence has no checksum")]
    MissingChecksum,
}

/// The reason a single field could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldErrorKind {
    #[error("index out of range, sentence has {len} fields")]
    OutOfRange { len: usize },
    #[error("not a base-10 integer")]
    InvalidInteger,
    #[error("expected a value in {min}..={max}")]
    NotInRange { min: i64, max: i64 },
    #[error("not a decimal number")]
    InvalidFloat,
    #[error("expected one of {allowed:?}")]
    NotInSet { allowed: &'static [&'static str] },
    #[error("invalid time: {0}")]
    InvalidTime(&'static str),
    #[error("invalid date: {0}")]
    InvalidDate(&'static str),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(&'static str),
    #[error("invalid hemisphere, expected one of N, S, E, W")]
    InvalidHemisphere,
}

/// A field-level failure recorded by the [`FieldDecoder`](crate::FieldDecoder).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field {index} ({name}) = '{value}': {kind}")]
pub struct FieldError {
    /// Zero-based field index.
    pub index: usize,
    /// Human readable field name.
    pub name: &'static str,
    /// The offending raw value, empty when the field is missing.
    pub value: String,
    pub kind: FieldErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Framing(#[from] FramingError),
    /// A sentence was passed to the wrong sentence specific parser.
    #[error("wrong sentence type (expected = '{expected}', found = '{found}')")]
    WrongSentenceType {
        expected: SentenceType,
        found: String,
    },
    #[error(transparent)]
    Field(#[from] FieldError),
    /// The sentence is recognized but it is not supported by the crate.
    #[error("unsupported NMEA sentence '{0}'")]
    Unsupported(SentenceType),
    /// The sentence type is unknown for this crate.
    #[error("unknown NMEA sentence type '{0}'")]
    Unknown(String),
    /// The current sentence is parsable but its feature has been disabled.
    #[error("sentence is parsable but its feature is disabled")]
    DisabledSentence,
}

impl Error {
    /// Returns the field error, if this is one.
    pub fn as_field_error(&self) -> Option<&FieldError> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}
