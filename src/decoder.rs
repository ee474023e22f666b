//! The [`FieldDecoder`] used by every sentence parser.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    Error, FieldError, FieldErrorKind, Frame, SentenceType,
    sentences::utils::{parse_date, parse_hms, parse_lat_lon},
};

/// Typed, positional access to the fields of a [`Frame`].
///
/// The decoder keeps the first error it runs into. After that every accessor
/// returns a zero value without looking at the field, so a sentence parser
/// can read all of its fields in order and check the outcome once:
///
/// ```
/// use nmea_decoder::{decode_frame, FieldDecoder, SentenceType};
///
/// let frame = decode_frame("$GPHDT,274.07,T*03").unwrap();
/// let mut p = FieldDecoder::new(&frame);
/// p.assert_type(SentenceType::HDT);
/// let heading = p.float(0, "heading");
/// let reference = p.enum_string(1, "true", &["T"]);
/// p.finish().unwrap();
///
/// assert_eq!(heading, 274.07);
/// assert_eq!(reference, "T");
/// ```
#[derive(Debug)]
pub struct FieldDecoder<'a> {
    frame: &'a Frame,
    error: Option<Error>,
}

impl<'a> FieldDecoder<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Self { frame, error: None }
    }

    /// Number of fields in the frame.
    pub fn len(&self) -> usize {
        self.frame.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.fields().is_empty()
    }

    /// The first error recorded, if any.
    pub fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Consumes the decoder, returning the first error recorded.
    pub fn finish(self) -> Result<(), Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn set_error(&mut self, err: Error) {
        if self.error.is_none() {
            log::debug!(
                "decoding {}{} failed: {err}",
                self.frame.talker_id(),
                self.frame.sentence_type()
            );
            self.error = Some(err);
        }
    }

    fn fail(&mut self, index: usize, name: &'static str, value: &str, kind: FieldErrorKind) {
        self.set_error(Error::Field(FieldError {
            index,
            name,
            value: value.to_owned(),
            kind,
        }));
    }

    /// The raw field, `None` once an error has been recorded.
    fn field(&mut self, index: usize, name: &'static str) -> Option<&'a str> {
        if self.error.is_some() {
            return None;
        }
        let frame = self.frame;
        match frame.fields().get(index) {
            Some(value) => Some(value),
            None => {
                self.fail(
                    index,
                    name,
                    "",
                    FieldErrorKind::OutOfRange {
                        len: frame.fields().len(),
                    },
                );
                None
            }
        }
    }

    /// Checks the sentence type of the frame.
    pub fn assert_type(&mut self, expected: SentenceType) {
        if self.error.is_some() {
            return;
        }
        let found = self.frame.sentence_type();
        if found != expected.as_str() {
            self.set_error(Error::WrongSentenceType {
                expected,
                found: found.to_owned(),
            });
        }
    }

    /// The field verbatim, possibly empty.
    pub fn string(&mut self, index: usize, name: &'static str) -> String {
        self.field(index, name).map(str::to_owned).unwrap_or_default()
    }

    /// A base-10 integer, `0` for an empty field.
    pub fn integer(&mut self, index: usize, name: &'static str) -> i64 {
        match self.field(index, name) {
            None | Some("") => 0,
            Some(value) => value.parse().unwrap_or_else(|_| {
                self.fail(index, name, value, FieldErrorKind::InvalidInteger);
                0
            }),
        }
    }

    /// A base-10 integer within `min..=max`, `0` for an empty field.
    pub fn integer_in_range(
        &mut self,
        index: usize,
        name: &'static str,
        min: i64,
        max: i64,
    ) -> i64 {
        match self.field(index, name) {
            None | Some("") => 0,
            Some(value) => match value.parse::<i64>() {
                Ok(v) if (min..=max).contains(&v) => v,
                Ok(_) => {
                    self.fail(index, name, value, FieldErrorKind::NotInRange { min, max });
                    0
                }
                Err(_) => {
                    self.fail(index, name, value, FieldErrorKind::InvalidInteger);
                    0
                }
            },
        }
    }

    /// A decimal number, `0.0` for an empty field.
    pub fn float(&mut self, index: usize, name: &'static str) -> f64 {
        match self.field(index, name) {
            None | Some("") => 0.0,
            Some(value) => match value.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    self.fail(index, name, value, FieldErrorKind::InvalidFloat);
                    0.0
                }
            },
        }
    }

    /// A field that must be one of `allowed` (case-sensitive) or empty.
    pub fn enum_string(
        &mut self,
        index: usize,
        name: &'static str,
        allowed: &'static [&'static str],
    ) -> String {
        match self.field(index, name) {
            None => String::new(),
            Some(value) if value.is_empty() || allowed.contains(&value) => value.to_owned(),
            Some(value) => {
                self.fail(index, name, value, FieldErrorKind::NotInSet { allowed });
                String::new()
            }
        }
    }

    /// All fields from `index` to the end of the sentence.
    pub fn list_string(&mut self, index: usize, _name: &'static str) -> Vec<String> {
        if self.error.is_some() {
            return Vec::new();
        }
        self.frame
            .fields()
            .get(index..)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    /// A `hhmmss[.sss]` time of day, `None` for an empty field.
    pub fn time(&mut self, index: usize, name: &'static str) -> Option<NaiveTime> {
        match self.field(index, name) {
            None | Some("") => None,
            Some(value) => match parse_hms(value) {
                Ok(time) => Some(time),
                Err(kind) => {
                    self.fail(index, name, value, kind);
                    None
                }
            },
        }
    }

    /// A `ddmmyy` date, `None` for an empty field.
    pub fn date(&mut self, index: usize, name: &'static str) -> Option<NaiveDate> {
        match self.field(index, name) {
            None | Some("") => None,
            Some(value) => match parse_date(value) {
                Ok(date) => Some(date),
                Err(kind) => {
                    self.fail(index, name, value, kind);
                    None
                }
            },
        }
    }

    /// A coordinate in decimal degrees from a `ddmm.mmmm`/`dddmm.mmmm` field
    /// and its hemisphere field, negative for `S` and `W`.
    ///
    /// `0.0` when both fields are empty.
    pub fn lat_long(&mut self, index: usize, hemisphere_index: usize, name: &'static str) -> f64 {
        let (Some(value), Some(hemisphere)) = (
            self.field(index, name),
            self.field(hemisphere_index, name),
        ) else {
            return 0.0;
        };

        match (value, hemisphere) {
            ("", "") => 0.0,
            (_, "") => {
                self.fail(
                    hemisphere_index,
                    name,
                    hemisphere,
                    FieldErrorKind::InvalidHemisphere,
                );
                0.0
            }
            (value, hemisphere) => match parse_lat_lon(value, hemisphere) {
                Ok(v) => v,
                Err(kind @ FieldErrorKind::InvalidHemisphere) => {
                    self.fail(hemisphere_index, name, hemisphere, kind);
                    0.0
                }
                Err(kind) => {
                    self.fail(index, name, value, kind);
                    0.0
                }
            },
        }
    }
}
