use crate::{Error, FieldDecoder, Frame, SentenceType};

/// TXT - Text transmission
///
/// ```text
///        1  2  3  4
///        |  |  |  |
/// $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
///
/// 1. Total number of messages in this transmission, 01..99
/// 2. Message number in this transmission, range 01..xx
/// 3. Text identifier, u-blox GPS receivers specify the severity of the
///    message with this number. 00 = ERROR, 01 = WARNING, 02 = NOTICE, 07 = USER
/// 4. Any ASCII text
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TxtData {
    pub frame: Frame,
    pub count: i64,
    pub seq: i64,
    pub text_ident: i64,
    pub text: String,
}

/// Parse TXT message from u-blox device
///
/// `$GNTXT,01,01,02,u-blox AG - www.u-blox.com*4E`
pub fn parse_txt(frame: Frame) -> Result<TxtData, Error> {
    let mut p = FieldDecoder::new(&frame);
    p.assert_type(SentenceType::TXT);
    let count = p.integer(0, "number of messages");
    let seq = p.integer(1, "message number");
    let text_ident = p.integer(2, "text identifier");
    let text = p.string(3, "text");
    p.finish()?;

    Ok(TxtData {
        frame,
        count,
        seq,
        text_ident,
        text,
    })
}
