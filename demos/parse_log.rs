use std::{collections::HashMap, env, fs::read_to_string};

use log::{info, warn};
use nmea_decoder::{Error, ParseResult, parse_str};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/nmea1.log".to_owned());
    let log = read_to_string(&path)?;

    let mut counts = HashMap::new();
    let mut failed = 0usize;
    for (line_index, line) in log.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match parse_str(line) {
            Ok(result) => {
                if let ParseResult::GGA(gga) = &result {
                    info!(
                        "{}: fix at {:.5}, {:.5} with {} satellites",
                        gga.frame.talker_id(),
                        gga.latitude,
                        gga.longitude,
                        gga.num_satellites
                    );
                }
                *counts.entry(result.sentence_type()).or_insert(0usize) += 1;
            }
            Err(Error::Unsupported(sentence_type)) => {
                info!("line {}: skipping {sentence_type}", line_index + 1);
            }
            Err(err) => {
                failed += 1;
                warn!("line {}: {line}: {err}", line_index + 1);
            }
        }
    }

    info!("{path}: {counts:?}, {failed} lines failed");

    Ok(())
}
