//! Storage module for saving and loading cards and session logs.
//!
//! Card files are a stream of JSON objects, one card per line. There is no
//! header or record count: reading stops at end of file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, StorageError};
use crate::models::Card;

/// Load every card from a card file.
///
/// The whole file is parsed before anything is returned, so a malformed
/// record never yields a partial import.
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    if !path.exists() {
        return Err(StorageError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| StorageError::io(path, e))?;
    let stream = serde_json::Deserializer::from_reader(BufReader::new(file)).into_iter::<Card>();

    let mut cards = Vec::new();
    for card in stream {
        match card {
            Ok(card) => cards.push(card),
            Err(e) if e.is_io() => {
                let source = std::io::Error::from(e);
                return Err(StorageError::io(path, source));
            }
            Err(e) => {
                return Err(StorageError::Malformed {
                    line: e.line(),
                    source: e,
                })
            }
        }
    }

    log::debug!("read {} cards from {:?}", cards.len(), path);
    Ok(cards)
}

/// Save cards to a card file, replacing its contents.
pub fn save_cards<'a>(path: &Path, cards: impl IntoIterator<Item = &'a Card>) -> Result<usize> {
    let file = File::create(path).map_err(|e| StorageError::io(path, e))?;
    let mut out = BufWriter::new(file);

    let mut count = 0;
    for card in cards {
        serde_json::to_writer(&mut out, card).map_err(|e| StorageError::io(path, e.into()))?;
        writeln!(out).map_err(|e| StorageError::io(path, e))?;
        count += 1;
    }
    out.flush().map_err(|e| StorageError::io(path, e))?;

    log::debug!("wrote {} cards to {:?}", count, path);
    Ok(count)
}

/// Write a session log, one entry per line, replacing the file's contents.
pub fn save_log(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).map_err(|e| StorageError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{}", line).map_err(|e| StorageError::io(path, e))?;
    }
    out.flush().map_err(|e| StorageError::io(path, e))?;
    Ok(())
}
