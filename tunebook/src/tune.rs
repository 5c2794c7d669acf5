//! Tune records and the JSON decoder that produces them

use serde::Deserialize;
use std::{
    io::{self, Read},
    path::Path,
    slice,
};
use thiserror::Error;

/// A single setting of a tune, as published by a tune-sharing site
///
/// Every field is kept as the string it was decoded from. Nothing is interpreted here, apart from
/// treating an empty [`date`](Tune::date) or [`username`](Tune::username) as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Tune {
    /// Identifier of the tune this setting belongs to (not used in the output)
    #[serde(default)]
    pub tune_id: Option<String>,

    /// Identifier of this particular setting
    pub setting_id: String,

    /// The title of the tune
    pub name: String,

    /// The rhythm, e.g. "reel" or "jig"
    #[serde(rename = "type")]
    pub kind: String,

    /// The time signature, e.g. "4/4"
    pub meter: String,

    /// The key and mode, e.g. "Gmajor" or "Ador"
    pub mode: String,

    /// The notation body, copied verbatim into the output
    pub abc: String,

    #[serde(default)]
    date: Option<String>,

    #[serde(default)]
    username: Option<String>,
}

impl Tune {
    /// Create a tune from its required fields
    pub fn new(
        setting_id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        meter: impl Into<String>,
        mode: impl Into<String>,
        abc: impl Into<String>,
    ) -> Self {
        Self {
            tune_id: None,
            setting_id: setting_id.into(),
            name: name.into(),
            kind: kind.into(),
            meter: meter.into(),
            mode: mode.into(),
            abc: abc.into(),
            date: None,
            username: None,
        }
    }

    /// Attach the date the setting was added
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Attach the user that submitted the setting
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// The date the setting was added, if any
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    /// The user that submitted the setting, if any
    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// An ordered collection of [`Tune`]s, decoded from a JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tunes {
    tunes: Vec<Tune>,
}

impl Tunes {
    /// Decode tunes from a byte slice containing a JSON array
    ///
    /// Decoding is all-or-nothing: one malformed element rejects the entire input.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let tunes = serde_json::from_slice(bytes)?;
        Ok(Self { tunes })
    }

    /// Decode tunes from an arbitrary I/O reader
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::from_slice(&bytes)?)
    }

    /// Decode tunes from a JSON file on disk
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let bytes = std::fs::read(path).map_err(FromPathError::Read)?;
        Ok(Self::from_slice(&bytes)?)
    }

    /// The number of tunes in the collection
    pub fn len(&self) -> usize {
        self.tunes.len()
    }

    /// Is the collection empty?
    pub fn is_empty(&self) -> bool {
        self.tunes.is_empty()
    }

    /// Iterate over the tunes in input order
    pub fn iter(&self) -> slice::Iter<'_, Tune> {
        self.tunes.iter()
    }

    /// Access the tunes as a slice
    pub fn as_slice(&self) -> &[Tune] {
        &self.tunes
    }
}

impl From<Vec<Tune>> for Tunes {
    fn from(tunes: Vec<Tune>) -> Self {
        Self { tunes }
    }
}

impl<'a> IntoIterator for &'a Tunes {
    type Item = &'a Tune;
    type IntoIter = slice::Iter<'a, Tune>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The input was not a well-formed JSON array of tune objects
#[derive(Debug, Error)]
#[error("The input is not a valid array of tunes")]
pub struct DecodeError(#[from] serde_json::Error);

impl DecodeError {
    /// The line at which decoding failed (1-based)
    pub fn line(&self) -> usize {
        self.0.line()
    }

    /// The column at which decoding failed (1-based)
    pub fn column(&self) -> usize {
        self.0.column()
    }
}

/// Errors that might be returned from [`Tunes::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Any failure that has to do with I/O
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// The bytes read could not be decoded
    #[error("Decoding the tunes failed")]
    Decode(#[from] DecodeError),
}

/// Errors that might be returned from [`Tunes::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// The file is missing or could not be read
    #[error("Could not read the input file")]
    Read(#[source] io::Error),

    /// The file contents could not be decoded
    #[error("Decoding the tunes failed")]
    Decode(#[from] DecodeError),
}
