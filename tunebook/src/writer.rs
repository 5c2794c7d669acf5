//! Writing rendered tunes to disk
//!
//! Tunes are either written to one file each ([`write_per_tune()`]), or concatenated into a single
//! tunebook ([`write_single()`]). Both write tunes in input order, one at a time.

use crate::{Tune, name};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// A progress message is logged every time this many tunes have been processed
pub const PROGRESS_INTERVAL: usize = 100;

/// Make sure a directory (and its parents) exists before writing into it
///
/// Returns `true` if the directory had to be created.
pub fn prepare_dir<P>(dir: P) -> Result<bool, WriteError>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_owned(),
        source,
    })?;

    log::debug!("Created directory {}", dir.display());
    Ok(true)
}

/// The outcome of [`write_per_tune()`]
#[derive(Debug, Default)]
pub struct Report {
    /// The paths that were successfully written
    pub written: Vec<PathBuf>,

    /// The tunes that could not be written, with the reason why
    pub skipped: Vec<(PathBuf, io::Error)>,
}

impl Report {
    /// The number of tunes that were successfully written
    pub fn written_count(&self) -> usize {
        self.written.len()
    }
}

/// Write every tune to its own file in `dir`
///
/// Files are named after [`name::file_name()`] and overwritten if they already exist. A tune that
/// cannot be written is logged and skipped; the remaining tunes are still processed.
pub fn write_per_tune<'a, I, P>(tunes: I, dir: P) -> Result<Report, WriteError>
where
    I: IntoIterator<Item = &'a Tune>,
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    prepare_dir(dir)?;

    let mut report = Report::default();

    for (index, tune) in tunes.into_iter().enumerate() {
        let path = dir.join(name::file_name(tune));

        match write_tune(tune, &path) {
            Ok(()) => report.written.push(path),
            Err(error) => {
                log::warn!("Could not write {}: {error}", path.display());
                report.skipped.push((path, error));
            }
        }

        // Progress goes to the logger, the caller decides whether it is shown
        if (index + 1) % PROGRESS_INTERVAL == 0 {
            log::info!("Processed {} tunes...", index + 1);
        }
    }

    Ok(report)
}

fn write_tune(tune: &Tune, path: &Path) -> Result<(), io::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    tune.to_writer(&mut writer)?;
    writer.flush()
}

/// Write all tunes into a single file at `path`, each followed by a blank line
///
/// The parent directory is created if needed. Unlike [`write_per_tune()`], any failure aborts the
/// whole operation, in which case the file may be left partially written.
///
/// Returns the number of tunes written.
pub fn write_single<'a, I, P>(tunes: I, path: P) -> Result<usize, WriteError>
where
    I: IntoIterator<Item = &'a Tune>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        prepare_dir(parent)?;
    }

    let file = File::create(path).map_err(|source| WriteError::CreateFile {
        path: path.to_owned(),
        source,
    })?;

    let write_error = |source: io::Error| WriteError::Write {
        path: path.to_owned(),
        source,
    };

    let mut writer = BufWriter::new(file);
    let mut count = 0;

    for tune in tunes {
        tune.to_writer(&mut writer).map_err(write_error)?;
        writeln!(writer).map_err(write_error)?;

        count += 1;
        if count % PROGRESS_INTERVAL == 0 {
            log::info!("Processed {count} tunes...");
        }
    }

    writer.flush().map_err(write_error)?;

    Ok(count)
}

/// Errors that might be returned when writing tunes to disk
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created
    #[error("Could not create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created
    #[error("Could not create file {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an already created file failed
    #[error("Could not write to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
