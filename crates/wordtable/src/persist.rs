//! # Snapshot Persistence
//!
//! Tables serialize to an opaque JSON blob holding their full state;
//! restoring re-validates that state, so a damaged blob fails to load
//! rather than producing an inconsistent table.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::errors::WTResult;

/// Save/restore to a JSON snapshot.
pub trait JsonSnapshot: Serialize + DeserializeOwned {
    /// Write the snapshot to `writer`.
    fn save_json<W: Write>(
        &self,
        writer: W,
    ) -> WTResult<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Read a snapshot from `reader`.
    fn load_json<R: Read>(reader: R) -> WTResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the snapshot to the file at `path`.
    fn save_json_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> WTResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a snapshot from the file at `path`.
    fn load_json_path<P: AsRef<Path>>(path: P) -> WTResult<Self> {
        Self::load_json(BufReader::new(File::open(path)?))
    }
}
