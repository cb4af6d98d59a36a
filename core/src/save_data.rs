use crate::State;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

#[derive(Debug)]
pub enum SaveLoadError {
    CantOpen,
    CantWrite,
    CantRead,
}

/// On-disk snapshot of a run: the particle state plus the box dimensions
/// the state was prepared in, kept as configuration for the next command.
#[derive(Serialize, Deserialize)]
pub struct DataFile {
    pub width: f64,
    pub height: f64,
    pub state: State,
}

impl DataFile {
    pub fn init_from_state(state: &State, width: f64, height: f64) -> Self {
        DataFile {
            width,
            height,
            state: state.clone(),
        }
    }

    pub fn save_to_file(&self, path: &Path, pretty: bool) -> Result<(), SaveLoadError> {
        let file = if !path.exists() {
            File::create(path)
        } else {
            OpenOptions::new().truncate(true).write(true).open(path)
        };
        if file.is_err() {
            return Err(SaveLoadError::CantOpen);
        }
        let file = file.unwrap();
        let mut buf_writer = BufWriter::new(file);
        let res = if pretty {
            serde_json::ser::to_writer_pretty(&mut buf_writer, self)
        } else {
            serde_json::ser::to_writer(&mut buf_writer, self)
        };
        if res.is_err() {
            return Err(SaveLoadError::CantWrite);
        }
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SaveLoadError> {
        let file = File::open(path).map_err(|_| SaveLoadError::CantOpen)?;
        let buf_reader = BufReader::new(file);
        serde_json::de::from_reader(buf_reader).map_err(|_| SaveLoadError::CantRead)
    }
}
