//! JSON persistence for comment pools and survey sets

use crate::error::Result;
use crate::types::{CommentTemplate, FeedbackRecord, SurveyRow};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Read a JSON document from `path`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    let value = serde_json::from_reader(reader)?;
    debug!("Loaded {}", path.display());
    Ok(value)
}

/// Write `value` as pretty JSON to `path`, creating parent directories
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    debug!("Wrote {}", path.display());
    Ok(())
}

pub fn load_comment_pool(path: &Path) -> Result<Vec<CommentTemplate>> {
    load_json(path)
}

/// Survey input: full generated records, or bare rows from another source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurveySet {
    Records(Vec<FeedbackRecord>),
    Rows(Vec<SurveyRow>),
}

impl SurveySet {
    pub fn load(path: &Path) -> Result<Self> {
        load_json(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_json(path, self)
    }

    pub fn len(&self) -> usize {
        match self {
            SurveySet::Records(records) => records.len(),
            SurveySet::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Box<dyn Iterator<Item = &SurveyRow> + '_> {
        match self {
            SurveySet::Records(records) => Box::new(records.iter().map(|r| &r.survey)),
            SurveySet::Rows(rows) => Box::new(rows.iter()),
        }
    }

    pub fn rows_mut(&mut self) -> Box<dyn Iterator<Item = &mut SurveyRow> + '_> {
        match self {
            SurveySet::Records(records) => Box::new(records.iter_mut().map(|r| &mut r.survey)),
            SurveySet::Rows(rows) => Box::new(rows.iter_mut()),
        }
    }
}
