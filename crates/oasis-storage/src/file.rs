use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use oasis_core::derive::derive_bmi;
use oasis_core::{AssessmentId, AssessmentRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::repository::{self, AssessmentRepository};

/// Current on-disk format version.
pub const STORE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    assessments: Vec<AssessmentRecord>,
}

/// The whole collection as one JSON document.
///
/// Every mutation reads the file, changes it and rewrites it atomically
/// (temp file + rename). Concurrent writers in other processes are
/// last-write-wins.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no assessment store yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let json: Value = serde_json::from_str(&contents)?;
        let version = store_version(&json);
        if version > STORE_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: version,
                supported: STORE_VERSION,
            });
        }

        let store: StoreFile = serde_json::from_value(migrate(json, version))?;
        Ok(store.assessments)
    }

    fn save(&self, assessments: Vec<AssessmentRecord>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let store = StoreFile {
            version: STORE_VERSION,
            assessments,
        };
        let json = serde_json::to_string_pretty(&store)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| StorageError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            count = store.assessments.len(),
            "assessment store written"
        );
        Ok(())
    }

    fn modify<T>(
        &self,
        f: impl FnOnce(&mut Vec<AssessmentRecord>) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut records = self.load()?;
        let out = f(&mut records)?;
        self.save(records)?;
        Ok(out)
    }
}

impl AssessmentRepository for JsonFileRepository {
    fn append(&self, record: AssessmentRecord) -> Result<(), StorageError> {
        let id = record.id;
        self.modify(|records| repository::append_unique(records, record))?;
        info!(assessment_id = %id, "assessment stored");
        Ok(())
    }

    fn list(&self) -> Result<Vec<AssessmentRecord>, StorageError> {
        self.load()
    }

    fn remove(&self, id: AssessmentId) -> Result<AssessmentRecord, StorageError> {
        let removed = self.modify(|records| repository::take(records, id))?;
        info!(assessment_id = %id, "assessment removed");
        Ok(removed)
    }
}

/// A bare array predates the version envelope and counts as version 0.
fn store_version(json: &Value) -> u32 {
    if json.is_array() {
        return 0;
    }
    json.get("version")
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Bring a raw store document up to [`STORE_VERSION`].
fn migrate(json: Value, from_version: u32) -> Value {
    match json {
        // v0 → v1: wrap the bare array, converting browser-form entries.
        Value::Array(entries) if from_version < 1 => {
            info!(count = entries.len(), "migrating assessment store from v0 to v1");
            let assessments: Vec<_> = entries.into_iter().map(from_form_entry).collect();
            json!({ "version": 1, "assessments": assessments })
        }
        other => other,
    }
}

/// Convert one entry saved by the browser form (Portuguese camelCase
/// keys, numbers possibly as strings, `Date.now()` string id) into the
/// record layout. Entries without a `nome` key pass through unchanged.
fn from_form_entry(entry: Value) -> Value {
    if entry.get("nome").is_none() {
        return entry;
    }

    let number = |key: &str| entry.get(key).and_then(form_number);
    let count = |key: &str| number(key).map(|n| n.round() as i64);
    let text = |key: &str| entry.get(key).and_then(Value::as_str).map(str::trim);

    let id = text("id")
        .and_then(|raw| raw.parse::<i64>().ok())
        .map(AssessmentId::at_millis)
        .unwrap_or_default();
    let height_cm = number("estatura");
    let mass_kg = number("massaCorporal");
    let bmi = height_cm
        .zip(mass_kg)
        .and_then(|(h, m)| derive_bmi(h, m))
        .or_else(|| number("imc"));
    let notes = entry
        .get("observacoes")
        .and_then(Value::as_str)
        .filter(|n| !n.trim().is_empty());

    json!({
        "id": id,
        "patient": {
            "name": text("nome"),
            "birth_date": text("dataNascimento"),
            "sex": text("genero"),
        },
        "assessment_date": text("dataAvaliacao"),
        "anthropometry": {
            "height_cm": height_cm,
            "mass_kg": mass_kg,
            "bmi": bmi,
            "body_fat_percent": number("percentGordura"),
            "lean_mass_percent": number("percentMassaMagra"),
        },
        "lower_limb": {
            "first_s": number("mmiTentativa1"),
            "second_s": number("mmiTentativa2"),
        },
        "grip": {
            "right_first_kg": number("preensaoDireita1"),
            "right_second_kg": number("preensaoDireita2"),
            "left_first_kg": number("preensaoEsquerda1"),
            "left_second_kg": number("preensaoEsquerda2"),
        },
        "six_minute_walk_steps": count("marcha6min"),
        "katz_points": count("katzPontos"),
        "lawton_points": count("lawtonPontos"),
        "tug_seconds": number("tugSegundos"),
        "notes": notes,
    })
}

/// Form inputs were saved either as JSON numbers or as their text.
fn form_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}
