use std::path::{Path, PathBuf};

use oasis_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OasisConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Saved-assessment collection.
    pub data_file: PathBuf,
    /// Where exported documents are written.
    pub output_dir: PathBuf,
    /// First line of the report header band.
    pub clinic_name: String,
    /// Second line of the report header band.
    pub report_title: String,
    /// IANA zone for footer timestamps and default assessment dates.
    /// `None` uses the system zone.
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Actor recorded on audit events. Added in v1.
    #[serde(default)]
    pub operator: String,
}

impl Default for OasisConfig {
    fn default() -> Self {
        let styles = DocumentStyles::default();
        Self {
            config_version: CURRENT_VERSION,
            data_file: default_data_file(),
            output_dir: PathBuf::from("."),
            clinic_name: styles.brand_title,
            report_title: styles.report_title,
            time_zone: None,
            operator: String::new(),
        }
    }
}

impl OasisConfig {
    pub fn document_styles(&self) -> DocumentStyles {
        DocumentStyles {
            brand_title: self.clinic_name.clone(),
            report_title: self.report_title.clone(),
            ..DocumentStyles::default()
        }
    }

    /// The configured operator, or the login name, or "unknown".
    pub fn operator(&self) -> String {
        if !self.operator.trim().is_empty() {
            return self.operator.trim().to_string();
        }
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    /// Current wall-clock time in the configured zone.
    pub fn now(&self) -> eyre::Result<jiff::Zoned> {
        match &self.time_zone {
            Some(name) => jiff::Timestamp::now()
                .in_tz(name)
                .map_err(|e| eyre::eyre!("invalid time_zone {name:?}: {e}")),
            None => Ok(jiff::Zoned::now()),
        }
    }
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oasis")
        .join("assessments.json")
}

/// `<config dir>/oasis/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("oasis").join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<OasisConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(OasisConfig::default());
        }
        Err(e) => {
            return Err(eyre::eyre!("failed to read config at {}: {e}", path.display()));
        }
    };

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0);

    let migrated = migrate(json, on_disk_version)?;
    let config: OasisConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update oasis."
        ));
    }

    // v0 → v1: add operator (empty; falls back to the login name)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("operator")
            .or_insert(serde_json::Value::String(String::new()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added operator)");
    }

    Ok(json)
}

pub fn save_config(config: &OasisConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
