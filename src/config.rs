use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,

    #[serde(default)]
    pub demo: DemoConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Number of slots. Signed so that a bad value in the file is reported
    /// as an invalid capacity instead of a parse error.
    pub capacity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How many records the demo run inserts.
    pub records: usize,
    /// Value of the first record; later values count up from it.
    pub start: char,
    /// Drain after every N inserts. 0 = drain once at the end.
    pub drain_every: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// flexi_logger spec, e.g. "warn" or "info, ringlog::util=trace"
    pub level: String,
    /// Write a rotated log file into this directory. None = stderr only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for BufferConfig {
    fn default() -> Self {
        Self { capacity: 5 }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { records: 10, start: 'a', drain_every: 0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".into(), directory: None }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    /// Load from the default location. A missing file yields defaults (and
    /// writes them out, best-effort); an existing file that fails to read or
    /// parse is an error.
    pub fn load() -> Result<Self> {
        match Config::config_path() {
            Some(path) => load_or_default(&path),
            None       => Ok(Config::default()),
        }
    }

    /// Strict load of an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ringlog").join("ringlog.toml"))
    }
}

fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        return Config::load_from(path);
    }
    let _ = write_defaults(path);
    Ok(Config::default())
}

fn write_defaults(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# ringlog configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}
