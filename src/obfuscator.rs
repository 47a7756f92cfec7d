use crate::config::ObfuscationConfig;
use crate::error::{CheckError, Result};
use crate::params::{parse_params, Params};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fixed figures reported by the simulated pipeline.
pub const SIMULATED_BOGUS_CODE: &str = "Approximately 50 lines (simulated)";
pub const SIMULATED_CYCLES: u32 = 3;
pub const SIMULATED_STRING_OBFUSCATIONS: u32 = 5;
pub const SIMULATED_FAKE_LOOPS: u32 = 2;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Windows,
    Linux,
}

impl Platform {
    pub fn output_extension(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Linux => ".bin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("Windows"),
            Platform::Linux => f.write_str("Linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => anyhow::bail!("unknown platform '{other}', expected windows or linux"),
        }
    }
}

/// A file handed over by the user.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| CheckError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObfuscationSettings {
    pub platform: Platform,
    pub level: u8,
    pub custom_params: String,
}

/// Echo of everything the user submitted, as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputParameters {
    pub platform: Platform,
    pub obfuscation_level: u8,
    pub custom_params_raw: String,
    pub custom_params: Params,
    pub original_filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObfuscationReport {
    pub input_parameters: InputParameters,
    pub transform: String,
    pub output_file: PathBuf,
    pub output_file_size: u64,
    pub method_of_obfuscation: String,
    pub bogus_code_generated: String,
    pub cycles_completed: u32,
    pub string_obfuscations: u32,
    pub fake_loops_inserted: u32,
}

/// Seam for a real obfuscation backend.
pub trait Transform: Send + Sync {
    fn transform(&self, input: &[u8], params: &InputParameters) -> Result<Vec<u8>>;
    fn name(&self) -> &str;
}

/// Byte-for-byte copy.
#[derive(Debug, Default)]
pub struct CopyTransform;

impl Transform for CopyTransform {
    fn transform(&self, input: &[u8], _params: &InputParameters) -> Result<Vec<u8>> {
        Ok(input.to_vec())
    }

    fn name(&self) -> &str {
        "copy"
    }
}

/// Final path component of an uploaded name, or `None` when nothing is left.
pub fn safe_filename(name: &str) -> Option<String> {
    let normalized = name.replace('\\', "/");
    let file_name = Path::new(&normalized).file_name()?.to_string_lossy();
    let trimmed = file_name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `obfuscated_<stem><ext>` where the extension follows the target platform.
pub fn output_file_name(original: &str, platform: Platform) -> String {
    let stem = Path::new(original)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| original.to_string());
    format!("obfuscated_{}{}", stem, platform.output_extension())
}

pub struct Obfuscator {
    uploads_dir: PathBuf,
    outputs_dir: PathBuf,
    transform: Box<dyn Transform>,
}

impl Obfuscator {
    pub fn new(config: &ObfuscationConfig) -> Self {
        Self {
            uploads_dir: PathBuf::from(&config.uploads_dir),
            outputs_dir: PathBuf::from(&config.outputs_dir),
            transform: Box::new(CopyTransform),
        }
    }

    pub fn with_transform(mut self, transform: Box<dyn Transform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn run(
        &self,
        upload: &Upload,
        settings: &ObfuscationSettings,
    ) -> Result<ObfuscationReport> {
        let original_filename =
            safe_filename(&upload.name).ok_or_else(|| CheckError::input_missing("uploaded file"))?;

        let level = settings.level.clamp(MIN_LEVEL, MAX_LEVEL);
        let input_parameters = InputParameters {
            platform: settings.platform,
            obfuscation_level: level,
            custom_params_raw: settings.custom_params.clone(),
            custom_params: parse_params(&settings.custom_params),
            original_filename: original_filename.clone(),
        };

        for dir in [&self.uploads_dir, &self.outputs_dir] {
            fs::create_dir_all(dir).map_err(|e| CheckError::io(dir, e))?;
        }

        let saved_input = self.uploads_dir.join(&original_filename);
        fs::write(&saved_input, &upload.bytes).map_err(|e| CheckError::io(&saved_input, e))?;
        log::debug!(
            "Saved upload {} ({} bytes)",
            saved_input.display(),
            upload.bytes.len()
        );

        let output_bytes = self.transform.transform(&upload.bytes, &input_parameters)?;
        let output_file = self
            .outputs_dir
            .join(output_file_name(&original_filename, settings.platform));
        fs::write(&output_file, &output_bytes).map_err(|e| CheckError::io(&output_file, e))?;

        let output_file_size = fs::metadata(&output_file)
            .map_err(|e| CheckError::io(&output_file, e))?
            .len();

        log::info!(
            "Wrote {} ({} bytes) using '{}' transform",
            output_file.display(),
            output_file_size,
            self.transform.name()
        );

        Ok(ObfuscationReport {
            input_parameters,
            transform: self.transform.name().to_string(),
            output_file,
            output_file_size,
            method_of_obfuscation: format!("Simulated Obfuscation (Level: {level})"),
            bogus_code_generated: SIMULATED_BOGUS_CODE.to_string(),
            cycles_completed: SIMULATED_CYCLES,
            string_obfuscations: SIMULATED_STRING_OBFUSCATIONS,
            fake_loops_inserted: SIMULATED_FAKE_LOOPS,
        })
    }
}
