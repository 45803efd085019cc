use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub destination: DestinationConfig,
    #[serde(default)]
    pub organize: OrganizeConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Discovery roots. Empty means the environment defaults
    /// (desktop + documents).
    pub include: Vec<String>,
    /// Glob patterns excluded from the walk.
    pub exclude: Vec<String>,
    /// File extension to organize, matched case-sensitively.
    pub extension: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            extension: "mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationConfig {
    /// Destination root. None means `<downloads>/Music`.
    pub root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    /// Maximum files processed concurrently; 0 removes the bound.
    pub max_in_flight: usize,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self { max_in_flight: 64 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub enabled: bool,
    /// Capture output directory. None means `<downloads>/Screenshots`.
    pub output_dir: Option<String>,
    pub interval_ms: u64,
    pub region: RegionConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: None,
            interval_ms: 5000,
            region: RegionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 1280,
            height: 720,
        }
    }
}

impl From<RegionConfig> for tunesort_providers::Region {
    fn from(region: RegionConfig) -> Self {
        Self {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
        }
    }
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
