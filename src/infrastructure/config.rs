use crate::domain::error::ChartError;
use crate::domain::palette::{Palette, DEFAULT_COLORS};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_palette() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            palette: default_palette(),
        }
    }
}

impl ChartSettings {
    pub fn palette(&self) -> Result<Palette, ChartError> {
        Palette::new(self.palette.clone())
    }
}

/// Load `config/server.{toml,yaml,json}` if present, then apply `CHART_*`
/// environment overrides (e.g. `CHART_SERVER__BIND_ADDR`,
/// `CHART_CHART__PALETTE=#111,#222`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("CHART")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("chart.palette")
        .try_parsing(true)
}
