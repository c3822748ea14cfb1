use crate::report::GeneratorConfig;
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// How to invoke the external report generator
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "default_generator_command")]
    pub command: String,
    #[serde(default = "default_generator_args")]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_service_name() -> String {
    "interview-report".to_string()
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_generator_command() -> String {
    "python3".to_string()
}

fn default_generator_args() -> Vec<String> {
    vec!["scripts/generate_report.py".to_string()]
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            command: default_generator_command(),
            args: default_generator_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults when the file
    /// is absent
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl From<GeneratorSettings> for GeneratorConfig {
    fn from(settings: GeneratorSettings) -> Self {
        GeneratorConfig {
            command: settings.command,
            args: settings.args,
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}
