use std::{
    collections::HashMap,
    path::PathBuf,
};

use crate::{
    error::{ Error, ErrorKind, Result },
    palette::ColorScope,
};

use serde::{ Serialize, Deserialize };

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub www: WwwConfig,
    pub frame: FrameConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut cfg = config::Config::default();
        cfg
            .merge(config::File::with_name("config").required(false))?
            .merge(config::Environment::with_prefix("FRAMECANVAS").separator("__"))?;
        let mut cfg: Config = cfg.try_into()?;

        if let Ok(port) = std::env::var("PORT") {
            // Heroku web port
            cfg.www.bind_port = port.parse()
                                    .map_err(|err| Error::from(ErrorKind::Configuration, err))?;
        }

        cfg.www.format_base_url()?;

        Ok(cfg)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("framecanvas.log"),
            level: log::LevelFilter::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WwwConfig {
    pub bind_host: String,
    pub bind_port: u16,
    pub base_url: String,
    pub workers: usize,
}

impl Default for WwwConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".into(),
            bind_port: 8080,
            base_url: "http://localhost:{port}".into(),
            workers: num_cpus::get(),
        }
    }
}

impl WwwConfig {
    pub fn format_base_url(&mut self) -> Result<()> {
        let mut args = HashMap::new();
        args.insert("port".into(), format!("{}", self.bind_port));

        self.base_url = strfmt::strfmt(&self.base_url, &args).map_err(|err| Error::from(ErrorKind::Configuration, err))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub template: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: u8,
    pub scope: ColorScope,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("pages/index.html"),
            width: 1375,
            height: 720,
            quality: 90,
            scope: ColorScope::Shared,
        }
    }
}
