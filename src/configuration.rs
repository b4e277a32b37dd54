use std::time::Duration;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::{errors::Error, password_client::PasswordClient, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub client: ClientSettings,
    pub logger: LoggerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub base_url: String,
    pub endpoint_path: String,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl ClientSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    pub fn client(&self) -> Result<PasswordClient> {
        PasswordClient::new(&self.base_url, &self.endpoint_path, self.timeout())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggerSettings {
    pub level: String,
    /// Directory for the daily rolling log file; console only when unset.
    #[serde(default)]
    pub directory: Option<String>,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings> {
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join("configuration");

    let environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into());
    let environment = Environment::try_from(environment)
        .map_err(|e| Error::string(&e))?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    let base_file = configuration_directory.join("base.yaml");
    let environment_file = configuration_directory.join(environment_filename);

    let settings = config::Config::builder()
        .add_source(config::File::from(base_file))
        .add_source(config::File::from(environment_file))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
