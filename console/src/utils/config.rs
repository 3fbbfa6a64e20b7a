use std::fmt::{Display, Formatter};

use config::{Config, ConfigError};
#[cfg(not(target_arch = "wasm32"))]
use config::{Environment, File};
#[cfg(not(target_arch = "wasm32"))]
use convert_case::Case;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants;

/// Reads the console configuration. The running environment picks an optional
/// `config/dev` or `config/prod` file, and `APP_*` environment variables
/// override both (`APP_API_BASE_URL` sets `apiBaseUrl`).
///
/// Files and environment variables are not available in the browser, so there
/// only the defaults and the values baked in at build time apply.
pub fn parse_config() -> Result<ConsoleConfig, ConsoleConfigError> {
	log::trace!("Reading config data...");

	let environment = running_environment()?;
	let builder = Config::builder()
		.set_default("apiBaseUrl", constants::DEFAULT_API_BASE_URL)?
		.set_default("environment", environment.to_string())?;

	#[cfg(not(target_arch = "wasm32"))]
	let builder = builder
		.add_source(File::with_name(environment.config_file()).required(false))
		.add_source(
			Environment::with_prefix("APP")
				.prefix_separator("_")
				.separator("__")
				.convert_case(Case::Camel),
		);

	#[cfg(target_arch = "wasm32")]
	let builder = match option_env!("APP_API_BASE_URL") {
		Some(api_base_url) => builder.set_override("apiBaseUrl", api_base_url)?,
		None => builder,
	};

	let config = builder.build()?.try_deserialize::<ConsoleConfig>()?;
	url::Url::parse(&config.api_base_url).map_err(ConsoleConfigError::InvalidApiBaseUrl)?;
	Ok(config)
}

/// The environment the console runs in. Debug builds always run in
/// development, release builds read `APP_ENV` and default to production.
fn running_environment() -> Result<RunningEnvironment, ConsoleConfigError> {
	if cfg!(debug_assertions) {
		return Ok(RunningEnvironment::Development);
	}

	#[cfg(not(target_arch = "wasm32"))]
	let env = std::env::var("APP_ENV").ok();
	#[cfg(target_arch = "wasm32")]
	let env = option_env!("APP_ENV").map(str::to_owned);

	match env.as_deref().unwrap_or("prod") {
		"prod" | "production" => Ok(RunningEnvironment::Production),
		"dev" | "development" => Ok(RunningEnvironment::Development),
		unknown => Err(ConsoleConfigError::UnknownEnvironment(unknown.to_owned())),
	}
}

/// The configuration of the console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
	/// The base URL of the API, ending with a slash
	pub api_base_url: String,
	/// The environment the console runs in
	pub environment: RunningEnvironment,
}

impl Default for ConsoleConfig {
	fn default() -> Self {
		Self {
			api_base_url: constants::DEFAULT_API_BASE_URL.to_owned(),
			environment: RunningEnvironment::Development,
		}
	}
}

/// The environment the console runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunningEnvironment {
	/// Local development
	Development,
	/// A deployed console
	Production,
}

impl RunningEnvironment {
	/// The optional config file read for this environment
	#[cfg(not(target_arch = "wasm32"))]
	fn config_file(&self) -> &'static str {
		match self {
			RunningEnvironment::Development => "config/dev",
			RunningEnvironment::Production => "config/prod",
		}
	}
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "development",
				RunningEnvironment::Production => "production",
			}
		)
	}
}

/// Why the configuration could not be read
#[derive(Debug, Error)]
pub enum ConsoleConfigError {
	/// `APP_ENV` names an environment that doesn't exist
	#[error("unknown running environment `{0}`")]
	UnknownEnvironment(String),
	/// The sources could not be merged or deserialized
	#[error("unable to read the configuration: {0}")]
	Source(#[from] ConfigError),
	/// The API base URL is not a URL
	#[error("invalid API base URL: {0}")]
	InvalidApiBaseUrl(url::ParseError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_apply_without_any_source() {
		let config = parse_config().unwrap();

		assert!(url::Url::parse(&config.api_base_url).is_ok());
		if cfg!(debug_assertions) {
			assert_eq!(config.environment, RunningEnvironment::Development);
		}
	}

	#[test]
	fn environments_deserialize_from_their_display_names() {
		for environment in [RunningEnvironment::Development, RunningEnvironment::Production] {
			let parsed: RunningEnvironment =
				serde_json::from_value(serde_json::Value::String(environment.to_string()))
					.unwrap();
			assert_eq!(parsed, environment);
		}
	}
}
