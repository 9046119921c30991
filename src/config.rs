/// Top-level configuration of this application.
///
/// All options have defaults, so a configuration file is only needed to point the tool at a
/// different GitHub server or to change how far back searches for new projects reach.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config
{
	/// Configuration options specific to the GitHub API.
	pub github_api: crate::github_api::Config,
	/// Configuration options for searching recently created projects.
	pub search: SearchConfig,
}

impl Config
{
	/// Attempt to read and parse the configuration from a YAML file.
	///
	/// # Arguments
	/// `path`: Path to the configuration file in YAML format.
	pub fn from_file<P>(path: P) -> Result<Self, crate::Error>
	where
		P: AsRef<std::path::Path>
	{
		let file = std::fs::File::open(&path).map_err(crate::Error::ReadConfigFile)?;
		serde_yaml::from_reader(&file).map_err(crate::Error::ParseConfigFile)
	}
}

/// Options for the project search mode (`-l`).
#[derive(Debug, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig
{
	/// Only list projects created within this many days before today (default: 10).
	pub window_days: u32,
}

impl Default for SearchConfig
{
	fn default() -> Self
	{
		Self
		{
			window_days: 10,
		}
	}
}
