/// Command-line arguments.
#[derive(Debug, clap::Parser)]
#[command(name = "github-monitor", version,
	about = "Summarize GitHub events received by a user or list new popular projects")]
pub struct Cli
{
	/// User name, show recent events received by this user
	#[arg(short = 'u', value_name = "USERNAME")]
	pub username: Option<String>,
	/// Language, show the most starred projects recently created in this language
	#[arg(short = 'l', value_name = "LANGUAGE")]
	pub language: Option<String>,
	/// Max number of items to display (0 for no limit)
	#[arg(short = 'm', value_name = "COUNT", default_value_t = 0)]
	pub max_items: usize,
	/// Cut text after this length of output (0 for no limit)
	#[arg(short = 'c', value_name = "LENGTH", default_value_t = 0)]
	pub max_length: usize,
	/// Show duplicate events
	#[arg(short = 'd')]
	pub show_duplicates: bool,
	/// Show a single line per project instead of a detailed block
	#[arg(short = 's')]
	pub compact: bool,
	/// Write the indented GitHub response to the standard output before the summaries
	#[arg(long)]
	pub debug: bool,
	/// Path to a configuration file in YAML format
	#[arg(long, value_name = "PATH")]
	pub config: Option<std::path::PathBuf>,
}

/// What to show, as selected by the mutually exclusive `-u` and `-l` arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode
{
	UserEvents(String),
	RecentProjects(String),
}

impl Mode
{
	/// Turn the selected mode into a GitHub API query.
	///
	/// # Arguments
	/// - `today`: The current local date.
	/// - `window_days`: How many days before today projects may have been created.
	pub fn into_query(self, today: chrono::NaiveDate, window_days: u32)
		-> crate::github_api::Query
	{
		match self
		{
			Self::UserEvents(username) => crate::github_api::Query::ReceivedEvents{username},
			Self::RecentProjects(language) =>
			{
				let created_after = today
					.checked_sub_days(chrono::Days::new(window_days.into()))
					.unwrap_or(chrono::NaiveDate::MIN);

				crate::github_api::Query::RecentProjects{language, created_after}
			},
		}
	}
}

impl Cli
{
	/// Determine what to show, failing unless exactly one of `-u` and `-l` is given.
	pub fn mode(&self) -> Result<Mode, crate::Error>
	{
		// Empty values count as absent
		let username = self.username.as_deref().filter(|username| !username.is_empty());
		let language = self.language.as_deref().filter(|language| !language.is_empty());

		match (username, language)
		{
			(Some(username), None) => Ok(Mode::UserEvents(username.to_owned())),
			(None, Some(language)) => Ok(Mode::RecentProjects(language.to_owned())),
			_ => Err(crate::Error::Usage("pass either -u or -l, not both")),
		}
	}

	pub fn output_options(&self) -> crate::output::OutputOptions
	{
		crate::output::OutputOptions
		{
			max_items: self.max_items,
			max_length: self.max_length,
			show_duplicates: self.show_duplicates,
		}
	}

	pub fn project_style(&self) -> crate::summary::ProjectStyle
	{
		match self.compact
		{
			true => crate::summary::ProjectStyle::Compact,
			false => crate::summary::ProjectStyle::Human,
		}
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use clap::Parser as _;

	fn parse(arguments: &[&str]) -> Cli
	{
		Cli::try_parse_from(std::iter::once("github-monitor").chain(arguments.iter().copied()))
			.unwrap()
	}

	#[test]
	fn selects_user_events()
	{
		assert_eq!(parse(&["-u", "alice"]).mode().unwrap(), Mode::UserEvents("alice".to_owned()));
	}

	#[test]
	fn selects_recent_projects()
	{
		assert_eq!(parse(&["-l", "rust"]).mode().unwrap(),
			Mode::RecentProjects("rust".to_owned()));
	}

	#[test]
	fn rejects_both_modes()
	{
		let result = parse(&["-u", "alice", "-l", "rust"]).mode();

		assert!(matches!(result, Err(crate::Error::Usage(_))));
	}

	#[test]
	fn rejects_missing_mode()
	{
		assert!(matches!(parse(&[]).mode(), Err(crate::Error::Usage(_))));
		assert!(matches!(parse(&["-u", ""]).mode(), Err(crate::Error::Usage(_))));
	}

	#[test]
	fn parses_output_options()
	{
		let cli = parse(&["-u", "alice", "-m", "3", "-c", "40", "-d", "-s", "--debug"]);
		let options = cli.output_options();

		assert_eq!(options.max_items, 3);
		assert_eq!(options.max_length, 40);
		assert!(options.show_duplicates);
		assert!(cli.debug);
		assert_eq!(cli.project_style(), crate::summary::ProjectStyle::Compact);
	}

	#[test]
	fn defaults_to_unlimited_output()
	{
		let cli = parse(&["-l", "rust"]);
		let options = cli.output_options();

		assert_eq!(options.max_items, 0);
		assert_eq!(options.max_length, 0);
		assert!(!options.show_duplicates);
		assert!(!cli.debug);
		assert_eq!(cli.project_style(), crate::summary::ProjectStyle::Human);
	}

	#[test]
	fn search_window_reaches_back_from_today()
	{
		let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
		let query = Mode::RecentProjects("go".to_owned()).into_query(today, 10);

		assert_eq!(query, crate::github_api::Query::RecentProjects
		{
			language: "go".to_owned(),
			created_after: chrono::NaiveDate::from_ymd_opt(2024, 2, 24).unwrap(),
		});
	}
}
