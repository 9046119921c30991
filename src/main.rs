#[doc(hidden)]
mod cli;
#[doc(hidden)]
mod config;
#[doc(hidden)]
mod error;
pub mod github_api;
#[doc(hidden)]
mod models;
pub mod output;
pub mod summary;

pub use config::Config;
pub use error::Error;
pub use models::*;

#[tokio::main]
async fn main() -> anyhow::Result<()>
{
	pretty_env_logger::init();

	use clap::Parser as _;

	let cli = cli::Cli::parse();

	// Exactly one of the user and language arguments is required. Report misuse without failing
	let mode = match cli.mode()
	{
		Ok(mode) => mode,
		Err(error @ Error::Usage(_)) =>
		{
			eprintln!("{error}");
			return Ok(());
		},
		Err(error) => return Err(error.into()),
	};

	// Read the config file if provided and fall back to the defaults otherwise
	let config = match &cli.config
	{
		Some(path) => Config::from_file(path)?,
		None => Config::default(),
	};

	let today = chrono::Local::now().date_naive();
	let query = mode.into_query(today, config.search.window_days);

	let github_api_client = github_api::Client::from_config(config.github_api)?;
	let response_body = github_api_client.fetch(&query).await?;

	let stdout = std::io::stdout();
	let mut stdout = stdout.lock();

	if cli.debug
	{
		github_api::write_indented(&mut stdout, &response_body)?;
	}

	let events = decode_events(&response_body)?;
	log::debug!("decoded {} events", events.len());

	let mut output = output::OutputPolicy::new(stdout, cli.output_options());
	output.run(&events, cli.project_style())?;

	log::debug!("wrote {} summaries", output.emitted_count());

	Ok(())
}
