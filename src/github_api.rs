/// Configuration of the GitHub API client.
#[derive(Debug, serde::Deserialize)]
pub struct Config
{
	/// The base URL of the GitHub API server with a trailing slash (optional, default:
	/// <https://api.github.com/>).
	#[serde(default = "github_com_api_base_url")]
	pub base_url: url::Url,
}

impl Default for Config
{
	fn default() -> Self
	{
		Self
		{
			base_url: github_com_api_base_url(),
		}
	}
}

#[doc(hidden)]
fn github_com_api_base_url() -> url::Url
{
	url::Url::parse("https://api.github.com/")
		.expect("this call is infallible because we know the URL to be well-formed")
}

/// The GitHub API resources this tool knows how to query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Query
{
	/// Events received by a user, that is, activity of the users and repositories they follow.
	ReceivedEvents
	{
		username: String,
	},
	/// Repositories in a given language created after a given date, most starred first.
	RecentProjects
	{
		language: String,
		created_after: chrono::NaiveDate,
	},
}

impl Query
{
	/// Build the full request URL for this query.
	///
	/// # Arguments
	/// - `base_url`: The base URL of the GitHub API server with a trailing slash.
	pub fn url(&self, base_url: &url::Url) -> Result<url::Url, crate::Error>
	{
		match self
		{
			Self::ReceivedEvents{username} =>
			{
				let mut url = base_url.join("users/").map_err(crate::Error::ParseUrl)?;

				let cannot_be_a_base =
					|_: ()| crate::Error::ParseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase);

				// Push the user name as a path segment so that it’s escaped properly
				url.path_segments_mut().map_err(cannot_be_a_base)?
					.pop_if_empty()
					.push(username)
					.push("received_events");

				Ok(url)
			},
			Self::RecentProjects{language, created_after} =>
			{
				let mut url = base_url.join("search/repositories")
					.map_err(crate::Error::ParseUrl)?;

				let search_terms =
					format!("language:{language} created:>{}", created_after.format("%Y-%m-%d"));

				url.query_pairs_mut()
					.append_pair("q", &search_terms)
					.append_pair("sort", "stars");

				Ok(url)
			},
		}
	}
}

/// A GitHub API client for anonymous read access to public resources.
pub struct Client
{
	#[doc(hidden)]
	config: Config,
	#[doc(hidden)]
	reqwest_client: reqwest::Client,
}

impl Client
{
	/// Initialize a new GitHub API client with a given configuration.
	pub fn from_config(config: Config) -> Result<Self, crate::Error>
	{
		// Initialize a new HTTP client
		let reqwest_client = reqwest::ClientBuilder::new()
			// GitHub rejects requests without a user agent, so set a recognizable one
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build().map_err(crate::Error::CreateHttpClient)?;

		Ok(Self
		{
			config,
			reqwest_client,
		})
	}

	/// Fetch the raw response body for a query.
	///
	/// # Arguments
	/// - `query`: The resource to request.
	pub async fn fetch(&self, query: &Query) -> Result<Vec<u8>, crate::Error>
	{
		let url = query.url(&self.config.base_url)?;

		log::debug!("requesting {url}");

		let response = self.reqwest_client.get(url)
			// Search results used to be available in the preview version of the API only
			.header(reqwest::header::ACCEPT, "application/vnd.github.preview")
			// Send the request
			.send().await.map_err(crate::Error::MakeGitHubApiRequest)?;

		// Return an error if there was a client error according to the response’s HTTP status
		if response.status().is_client_error()
		{
			let status_code = response.status();
			let url = response.url().to_owned();

			// Decode the body for debugging purposes
			let response_body = response.text().await.map_err(crate::Error::MakeGitHubApiRequest)?;

			return Err(crate::Error::ReceivedGitHubApiClientError{status_code, url, response_body});
		}

		let response_body = response
			// Return an error if there was a server error according to the response’s HTTP status
			.error_for_status().map_err(crate::Error::MakeGitHubApiRequest)?
			// Read the full response if there was no server error
			.bytes().await.map_err(crate::Error::MakeGitHubApiRequest)?;

		log::debug!("received {} bytes", response_body.len());

		Ok(response_body.to_vec())
	}
}

/// Write a response body as tab-indented JSON followed by an empty line, for debugging.
///
/// Bodies that aren’t valid JSON are written as they are.
///
/// # Arguments
/// - `writer`: Where to write the indented body.
/// - `body`: The raw response body.
pub fn write_indented<W>(mut writer: W, body: &[u8]) -> Result<(), crate::Error>
where
	W: std::io::Write,
{
	use serde::Serialize as _;

	match serde_json::from_slice::<serde_json::Value>(body)
	{
		Ok(value) =>
		{
			let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
			let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);

			// Serializing a JSON value only fails if the writer does
			value.serialize(&mut serializer)
				.map_err(|error| crate::Error::WriteOutput(error.into()))?;
		},
		Err(error) =>
		{
			log::warn!("response body is not valid JSON ({error}), writing it unchanged");
			writer.write_all(body).map_err(crate::Error::WriteOutput)?;
		},
	}

	writer.write_all(b"\n\n").map_err(crate::Error::WriteOutput)
}
