/// All errors that may occur while fetching, decoding, and printing GitHub events.
#[derive(Debug, thiserror::Error)]
pub enum Error
{
	#[error("{0}")]
	Usage(&'static str),

	#[error("could not read config file")]
	ReadConfigFile(#[source] std::io::Error),
	#[error("could not parse config file")]
	ParseConfigFile(#[source] serde_yaml::Error),

	#[error("could not create HTTP client")]
	CreateHttpClient(#[source] reqwest::Error),

	#[error("could not parse URL")]
	ParseUrl(#[source] url::ParseError),
	#[error("could not make GitHub API request")]
	MakeGitHubApiRequest(#[source] reqwest::Error),
	#[error("received GitHub API client error (status code {status_code}): {response_body}")]
	ReceivedGitHubApiClientError
	{
		status_code: reqwest::StatusCode,
		url: url::Url,
		response_body: String,
	},
	#[error("could not decode GitHub API response body as event list or search results")]
	DecodeGitHubApiResponseBody(#[source] serde_json::Error),

	#[error("could not write output")]
	WriteOutput(#[source] std::io::Error),
}
