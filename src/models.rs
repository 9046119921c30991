/// An activity event or, in search mode, a repository summary as returned by the GitHub API.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event
{
	/// A search result item, which carries no event type.
	Project(Project),
	/// An entry of a user’s event timeline.
	Activity(Activity),
}

/// Repository summary from the repository search endpoint.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Project
{
	/// The repository name including its owner (example: `rust-lang/rust`).
	pub full_name: String,
	pub watchers_count: u64,
	pub forks_count: u64,
	pub open_issues: u64,
	pub description: String,
	/// User-facing URL of the repository.
	pub html_url: String,
}

/// A single activity event of some actor on some repository.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Activity
{
	/// Handle of the user causing this event.
	pub actor: String,
	/// The repository this event relates to in `owner/name` form.
	pub repo: String,
	/// What happened, along with the payload fields relevant to this kind of event.
	pub kind: ActivityKind,
}

/// The kinds of activity events we know how to summarize.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActivityKind
{
	Watch,
	Follow
	{
		target: String,
	},
	Issues
	{
		action: IssueAction,
		number: u64,
	},
	IssueComment
	{
		number: u64,
	},
	Push,
	Fork,
	Create
	{
		ref_type: RefType,
		ref_: String,
	},
	PullRequestReviewComment,
	PullRequest
	{
		action: PullRequestAction,
		number: u64,
	},
	Delete
	{
		ref_type: RefType,
		ref_: String,
	},
	Release
	{
		action: ReleaseAction,
		tag: String,
	},
	CommitComment,
	Gollum
	{
		page_action: WikiPageAction,
	},
	/// Any event type not listed above, identified by its name as sent by GitHub.
	Other
	{
		kind: String,
	},
}

impl ActivityKind
{
	/// The event type name as used by the GitHub API (example: `PushEvent`).
	pub fn name(&self) -> &str
	{
		match self
		{
			Self::Watch => "WatchEvent",
			Self::Follow{..} => "FollowEvent",
			Self::Issues{..} => "IssuesEvent",
			Self::IssueComment{..} => "IssueCommentEvent",
			Self::Push => "PushEvent",
			Self::Fork => "ForkEvent",
			Self::Create{..} => "CreateEvent",
			Self::PullRequestReviewComment => "PullRequestReviewCommentEvent",
			Self::PullRequest{..} => "PullRequestEvent",
			Self::Delete{..} => "DeleteEvent",
			Self::Release{..} => "ReleaseEvent",
			Self::CommitComment => "CommitCommentEvent",
			Self::Gollum{..} => "GollumEvent",
			Self::Other{kind} => kind,
		}
	}
}

/// Implements `From<String>` for a sub-state enum, mapping known values to their variants and
/// keeping everything else in the `Other` variant.
macro_rules! sub_state_from_string
{
	($type:ident { $($value:literal => $variant:ident,)* }) =>
	{
		impl From<String> for $type
		{
			fn from(value: String) -> Self
			{
				match value.as_str()
				{
					$($value => Self::$variant,)*
					_ => Self::Other(value),
				}
			}
		}
	};
}

/// What happened to an issue in an `IssuesEvent`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IssueAction
{
	Created,
	Opened,
	Closed,
	Reopened,
	Other(String),
}

sub_state_from_string!(IssueAction
{
	"created" => Created,
	"opened" => Opened,
	"closed" => Closed,
	"reopened" => Reopened,
});

/// What happened to a pull request in a `PullRequestEvent`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PullRequestAction
{
	Opened,
	Closed,
	Reopened,
	Other(String),
}

sub_state_from_string!(PullRequestAction
{
	"opened" => Opened,
	"closed" => Closed,
	"reopened" => Reopened,
});

/// What happened to a release in a `ReleaseEvent`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReleaseAction
{
	Published,
	Other(String),
}

sub_state_from_string!(ReleaseAction
{
	"published" => Published,
});

/// Type of a Git ref object (or the repository itself) in create and delete events.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RefType
{
	Branch,
	Repository,
	Tag,
	Other(String),
}

sub_state_from_string!(RefType
{
	"branch" => Branch,
	"repository" => Repository,
	"tag" => Tag,
});

/// What happened to a wiki page in a `GollumEvent`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WikiPageAction
{
	Created,
	Edited,
	Other(String),
}

sub_state_from_string!(WikiPageAction
{
	"created" => Created,
	"edited" => Edited,
});

/// Decode a GitHub API response body into events.
///
/// The body is expected to be either a list of events (as returned by the timeline endpoints)
/// or an object with the list in its `items` field (as returned by the search endpoints).
///
/// # Arguments
/// - `body`: The raw response body.
pub fn decode_events(body: &[u8]) -> Result<Vec<Event>, crate::Error>
{
	let raw_events = match serde_json::from_slice::<Vec<RawEvent>>(body)
	{
		Ok(raw_events) => raw_events,
		// If the body is not a list, try again decoding it as search results
		Err(error) =>
		{
			log::debug!("response body is not an event list ({error}), trying search results");

			serde_json::from_slice::<SearchResults>(body)
				.map_err(crate::Error::DecodeGitHubApiResponseBody)?
				.items
		},
	};

	Ok(raw_events.into_iter().map(Event::from).collect())
}

/// Envelope of search results returned by the GitHub API.
#[doc(hidden)]
#[derive(Debug, serde::Deserialize)]
struct SearchResults
{
	items: Vec<RawEvent>,
	// We don’t need the total count and the incompleteness flag, so ignore them
}

/// Partial data model covering both timeline events and repository search results as returned
/// by the GitHub API. Every field is optional, as each kind of record only carries a subset.
#[doc(hidden)]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct RawEvent
{
	#[serde(rename = "type")]
	type_: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	actor: RawUser,
	#[serde(deserialize_with = "null_as_default")]
	repo: RawRepo,
	#[serde(deserialize_with = "null_as_default")]
	payload: RawPayload,

	// Repository search result fields
	#[serde(deserialize_with = "null_as_default")]
	full_name: String,
	watchers_count: u64,
	forks_count: u64,
	open_issues_count: Option<u64>,
	open_issues: Option<u64>,
	#[serde(deserialize_with = "null_as_default")]
	description: String,
	#[serde(deserialize_with = "null_as_default")]
	html_url: String,
}

#[doc(hidden)]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawUser
{
	#[serde(deserialize_with = "null_as_default")]
	login: String,
}

#[doc(hidden)]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawRepo
{
	#[serde(deserialize_with = "null_as_default")]
	name: String,
}

#[doc(hidden)]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawNumbered
{
	number: u64,
}

#[doc(hidden)]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawRelease
{
	#[serde(deserialize_with = "null_as_default")]
	tag_name: String,
}

#[doc(hidden)]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawWikiPage
{
	#[serde(deserialize_with = "null_as_default")]
	action: String,
}

#[doc(hidden)]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct RawPayload
{
	#[serde(deserialize_with = "null_as_default")]
	action: String,
	#[serde(rename = "ref", deserialize_with = "null_as_default")]
	ref_: String,
	#[serde(deserialize_with = "null_as_default")]
	ref_type: String,
	number: Option<u64>,
	#[serde(deserialize_with = "null_as_default")]
	issue: RawNumbered,
	#[serde(deserialize_with = "null_as_default")]
	pull_request: RawNumbered,
	#[serde(deserialize_with = "null_as_default")]
	release: RawRelease,
	#[serde(deserialize_with = "null_as_default")]
	target: RawUser,
	#[serde(deserialize_with = "null_as_default")]
	pages: Vec<RawWikiPage>,
}

/// GitHub sends `null` for some fields (such as the `ref` of a repository creation event or the
/// payload of some events), which we treat like an absent field.
#[doc(hidden)]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: serde::Deserializer<'de>,
	T: Default + serde::Deserialize<'de>,
{
	use serde::Deserialize as _;

	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<RawEvent> for Event
{
	fn from(raw: RawEvent) -> Self
	{
		// Search results have no event type, which is how we tell them apart from activities
		let type_ = match raw.type_
		{
			Some(type_) if !type_.is_empty() => type_,
			_ =>
			{
				return Self::Project(Project
				{
					full_name: raw.full_name,
					watchers_count: raw.watchers_count,
					forks_count: raw.forks_count,
					open_issues: raw.open_issues_count.or(raw.open_issues).unwrap_or_default(),
					description: raw.description,
					html_url: raw.html_url,
				});
			},
		};

		let payload = raw.payload;

		let kind = match type_.as_str()
		{
			"WatchEvent" => ActivityKind::Watch,
			"FollowEvent" => ActivityKind::Follow{target: payload.target.login},
			"IssuesEvent" => ActivityKind::Issues
			{
				action: payload.action.into(),
				number: payload.issue.number,
			},
			"IssueCommentEvent" => ActivityKind::IssueComment{number: payload.issue.number},
			"PushEvent" => ActivityKind::Push,
			"ForkEvent" => ActivityKind::Fork,
			"CreateEvent" => ActivityKind::Create
			{
				ref_type: payload.ref_type.into(),
				ref_: payload.ref_,
			},
			"PullRequestReviewCommentEvent" => ActivityKind::PullRequestReviewComment,
			"PullRequestEvent" => ActivityKind::PullRequest
			{
				action: payload.action.into(),
				number: payload.number.unwrap_or(payload.pull_request.number),
			},
			"DeleteEvent" => ActivityKind::Delete
			{
				ref_type: payload.ref_type.into(),
				ref_: payload.ref_,
			},
			"ReleaseEvent" => ActivityKind::Release
			{
				action: payload.action.into(),
				tag: payload.release.tag_name,
			},
			"CommitCommentEvent" => ActivityKind::CommitComment,
			"GollumEvent" =>
			{
				// Only the first edited page determines how the event is summarized
				let page_action = payload.pages.into_iter().next()
					.map(|page| page.action)
					.unwrap_or_default();

				ActivityKind::Gollum{page_action: page_action.into()}
			},
			_ => ActivityKind::Other{kind: type_},
		};

		Self::Activity(Activity
		{
			actor: raw.actor.login,
			repo: raw.repo.name,
			kind,
		})
	}
}
