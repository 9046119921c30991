use crate::models::{
	Activity, ActivityKind, Event, IssueAction, Project, PullRequestAction, RefType,
	ReleaseAction, WikiPageAction,
};

/// Event types that are never shown.
pub const SKIPPED_EVENT_KINDS: &[&str] = &["GistEvent", "MemberEvent"];

/// How repository search results are rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectStyle
{
	/// One line per project with its name, stars, and open issues.
	Compact,
	/// A block of several lines per project including its description and URL.
	Human,
}

/// The human-readable rendering of a single event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Summary
{
	/// A single line of the form `{actor} {what happened} {subject}`.
	Line(String),
	/// A multi-line block describing a project.
	Block(String),
	/// The event belongs to a kind we don’t show at all.
	Ignored,
}

/// Summarize an event for display.
///
/// # Arguments
/// - `event`: The event to summarize.
/// - `project_style`: How to render repository search results.
pub fn summarize(event: &Event, project_style: ProjectStyle) -> Summary
{
	match event
	{
		Event::Project(project) => match project_style
		{
			ProjectStyle::Compact => Summary::Line(project_line(project)),
			ProjectStyle::Human => Summary::Block(project_block(project)),
		},
		Event::Activity(activity) => activity_line(activity),
	}
}

fn project_line(project: &Project) -> String
{
	let Project{full_name, watchers_count, open_issues, ..} = project;

	match open_issues
	{
		0 => format!("{full_name} {watchers_count}"),
		_ => format!("{full_name} {watchers_count} - {open_issues} open"),
	}
}

fn project_block(project: &Project) -> String
{
	let mut lines = vec![project.full_name.clone()];

	if !project.description.is_empty()
	{
		lines.push(project.description.clone());
	}

	if project.open_issues > 0
	{
		lines.push(format!("{} open issues", project.open_issues));
	}

	lines.push(format!("{} forks, {} watchers", project.forks_count, project.watchers_count));
	lines.push(project.html_url.clone());

	// Separate consecutive projects by an empty line
	lines.push(String::new());

	lines.join("\n")
}

fn activity_line(activity: &Activity) -> Summary
{
	let Activity{actor, repo, kind} = activity;

	let line = match kind
	{
		ActivityKind::Watch => format!("{actor} star {repo}"),
		ActivityKind::Follow{target} => format!("{actor} follow {target}"),
		ActivityKind::Issues{action, number} =>
		{
			let verb = match action
			{
				IssueAction::Created => "comment",
				IssueAction::Opened => "made",
				IssueAction::Closed => "close",
				IssueAction::Reopened => "reopened",
				IssueAction::Other(_) => return fallback(activity),
			};

			format!("{actor} {verb} issue {number} {repo}")
		},
		ActivityKind::IssueComment{number} => format!("{actor} comment issue {number} {repo}"),
		ActivityKind::Push => format!("{actor} push to {repo}"),
		ActivityKind::Fork => format!("{actor} fork {repo}"),
		ActivityKind::Create{ref_type, ref_} => match ref_type
		{
			RefType::Tag => format!("{actor} tag {ref_} {repo}"),
			RefType::Repository => format!("{actor} create {repo}"),
			RefType::Branch => format!("{actor} branch {repo}"),
			RefType::Other(_) => return fallback(activity),
		},
		ActivityKind::PullRequestReviewComment => format!("{actor} pr comment on {repo}"),
		ActivityKind::PullRequest{action, number} =>
		{
			let verb = match action
			{
				PullRequestAction::Closed => "close",
				PullRequestAction::Opened => "create",
				PullRequestAction::Reopened => "reopened",
				PullRequestAction::Other(_) => return fallback(activity),
			};

			format!("{actor} {verb} pr {number} {repo}")
		},
		ActivityKind::Delete{ref_type: RefType::Branch, ref_} =>
			format!("{actor} del branch {ref_} {repo}"),
		ActivityKind::Release{action: ReleaseAction::Published, tag} =>
			format!("{actor} published {tag} {repo}"),
		ActivityKind::CommitComment => format!("{actor} commit comment {repo}"),
		ActivityKind::Gollum{page_action: WikiPageAction::Edited} =>
			format!("{actor} wiki edit {repo}"),
		ActivityKind::Other{kind} if SKIPPED_EVENT_KINDS.contains(&kind.as_str()) =>
			return Summary::Ignored,
		ActivityKind::Delete{..}
		| ActivityKind::Release{..}
		| ActivityKind::Gollum{..}
		| ActivityKind::Other{..} => return fallback(activity),
	};

	Summary::Line(line)
}

/// Generic line for events without a specific wording.
fn fallback(activity: &Activity) -> Summary
{
	Summary::Line(format!("-> {} {} {}", activity.kind.name(), activity.actor, activity.repo))
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn activity(kind: ActivityKind) -> Event
	{
		Event::Activity(Activity
		{
			actor: "alice".to_owned(),
			repo: "bob/repo".to_owned(),
			kind,
		})
	}

	fn line(kind: ActivityKind) -> String
	{
		match summarize(&activity(kind), ProjectStyle::Compact)
		{
			Summary::Line(line) => line,
			other => panic!("expected line, got {:?}", other),
		}
	}

	fn project(open_issues: u64, description: &str) -> Event
	{
		Event::Project(Project
		{
			full_name: "alice/parser".to_owned(),
			watchers_count: 42,
			forks_count: 3,
			open_issues,
			description: description.to_owned(),
			html_url: "https://github.com/alice/parser".to_owned(),
		})
	}

	#[test]
	fn simple_kinds()
	{
		assert_eq!(line(ActivityKind::Watch), "alice star bob/repo");
		assert_eq!(line(ActivityKind::Follow{target: "carol".to_owned()}), "alice follow carol");
		assert_eq!(line(ActivityKind::IssueComment{number: 4}), "alice comment issue 4 bob/repo");
		assert_eq!(line(ActivityKind::Push), "alice push to bob/repo");
		assert_eq!(line(ActivityKind::Fork), "alice fork bob/repo");
		assert_eq!(line(ActivityKind::PullRequestReviewComment), "alice pr comment on bob/repo");
		assert_eq!(line(ActivityKind::CommitComment), "alice commit comment bob/repo");
	}

	#[test]
	fn issue_actions()
	{
		let issue = |action: &str| line(ActivityKind::Issues
		{
			action: action.to_owned().into(),
			number: 9,
		});

		assert_eq!(issue("created"), "alice comment issue 9 bob/repo");
		assert_eq!(issue("opened"), "alice made issue 9 bob/repo");
		assert_eq!(issue("closed"), "alice close issue 9 bob/repo");
		assert_eq!(issue("reopened"), "alice reopened issue 9 bob/repo");
		assert_eq!(issue("labeled"), "-> IssuesEvent alice bob/repo");
	}

	#[test]
	fn pull_request_actions()
	{
		let pull_request = |action: &str| line(ActivityKind::PullRequest
		{
			action: action.to_owned().into(),
			number: 21,
		});

		assert_eq!(pull_request("closed"), "alice close pr 21 bob/repo");
		assert_eq!(pull_request("opened"), "alice create pr 21 bob/repo");
		assert_eq!(pull_request("reopened"), "alice reopened pr 21 bob/repo");
		assert_eq!(pull_request("synchronize"), "-> PullRequestEvent alice bob/repo");
	}

	#[test]
	fn ref_creation_and_deletion()
	{
		let create = |ref_type: &str| line(ActivityKind::Create
		{
			ref_type: ref_type.to_owned().into(),
			ref_: "v1.0".to_owned(),
		});

		assert_eq!(create("tag"), "alice tag v1.0 bob/repo");
		assert_eq!(create("repository"), "alice create bob/repo");
		assert_eq!(create("branch"), "alice branch bob/repo");
		assert_eq!(create("bookmark"), "-> CreateEvent alice bob/repo");

		let delete = |ref_type: &str| line(ActivityKind::Delete
		{
			ref_type: ref_type.to_owned().into(),
			ref_: "feature".to_owned(),
		});

		assert_eq!(delete("branch"), "alice del branch feature bob/repo");
		assert_eq!(delete("tag"), "-> DeleteEvent alice bob/repo");
	}

	#[test]
	fn releases_and_wiki_edits()
	{
		let release = |action: &str| line(ActivityKind::Release
		{
			action: action.to_owned().into(),
			tag: "v2.0".to_owned(),
		});

		assert_eq!(release("published"), "alice published v2.0 bob/repo");
		assert_eq!(release("created"), "-> ReleaseEvent alice bob/repo");

		let wiki = |page_action: &str| line(ActivityKind::Gollum
		{
			page_action: page_action.to_owned().into(),
		});

		assert_eq!(wiki("edited"), "alice wiki edit bob/repo");
		assert_eq!(wiki("created"), "-> GollumEvent alice bob/repo");
	}

	#[test]
	fn skipped_kinds_are_ignored()
	{
		for kind in SKIPPED_EVENT_KINDS
		{
			let event = activity(ActivityKind::Other{kind: kind.to_string()});

			assert_eq!(summarize(&event, ProjectStyle::Compact), Summary::Ignored);
			assert_eq!(summarize(&event, ProjectStyle::Human), Summary::Ignored);
		}
	}

	#[test]
	fn unknown_kinds_fall_back()
	{
		assert_eq!(line(ActivityKind::Other{kind: "PublicEvent".to_owned()}),
			"-> PublicEvent alice bob/repo");
	}

	#[test]
	fn compact_projects()
	{
		assert_eq!(summarize(&project(0, ""), ProjectStyle::Compact),
			Summary::Line("alice/parser 42".to_owned()));
		assert_eq!(summarize(&project(5, ""), ProjectStyle::Compact),
			Summary::Line("alice/parser 42 - 5 open".to_owned()));
	}

	#[test]
	fn human_projects()
	{
		assert_eq!(summarize(&project(5, "A fast parser"), ProjectStyle::Human),
			Summary::Block("alice/parser\nA fast parser\n5 open issues\n3 forks, 42 watchers\n\
				https://github.com/alice/parser\n".to_owned()));
		assert_eq!(summarize(&project(0, ""), ProjectStyle::Human),
			Summary::Block("alice/parser\n3 forks, 42 watchers\nhttps://github.com/alice/parser\n"
				.to_owned()));
	}
}
