use crate::summary::{summarize, ProjectStyle, Summary};

/// Options controlling which summaries are written and how.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputOptions
{
	/// Stop after writing this many summaries (0 for no limit).
	pub max_items: usize,
	/// Cut lines after this many characters (0 for no limit).
	pub max_length: usize,
	/// Write lines that were already written before instead of suppressing them.
	pub show_duplicates: bool,
}

/// What happened to a summary offered to the [OutputPolicy].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Disposition
{
	Emitted,
	/// The same line was written before.
	Duplicate,
	/// The event belongs to a kind that is never shown.
	Ignored,
}

/// Writes event summaries to an output sink, suppressing duplicates and stopping once enough
/// summaries were written.
///
/// A policy holds the set of lines written so far and is meant to be used for a single run.
pub struct OutputPolicy<W>
{
	#[doc(hidden)]
	writer: W,
	#[doc(hidden)]
	options: OutputOptions,
	#[doc(hidden)]
	emitted_lines: std::collections::HashSet<String>,
	#[doc(hidden)]
	emitted_count: usize,
}

impl<W> OutputPolicy<W>
where
	W: std::io::Write,
{
	pub fn new(writer: W, options: OutputOptions) -> Self
	{
		Self
		{
			writer,
			options,
			emitted_lines: std::collections::HashSet::new(),
			emitted_count: 0,
		}
	}

	/// Whether the maximum number of summaries was written already.
	pub fn is_exhausted(&self) -> bool
	{
		self.options.max_items > 0 && self.emitted_count >= self.options.max_items
	}

	/// Number of summaries written so far.
	pub fn emitted_count(&self) -> usize
	{
		self.emitted_count
	}

	/// Write a summary unless it is ignored or a duplicate.
	///
	/// Single lines are shortened by removing the actor’s name from the repository name and cut
	/// to the configured length before checking for duplicates. Multi-line blocks are written as
	/// they are.
	///
	/// # Arguments
	/// - `summary`: The summary of the next event.
	pub fn offer(&mut self, summary: Summary) -> Result<Disposition, crate::Error>
	{
		let text = match summary
		{
			Summary::Ignored => return Ok(Disposition::Ignored),
			Summary::Line(line) => truncate(collapse_author(&line), self.options.max_length),
			Summary::Block(block) => block,
		};

		if !self.options.show_duplicates && !self.emitted_lines.insert(text.clone())
		{
			log::debug!("suppressing duplicate “{text}”");
			return Ok(Disposition::Duplicate);
		}

		writeln!(self.writer, "{text}").map_err(crate::Error::WriteOutput)?;
		self.emitted_count += 1;

		Ok(Disposition::Emitted)
	}

	/// Summarize and write events in order until all were handled or the maximum number of
	/// summaries was written.
	///
	/// # Arguments
	/// - `events`: The events to summarize.
	/// - `project_style`: How to render repository search results.
	pub fn run<'a, I>(&mut self, events: I, project_style: ProjectStyle) -> Result<(), crate::Error>
	where
		I: IntoIterator<Item = &'a crate::Event>,
	{
		for event in events
		{
			if self.is_exhausted()
			{
				log::debug!("reached maximum of {} items, stopping", self.options.max_items);
				break;
			}

			if self.offer(summarize(event, project_style))? == Disposition::Ignored
			{
				log::debug!("ignoring event {:?}", event);
			}
		}

		self.writer.flush().map_err(crate::Error::WriteOutput)
	}

	/// Give back the output sink.
	#[cfg(test)]
	fn into_inner(self) -> W
	{
		self.writer
	}
}

/// Remove the first occurrence of `{first word}/` from a line, so that
/// `alice push to alice/repo` becomes `alice push to repo`.
///
/// The occurrence doesn’t need to be next to the repository name, so
/// `alice follow alice/` also becomes `alice follow `.
pub fn collapse_author(line: &str) -> String
{
	let author = match line.split_once(' ')
	{
		Some((author, _)) => author,
		None => return line.to_owned(),
	};

	line.replacen(&format!("{author}/"), "", 1)
}

/// Cut a line after `max_length` characters (0 for no limit).
pub fn truncate(line: String, max_length: usize) -> String
{
	match line.char_indices().nth(max_length)
	{
		Some((index, _)) if max_length > 0 => line[..index].to_owned(),
		_ => line,
	}
}
