//! Command implementations and argument parsing for the beamchain CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use beamchain_core::{ElementFeed, ElementId, PartitionError, Partitioner, PartitionerBuilder, SelectionOrder};
use beamchain_providers_inp::{
    ElsetWriter, GroupNaming, InpBeamFeed, InpProviderError, LineSelection,
};
use beamchain_providers_par::{DvconError, DvconSizing};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::artifacts::write_all_atomically;
use super::summary::{ClassifySummary, ExecutionSummary, PartitionSummary};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "beamchain",
    about = "Partition the beam elements of an .inp mesh into maximal chains."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Partition beams into chains and write the element sets.
    Partition(PartitionCommand),
    /// Report node and element classes.
    Classify(ClassifyCommand),
}

/// Input selection shared by every command.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Path to the `.inp` file.
    pub path: PathBuf,

    /// Read records from lines START:END (0-based, END exclusive) instead of
    /// detecting `*Element, type=B...` blocks.
    #[arg(long, value_name = "START:END", value_parser = parse_line_range)]
    pub lines: Option<LineSelection>,

    /// Override name for the feed (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Order in which chain seeds are taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SeedOrder {
    /// Lowest unassigned element id first.
    #[default]
    Ascending,
    /// Unassigned elements in file order.
    Input,
}

impl From<SeedOrder> for SelectionOrder {
    fn from(order: SeedOrder) -> Self {
        match order {
            SeedOrder::Ascending => Self::AscendingId,
            SeedOrder::Input => Self::InputOrder,
        }
    }
}

/// Options accepted by the `partition` command.
#[derive(Debug, Args, Clone)]
pub struct PartitionCommand {
    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Order in which chain seeds are taken.
    #[arg(long, value_enum, default_value_t = SeedOrder::Ascending)]
    pub selection: SeedOrder,

    /// Prefix of generated group names.
    #[arg(long, default_value = GroupNaming::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Element ids per data line in the elset file.
    #[arg(long, default_value_t = ElsetWriter::DEFAULT_IDS_PER_LINE)]
    pub ids_per_line: NonZeroUsize,

    /// `ID_NAME` of the sizing block.
    #[arg(long, default_value = DvconSizing::DEFAULT_ID_NAME)]
    pub id_name: String,

    /// Destination of the `*Elset` blocks.
    #[arg(long, default_value = "output.inp")]
    pub elset_out: PathBuf,

    /// Destination of the `DVCON_SIZING` block.
    #[arg(long, default_value = "dvcon.par")]
    pub dvcon_out: PathBuf,
}

/// Options accepted by the `classify` command.
#[derive(Debug, Args, Clone)]
pub struct ClassifyCommand {
    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An output artifact could not be written.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Beam records could not be read.
    #[error(transparent)]
    Inp(#[from] InpProviderError),
    /// The sizing block configuration was rejected.
    #[error(transparent)]
    Dvcon(#[from] DvconError),
    /// Partitioning failed.
    #[error(transparent)]
    Core(#[from] PartitionError),
}

impl CliError {
    /// Stable code of the outermost failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_INPUT_IO",
            Self::Write { .. } => "CLI_WRITE_IO",
            Self::Inp(error) => error.code(),
            Self::Dvcon(error) => error.code(),
            Self::Core(error) => error.code().as_str(),
        }
    }

    /// Stable code of the inner cause of a partitioning failure, if any.
    #[must_use]
    pub const fn cause_code(&self) -> Option<&'static str> {
        let Self::Core(error) = self else {
            return None;
        };
        if let Some(code) = error.model_code() {
            Some(code.as_str())
        } else if let Some(code) = error.walk_code() {
            Some(code.as_str())
        } else {
            None
        }
    }

    /// Element ids implicated by a partitioning failure, in ascending order.
    ///
    /// Empty for failures that happen before the model is built.
    #[must_use]
    pub fn implicated_elements(&self) -> Vec<ElementId> {
        let Self::Core(error) = self else {
            return Vec::new();
        };
        let mut elements = error.implicated_elements();
        elements.sort_unstable();
        elements
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, partitioning or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use beamchain_cli::cli::{ClassifyCommand, Cli, Command, ExecutionSummary, InputArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "*Element, type=B31\n1, 10, 20\n2, 20, 30\n")?;
/// let cli = Cli {
///     command: Command::Classify(ClassifyCommand {
///         input: InputArgs { path: file.path().to_path_buf(), lines: None, name: None },
///     }),
/// };
/// let ExecutionSummary::Classify(summary) = run_cli(cli)? else {
///     unreachable!("classify yields a classify summary");
/// };
/// assert_eq!(summary.report.nodes().pass_through().len(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Partition(command) => {
            span.record("command", "partition");
            run_partition(command).map(ExecutionSummary::Partition)
        }
        Command::Classify(command) => {
            span.record("command", "classify");
            run_classify(command).map(ExecutionSummary::Classify)
        }
    }
}

#[instrument(
    name = "cli.partition",
    err,
    skip(command),
    fields(selection = field::Empty, elset_out = field::Empty, dvcon_out = field::Empty),
)]
pub(super) fn run_partition(command: PartitionCommand) -> Result<PartitionSummary, CliError> {
    let PartitionCommand {
        input,
        selection,
        prefix,
        ids_per_line,
        id_name,
        elset_out,
        dvcon_out,
    } = command;
    let span = Span::current();
    span.record("selection", field::debug(selection));
    span.record("elset_out", field::display(elset_out.display()));
    span.record("dvcon_out", field::display(dvcon_out.display()));

    let dvcon = DvconSizing::default().with_id_name(id_name)?;
    let partitioner: Partitioner = PartitionerBuilder::new()
        .with_selection_order(selection.into())
        .build();
    let feed = load_feed(&input)?;
    let report = partitioner.run(&feed)?;

    let naming = GroupNaming::new(prefix, GroupNaming::DEFAULT_WIDTH);
    let elsets = ElsetWriter::new(ids_per_line).render_partition(report.partition(), &naming);
    let sizing = dvcon.render(naming.names(report.partition().len()));
    write_all_atomically(&[
        (elset_out.as_path(), elsets.as_str()),
        (dvcon_out.as_path(), sizing.as_str()),
    ])?;

    info!(
        feed = feed.name(),
        chains = report.partition().len(),
        "partition artifacts written"
    );
    Ok(PartitionSummary {
        feed: feed.name().to_owned(),
        report,
        elset_path: elset_out,
        dvcon_path: dvcon_out,
    })
}

#[instrument(name = "cli.classify", err, skip(command))]
pub(super) fn run_classify(command: ClassifyCommand) -> Result<ClassifySummary, CliError> {
    let feed = load_feed(&command.input)?;
    let report = PartitionerBuilder::new().build().classify(&feed)?;
    Ok(ClassifySummary {
        feed: feed.name().to_owned(),
        report,
    })
}

#[instrument(name = "cli.load_feed", err, skip(input), fields(path = field::Empty, override_name = field::Empty))]
pub(super) fn load_feed(input: &InputArgs) -> Result<InpBeamFeed, CliError> {
    let span = Span::current();
    span.record("path", field::display(input.path.display()));
    span.record(
        "override_name",
        input.name.as_deref().unwrap_or("<derived>"),
    );
    let file = File::open(&input.path).map_err(|source| CliError::Io {
        path: input.path.clone(),
        source,
    })?;
    let name = derive_feed_name(&input.path, input.name.as_deref());
    let selection = input.lines.unwrap_or_default();
    let feed = InpBeamFeed::try_from_reader(name, BufReader::new(file), selection)?;
    info!(
        feed = feed.name(),
        elements = feed.len(),
        sections = feed.section_count(),
        "beam records loaded"
    );
    Ok(feed)
}

pub(super) fn derive_feed_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "beams".to_owned(), ToOwned::to_owned)
}

/// Parses `START:END` into a half-open line range.
pub(super) fn parse_line_range(raw: &str) -> Result<LineSelection, String> {
    let (start, end) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got `{raw}`"))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid line number `{value}`: {err}"))
    };
    let (start, end) = (parse(start)?, parse(end)?);
    if start >= end {
        return Err(format!("line range {start}:{end} is empty"));
    }
    Ok(LineSelection::Range { start, end })
}
