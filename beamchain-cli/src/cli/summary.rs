//! Human-readable command summaries.

use std::io::{self, Write};
use std::path::PathBuf;

use beamchain_core::{ClassificationReport, NodeCensus, PartitionReport};

/// Outcome of one CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `partition`.
    Partition(PartitionSummary),
    /// Result of `classify`.
    Classify(ClassifySummary),
}

/// Outcome of the `partition` command.
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    /// Name of the feed that was partitioned.
    pub feed: String,
    /// Chains and node classes.
    pub report: PartitionReport,
    /// Where the `*Elset` blocks were written.
    pub elset_path: PathBuf,
    /// Where the `DVCON_SIZING` block was written.
    pub dvcon_path: PathBuf,
}

/// Outcome of the `classify` command.
#[derive(Debug, Clone)]
pub struct ClassifySummary {
    /// Name of the feed that was classified.
    pub feed: String,
    /// Node and element classes.
    pub report: ClassificationReport,
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Partition(partition) => render_partition(partition, &mut writer),
        ExecutionSummary::Classify(classify) => render_classify(classify, &mut writer),
    }
}

fn render_partition(summary: &PartitionSummary, writer: &mut impl Write) -> io::Result<()> {
    let partition = summary.report.partition();
    writeln!(writer, "feed: {}", summary.feed)?;
    writeln!(writer, "elements: {}", summary.report.element_count())?;
    render_nodes(summary.report.census(), writer)?;
    writeln!(writer, "chains: {}", partition.len())?;
    let longest = partition.iter().map(|chain| chain.len()).max().unwrap_or(0);
    writeln!(writer, "longest chain: {longest}")?;
    writeln!(writer, "elsets: {}", summary.elset_path.display())?;
    writeln!(writer, "dvcon: {}", summary.dvcon_path.display())
}

fn render_classify(summary: &ClassifySummary, writer: &mut impl Write) -> io::Result<()> {
    let elements = summary.report.elements();
    writeln!(writer, "feed: {}", summary.feed)?;
    writeln!(writer, "elements: {}", summary.report.element_count())?;
    render_nodes(summary.report.nodes(), writer)?;
    writeln!(writer, "end elements: {}", elements.end_elements().len())?;
    writeln!(writer, "inner elements: {}", elements.inner_elements().len())?;
    writeln!(writer, "junction elements: {}", elements.junction_elements().len())
}

fn render_nodes(census: &NodeCensus, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "nodes: {} (endpoints {}, pass-through {}, junctions {})",
        census.len(),
        census.endpoints().len(),
        census.pass_through().len(),
        census.junctions().len()
    )
}
