//! Report writers: JSON for machines, Markdown for docs, colored text for
//! the terminal.

use crate::metrics::CategoryCompletion;
use crate::summary::{AnalysisReport, GroupSummary};
use colored::*;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, destination: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    }
}

/// Share of a group's bucket count against the dataset-wide bucket total.
/// The denominator floors at 1 so an empty bucket reads as 0% of nothing
/// instead of a division error.
fn bucket_share(count: usize, bucket_total: usize) -> f64 {
    count as f64 / bucket_total.max(1) as f64 * 100.0
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_group_table(
        &mut self,
        title: &str,
        group: &GroupSummary,
        report: &AnalysisReport,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Scope | Count | % of scope total |")?;
        writeln!(self.writer, "|-------|------:|-----------------:|")?;
        for (bucket, count) in group.counts.iter() {
            writeln!(
                self.writer,
                "| {} | {} | {:.1}% |",
                bucket.label(),
                count,
                bucket_share(count, report.summary.all.get(bucket))
            )?;
        }
        writeln!(self.writer, "| **Total** | **{}** | |", group.len())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Red Table Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Dataset: {}", report.dataset.display())?;
        writeln!(self.writer, "Records: {}", report.summary.total_records)?;
        writeln!(self.writer)?;

        self.write_group_table("Risk of Incompletion by 2033", &report.summary.red_set, report)?;
        if report.summary.second_language_access > 0 {
            writeln!(
                self.writer,
                "_{} languages have their goal met via a second language and are not counted at risk._",
                report.summary.second_language_access
            )?;
            writeln!(self.writer)?;
        }

        self.write_group_table("No Translation Activity", &report.summary.no_activity, report)?;
        self.write_group_table(
            "Language Development / Engagement Only",
            &report.summary.active_ldse,
            report,
        )?;
        self.write_group_table("Active Translation", &report.summary.active_translation, report)?;

        writeln!(self.writer, "## All Access Goals Completion")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Goal | Met | Total | Completion |")?;
        writeln!(self.writer, "|------|----:|------:|-----------:|")?;
        for (name, completion) in [
            ("Full Bible", &report.completion.full_bible),
            ("New Testament", &report.completion.new_testament),
            ("Portion", &report.completion.portion),
        ] {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.1}% |",
                name, completion.met, completion.total, completion.percent
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Goal met: {} of {} languages. {} until Pentecost 2033.",
            report.summary.goal_met.len(),
            report.summary.total_records,
            report.countdown
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_rule(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "───────────────────────────────────────────")?;
        Ok(())
    }

    fn write_group(
        &mut self,
        title: &str,
        group: &GroupSummary,
        report: &AnalysisReport,
        highlight: bool,
    ) -> anyhow::Result<()> {
        let heading = if highlight {
            title.red().bold()
        } else {
            title.bold()
        };
        writeln!(self.writer, "{heading}")?;
        self.write_rule()?;
        for (bucket, count) in group.counts.iter() {
            let share = bucket_share(count, report.summary.all.get(bucket));
            writeln!(self.writer, "  {:<8} {:>6}  {:>6.1}%", bucket.label(), count, share)?;
        }
        let total = if highlight {
            group.len().to_string().red().bold().to_string()
        } else {
            group.len().to_string()
        };
        writeln!(self.writer, "  {:<8} {:>6}", "Total", total)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_shortlist(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.red_shortlist.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", "Top languages at risk".bold())?;
        self.write_rule()?;
        for record in &report.red_shortlist {
            let goal = record
                .chapter_goal
                .map(|g| format!("{g:.0}"))
                .unwrap_or_else(|| "?".to_string());
            writeln!(
                self.writer,
                "  {:<24} {:<20} goal {:>5}  {}",
                record.language_name(),
                record.country(),
                goal,
                record.access_status().dimmed()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".red())?;
        writeln!(self.writer, "{}", "              THE RED TABLE".bold().red())?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".red())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} languages at risk of incompletion by 2033",
            report.summary.red_set.len().to_string().red().bold()
        )?;
        writeln!(
            self.writer,
            "{} until Pentecost 2033 ({})",
            report.countdown.to_string().bold(),
            report.as_of.format("as of %Y-%m-%d")
        )?;
        if report.summary.second_language_access > 0 {
            writeln!(
                self.writer,
                "{}",
                format!(
                    "* excludes {} languages with Scripture access via a second language",
                    report.summary.second_language_access
                )
                .dimmed()
            )?;
        }
        writeln!(self.writer)?;

        self.write_group("Risk of Incompletion", &report.summary.red_set, report, true)?;
        self.write_group("No Translation Activity", &report.summary.no_activity, report, false)?;
        self.write_group(
            "Language Development / Engagement Only",
            &report.summary.active_ldse,
            report,
            false,
        )?;
        self.write_group("Active Translation", &report.summary.active_translation, report, false)?;

        writeln!(self.writer, "{}", "All Access Goals Completion".bold())?;
        self.write_rule()?;
        for (name, completion) in [
            ("Full Bible", &report.completion.full_bible),
            ("New Testament", &report.completion.new_testament),
            ("Portion", &report.completion.portion),
        ] {
            writeln!(
                self.writer,
                "  {:<14} {:>5} / {:<5} {}",
                name,
                completion.met,
                completion.total,
                colorize_percent(completion)
            )?;
        }
        writeln!(
            self.writer,
            "  {:<14} {:>5} / {:<5}",
            "Goal met",
            report.summary.goal_met.len(),
            report.summary.total_records
        )?;
        writeln!(self.writer)?;

        self.write_shortlist(report)?;

        // Bucket totals undercount when goals are unrecognized; say so.
        let unbucketed = report.summary.total_records - report.summary.all.total();
        if unbucketed > 0 {
            writeln!(
                self.writer,
                "{}",
                format!("{unbucketed} records have no recognized goal size").yellow()
            )?;
        }
        Ok(())
    }
}

fn colorize_percent(completion: &CategoryCompletion) -> String {
    let text = format!("{:>5.1}%", completion.percent);
    if completion.percent >= 75.0 {
        text.green().to_string()
    } else if completion.percent >= 40.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
