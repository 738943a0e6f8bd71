//! Output formatters for score and run reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::scoring::{MatchResult, Recommendation, ScoringWeights};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering reports in one output format
pub trait OutputFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String>;
    fn format_run(&self, report: &RunReport) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that dispatches to the configured formatter
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_recommendation_badge(&self, recommendation: Recommendation) -> String {
        let (badge, color) = match recommendation {
            Recommendation::Yes => ("YES", Color::Green),
            Recommendation::Maybe => ("MAYBE", Color::Yellow),
            Recommendation::No => ("NO", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_category(&self, label: &str, matches: &MatchResult) -> String {
        let mut line = format!(
            "  • {}: {} of {} ({:.0}%)\n",
            label,
            matches.matched_count(),
            matches.keyword_count,
            matches.match_rate * 100.0
        );
        if self.detailed && !matches.matched_keywords.is_empty() {
            line.push_str(&format!("    {}\n", matches.matched_keywords.join(", ")));
        }
        line
    }

    fn format_candidate(&self, candidate: &CandidateScore) -> String {
        let result = &candidate.result;
        let mut output = String::new();

        output.push_str(&format!(
            "Candidate: {} ({})\n",
            self.colorize(&candidate.candidate_name, Color::Cyan),
            candidate.file_name
        ));
        output.push_str(&format!(
            "Score: {}/100 {}\n\n",
            result.score,
            self.format_recommendation_badge(result.recommendation)
        ));
        output.push_str(&format!("{}\n", result.summary));

        output.push_str(&self.format_header("Requirement Matches", 3));
        output.push_str(&self.format_category("Must-have", &result.matches.must_have));
        output.push_str(&self.format_category("Nice-to-have", &result.matches.nice_to_have));
        if result.matches.custom.keyword_count > 0 {
            output.push_str(&self.format_category("Custom", &result.matches.custom));
        }

        output.push_str(&format!("\n💪 Strengths: {}\n", display_list(&result.strengths)));
        output.push_str(&format!("⚠️  Gaps: {}\n", display_list(&result.gaps)));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 CANDIDATE SCORE", 1));
        if let Some(title) = &report.position_title {
            output.push_str(&format!("Position: {}\n", title));
        }
        output.push_str(&format!(
            "Generated: {} | Weights: {}\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            format_weights(&report.weights)
        ));

        output.push_str(&self.format_header("Result", 2));
        output.push_str(&self.format_candidate(&report.candidate));
        Ok(output)
    }

    fn format_run(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ANALYSIS RUN", 1));
        output.push_str(&format!("Position: {}\n", report.position_title));
        if let Some(custom) = &report.custom_requirements {
            output.push_str(&format!("Custom requirements: {}\n", custom));
        }
        output.push_str(&format!(
            "Status: {:?} | Weights: {} | Processing time: {}ms\n",
            report.status,
            format_weights(&report.weights),
            report.duration_ms()
        ));

        let tiers = report.tier_counts();
        output.push_str(&format!(
            "Candidates: {} ({} yes, {} maybe, {} no)\n",
            report.candidates.len(),
            self.colorize(&tiers.yes.to_string(), Color::Green),
            self.colorize(&tiers.maybe.to_string(), Color::Yellow),
            self.colorize(&tiers.no.to_string(), Color::Red)
        ));

        output.push_str(&self.format_header("Ranking", 2));
        for (i, candidate) in report.candidates.iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. {:<30} {:>3}/100 {}\n",
                i + 1,
                candidate.candidate_name,
                candidate.result.score,
                self.format_recommendation_badge(candidate.result.recommendation)
            ));
        }

        if self.detailed {
            for candidate in &report.candidates {
                output.push_str(&self.format_header(&candidate.candidate_name, 2));
                output.push_str(&self.format_candidate(candidate));
            }
        }

        if !report.skipped.is_empty() {
            output.push_str(&self.format_header("Skipped", 3));
            for skipped in &report.skipped {
                output.push_str(&format!("  • {}: {}\n", skipped.file_name, skipped.reason));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_run(&self, report: &RunReport) -> Result<String> {
        self.to_json(report)
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn recommendation_badge(recommendation: Recommendation) -> &'static str {
        match recommendation {
            Recommendation::Yes => "🟢 yes",
            Recommendation::Maybe => "🟡 maybe",
            Recommendation::No => "🔴 no",
        }
    }

    fn format_candidate(candidate: &CandidateScore) -> String {
        let result = &candidate.result;
        let mut output = String::new();

        output.push_str(&format!(
            "**Score:** {}/100 | **Recommendation:** {}\n\n",
            result.score,
            Self::recommendation_badge(result.recommendation)
        ));
        output.push_str(&format!("{}\n\n", result.summary));
        output.push_str("| Category | Matched | Total | Rate |\n");
        output.push_str("|---|---|---|---|\n");
        for (label, matches) in [
            ("Must-have", &result.matches.must_have),
            ("Nice-to-have", &result.matches.nice_to_have),
            ("Custom", &result.matches.custom),
        ] {
            output.push_str(&format!(
                "| {} | {} | {} | {:.0}% |\n",
                label,
                matches.matched_count(),
                matches.keyword_count,
                matches.match_rate * 100.0
            ));
        }
        output.push_str(&format!("\n**Strengths:** {}\n\n", display_list(&result.strengths)));
        output.push_str(&format!("**Gaps:** {}\n\n", display_list(&result.gaps)));
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "# 📊 Candidate Score: {}\n\n",
            report.candidate.candidate_name
        ));

        if self.include_metadata {
            if let Some(title) = &report.position_title {
                output.push_str(&format!("**Position:** {}\n", title));
            }
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Weights:** {}\n\n",
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.candidate.file_name,
                format_weights(&report.weights)
            ));
        }

        output.push_str(&Self::format_candidate(&report.candidate));
        Ok(output)
    }

    fn format_run(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# 📊 Analysis Run: {}\n\n", report.position_title));

        if self.include_metadata {
            output.push_str(&format!(
                "**Started:** {} | **Processing Time:** {}ms | **Weights:** {}\n\n",
                report.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.duration_ms(),
                format_weights(&report.weights)
            ));
            if let Some(custom) = &report.custom_requirements {
                output.push_str(&format!("**Custom requirements:** {}\n\n", custom));
            }
        }

        output.push_str("## Ranking\n\n");
        output.push_str("| # | Candidate | Score | Recommendation |\n");
        output.push_str("|---|---|---|---|\n");
        for (i, candidate) in report.candidates.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                candidate.candidate_name,
                candidate.result.score,
                Self::recommendation_badge(candidate.result.recommendation)
            ));
        }
        output.push('\n');

        for candidate in &report.candidates {
            output.push_str(&format!(
                "## {} (`{}`)\n\n",
                candidate.candidate_name, candidate.file_name
            ));
            output.push_str(&Self::format_candidate(candidate));
        }

        if !report.skipped.is_empty() {
            output.push_str("## Skipped\n\n");
            for skipped in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", skipped.file_name, skipped.reason));
            }
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        }
    }

    pub fn generate_score(&self, report: &ScoreReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_score(report)
    }

    pub fn generate_run(&self, report: &RunReport, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_run(report)
    }
}

fn format_weights(weights: &ScoringWeights) -> String {
    format!(
        "must-have {} / nice-to-have {} / custom {}",
        weights.must_have, weights.nice_to_have, weights.custom
    )
}

fn display_list(list: &str) -> &str {
    if list.is_empty() {
        "none"
    } else {
        list
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, base_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(base_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_score{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_score{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_score{}.md", base_name, timestamp_suffix),
    }
}
