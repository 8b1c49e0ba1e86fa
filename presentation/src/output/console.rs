//! Console formatting for swarm events, follow-ups, and history

use colored::{Color, Colorize};
use swarm_domain::{
    AgentColor, AgentResult, FinalResponse, FollowUps, History, StreamEvent, confidence_score,
};

/// Width of the confidence bar in cells
const BAR_WIDTH: usize = 10;

/// Formats swarm output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one event as printed during a live run.
    ///
    /// Status lines are not formatted here; the spinner shows them.
    pub fn format_event(event: &StreamEvent) -> Option<String> {
        match event {
            StreamEvent::Status { .. } => None,
            StreamEvent::AgentResponse { data } => Some(Self::format_agent(data)),
            StreamEvent::FinalResponse { data } => Some(Self::format_final(data)),
            StreamEvent::Complete { message } => Some(format!("\n{}\n", message.green().bold())),
            StreamEvent::Error { message } => {
                Some(format!("\n{} {}\n", "Error:".red().bold(), message))
            }
        }
    }

    pub fn format_agent(result: &AgentResult) -> String {
        let color = Self::color(result.color);
        format!(
            "\n{}\n{}\n{}\n",
            format!("── {} {} ──", result.icon, result.agent)
                .color(color)
                .bold(),
            format!("{} · {}", result.role, result.model).dimmed(),
            Self::indent(&result.response, "  ")
        )
    }

    pub fn format_final(response: &FinalResponse) -> String {
        let score = confidence_score(&response.response);
        format!(
            "\n{}\n{:^60}\n{}\n\n{}\n\n{} {}\n{}\n",
            "=".repeat(60).cyan(),
            format!("{} {}", response.icon, response.agent).bold(),
            "=".repeat(60).cyan(),
            response.response,
            "Confidence:".cyan().bold(),
            Self::confidence_bar(score),
            "=".repeat(60).cyan()
        )
    }

    /// `[███████░░░] 7.0/10`
    pub fn confidence_bar(score: f32) -> String {
        let filled = (score.clamp(0.0, 10.0) / 10.0 * BAR_WIDTH as f32).round() as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        );
        let bar = if score >= 7.0 {
            bar.green()
        } else if score >= 4.0 {
            bar.yellow()
        } else {
            bar.red()
        };
        format!("[{}] {:.1}/10", bar, score)
    }

    pub fn format_followups(followups: &FollowUps) -> String {
        let mut output = format!("\n{}\n", "Follow-up questions:".cyan().bold());
        for (i, question) in followups.questions().iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, question));
        }
        output
    }

    pub fn format_history(history: &History) -> String {
        if history.is_empty() {
            return format!("{}\n", "No analyses yet.".dimmed());
        }

        let mut output = String::new();
        for (i, entry) in history.entries().iter().enumerate() {
            let when = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| entry.timestamp.to_string());
            output.push_str(&format!(
                "{:>2}. {} {}\n",
                i + 1,
                entry.query.bold(),
                format!(
                    "({}{})",
                    when,
                    entry
                        .processing_time
                        .as_deref()
                        .map(|t| format!(", {}s", t))
                        .unwrap_or_default()
                )
                .dimmed()
            ));
            let score = confidence_score(&entry.final_recommendation);
            output.push_str(&format!("    {}\n", Self::confidence_bar(score)));
        }
        output
    }

    /// One JSON object per line, as the stream carries them
    pub fn format_json_line(event: &StreamEvent) -> String {
        serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string())
    }

    fn color(color: AgentColor) -> Color {
        match color {
            AgentColor::Blue => Color::Blue,
            AgentColor::Green => Color::Green,
            AgentColor::Red => Color::Red,
            AgentColor::Yellow => Color::Yellow,
            AgentColor::Purple => Color::Magenta,
            AgentColor::Pink => Color::BrightMagenta,
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
