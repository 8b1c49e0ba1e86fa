//! Prompt templates for the swarm flow

/// Maximum characters of a recommendation forwarded to the follow-up model
pub const FOLLOWUP_SUMMARY_LIMIT: usize = 1000;

/// Templates for generating user messages at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// User message for an agent.
    ///
    /// Without context the agent sees the bare query.
    pub fn user_message(query: &str, context: &str) -> String {
        if context.is_empty() {
            query.to_string()
        } else {
            format!("Query: {}\n\nContext from other agents:\n{}", query, context)
        }
    }

    /// System prompt for follow-up suggestions
    pub fn followup_system() -> &'static str {
        "You are a research assistant that generates insightful follow-up questions. Based on the user's original question and the analysis provided, suggest exactly 3 follow-up questions that would help them explore the topic more deeply. Each question should be specific, actionable, and directly related to the analysis. Return ONLY a JSON array of 3 question strings, no other text."
    }

    /// User prompt for follow-up suggestions
    pub fn followup_prompt(query: &str, recommendation: &str) -> String {
        let summary: String = recommendation.chars().take(FOLLOWUP_SUMMARY_LIMIT).collect();
        format!(
            "Original Question: {}\n\nAnalysis Summary: {}\n\nGenerate 3 follow-up questions as a JSON array.",
            query, summary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_without_context() {
        assert_eq!(PromptTemplate::user_message("Rent or buy?", ""), "Rent or buy?");
    }

    #[test]
    fn test_user_message_with_context() {
        let msg = PromptTemplate::user_message("Rent or buy?", "Research Agent: prices up");
        assert_eq!(
            msg,
            "Query: Rent or buy?\n\nContext from other agents:\nResearch Agent: prices up"
        );
    }

    #[test]
    fn test_followup_prompt_truncates_by_chars() {
        let long = "é".repeat(FOLLOWUP_SUMMARY_LIMIT + 50);
        let prompt = PromptTemplate::followup_prompt("q", &long);
        assert_eq!(prompt.matches('é').count(), FOLLOWUP_SUMMARY_LIMIT);
        assert!(prompt.starts_with("Original Question: q\n\nAnalysis Summary: "));
    }
}
