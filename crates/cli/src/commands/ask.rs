use pizza_demo_core::knowledge::{find_relevant, KNOWLEDGE_SNIPPETS};

const NO_MATCH: &str = "❓ No specific information found. Would you like me to search the web?";

pub fn run(query: &str) -> String {
    lookup_lines(query).join("\n")
}

/// Renders the outcome of a knowledge lookup, one line per fact.
pub fn lookup_lines(query: &str) -> Vec<String> {
    match find_relevant(&KNOWLEDGE_SNIPPETS, query) {
        Some(snippet) => vec![
            format!("🎯 Found relevant information: {}", snippet.topic),
            format!("📄 Source: {}", snippet.source),
            format!("💡 Answer: {}", snippet.answer()),
        ],
        None => vec![NO_MATCH.to_string()],
    }
}
