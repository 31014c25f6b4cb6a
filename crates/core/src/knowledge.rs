//! Fixed knowledge snippets and the keyword-overlap lookup used by the
//! retrieval walkthrough.

/// Words of this many characters or fewer never count as a content match.
const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnowledgeSnippet {
    pub topic: &'static str,
    pub content: &'static str,
    pub source: &'static str,
}

impl KnowledgeSnippet {
    pub fn answer(&self) -> String {
        format!("Based on the knowledge base, {}", self.content.to_lowercase())
    }
}

pub const KNOWLEDGE_SNIPPETS: [KnowledgeSnippet; 3] = [
    KnowledgeSnippet {
        topic: "Datapizza AI Framework",
        content: "Datapizza AI is a Python framework for building production-ready AI agents with multi-provider support.",
        source: "Official Documentation",
    },
    KnowledgeSnippet {
        topic: "Data Pizza Skills",
        content: "Data Pizza provides specialized Claude Code skills for rapid agent and tool development.",
        source: "GitHub Repository",
    },
    KnowledgeSnippet {
        topic: "Best Practices",
        content: "Always include proper error handling, type hints, and documentation in agent tools.",
        source: "Development Guide",
    },
];

pub const SAMPLE_QUERIES: [&str; 3] = [
    "What is Datapizza AI?",
    "How can Data Pizza help with agent development?",
    "What are the best practices for creating tools?",
];

/// Returns the first snippet whose topic appears in the query, or whose
/// content contains any query word longer than three characters. Matching is
/// case-insensitive and words keep their punctuation.
pub fn find_relevant<'a>(
    snippets: &'a [KnowledgeSnippet],
    query: &str,
) -> Option<&'a KnowledgeSnippet> {
    let query = query.to_lowercase();
    let keywords: Vec<&str> =
        query.split_whitespace().filter(|word| word.chars().count() > MIN_KEYWORD_CHARS).collect();

    snippets.iter().find(|snippet| {
        if query.contains(&snippet.topic.to_lowercase()) {
            return true;
        }
        let content = snippet.content.to_lowercase();
        keywords.iter().any(|word| content.contains(word))
    })
}

#[cfg(test)]
mod tests {
    use super::{find_relevant, KnowledgeSnippet, KNOWLEDGE_SNIPPETS, SAMPLE_QUERIES};

    fn topic_for(query: &str) -> Option<&'static str> {
        find_relevant(&KNOWLEDGE_SNIPPETS, query).map(|snippet| snippet.topic)
    }

    #[test]
    fn sample_queries_pick_the_first_overlapping_snippet() {
        let topics: Vec<_> = SAMPLE_QUERIES.iter().map(|query| topic_for(query)).collect();

        assert_eq!(
            topics,
            vec![
                Some("Datapizza AI Framework"),
                Some("Datapizza AI Framework"),
                Some("Best Practices"),
            ]
        );
    }

    #[test]
    fn topic_match_is_case_insensitive() {
        assert_eq!(topic_for("tell me about DATA PIZZA SKILLS"), Some("Datapizza AI Framework"));
        assert_eq!(
            find_relevant(&KNOWLEDGE_SNIPPETS[1..], "tell me about DATA PIZZA SKILLS")
                .map(|snippet| snippet.topic),
            Some("Data Pizza Skills")
        );
    }

    #[test]
    fn short_words_never_match_content() {
        assert_eq!(topic_for("is a ai"), None);
        assert_eq!(topic_for(""), None);
    }

    #[test]
    fn punctuation_stays_attached_to_keywords() {
        let snippets = [KnowledgeSnippet {
            topic: "Tools",
            content: "tool development guide",
            source: "test",
        }];

        assert!(find_relevant(&snippets, "development?").is_none());
        assert!(find_relevant(&snippets, "development").is_some());
    }

    #[test]
    fn answer_lowercases_the_content() {
        assert_eq!(
            KNOWLEDGE_SNIPPETS[2].answer(),
            "Based on the knowledge base, always include proper error handling, type hints, and documentation in agent tools."
        );
    }
}
