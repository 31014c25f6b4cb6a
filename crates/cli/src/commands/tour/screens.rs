//! Display routines for the interactive tour. Each writes one screen of
//! canned content; pausing is left to the caller.

use std::io::{self, Write};

use pizza_demo_core::catalog::{
    Speaker, AGENT_TEMPLATES, LOCAL_DOCS, ONLINE_RESOURCES, PROJECT_URL, RAG_FEATURES,
    SUPPORT_SCENARIOS, SUPPORT_TOOLS, TOOL_CATEGORIES, TOOL_GUARANTEES,
};
use pizza_demo_core::checks::ConfigurationReport;
use pizza_demo_core::knowledge::{KNOWLEDGE_SNIPPETS, SAMPLE_QUERIES};
use pizza_demo_core::menu::{Menu, MenuChoice};

use crate::commands::{ask, check};

const RULE_WIDTH: usize = 40;
const SEPARATOR_WIDTH: usize = 50;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "🍕".repeat(SEPARATOR_WIDTH))?;
    writeln!(out, "{}DATA PIZZA INTERACTIVE DEMO", " ".repeat(15))?;
    writeln!(out, "{}Datapizza AI Skills for Claude Code", " ".repeat(20))?;
    writeln!(out, "{}", "🍕".repeat(SEPARATOR_WIDTH))?;
    writeln!(out)
}

pub fn menu(out: &mut impl Write, menu: &Menu) -> io::Result<()> {
    writeln!(out, "What would you like to explore today?")?;
    writeln!(out)?;
    for entry in menu.entries() {
        writeln!(out, "{}. {} {}", entry.code, entry.icon, entry.label)?;
    }
    writeln!(out)
}

pub fn separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(SEPARATOR_WIDTH))
}

pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nThank you for trying Data Pizza! 🍕")?;
    writeln!(out, "Visit us at: {PROJECT_URL}")
}

pub fn invalid_choice(out: &mut impl Write, menu: &Menu) -> io::Result<()> {
    let range = menu.code_range().replace('-', " and ");
    writeln!(out, "\n❌ Invalid choice. Please enter a number between {range}.")
}

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)
}

pub fn agent_creator(out: &mut impl Write) -> io::Result<()> {
    heading(out, "🤖 AGENT CREATOR DEMO")?;
    writeln!(out, "The Agent Creator skill helps you generate production-ready AI agents.")?;
    writeln!(out, "Here are some examples of what you can create:")?;
    writeln!(out)?;

    writeln!(out, "Available Agent Templates:")?;
    for template in &AGENT_TEMPLATES {
        writeln!(out, "\n{}. {}", template.key, template.name)?;
        writeln!(out, "   Description: {}", template.description)?;
        writeln!(out, "   Command: {}", template.command)?;
        writeln!(out, "   Features: {}", template.features.join(", "))?;
    }

    writeln!(out, "\n💡 Pro Tip: Each agent template includes proper error handling,")?;
    writeln!(out, "   logging, and follows Datapizza AI best practices!")
}

pub fn tool_builder(out: &mut impl Write) -> io::Result<()> {
    heading(out, "🛠️ TOOL BUILDER DEMO")?;
    writeln!(out, "The Tool Builder skill creates custom @tool functions for your agents.")?;
    writeln!(out, "Here are the types of tools you can create:")?;
    writeln!(out)?;

    for category in &TOOL_CATEGORIES {
        writeln!(out, "\n{}. {}", category.key, category.kind)?;
        writeln!(out, "   Description: {}", category.description)?;
        writeln!(out, "   Examples:")?;
        for example in category.examples {
            writeln!(out, "     • {example}")?;
        }
        writeln!(out, "   Command: {}", category.command)?;
    }

    writeln!(out, "\n🔧 All tools include:")?;
    bullets(out, &TOOL_GUARANTEES)
}

pub fn knowledge_base(out: &mut impl Write) -> io::Result<()> {
    heading(out, "📚 RAG KNOWLEDGE AGENT DEMO")?;
    writeln!(
        out,
        "RAG (Retrieval-Augmented Generation) agents combine vector search with AI generation."
    )?;
    writeln!(
        out,
        "They can maintain and query a knowledge base while providing context-aware answers."
    )?;
    writeln!(out)?;

    writeln!(out, "🔍 Simulating Knowledge Base Operations:")?;
    writeln!(out)?;
    writeln!(out, "1. Adding information to knowledge base:")?;
    for snippet in &KNOWLEDGE_SNIPPETS {
        writeln!(out, "   ✓ Added: {} from {}", snippet.topic, snippet.source)?;
    }

    writeln!(out, "\n2. Sample queries and responses:")?;
    for (index, query) in SAMPLE_QUERIES.iter().enumerate() {
        writeln!(out, "\n   Query {}: {query}", index + 1)?;
        for line in ask::lookup_lines(query) {
            writeln!(out, "   {line}")?;
        }
    }

    writeln!(out, "\n🚀 Key Features of RAG Agents:")?;
    bullets(out, &RAG_FEATURES)
}

pub fn ecommerce(out: &mut impl Write) -> io::Result<()> {
    heading(out, "🛒 E-COMMERCE DEMO")?;
    writeln!(out, "Experience a customer service interaction with an AI agent!")?;
    writeln!(out, "This agent can help with orders, accounts, and support issues.")?;
    writeln!(out)?;

    writeln!(out, "Sample Customer Interactions:")?;
    writeln!(out)?;
    for (index, scenario) in SUPPORT_SCENARIOS.iter().enumerate() {
        writeln!(out, "Scenario {}: {} - {}", index + 1, scenario.customer, scenario.issue)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for line in scenario.conversation {
            match Speaker::of(line) {
                Speaker::Customer => writeln!(out, "👤 {line}")?,
                Speaker::Agent => writeln!(out, "🤖 {line}")?,
                Speaker::Narration => writeln!(out, "   {line}")?,
            }
        }
        writeln!(out)?;
        writeln!(out, "✅ Issue resolved successfully!")?;
        writeln!(out)?;
    }

    writeln!(out, "🛠️ Tools Used in This Demo:")?;
    bullets(out, &SUPPORT_TOOLS)
}

pub fn documentation(out: &mut impl Write) -> io::Result<()> {
    heading(out, "📖 DOCUMENTATION")?;
    writeln!(out, "Available Documentation:")?;
    for doc in &LOCAL_DOCS {
        writeln!(out, "   📄 {}: {}", doc.title, doc.location)?;
    }

    writeln!(out, "\n🌐 Online Resources:")?;
    for (icon, link) in &ONLINE_RESOURCES {
        writeln!(out, "   {icon} {}: {}", link.title, link.location)?;
    }
    Ok(())
}

pub fn configuration(out: &mut impl Write, report: &ConfigurationReport) -> io::Result<()> {
    heading(out, "🔧 CONFIGURATION CHECK")?;
    writeln!(out, "{}", check::render_human(report))
}

/// Title shown for a choice, used in diagnostics.
pub fn title(choice: MenuChoice) -> &'static str {
    match choice {
        MenuChoice::Exit => "exit",
        MenuChoice::AgentCreator => "agent creator",
        MenuChoice::ToolBuilder => "tool builder",
        MenuChoice::KnowledgeBase => "knowledge base",
        MenuChoice::Ecommerce => "e-commerce",
        MenuChoice::Documentation => "documentation",
        MenuChoice::Configuration => "configuration",
    }
}

fn bullets(out: &mut impl Write, items: &[&str]) -> io::Result<()> {
    for item in items {
        writeln!(out, "   • {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pizza_demo_core::menu::Menu;

    use super::{documentation, ecommerce, invalid_choice, knowledge_base, menu};

    fn render(screen: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        screen(&mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("screens are utf-8")
    }

    #[test]
    fn menu_lists_six_options_then_exit() {
        let text = render(|out| menu(out, &Menu::default()));
        let options: Vec<_> = text.lines().filter(|line| line.contains(". ")).collect();

        assert_eq!(options.len(), 7);
        assert!(options[0].starts_with("1. 🤖 Agent Creator"));
        assert!(options[6].starts_with("0. 🚪 Exit"));
    }

    #[test]
    fn invalid_choice_names_the_accepted_range() {
        let text = render(|out| invalid_choice(out, &Menu::default()));

        assert_eq!(text, "\n❌ Invalid choice. Please enter a number between 0 and 6.\n");
    }

    #[test]
    fn knowledge_screen_answers_each_sample_query() {
        let text = render(|out| knowledge_base(out));

        assert_eq!(text.matches("🎯 Found relevant information:").count(), 3);
        assert!(text.contains("   Query 3: What are the best practices for creating tools?"));
        assert!(text.contains("   🎯 Found relevant information: Best Practices"));
    }

    #[test]
    fn transcript_lines_are_marked_by_speaker() {
        let text = render(|out| ecommerce(out));

        assert!(text.contains("👤 Customer: mike.chen@email.com"));
        assert!(text.contains("🤖 Agent: Support ticket #TKT789 created."));
        assert_eq!(text.matches("✅ Issue resolved successfully!").count(), 2);
    }

    #[test]
    fn documentation_lists_local_and_online_resources() {
        let text = render(|out| documentation(out));

        assert!(text.contains("   📄 Setup Guide: docs/claude-setup.md"));
        let framework_link = "   🤖 Datapizza AI: https://github.com/datapizza-labs/datapizza-ai";
        assert!(text.contains(framework_link));
    }
}
