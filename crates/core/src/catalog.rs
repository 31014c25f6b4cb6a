//! Static showcase content for the tour screens.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub command: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolCategory {
    pub key: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub command: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportScenario {
    pub customer: &'static str,
    pub issue: &'static str,
    pub conversation: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocLink {
    pub title: &'static str,
    pub location: &'static str,
}

/// Who said a transcript line, judged by its prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Customer,
    Agent,
    Narration,
}

impl Speaker {
    pub fn of(line: &str) -> Self {
        if line.starts_with("Customer:") {
            Self::Customer
        } else if line.starts_with("Agent:") {
            Self::Agent
        } else {
            Self::Narration
        }
    }
}

pub const AGENT_TEMPLATES: [AgentTemplate; 4] = [
    AgentTemplate {
        key: "1",
        name: "Customer Service Agent",
        description: "Handles customer inquiries, order status, and support tickets",
        command: "/skill datapizza-agent-creator --type customer-service --name support_bot --provider openai",
        features: &["Database integration", "Order lookup", "Ticket creation", "Status updates"],
    },
    AgentTemplate {
        key: "2",
        name: "Research Assistant",
        description: "Conducts web research and compiles comprehensive reports",
        command: "/skill datapizza-agent-creator --type research --name researcher --provider openai --tools web-search,document-analysis",
        features: &["Web search", "Document analysis", "Source citation", "Report generation"],
    },
    AgentTemplate {
        key: "3",
        name: "E-commerce Assistant",
        description: "Helps customers with shopping, recommendations, and orders",
        command: "/skill datapizza-agent-creator --type ecommerce --name shop_assistant --provider openai",
        features: &["Product catalog", "Inventory check", "Order processing", "Recommendations"],
    },
    AgentTemplate {
        key: "4",
        name: "RAG Knowledge Agent",
        description: "Retrieval-augmented generation for knowledge-based answers",
        command: "/skill datapizza-agent-creator --type rag --name knowledge_bot --provider openai --vector-store qdrant",
        features: &["Vector search", "Context awareness", "Knowledge integration", "Source attribution"],
    },
];

pub const TOOL_CATEGORIES: [ToolCategory; 4] = [
    ToolCategory {
        key: "1",
        kind: "Database Tools",
        description: "CRUD operations and data management",
        examples: &[
            "get_customer_data(customer_id: str) -> str",
            "update_inventory(product_id: str, quantity: int) -> str",
            "search_products(category: str, price_range: str) -> str",
        ],
        command: "/skill datapizza-tool-builder --type database --function manage_customers",
    },
    ToolCategory {
        key: "2",
        kind: "API Integration Tools",
        description: "REST API calls and web service integration",
        examples: &[
            "fetch_weather_data(city: str) -> str",
            "send_slack_notification(webhook: str, message: str) -> str",
            "process_payment(payment_data: dict) -> str",
        ],
        command: "/skill datapizza-tool-builder --type api --function weather_service",
    },
    ToolCategory {
        key: "3",
        kind: "File System Tools",
        description: "File operations and document processing",
        examples: &[
            "process_json_file(file_path: str, operation: str) -> str",
            "extract_pdf_text(pdf_path: str) -> str",
            "create_backup(source_dir: str, backup_dir: str) -> str",
        ],
        command: "/skill datapizza-tool-builder --type file --function document_processor",
    },
    ToolCategory {
        key: "4",
        kind: "Business Logic Tools",
        description: "Custom business rules and calculations",
        examples: &[
            "calculate_discount(price: float, tier: str, quantity: int) -> str",
            "generate_invoice(order_data: dict) -> str",
            "validate_shipping_address(address: dict) -> str",
        ],
        command: "/skill datapizza-tool-builder --type business --function pricing_calculator",
    },
];

pub const TOOL_GUARANTEES: [&str; 4] = [
    "Type hints and validation",
    "Comprehensive error handling",
    "Clear documentation",
    "Integration examples",
];

pub const RAG_FEATURES: [&str; 5] = [
    "Context-aware responses",
    "Source attribution",
    "Continuous learning",
    "Web content integration",
    "Knowledge base management",
];

pub const SUPPORT_SCENARIOS: [SupportScenario; 2] = [
    SupportScenario {
        customer: "Sarah Johnson",
        issue: "Order status inquiry",
        conversation: &[
            "Agent: Hello! How can I help you today?",
            "Customer: Hi, I'm checking on order #12345",
            "Agent: Let me look that up for you... [searches database]",
            "Agent: I found your order! It's currently 'In Transit' and should arrive in 2-3 days.",
            "Customer: Great! Can you tell me what's in it?",
            "Agent: Your order contains: 2x Python Programming Book, 1x Wireless Mouse",
            "Customer: Perfect, thank you!",
            "Agent: You're welcome! Is there anything else I can help with?",
        ],
    },
    SupportScenario {
        customer: "Mike Chen",
        issue: "Technical support",
        conversation: &[
            "Agent: Hello! How can I assist you today?",
            "Customer: I'm having trouble logging into my account",
            "Agent: I'm sorry to hear that. Let me help you resolve this issue.",
            "Agent: Can you confirm your email address so I can locate your account?",
            "Customer: mike.chen@email.com",
            "Agent: Thanks! I found your account. I'll create a support ticket for this issue.",
            "Agent: Support ticket #TKT789 created. Our technical team will contact you within 24 hours.",
            "Customer: Thank you for your help!",
            "Agent: You're welcome! We'll get this resolved for you quickly.",
        ],
    },
];

pub const SUPPORT_TOOLS: [&str; 4] = [
    "Database queries (order lookup)",
    "Customer account management",
    "Support ticket creation",
    "Status updates and notifications",
];

pub const LOCAL_DOCS: [DocLink; 6] = [
    DocLink { title: "Setup Guide", location: "docs/claude-setup.md" },
    DocLink { title: "Agent Creator", location: "skills/datapizza-agent-creator/SKILL.md" },
    DocLink { title: "Tool Builder", location: "skills/datapizza-tool-builder/SKILL.md" },
    DocLink { title: "Examples", location: "examples/" },
    DocLink { title: "Main README", location: "README.md" },
    DocLink { title: "Contributing", location: "CONTRIBUTING.md" },
];

pub const SETUP_GUIDE: &str = "docs/claude-setup.md";
pub const PROJECT_URL: &str = "https://github.com/inferis995/data-pizza";
const FRAMEWORK_URL: &str = "https://github.com/datapizza-labs/datapizza-ai";

pub const ONLINE_RESOURCES: [(&str, DocLink); 3] = [
    ("🍕", DocLink { title: "Data Pizza GitHub", location: PROJECT_URL }),
    ("🤖", DocLink { title: "Datapizza AI", location: FRAMEWORK_URL }),
    ("💬", DocLink { title: "Claude Code", location: "https://claude.ai/code" }),
];
