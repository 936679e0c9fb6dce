//! Financial domain knowledge lookup
//!
//! Keyword retrieval over a fixed compliance document set, plus the
//! scenario and requirement tables derived from it.

mod documents;

pub use documents::{KnowledgeBase, DOMAIN_KEYWORDS};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ApiSpec, Priority};

/// Compliance scenario suggested for an API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainScenario {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub scenario_type: String,
}

impl DomainScenario {
    fn new(name: String, description: &str, priority: Priority, scenario_type: &str) -> Self {
        Self {
            name,
            description: description.to_string(),
            priority,
            scenario_type: scenario_type.to_string(),
        }
    }
}

/// Requirement block for a transaction type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequirements {
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub requirements: String,
}

const PCI_REQUIREMENTS: &str = "PCI DSS Compliance Requirements:
- Encrypt cardholder data in transit and at rest
- Restrict access to cardholder data on need-to-know basis
- Regularly test security systems and processes
- Maintain vulnerability management program
- Implement strong access control measures";

const BANKING_REQUIREMENTS: &str = "Banking Compliance Requirements:
- Implement proper transaction authorization
- Monitor for suspicious activity patterns
- Maintain audit trails for all transactions
- Validate transaction amounts against limits
- Ensure proper customer due diligence";

const GENERAL_REQUIREMENTS: &str = "General financial compliance requirements apply";

/// Lookup component over an injected knowledge base
#[derive(Clone, Debug, Default)]
pub struct FinancialKnowledge {
    base: KnowledgeBase,
}

impl FinancialKnowledge {
    pub fn new(base: KnowledgeBase) -> Self {
        Self { base }
    }

    /// Documents relevant to `query`.
    ///
    /// A document qualifies when it mentions a domain keyword and contains
    /// any whitespace-separated word of the query. Falls back to the first
    /// two documents when nothing qualifies.
    pub fn find_relevant(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();

        let relevant: Vec<&str> = self
            .base
            .documents()
            .iter()
            .filter(|doc| {
                let doc = doc.to_lowercase();
                DOMAIN_KEYWORDS.iter().any(|k| doc.contains(k))
                    && words.iter().any(|w| doc.contains(w))
            })
            .map(String::as_str)
            .collect();

        if relevant.is_empty() {
            self.base.documents().iter().take(2).map(String::as_str).collect()
        } else {
            relevant
        }
    }

    /// Compliance scenarios implied by the spec's type
    pub fn generate_domain_aware_tests(&self, spec: &ApiSpec, context: &str) -> Vec<DomainScenario> {
        let relevant = self.find_relevant(context);
        debug!(
            "{} relevant documents for '{}' ({})",
            relevant.len(),
            spec.name,
            context
        );

        let name = &spec.name;
        let kind = spec.kind.as_str().to_lowercase();
        let mut scenarios = Vec::new();

        if kind.contains("banking") || kind.contains("transaction") {
            scenarios.push(DomainScenario::new(
                format!("{name} AML Compliance Test"),
                "Test anti-money laundering transaction monitoring",
                Priority::High,
                "compliance",
            ));
            scenarios.push(DomainScenario::new(
                format!("{name} Transaction Integrity Test"),
                "Verify transaction authorization and limits",
                Priority::High,
                "functional",
            ));
        }

        if kind.contains("payment") || kind.contains("card") {
            scenarios.push(DomainScenario::new(
                format!("{name} PCI DSS Compliance Test"),
                "Test credit card data encryption and protection",
                Priority::High,
                "security",
            ));
        }

        scenarios.push(DomainScenario::new(
            format!("{name} GDPR Data Privacy Test"),
            "Test personal data protection and user rights",
            Priority::Medium,
            "compliance",
        ));

        scenarios
    }

    pub fn get_compliance_requirements(&self, transaction_type: &str) -> ComplianceRequirements {
        let requirements = if transaction_type.contains("credit_card") {
            PCI_REQUIREMENTS
        } else if transaction_type.contains("bank") {
            BANKING_REQUIREMENTS
        } else {
            GENERAL_REQUIREMENTS
        };

        ComplianceRequirements {
            transaction_type: transaction_type.to_string(),
            requirements: requirements.to_string(),
        }
    }

    /// Relevant documents joined into a prompt context block
    pub fn context_for(&self, query: &str) -> String {
        let mut context = query.to_string();
        for doc in self.find_relevant(query) {
            context.push_str("\n\n");
            context.push_str(doc);
        }
        context
    }
}
