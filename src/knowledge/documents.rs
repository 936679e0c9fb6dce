//! Built-in financial compliance documents

/// Keywords marking a document as compliance material
pub const DOMAIN_KEYWORDS: &[&str] = &["pci", "aml", "gdpr", "transaction", "compliance", "security"];

const PCI_DSS: &str = "PCI DSS Compliance Testing Requirements:
- All credit card data must be encrypted in transit and at rest
- Access to cardholder data must be restricted and logged
- Regular vulnerability scans must be performed
- Strong access control measures must be implemented
- Cardholder data must not be stored unnecessarily
- Network security testing must be performed regularly";

const AML: &str = "Anti-Money Laundering (AML) Testing:
- Transaction monitoring for suspicious patterns
- Customer due diligence verification
- Sanctions screening for all parties
- Reporting of suspicious activities within required timeframes
- Know Your Customer (KYC) procedures must be tested
- Large transaction reporting thresholds must be validated";

const TRANSACTION_INTEGRITY: &str = "Financial Transaction Integrity:
- All transactions must have proper authorization
- Transaction amounts must be validated against limits
- Duplicate transaction detection and prevention
- Audit trails must be maintained for all transactions
- Transaction reversal procedures must be tested
- Multi-factor authentication for high-value transactions";

const GDPR: &str = "GDPR Data Privacy Requirements:
- Personal financial data must be protected
- Users must have right to data portability
- Data retention policies must be enforced
- Consent management for data processing
- Right to be forgotten must be implemented
- Data breach notification procedures must be tested";

const SOX: &str = "SOX Financial Reporting Compliance:
- Internal controls over financial reporting must be tested
- Accuracy of financial data must be validated
- Segregation of duties must be enforced
- Management assertions must be testable
- IT general controls must be evaluated
- Change management processes must be validated";

const BANKING_SECURITY: &str = "Banking Security Best Practices:
- Multi-factor authentication for all access
- Session timeout and management
- Secure communication protocols (TLS 1.3+)
- Input validation and sanitization
- Rate limiting and DDoS protection
- Fraud detection and prevention systems";

/// Immutable document set handed to the lookup component
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeBase {
    documents: Vec<String>,
}

impl KnowledgeBase {
    /// The six built-in documents, in fixed order
    pub fn financial_domain() -> Self {
        Self::with_documents(
            [PCI_DSS, AML, TRANSACTION_INTEGRITY, GDPR, SOX, BANKING_SECURITY]
                .iter()
                .map(|d| d.to_string())
                .collect(),
        )
    }

    pub fn with_documents(documents: Vec<String>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::financial_domain()
    }
}
