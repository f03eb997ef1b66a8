//! Domain classification from document paths.
//!
//! Domains are coarse topical buckets (Identity, Booking, Financial, ...)
//! used to group diagrams in the output. Classification is keyword matching
//! on the root-relative path; the content is part of the signature for a
//! later content-based fallback but is not consulted today.

/// Label assigned when no keyword matches.
pub const DEFAULT_DOMAIN: &str = "General";

/// Ordered domain → path-keyword table.
///
/// An association list, not a map: first-match-wins semantics depend on the
/// check order staying exactly as written.
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("Identity", &["identity", "authentication", "onboarding", "rbac", "user-roles"]),
    ("Booking", &["booking", "supervisor-assignment", "weekly-payments"]),
    (
        "Marketplace",
        &["marketplace", "worker-search", "availability", "cart", "inventory", "saved-searches"],
    ),
    ("Financial", &["financial", "wallet", "ledger", "payment", "refund", "tax"]),
    (
        "Fulfillment",
        &["fulfillment", "time-clock", "verification", "dispute", "offline", "timesheet"],
    ),
    ("Notifications", &["notification"]),
    ("Messaging", &["messaging", "chat", "real-time-chat"]),
    (
        "System",
        &[
            "system",
            "background-jobs",
            "error-handling",
            "state-minimum",
            "observability",
            "monitoring",
            "security",
            "deployment",
            "test-strategy",
        ],
    ),
    ("Data", &["data-dictionary", "schema", "database", "audit"]),
    (
        "Prd",
        &["epic", "customer-journey", "feature-blueprint", "rbac-acceptance", "notifications-rbac"],
    ),
    ("Ux", &["ux", "front-end", "navigation", "ui-design"]),
    ("General", &["document-reference", "repository-structure", "tech-stack", "timezone"]),
];

/// Classify a document into a domain.
///
/// `rel_path` is the document path relative to the scan root; matching is
/// case-insensitive on the path, and the first domain with a substring hit
/// wins. Pure function: identical inputs always yield the same label.
pub fn classify_domain(rel_path: &str, _content: &str) -> &'static str {
    let path_lower = rel_path.to_lowercase();

    for (domain, keywords) in DOMAIN_KEYWORDS {
        if keywords.iter().any(|keyword| path_lower.contains(keyword)) {
            return domain;
        }
    }

    DEFAULT_DOMAIN
}
