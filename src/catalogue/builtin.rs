//! Compiled-in documentation index.

use crate::domain::IndexEntry;

pub(super) fn entries() -> Vec<IndexEntry> {
    vec![
        IndexEntry::new("Home", "/", "General")
            .with_description("Portal landing page and overview of every section")
            .with_keywords(["start", "index", "welcome"]),
        IndexEntry::new("Getting Started", "/getting-started", "General")
            .with_description("First steps for new engineers joining the platform")
            .with_keywords(["onboarding", "intro", "setup"]),
        IndexEntry::new("System Overview", "/system-overview", "Architecture")
            .with_description("High-level map of services, stores and data flows")
            .with_keywords(["diagram", "topology", "components"]),
        IndexEntry::new(
            "Backend Services Architecture",
            "/backend-services",
            "Architecture",
        )
        .with_description("Service boundaries, messaging and persistence layers")
        .with_keywords(["api", "services", "queues", "database"]),
        IndexEntry::new("Frontend Architecture", "/frontend", "Architecture")
            .with_description("Client application structure, routing and state")
            .with_keywords(["ui", "client", "routing"]),
        IndexEntry::new("Data Pipeline", "/data-pipeline", "Architecture")
            .with_description("Ingestion, transformation and warehouse loading")
            .with_keywords(["etl", "streaming", "batch"]),
        IndexEntry::new("Deployment Guide", "/deployment", "Operations")
            .with_description("Release process, environments and rollbacks")
            .with_keywords(["deploy", "release", "ci", "cd"]),
        IndexEntry::new("Observability", "/observability", "Operations")
            .with_description("Logging, metrics, tracing and alert routing")
            .with_keywords(["logs", "metrics", "tracing", "alerts"]),
        IndexEntry::new("Incident Runbooks", "/runbooks", "Operations")
            .with_description("Step-by-step responses for known failure modes")
            .with_keywords(["oncall", "incident", "outage"]),
        IndexEntry::new("Local Setup", "/local-setup", "Development")
            .with_description("Running the stack on a workstation")
            .with_keywords(["dev", "environment", "docker"]),
        IndexEntry::new("Coding Standards", "/coding-standards", "Development")
            .with_description("Style rules, review checklist and conventions")
            .with_keywords(["style", "lint", "review"]),
        IndexEntry::new("Testing Strategy", "/testing", "Development")
            .with_description("Unit, integration and end-to-end test layers")
            .with_keywords(["tests", "qa", "coverage"]),
        IndexEntry::new("API Reference", "/api-reference", "Reference")
            .with_description("Endpoints, payload schemas and error codes")
            .with_keywords(["endpoints", "rest", "schema"]),
        IndexEntry::new("Glossary", "/glossary", "Reference")
            .with_description("Terms used across the platform")
            .with_keywords(["terms", "definitions"]),
        IndexEntry::new("FAQ", "/faq", "Reference")
            .with_description("Answers to common questions")
            .with_keywords(["questions", "help"]),
    ]
}
