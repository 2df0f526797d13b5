//! Linguistic annotation — tokens and named entities over extracted text.
//!
//! The two historical matching styles (raw substring scans vs tokenized
//! matching) are unified behind the `Annotator` trait with one policy:
//! whole-token, case-insensitive. Every downstream check reads the same
//! `AnnotatedText`, so the checks cannot silently diverge.

use anyhow::{Context, Result};
use regex::Regex;

/// Semantic category the annotator assigns to a recognized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Date,
    Email,
    Url,
}

/// A span of text classified into a semantic category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// The exact surface string as it appears in the document.
    pub surface: String,
    pub label: EntityLabel,
}

/// The token and entity view the annotator derives from a text.
/// Immutable; derived once per request and read repeatedly by the
/// independent checkers.
#[derive(Debug, Clone)]
pub struct AnnotatedText {
    tokens: Vec<String>,
    entities: Vec<Entity>,
}

impl AnnotatedText {
    pub fn new(tokens: Vec<String>, entities: Vec<Entity>) -> Self {
        Self { tokens, entities }
    }

    /// Lowercase-normalized token surfaces in document order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Entities in document order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// The single seam between the checks and the underlying language model.
/// Tests substitute a stub; production uses `RuleAnnotator`.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> AnnotatedText;
}

/// Rule-based annotator backed by a compiled regex ruleset.
///
/// The ruleset is the process-wide shared model: compiled once at
/// startup (a compile failure aborts startup, not a request), never
/// mutated afterwards, and safe for concurrent use across in-flight
/// analyses.
pub struct RuleAnnotator {
    token: Regex,
    date_numeric: Regex,
    date_iso: Regex,
    date_month_year: Regex,
    email: Regex,
    url: Regex,
}

impl RuleAnnotator {
    pub fn load() -> Result<Self> {
        Ok(Self {
            // Words plus the usual tech-stack suffixes (c++, c#, node.js).
            token: Regex::new(r"[A-Za-z0-9_]+(?:[+#.][A-Za-z0-9_]+)*[+#]*")
                .context("token pattern")?,
            date_numeric: Regex::new(r"\b\d{1,4}/\d{1,4}/\d{1,4}\b")
                .context("numeric date pattern")?,
            date_iso: Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").context("ISO date pattern")?,
            date_month_year: Regex::new(
                r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b",
            )
            .context("month-year date pattern")?,
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .context("email pattern")?,
            url: Regex::new(r"\bhttps?://[^\s]+").context("url pattern")?,
        })
    }

    fn collect(&self, text: &str, pattern: &Regex, label: EntityLabel, out: &mut Vec<(usize, Entity)>) {
        for m in pattern.find_iter(text) {
            out.push((
                m.start(),
                Entity {
                    surface: m.as_str().to_string(),
                    label,
                },
            ));
        }
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> AnnotatedText {
        let tokens = self
            .token
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        let mut spans: Vec<(usize, Entity)> = Vec::new();
        self.collect(text, &self.date_numeric, EntityLabel::Date, &mut spans);
        self.collect(text, &self.date_iso, EntityLabel::Date, &mut spans);
        self.collect(text, &self.date_month_year, EntityLabel::Date, &mut spans);
        self.collect(text, &self.email, EntityLabel::Email, &mut spans);
        self.collect(text, &self.url, EntityLabel::Url, &mut spans);
        // Document order regardless of which pattern produced the span.
        spans.sort_by_key(|(start, _)| *start);
        let entities = spans.into_iter().map(|(_, e)| e).collect();

        AnnotatedText::new(tokens, entities)
    }
}
