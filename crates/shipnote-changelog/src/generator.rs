//! Deployment note generation

use shipnote_core::Config;
use tracing::{debug, info, instrument, warn};

use crate::formatter::{MessageRenderer, RenderedMessage};
use crate::normalize::normalize;
use crate::outcome::Outcome;
use crate::parser::{EntryParser, GrammarParser};
use crate::repository::resolve_repository;
use crate::resolver::ReferenceResolver;
use crate::structure::split_sections;
use crate::types::{Counts, MessageContext, Report, ResolvedRecord};

/// Deployment note generator
pub struct NotesGenerator {
    parser: Box<dyn EntryParser>,
    config: Config,
}

impl NotesGenerator {
    /// Create a new generator with the grammar parser
    pub fn new(config: Config) -> Self {
        Self {
            parser: Box::new(GrammarParser::with_config(
                &config.extraction,
                &config.links,
            )),
            config,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: EntryParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Run a body through normalization, validation, extraction and link resolution
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub fn generate(&self, body: &str) -> Report {
        info!(body_len = body.len(), "generating deployment notes");
        let normalized = normalize(body);

        let sections = match split_sections(&normalized, &self.config.markers) {
            Ok(sections) => sections,
            Err(err) => {
                debug!(error = %err, "structural validation failed");
                return Report::failed(body, err.into(), Counts::default());
            }
        };

        let extraction = match self.parser.parse(sections.entries) {
            Ok(extraction) => extraction,
            Err(err) => {
                debug!(error = %err, "entry extraction failed");
                let counts = Counts {
                    matched: 0,
                    expected: self.parser.expected_count(sections.entries),
                };
                return Report::failed(body, err.into(), counts);
            }
        };

        let resolver = ReferenceResolver::new(&self.config.links, sections.footer);
        let records: Vec<ResolvedRecord> = extraction
            .records
            .into_iter()
            .map(|record| {
                let links = resolver.fragments(&record);
                ResolvedRecord { record, links }
            })
            .collect();

        let counts = extraction.counts;
        let outcome = if counts.is_incomplete() {
            warn!(
                matched = counts.matched,
                expected = counts.expected,
                "not all entries matched the expected format"
            );
            Outcome::NotAllProcessed {
                matched: counts.matched,
                expected: counts.expected,
            }
        } else {
            Outcome::Success
        };

        debug!(
            records = records.len(),
            outcome = outcome.name(),
            "deployment notes generated"
        );

        Report {
            body: body.to_string(),
            records,
            counts,
            outcome,
        }
    }

    /// Render a report
    pub fn render(
        &self,
        report: &Report,
        renderer: &dyn MessageRenderer,
        ctx: &MessageContext,
    ) -> RenderedMessage {
        renderer.render(report, ctx)
    }

    /// Generate and render in one step
    #[instrument(skip(self, body, renderer, ctx), fields(renderer = renderer.name()))]
    pub fn generate_formatted(
        &self,
        body: &str,
        renderer: &dyn MessageRenderer,
        ctx: &MessageContext,
    ) -> (Report, RenderedMessage) {
        let report = self.generate(body);
        let message = self.render(&report, renderer, ctx);
        (report, message)
    }

    /// Set the `repo` field from a promotion title.
    ///
    /// Returns the repository on success. A title without a repository name
    /// leaves the context untouched.
    pub fn apply_promotion_title(
        &self,
        ctx: &mut MessageContext,
        promotion_title: &str,
    ) -> Option<String> {
        match resolve_repository(promotion_title, &self.config.message.organization) {
            Ok(repo) => {
                ctx.set_param("repo", repo.as_str());
                Some(repo)
            }
            Err(err) => {
                warn!(promotion_title, error = %err, "repository not resolved");
                None
            }
        }
    }
}

impl Default for NotesGenerator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
