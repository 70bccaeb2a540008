//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the instance plan
//! 2. Load both templates
//! 3. Render the document
//! 4. Write it to the sink
//!
//! Nothing is written until both templates have loaded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    application::ports::{DocumentSink, TemplateSource},
    domain::{BaseTemplate, ComposeDocument, InstancePlan, ServiceTemplate, Token},
    error::{RiggerError, RiggerResult},
};

/// Everything one generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub base_template: PathBuf,
    pub service_template: PathBuf,
    pub output: PathBuf,
    pub plan: InstancePlan,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub output: PathBuf,
    pub instances: usize,
    pub bytes: usize,
    pub tokens: Vec<Token>,
}

/// Main generation service.
pub struct GenerateService {
    source: Box<dyn TemplateSource>,
    sink: Box<dyn DocumentSink>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use rigger_core::application::{GenerateService, ports::*};
    ///
    /// let service = GenerateService::new(
    ///     source, // impl TemplateSource
    ///     sink,   // impl DocumentSink
    /// );
    /// ```
    pub fn new(source: Box<dyn TemplateSource>, sink: Box<dyn DocumentSink>) -> Self {
        Self { source, sink }
    }

    /// Generate the document and write it to `request.output`.
    #[instrument(
        skip_all,
        fields(
            base = %request.base_template.display(),
            service = %request.service_template.display(),
            output = %request.output.display(),
            instances = request.plan.count()
        )
    )]
    pub fn generate(&self, request: &GenerationRequest) -> RiggerResult<GenerationSummary> {
        let (document, tokens) = self.build(request)?;

        let bytes = self.sink.write_document(&request.output, &document)?;
        info!(bytes, "Output written");

        Ok(GenerationSummary {
            output: request.output.clone(),
            instances: document.block_count(),
            bytes,
            tokens,
        })
    }

    /// Render the document without writing it anywhere.
    #[instrument(skip_all, fields(instances = request.plan.count()))]
    pub fn preview(&self, request: &GenerationRequest) -> RiggerResult<ComposeDocument> {
        self.build(request).map(|(document, _)| document)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn build(&self, request: &GenerationRequest) -> RiggerResult<(ComposeDocument, Vec<Token>)> {
        request.plan.validate().map_err(RiggerError::Domain)?;

        let base = BaseTemplate::new(self.load(&request.base_template)?);
        let service = ServiceTemplate::new(self.load(&request.service_template)?);

        let tokens = service.tokens();
        if tokens.is_empty() {
            warn!(
                path = %request.service_template.display(),
                "Service template contains no placeholders; every block will be identical"
            );
        }

        info!(plan = %request.plan, "Rendering document");
        let document = ComposeDocument::render(&base, &service, &request.plan);
        Ok((document, tokens))
    }

    fn load(&self, path: &Path) -> RiggerResult<String> {
        let text = self.source.read_template(path)?;
        info!(path = %path.display(), bytes = text.len(), "Template loaded");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockDocumentSink, MockTemplateSource},
    };

    fn request(count: u32) -> GenerationRequest {
        GenerationRequest {
            base_template: PathBuf::from("base.yml"),
            service_template: PathBuf::from("service.yml"),
            output: PathBuf::from("out.yml"),
            plan: InstancePlan::new(count),
        }
    }

    fn source_with(service: &'static str) -> MockTemplateSource {
        let mut source = MockTemplateSource::new();
        source.expect_read_template().returning(move |path| {
            if path == Path::new("base.yml") {
                Ok("version: '3'".to_string())
            } else {
                Ok(service.to_string())
            }
        });
        source
    }

    #[test]
    fn generate_writes_rendered_document() {
        let mut sink = MockDocumentSink::new();
        sink.expect_write_document()
            .withf(|path, doc| path == Path::new("out.yml") && doc.block_count() == 2)
            .times(1)
            .returning(|_, doc| Ok(doc.byte_len()));

        let service = GenerateService::new(
            Box::new(source_with("svc{index}: {port_index}")),
            Box::new(sink),
        );
        let summary = service.generate(&request(2)).unwrap();

        assert_eq!(summary.instances, 2);
        assert_eq!(summary.bytes, "version: '3'\nsvc0: 2000\nsvc1: 2001\n".len());
        assert_eq!(summary.tokens, vec![Token::Index, Token::PortIndex]);
    }

    #[test]
    fn missing_service_template_never_touches_sink() {
        let mut source = MockTemplateSource::new();
        source.expect_read_template().returning(|path| {
            if path == Path::new("base.yml") {
                Ok("version: '3'".to_string())
            } else {
                Err(ApplicationError::template_read(
                    path,
                    &io::Error::new(io::ErrorKind::NotFound, "missing"),
                )
                .into())
            }
        });
        let mut sink = MockDocumentSink::new();
        sink.expect_write_document().never();

        let service = GenerateService::new(Box::new(source), Box::new(sink));
        let err = service.generate(&request(3)).unwrap_err();

        assert!(matches!(
            err,
            RiggerError::Application(ApplicationError::TemplateRead { .. })
        ));
    }

    #[test]
    fn invalid_plan_fails_before_loading() {
        let mut source = MockTemplateSource::new();
        source.expect_read_template().never();
        let mut sink = MockDocumentSink::new();
        sink.expect_write_document().never();

        let service = GenerateService::new(Box::new(source), Box::new(sink));
        let mut req = request(2);
        req.plan = req.plan.with_port_base(u32::MAX);

        assert!(matches!(
            service.generate(&req),
            Err(RiggerError::Domain(_))
        ));
    }

    #[test]
    fn sink_error_propagates() {
        let mut sink = MockDocumentSink::new();
        sink.expect_write_document().returning(|path, _| {
            Err(ApplicationError::output_write(
                path,
                &io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            )
            .into())
        });

        let service = GenerateService::new(Box::new(source_with("x")), Box::new(sink));
        assert!(matches!(
            service.generate(&request(1)),
            Err(RiggerError::Application(ApplicationError::OutputWrite { .. }))
        ));
    }

    #[test]
    fn preview_does_not_write() {
        let mut sink = MockDocumentSink::new();
        sink.expect_write_document().never();

        let service = GenerateService::new(
            Box::new(source_with("svc{index}")),
            Box::new(sink),
        );
        let doc = service.preview(&request(0)).unwrap();
        assert_eq!(doc.to_text(), "version: '3'\n");
    }

    #[test]
    fn template_without_tokens_is_not_an_error() {
        let mut sink = MockDocumentSink::new();
        sink.expect_write_document()
            .returning(|_, doc| Ok(doc.byte_len()));

        let service = GenerateService::new(Box::new(source_with("static")), Box::new(sink));
        let summary = service.generate(&request(3)).unwrap();
        assert_eq!(summary.instances, 3);
        assert!(summary.tokens.is_empty());
    }
}
