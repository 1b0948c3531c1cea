//! Document rendering
//!
//! Two stages, mirroring the desk's fixed request template: the template
//! is composed into an off-screen surface at 2x scale, then the surface is
//! embedded into a single-page A4 container scaled to the printable width.
//! The surface is never part of the visible interface.

mod pdf;
mod template;

pub use template::{Rule, RunStyle, Surface, TextRun};

use crate::state::CoverageRequest;
use thiserror::Error;

/// What went wrong while producing the document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page content stream could not be encoded
    #[error("failed to encode page content: {0}")]
    Content(String),
    /// The document container could not be written
    #[error("failed to write document container: {0}")]
    Assembly(String),
}

/// The portable document produced from a form snapshot. Derived
/// deterministically from the snapshot at submission time; never cached
/// across attempts.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
}

/// Rendering engine seam, injected into the submission pipeline
#[cfg_attr(test, mockall::automock)]
pub trait RenderEngine: Send + Sync {
    /// Produce the document for a request snapshot that has already
    /// passed validation
    fn render(&self, request: &CoverageRequest) -> Result<RenderedDocument, RenderError>;
}

/// Default engine: fixed template, off-screen surface, one-page PDF
pub struct TemplateRenderer;

impl RenderEngine for TemplateRenderer {
    fn render(&self, request: &CoverageRequest) -> Result<RenderedDocument, RenderError> {
        let generated_on = chrono::Local::now().format("%Y-%m-%d").to_string();
        let surface = template::compose(request, &generated_on);
        let bytes = pdf::assemble(&surface)?;
        tracing::info!(size = bytes.len(), "rendered coverage request document");
        Ok(RenderedDocument { bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CoverageRequest {
        CoverageRequest {
            committee_name: "لجنة الأنشطة".to_string(),
            applicant_name: "أحمد".to_string(),
            contact_phone: "33000000".to_string(),
            event_name: "يوم تطوعي".to_string(),
            event_date: "2025-05-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "12:00".to_string(),
            event_location: "قاعة الجمعية".to_string(),
            coverage_types: vec!["تصوير فوتوغرافي".to_string(), "بث مباشر".to_string()],
            additional_notes: String::new(),
        }
    }

    #[test]
    fn test_render_produces_a_pdf() {
        let document = TemplateRenderer.render(&sample_request()).unwrap();
        assert!(document.bytes.starts_with(b"%PDF"));
        assert!(document.bytes.len() > 500);
    }

    #[test]
    fn test_render_accepts_empty_notes() {
        let request = CoverageRequest {
            additional_notes: String::new(),
            ..sample_request()
        };
        assert!(TemplateRenderer.render(&request).is_ok());
    }

    #[test]
    fn test_render_survives_oversized_notes() {
        // Overflow is clipped to the printable area, never an error
        let request = CoverageRequest {
            additional_notes: "تفاصيل كثيرة جدًا ".repeat(400),
            ..sample_request()
        };
        assert!(TemplateRenderer.render(&request).is_ok());
    }
}
