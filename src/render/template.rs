//! Off-screen template surface
//!
//! Composes the fixed request template into positioned text runs and
//! horizontal rules on an A4-sized surface at 2x scale. Geometry is in
//! CSS pixels with the origin at the top-left; the container stage maps
//! it onto page points.

use crate::catalog;
use crate::state::CoverageRequest;

/// Page geometry, A4 portrait
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
/// Margin kept around the embedded surface on the page
pub const PAGE_MARGIN_MM: f32 = 10.0;

/// CSS reference pixel density
const PX_PER_MM: f32 = 96.0 / 25.4;
/// The surface is materialized at 2x for legibility
pub const RASTER_SCALE: f32 = 2.0;

/// Inner padding of the surface, px at 2x
const PADDING: f32 = 64.0;

/// Visual role of a text run; the container stage picks font and tone
/// from this
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    Title,
    Subtitle,
    Heading,
    Label,
    Value,
    Body,
    Footer,
}

/// One positioned piece of text; `y` is the baseline measured from the
/// surface top
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub style: RunStyle,
    pub text: String,
}

/// Horizontal separator line
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub y: f32,
    pub x0: f32,
    pub x1: f32,
}

/// The composed off-screen surface
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub runs: Vec<TextRun>,
    pub rules: Vec<Rule>,
}

struct Composer {
    width: f32,
    cursor: f32,
    runs: Vec<TextRun>,
    rules: Vec<Rule>,
}

impl Composer {
    fn new() -> Self {
        Self {
            width: PAGE_WIDTH_MM * PX_PER_MM * RASTER_SCALE,
            cursor: PADDING,
            runs: Vec::new(),
            rules: Vec::new(),
        }
    }

    fn content_width(&self) -> f32 {
        self.width - 2.0 * PADDING
    }

    /// Emit one line of text at the current cursor and advance it
    fn line(&mut self, style: RunStyle, size: f32, text: &str) {
        self.cursor += size;
        self.runs.push(TextRun {
            x: PADDING,
            y: self.cursor,
            size,
            style,
            text: text.to_string(),
        });
        self.cursor += size * 0.5;
    }

    /// Emit a label/value pair stacked in one grid cell at column `col`
    /// of a two-column row anchored at baseline `top`
    fn cell(&mut self, col: usize, top: f32, label: &str, value: &str) {
        let x = PADDING + col as f32 * (self.content_width() / 2.0);
        self.runs.push(TextRun {
            x,
            y: top + LABEL_SIZE,
            size: LABEL_SIZE,
            style: RunStyle::Label,
            text: format!("{label}:"),
        });
        self.runs.push(TextRun {
            x,
            y: top + LABEL_SIZE + VALUE_SIZE * 1.3,
            size: VALUE_SIZE,
            style: RunStyle::Value,
            text: value.to_string(),
        });
    }

    /// Lay out label/value entries two per row
    fn grid(&mut self, entries: &[(&str, &str)]) {
        for row in entries.chunks(2) {
            let top = self.cursor;
            for (col, (label, value)) in row.iter().enumerate() {
                self.cell(col, top, label, value);
            }
            self.cursor = top + LABEL_SIZE + VALUE_SIZE * 1.3 + ROW_GAP;
        }
    }

    fn rule(&mut self) {
        self.cursor += RULE_GAP;
        self.rules.push(Rule {
            y: self.cursor,
            x0: PADDING,
            x1: self.width - PADDING,
        });
        self.cursor += RULE_GAP;
    }

    fn space(&mut self, px: f32) {
        self.cursor += px;
    }

    fn finish(self) -> Surface {
        let min_height = PAGE_HEIGHT_MM * PX_PER_MM * RASTER_SCALE;
        Surface {
            width: self.width,
            height: (self.cursor + PADDING).max(min_height),
            runs: self.runs,
            rules: self.rules,
        }
    }
}

const TITLE_SIZE: f32 = 48.0;
const SUBTITLE_SIZE: f32 = 26.0;
const HEADING_SIZE: f32 = 36.0;
const LABEL_SIZE: f32 = 24.0;
const VALUE_SIZE: f32 = 30.0;
const BODY_SIZE: f32 = 26.0;
const FOOTER_SIZE: f32 = 20.0;
const ROW_GAP: f32 = 24.0;
const RULE_GAP: f32 = 28.0;

/// Compose the fixed template for a request snapshot
pub fn compose(request: &CoverageRequest, generated_on: &str) -> Surface {
    let mut c = Composer::new();

    // Header: document title and organization identity
    c.line(RunStyle::Title, TITLE_SIZE, catalog::DOC_TITLE);
    c.line(
        RunStyle::Subtitle,
        SUBTITLE_SIZE,
        &format!("{} - {}", catalog::ORG_NAME, catalog::COMMITTEE_TITLE),
    );
    c.rule();

    // Applicant / committee block
    c.grid(&[
        ("اسم اللجنة", request.committee_name.as_str()),
        ("مقدم الطلب", request.applicant_name.as_str()),
    ]);
    c.grid(&[("رقم التواصل", request.contact_phone.as_str())]);
    c.rule();

    // Event details
    c.line(RunStyle::Heading, HEADING_SIZE, "تفاصيل الفعالية");
    c.space(8.0);
    c.grid(&[
        ("اسم الفعالية", request.event_name.as_str()),
        ("تاريخ الفعالية", request.event_date.as_str()),
        ("وقت البداية", request.start_time.as_str()),
        ("وقت الانتهاء", request.end_time.as_str()),
    ]);
    c.grid(&[("مكان الفعالية", request.event_location.as_str())]);
    c.rule();

    // Requested coverage types
    c.line(RunStyle::Heading, HEADING_SIZE, "نوع التغطية المطلوبة");
    c.space(8.0);
    for tag in &request.coverage_types {
        c.line(RunStyle::Body, BODY_SIZE, &format!("• {tag}"));
    }
    c.rule();

    // Notes
    c.line(RunStyle::Heading, HEADING_SIZE, "معلومات و اضافات اضافية");
    c.space(8.0);
    let max_chars = (c.content_width() / (BODY_SIZE * 0.55)) as usize;
    for line in wrap_text(request.notes_or_placeholder(), max_chars) {
        c.line(RunStyle::Body, BODY_SIZE, &line);
    }

    // Footer with generation date
    c.space(56.0);
    c.line(
        RunStyle::Footer,
        FOOTER_SIZE,
        "تم إنشاء هذا الطلب بواسطة نموذج اللجنة الإعلامية الإلكتروني.",
    );
    c.line(
        RunStyle::Footer,
        FOOTER_SIZE,
        &format!("تاريخ الإنشاء: {generated_on}"),
    );

    c.finish()
}

/// Word-wrap text to a maximum character count per line
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current.chars().count();
            if current_len + word.chars().count() + 1 > max_chars && !current.is_empty() {
                lines.push(current);
                current = String::new();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
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

    fn texts(surface: &Surface) -> Vec<&str> {
        surface.runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_compose_carries_all_field_values() {
        let surface = compose(&sample_request(), "2025-04-28");
        let all = texts(&surface).join("\n");
        assert!(all.contains("يوم تطوعي"));
        assert!(all.contains("لجنة الأنشطة"));
        assert!(all.contains("أحمد"));
        assert!(all.contains("33000000"));
        assert!(all.contains("قاعة الجمعية"));
        assert!(all.contains("• تصوير فوتوغرافي"));
        assert!(all.contains("• بث مباشر"));
        assert!(all.contains("تاريخ الإنشاء: 2025-04-28"));
    }

    #[test]
    fn test_blank_notes_render_placeholder() {
        let surface = compose(&sample_request(), "2025-04-28");
        assert!(texts(&surface).contains(&"لا يوجد"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let request = sample_request();
        let a = compose(&request, "2025-04-28");
        let b = compose(&request, "2025-04-28");
        assert_eq!(a, b);
    }

    #[test]
    fn test_surface_is_at_least_a_full_page() {
        let surface = compose(&sample_request(), "2025-04-28");
        assert!((surface.width - PAGE_WIDTH_MM * PX_PER_MM * RASTER_SCALE).abs() < 0.01);
        assert!(surface.height >= PAGE_HEIGHT_MM * PX_PER_MM * RASTER_SCALE);
    }

    #[test]
    fn test_runs_stay_inside_horizontal_padding() {
        let surface = compose(&sample_request(), "2025-04-28");
        for run in &surface.runs {
            assert!(run.x >= PADDING - 0.01);
            assert!(run.x < surface.width - PADDING + 0.01);
        }
    }

    #[test]
    fn test_long_notes_wrap_into_multiple_runs() {
        let request = CoverageRequest {
            additional_notes: "كلمة ".repeat(120).trim().to_string(),
            ..sample_request()
        };
        let body_lines = compose(&request, "2025-04-28")
            .runs
            .iter()
            .filter(|r| r.style == RunStyle::Body && r.text.contains("كلمة"))
            .count();
        assert!(body_lines > 1);
    }

    #[test]
    fn test_wrap_text_respects_limit() {
        let wrapped = wrap_text("واحد اثنان ثلاثة أربعة خمسة", 12);
        assert!(wrapped.len() > 1);
        for line in wrapped {
            assert!(line.chars().count() <= 12);
        }
    }

    #[test]
    fn test_wrap_text_keeps_paragraph_breaks() {
        let wrapped = wrap_text("سطر\n\nآخر", 40);
        assert_eq!(wrapped, vec!["سطر".to_string(), String::new(), "آخر".to_string()]);
    }
}
