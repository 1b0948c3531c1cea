//! Form state management
//!
//! `RequestForm` owns the live values of all input fields plus the
//! coverage-tag selection. It is only ever mutated by user input events;
//! submission works on an immutable [`CoverageRequest`] snapshot.

use super::field::FormField;
use super::request::{CoverageRequest, Field};
use crate::catalog;

/// Focus index of the coverage checkbox group
pub const FOCUS_COVERAGE: usize = 8;
/// Focus index of the notes field
pub const FOCUS_NOTES: usize = 9;
/// Focus index of the submit button row
pub const FOCUS_SUBMIT: usize = 10;
/// Total number of focusable rows
pub const FOCUS_COUNT: usize = 11;

/// The coverage request form
#[derive(Debug, Clone)]
pub struct RequestForm {
    pub committee: FormField,
    pub applicant: FormField,
    pub phone: FormField,
    pub event_name: FormField,
    pub event_date: FormField,
    pub start_time: FormField,
    pub end_time: FormField,
    pub location: FormField,
    pub notes: FormField,
    /// Selected coverage tags, insertion order preserved, no duplicates
    pub coverage_types: Vec<String>,
    /// Highlighted tag while the coverage group has focus
    pub coverage_cursor: usize,
    /// Which row currently has focus (0..FOCUS_COUNT)
    pub active_focus: usize,
}

impl RequestForm {
    pub fn new() -> Self {
        Self {
            committee: FormField::choice(Field::CommitteeName, catalog::COMMITTEE_NAMES),
            applicant: FormField::text(Field::ApplicantName),
            phone: FormField::text(Field::ContactPhone),
            event_name: FormField::text(Field::EventName),
            event_date: FormField::text(Field::EventDate),
            start_time: FormField::text(Field::StartTime),
            end_time: FormField::text(Field::EndTime),
            location: FormField::text(Field::EventLocation),
            notes: FormField::multiline(Field::AdditionalNotes),
            coverage_types: Vec::new(),
            coverage_cursor: 0,
            active_focus: 0,
        }
    }

    /// Reset every field to the fixed empty value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn next_focus(&mut self) {
        self.active_focus = (self.active_focus + 1) % FOCUS_COUNT;
    }

    pub fn prev_focus(&mut self) {
        if self.active_focus == 0 {
            self.active_focus = FOCUS_COUNT - 1;
        } else {
            self.active_focus -= 1;
        }
    }

    /// The scalar field at a focus index, if that index holds one
    /// (the coverage group and the submit row have no FormField)
    pub fn field_at(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.committee),
            1 => Some(&self.applicant),
            2 => Some(&self.phone),
            3 => Some(&self.event_name),
            4 => Some(&self.event_date),
            5 => Some(&self.start_time),
            6 => Some(&self.end_time),
            7 => Some(&self.location),
            FOCUS_NOTES => Some(&self.notes),
            _ => None,
        }
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_focus {
            0 => Some(&mut self.committee),
            1 => Some(&mut self.applicant),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.event_name),
            4 => Some(&mut self.event_date),
            5 => Some(&mut self.start_time),
            6 => Some(&mut self.end_time),
            7 => Some(&mut self.location),
            FOCUS_NOTES => Some(&mut self.notes),
            _ => None,
        }
    }

    /// Toggle a coverage tag: absent → appended, present → removed.
    /// Toggling twice returns the set to its prior state.
    pub fn toggle_coverage(&mut self, tag: &str) {
        if let Some(pos) = self.coverage_types.iter().position(|t| t == tag) {
            self.coverage_types.remove(pos);
        } else {
            self.coverage_types.push(tag.to_string());
        }
    }

    /// Toggle the tag under the coverage cursor
    pub fn toggle_coverage_at_cursor(&mut self) {
        if let Some(tag) = catalog::COVERAGE_TYPES.get(self.coverage_cursor) {
            self.toggle_coverage(tag);
        }
    }

    pub fn coverage_cursor_next(&mut self) {
        self.coverage_cursor = (self.coverage_cursor + 1) % catalog::COVERAGE_TYPES.len();
    }

    pub fn coverage_cursor_prev(&mut self) {
        if self.coverage_cursor == 0 {
            self.coverage_cursor = catalog::COVERAGE_TYPES.len() - 1;
        } else {
            self.coverage_cursor -= 1;
        }
    }

    pub fn coverage_contains(&self, tag: &str) -> bool {
        self.coverage_types.iter().any(|t| t == tag)
    }

    /// Take the immutable snapshot submission works on
    pub fn snapshot(&self) -> CoverageRequest {
        CoverageRequest {
            committee_name: self.committee.as_text().to_string(),
            applicant_name: self.applicant.as_text().to_string(),
            contact_phone: self.phone.as_text().to_string(),
            event_name: self.event_name.as_text().to_string(),
            event_date: self.event_date.as_text().to_string(),
            start_time: self.start_time.as_text().to_string(),
            end_time: self.end_time.as_text().to_string(),
            event_location: self.location.as_text().to_string(),
            coverage_types: self.coverage_types.clone(),
            additional_notes: self.notes.as_text().to_string(),
        }
    }
}

impl Default for RequestForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut RequestForm, focus: usize, text: &str) {
        form.active_focus = focus;
        for c in text.chars() {
            if let Some(field) = form.active_field_mut() {
                field.push_char(c);
            }
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = RequestForm::new();
        let snapshot = form.snapshot();
        assert_eq!(snapshot, CoverageRequest::default());
    }

    #[test]
    fn test_focus_cycles_forward() {
        let mut form = RequestForm::new();
        for _ in 0..FOCUS_COUNT {
            form.next_focus();
        }
        assert_eq!(form.active_focus, 0);
    }

    #[test]
    fn test_focus_cycles_backward() {
        let mut form = RequestForm::new();
        form.prev_focus();
        assert_eq!(form.active_focus, FOCUS_SUBMIT);
    }

    #[test]
    fn test_coverage_and_submit_rows_have_no_field() {
        let mut form = RequestForm::new();
        form.active_focus = FOCUS_COVERAGE;
        assert!(form.active_field_mut().is_none());
        form.active_focus = FOCUS_SUBMIT;
        assert!(form.active_field_mut().is_none());
    }

    #[test]
    fn test_toggle_coverage_preserves_insertion_order() {
        let mut form = RequestForm::new();
        form.toggle_coverage("بث مباشر");
        form.toggle_coverage("تصوير فوتوغرافي");
        assert_eq!(
            form.coverage_types,
            vec!["بث مباشر".to_string(), "تصوير فوتوغرافي".to_string()]
        );
    }

    #[test]
    fn test_toggle_coverage_twice_restores_prior_state() {
        let mut form = RequestForm::new();
        form.toggle_coverage("تصوير فيديو");
        let before = form.coverage_types.clone();

        form.toggle_coverage("بث مباشر");
        form.toggle_coverage("بث مباشر");
        assert_eq!(form.coverage_types, before);
    }

    #[test]
    fn test_toggle_coverage_never_duplicates() {
        let mut form = RequestForm::new();
        form.toggle_coverage("بث مباشر");
        form.toggle_coverage("بث مباشر");
        form.toggle_coverage("بث مباشر");
        assert_eq!(form.coverage_types, vec!["بث مباشر".to_string()]);
    }

    #[test]
    fn test_coverage_cursor_wraps() {
        let mut form = RequestForm::new();
        form.coverage_cursor_prev();
        assert_eq!(form.coverage_cursor, catalog::COVERAGE_TYPES.len() - 1);
        form.coverage_cursor_next();
        assert_eq!(form.coverage_cursor, 0);
    }

    #[test]
    fn test_snapshot_captures_typed_values() {
        let mut form = RequestForm::new();
        form.committee.next_option();
        type_into(&mut form, 1, "أحمد");
        type_into(&mut form, 2, "33000000");
        form.toggle_coverage("بث مباشر");

        let snapshot = form.snapshot();
        assert_eq!(snapshot.committee_name, catalog::COMMITTEE_NAMES[0]);
        assert_eq!(snapshot.applicant_name, "أحمد");
        assert_eq!(snapshot.contact_phone, "33000000");
        assert_eq!(snapshot.coverage_types, vec!["بث مباشر".to_string()]);
    }

    #[test]
    fn test_reset_returns_to_fixed_empty_value() {
        let mut form = RequestForm::new();
        type_into(&mut form, 3, "يوم تطوعي");
        form.toggle_coverage("بث مباشر");
        form.reset();
        assert_eq!(form.snapshot(), CoverageRequest::default());
        assert_eq!(form.active_focus, 0);
    }
}
