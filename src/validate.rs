//! Field validation
//!
//! Pure presence checks over the request snapshot. Recomputed in full on
//! every attempt; no cross-field rules. The 2-3 day lead-time policy in
//! the advisory notice is intentionally not enforced here.

use crate::state::{CoverageRequest, Field};
use std::collections::HashMap;

/// Field name → human-readable error message; empty map means valid
pub type ValidationErrors = HashMap<Field, String>;

/// Validate a request snapshot
pub fn validate(request: &CoverageRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let mut require = |field: Field, value: &str, message: &str| {
        if value.is_empty() {
            errors.insert(field, message.to_string());
        }
    };

    require(
        Field::CommitteeName,
        &request.committee_name,
        "اسم اللجنة مطلوب",
    );
    require(
        Field::ApplicantName,
        &request.applicant_name,
        "اسم مقدم الطلب مطلوب",
    );
    require(Field::ContactPhone, &request.contact_phone, "رقم الهاتف مطلوب");
    require(Field::EventName, &request.event_name, "اسم الفعالية مطلوب");
    require(Field::EventDate, &request.event_date, "تاريخ الفعالية مطلوب");
    require(Field::StartTime, &request.start_time, "وقت البداية مطلوب");
    require(Field::EndTime, &request.end_time, "وقت الانتهاء مطلوب");
    require(
        Field::EventLocation,
        &request.event_location,
        "مكان الفعالية مطلوب",
    );

    if request.coverage_types.is_empty() {
        errors.insert(
            Field::CoverageTypes,
            "اختر نوعًا واحدًا على الأقل من التغطية".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_request() -> CoverageRequest {
        CoverageRequest {
            committee_name: "لجنة الأنشطة".to_string(),
            applicant_name: "أحمد".to_string(),
            contact_phone: "33000000".to_string(),
            event_name: "يوم تطوعي".to_string(),
            event_date: "2025-05-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "12:00".to_string(),
            event_location: "قاعة الجمعية".to_string(),
            coverage_types: vec![
                "تصوير فوتوغرافي".to_string(),
                "بث مباشر".to_string(),
            ],
            additional_notes: String::new(),
        }
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        assert!(validate(&valid_request()).is_empty());
    }

    #[test]
    fn test_empty_request_has_exactly_nine_errors() {
        let errors = validate(&CoverageRequest::default());
        assert_eq!(errors.len(), 9);
        for field in Field::REQUIRED {
            assert!(errors.contains_key(&field), "missing error for {field:?}");
        }
        assert!(!errors.contains_key(&Field::AdditionalNotes));
    }

    #[test]
    fn test_blank_notes_are_not_an_error() {
        let request = valid_request();
        assert!(request.additional_notes.is_empty());
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn test_empty_coverage_set_is_an_error() {
        let request = CoverageRequest {
            coverage_types: Vec::new(),
            ..valid_request()
        };
        let errors = validate(&request);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::CoverageTypes).unwrap(),
            "اختر نوعًا واحدًا على الأقل من التغطية"
        );
    }

    #[test]
    fn test_single_missing_field_reported_alone() {
        let request = CoverageRequest {
            contact_phone: String::new(),
            ..valid_request()
        };
        let errors = validate(&request);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::ContactPhone).unwrap(), "رقم الهاتف مطلوب");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let request = CoverageRequest {
            event_name: String::new(),
            ..valid_request()
        };
        let first = validate(&request);
        let second = validate(&request);
        assert_eq!(first, second);
    }

    #[test]
    fn test_past_event_date_is_still_accepted() {
        // The lead-time policy is advisory text, not a validation rule
        let request = CoverageRequest {
            event_date: "2020-01-01".to_string(),
            ..valid_request()
        };
        assert!(validate(&request).is_empty());
    }
}
