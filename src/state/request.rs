//! Coverage request record and field identifiers

use crate::catalog;
use serde::{Deserialize, Serialize};

/// Identifies one form field, for validation errors and focus handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CommitteeName,
    ApplicantName,
    ContactPhone,
    EventName,
    EventDate,
    StartTime,
    EndTime,
    EventLocation,
    CoverageTypes,
    AdditionalNotes,
}

impl Field {
    /// Fields that must be non-empty at submission time.
    /// AdditionalNotes is the only optional field.
    pub const REQUIRED: [Field; 9] = [
        Field::CommitteeName,
        Field::ApplicantName,
        Field::ContactPhone,
        Field::EventName,
        Field::EventDate,
        Field::StartTime,
        Field::EndTime,
        Field::EventLocation,
        Field::CoverageTypes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CommitteeName => "🏷 اسم اللجنة",
            Self::ApplicantName => "👤 مقدم الطلب",
            Self::ContactPhone => "☎ رقم الهاتف للتواصل",
            Self::EventName => "🎉 اسم الفعالية",
            Self::EventDate => "📅 تاريخ الفعالية",
            Self::StartTime => "🕒 وقت البداية",
            Self::EndTime => "🕔 وقت الانتهاء",
            Self::EventLocation => "📍 مكان الفعالية",
            Self::CoverageTypes => "📸 نوع التغطية المطلوبة",
            Self::AdditionalNotes => "💬 معلومات و اضافات اضافية",
        }
    }

    /// Hint shown inside an empty, inactive field
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::CommitteeName => "اختر اللجنة...",
            Self::ApplicantName => "الاسم الكامل",
            Self::ContactPhone => "يفضل رقم واتساب",
            Self::EventName => "مثال: فعالية يوم التطوع",
            Self::EventDate => "2025-05-01",
            Self::StartTime => "09:00",
            Self::EndTime => "12:00",
            Self::EventLocation => "مثال: قاعة الجمعية",
            Self::CoverageTypes => "",
            Self::AdditionalNotes => "أي تفاصيل أخرى تود إضافتها لفريق الإعلام...",
        }
    }
}

/// A snapshot of the form taken at the moment of submission.
/// The renderer and dispatcher only ever see this record, never the
/// live form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRequest {
    pub committee_name: String,
    pub applicant_name: String,
    pub contact_phone: String,
    pub event_name: String,
    pub event_date: String,
    pub start_time: String,
    pub end_time: String,
    pub event_location: String,
    /// Insertion order preserved, no duplicates
    pub coverage_types: Vec<String>,
    pub additional_notes: String,
}

impl CoverageRequest {
    /// Notes for display: the fixed placeholder when blank
    pub fn notes_or_placeholder(&self) -> &str {
        if self.additional_notes.trim().is_empty() {
            catalog::NOTES_EMPTY
        } else {
            &self.additional_notes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_are_nine() {
        assert_eq!(Field::REQUIRED.len(), 9);
        assert!(!Field::REQUIRED.contains(&Field::AdditionalNotes));
    }

    #[test]
    fn test_notes_placeholder_when_blank() {
        let request = CoverageRequest::default();
        assert_eq!(request.notes_or_placeholder(), "لا يوجد");

        let request = CoverageRequest {
            additional_notes: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(request.notes_or_placeholder(), "لا يوجد");
    }

    #[test]
    fn test_notes_kept_when_present() {
        let request = CoverageRequest {
            additional_notes: "تفاصيل".to_string(),
            ..Default::default()
        };
        assert_eq!(request.notes_or_placeholder(), "تفاصيل");
    }
}
