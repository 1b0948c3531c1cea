//! Messaging deep-link channel
//!
//! Formats the plain-text request summary, percent-encodes it, and opens
//! one `wa.me` deep link per configured recipient. The deep-link surface
//! cannot carry the PDF; the document is saved locally beforehand and the
//! success notice tells the user to attach it by hand.

use super::{LinkOpener, OutboundError};
use crate::state::CoverageRequest;
use url::Url;

/// Deep-link base of the messaging service
pub const MESSAGING_BASE: &str = "https://wa.me";

/// Format the plain-text summary carried in the deep link
pub fn summary_message(request: &CoverageRequest) -> String {
    format!(
        "طلب تغطية إعلامية جديد 📝\n\
         ----------------------------------\n\
         *اسم اللجنة:* {committee}\n\
         *مقدم الطلب:* {applicant}\n\
         *رقم التواصل:* {phone}\n\
         ----------------------------------\n\
         *اسم الفعالية:* {event}\n\
         *التاريخ:* {date}\n\
         *وقت الفعالية:* {start} - {end}\n\
         *مكان الفعالية:* {location}\n\
         *نوع التغطية:* {coverage}\n\
         ----------------------------------\n\
         *ملاحظات:* {notes}\n\
         *ملاحظة:* تفاصيل الطلب الكاملة موجودة في ملف PDF المرفق.\n",
        committee = request.committee_name,
        applicant = request.applicant_name,
        phone = request.contact_phone,
        event = request.event_name,
        date = request.event_date,
        start = request.start_time,
        end = request.end_time,
        location = request.event_location,
        coverage = request.coverage_types.join("، "),
        notes = request.notes_or_placeholder(),
    )
}

/// Percent-encode the message text for the `text` query parameter.
/// `byte_serialize` emits '+' for spaces; the deep-link surface expects %20.
fn percent_encode(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Build the deep link for one recipient (digits-only international number)
pub fn deep_link(recipient: &str, message: &str) -> Result<Url, OutboundError> {
    let raw = format!("{MESSAGING_BASE}/{recipient}?text={}", percent_encode(message));
    Url::parse(&raw).map_err(|e| OutboundError::Dispatch(format!("invalid deep link: {e}")))
}

/// Open one deep link per recipient
pub fn dispatch(
    opener: &dyn LinkOpener,
    recipients: &[String],
    message: &str,
) -> Result<(), OutboundError> {
    if recipients.is_empty() {
        return Err(OutboundError::Dispatch(
            "no messaging recipients configured".into(),
        ));
    }

    for recipient in recipients {
        let link = deep_link(recipient, message)?;
        opener.open(link.as_str())?;
        tracing::info!(recipient, "messaging deep link opened");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::MockLinkOpener;
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
    fn test_summary_contains_literal_field_values() {
        let message = summary_message(&sample_request());
        assert!(message.contains("لجنة الأنشطة"));
        assert!(message.contains("أحمد"));
        assert!(message.contains("33000000"));
        assert!(message.contains("يوم تطوعي"));
        assert!(message.contains("2025-05-01"));
        assert!(message.contains("09:00 - 12:00"));
        assert!(message.contains("قاعة الجمعية"));
        assert!(message.contains("تصوير فوتوغرافي، بث مباشر"));
        assert!(message.contains("لا يوجد"));
    }

    #[test]
    fn test_deep_link_shape() {
        let link = deep_link("97333551841", "مرحبا hello").unwrap();
        assert_eq!(link.domain(), Some("wa.me"));
        assert_eq!(link.path(), "/97333551841");
        let query = link.query().unwrap();
        assert!(query.starts_with("text="));
        assert!(!query.contains('+'));
        assert!(query.contains("%20"));
    }

    #[test]
    fn test_percent_encoding_round_trips() {
        let message = summary_message(&sample_request());
        let link = deep_link("97333551841", &message).unwrap();
        let (_, decoded) = link
            .query_pairs()
            .find(|(k, _)| k == "text")
            .expect("text parameter present");
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_dispatch_opens_one_link_per_recipient() {
        let mut opener = MockLinkOpener::new();
        opener
            .expect_open()
            .withf(|url| url.starts_with("https://wa.me/"))
            .times(2)
            .returning(|_| Ok(()));

        let recipients = vec!["97333551841".to_string(), "97333551842".to_string()];
        dispatch(&opener, &recipients, "رسالة").unwrap();
    }

    #[test]
    fn test_dispatch_with_no_recipients_fails() {
        let opener = MockLinkOpener::new();
        let result = dispatch(&opener, &[], "رسالة");
        assert!(matches!(result, Err(OutboundError::Dispatch(_))));
    }

    #[test]
    fn test_blocked_opener_is_surfaced() {
        let mut opener = MockLinkOpener::new();
        opener
            .expect_open()
            .returning(|_| Err(OutboundError::Dispatch("spawn failed".into())));

        let recipients = vec!["97333551841".to_string()];
        let result = dispatch(&opener, &recipients, "رسالة");
        assert!(matches!(result, Err(OutboundError::Dispatch(_))));
    }
}
