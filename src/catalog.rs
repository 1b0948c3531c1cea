//! Fixed option lists and organization identity strings
//!
//! Everything the form offers for selection lives here: committee names,
//! coverage types, and the default outbound recipients. The lists are data,
//! not behavior; the selection controls never enforce membership beyond
//! what they offer.

/// Organization name shown in the header and the rendered document
pub const ORG_NAME: &str = "جمعية المالكية الخيرية";

/// Requesting-side sub-unit that runs this desk
pub const COMMITTEE_TITLE: &str = "اللجنة الإعلامية";

/// Title of the rendered request document
pub const DOC_TITLE: &str = "طلب تغطية إعلامية";

/// Advisory notice shown above the form. The 2-3 day lead-time policy is
/// advisory text only and is deliberately not enforced by validation.
pub const ADVISORY_NOTICE: &str = "عزيزي رئيس اللجنة، لتسهيل التنسيق الإعلامي بين اللجان، \
يرجى تعبئة النموذج التالي عند وجود أي فعالية أو اجتماع بحاجة إلى تغطية إعلامية. \
يرجى تقديم الطلب قبل يومين إلى ثلاثة أيام كحد أقصى من موعد الحدث.";

/// Display value for an empty notes field
pub const NOTES_EMPTY: &str = "لا يوجد";

/// Committees that may file a coverage request
pub const COMMITTEE_NAMES: &[&str] = &[
    "اللجنة الاجتماعية",
    "لجنة الأنشطة",
    "اللجنة المالية",
    "اللجنة الثقافية",
    "لجنة العلاقات العامة",
    "لجنة المشاريع",
    "لجنة دعم الطالب",
    "لجنة تنمية المجتمع",
    "لجنة التحصيل",
    "لجنة أخرى (يرجى التحديد في الملاحظات)",
];

/// Coverage tags offered by the checkbox group
pub const COVERAGE_TYPES: &[&str] = &[
    "تصوير فوتوغرافي",
    "تصوير فيديو",
    "منشور إنستغرام",
    "بث مباشر",
    "تقرير إخباري",
];

/// Default WhatsApp recipients (digits-only international numbers).
/// Overridable from the config file.
pub const WHATSAPP_RECIPIENTS: &[&str] = &["97333551841"];

/// Default mailbox the email channel delivers to
pub const MAIL_RECIPIENT: &str = "media@malkiyacharity.org";
