use chrono::NaiveDate;

use crate::models::{AppointmentType, BookingDraft, Field, ValidationState};

/// Validate every field of the draft against `today`. All rules run; the
/// result is the union of failing fields. Email and message are free-form
/// and never checked.
pub fn validate_draft(draft: &BookingDraft, today: NaiveDate) -> ValidationState {
    let mut errors = ValidationState::new();

    if draft.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full name is required");
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    } else if !is_plausible_phone(phone) {
        errors.insert(Field::Phone, "Please enter a valid phone number");
    }

    if AppointmentType::parse(&draft.appointment_type).is_none() {
        errors.insert(Field::AppointmentType, "Please select an appointment type");
    }

    if draft.date.is_empty() {
        errors.insert(Field::Date, "Please select a date");
    } else if let Ok(date) = NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d") {
        // A non-empty value that is not a date is left alone; only a
        // parseable day strictly before today is rejected.
        if date < today {
            errors.insert(Field::Date, "Please select a future date");
        }
    }

    if draft.time.is_empty() {
        errors.insert(Field::Time, "Please select a time slot");
    }

    errors
}

// Optional leading '+', then one or more of digit, whitespace, hyphen,
// parenthesis. Intentionally permissive.
fn is_plausible_phone(s: &str) -> bool {
    let rest = s.strip_prefix('+').unwrap_or(s);
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn valid_draft() -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.full_name = "Jane Doe".to_string();
        draft.phone = "+1 555-123-4567".to_string();
        draft.appointment_type = "Site Visit".to_string();
        draft.date = "2025-06-17".to_string();
        draft.time = "10:00 AM".to_string();
        draft
    }

    #[test]
    fn test_valid_draft_passes() {
        let errors = validate_draft(&valid_draft(), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_draft_flags_required_fields() {
        let errors = validate_draft(&BookingDraft::default(), today());
        assert_eq!(errors.message(Field::FullName), Some("Full name is required"));
        assert_eq!(errors.message(Field::Phone), Some("Phone number is required"));
        assert_eq!(
            errors.message(Field::AppointmentType),
            Some("Please select an appointment type")
        );
        assert_eq!(errors.message(Field::Date), Some("Please select a date"));
        assert_eq!(errors.message(Field::Time), Some("Please select a time slot"));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let mut draft = valid_draft();
        draft.full_name = "   ".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.message(Field::FullName), Some("Full name is required"));
    }

    #[test]
    fn test_phone_with_letters_rejected() {
        let mut draft = valid_draft();
        draft.phone = "555-CALL-NOW".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.message(Field::Phone),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_phone_symbols_only_accepted() {
        // The pattern is deliberately loose: digits are not required.
        let mut draft = valid_draft();
        draft.phone = "+(--) ".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.message(Field::Phone), None);
    }

    #[test]
    fn test_phone_bare_plus_rejected() {
        let mut draft = valid_draft();
        draft.phone = "+".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.message(Field::Phone),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_phone_padding_trimmed_before_check() {
        let mut draft = valid_draft();
        draft.phone = "  +1 (555) 123-4567  ".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.message(Field::Phone), None);
    }

    #[test]
    fn test_unknown_appointment_type_rejected() {
        let mut draft = valid_draft();
        draft.appointment_type = "Open House".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.message(Field::AppointmentType),
            Some("Please select an appointment type")
        );
    }

    #[test]
    fn test_yesterday_rejected() {
        let mut draft = valid_draft();
        draft.date = "2025-06-15".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.message(Field::Date),
            Some("Please select a future date")
        );
    }

    #[test]
    fn test_today_accepted() {
        let mut draft = valid_draft();
        draft.date = "2025-06-16".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.message(Field::Date), None);
    }

    #[test]
    fn test_unparseable_date_not_flagged() {
        let mut draft = valid_draft();
        draft.date = "next Tuesday".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.message(Field::Date), None);
    }

    #[test]
    fn test_time_outside_slot_list_accepted() {
        // Only emptiness is checked; slot membership is the view's concern.
        let mut draft = valid_draft();
        draft.time = "07:45 PM".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(errors.message(Field::Time), None);
    }

    #[test]
    fn test_email_and_message_never_validated() {
        let mut draft = valid_draft();
        draft.email = "not an email".to_string();
        draft.message = "!!!".to_string();
        let errors = validate_draft(&draft, today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_all_rules_run_not_short_circuited() {
        let mut draft = BookingDraft::default();
        draft.phone = "letters".to_string();
        draft.date = "2025-06-01".to_string();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.message(Field::Phone),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            errors.message(Field::Date),
            Some("Please select a future date")
        );
        assert_eq!(errors.message(Field::FullName), Some("Full name is required"));
        assert_eq!(errors.len(), 5);
    }
}
