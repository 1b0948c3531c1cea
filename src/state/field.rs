//! Form field value objects

use super::request::Field;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Selection from a fixed option list; `None` until the user picks one
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

/// Represents a single form field with its identity and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(field: Field) -> Self {
        Self {
            field,
            value: FieldValue::Text(String::new()),
            is_multiline: false,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(field: Field) -> Self {
        Self {
            field,
            value: FieldValue::Text(String::new()),
            is_multiline: true,
        }
    }

    /// Create a new choice field over a fixed option list
    pub fn choice(field: Field, options: &'static [&'static str]) -> Self {
        Self {
            field,
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    /// Get the text value (the selected option label for choice fields,
    /// empty string while nothing is selected)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => {
                selected.and_then(|i| options.get(i).copied()).unwrap_or("")
            }
        }
    }

    /// Push a character to the field value (no-op for choice fields)
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Advance a choice field to the next option (wraps around)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match selected {
                Some(i) => (*i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move a choice field to the previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match selected {
                Some(0) | None => options.len() - 1,
                Some(i) => *i - 1,
            });
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.as_text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["أ", "ب", "ج"];

    #[test]
    fn test_text_field_push_pop() {
        let mut field = FormField::text(Field::ApplicantName);
        field.push_char('أ');
        field.push_char('ح');
        assert_eq!(field.as_text(), "أح");
        field.pop_char();
        assert_eq!(field.as_text(), "أ");
    }

    #[test]
    fn test_choice_field_starts_unselected() {
        let field = FormField::choice(Field::CommitteeName, OPTIONS);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_choice_cycles_forward_and_wraps() {
        let mut field = FormField::choice(Field::CommitteeName, OPTIONS);
        field.next_option();
        assert_eq!(field.as_text(), "أ");
        field.next_option();
        field.next_option();
        assert_eq!(field.as_text(), "ج");
        field.next_option();
        assert_eq!(field.as_text(), "أ");
    }

    #[test]
    fn test_choice_cycles_backward_from_unselected() {
        let mut field = FormField::choice(Field::CommitteeName, OPTIONS);
        field.prev_option();
        assert_eq!(field.as_text(), "ج");
        field.prev_option();
        assert_eq!(field.as_text(), "ب");
    }

    #[test]
    fn test_choice_ignores_char_input() {
        let mut field = FormField::choice(Field::CommitteeName, OPTIONS);
        field.push_char('x');
        assert_eq!(field.as_text(), "");
    }

}
