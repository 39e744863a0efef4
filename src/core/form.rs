//! Contact form view-model
//!
//! Holds field values and their rendered errors. Each field carries at most
//! one error at a time; every validation pass clears it before checking.

use super::validation::{FieldError, FieldKind, check_required};

/// A single input or textarea in the contact form
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<FieldError>,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
            value: String::new(),
            error: None,
        }
    }

    /// Mark field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Clear any previous error and apply the required rule.
    ///
    /// Safe to call repeatedly; the field never ends up with more than one error.
    pub fn validate(&mut self) -> bool {
        self.error = None;
        match check_required(&self.value, self.required) {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    /// Apply the kind-specific format check to a non-empty value.
    ///
    /// Fields already showing an error keep it, so a blank required email only
    /// reports that it is required. Email is checked trimmed, as browsers
    /// strip it; a phone made only of spaces still counts as entered.
    pub fn validate_format(&mut self) -> bool {
        if self.error.is_some() {
            return false;
        }
        let value = match self.kind {
            FieldKind::Tel => self.value.as_str(),
            _ => self.value.trim(),
        };
        if value.is_empty() {
            return true;
        }
        match self.kind.check_format(value) {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Error text as rendered next to the field
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

/// The contact form: an ordered set of fields
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: Vec<FormField>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::contact()
    }
}

impl ContactForm {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// The fields rendered on the contact section of the page
    pub fn contact() -> Self {
        Self::new(vec![
            FormField::new("name", "Full Name", FieldKind::Text)
                .required()
                .placeholder("Jane Doe"),
            FormField::new("email", "Email Address", FieldKind::Email)
                .required()
                .placeholder("jane@example.com"),
            FormField::new("phone", "Phone Number", FieldKind::Tel)
                .placeholder("(555) 123-4567"),
            FormField::new("message", "How can we help?", FieldKind::TextArea)
                .required()
                .placeholder("Tell us a little about what you need"),
        ])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Update a field's value. Returns false for unknown names.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Typing into a field removes its error until it is validated again
    pub fn on_input(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.into();
            field.clear_error();
        }
    }

    /// Validate one field on blur. Only required fields are checked.
    pub fn validate_field(&mut self, name: &str) -> bool {
        match self.field_mut(name) {
            Some(field) if field.required => field.validate(),
            Some(_) => true,
            None => false,
        }
    }

    /// Validate every field so all errors render together.
    ///
    /// Required fields get the required rule; email and phone fields with a
    /// value get their format check.
    pub fn validate(&mut self) -> bool {
        let mut is_valid = true;

        for field in self.fields.iter_mut() {
            if field.required {
                is_valid &= field.validate();
            } else {
                field.clear_error();
            }
        }

        for field in self
            .fields
            .iter_mut()
            .filter(|f| matches!(f.kind, FieldKind::Email | FieldKind::Tel))
        {
            is_valid &= field.validate_format();
        }

        is_valid
    }

    /// Clear every value and error
    pub fn reset(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.clear();
            field.error = None;
        }
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.has_error()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::contact();
        form.set_value("name", "Jane Doe");
        form.set_value("email", "jane@example.com");
        form.set_value("phone", "123-456-7890");
        form.set_value("message", "Need help moving");
        form
    }

    #[test]
    fn test_required_field_empty_renders_one_error() {
        let mut field = FormField::new("name", "Name", FieldKind::Text).required();
        field.value = "   ".to_string();

        assert!(!field.validate());
        assert_eq!(field.error, Some(FieldError::Required));
        assert_eq!(field.error_message().as_deref(), Some("This field is required"));
    }

    #[test]
    fn test_required_field_with_value_passes() {
        let mut field = FormField::new("name", "Name", FieldKind::Text).required();
        field.value = " Jane ".to_string();

        assert!(field.validate());
        assert!(field.error.is_none());
    }

    #[test]
    fn test_validate_twice_is_idempotent() {
        let mut form = ContactForm::contact();

        assert!(!form.validate_field("name"));
        assert!(!form.validate_field("name"));
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn test_optional_field_never_fails_required_rule() {
        let mut form = ContactForm::contact();
        assert!(form.validate_field("phone"));
        assert!(!form.field("phone").unwrap().has_error());
    }

    #[test]
    fn test_unknown_field() {
        let mut form = ContactForm::contact();
        assert!(!form.validate_field("nope"));
        assert!(!form.set_value("nope", "x"));
    }

    #[test]
    fn test_filled_form_is_valid() {
        let mut form = filled_form();
        assert!(form.validate());
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn test_all_errors_render_together() {
        let mut form = ContactForm::contact();

        assert!(!form.validate());
        assert_eq!(form.error_count(), 3);
        assert!(!form.field("phone").unwrap().has_error());
    }

    #[test]
    fn test_invalid_email_fails_form() {
        let mut form = filled_form();
        form.set_value("email", "a@b");

        assert!(!form.validate());
        assert_eq!(
            form.field("email").unwrap().error,
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn test_invalid_optional_phone_fails_form() {
        let mut form = filled_form();
        form.set_value("phone", "123");

        assert!(!form.validate());
        assert_eq!(
            form.field("phone").unwrap().error,
            Some(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn test_whitespace_phone_is_format_checked() {
        let mut form = filled_form();
        form.set_value("phone", "   ");

        assert!(!form.validate());
        assert_eq!(
            form.field("phone").unwrap().error,
            Some(FieldError::InvalidPhone)
        );
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn test_blank_email_reports_required_only() {
        let mut form = filled_form();
        form.set_value("email", "   ");

        assert!(!form.validate());
        assert_eq!(form.field("email").unwrap().error, Some(FieldError::Required));
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn test_email_with_surrounding_spaces_passes() {
        let mut form = filled_form();
        form.set_value("email", "  jane@example.com ");
        assert!(form.validate());
    }

    #[test]
    fn test_input_clears_error() {
        let mut form = ContactForm::contact();
        form.validate();
        assert!(form.field("name").unwrap().has_error());

        form.on_input("name", "J");
        assert!(!form.field("name").unwrap().has_error());
        assert_eq!(form.field("name").unwrap().value, "J");
    }

    #[test]
    fn test_revalidation_replaces_previous_error() {
        let mut form = filled_form();
        form.set_value("phone", "123");
        form.validate();

        form.set_value("phone", "");
        assert!(form.validate());
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn test_reset_clears_values_and_errors() {
        let mut form = filled_form();
        form.set_value("email", "broken");
        form.validate();

        form.reset();
        assert!(form.is_blank());
        assert_eq!(form.error_count(), 0);
    }
}
