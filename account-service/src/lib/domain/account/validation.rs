use validator::Validate;
use validator::ValidationErrors;

use crate::account::errors::AccountError;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Declarative rule checks for an operation's input.
///
/// Rules are the `#[validate]` attributes on the command; `FIELDS` fixes the
/// report order and the wire name of each field. Validation never mutates
/// the command.
pub trait ValidatedCommand: Validate {
    /// `(struct field, wire field)` pairs in declaration order.
    const FIELDS: &'static [(&'static str, &'static str)];

    /// Run every rule, returning all failures in field order.
    fn field_errors(&self) -> Vec<FieldError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => ordered_field_errors(&errors, Self::FIELDS),
        }
    }

    /// # Errors
    /// * `ValidationFailed` - At least one rule failed
    fn check(&self) -> Result<(), AccountError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AccountError::ValidationFailed(errors))
        }
    }
}

fn ordered_field_errors(
    errors: &ValidationErrors,
    fields: &[(&'static str, &'static str)],
) -> Vec<FieldError> {
    let by_field = errors.field_errors();

    fields
        .iter()
        .filter_map(|(field, wire_name)| by_field.get(field).map(|errs| (*wire_name, *errs)))
        .flat_map(|(wire_name, errs)| {
            errs.iter().map(move |e| FieldError {
                field: wire_name.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", wire_name)),
            })
        })
        .collect()
}
