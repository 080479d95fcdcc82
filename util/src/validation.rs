use validator::ValidationErrors;

/// Joins every field-level validation message into one `"; "`-separated line.
///
/// Errors without a message are skipped. Field order follows the underlying
/// map and is not stable.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
