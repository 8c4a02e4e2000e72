use validator::ValidationErrors;

/// Flatten `validator` output into the user-facing messages declared on the
/// request schemas, in a stable order.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::CreateActivityRequest;
    use validator::Validate;

    #[test]
    fn test_messages_come_from_schema_annotations() {
        let request = CreateActivityRequest {
            name: "Barbell Club".to_string(),
            description: "Lifting".to_string(),
            coach_id: 1,
            start_time: chrono::Utc::now(),
            duration: 60,
            credits_required: 10,
            max_capacity: 0,
        };

        let errors = request.validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(messages, vec!["Capacity must be at least 1".to_string()]);
    }

    #[test]
    fn test_multiple_violations_are_all_reported() {
        let request = CreateActivityRequest {
            name: String::new(),
            description: String::new(),
            coach_id: 0,
            start_time: chrono::Utc::now(),
            duration: 0,
            credits_required: -1,
            max_capacity: 0,
        };

        let errors = request.validate().unwrap_err();
        let messages = validation_messages(&errors);
        assert_eq!(messages.len(), 6);
    }
}
