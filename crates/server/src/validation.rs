//! Path and body checks that run before a request reaches a service.

use crate::errors::JsonApiError;

/// Parse a path id; anything but a positive integer is a 422.
pub fn parse_positive_id(field: &str, raw: &str) -> Result<i32, JsonApiError> {
    match raw.trim().parse::<i64>() {
        Ok(id) => ensure_positive(field, id),
        Err(_) => Err(JsonApiError::validation(format!("{field} must be a positive integer"))),
    }
}

/// Ids are stored as 32-bit integers; larger positive values get a range message.
pub fn ensure_positive(field: &str, value: i64) -> Result<i32, JsonApiError> {
    if value <= 0 {
        return Err(JsonApiError::validation(format!("{field} must be a positive integer")));
    }
    i32::try_from(value)
        .map_err(|_| JsonApiError::validation(format!("{field} must not exceed {}", i32::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn accepts_positive() {
        assert_eq!(parse_positive_id("car_id", "12").unwrap(), 12);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for raw in ["0", "-3", "abc", ""] {
            let err = parse_positive_id("car_id", raw).unwrap_err();
            assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY, "{raw}");
            assert_eq!(err.detail.as_deref(), Some("car_id must be a positive integer"));
        }
        assert!(ensure_positive("owner_id", 0).is_err());
    }

    #[test]
    fn oversized_ids_report_range() {
        let err = parse_positive_id("car_id", "3000000000").unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.detail.as_deref(), Some("car_id must not exceed 2147483647"));

        let err = ensure_positive("owner_id", 3_000_000_000).unwrap_err();
        assert_eq!(err.detail.as_deref(), Some("owner_id must not exceed 2147483647"));
        assert_eq!(ensure_positive("owner_id", i64::from(i32::MAX)).unwrap(), i32::MAX);
    }
}
