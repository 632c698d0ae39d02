//! Request-body guard for product writes.
//!
//! Runs before extraction so that schema violations produce the catalog's own
//! messages rather than a deserializer error. This is the only guard that
//! needs the buffered body.

use axum_helpers::errors::messages::INVALID_JSON;
use axum_helpers::{AppError, Guard, GuardRequest, Outcome};
use serde_json::Value;

use crate::error::ProductError;

/// Fields a new product must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "price", "category"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every required field must be present (create).
    Full,
    /// Only fields that are present are checked (update).
    Partial,
}

#[derive(Debug, Clone, Copy)]
pub struct ProductValidationGuard {
    mode: ValidationMode,
}

impl ProductValidationGuard {
    pub fn full() -> Self {
        Self {
            mode: ValidationMode::Full,
        }
    }

    pub fn partial() -> Self {
        Self {
            mode: ValidationMode::Partial,
        }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Check a parsed body. `None` stands for an empty body.
    ///
    /// A key that is present counts as supplied even when its value is
    /// `null`, `0` or `""`. The first violation wins: missing fields, then
    /// price.
    pub fn check(&self, body: Option<&Value>) -> Result<(), ProductError> {
        let object = match body {
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) if self.mode == ValidationMode::Full => None,
            Some(_) => {
                return Err(ProductError::InvalidBody(
                    "Request body must be a JSON object.".into(),
                ));
            }
        };

        if self.mode == ValidationMode::Full {
            let missing: Vec<&'static str> = REQUIRED_FIELDS
                .into_iter()
                .filter(|field| object.is_none_or(|map| !map.contains_key(*field)))
                .collect();
            if !missing.is_empty() {
                return Err(ProductError::MissingFields(missing));
            }
        }

        match object.and_then(|map| map.get("price")) {
            Some(price) if !is_positive_number(price) => Err(ProductError::InvalidPrice),
            _ => Ok(()),
        }
    }
}

fn is_positive_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| n > 0.0)
}

impl Guard for ProductValidationGuard {
    fn name(&self) -> &'static str {
        "product_validation"
    }

    fn reads_body(&self) -> bool {
        true
    }

    fn attempt(&self, request: &GuardRequest<'_>) -> Outcome {
        let body = match request.json() {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Rejecting unparseable product body: {}", e);
                return Outcome::Fail(AppError::BadRequest(INVALID_JSON.to_string()));
            }
        };

        match self.check(body.as_ref()) {
            Ok(()) => Outcome::Forward,
            Err(err) => Outcome::Fail(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::Request;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "Kettle",
            "description": "Boils water",
            "price": 25,
            "category": "kitchen"
        })
    }

    #[test]
    fn test_full_accepts_valid_body() {
        assert!(ProductValidationGuard::full().check(Some(&valid())).is_ok());
    }

    #[test]
    fn test_full_lists_missing_fields_in_order() {
        let body = json!({ "price": 5, "name": "x" });
        match ProductValidationGuard::full().check(Some(&body)) {
            Err(ProductError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["description", "category"])
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_full_empty_body_misses_everything() {
        match ProductValidationGuard::full().check(None) {
            Err(ProductError::MissingFields(fields)) => assert_eq!(fields, REQUIRED_FIELDS.to_vec()),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_null_and_zero_count_as_present() {
        let mut body = valid();
        body["name"] = Value::Null;
        body["description"] = json!("");
        body["price"] = json!(0);

        // Present but zero price: missing check passes, price check fails.
        let result = ProductValidationGuard::full().check(Some(&body));
        assert!(matches!(result, Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn test_missing_fields_win_over_bad_price() {
        let body = json!({ "price": -5 });
        let result = ProductValidationGuard::full().check(Some(&body));
        assert!(matches!(result, Err(ProductError::MissingFields(_))));
    }

    #[test]
    fn test_price_must_be_positive_number() {
        for price in [json!(-5), json!(0), json!("10"), Value::Null, json!(true)] {
            let mut body = valid();
            body["price"] = price;
            let result = ProductValidationGuard::full().check(Some(&body));
            assert!(matches!(result, Err(ProductError::InvalidPrice)));
        }

        let mut body = valid();
        body["price"] = json!(0.01);
        assert!(ProductValidationGuard::full().check(Some(&body)).is_ok());
    }

    #[test]
    fn test_partial_skips_required_fields() {
        let guard = ProductValidationGuard::partial();
        assert!(guard.check(Some(&json!({ "price": 999 }))).is_ok());
        assert!(guard.check(Some(&json!({}))).is_ok());
        assert!(guard.check(None).is_ok());
    }

    #[test]
    fn test_partial_still_checks_supplied_price() {
        let result = ProductValidationGuard::partial().check(Some(&json!({ "price": -1 })));
        assert!(matches!(result, Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn test_partial_rejects_non_object() {
        let result = ProductValidationGuard::partial().check(Some(&json!([1, 2])));
        assert!(matches!(result, Err(ProductError::InvalidBody(_))));
    }

    #[test]
    fn test_guard_reads_body_in_both_modes() {
        assert!(ProductValidationGuard::full().reads_body());
        assert!(ProductValidationGuard::partial().reads_body());
    }

    #[test]
    fn test_attempt_rejects_malformed_json() {
        let parts = Request::builder()
            .method("POST")
            .uri("/api/products")
            .body(())
            .unwrap()
            .into_parts()
            .0;
        let body = Bytes::from_static(b"{\"name\":");

        let outcome = ProductValidationGuard::full().attempt(&GuardRequest::new(&parts, &body));
        assert!(matches!(outcome, Outcome::Fail(AppError::BadRequest(_))));
    }
}
