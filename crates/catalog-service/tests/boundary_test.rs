use catalog_framework::{InputError, Outcome};
use catalog_service::{CatalogError, ErrorResponse, Issue};
use serde_json::{json, Value};

#[test]
fn test_validation_failure_body() {
    let mut outcome = Outcome::error("MOVIE_TITLE_NULL", "title must not be null");
    outcome.add_events(
        Outcome::<()>::error("MOVIE_YEAR_NOT_VALID", "year must be between 1888 and 2100, got 1700")
            .into_events(),
    );
    let err = CatalogError::from(InputError::new(outcome));

    let body = ErrorResponse::from(&err);
    let json: Value = serde_json::from_str(&body.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        json!({
            "status": 422,
            "issues": [
                { "code": "MOVIE_TITLE_NULL", "message": "title must not be null" },
                {
                    "code": "MOVIE_YEAR_NOT_VALID",
                    "message": "year must be between 1888 and 2100, got 1700"
                }
            ]
        })
    );
}

#[test]
fn test_not_found_body() {
    let err = CatalogError::from(InputError::not_found("BOOK", "book_4"));

    let body = ErrorResponse::from(&err);
    assert_eq!(body.status, 404);
    assert_eq!(
        body.issues,
        vec![Issue {
            code: "BOOK_NOT_EXIST".into(),
            message: "book book_4 does not exist".into(),
        }]
    );
}

#[test]
fn test_unavailable_body() {
    let body = ErrorResponse::from(&CatalogError::Unavailable("GENRE"));

    assert_eq!(body.status, 503);
    assert_eq!(body.codes(), vec!["SERVICE_UNAVAILABLE"]);
    assert_eq!(body.issues[0].message, "GENRE catalog is unavailable");
}

#[test]
fn test_body_parses_back() {
    let text = r#"{"status":422,"issues":[{"code":"EMPTY_FILTER","message":"at least one filter criterion is required"}]}"#;
    let body: ErrorResponse = serde_json::from_str(text).unwrap();

    assert_eq!(body, ErrorResponse::from(&InputError::empty_filter()));
}
