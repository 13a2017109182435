//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows clients to handle specific cases

use axum::http::StatusCode;
use axum::response::IntoResponse;
use directory::prelude::*;
use indexmap::IndexMap;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_installer_not_found_returns_404() {
        let err = DirectoryError::Catalog(CatalogError::NotFound {
            id: "installer-1".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_errors_return_400() {
        let err = DirectoryError::Query(QueryError::UnknownSkillLevel {
            value: "Expert".to_string(),
            expected: "Master, Intermediate, Novice".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_returns_400() {
        let err = DirectoryError::Validation(ValidationError::MalformedBody {
            message: "EOF while parsing an object".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_pool_returns_500() {
        let err = DirectoryError::Assignment(AssignmentError::EmptyPool {
            pool: Some("cards".to_string()),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_config_error_returns_500() {
        let err = DirectoryError::Config(ConfigError::FileNotFound {
            path: "directory.yaml".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_catalog_error_codes() {
        let cases = [
            (
                CatalogError::NotFound { id: "x".to_string() },
                "INSTALLER_NOT_FOUND",
            ),
            (
                CatalogError::DuplicateId { id: "x".to_string() },
                "DUPLICATE_INSTALLER_ID",
            ),
            (
                CatalogError::InvalidRecord {
                    id: "x".to_string(),
                    message: "name".to_string(),
                },
                "INVALID_INSTALLER_RECORD",
            ),
            (
                CatalogError::LoadFailed {
                    source_name: "installers.yaml".to_string(),
                    message: "eof".to_string(),
                },
                "CATALOG_LOAD_FAILED",
            ),
        ];

        for (err, code) in cases {
            assert_eq!(DirectoryError::from(err).error_code(), code);
        }
    }

    #[test]
    fn test_gallery_error_code() {
        let err = DirectoryError::from(GalleryError::OutOfRange { index: 3, len: 2 });
        assert_eq!(err.error_code(), "GALLERY_OUT_OF_RANGE");
        assert_eq!(
            err.to_string(),
            "Image index 3 out of range for a gallery of 2 images"
        );
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_error_response_has_code_and_message() {
        let err = DirectoryError::Config(ConfigError::IoError {
            message: "permission denied".to_string(),
        });
        let response = err.to_response();

        assert_eq!(response.code, "CONFIG_ERROR");
        assert_eq!(response.message, "IO error: permission denied");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_validation_errors_include_field_details() {
        let mut fields = IndexMap::new();
        fields.insert("customerPhone".to_string(), "Phone number is required".to_string());
        let err = DirectoryError::Validation(ValidationError::FieldErrors(fields));

        let details = err.to_response().details.expect("details");
        assert_eq!(
            details["fields"]["customerPhone"],
            "Phone number is required"
        );
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[test]
    fn test_can_match_not_found_from_catalog() {
        let catalog = Catalog::from_records(vec![]).unwrap();

        let message = match catalog.get("installer-5").map_err(DirectoryError::from) {
            Ok(_) => "found".to_string(),
            Err(DirectoryError::Catalog(CatalogError::NotFound { id })) => {
                format!("{} missing", id)
            }
            Err(other) => other.to_string(),
        };

        assert_eq!(message, "installer-5 missing");
    }

    #[test]
    fn test_can_match_quote_validation_fields() {
        let err = QuoteForm::default().validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::FieldErrors(ref fields) if fields.len() == 4
        ));
    }
}

mod into_response_tests {
    use super::*;

    #[test]
    fn test_directory_error_into_response_status() {
        let err = DirectoryError::Catalog(CatalogError::NotFound {
            id: "installer-1".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_error_into_response_status() {
        let err = DirectoryError::from("sideways".parse::<SortKey>().unwrap_err());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
