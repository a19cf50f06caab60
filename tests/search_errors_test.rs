use kodegen_tools_sitesearch::search::errors::*;
use kodegen_tools_sitesearch::search::schema::SchemaError;

#[test]
fn test_load_failure_detection() {
    let fetch = SearchError::Fetch {
        source_desc: "https://example.com/search.json".to_string(),
        message: "connection refused".to_string(),
    };
    assert!(fetch.is_load_failure());
    assert!(!fetch.is_query_error());

    let parse = SearchError::Parse(serde_json::from_str::<Vec<u8>>("<html>").unwrap_err());
    assert!(parse.is_load_failure());

    let io = SearchError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    assert!(io.is_load_failure());
}

#[test]
fn test_query_error_detection() {
    let invalid = SearchError::QueryParsing("unbalanced quote".to_string());
    assert!(invalid.is_query_error());
    assert!(!invalid.is_load_failure());

    assert!(!SearchError::IndexNotReady.is_query_error());
    assert!(!SearchError::IndexNotReady.is_load_failure());
}

#[test]
fn test_error_messages() {
    let err = SearchError::Fetch {
        source_desc: "https://example.com/search.json".to_string(),
        message: "timed out".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to fetch document list from https://example.com/search.json: timed out"
    );

    assert_eq!(
        SearchError::DocumentNotFound("/gone".to_string()).to_string(),
        "Document not found: /gone"
    );

    let schema_err: SearchError = SchemaError::FieldNotFound {
        field: "tags".to_string(),
    }
    .into();
    assert!(schema_err.to_string().contains("'tags'"));

    let other: SearchError = anyhow::anyhow!("boom").into();
    assert_eq!(other.to_string(), "boom");
}
