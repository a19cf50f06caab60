//! Integration tests for query parsing and the in-memory index

use kodegen_tools_sitesearch::search::{
    SearchError, SearchEngine, SearchQueryBuilder, SearchQueryType, SearchSchema, search,
};
use kodegen_tools_sitesearch::{Document, Tags};

mod common;
use common::{doc, guide_documents, rust_documents};

fn engine_for(documents: &[Document]) -> SearchEngine {
    let schema = SearchSchema::builder().build().unwrap();
    SearchEngine::build(schema, documents, 50_000_000).unwrap()
}

fn references(engine: &SearchEngine, query: &str) -> Vec<String> {
    engine
        .search(query)
        .unwrap()
        .into_iter()
        .map(|m| m.reference)
        .collect()
}

#[test]
fn test_query_type_parsing() {
    // Test text query
    let query = SearchQueryType::parse("simple text search");
    match query {
        SearchQueryType::Text(text) => assert_eq!(text, "simple text search"),
        _ => panic!("Expected text query"),
    }

    // Test phrase query
    let query = SearchQueryType::parse("\"exact phrase\"");
    match query {
        SearchQueryType::Phrase(phrase) => assert_eq!(phrase, "exact phrase"),
        _ => panic!("Expected phrase query"),
    }

    // Test field-specific query
    let query = SearchQueryType::parse("tags:rust async");
    match query {
        SearchQueryType::Field { field, query } => {
            assert_eq!(field, "tags");
            assert_eq!(query, "rust async");
        }
        _ => panic!("Expected field query"),
    }

    // Test fuzzy query with default distance
    assert_eq!(
        SearchQueryType::parse("test~"),
        SearchQueryType::Fuzzy {
            term: "test".to_string(),
            distance: 1
        }
    );

    // Test boolean query
    let query = SearchQueryType::parse("hello AND world");
    match query {
        SearchQueryType::Boolean(boolean_str) => assert_eq!(boolean_str, "hello AND world"),
        _ => panic!("Expected boolean query"),
    }
}

#[test]
fn test_fuzzy_query_distance_limits() {
    // Distances above what tantivy supports are capped
    assert_eq!(
        SearchQueryType::parse("test~5"),
        SearchQueryType::Fuzzy {
            term: "test".to_string(),
            distance: 2
        }
    );

    // Overflowing distance is capped too
    assert_eq!(
        SearchQueryType::parse("test~99999999999999999999"),
        SearchQueryType::Fuzzy {
            term: "test".to_string(),
            distance: 2
        }
    );

    // A non-numeric distance is not fuzzy syntax
    assert_eq!(
        SearchQueryType::parse("test~invalid"),
        SearchQueryType::Text("test~invalid".to_string())
    );
}

#[test]
fn test_tilde_inside_longer_query_is_text() {
    assert_eq!(
        SearchQueryType::parse("beta~1 guide"),
        SearchQueryType::Text("beta~1 guide".to_string())
    );
    assert_eq!(
        SearchQueryType::parse("Home ~ Blog"),
        SearchQueryType::Text("Home ~ Blog".to_string())
    );
}

#[test]
fn test_colon_after_unknown_word_is_text() {
    assert_eq!(
        SearchQueryType::parse("Rust: A Guide"),
        SearchQueryType::Text("Rust: A Guide".to_string())
    );
    assert_eq!(
        SearchQueryType::parse("Q&A: part 1"),
        SearchQueryType::Text("Q&A: part 1".to_string())
    );
    assert!(matches!(
        SearchQueryType::parse("Tag: rust"),
        SearchQueryType::Field { ref field, .. } if field == "Tag"
    ));
}

#[test]
fn test_query_precedence() {
    // Field query takes precedence over fuzzy
    let query = SearchQueryType::parse("title:test~2");
    match query {
        SearchQueryType::Field { field, query } => {
            assert_eq!(field, "title");
            assert_eq!(query, "test~2");
        }
        _ => panic!("Expected field query"),
    }

    // Phrase takes precedence when properly quoted
    let query = SearchQueryType::parse("\"hello AND world\"");
    match query {
        SearchQueryType::Phrase(phrase) => assert_eq!(phrase, "hello AND world"),
        _ => panic!("Expected phrase query"),
    }

    // An empty phrase is plain text
    assert_eq!(
        SearchQueryType::parse("\"\""),
        SearchQueryType::Text("\"\"".to_string())
    );
}

#[test]
fn test_index_holds_every_document_once() {
    let docs = rust_documents();
    let engine = engine_for(&docs);

    let stats = engine.stats();
    assert_eq!(stats.num_documents, docs.len());
    assert_eq!(stats.num_segments, 1);
}

#[test]
fn test_text_query_searches_all_fields() {
    let engine = engine_for(&rust_documents());

    // title
    assert_eq!(references(&engine, "channels"), vec!["/go/channels"]);
    // description
    assert_eq!(references(&engine, "executors"), vec!["/rust/async"]);
    // tags
    assert_eq!(references(&engine, "go"), vec!["/go/channels"]);
}

#[test]
fn test_stemming_matches_word_forms() {
    let engine = engine_for(&guide_documents());

    let mut refs = references(&engine, "guides");
    refs.sort();
    assert_eq!(refs, vec!["/a", "/b"]);
}

#[test]
fn test_tag_lists_are_searchable() {
    let docs = vec![
        Document {
            url: "/tagged".to_string(),
            title: "Tagged".to_string(),
            description: String::new(),
            tags: Tags::Many(vec!["tokio".to_string(), "networking".to_string()]),
        },
        doc("/plain", "Plain", "nothing here", "misc"),
    ];
    let engine = engine_for(&docs);

    assert_eq!(references(&engine, "networking"), vec!["/tagged"]);
    assert_eq!(references(&engine, "tags:tokio"), vec!["/tagged"]);
}

#[test]
fn test_matches_are_ranked_by_score() {
    let engine = engine_for(&rust_documents());
    let matches = engine.search("rust").unwrap();

    assert_eq!(matches.len(), 5);
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(matches.iter().all(|m| m.reference.starts_with("/rust/")));
}

#[test]
fn test_limit_keeps_ranking_prefix() {
    let engine = engine_for(&rust_documents());

    let all = engine.search("rust").unwrap();
    let top = SearchQueryBuilder::new("rust").limit(3).execute(&engine).unwrap();
    assert_eq!(top.len(), 3);
    let top_scores: Vec<f32> = top.iter().map(|m| m.score).collect();
    let all_scores: Vec<f32> = all[..3].iter().map(|m| m.score).collect();
    assert_eq!(top_scores, all_scores);

    let results = search(&engine, "rust", Some(2)).unwrap();
    assert_eq!(results.total_count, 5);
    assert!(results.has_more());
    assert_eq!(results.top(10).len(), 2);
}

#[test]
fn test_field_query_is_scoped() {
    let engine = engine_for(&guide_documents());

    // "advanced" is beta's description and tag, never a title
    assert!(references(&engine, "title:advanced").is_empty());
    assert_eq!(references(&engine, "description:advanced"), vec!["/b"]);
}

#[test]
fn test_unknown_field_prefix_searches_as_text() {
    let engine = engine_for(&guide_documents());

    let mut refs = references(&engine, "body:guide");
    refs.sort();
    assert_eq!(refs, vec!["/a", "/b"]);
}

#[test]
fn test_field_query_without_terms_is_rejected() {
    let engine = engine_for(&guide_documents());

    let err = engine.search("title:").unwrap_err();
    assert!(matches!(err, SearchError::QueryParsing(_)));
    assert!(err.is_query_error());
}

#[test]
fn test_punctuation_is_a_word_break() {
    let docs = vec![
        doc("/news", "What's new?", "", ""),
        doc("/q", "Q&A: part 1", "", ""),
        doc("/math", "a^2 + b^2", "", ""),
    ];
    let engine = engine_for(&docs);

    assert_eq!(references(&engine, "What's new?"), vec!["/news"]);
    // "a" is a word of both remaining titles; the fuller match ranks first
    assert_eq!(references(&engine, "Q&A: part")[0], "/q");
    assert_eq!(references(&engine, "{a^2}")[0], "/math");
    assert!(references(&engine, "zzz (").is_empty());
}

#[test]
fn test_every_term_of_a_tilde_query_counts() {
    let engine = engine_for(&guide_documents());

    let mut refs = references(&engine, "beta~1 guide");
    refs.sort();
    assert_eq!(refs, vec!["/a", "/b"]);
}

#[test]
fn test_phrase_query_requires_adjacency() {
    let docs = vec![
        doc("/adjacent", "Error handling", "", ""),
        doc("/apart", "Handling every error", "", ""),
    ];
    let engine = engine_for(&docs);

    assert_eq!(references(&engine, "\"error handling\""), vec!["/adjacent"]);
}

#[test]
fn test_fuzzy_query_tolerates_typos() {
    let schema = SearchSchema::builder().with_stemming(false).build().unwrap();
    let engine = SearchEngine::build(schema, &guide_documents(), 50_000_000).unwrap();

    assert_eq!(references(&engine, "alpah~1"), vec!["/a"]);
    assert!(references(&engine, "alpah").is_empty());
}

#[test]
fn test_no_match_returns_empty() {
    let engine = engine_for(&guide_documents());
    assert!(engine.search("zzz").unwrap().is_empty());
}
