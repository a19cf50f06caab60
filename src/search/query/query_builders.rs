//! Query builders for different search types
//!
//! Every builder tokenizes query terms through the same analyzer as the
//! indexed fields, so stemmed terms match.

use tantivy::{
    Term,
    query::{BooleanQuery, EmptyQuery, FuzzyTermQuery, Occur, Query},
    schema::Field,
};

use crate::search::engine::SearchEngine;
use crate::search::errors::{SearchError, SearchResult};
use crate::search::schema::{DESCRIPTION_FIELD, TAGS_FIELD, TITLE_FIELD};

/// Schema field for a user-facing field name, if it is one
pub(crate) fn field_alias(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "title" => Some(TITLE_FIELD),
        "description" | "desc" => Some(DESCRIPTION_FIELD),
        "tags" | "tag" => Some(TAGS_FIELD),
        _ => None,
    }
}

/// Rewrite free text as parser-safe terms.
///
/// Each whitespace token is split the way the index tokenizer splits text
/// (on anything not alphanumeric), so apostrophes, colons and brackets are
/// word breaks rather than syntax. A leading `+` or `-` carries over to
/// every word of its token. With `keep_operators`, bare `AND`/`OR`/`NOT`
/// survive; otherwise words are lowercased so they never read as operators.
fn plain_terms(text: &str, field: Option<&str>, keep_operators: bool) -> Vec<String> {
    let mut terms = Vec::new();

    for token in text.split_whitespace() {
        if keep_operators && matches!(token, "AND" | "OR" | "NOT") {
            terms.push(token.to_string());
            continue;
        }

        let (modifier, rest) = match token.strip_prefix(['+', '-']) {
            Some(rest) => (&token[..1], rest),
            None => ("", token),
        };

        for word in rest.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()) {
            let word = word.to_lowercase();
            terms.push(match field {
                Some(field) => format!("{modifier}{field}:{word}"),
                None => format!("{modifier}{word}"),
            });
        }
    }

    terms
}

fn parse_lenient(engine: &SearchEngine, text: &str, kind: &str) -> Box<dyn Query> {
    if text.trim().is_empty() {
        return Box::new(EmptyQuery);
    }

    let (query, errors) = engine.query_parser().parse_query_lenient(text);
    if let Some(first_error) = errors.first() {
        tracing::debug!(
            kind,
            query = %text,
            error_count = errors.len(),
            first_error = %first_error,
            "Lenient query parse dropped clauses"
        );
    }
    query
}

/// Build a multi-field text query over title, description and tags.
///
/// Never fails: text that tokenizes to nothing matches nothing.
pub(crate) fn build_text_query(engine: &SearchEngine, text: &str) -> SearchResult<Box<dyn Query>> {
    let terms = plain_terms(text, None, false).join(" ");
    Ok(parse_lenient(engine, &terms, "Text"))
}

/// Build a phrase query for exact phrase matching.
pub(crate) fn build_phrase_query(
    engine: &SearchEngine,
    phrase: &str,
) -> SearchResult<Box<dyn Query>> {
    let words = phrase
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if words.is_empty() {
        return Ok(Box::new(EmptyQuery));
    }

    Ok(parse_lenient(engine, &format!("\"{words}\""), "Phrase"))
}

/// Build a boolean query using tantivy's query parser.
///
/// Supports AND, OR, NOT operators. When the strict grammar rejects the
/// input, the words and operators are kept and everything else is dropped.
pub(crate) fn build_boolean_query(
    engine: &SearchEngine,
    query_str: &str,
) -> SearchResult<Box<dyn Query>> {
    match engine.query_parser().parse_query(query_str) {
        Ok(query) => Ok(query),
        Err(parse_error) => {
            tracing::debug!(
                query = %query_str,
                error = %parse_error,
                "Boolean query parsing failed, retrying with plain terms"
            );

            let terms = plain_terms(query_str, None, true).join(" ");
            Ok(parse_lenient(engine, &terms, "Boolean"))
        }
    }
}

/// Build a field-specific query, e.g. `tags:rust async`.
///
/// Every term after the colon is scoped to the field.
pub(crate) fn build_field_query(
    engine: &SearchEngine,
    field_name: &str,
    query: &str,
) -> SearchResult<Box<dyn Query>> {
    let Some(schema_field_name) = field_alias(field_name) else {
        // Not a field this index has; search the whole input as text.
        return build_text_query(engine, &format!("{field_name} {query}"));
    };

    let field_query = plain_terms(query, Some(schema_field_name), true).join(" ");
    if field_query.is_empty() {
        return Err(SearchError::QueryParsing(format!(
            "Field query for '{field_name}' has no terms"
        )));
    }

    Ok(parse_lenient(engine, &field_query, "Field"))
}

/// Build a fuzzy query for handling typos.
///
/// FuzzyTermQuery is not supported by QueryParser, so the term goes through
/// each field's analyzer before the fuzzy queries are built.
pub(crate) fn build_fuzzy_query(
    engine: &SearchEngine,
    term_str: &str,
    distance: u8,
) -> SearchResult<Box<dyn Query>> {
    let mut subqueries: Vec<(Occur, Box<dyn Query>)> = Vec::new();

    for field in engine.schema().searchable_fields() {
        subqueries.extend(
            fuzzy_terms_for_field(engine, field, term_str)
                .into_iter()
                .map(|term| {
                    let fuzzy = FuzzyTermQuery::new(term, distance, true);
                    (Occur::Should, Box::new(fuzzy) as Box<dyn Query>)
                }),
        );
    }

    if subqueries.is_empty() {
        // Punctuation-only terms tokenize to nothing, like plain text does.
        return build_text_query(engine, term_str);
    }

    Ok(Box::new(BooleanQuery::new(subqueries)))
}

fn fuzzy_terms_for_field(engine: &SearchEngine, field: Field, text: &str) -> Vec<Term> {
    let mut terms = Vec::new();
    if let Some(mut analyzer) = engine.get_text_analyzer(field) {
        let mut token_stream = analyzer.token_stream(text);
        token_stream.process(&mut |token| {
            terms.push(Term::from_field_text(field, &token.text));
        });
    }
    terms
}
