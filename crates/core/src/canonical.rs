//! Deterministic normalization of a document before hashing and storage.

use prost::Message;
use scipstore_api::{Diagnostic, Document, Occurrence, Relationship, SymbolInformation};
use std::cmp::Ordering;
use std::ops::Deref;

/// A document that has been through [`canonicalize_document`].
///
/// Hashing and symbol extraction take this type, so they cannot observe a
/// document in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalDocument(Document);

impl CanonicalDocument {
    pub fn new(mut document: Document) -> Self {
        canonicalize_document(&mut document);
        Self(document)
    }

    pub fn into_inner(self) -> Document {
        self.0
    }
}

impl Deref for CanonicalDocument {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.0
    }
}

/// Normalize `document` in place. Idempotent.
///
/// The relative path is cleared; it is supplied alongside the payload.
pub fn canonicalize_document(document: &mut Document) {
    document.relative_path.clear();

    for occurrence in &mut document.occurrences {
        expand_range(&mut occurrence.range);
        expand_range(&mut occurrence.enclosing_range);
        for diagnostic in &mut occurrence.diagnostics {
            diagnostic.tags.sort_unstable();
        }
        occurrence.diagnostics.sort_by(compare_diagnostics);
    }
    document.occurrences.sort_by(compare_occurrences);

    for symbol in &mut document.symbols {
        symbol.relationships.sort_by(compare_relationships);
        if let Some(signature) = &mut symbol.signature_documentation {
            canonicalize_document(signature);
        }
    }
    document.symbols.sort_by(compare_symbols);
}

/// Rewrite the 3-integer single-line form as `[line, start, line, end]`.
/// Other lengths are left for the symbol extractor to reject.
fn expand_range(range: &mut Vec<i32>) {
    if let [line, start, end] = range[..] {
        *range = vec![line, start, line, end];
    }
}

/// Range, then symbol name, then every remaining field, so that two
/// occurrences compare equal only when they are identical.
pub fn compare_occurrences(a: &Occurrence, b: &Occurrence) -> Ordering {
    a.range
        .cmp(&b.range)
        .then_with(|| a.symbol.cmp(&b.symbol))
        .then_with(|| a.symbol_roles.cmp(&b.symbol_roles))
        .then_with(|| a.syntax_kind.cmp(&b.syntax_kind))
        .then_with(|| a.override_documentation.cmp(&b.override_documentation))
        .then_with(|| a.enclosing_range.cmp(&b.enclosing_range))
        .then_with(|| {
            a.diagnostics
                .iter()
                .map(diagnostic_key)
                .cmp(b.diagnostics.iter().map(diagnostic_key))
        })
}

pub fn compare_symbols(a: &SymbolInformation, b: &SymbolInformation) -> Ordering {
    a.symbol
        .cmp(&b.symbol)
        .then_with(|| a.documentation.cmp(&b.documentation))
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.enclosing_symbol.cmp(&b.enclosing_symbol))
        .then_with(|| {
            a.relationships
                .iter()
                .map(relationship_key)
                .cmp(b.relationships.iter().map(relationship_key))
        })
        .then_with(|| signature_bytes(a).cmp(&signature_bytes(b)))
}

/// Signature documents are canonicalized before symbols are sorted, so their
/// encoding is stable.
fn signature_bytes(symbol: &SymbolInformation) -> Option<Vec<u8>> {
    symbol
        .signature_documentation
        .as_ref()
        .map(Message::encode_to_vec)
}

fn compare_relationships(a: &Relationship, b: &Relationship) -> Ordering {
    relationship_key(a).cmp(&relationship_key(b))
}

fn compare_diagnostics(a: &Diagnostic, b: &Diagnostic) -> Ordering {
    diagnostic_key(a).cmp(&diagnostic_key(b))
}

fn diagnostic_key(d: &Diagnostic) -> (i32, &str, &str, &str, &[i32]) {
    (
        d.severity,
        d.code.as_str(),
        d.message.as_str(),
        d.source.as_str(),
        d.tags.as_slice(),
    )
}

fn relationship_key(r: &Relationship) -> (&str, bool, bool, bool, bool) {
    (
        r.symbol.as_str(),
        r.is_reference,
        r.is_implementation,
        r.is_type_definition,
        r.is_definition,
    )
}
