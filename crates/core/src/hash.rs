//! Content hashing of canonical documents.
//!
//! Every value is written with a type marker or a length prefix and followed
//! by [`SEPARATOR`], so no two distinct field sequences share an encoding.

use crate::canonical::CanonicalDocument;
use scipstore_api::{
    ContentHash, Diagnostic, Document, Occurrence, Relationship, SymbolInformation,
};
use sha2::{Digest, Sha256};

const SEPARATOR: u8 = 0;
const MARKER_OCCURRENCE: u8 = 1;
const MARKER_DIAGNOSTIC: u8 = 2;
const MARKER_SYMBOL: u8 = 3;
const MARKER_RELATIONSHIP: u8 = 4;
const MARKER_SIGNATURE: u8 = 5;
const MARKER_DOCUMENT: u8 = 6;

pub fn hash_document(document: &CanonicalDocument) -> ContentHash {
    let mut hasher = DocumentHasher::default();
    hasher.document(document);
    hasher.finish()
}

#[derive(Default)]
struct DocumentHasher {
    inner: Sha256,
}

impl DocumentHasher {
    /// Occurrences, then symbols, then the document-level fields. The trailing
    /// [`MARKER_DOCUMENT`] group also closes a nested signature document.
    fn document(&mut self, document: &Document) {
        for occurrence in &document.occurrences {
            self.occurrence(occurrence);
        }
        for symbol in &document.symbols {
            self.symbol(symbol);
        }

        self.marker(MARKER_DOCUMENT);
        self.string(&document.language);
        self.string(&document.text);
        self.ints(&[document.position_encoding]);
    }

    fn occurrence(&mut self, occurrence: &Occurrence) {
        let mut values = Vec::with_capacity(occurrence.range.len() + 2);
        values.extend_from_slice(&occurrence.range);
        values.push(occurrence.symbol_roles);
        values.push(occurrence.syntax_kind);

        self.marker(MARKER_OCCURRENCE);
        self.string(&occurrence.symbol);
        self.strings(&occurrence.override_documentation);
        self.ints(&values);
        self.ints(&occurrence.enclosing_range);

        for diagnostic in &occurrence.diagnostics {
            self.diagnostic(diagnostic);
        }
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        let mut values = Vec::with_capacity(diagnostic.tags.len() + 1);
        values.push(diagnostic.severity);
        values.extend_from_slice(&diagnostic.tags);

        self.marker(MARKER_DIAGNOSTIC);
        self.string(&diagnostic.code);
        self.string(&diagnostic.message);
        self.string(&diagnostic.source);
        self.ints(&values);
    }

    fn symbol(&mut self, symbol: &SymbolInformation) {
        self.marker(MARKER_SYMBOL);
        self.string(&symbol.symbol);
        self.strings(&symbol.documentation);
        self.ints(&[symbol.kind]);
        self.string(&symbol.display_name);
        self.string(&symbol.enclosing_symbol);

        for relationship in &symbol.relationships {
            self.relationship(relationship);
        }
        if let Some(signature) = &symbol.signature_documentation {
            self.marker(MARKER_SIGNATURE);
            self.document(signature);
        }
    }

    fn relationship(&mut self, relationship: &Relationship) {
        self.marker(MARKER_RELATIONSHIP);
        self.string(&relationship.symbol);
        self.flags(&[
            relationship.is_reference,
            relationship.is_implementation,
            relationship.is_type_definition,
            relationship.is_definition,
        ]);
    }

    fn marker(&mut self, marker: u8) {
        self.inner.update([marker, SEPARATOR]);
    }

    fn string(&mut self, s: &str) {
        self.len(s.len());
        self.inner.update(s.as_bytes());
        self.inner.update([SEPARATOR]);
    }

    fn strings(&mut self, ss: &[String]) {
        self.len(ss.len());
        for s in ss {
            self.string(s);
        }
        self.inner.update([SEPARATOR]);
    }

    fn ints(&mut self, vs: &[i32]) {
        self.len(vs.len());
        for v in vs {
            self.inner.update(v.to_le_bytes());
        }
        self.inner.update([SEPARATOR]);
    }

    /// Up to eight booleans packed into one byte, first flag in the low bit.
    fn flags(&mut self, bits: &[bool]) {
        debug_assert!(bits.len() <= 8);
        let packed = bits
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << i));
        self.inner.update([packed, SEPARATOR]);
    }

    fn len(&mut self, n: usize) {
        self.inner.update((n as u64).to_le_bytes());
    }

    fn finish(self) -> ContentHash {
        ContentHash(self.inner.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(document: Document) -> ContentHash {
        hash_document(&CanonicalDocument::new(document))
    }

    fn base() -> Document {
        Document {
            relative_path: "a.go".to_string(),
            occurrences: vec![Occurrence {
                range: vec![1, 2, 3],
                symbol: "pkg/a".to_string(),
                symbol_roles: 1,
                override_documentation: vec!["doc".to_string()],
                ..Default::default()
            }],
            symbols: vec![SymbolInformation {
                symbol: "pkg/a".to_string(),
                documentation: vec!["hello".to_string()],
                relationships: vec![Relationship {
                    symbol: "pkg/i".to_string(),
                    is_implementation: true,
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash(base()), hash(base()));
    }

    #[test]
    fn test_path_does_not_affect_hash() {
        let mut other = base();
        other.relative_path = "elsewhere/b.go".to_string();
        assert_eq!(hash(base()), hash(other));
    }

    #[test]
    fn test_shorthand_and_full_range_hash_alike() {
        let mut full = base();
        full.occurrences[0].range = vec![1, 2, 1, 3];
        assert_eq!(hash(base()), hash(full));
    }

    #[test]
    fn test_field_boundaries_are_unambiguous() {
        let mut left = base();
        left.symbols[0].documentation = vec!["ab".to_string(), "c".to_string()];
        let mut right = base();
        right.symbols[0].documentation = vec!["a".to_string(), "bc".to_string()];
        assert_ne!(hash(left), hash(right));

        let mut joined = base();
        joined.symbols[0].documentation = vec!["a\0b".to_string()];
        let mut split = base();
        split.symbols[0].documentation = vec!["a".to_string(), "b".to_string()];
        assert_ne!(hash(joined), hash(split));
    }

    #[test]
    fn test_sensitive_to_every_field() {
        let original = hash(base());
        let mutations: Vec<Box<dyn Fn(&mut Document)>> = vec![
            Box::new(|d: &mut Document| d.occurrences[0].range[2] += 1),
            Box::new(|d: &mut Document| d.occurrences[0].symbol.push('x')),
            Box::new(|d: &mut Document| d.occurrences[0].symbol_roles = 0),
            Box::new(|d: &mut Document| d.occurrences[0].syntax_kind = 7),
            Box::new(|d: &mut Document| d.occurrences[0].override_documentation[0].push('!')),
            Box::new(|d: &mut Document| d.occurrences[0].enclosing_range = vec![0, 0, 9, 0]),
            Box::new(|d: &mut Document| {
                d.occurrences[0].diagnostics.push(Diagnostic {
                    message: "unused".to_string(),
                    ..Default::default()
                })
            }),
            Box::new(|d: &mut Document| d.symbols[0].documentation[0] = "Hello".to_string()),
            Box::new(|d: &mut Document| d.symbols[0].relationships[0].is_implementation = false),
            Box::new(|d: &mut Document| d.symbols[0].relationships[0].is_reference = true),
            Box::new(|d: &mut Document| d.symbols[0].relationships[0].symbol.push('2')),
            Box::new(|d: &mut Document| d.symbols[0].kind = 17),
            Box::new(|d: &mut Document| d.symbols[0].display_name = "a".to_string()),
            Box::new(|d: &mut Document| d.symbols[0].enclosing_symbol = "pkg/".to_string()),
            Box::new(|d: &mut Document| {
                d.symbols[0].signature_documentation = Some(Document::default())
            }),
            Box::new(|d: &mut Document| d.language = "go".to_string()),
            Box::new(|d: &mut Document| d.text = "package a".to_string()),
            Box::new(|d: &mut Document| d.position_encoding = 1),
        ];

        for (i, mutate) in mutations.iter().enumerate() {
            let mut document = base();
            mutate(&mut document);
            assert_ne!(hash(document), original, "mutation {i} did not change the hash");
        }
    }

    #[test]
    fn test_signature_symbols_do_not_leak_into_parent() {
        let nested = SymbolInformation {
            symbol: "pkg/b".to_string(),
            ..Default::default()
        };

        let mut inside = base();
        inside.symbols[0].signature_documentation = Some(Document {
            symbols: vec![nested.clone()],
            ..Default::default()
        });
        let mut beside = base();
        beside.symbols[0].signature_documentation = Some(Document::default());
        beside.symbols.push(nested);

        assert_ne!(hash(inside), hash(beside));
    }

    #[test]
    fn test_diagnostic_order_does_not_matter() {
        let first = Diagnostic {
            code: "A".to_string(),
            ..Default::default()
        };
        let second = Diagnostic {
            code: "B".to_string(),
            ..Default::default()
        };
        let mut left = base();
        left.occurrences[0].diagnostics = vec![first.clone(), second.clone()];
        let mut right = base();
        right.occurrences[0].diagnostics = vec![second, first];
        assert_eq!(hash(left), hash(right));
    }
}
