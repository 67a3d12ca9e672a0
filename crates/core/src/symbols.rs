use crate::canonical::CanonicalDocument;
use crate::codec::encode_ranges;
use crate::error::Result;
use scipstore_api::{ProcessedSymbolData, Range, SymbolRole};
use std::collections::BTreeMap;

#[derive(Default)]
struct RangeSets {
    definitions: Vec<i32>,
    references: Vec<i32>,
    // Filled by producers that emit implementation / type-definition roles.
    implementations: Vec<i32>,
    type_definitions: Vec<i32>,
}

/// Group occurrence ranges by symbol and encode each category.
///
/// Occurrences without a symbol are skipped. Output is sorted by symbol name.
pub fn extract_symbols(document: &CanonicalDocument) -> Result<Vec<ProcessedSymbolData>> {
    let mut by_symbol: BTreeMap<&str, RangeSets> = BTreeMap::new();

    for occurrence in &document.occurrences {
        if occurrence.symbol.is_empty() {
            continue;
        }

        let range = Range::from_scip(&occurrence.range)?;
        let sets = by_symbol.entry(occurrence.symbol.as_str()).or_default();
        if occurrence.has_role(SymbolRole::Definition) {
            sets.definitions.extend(range.to_scip());
        } else {
            sets.references.extend(range.to_scip());
        }
    }

    by_symbol
        .into_iter()
        .map(|(name, sets)| {
            Ok(ProcessedSymbolData {
                symbol_name: name.to_string(),
                definition_ranges: encode_nonempty(&sets.definitions)?,
                reference_ranges: encode_nonempty(&sets.references)?,
                implementation_ranges: encode_nonempty(&sets.implementations)?,
                type_definition_ranges: encode_nonempty(&sets.type_definitions)?,
            })
        })
        .collect()
}

fn encode_nonempty(ranges: &[i32]) -> Result<Option<Vec<u8>>> {
    if ranges.is_empty() {
        return Ok(None);
    }
    encode_ranges(ranges).map(Some)
}
