//! SCIP wire messages.
//!
//! Every field of the current scip.proto schema is declared. Fields unknown to
//! these definitions are dropped on decode, so the re-serialized payload is a
//! function of the declared fields alone.

/// Top-level artifact produced by an indexer for one analysis run.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Index {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
    #[prost(message, repeated, tag = "2")]
    pub documents: Vec<Document>,
    #[prost(message, repeated, tag = "3")]
    pub external_symbols: Vec<SymbolInformation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Metadata {
    #[prost(enumeration = "ProtocolVersion", tag = "1")]
    pub version: i32,
    #[prost(message, optional, tag = "2")]
    pub tool_info: Option<ToolInfo>,
    #[prost(string, tag = "3")]
    pub project_root: String,
    #[prost(enumeration = "TextEncoding", tag = "4")]
    pub text_document_encoding: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ToolInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, repeated, tag = "3")]
    pub arguments: Vec<String>,
}

/// Analysis result for a single source file.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Document {
    #[prost(string, tag = "1")]
    pub relative_path: String,
    #[prost(message, repeated, tag = "2")]
    pub occurrences: Vec<Occurrence>,
    #[prost(message, repeated, tag = "3")]
    pub symbols: Vec<SymbolInformation>,
    #[prost(string, tag = "4")]
    pub language: String,
    /// Full source text, when the indexer embeds it.
    #[prost(string, tag = "5")]
    pub text: String,
    #[prost(enumeration = "PositionEncoding", tag = "6")]
    pub position_encoding: i32,
}

/// A span of source text bound to a symbol.
///
/// `range` uses the compact SCIP layout: `[line, start_char, end_char]` for a
/// single-line span, `[start_line, start_char, end_line, end_char]` otherwise.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Occurrence {
    #[prost(int32, repeated, tag = "1")]
    pub range: Vec<i32>,
    #[prost(string, tag = "2")]
    pub symbol: String,
    /// Bitset of [`SymbolRole`] values.
    #[prost(int32, tag = "3")]
    pub symbol_roles: i32,
    #[prost(string, repeated, tag = "4")]
    pub override_documentation: Vec<String>,
    #[prost(int32, tag = "5")]
    pub syntax_kind: i32,
    #[prost(message, repeated, tag = "6")]
    pub diagnostics: Vec<Diagnostic>,
    #[prost(int32, repeated, tag = "7")]
    pub enclosing_range: Vec<i32>,
}

impl Occurrence {
    pub fn has_role(&self, role: SymbolRole) -> bool {
        self.symbol_roles & role as i32 != 0
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Diagnostic {
    #[prost(enumeration = "Severity", tag = "1")]
    pub severity: i32,
    #[prost(string, tag = "2")]
    pub code: String,
    #[prost(string, tag = "3")]
    pub message: String,
    #[prost(string, tag = "4")]
    pub source: String,
    #[prost(enumeration = "DiagnosticTag", repeated, tag = "5")]
    pub tags: Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SymbolInformation {
    #[prost(string, tag = "1")]
    pub symbol: String,
    #[prost(string, repeated, tag = "3")]
    pub documentation: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub relationships: Vec<Relationship>,
    /// SCIP `SymbolInformation.Kind`, kept as its raw value.
    #[prost(int32, tag = "5")]
    pub kind: i32,
    #[prost(string, tag = "6")]
    pub display_name: String,
    #[prost(message, optional, tag = "7")]
    pub signature_documentation: Option<Document>,
    #[prost(string, tag = "8")]
    pub enclosing_symbol: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Relationship {
    #[prost(string, tag = "1")]
    pub symbol: String,
    #[prost(bool, tag = "2")]
    pub is_reference: bool,
    #[prost(bool, tag = "3")]
    pub is_implementation: bool,
    #[prost(bool, tag = "4")]
    pub is_type_definition: bool,
    #[prost(bool, tag = "5")]
    pub is_definition: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ProtocolVersion {
    UnspecifiedProtocolVersion = 0,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TextEncoding {
    UnspecifiedTextEncoding = 0,
    Utf8 = 1,
    Utf16 = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PositionEncoding {
    UnspecifiedPositionEncoding = 0,
    Utf8CodeUnitOffsetFromLineStart = 1,
    Utf16CodeUnitOffsetFromLineStart = 2,
    Utf32CodeUnitOffsetFromLineStart = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SymbolRole {
    UnspecifiedSymbolRole = 0,
    Definition = 0x1,
    Import = 0x2,
    WriteAccess = 0x4,
    ReadAccess = 0x8,
    Generated = 0x10,
    Test = 0x20,
    ForwardDefinition = 0x40,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Severity {
    UnspecifiedSeverity = 0,
    Error = 1,
    Warning = 2,
    Information = 3,
    Hint = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DiagnosticTag {
    UnspecifiedDiagnosticTag = 0,
    Unnecessary = 1,
    Deprecated = 2,
}
