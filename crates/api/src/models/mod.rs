pub mod processed;
pub mod range;
pub mod scip;
pub mod util;

pub use processed::*;
pub use range::*;
pub use scip::{
    Diagnostic, DiagnosticTag, Document, Index, Metadata, Occurrence, PositionEncoding,
    Relationship, Severity, SymbolInformation, SymbolRole, ToolInfo,
};
