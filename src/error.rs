use thiserror::Error;

/// Terminal render failures. Missing field values and missing branding are
/// not errors (they fall back to placeholders); anything listed here aborts
/// the whole render and no bytes are produced.
#[derive(Debug, Error)]
pub enum Error {
    /// The report assembler was handed an empty document list.
    #[error("cannot assemble a report from an empty document list")]
    EmptyReport,

    /// The rendering surface rejected a drawing or serialization call.
    #[error("rendering surface failure: {0}")]
    Surface(String),
}
