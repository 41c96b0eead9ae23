use std::path::Path;

pub type RaysceneResult<T> = Result<T, RaysceneError>;

/// Failure raised while reading or validating a scene description.
///
/// Every variant carries the human-readable, field-qualified message that is
/// shown to the user; the variant itself is the machine-checkable kind.
#[derive(thiserror::Error, Debug)]
pub enum RaysceneError {
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("wrong type: {0}")]
    WrongType(String),

    #[error("wrong length: {0}")]
    WrongLength(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("conflicting variant: {0}")]
    ConflictingVariant(String),

    #[error("missing variant: {0}")]
    MissingVariant(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("duplicate name: {0}")]
    DuplicateName(String),

    #[error("unknown reference: {0}")]
    UnknownReference(String),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("io error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl RaysceneError {
    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingField(msg.into())
    }

    pub fn wrong_type(msg: impl Into<String>) -> Self {
        Self::WrongType(msg.into())
    }

    pub fn wrong_length(msg: impl Into<String>) -> Self {
        Self::WrongLength(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn conflicting_variant(msg: impl Into<String>) -> Self {
        Self::ConflictingVariant(msg.into())
    }

    pub fn missing_variant(msg: impl Into<String>) -> Self {
        Self::MissingVariant(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn duplicate_name(msg: impl Into<String>) -> Self {
        Self::DuplicateName(msg.into())
    }

    pub fn unknown_reference(msg: impl Into<String>) -> Self {
        Self::UnknownReference(msg.into())
    }

    pub fn degenerate_geometry(msg: impl Into<String>) -> Self {
        Self::DegenerateGeometry(msg.into())
    }

    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
