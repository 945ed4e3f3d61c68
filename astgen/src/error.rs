use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while turning a node table into source.
///
/// All of these are mistakes in the caller's table, so none of them are
/// recoverable: the request that produced one is abandoned as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed field {spec:?}: expected `Type name`")]
    MalformedField { spec: String },
    #[error("invalid {what} name {name:?}: not an identifier")]
    InvalidIdentifier { what: &'static str, name: String },
    #[error("node kind `{kind}` is declared more than once")]
    DuplicateKind { kind: String },
    #[error("node kinds `{first}` and `{second}` would share a visitor method")]
    ConflictingKinds { first: String, second: String },
    #[error("field `{field}` is declared more than once in `{kind}`")]
    DuplicateField { kind: String, field: String },
    #[error("category `{base_name}` declares no node kinds")]
    EmptyRequest { base_name: String },
}
