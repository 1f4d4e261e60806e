use thiserror::Error;

/// Structural errors found while compiling an element tree.
///
/// Every variant aborts the whole compilation; no partial document is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("The root element must be <document>, found {found}")]
    RootElement { found: String },

    #[error("<document> must be the root element and can only appear once")]
    DuplicateRoot,

    #[error("<{tag}> can only appear as one of the immediate descendents of <document>")]
    TopLevelPlacement { tag: String },

    #[error(
        "Only <header>, <content> and <footer> can be immediate descendents of <document>, found {found}"
    )]
    UnexpectedTopLevelChild { found: String },

    #[error("Unknown tag <{name}>")]
    UnknownTag { name: String },
}
