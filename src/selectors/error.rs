use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("track reference is nested deeper than {depth} levels")]
    DepthExceeded { depth: usize },
}
