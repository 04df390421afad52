use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error that can be returned by [`crate::Stack`] methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value was requested from a container holding none, and no default was supplied.
    #[error("pop from an empty {container}")]
    EmptyContainer {
        /// Type name of the container.
        container: &'static str,
    },
}
