//! Errors surfaced while building or rendering the sidebar.

use thiserror::Error;

use navkit_auth::AuthzError;
use navkit_core::{ConfigError, RouteError};

pub type MenuResult<T> = Result<T, MenuError>;

/// Any failure of the menu pipeline.
///
/// Nothing here is recovered locally: configuration errors stop startup,
/// authorization and routing errors fail the page render.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Authorization(#[from] AuthzError),

    #[error(transparent)]
    Route(#[from] RouteError),
}
