use serde::Deserialize;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_BASE_PATH: &str = "/vivo_app";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BasePathError {
    #[error("Base path must start with '/', got {0:?}")]
    MissingLeadingSlash(String),
    #[error("Base path must name at least one segment; '/' would shadow every route")]
    Root,
    #[error("Base path {0:?} contains an empty, '.' or '..' segment")]
    BadSegment(String),
    #[error("Base path {0:?} must not carry a query or fragment")]
    QueryOrFragment(String),
}

/// URL prefix under which the built assets and the client-side routing fallback live.
///
/// Always starts with `/` and never ends with one, so it can be handed to
/// [`axum::Router::nest_service`] as-is. Bundlers are configured with the same
/// value plus a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct BasePath(String);

impl BasePath {
    pub fn parse(raw: &str) -> Result<Self, BasePathError> {
        if !raw.starts_with('/') {
            return Err(BasePathError::MissingLeadingSlash(raw.to_owned()));
        }
        if raw.contains(['?', '#']) {
            return Err(BasePathError::QueryOrFragment(raw.to_owned()));
        }

        let trimmed = raw.strip_suffix('/').unwrap_or(raw);
        if trimmed.is_empty() {
            return Err(BasePathError::Root);
        }
        if trimmed[1..]
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(BasePathError::BadSegment(raw.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self(DEFAULT_BASE_PATH.to_owned())
    }
}

impl TryFrom<String> for BasePath {
    type Error = BasePathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
