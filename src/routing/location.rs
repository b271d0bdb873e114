//! Navigable locations.
//!
//! A location is what the browsing context hands the router: a path with an
//! optional query and fragment. Targets starting with `/` are taken literally,
//! so `//simulation` is a path and never a host. Other targets are resolved
//! against the site root, so `simulation?x=1` and `/simulation?x=1` are the
//! same location.

use serde::Serialize;
use url::Url;

use crate::routing::RouteError;

const BASE: &str = "http://shell.local/";

/// A parsed navigable location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Location {
    /// Parse a navigation target. Only the path, query and fragment are kept.
    pub fn parse(input: &str) -> Result<Self, RouteError> {
        if input.starts_with('/') {
            let (rest, fragment) = match input.split_once('#') {
                Some((rest, fragment)) => (rest, Some(fragment.to_string())),
                None => (input, None),
            };
            let (path, query) = match rest.split_once('?') {
                Some((path, query)) => (path, Some(query.to_string())),
                None => (rest, None),
            };
            return Ok(Self {
                path: canonical_path(path)?,
                query,
                fragment,
            });
        }

        let url = base(input)?
            .join(input)
            .map_err(|e| invalid(input, e))?;

        Ok(Self {
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        })
    }

    /// Build from an already split request target, as received over HTTP.
    pub fn from_parts(path: &str, query: Option<&str>) -> Result<Self, RouteError> {
        Ok(Self {
            path: canonical_path(path)?,
            query: query.map(str::to_string),
            fragment: None,
        })
    }

    /// Location at the site root.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
            fragment: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// Percent-encoded form of an absolute path, as it appears in a location.
///
/// A route path only ever matches if it is already in this form.
pub fn canonical_path(path: &str) -> Result<String, RouteError> {
    let mut url = base(path)?;
    url.set_path(path);
    Ok(url.path().to_string())
}

/// True if `path` is absolute, carries no query or fragment, and is already
/// in canonical form.
pub fn is_canonical_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains(['?', '#'])
        && canonical_path(path).is_ok_and(|canonical| canonical == path)
}

fn base(input: &str) -> Result<Url, RouteError> {
    Url::parse(BASE).map_err(|e| invalid(input, e))
}

fn invalid(input: &str, e: url::ParseError) -> RouteError {
    RouteError::InvalidLocation {
        input: input.to_string(),
        reason: e.to_string(),
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(q) = &self.query {
            write!(f, "?{}", q)?;
        }
        if let Some(frag) = &self.fragment {
            write!(f, "#{}", frag)?;
        }
        Ok(())
    }
}
