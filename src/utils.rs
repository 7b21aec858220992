//! Small helpers the client is built from: walking nested JSON, fetching JSON, and
//! caching a lazily computed value per instance.

use std::future::Future;

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, trace};

use crate::error::{Error, Result, type_name};

/// Follows `path` through nested JSON objects and returns the value at its end.
///
/// An empty path returns `map` itself. Fails on the first key that cannot be
/// resolved, either because it is absent or because the value being indexed is
/// not an object.
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value> {
    path.iter().try_fold(map, |current, &key| {
        let object = current.as_object().ok_or_else(|| Error::NotAMapping {
            key: key.to_owned(),
            found: type_name(current),
        })?;

        object
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    })
}

/// Issues a single GET to `url` and parses the body as JSON.
pub async fn get_json(url: &str) -> Result<Value> {
    debug!("GET {url}");

    let json = reqwest::get(url).await?.json().await?;

    Ok(json)
}

/// A value computed on first access and kept for the lifetime of its owner.
#[derive(Debug)]
pub struct Memo<T> {
    cell: OnceCell<T>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_cached(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get_or_init<F, Fut>(&self, init: F) -> &T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(value) = self.cell.get() {
            trace!("memo hit");
            return value;
        }

        self.cell.get_or_init(init).await
    }

    /// Like [`Memo::get_or_init`], but nothing is stored when `init` fails, so
    /// the next access tries again.
    pub async fn get_or_try_init<E, F, Fut>(&self, init: F) -> std::result::Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        if let Some(value) = self.cell.get() {
            trace!("memo hit");
            return Ok(value);
        }

        self.cell.get_or_try_init(init).await
    }
}
