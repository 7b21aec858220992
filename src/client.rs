//! A client for a single GitHub organization.
//!
//! The organization metadata and its repository listing are fetched lazily and
//! cached on the client, so each is requested at most once per instance.

use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::{
    error::{Error, Result, type_name},
    transport::{JsonTransport, ReqwestTransport},
    utils::{Memo, access_nested_map},
};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const ORG_URL: &str = "https://api.github.com/orgs/{org}";

pub struct GithubOrgClient<T: JsonTransport = ReqwestTransport> {
    org_name: String,
    api_base: String,
    transport: T,
    org: Memo<Value>,
    repos_payload: Memo<Value>,
}

impl GithubOrgClient {
    pub fn new(org_name: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(org_name, ReqwestTransport::new()?))
    }

    /// Whether `repo` carries a `license.key` equal to `license_key`.
    ///
    /// A missing or `null` license counts as not matching.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .ok()
            .and_then(Value::as_str)
            == Some(license_key)
    }
}

impl<T: JsonTransport> GithubOrgClient<T> {
    pub fn with_transport(org_name: impl Into<String>, transport: T) -> Self {
        Self {
            org_name: org_name.into(),
            api_base: DEFAULT_API_BASE.to_owned(),
            transport,
            org: Memo::new(),
            repos_payload: Memo::new(),
        }
    }

    /// Points the client at another API root, e.g. a GitHub Enterprise host.
    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn org_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)?;

        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("orgs")
            .push(&self.org_name);

        Ok(url)
    }

    /// The organization's metadata, fetched on first access.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| async move {
                let url = self.org_url()?;
                debug!(org = %self.org_name, "fetching organization metadata");

                self.transport.get_json(url.as_str()).await
            })
            .await
    }

    pub async fn public_repos_url(&self) -> Result<&str> {
        let org = self.org().await?;
        let url = access_nested_map(org, &["repos_url"])?;

        url.as_str().ok_or_else(|| Error::UnexpectedType {
            field: "repos_url".to_owned(),
            expected: "a string",
            found: type_name(url),
        })
    }

    /// The raw repository listing, fetched on first access.
    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init(|| async move {
                let url = self.public_repos_url().await?;
                debug!(org = %self.org_name, "fetching repositories from {url}");

                self.transport.get_json(url).await
            })
            .await
    }

    /// Names of the organization's repositories in listing order, restricted to
    /// those whose license key equals `license` when one is given.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos_payload().await?;

        let repos = payload.as_array().ok_or_else(|| Error::UnexpectedType {
            field: "repos".to_owned(),
            expected: "an array",
            found: type_name(payload),
        })?;

        trace!("{} repositories in payload", repos.len());

        repos
            .iter()
            .filter(|repo| license.is_none_or(|key| GithubOrgClient::has_license(repo, key)))
            .map(|repo| {
                let name = access_nested_map(repo, &["name"])?;

                name.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| Error::UnexpectedType {
                        field: "name".to_owned(),
                        expected: "a string",
                        found: type_name(name),
                    })
            })
            .collect()
    }
}
