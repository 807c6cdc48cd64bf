use anyhow::Result;
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

use crate::constants::{FPM_REPO_NAME, FPM_REPO_OWNER, LATEST, NO_TOKEN, RELEASES_LATEST};
use crate::download::build_agent;
use crate::errors::SetupError;

#[derive(Debug, Deserialize)]
struct LatestReleaseApiResponse {
    tag_name: String,
}

/// Turns the raw `github-token` input into an optional credential.
pub fn github_token(input: &str) -> Option<&str> {
    let token = input.trim();
    if token.is_empty() || token == NO_TOKEN {
        None
    } else {
        Some(token)
    }
}

pub fn latest_release_api_url(api_base_url: &str) -> String {
    format!(
        "{}/repos/{FPM_REPO_OWNER}/{FPM_REPO_NAME}/{RELEASES_LATEST}",
        api_base_url.trim_end_matches('/')
    )
}

/// Returns `selector` unchanged unless it is `latest`, in which case the tag of the
/// most recent fpm release is looked up with the given token.
pub fn resolve_version(
    selector: &str,
    token: Option<&str>,
    api_base_url: &str,
) -> Result<String, SetupError> {
    if selector != LATEST {
        return Ok(selector.to_string());
    }

    let Some(token) = token else {
        return Err(SetupError::Configuration(
            "To fetch the latest fpm version, please supply a github token. \
             Alternatively you can specify the fpm release version manually."
                .to_string(),
        ));
    };

    get_latest_tag(&latest_release_api_url(api_base_url), token)
        .map_err(|e| SetupError::Resolution(e.to_string()))
}

fn get_latest_tag(url: &str, token: &str) -> Result<String> {
    debug!("Querying {}", url);
    let handle = build_agent()?;
    let resp = handle
        .get(url)
        .set("Accept", "application/vnd.github+json")
        .set("Authorization", &format!("Bearer {token}"))
        .call()?;

    let mut data = Vec::new();
    resp.into_reader().read_to_end(&mut data)?;
    let response: LatestReleaseApiResponse = serde_json::from_slice(&data)?;

    if response.tag_name.is_empty() {
        anyhow::bail!("release has an empty tag name");
    }
    Ok(response.tag_name)
}
