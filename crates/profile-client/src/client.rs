//! Client for the regional profile REST endpoints.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use armory_core::errors::{Error as CoreError, Result as CoreResult};
use armory_core::profile::{ProfileProviderTrait, RemoteCharacterSummary, RemoteGuildSummary};
use armory_core::reference::{PlayableClass, PlayableRace, RealmInfo, StaticDataProviderTrait};

use crate::error::{ProfileClientError, Result};
use crate::types::{
    flatten_roster, to_guild_summary, AccountProfileSummary, ApiErrorResponse,
    CharacterProfileSummary, ClassIndexResponse, RaceIndexResponse, RealmIndexResponse,
};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_LOG_BODY_CHARS: usize = 512;

/// Client for the remote account-profile service.
///
/// Hosts are per region (`https://{region}.api.blizzard.com`); an explicit
/// base URL overrides that for tests or proxies. The client carries no token
/// state; callers pass the bearer token per request.
#[derive(Debug, Clone)]
pub struct ProfileApiClient {
    client: reqwest::Client,
    base_url: Option<String>,
    locale: String,
}

impl ProfileApiClient {
    /// Create a client using the regional production hosts.
    pub fn new(locale: &str) -> Self {
        Self::with_base_url(None, locale)
    }

    /// Create a client with an explicit base URL override.
    pub fn with_base_url(base_url: Option<&str>, locale: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            locale: locale.to_string(),
        }
    }

    fn api_base(&self, region: &str) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => format!("https://{region}.api.blizzard.com"),
        }
    }

    /// Create headers for an API request.
    fn headers(&self, token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ProfileClientError::auth("Invalid access token format"))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    fn log_response(status: reqwest::StatusCode, body: &str) {
        if status.is_success() {
            debug!("API response status: {}", status);
            return;
        }

        let mut preview = body.chars().take(MAX_LOG_BODY_CHARS).collect::<String>();
        if body.chars().count() > MAX_LOG_BODY_CHARS {
            preview.push_str("...");
        }
        debug!("API response error ({}): {}", status, preview);
    }

    /// Parse a JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        Self::log_response(status, &body);

        if !status.is_success() {
            // Try to parse the structured error body
            if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                if let Some(detail) = error.detail {
                    return Err(ProfileClientError::api(status.as_u16(), detail));
                }
            }
            return Err(ProfileClientError::api(
                status.as_u16(),
                format!("Request failed: {body}"),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Failed to deserialize response. Body: {}, Error: {}",
                body,
                e
            );
            ProfileClientError::api(status.as_u16(), format!("Failed to parse response: {e}"))
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, token: &str, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .headers(self.headers(token)?)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Account profile summary for the token's own account.
    ///
    /// GET /profile/user/wow
    async fn account_profile(&self, token: &str, region: &str) -> Result<AccountProfileSummary> {
        let url = format!(
            "{}/profile/user/wow?namespace=profile-{}&locale={}",
            self.api_base(region),
            region,
            self.locale
        );
        debug!("Fetching account profile summary for region {region}");
        self.get_json(token, &url).await
    }

    /// Character profile summary for one character.
    ///
    /// GET /profile/wow/character/{realmSlug}/{name}
    async fn character_profile(
        &self,
        token: &str,
        region: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<CharacterProfileSummary> {
        // The service requires the lowercased character name in the path.
        let url = format!(
            "{}/profile/wow/character/{}/{}?namespace=profile-{}&locale={}",
            self.api_base(region),
            realm_slug,
            urlencoding::encode(&name.to_lowercase()),
            region,
            self.locale
        );
        self.get_json(token, &url).await
    }

    fn static_index_url(&self, region: &str, path: &str) -> String {
        format!(
            "{}/data/wow/{}/index?namespace=static-{}&locale={}",
            self.api_base(region),
            path,
            region,
            self.locale
        )
    }
}

/// Map a roster-level client failure onto the core taxonomy.
fn upstream_error(err: ProfileClientError) -> CoreError {
    if err.is_auth_error() {
        CoreError::Unauthorized
    } else {
        CoreError::Upstream(err.to_string())
    }
}

#[async_trait]
impl ProfileProviderTrait for ProfileApiClient {
    async fn fetch_account_roster(
        &self,
        token: &str,
        region: &str,
    ) -> CoreResult<Vec<RemoteCharacterSummary>> {
        let summary = self
            .account_profile(token, region)
            .await
            .map_err(upstream_error)?;
        Ok(flatten_roster(summary, region))
    }

    async fn fetch_character_detail(
        &self,
        token: &str,
        region: &str,
        realm_slug: &str,
        name: &str,
    ) -> CoreResult<Option<RemoteGuildSummary>> {
        match self
            .character_profile(token, region, realm_slug, name)
            .await
        {
            Ok(profile) => Ok(profile.guild.map(|guild| to_guild_summary(guild, region))),
            // An unknown character profile is "no guild", not a failure.
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(CoreError::Upstream(err.to_string())),
        }
    }
}

#[async_trait]
impl StaticDataProviderTrait for ProfileApiClient {
    async fn fetch_playable_classes(
        &self,
        token: &str,
        region: &str,
    ) -> CoreResult<Vec<PlayableClass>> {
        let url = self.static_index_url(region, "playable-class");
        let index: ClassIndexResponse = self.get_json(token, &url).await.map_err(upstream_error)?;
        Ok(index
            .classes
            .into_iter()
            .map(|class| PlayableClass {
                id: class.id,
                name: class.name,
            })
            .collect())
    }

    async fn fetch_playable_races(
        &self,
        token: &str,
        region: &str,
    ) -> CoreResult<Vec<PlayableRace>> {
        let url = self.static_index_url(region, "playable-race");
        let index: RaceIndexResponse = self.get_json(token, &url).await.map_err(upstream_error)?;
        Ok(index
            .races
            .into_iter()
            .map(|race| PlayableRace {
                id: race.id,
                name: race.name,
            })
            .collect())
    }

    async fn fetch_realms(&self, token: &str, region: &str) -> CoreResult<Vec<RealmInfo>> {
        let url = self.static_index_url(region, "realm");
        let index: RealmIndexResponse = self.get_json(token, &url).await.map_err(upstream_error)?;
        Ok(index
            .realms
            .into_iter()
            .map(|realm| RealmInfo {
                id: realm.id,
                name: realm.name,
                slug: realm.slug,
                region: region.to_string(),
            })
            .collect())
    }
}
