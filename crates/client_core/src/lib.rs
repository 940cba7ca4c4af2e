use reqwest::Client;
use shared::{
    domain::Gender,
    protocol::{
        GenerateNamesRequest, GenerateNamesResponse, GeneratePhotoRequest, GeneratePhotoResponse,
    },
};
use thiserror::Error;
use tracing::{debug, warn};

pub mod config;

/// Number of names requested per generation call. The collaborator is free to
/// return fewer or more; the caller displays whatever comes back.
pub const NAME_BATCH_SIZE: u32 = 10;

/// Fixed rendering style sent with every portrait request.
pub const PORTRAIT_STYLE: &str = "photorealistic portrait";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport failure calling {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The collaborator answered but flagged the request as unsuccessful.
    #[error("collaborator declined {endpoint} request")]
    Declined { endpoint: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameBatch {
    pub names: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPortrait {
    pub image_url: String,
    /// Age the portrait was generated for, captured at request time so the
    /// caption stays correct even if the slider moves afterwards.
    pub age: u8,
}

/// HTTP client for the BabyVision generation backend. Holds the resolved base
/// URL for the lifetime of the process; both flows share one instance.
pub struct BabyVisionClient {
    http: Client,
    base_url: String,
    api_base: String,
}

impl BabyVisionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_base = format!("{base_url}/api");
        Self {
            http: Client::new(),
            base_url,
            api_base,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub async fn generate_names(&self, user_input: &str) -> Result<NameBatch, GenerationError> {
        const ENDPOINT: &str = "generate-names";

        let body: GenerateNamesResponse = self
            .post_json(
                ENDPOINT,
                &GenerateNamesRequest {
                    user_input: user_input.to_string(),
                    count: NAME_BATCH_SIZE,
                },
            )
            .await?;

        if !body.success {
            warn!(endpoint = ENDPOINT, "collaborator reported failure");
            return Err(GenerationError::Declined { endpoint: ENDPOINT });
        }

        debug!(
            endpoint = ENDPOINT,
            names = body.names.len(),
            suggestions = body.suggestions.len(),
            "name batch received"
        );
        Ok(NameBatch {
            names: body.names,
            suggestions: body.suggestions,
        })
    }

    pub async fn generate_photo(
        &self,
        age: u8,
        gender: Gender,
    ) -> Result<GeneratedPortrait, GenerationError> {
        const ENDPOINT: &str = "generate-photo";

        let body: GeneratePhotoResponse = self
            .post_json(
                ENDPOINT,
                &GeneratePhotoRequest {
                    age,
                    gender,
                    style: PORTRAIT_STYLE.to_string(),
                },
            )
            .await?;

        if !body.success {
            warn!(endpoint = ENDPOINT, "collaborator reported failure");
            return Err(GenerationError::Declined { endpoint: ENDPOINT });
        }

        debug!(endpoint = ENDPOINT, age, %gender, "portrait reference received");
        Ok(GeneratedPortrait {
            image_url: body.image_url,
            age,
        })
    }

    /// Downloads the generated portrait bytes for local display. Relative
    /// references are resolved against the backend base URL.
    pub async fn fetch_image_bytes(&self, image_url: &str) -> Result<Vec<u8>, GenerationError> {
        const ENDPOINT: &str = "image-download";

        let url = if image_url.starts_with("http://") || image_url.starts_with("https://") {
            image_url.to_string()
        } else {
            format!("{}/{}", self.base_url, image_url.trim_start_matches('/'))
        };

        let bytes = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| GenerationError::Transport {
                endpoint: ENDPOINT,
                source,
            })?
            .bytes()
            .await
            .map_err(|source| GenerationError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;

        Ok(bytes.to_vec())
    }

    async fn post_json<Req, Res>(
        &self,
        endpoint: &'static str,
        request: &Req,
    ) -> Result<Res, GenerationError>
    where
        Req: serde::Serialize,
        Res: serde::de::DeserializeOwned,
    {
        let transport = |source| GenerationError::Transport { endpoint, source };

        self.http
            .post(format!("{}/{endpoint}", self.api_base))
            .json(request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(transport)?
            .json::<Res>()
            .await
            .map_err(transport)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
