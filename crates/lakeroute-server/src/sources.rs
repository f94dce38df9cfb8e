//! Land and ice feature sources.
//!
//! A source is the built-in set, a local GeoJSON file or an HTTP URL. Loading
//! never fails outright: an unreadable or malformed source is logged and
//! replaced by the built-in set, and the substitution is recorded in the
//! returned [`SourceOrigin`].

use lakeroute_core::{
    builtin_ice, builtin_land, ice_from_collection, land_from_collection, FeatureCollection,
    IceFeature, LandFeature, RouteError,
};
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const BUILTIN: &str = "builtin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureSource {
    BuiltIn,
    File(PathBuf),
    Url(String),
}

impl FeatureSource {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(BUILTIN) {
            FeatureSource::BuiltIn
        } else if value.starts_with("http://") || value.starts_with("https://") {
            FeatureSource::Url(value.to_string())
        } else {
            FeatureSource::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for FeatureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureSource::BuiltIn => f.write_str(BUILTIN),
            FeatureSource::File(path) => write!(f, "{}", path.display()),
            FeatureSource::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{origin} is not a GeoJSON FeatureCollection: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<SourceError> for RouteError {
    fn from(err: SourceError) -> Self {
        RouteError::DataSource(err.to_string())
    }
}

/// Where a feature set actually came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOrigin {
    pub requested: String,
    pub loaded_from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl SourceOrigin {
    fn loaded(source: &FeatureSource) -> Self {
        Self {
            requested: source.to_string(),
            loaded_from: source.to_string(),
            fallback_reason: None,
        }
    }

    fn fell_back(source: &FeatureSource, reason: &RouteError) -> Self {
        Self {
            requested: source.to_string(),
            loaded_from: BUILTIN.to_string(),
            fallback_reason: Some(reason.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct SourceLoader {
    client: Client,
    timeout: Duration,
}

impl SourceLoader {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// Fetch and parse a collection. `None` for the built-in source.
    pub async fn fetch_collection(
        &self,
        source: &FeatureSource,
    ) -> Result<Option<FeatureCollection>, SourceError> {
        let (origin, bytes) = match source {
            FeatureSource::BuiltIn => return Ok(None),
            FeatureSource::File(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                (path.display().to_string(), bytes)
            }
            FeatureSource::Url(url) => {
                let response = self
                    .client
                    .get(url)
                    .timeout(self.timeout)
                    .send()
                    .await
                    .map_err(|source| SourceError::Http {
                        url: url.clone(),
                        source,
                    })?;
                if !response.status().is_success() {
                    return Err(SourceError::Status {
                        url: url.clone(),
                        status: response.status(),
                    });
                }
                let bytes = response.bytes().await.map_err(|source| SourceError::Http {
                    url: url.clone(),
                    source,
                })?;
                (url.clone(), bytes.to_vec())
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| SourceError::Parse { origin, source })
    }

    pub async fn load_ice(&self, source: &FeatureSource) -> (Vec<IceFeature>, SourceOrigin) {
        self.load_with_fallback(source, "ice", ice_from_collection, builtin_ice)
            .await
    }

    pub async fn load_land(&self, source: &FeatureSource) -> (Vec<LandFeature>, SourceOrigin) {
        self.load_with_fallback(source, "land", land_from_collection, builtin_land)
            .await
    }

    async fn load_with_fallback<T>(
        &self,
        source: &FeatureSource,
        kind: &str,
        convert: fn(&FeatureCollection) -> Vec<T>,
        builtin: fn() -> Vec<T>,
    ) -> (Vec<T>, SourceOrigin) {
        match self.fetch_collection(source).await {
            Ok(Some(collection)) => {
                let features = convert(&collection);
                tracing::info!(
                    "Loaded {} {} features from {}",
                    features.len(),
                    kind,
                    source
                );
                (features, SourceOrigin::loaded(source))
            }
            Ok(None) => (builtin(), SourceOrigin::loaded(source)),
            Err(err) => {
                let err = RouteError::from(err);
                tracing::warn!("{} source unavailable, using built-in set: {}", kind, err);
                (builtin(), SourceOrigin::fell_back(source, &err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lakeroute-{}-{}.geojson", name, uuid::Uuid::new_v4()))
    }

    fn loader() -> SourceLoader {
        SourceLoader::new(Duration::from_secs(1))
    }

    #[test]
    fn parses_source_strings() {
        assert_eq!(FeatureSource::parse("builtin"), FeatureSource::BuiltIn);
        assert_eq!(FeatureSource::parse(" BUILTIN "), FeatureSource::BuiltIn);
        assert_eq!(FeatureSource::parse(""), FeatureSource::BuiltIn);
        assert_eq!(
            FeatureSource::parse("https://example.org/ice.geojson"),
            FeatureSource::Url("https://example.org/ice.geojson".to_string())
        );
        assert_eq!(
            FeatureSource::parse("data/ice.geojson"),
            FeatureSource::File(PathBuf::from("data/ice.geojson"))
        );
    }

    #[tokio::test]
    async fn builtin_source_uses_static_sets() {
        let (ice, origin) = loader().load_ice(&FeatureSource::BuiltIn).await;
        assert_eq!(ice.len(), 8);
        assert_eq!(origin.loaded_from, BUILTIN);
        assert!(!origin.is_fallback());
    }

    #[tokio::test]
    async fn loads_ice_from_file() {
        let path = temp_path("ice");
        let doc = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "value": 65 },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-87.5, 44.0], [-86.5, 44.0], [-86.5, 45.0], [-87.5, 45.0], [-87.5, 44.0]]]
                }
            }]
        });
        tokio::fs::write(&path, doc.to_string()).await.unwrap();

        let source = FeatureSource::File(path.clone());
        let (ice, origin) = loader().load_ice(&source).await;
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(ice.len(), 1);
        assert_eq!(ice[0].value, 65.0);
        assert_eq!(origin.loaded_from, path.display().to_string());
        assert!(!origin.is_fallback());
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_builtin() {
        let source = FeatureSource::File(temp_path("missing"));
        let (ice, origin) = loader().load_ice(&source).await;
        assert_eq!(ice.len(), 8);
        assert_eq!(origin.loaded_from, BUILTIN);
        assert!(origin
            .fallback_reason
            .as_deref()
            .is_some_and(|reason| reason.starts_with("Feature source unavailable")));
    }

    #[tokio::test]
    async fn non_collection_document_falls_back() {
        let path = temp_path("feature");
        let doc = json!({ "type": "Feature", "properties": {}, "geometry": null });
        tokio::fs::write(&path, doc.to_string()).await.unwrap();

        let (land, origin) = loader().load_land(&FeatureSource::File(path.clone())).await;
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(land.len(), 8);
        assert!(origin.is_fallback());
    }

    #[tokio::test]
    async fn unreachable_url_falls_back() {
        let source = FeatureSource::Url("http://127.0.0.1:9/ice.geojson".to_string());
        let (ice, origin) = loader().load_ice(&source).await;
        assert_eq!(ice.len(), 8);
        assert!(origin.is_fallback());
    }
}
