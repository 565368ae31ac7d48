//! Figma REST adapter for the [`SceneHost`] port.

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use super::{ComponentRef, HostError, SceneHost, StyleRef};
use crate::config::FigmaConfig;
use crate::error::{DbeError, Result};
use crate::scene::{decode_node, FontName, RawNode, SceneNode};

#[derive(Debug, Clone)]
pub enum FigmaAuth {
    PersonalAccessToken(String),
    OAuthToken(String),
}

impl FigmaAuth {
    pub fn from_env() -> Option<Self> {
        if let Ok(token) = std::env::var("FIGMA_TOKEN") {
            if !token.is_empty() {
                return Some(Self::PersonalAccessToken(token));
            }
        }

        if let Ok(token) = std::env::var("FIGMA_OAUTH_TOKEN") {
            if !token.is_empty() {
                return Some(Self::OAuthToken(token));
            }
        }

        None
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            FigmaAuth::PersonalAccessToken(token) => builder.header("X-FIGMA-TOKEN", token),
            FigmaAuth::OAuthToken(token) => builder.bearer_auth(token),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: Client,
    auth: FigmaAuth,
    base_url: Url,
}

impl FigmaClient {
    pub fn new(auth: FigmaAuth) -> Result<Self> {
        Self::from_config(auth, &FigmaConfig::default())
    }

    pub fn from_config(auth: FigmaAuth, config: &FigmaConfig) -> Result<Self> {
        Self::with_base_url_and_timeout(auth, &config.base_url, config.timeout)
    }

    pub fn with_base_url_and_timeout(
        auth: FigmaAuth,
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DbeError::Network)?;

        Ok(Self {
            http,
            auth,
            base_url,
        })
    }

    pub async fn fetch_nodes(
        &self,
        file_key: &str,
        node_ids: &[String],
    ) -> Result<FigmaNodesResponse> {
        let ids = joined_ids(node_ids)?;
        let url = self.endpoint(&format!("/v1/files/{file_key}/nodes?ids={ids}"))?;
        self.get_json(url).await
    }

    /// Render `node_id` as SVG and return where the markup can be downloaded.
    pub async fn export_svg_url(
        &self,
        file_key: &str,
        node_id: &str,
        options: ImageExportOptions,
    ) -> Result<String> {
        if options.scale <= 0.0 {
            return Err(DbeError::Config(format!(
                "SVG export scale must be positive (got {})",
                options.scale
            )));
        }
        let url = self.endpoint(&format!(
            "/v1/images/{file_key}?ids={node_id}&format=svg&scale={}&svg_include_id={}",
            options.scale, options.svg_include_id,
        ))?;

        let mut rendered: FigmaImageResponse = self.get_json(url).await?;
        if let Some(err) = rendered.err {
            return Err(DbeError::figma_api(None, err));
        }
        rendered
            .images
            .remove(node_id)
            .flatten()
            .ok_or_else(|| DbeError::figma_api(None, format!("no SVG rendered for node {node_id}")))
    }

    /// Fetch exported markup. Export URLs are pre-signed, so no auth header is sent.
    pub async fn download_text(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(DbeError::figma_api(
                Some(status),
                format!("SVG download returned {}: {body}", status.as_u16()),
            ))
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.auth.apply(self.http.get(url)).send().await?;
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DbeError::figma_api(
                Some(status),
                error_message(status, &body, retry_after.as_deref()),
            ));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn joined_ids(node_ids: &[String]) -> Result<String> {
    if node_ids.is_empty() {
        return Err(DbeError::Config("no Figma node ids to request".into()));
    }
    Ok(node_ids.join(","))
}

#[derive(Debug, Deserialize)]
pub struct FigmaNodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, Option<FigmaNodeContainer>>,
}

#[derive(Debug, Deserialize)]
pub struct FigmaNodeContainer {
    pub document: Value,
    #[serde(default)]
    pub components: HashMap<String, FigmaComponentMeta>,
    #[serde(default)]
    pub styles: HashMap<String, StyleRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FigmaComponentMeta {
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub remote: bool,
}

#[derive(Debug, Deserialize)]
pub struct FigmaImageResponse {
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
    #[serde(default)]
    pub err: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImageExportOptions {
    pub scale: f32,
    pub svg_include_id: bool,
}

impl Default for ImageExportOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            svg_include_id: false,
        }
    }
}

fn error_message(status: StatusCode, body: &str, retry_after: Option<&str>) -> String {
    let fallback = format!("Figma API returned status {}", status.as_u16());
    let parsed = serde_json::from_str::<Value>(body).ok();
    let from_body = parsed
        .as_ref()
        .and_then(|value| value.get("err").or_else(|| value.get("error")))
        .and_then(Value::as_str)
        .map(str::to_owned);

    match (status, retry_after, from_body) {
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), Some(msg)) => {
            format!("{msg} (rate limited, retry after {retry}s)")
        }
        (StatusCode::TOO_MANY_REQUESTS, Some(retry), None) => {
            format!("rate limited by Figma API, retry after {retry}s")
        }
        (_, _, Some(msg)) => msg,
        _ => fallback,
    }
}

fn to_host_error(err: DbeError) -> HostError {
    match err {
        DbeError::FigmaApi {
            status: Some(status),
            message,
        } => HostError::Api {
            status: status.as_u16(),
            message,
        },
        other => HostError::Request(other.to_string()),
    }
}

/// Host backed by one fetched Figma node document and its style/component tables.
#[derive(Debug, Clone)]
pub struct FigmaRestHost {
    client: FigmaClient,
    file_key: String,
    export: ImageExportOptions,
    styles: HashMap<String, StyleRef>,
    /// Keyed by instance node id.
    components: HashMap<String, ComponentRef>,
}

impl FigmaRestHost {
    /// Fetch `node_id` from `file_key` and build a host over the response tables.
    pub async fn load(
        client: FigmaClient,
        file_key: &str,
        node_id: &str,
    ) -> Result<(Self, SceneNode)> {
        tracing::info!(file_key, node_id, "fetching Figma node");
        let mut response = client.fetch_nodes(file_key, &[node_id.to_string()]).await?;
        let container = response
            .nodes
            .remove(node_id)
            .flatten()
            .ok_or_else(|| DbeError::figma_api(None, format!("node {node_id} not found in file")))?;
        Self::from_container(client, file_key, container)
    }

    pub fn from_container(
        client: FigmaClient,
        file_key: &str,
        container: FigmaNodeContainer,
    ) -> Result<(Self, SceneNode)> {
        let raw: RawNode = serde_json::from_value(container.document)?;
        let root = decode_node(raw);

        let mut components = HashMap::new();
        collect_instance_components(&root, &container.components, &mut components);

        let host = Self {
            client,
            file_key: file_key.to_string(),
            export: ImageExportOptions::default(),
            styles: container.styles,
            components,
        };
        Ok((host, root))
    }
}

fn collect_instance_components(
    node: &SceneNode,
    table: &HashMap<String, FigmaComponentMeta>,
    out: &mut HashMap<String, ComponentRef>,
) {
    if let Some(component_id) = node.instance().and_then(|i| i.main_component_id.as_deref()) {
        if let Some(meta) = table.get(component_id) {
            out.insert(
                node.id.clone(),
                ComponentRef {
                    id: Some(component_id.to_string()),
                    key: meta.key.clone(),
                    name: meta.name.clone(),
                    remote: meta.remote,
                },
            );
        }
    }
    for child in node.children() {
        collect_instance_components(child, table, out);
    }
}

#[async_trait]
impl SceneHost for FigmaRestHost {
    async fn style_name(&self, style_id: &str) -> std::result::Result<StyleRef, HostError> {
        self.styles
            .get(style_id)
            .cloned()
            .ok_or_else(|| HostError::NotFound(format!("style {style_id}")))
    }

    async fn main_component(
        &self,
        instance_id: &str,
    ) -> std::result::Result<ComponentRef, HostError> {
        self.components
            .get(instance_id)
            .cloned()
            .ok_or_else(|| HostError::NotFound(format!("main component of {instance_id}")))
    }

    async fn load_font(&self, _font: &FontName) -> std::result::Result<(), HostError> {
        Ok(())
    }

    async fn export_svg(&self, node_id: &str) -> std::result::Result<String, HostError> {
        let url = self
            .client
            .export_svg_url(&self.file_key, node_id, self.export)
            .await
            .map_err(to_host_error)?;
        self.client.download_text(&url).await.map_err(to_host_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::env;

    fn auth_headers(auth: &FigmaAuth) -> reqwest::header::HeaderMap {
        auth.apply(Client::new().get("https://api.figma.com/v1/me"))
            .build()
            .expect("request")
            .headers()
            .clone()
    }

    #[test]
    fn personal_access_token_sets_figma_header() {
        let headers = auth_headers(&FigmaAuth::PersonalAccessToken("secret".into()));
        assert_eq!(headers.get("X-FIGMA-TOKEN").unwrap(), "secret");
    }

    #[test]
    fn oauth_token_uses_bearer_auth() {
        let headers = auth_headers(&FigmaAuth::OAuthToken("oauth_secret".into()));
        assert_eq!(
            headers.get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer oauth_secret"
        );
    }

    #[test]
    fn node_ids_are_joined_and_must_not_be_empty() {
        assert!(matches!(joined_ids(&[]), Err(DbeError::Config(_))));
        let ids = joined_ids(&["1:2".to_string(), "3:4".to_string()]).expect("ids");
        assert_eq!(ids, "1:2,3:4");
    }

    #[test]
    fn rate_limit_message_mentions_retry_after() {
        let msg = error_message(StatusCode::TOO_MANY_REQUESTS, "{}", Some("30"));
        assert!(msg.contains("retry after 30s"), "got: {msg}");

        let msg = error_message(StatusCode::FORBIDDEN, r#"{"err":"Invalid token"}"#, None);
        assert_eq!(msg, "Invalid token");
    }

    #[test]
    fn api_errors_keep_their_status() {
        let err = to_host_error(DbeError::figma_api(Some(StatusCode::NOT_FOUND), "missing"));
        assert_eq!(
            err,
            HostError::Api {
                status: 404,
                message: "missing".into()
            }
        );
    }

    #[tokio::test]
    async fn resolves_styles_and_instance_components_from_response_tables() {
        let container: FigmaNodeContainer = serde_json::from_value(json!({
            "document": {
                "id": "1:1", "name": "Screen", "type": "FRAME",
                "children": [
                    {"id": "1:2", "name": "Primary", "type": "INSTANCE", "componentId": "9:1"}
                ]
            },
            "components": {"9:1": {"key": "abc", "name": "Button/Primary", "remote": false}},
            "styles": {"S:1": {"key": "k", "name": "Brand/Blue", "styleType": "FILL"}}
        }))
        .expect("container");

        let client = FigmaClient::new(FigmaAuth::PersonalAccessToken("t".into())).expect("client");
        let (host, root) = FigmaRestHost::from_container(client, "FILE", container).expect("host");

        assert_eq!(root.children().len(), 1);
        let style = host.style_name("S:1").await.expect("style");
        assert_eq!(style.name, "Brand/Blue");
        assert_eq!(style.style_type.as_deref(), Some("FILL"));

        let component = host.main_component("1:2").await.expect("component");
        assert_eq!(component.name, "Button/Primary");
        assert_eq!(component.id.as_deref(), Some("9:1"));

        assert!(matches!(
            host.main_component("1:1").await,
            Err(HostError::NotFound(_))
        ));
        assert!(host
            .load_font(&FontName {
                family: "Inter".into(),
                style: "Regular".into()
            })
            .await
            .is_ok());
    }

    #[test]
    fn auth_from_env_prefers_figma_token() {
        let _guard = EnvGuard::new();
        env::set_var("FIGMA_TOKEN", "pat_token");
        env::set_var("FIGMA_OAUTH_TOKEN", "oauth_token");

        let auth = FigmaAuth::from_env().expect("auth from env");
        match auth {
            FigmaAuth::PersonalAccessToken(token) => assert_eq!(token, "pat_token"),
            _ => panic!("expected personal access token"),
        }
    }

    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            env::remove_var("FIGMA_TOKEN");
            env::remove_var("FIGMA_OAUTH_TOKEN");
        }
    }
}
