use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// Where a scene comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Local JSON: a bare scene document or an extraction bundle.
    Bundle,
    Figma,
}

#[derive(Debug, Clone)]
pub struct ParsedResource {
    pub kind: ResourceKind,
    pub value: String,
    pub figma_info: Option<FigmaInfo>,
}

#[derive(Debug, Clone)]
pub struct FigmaInfo {
    pub file_key: String,
    pub node_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResourceParseError {
    #[error("Invalid URL '{value}': {message}. Hint: include http(s):// and ensure the URL is well-formed.")]
    InvalidUrl { value: String, message: String },
    #[error("Figma URL missing file key in '{url}'. Hint: use https://www.figma.com/file/<FILE_KEY>/... and node-id if needed.")]
    FigmaMissingFileKey { url: String },
    #[error("Local file not found: {path}. Hint: check the path relative to the current working directory or use an absolute path.")]
    FileNotFound { path: String },
    #[error("Unsupported URL '{url}'. Only Figma file/design URLs can be fetched; save other scenes as local JSON.")]
    UnsupportedUrl { url: String },
    #[error("Unsupported file extension '{extension}'. Supported extensions: {supported}.")]
    UnsupportedExtension {
        extension: String,
        supported: String,
    },
}

const BUNDLE_EXTENSIONS: &[&str] = &["json"];

pub fn parse_resource(
    value: &str,
    override_type: Option<ResourceKind>,
) -> Result<ParsedResource, ResourceParseError> {
    if let Some(kind) = override_type {
        return Ok(ParsedResource {
            kind,
            value: value.to_string(),
            figma_info: if kind == ResourceKind::Figma {
                parse_figma_url(value).ok()
            } else {
                None
            },
        });
    }

    if value.starts_with("http://") || value.starts_with("https://") {
        parse_url_resource(value)
    } else {
        parse_local_resource(value)
    }
}

fn parse_url_resource(value: &str) -> Result<ParsedResource, ResourceParseError> {
    let url = Url::parse(value).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let host = url.host_str().unwrap_or("");
    if host.contains("figma.com") {
        let figma_info = parse_figma_url(value)?;
        Ok(ParsedResource {
            kind: ResourceKind::Figma,
            value: value.to_string(),
            figma_info: Some(figma_info),
        })
    } else {
        Err(ResourceParseError::UnsupportedUrl {
            url: value.to_string(),
        })
    }
}

fn parse_figma_url(value: &str) -> Result<FigmaInfo, ResourceParseError> {
    let url = Url::parse(value).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let path_segments: Vec<&str> = url.path_segments().map(|c| c.collect()).unwrap_or_default();

    let file_key = path_segments
        .iter()
        .position(|&s| s == "file" || s == "design")
        .and_then(|i| path_segments.get(i + 1))
        .map(|s| s.to_string())
        .ok_or_else(|| ResourceParseError::FigmaMissingFileKey {
            url: value.to_string(),
        })?;

    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| v.replace('-', ":"));

    Ok(FigmaInfo { file_key, node_id })
}

fn parse_local_resource(value: &str) -> Result<ParsedResource, ResourceParseError> {
    let path = Path::new(value);

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !BUNDLE_EXTENSIONS.contains(&extension.as_str()) {
        if extension.is_empty() {
            return Err(ResourceParseError::UnsupportedExtension {
                extension: "no extension".to_string(),
                supported: BUNDLE_EXTENSIONS.join(", "),
            });
        }

        return Err(ResourceParseError::UnsupportedExtension {
            extension,
            supported: BUNDLE_EXTENSIONS.join(", "),
        });
    }

    if !path.exists() {
        return Err(ResourceParseError::FileNotFound {
            path: path.to_string_lossy().into_owned(),
        });
    }

    let metadata = fs::metadata(path).map_err(|_| ResourceParseError::FileNotFound {
        path: path.to_string_lossy().into_owned(),
    })?;
    if !metadata.is_file() {
        return Err(ResourceParseError::FileNotFound {
            path: path.to_string_lossy().into_owned(),
        });
    }

    Ok(ParsedResource {
        kind: ResourceKind::Bundle,
        value: value.to_string(),
        figma_info: None,
    })
}
