use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dbe_lib::{
    extract_blueprint, parse_resource, validate_node, DbeError, DbeOutput, ExtractOutput,
    ExtractStats, ExtractionBundle, FigmaAuth, FigmaClient, FigmaRestHost, ParsedResource,
    ResourceDescriptor, ResourceKind, SceneHost, SceneNode, DBE_OUTPUT_VERSION,
};

use crate::cli::{OutputFormat, ResourceType};
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_config, resolve_extract_settings};

/// Run the extract command.
#[allow(clippy::too_many_arguments)]
pub async fn run_extract(
    config_path: Option<PathBuf>,
    input: String,
    input_type: Option<ResourceType>,
    node_id: Option<String>,
    no_svg: bool,
    validate: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output),
    };
    let settings = resolve_extract_settings(no_svg, &config);
    log_effective_config(config_path.as_deref(), &settings);

    tracing::debug!("parsing input resource");
    let resource = match parse_resource(&input, input_type.map(Into::into)) {
        Ok(res) => res,
        Err(err) => return render_error(DbeError::Config(err.to_string()), format, output),
    };

    let (host, root, node_id) = match open_scene(&resource, node_id, &config).await {
        Ok(parts) => parts,
        Err(err) => return render_error(err, format, output),
    };

    let extraction = extract_blueprint(host.as_ref(), &root, &settings.extraction).await;
    let fidelity = validate.then(|| validate_node(&root, &extraction.root, &settings.fidelity));
    if let Some(report) = &fidelity {
        tracing::info!(
            overall = report.overall,
            pixel_perfect = report.pixel_perfect,
            "root fidelity scored"
        );
    }

    let stats = ExtractStats {
        nodes: extraction.root.count_nodes(),
        warnings: extraction.diagnostics.warning_count(),
    };
    let body = DbeOutput::Extract(ExtractOutput {
        version: DBE_OUTPUT_VERSION.to_string(),
        source: ResourceDescriptor {
            kind: resource.kind,
            value: resource.value,
            node_id,
        },
        root: extraction.root,
        diagnostics: extraction.diagnostics,
        stats,
        fidelity,
    });
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(DbeError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

/// Build the host and decoded scene for a parsed resource.
async fn open_scene(
    resource: &ParsedResource,
    node_override: Option<String>,
    config: &dbe_lib::Config,
) -> Result<(Box<dyn SceneHost>, SceneNode, Option<String>), DbeError> {
    match resource.kind {
        ResourceKind::Bundle => {
            let (host, root) = ExtractionBundle::load(Path::new(&resource.value))?.into_parts()?;
            tracing::debug!(root = %root.id, "loaded local scene");
            Ok((Box::new(host), root, None))
        }
        ResourceKind::Figma => {
            let info = resource.figma_info.as_ref().ok_or_else(|| {
                DbeError::Config(format!(
                    "Figma URL missing file key in '{}'",
                    resource.value
                ))
            })?;
            let node_id = node_override
                .or_else(|| info.node_id.clone())
                .ok_or_else(|| {
                    DbeError::Config(
                        "Figma extraction needs a node-id in the URL or --node-id".to_string(),
                    )
                })?;
            let auth = FigmaAuth::from_env().ok_or_else(|| {
                DbeError::Config("FIGMA_TOKEN environment variable is required".to_string())
            })?;
            let client = FigmaClient::from_config(auth, &config.figma)?;
            let (host, root) = FigmaRestHost::load(client, &info.file_key, &node_id).await?;
            Ok((Box::new(host), root, Some(node_id)))
        }
    }
}
