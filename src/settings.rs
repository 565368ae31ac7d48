use std::path::Path;

use dbe_lib::{Config, DbeError, ExtractionConfig, FidelityConfig};

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedExtractSettings {
    pub extraction: ExtractionConfig,
    pub fidelity: FidelityConfig,
}

/// Merge CLI arguments with config file; `--no-svg` always wins.
pub fn resolve_extract_settings(cli_no_svg: bool, config: &Config) -> ResolvedExtractSettings {
    let mut extraction = config.extraction.clone();
    if cli_no_svg {
        extraction.export_svg = false;
    }
    ResolvedExtractSettings {
        extraction,
        fidelity: config.fidelity.clone(),
    }
}

/// Load config from a TOML/YAML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/dbe/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, DbeError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        DbeError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        DbeError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Log effective config (visible with --verbose).
pub fn log_effective_config(config_path: Option<&Path>, settings: &ResolvedExtractSettings) {
    tracing::debug!(
        "{}",
        format_effective_config(&settings.extraction, &settings.fidelity, config_path)
    );
}

/// Format effective config as a single-line string.
pub fn format_effective_config(
    extraction: &ExtractionConfig,
    fidelity: &FidelityConfig,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: host_timeout={}, export_svg={}, auto_line_height={:.2}, breakpoint_min_width={}, fidelity: pixel_perfect={:.1}, suggestions<{:.1}, position_tolerance={}",
        humantime_display(extraction.host_timeout),
        extraction.export_svg,
        extraction.auto_line_height_ratio,
        extraction.breakpoint_min_width,
        fidelity.pixel_perfect_threshold,
        fidelity.suggestion_threshold,
        fidelity.position_tolerance,
    )
}

fn humantime_display(duration: std::time::Duration) -> String {
    if duration.subsec_millis() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn resolve_extract_settings_prefers_config_when_flags_absent() {
        let cfg = Config {
            extraction: ExtractionConfig {
                host_timeout: Duration::from_secs(3),
                export_svg: true,
                ..ExtractionConfig::default()
            },
            fidelity: FidelityConfig {
                pixel_perfect_threshold: 80.0,
                ..FidelityConfig::default()
            },
            ..Config::default()
        };

        let resolved = resolve_extract_settings(false, &cfg);
        assert!(resolved.extraction.export_svg);
        assert_eq!(resolved.extraction.host_timeout, Duration::from_secs(3));
        assert_eq!(resolved.fidelity.pixel_perfect_threshold, 80.0);
    }

    #[test]
    fn no_svg_flag_overrides_config() {
        let resolved = resolve_extract_settings(true, &Config::default());
        assert!(!resolved.extraction.export_svg);
    }

    #[test]
    fn load_config_reports_the_offending_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dbe.toml");
        std::fs::write(&path, "[fidelity]\npixel_perfect_threshold = 150.0\n").expect("write");

        let err = load_config(Some(&path)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid config"), "got: {msg}");
        assert!(msg.contains("dbe.toml"), "got: {msg}");

        let missing = dir.path().join("missing.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn format_effective_config_includes_all_fields() {
        let summary = format_effective_config(
            &ExtractionConfig {
                host_timeout: Duration::from_millis(1500),
                ..ExtractionConfig::default()
            },
            &FidelityConfig::default(),
            Some(Path::new("dbe.toml")),
        );
        assert!(summary.contains("host_timeout=1500ms"));
        assert!(summary.contains("export_svg=true"));
        assert!(summary.contains("auto_line_height=1.20"));
        assert!(summary.contains("breakpoint_min_width=768"));
        assert!(summary.contains("pixel_perfect=95.0"));
        assert!(summary.contains("suggestions<90.0"));
        assert!(summary.contains("position_tolerance=0.1"));
        assert!(summary.contains("dbe.toml"));
    }
}
