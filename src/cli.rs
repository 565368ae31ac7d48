use clap::{Parser, Subcommand, ValueEnum};
use dbe_lib::ResourceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbe")]
#[command(
    version,
    about = "Design Blueprint Extractor - Normalize design scene graphs into typed blueprints",
    long_about = "Design Blueprint Extractor (DBE)\n\nModes:\n- extract: build a blueprint tree from a local scene/bundle JSON file or a Figma URL.\n- validate: score a previously extracted blueprint against its source scene.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output (debug logs on stderr)")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML or YAML) for host timeouts, SVG export and fidelity thresholds; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a blueprint tree from a scene
    Extract {
        #[arg(long, help = "Input resource (local .json scene/bundle or Figma URL)")]
        input: String,

        #[arg(long, value_enum, help = "Override type detection for input")]
        input_type: Option<ResourceType>,

        #[arg(
            long,
            value_name = "ID",
            help = "Figma node id to extract (overrides the URL's node-id)"
        )]
        node_id: Option<String>,

        #[arg(long, help = "Skip SVG export even when the config enables it")]
        no_svg: bool,

        #[arg(
            long,
            help = "Score the root blueprint node against its source and include the report"
        )]
        validate: bool,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Score a blueprint against the scene it was extracted from
    Validate {
        #[arg(long, help = "Source scene or bundle JSON file")]
        scene: PathBuf,

        #[arg(long, help = "Output of a previous `dbe extract` run")]
        blueprint: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResourceType {
    Bundle,
    Figma,
}

impl From<ResourceType> for ResourceKind {
    fn from(rt: ResourceType) -> Self {
        match rt {
            ResourceType::Bundle => ResourceKind::Bundle,
            ResourceType::Figma => ResourceKind::Figma,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
