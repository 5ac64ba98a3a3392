use anyhow::{Context, Result};
use clap::Args;
use framecast_common::classify::collect_rasterization_candidates;
use framecast_scenegraph::parse_scene;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CandidatesArgs {
    /// Scene-graph JSON export to inspect
    pub input: PathBuf,
}

/// Print the node ids an external image-resolution step must fetch
/// substitute rasters for, as a JSON array.
pub fn candidates(args: CandidatesArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let root = parse_scene(&source)
        .with_context(|| format!("cannot parse {}", args.input.display()))?;

    let ids = collect_rasterization_candidates(&root);
    println!("{}", serde_json::to_string_pretty(&ids)?);

    Ok(())
}
