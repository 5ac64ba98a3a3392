use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use framecast_common::ImageMap;
use framecast_compiler_css::compile_to_css;
use framecast_compiler_html::{compile_to_html, CompileOptions};
use framecast_scenegraph::{parse_image_map, parse_scene};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Scene-graph JSON export to compile
    pub input: PathBuf,

    /// Image map JSON (node id to raster URL), resolved beforehand
    #[arg(short, long)]
    pub images: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub out_dir: PathBuf,

    /// Stylesheet file name referenced from the HTML document
    #[arg(long, default_value = "styles.css")]
    pub stylesheet: String,

    /// Print both outputs to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

pub fn compile(args: CompileArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let root = parse_scene(&source)
        .with_context(|| format!("cannot parse {}", args.input.display()))?;

    let images = load_image_map(args.images.as_deref())?;

    let options = CompileOptions {
        stylesheet_href: args.stylesheet.clone(),
        ..Default::default()
    };
    let html = compile_to_html(&root, &images, options);
    let css = compile_to_css(&root, &images);

    if args.stdout {
        println!("{}", html);
        println!("{}", css);
        return Ok(());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;

    let stem = args
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("page");
    let html_path = args.out_dir.join(format!("{}.html", stem));
    let css_path = args.out_dir.join(&args.stylesheet);

    fs::write(&html_path, html)
        .with_context(|| format!("cannot write {}", html_path.display()))?;
    fs::write(&css_path, css)
        .with_context(|| format!("cannot write {}", css_path.display()))?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        args.input.display(),
        html_path.display()
    );
    println!(
        "  {} {} → {}",
        "✓".green(),
        args.input.display(),
        css_path.display()
    );

    Ok(())
}

fn load_image_map(path: Option<&std::path::Path>) -> Result<ImageMap> {
    let Some(path) = path else {
        return Ok(ImageMap::new());
    };
    let source =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let images =
        parse_image_map(&source).with_context(|| format!("cannot parse {}", path.display()))?;
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_writes_both_outputs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("home.json");
        fs::write(
            &input,
            r#"{
                "id": "0:1",
                "type": "FRAME",
                "name": "Home",
                "absoluteBoundingBox": { "x": 0, "y": 0, "width": 400, "height": 300 },
                "children": [ { "id": "1:1", "type": "TEXT", "characters": "Hello" } ]
            }"#,
        )
        .expect("write scene");

        let out_dir = dir.path().join("dist");
        compile(CompileArgs {
            input: input.clone(),
            images: None,
            out_dir: out_dir.clone(),
            stylesheet: "styles.css".to_string(),
            stdout: false,
        })
        .expect("compile");

        let html = fs::read_to_string(out_dir.join("home.html")).expect("read html");
        let css = fs::read_to_string(out_dir.join("styles.css")).expect("read css");

        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("Hello"));
        assert!(css.contains(".fc-1_1 {"));
    }

    #[test]
    fn test_compile_rejects_malformed_scene() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("broken.json");
        fs::write(&input, "not json").expect("write scene");

        let result = compile(CompileArgs {
            input,
            images: None,
            out_dir: dir.path().join("dist"),
            stylesheet: "styles.css".to_string(),
            stdout: false,
        });

        assert!(result.is_err());
    }
}
