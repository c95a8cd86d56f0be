//! `roma build`: render and write the static bundle.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use roma_site::theme::ThemeVariant;
use roma_site::types::SiteContent;
use roma_site::validate::validate_content;
use roma_site::{boot_module, render_page, PageOptions, RuntimeAssets, BOOT_SCRIPT};
use tracing::{debug, info};

/// Page file name inside the output directory.
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug)]
pub struct BuildOptions {
    pub out: PathBuf,
    pub theme: ThemeVariant,
    pub wasm_glue: String,
    pub map_assets: bool,
    pub force: bool,
}

/// Validate, render and write `index.html` plus the runtime boot module.
pub fn build(options: &BuildOptions) -> Result<PathBuf> {
    let content = SiteContent::roma_burger();
    validate_content(&content).context("refusing to build defective content")?;

    let index = options.out.join(INDEX_FILE);
    if index.exists() && !options.force {
        bail!("{} already exists (use --force to overwrite)", index.display());
    }

    let mut assets = RuntimeAssets::cdn();
    if !options.map_assets {
        assets = assets.without_map();
    }
    let page_options = PageOptions {
        theme: options.theme,
        assets,
        ..Default::default()
    };
    let html = render_page(&content, &page_options);

    fs::create_dir_all(&options.out)
        .with_context(|| format!("Failed to create {}", options.out.display()))?;
    fs::write(&index, &html).with_context(|| format!("Failed to write {}", index.display()))?;

    let boot = options.out.join(BOOT_SCRIPT);
    fs::write(&boot, boot_module(&options.wasm_glue))
        .with_context(|| format!("Failed to write {}", boot.display()))?;
    debug!(glue = %options.wasm_glue, "boot module written");

    info!(
        path = %index.display(),
        bytes = html.len(),
        theme = %options.theme,
        map = options.map_assets,
        "page built"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(out: PathBuf) -> BuildOptions {
        BuildOptions {
            out,
            theme: ThemeVariant::Noir,
            wasm_glue: roma_site::WASM_GLUE.into(),
            map_assets: true,
            force: false,
        }
    }

    #[test]
    fn writes_page_and_boot_module() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");

        let index = build(&options(out.clone())).unwrap();

        let html = fs::read_to_string(&index).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        let boot = fs::read_to_string(out.join(BOOT_SCRIPT)).unwrap();
        assert!(boot.contains(roma_site::WASM_GLUE));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(dir.path().to_path_buf());
        build(&opts).unwrap();

        let err = build(&opts).unwrap_err();
        assert!(err.to_string().contains("--force"));

        opts.force = true;
        assert!(build(&opts).is_ok());
    }
}
