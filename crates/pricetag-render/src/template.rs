use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pricetag_model::ProductType;
use thiserror::Error;

/// A loaded per-type template: the HTML skeleton plus its optional
/// stylesheet. Loaded once per run and treated as immutable; every fill
/// works on a fresh copy of the skeleton string.
#[derive(Debug, Clone)]
pub struct Template {
    pub html: String,
    pub css: Option<String>,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    /// The skeleton file is absent. Callers decide whether this means a
    /// generic fallback document (per-row modes) or aborting the run
    /// (template-bound list modes).
    #[error("template not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Template {
    /// Load `{templates_dir}/{type}/index.html` and, if present,
    /// `{templates_dir}/{type}/styles.css`.
    pub fn load(templates_dir: &Path, ty: ProductType) -> Result<Self, TemplateError> {
        let dir = templates_dir.join(ty.dir_name());
        let html_path = dir.join("index.html");
        if !html_path.exists() {
            return Err(TemplateError::Missing { path: html_path });
        }
        let html = fs::read_to_string(&html_path).map_err(|source| TemplateError::Io {
            path: html_path,
            source,
        })?;

        let css = load_css(templates_dir, ty)?;
        log::debug!(
            "loaded {ty} template ({} bytes html, css: {})",
            html.len(),
            css.is_some()
        );
        Ok(Template { html, css })
    }
}

/// Load only the stylesheet for `ty`. The simple-accessories list document
/// needs the CSS without requiring a skeleton.
pub fn load_css(templates_dir: &Path, ty: ProductType) -> Result<Option<String>, TemplateError> {
    let css_path = templates_dir.join(ty.dir_name()).join("styles.css");
    if !css_path.exists() {
        return Ok(None);
    }
    fs::read_to_string(&css_path)
        .map(Some)
        .map_err(|source| TemplateError::Io {
            path: css_path,
            source,
        })
}
