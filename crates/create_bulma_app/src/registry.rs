//! Template registry loading (`templates.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Registry file name inside a templates directory.
pub const REGISTRY_FILE: &str = "templates.toml";

/// One registered template.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplateEntry {
    /// Name passed to `--template`.
    pub name: String,
    /// One-line description shown by `--list`.
    pub description: String,
    /// Template directory, relative to the registry file.
    pub path: String,
}

/// Registered templates, in file order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct TemplateRegistry {
    #[serde(rename = "template", default)]
    templates: Vec<TemplateEntry>,
    #[serde(skip)]
    root: PathBuf,
}

impl TemplateRegistry {
    /// Load `templates.toml` from `templates_dir` and validate its entries.
    pub fn load(templates_dir: &Path) -> ScaffoldResult<Self> {
        let path = templates_dir.join(REGISTRY_FILE);
        let body = fs::read_to_string(&path)
            .map_err(ScaffoldError::io("read template registry", &path))?;
        let mut registry: TemplateRegistry = toml::from_str(&body)
            .map_err(|err| ScaffoldError::template(format!("malformed template registry: {err}")))
            .map_err(|err| err.in_file(&path))?;
        registry.root = templates_dir.to_path_buf();
        registry.validate().map_err(|err| err.in_file(&path))?;
        Ok(registry)
    }

    fn validate(&self) -> ScaffoldResult<()> {
        if self.templates.is_empty() {
            return Err(ScaffoldError::template("template registry lists no templates"));
        }
        for (index, entry) in self.templates.iter().enumerate() {
            if self.templates[..index]
                .iter()
                .any(|earlier| earlier.name == entry.name)
            {
                return Err(ScaffoldError::template(format!(
                    "template `{}` is registered twice",
                    entry.name
                )));
            }
            if Path::new(&entry.path).is_absolute() || entry.path.contains("..") {
                return Err(ScaffoldError::template(format!(
                    "template `{}` path must stay inside the templates directory",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Registered templates in file order.
    pub fn templates(&self) -> &[TemplateEntry] {
        &self.templates
    }

    /// Look up a template by name.
    pub fn find(&self, name: &str) -> ScaffoldResult<&TemplateEntry> {
        self.templates
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| {
                let available: Vec<&str> = self
                    .templates
                    .iter()
                    .map(|entry| entry.name.as_str())
                    .collect();
                ScaffoldError::invalid(format!("unknown template `{name}`"))
                    .with_hint(format!("available templates: {}", available.join(", ")))
            })
    }

    /// Directory holding the given template's files.
    pub fn template_dir(&self, entry: &TemplateEntry) -> PathBuf {
        self.root.join(&entry.path)
    }
}
