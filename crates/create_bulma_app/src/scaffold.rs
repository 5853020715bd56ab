//! Template copy, manifest patching, and text rewriting.
//!
//! A project is assembled in a hidden staging directory beside the target and renamed into
//! place only once every file has been patched, so a failed run never leaves a half-written
//! project behind.

use std::fs;
use std::path::{Path, PathBuf};

use bulma_classes::ClassPrefix;
use regex::Regex;
use serde_json::Value;

use crate::cli::CreateOptions;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::registry::TemplateRegistry;

/// Directories never copied out of a template.
const SKIPPED_DIRS: &[&str] = &["target", "node_modules", "dist", ".git"];

const CARGO_MANIFEST: &str = "Cargo.toml";
const PACKAGE_JSON: &str = "package.json";

/// Summary of a finished scaffold run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScaffoldReport {
    /// Created project directory.
    pub target: PathBuf,
    /// Template that was copied.
    pub template: String,
    /// Files copied, relative to `target`, in copy order.
    pub files: Vec<PathBuf>,
    /// Files whose contents changed after copying.
    pub rewritten: Vec<PathBuf>,
}

/// Validate a project name: lowercase ASCII letter first, then `[a-z0-9_-]`.
pub fn validate_project_name(name: &str) -> ScaffoldResult<()> {
    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|first| first.is_ascii_lowercase());
    let valid_rest = chars.all(|ch| {
        ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_'
    });
    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(
            ScaffoldError::invalid(format!("invalid project name `{name}`"))
                .with_hint("use lowercase letters, digits, `-` or `_`, starting with a letter"),
        )
    }
}

fn pattern(source: &str) -> ScaffoldResult<Regex> {
    Regex::new(source)
        .map_err(|err| ScaffoldError::template(format!("invalid rewrite pattern: {err}")))
}

/// Rust identifier form of a package name.
pub fn crate_ident(package_name: &str) -> String {
    package_name.replace('-', "_")
}

/// Placeholder and import rewriting applied to every copied text file.
#[derive(Clone, Debug)]
pub struct TextRewriter {
    project_name: String,
    crate_ident: String,
    class_prefix: String,
    import_line: Regex,
}

impl TextRewriter {
    /// Build a rewriter replacing imports of `template_crate` with the new project's crate.
    pub fn new(
        project_name: &str,
        template_crate: &str,
        class_prefix: Option<&str>,
    ) -> ScaffoldResult<Self> {
        let import_line = pattern(&format!(
            r"(?m)^(?P<lead>[ \t]*(?:pub[ \t]+)?use[ \t]+){}::",
            regex::escape(&crate_ident(template_crate))
        ))?;
        Ok(Self {
            project_name: project_name.to_string(),
            crate_ident: crate_ident(project_name),
            class_prefix: class_prefix.unwrap_or_default().to_string(),
            import_line,
        })
    }

    /// Rewrite `{{project_name}}`, `{{crate_name}}`, `{{class_prefix}}` and
    /// `use <template>::` lines.
    pub fn rewrite(&self, body: &str) -> String {
        let body = body
            .replace("{{project_name}}", &self.project_name)
            .replace("{{crate_name}}", &self.crate_ident)
            .replace("{{class_prefix}}", &self.class_prefix);
        let replacement = format!("${{lead}}{}::", self.crate_ident);
        self.import_line
            .replace_all(&body, replacement.as_str())
            .into_owned()
    }
}

/// Result of patching a template `Cargo.toml`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManifestPatch {
    /// Patched manifest text.
    pub body: String,
    /// Package name the template shipped with.
    pub template_crate: String,
}

/// Rename the package and pin workspace-local `bulma_*` path dependencies to `bulma_version`.
///
/// The manifest is parsed to read and validate the template's package name; edits are applied
/// line by line so the template's formatting survives.
pub fn patch_cargo_manifest(
    body: &str,
    project_name: &str,
    bulma_version: &str,
) -> ScaffoldResult<ManifestPatch> {
    let manifest: toml::Table = toml::from_str(body).map_err(|err| {
        ScaffoldError::template(format!("failed to parse template manifest: {err}"))
    })?;
    let template_crate = manifest
        .get("package")
        .and_then(|package| package.get("name"))
        .and_then(|name| name.as_str())
        .ok_or_else(|| ScaffoldError::template("template manifest has no package.name"))?
        .to_string();

    let package_header = pattern(r"(?m)^\[package\][ \t]*$")?;
    let name_line = pattern(r#"(?m)^(?P<lead>[ \t]*name[ \t]*=[ \t]*)"[^"]*""#)?;
    let path_dependency = pattern(concat!(
        r#"(?m)^(?P<indent>[ \t]*)(?P<dep>bulma_[A-Za-z0-9_]+)[ \t]*=[ \t]*"#,
        r#"\{[ \t]*path[ \t]*=[ \t]*"[^"]*"[ \t]*\}"#,
    ))?;

    let split = package_header
        .find(body)
        .map(|header| header.end())
        .ok_or_else(|| ScaffoldError::template("template manifest has no [package] table"))?;
    let (head, package_onward) = body.split_at(split);
    let renamed = name_line.replacen(
        package_onward,
        1,
        format!("${{lead}}\"{project_name}\"").as_str(),
    );
    let body = format!("{head}{renamed}");
    let pinned = format!("${{indent}}${{dep}} = \"{bulma_version}\"");
    let body = path_dependency
        .replace_all(&body, pinned.as_str())
        .into_owned();

    Ok(ManifestPatch {
        body,
        template_crate,
    })
}

/// Set the top-level `name` field of a `package.json` document.
pub fn patch_package_json(body: &str, project_name: &str) -> ScaffoldResult<String> {
    let mut document: Value = serde_json::from_str(body)
        .map_err(|err| ScaffoldError::template(format!("failed to parse package.json: {err}")))?;
    let Some(fields) = document.as_object_mut() else {
        return Err(ScaffoldError::template("package.json is not a JSON object"));
    };
    fields.insert("name".to_string(), Value::String(project_name.to_string()));
    let mut patched = serde_json::to_string_pretty(&document)
        .map_err(|err| ScaffoldError::template(format!("failed to write package.json: {err}")))?;
    patched.push('\n');
    Ok(patched)
}

/// Recursively copy `source` into `target`, skipping build and dependency directories.
///
/// Returns copied file paths relative to `target`, sorted per directory for stable output.
pub fn copy_template(source: &Path, target: &Path) -> ScaffoldResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    copy_dir(source, target, Path::new(""), &mut files)?;
    Ok(files)
}

fn copy_dir(
    source: &Path,
    target: &Path,
    relative: &Path,
    files: &mut Vec<PathBuf>,
) -> ScaffoldResult<()> {
    fs::create_dir_all(target).map_err(ScaffoldError::io("create directory", target))?;

    let mut entries = fs::read_dir(source)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(ScaffoldError::io("list template directory", source))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name();
        let from = entry.path();
        let to = target.join(&name);
        let relative = relative.join(&name);
        let file_type = entry
            .file_type()
            .map_err(ScaffoldError::io("inspect template entry", &from))?;
        if file_type.is_dir() {
            if SKIPPED_DIRS.iter().any(|skipped| name == *skipped) {
                continue;
            }
            copy_dir(&from, &to, &relative, files)?;
        } else {
            fs::copy(&from, &to).map_err(ScaffoldError::io("copy template file", &from))?;
            files.push(relative);
        }
    }
    Ok(())
}

fn ensure_target_available(target: &Path) -> ScaffoldResult<()> {
    if !target.exists() {
        return Ok(());
    }
    let is_empty_dir = target.is_dir()
        && fs::read_dir(target)
            .map_err(ScaffoldError::io("inspect target directory", target))?
            .next()
            .is_none();
    if is_empty_dir {
        Ok(())
    } else {
        Err(ScaffoldError::TargetExists(target.to_path_buf()))
    }
}

/// Hidden sibling of the target that a run is assembled in.
fn staging_dir(parent_dir: &Path, project_name: &str) -> PathBuf {
    parent_dir.join(format!(".{project_name}.partial"))
}

/// Apply `rewrite` to a UTF-8 file; template errors are attributed to `origin`.
fn rewrite_in_place(
    path: &Path,
    origin: &Path,
    rewrite: impl FnOnce(&str) -> ScaffoldResult<String>,
) -> ScaffoldResult<bool> {
    let bytes = fs::read(path).map_err(ScaffoldError::io("read", path))?;
    // Binary assets are copied verbatim.
    let Ok(body) = String::from_utf8(bytes) else {
        return Ok(false);
    };
    let patched = rewrite(&body).map_err(|err| err.in_file(origin))?;
    if patched == body {
        return Ok(false);
    }
    fs::write(path, patched).map_err(ScaffoldError::io("write", path))?;
    Ok(true)
}

struct Populated {
    files: Vec<PathBuf>,
    rewritten: Vec<PathBuf>,
}

/// Copy and patch the template into `staging`.
fn populate(options: &CreateOptions, source: &Path, staging: &Path) -> ScaffoldResult<Populated> {
    let files = copy_template(source, staging)?;

    let mut rewritten = Vec::new();
    let mut template_crate = String::new();
    let manifest = PathBuf::from(CARGO_MANIFEST);
    let manifest_changed = rewrite_in_place(
        &staging.join(&manifest),
        &source.join(&manifest),
        |body| {
            let patch =
                patch_cargo_manifest(body, &options.project_name, &options.bulma_version)?;
            template_crate = patch.template_crate;
            Ok(patch.body)
        },
    )?;
    if manifest_changed {
        rewritten.push(manifest);
    }

    let package_json = PathBuf::from(PACKAGE_JSON);
    if staging.join(&package_json).is_file() {
        let changed = rewrite_in_place(
            &staging.join(&package_json),
            &source.join(&package_json),
            |body| patch_package_json(body, &options.project_name),
        )?;
        if changed {
            rewritten.push(package_json);
        }
    }

    let rewriter = TextRewriter::new(
        &options.project_name,
        &template_crate,
        options.class_prefix.as_deref(),
    )?;
    for file in &files {
        let changed = rewrite_in_place(&staging.join(file), &source.join(file), |body| {
            Ok(rewriter.rewrite(body))
        })?;
        if changed && !rewritten.contains(file) {
            rewritten.push(file.clone());
        }
    }

    Ok(Populated { files, rewritten })
}

/// Move a finished staging directory onto `target`, replacing an empty target directory.
fn publish(staging: &Path, target: &Path) -> ScaffoldResult<()> {
    if target.exists() {
        fs::remove_dir(target).map_err(ScaffoldError::io("replace empty directory", target))?;
    }
    fs::rename(staging, target).map_err(ScaffoldError::io("move project into", target))
}

/// Create a project from `options` using the templates found in `templates_dir`.
///
/// On failure the staging directory is removed and `target` is left as it was.
pub fn run(options: &CreateOptions, templates_dir: &Path) -> ScaffoldResult<ScaffoldReport> {
    validate_project_name(&options.project_name)?;
    if let Some(prefix) = options.class_prefix.as_deref() {
        ClassPrefix::parse_optional(prefix)
            .map_err(|err| ScaffoldError::invalid(err.to_string()))?;
    }

    let registry = TemplateRegistry::load(templates_dir)?;
    let entry = registry.find(&options.template)?;
    let source = registry.template_dir(entry);
    if !source.join(CARGO_MANIFEST).is_file() {
        return Err(ScaffoldError::template("template has no Cargo.toml").in_file(&source));
    }

    let target = options.parent_dir.join(&options.project_name);
    ensure_target_available(&target)?;
    fs::create_dir_all(&options.parent_dir)
        .map_err(ScaffoldError::io("create directory", &options.parent_dir))?;

    let staging = staging_dir(&options.parent_dir, &options.project_name);
    if staging.exists() {
        fs::remove_dir_all(&staging)
            .map_err(ScaffoldError::io("clear stale staging directory", &staging))?;
    }
    let populated = populate(options, &source, &staging)
        .and_then(|populated| publish(&staging, &target).map(|()| populated));
    let Populated { files, rewritten } = match populated {
        Ok(populated) => populated,
        Err(err) => {
            let _ = fs::remove_dir_all(&staging);
            return Err(err);
        }
    };

    Ok(ScaffoldReport {
        target,
        template: entry.name.clone(),
        files,
        rewritten,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    const MANIFEST: &str = r#"[package]
name = "bulma-app-template"
version = "0.1.0"
edition = "2021"

[dependencies]
bulma_classes = { path = "../../crates/bulma_classes" }
bulma_ui = { path = "../../crates/bulma_ui" }
leptos = { version = "0.6", features = ["csr"] }
"#;

    fn unique_test_root(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "create-bulma-app-{label}-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    /// Writes a one-template registry under `root/templates` and returns the template dir.
    fn write_template(root: &Path) -> PathBuf {
        let templates = root.join("templates");
        let template = templates.join("basic");
        fs::create_dir_all(template.join("src")).expect("template src");
        fs::write(
            templates.join("templates.toml"),
            "[[template]]\nname = \"basic\"\ndescription = \"d\"\npath = \"basic\"\n",
        )
        .expect("registry");
        fs::write(template.join("Cargo.toml"), MANIFEST).expect("manifest");
        fs::write(
            template.join("src/main.rs"),
            "use bulma_app_template::App;\nfn main() {}\n",
        )
        .expect("main");
        template
    }

    fn options(parent_dir: PathBuf, class_prefix: Option<&str>) -> CreateOptions {
        CreateOptions {
            project_name: "shop-front".to_string(),
            template: "basic".to_string(),
            templates_dir: None,
            parent_dir,
            class_prefix: class_prefix.map(str::to_string),
            bulma_version: "0.3.0".to_string(),
        }
    }

    #[test]
    fn project_names_are_validated() {
        assert!(validate_project_name("my-app_2").is_ok());
        for bad in ["", "2app", "My-App", "my app", "-app", "app!"] {
            let err = validate_project_name(bad).expect_err(bad);
            assert!(matches!(err, ScaffoldError::Invalid { .. }), "{bad}");
        }
    }

    #[test]
    fn manifest_patch_renames_and_pins_dependencies() {
        let patch = patch_cargo_manifest(MANIFEST, "shop-front", "0.3.0").expect("patch");
        assert_eq!(patch.template_crate, "bulma-app-template");
        assert_eq!(
            patch.body,
            r#"[package]
name = "shop-front"
version = "0.1.0"
edition = "2021"

[dependencies]
bulma_classes = "0.3.0"
bulma_ui = "0.3.0"
leptos = { version = "0.6", features = ["csr"] }
"#
        );
    }

    #[test]
    fn manifest_without_package_is_a_template_error() {
        let err = patch_cargo_manifest("[dependencies]\n", "x", "1").expect_err("no package");
        assert!(matches!(err, ScaffoldError::Template { .. }));
        assert!(patch_cargo_manifest("not toml [", "x", "1").is_err());
    }

    #[test]
    fn package_json_name_is_replaced_in_place() {
        let template = concat!(
            "{\"name\": \"template\", \"private\": true, ",
            "\"devDependencies\": {\"bulma\": \"^1.0.0\"}}",
        );
        let patched = patch_package_json(template, "shop-front")
        .expect("patch");
        assert_eq!(
            patched,
            concat!(
                "{\n  \"name\": \"shop-front\",\n  \"private\": true,\n",
                "  \"devDependencies\": {\n    \"bulma\": \"^1.0.0\"\n  }\n}\n",
            )
        );
        assert!(patch_package_json("[]", "x").is_err());
    }

    #[test]
    fn rewriter_replaces_placeholders_and_imports() {
        let rewriter = TextRewriter::new("shop-front", "bulma-app-template", Some("ui-"))
            .expect("rewriter");
        let body = "use bulma_app_template::App;\n\
                    pub use bulma_app_template::theme;\n\
                    // bulma_app_template::App stays in comments\n\
                    <title>{{project_name}}</title> {{crate_name}} \"{{class_prefix}}\"\n";
        assert_eq!(
            rewriter.rewrite(body),
            "use shop_front::App;\n\
             pub use shop_front::theme;\n\
             // bulma_app_template::App stays in comments\n\
             <title>shop-front</title> shop_front \"ui-\"\n"
        );
    }

    #[test]
    fn run_creates_a_patched_project() {
        let root = unique_test_root("run");
        let template = write_template(&root);
        fs::create_dir_all(template.join("target/debug")).expect("template target");
        fs::write(
            template.join("bulma.toml"),
            "class_prefix = \"{{class_prefix}}\"\n",
        )
        .expect("config");
        fs::write(template.join("logo.bin"), [0xff_u8, 0xfe, 0x00]).expect("binary");
        fs::write(template.join("target/debug/junk"), "junk").expect("junk");
        // An empty target directory is reused.
        fs::create_dir_all(root.join("out/shop-front")).expect("empty target");

        let options = options(root.join("out"), Some("ui-"));
        let report = run(&options, &root.join("templates")).expect("scaffold");

        assert_eq!(report.target, root.join("out/shop-front"));
        assert_eq!(
            report.files,
            vec![
                PathBuf::from("Cargo.toml"),
                PathBuf::from("bulma.toml"),
                PathBuf::from("logo.bin"),
                PathBuf::from("src/main.rs"),
            ]
        );
        assert_eq!(
            report.rewritten,
            vec![
                PathBuf::from("Cargo.toml"),
                PathBuf::from("bulma.toml"),
                PathBuf::from("src/main.rs"),
            ]
        );
        let main = fs::read_to_string(report.target.join("src/main.rs")).expect("read main");
        assert_eq!(main, "use shop_front::App;\nfn main() {}\n");
        let config = fs::read_to_string(report.target.join("bulma.toml")).expect("read config");
        assert_eq!(
            bulma_classes::ClassConfig::from_toml_str(&config)
                .expect("generated config parses")
                .prefix(),
            Some("ui-")
        );
        assert!(!report.target.join("target").exists());
        assert!(!staging_dir(&root.join("out"), "shop-front").exists());

        let err = run(&options, &root.join("templates")).expect_err("second run");
        assert!(matches!(err, ScaffoldError::TargetExists(path) if path == report.target));
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn failed_patch_leaves_no_project_and_allows_retry() {
        let root = unique_test_root("rollback");
        let template = write_template(&root);
        fs::write(template.join("package.json"), "{ not json").expect("broken package.json");
        let out = root.join("out");
        let options = options(out.clone(), None);

        let err = run(&options, &root.join("templates")).expect_err("broken template");
        let broken = template.join("package.json");
        assert!(matches!(
            &err,
            ScaffoldError::Template { file: Some(file), .. } if *file == broken
        ));
        assert!(!out.join("shop-front").exists());
        assert!(
            fs::read_dir(&out).expect("parent dir").next().is_none(),
            "staging directory removed"
        );

        fs::write(template.join("package.json"), "{\"name\": \"t\"}").expect("fixed");
        let report = run(&options, &root.join("templates")).expect("retry succeeds");
        let manifest = fs::read_to_string(report.target.join("Cargo.toml")).expect("manifest");
        assert!(manifest.contains("name = \"shop-front\""));
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn stale_staging_directory_is_cleared() {
        let root = unique_test_root("stale");
        write_template(&root);
        let out = root.join("out");
        let staging = staging_dir(&out, "shop-front");
        fs::create_dir_all(&staging).expect("stale staging");
        fs::write(staging.join("leftover.txt"), "old").expect("leftover");

        let report = run(&options(out, None), &root.join("templates")).expect("scaffold");
        assert!(!report.target.join("leftover.txt").exists());
        assert!(!staging.exists());
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn run_rejects_invalid_prefix_before_touching_disk() {
        let root = unique_test_root("prefix");
        let err = run(&options(root.clone(), Some("has space")), &root).expect_err("prefix");
        assert!(matches!(err, ScaffoldError::Invalid { .. }));
        assert!(!root.exists());
    }
}
