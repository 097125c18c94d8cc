//! Text asset commands: view, create, update, list, import.

use serde_json::json;
use tracing::info;

use super::host::EditorHost;
use super::params::{validate_identifier, Params};
use super::types::{data_object, ResultData};
use crate::codec;
use crate::error::BridgeError;
use crate::paths::parent_folder;

/// Extensions the bridge treats as text assets.
const TEXT_EXTENSIONS: &[&str] = &["cs", "txt", "json", "md", "shader", "xml", "yaml", "yml"];

pub(super) fn is_text_asset(logical: &str) -> bool {
    logical
        .rsplit('.')
        .next()
        .is_some_and(|ext| TEXT_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

fn extension_for_kind(kind: &str) -> Result<&'static str, BridgeError> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "script" => Ok("cs"),
        "shader" => Ok("shader"),
        "json" => Ok("json"),
        "text" => Ok("txt"),
        "markdown" => Ok("md"),
        "xml" => Ok("xml"),
        _ => Err(BridgeError::type_mismatch(
            "kind",
            "one of script|shader|json|text|markdown|xml",
        )),
    }
}

/// Default body for a freshly created asset when the caller sends none.
fn scaffold(kind: &str, name: &str, namespace: Option<&str>) -> String {
    match kind {
        "script" => {
            let class = format!(
                "public class {name} : MonoBehaviour\n{{\n    void Start()\n    {{\n    }}\n\n    void Update()\n    {{\n    }}\n}}\n"
            );
            match namespace {
                Some(ns) => {
                    let indented: String = class
                        .lines()
                        .map(|line| {
                            if line.is_empty() {
                                String::from("\n")
                            } else {
                                format!("    {line}\n")
                            }
                        })
                        .collect();
                    format!("using UnityEngine;\n\nnamespace {ns}\n{{\n{indented}}}\n")
                }
                None => format!("using UnityEngine;\n\n{class}"),
            }
        }
        "json" => "{}\n".to_string(),
        _ => String::new(),
    }
}

pub(super) fn view_text_asset(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let path = params.require_str("path")?;
    let require_exists = params.optional_bool("requireExists", true)?;

    let normalized = host.asset_root().normalize(path);
    if !host.fs.exists(&normalized.logical) {
        if require_exists {
            return Err(BridgeError::NotFound(format!(
                "text asset '{}'",
                normalized.logical
            )));
        }
        return Ok(data_object(json!({
            "exists": false,
            "path": normalized.logical,
        })));
    }

    let content = host.fs.read(&normalized.logical)?;
    let (payload, encoded) = codec::encode_if_large(&content);
    Ok(data_object(json!({
        "exists": true,
        "content": payload,
        "contentEncoded": encoded,
        "path": normalized.logical,
    })))
}

pub(super) fn create_text_asset(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let name = params.require_str("name")?;
    validate_identifier(name)?;

    let kind = params
        .optional_str("kind")?
        .unwrap_or("script")
        .trim()
        .to_ascii_lowercase();
    let extension = extension_for_kind(&kind)?;

    let namespace = params.optional_str("namespace")?;
    if let Some(ns) = namespace {
        for segment in ns.split('.') {
            validate_identifier(segment)?;
        }
    }

    let folder = params
        .optional_str("folder")?
        .unwrap_or(&host.config.scripts_folder)
        .to_string();
    let overwrite = params.optional_bool("overwrite", false)?;
    let content_encoded = params.optional_bool("contentEncoded", false)?;
    let content = match params.optional_str("content")? {
        Some(raw) => codec::decode(raw, content_encoded)?,
        None => scaffold(&kind, name, namespace),
    };

    let root = host.asset_root();
    let folder_logical = root.normalize(&folder).logical;
    let target = root.join(&folder_logical, &format!("{name}.{extension}"));

    if host.fs.exists(&target.logical) && !overwrite {
        return Err(BridgeError::AlreadyExists(format!(
            "text asset '{}'",
            target.logical
        )));
    }

    host.fs.ensure_folder(&folder_logical)?;
    host.fs.write(&target.logical, &content)?;
    info!(path = %target.logical, kind = %kind, "created text asset");

    Ok(data_object(json!({ "path": target.logical })))
}

pub(super) fn update_text_asset(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let path = params.require_str("path")?;
    let raw_content = params.require_str("content")?;
    let content_encoded = params.optional_bool("contentEncoded", false)?;
    let create_if_missing = params.optional_bool("createIfMissing", false)?;
    let create_folder_if_missing = params.optional_bool("createFolderIfMissing", false)?;

    let content = codec::decode(raw_content, content_encoded)?;
    let normalized = host.asset_root().normalize(path);

    if !host.fs.exists(&normalized.logical) {
        if !create_if_missing {
            return Err(BridgeError::NotFound(format!(
                "text asset '{}'",
                normalized.logical
            )));
        }
        let folder = parent_folder(&normalized.logical).to_string();
        if !host.fs.folder_exists(&folder) {
            if !create_folder_if_missing {
                return Err(BridgeError::NotFound(format!("folder '{folder}'")));
            }
            host.fs.ensure_folder(&folder)?;
        }
    }

    host.fs.write(&normalized.logical, &content)?;
    info!(path = %normalized.logical, bytes = content.len(), "updated text asset");

    Ok(data_object(json!({ "path": normalized.logical })))
}

pub(super) fn list_text_assets(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let root = host.asset_root();
    let folder = match params.optional_str("folderPath")? {
        Some(folder) => root.normalize(folder).logical,
        None => root.name().to_string(),
    };
    let pattern = params
        .optional_str("pattern")?
        .map(|p| p.to_ascii_lowercase());

    let paths: Vec<String> = host
        .fs
        .list(&folder)
        .into_iter()
        .filter(|p| is_text_asset(p))
        .filter(|p| match &pattern {
            Some(needle) => p.to_ascii_lowercase().contains(needle),
            None => true,
        })
        .collect();

    Ok(data_object(json!({ "paths": paths })))
}

/// Copy a text file from an absolute location on disk into the project.
pub(super) fn import_asset(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let source_path = params.require_str("sourcePath")?;
    let target_path = params.require_str("targetPath")?;
    let overwrite = params.optional_bool("overwrite", false)?;

    let content = std::fs::read_to_string(source_path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            BridgeError::NotFound(format!("source file '{source_path}'"))
        }
        std::io::ErrorKind::InvalidData => BridgeError::Unknown(format!(
            "source file '{source_path}' is not valid UTF-8 text"
        )),
        _ => BridgeError::Unknown(format!("failed to read '{source_path}': {e}")),
    })?;

    let target = host.asset_root().normalize(target_path);
    if host.fs.exists(&target.logical) && !overwrite {
        return Err(BridgeError::AlreadyExists(format!(
            "asset '{}'",
            target.logical
        )));
    }

    let folder = parent_folder(&target.logical).to_string();
    host.fs.ensure_folder(&folder)?;
    host.fs.write(&target.logical, &content)?;
    info!(source = %source_path, path = %target.logical, "imported asset");

    Ok(data_object(json!({ "path": target.logical })))
}
