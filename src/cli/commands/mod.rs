//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and returns the process
//! exit code; nothing here calls `std::process::exit`.

pub mod build;
pub mod index;
pub mod init;
pub mod tree;

use crate::config::Settings;
use crate::docset::DocSetError;
use crate::hierarchy::HierarchyError;
use crate::index::IndexError;
use crate::io::{ExitCode, OutputFormat, ResultCode};
use crate::model::SymbolModel;
use crate::render::{RenderResult, renderer_for};
use std::path::{Path, PathBuf};

/// Model path from the command line, else `model_path` from settings.
///
/// A relative settings path is resolved against the workspace root.
pub fn resolve_model_path(model: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(path) = model {
        return path.to_path_buf();
    }
    match &settings.workspace_root {
        Some(root) if settings.model_path.is_relative() => root.join(&settings.model_path),
        _ => settings.model_path.clone(),
    }
}

pub fn load_model(model: Option<&Path>, settings: &Settings) -> Result<SymbolModel, DocSetError> {
    let path = resolve_model_path(model, settings);
    Ok(SymbolModel::load(&path)?)
}

pub fn result_code(error: &DocSetError) -> ResultCode {
    match error {
        DocSetError::Model(_) => ResultCode::ModelError,
        DocSetError::Index(IndexError::EmptyIndex) => ResultCode::EmptyIndex,
        DocSetError::Hierarchy(HierarchyError::CyclicHierarchy { .. }) => {
            ResultCode::CyclicHierarchy
        }
        DocSetError::Hierarchy(HierarchyError::InvalidKindFilter { .. }) => {
            ResultCode::InvalidKind
        }
    }
}

/// Write rendered output to stdout.
pub fn emit(output: RenderResult<String>, code: ExitCode) -> ExitCode {
    match output {
        Ok(text) => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            code
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ResultCode::InternalError.exit_code()
        }
    }
}

/// Report a failed run; JSON errors go to stdout, text errors to stderr.
pub fn report_error(format: OutputFormat, error: &DocSetError) -> ExitCode {
    let code = result_code(error);
    tracing::debug!("[cli] command failed with {}: {error}", code.as_str());
    report(format, code, &error.to_string())
}

/// Report a failure that has no [`DocSetError`], such as a bad settings file.
pub fn report(format: OutputFormat, code: ResultCode, message: &str) -> ExitCode {
    let rendered = renderer_for(format, None).render_error(code, message);
    match (format, rendered) {
        (OutputFormat::Json, output) => {
            emit(output, code.exit_code());
        }
        (OutputFormat::Text, Ok(text)) => eprint!("{text}"),
        (OutputFormat::Text, Err(e)) => eprintln!("Error: {e}"),
    }
    code.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SymbolId, SymbolKind};

    #[test]
    fn test_resolve_model_path() {
        let mut settings = Settings::default();
        assert_eq!(
            resolve_model_path(Some(Path::new("m.json")), &settings),
            PathBuf::from("m.json")
        );
        assert_eq!(
            resolve_model_path(None, &settings),
            PathBuf::from(".docweave/model.json")
        );

        settings.workspace_root = Some(PathBuf::from("/work"));
        assert_eq!(
            resolve_model_path(None, &settings),
            PathBuf::from("/work/.docweave/model.json")
        );
    }

    #[test]
    fn test_result_codes() {
        let cyclic = DocSetError::from(HierarchyError::CyclicHierarchy {
            id: SymbolId::new(1).unwrap(),
            name: "A".to_string(),
        });
        assert_eq!(result_code(&cyclic), ResultCode::CyclicHierarchy);

        let invalid = DocSetError::from(HierarchyError::InvalidKindFilter {
            kind: SymbolKind::Method,
        });
        assert_eq!(result_code(&invalid), ResultCode::InvalidKind);

        assert_eq!(
            result_code(&DocSetError::from(IndexError::EmptyIndex)),
            ResultCode::EmptyIndex
        );
    }

    #[test]
    fn test_missing_model_is_model_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("absent.json");

        let err = load_model(Some(&missing), &Settings::default()).unwrap_err();
        assert_eq!(result_code(&err), ResultCode::ModelError);
    }
}
