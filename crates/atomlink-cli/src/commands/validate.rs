use crate::cli::{RecordClass, ValidateArgs};
use crate::document::Document;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::info;

pub fn run(args: ValidateArgs) -> Result<()> {
    let total = args.files.len();
    let mut failed = 0;

    for path in &args.files {
        match validate_file(path, args.class) {
            Ok(document) => {
                println!("✓ {}: valid {}", path.display(), document.class_name());
            }
            Err(e) => {
                eprintln!("✗ {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Validation { failed, total });
    }

    info!("All documents passed validation.");
    println!("All {} document(s) are valid.", total);

    Ok(())
}

fn validate_file(path: &Path, class: Option<RecordClass>) -> Result<Document> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Document::parse(&contents, class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomlink::model::output::ModelOutput;
    use atomlink::model::serialize::{JsonRecord, ParseError};
    use std::path::PathBuf;

    fn write_document(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn valid_document_passes() {
        let dir = tempfile::tempdir().unwrap();
        let json = ModelOutput::new("energy", "eV", true, vec![])
            .to_json()
            .unwrap();
        let path = write_document(dir.path(), "output.json", &json);

        let document = validate_file(&path, None).unwrap();

        assert_eq!(document.class_name(), "ModelOutput");
    }

    #[test]
    fn forced_class_rejects_other_documents() {
        let dir = tempfile::tempdir().unwrap();
        let json = ModelOutput::new("energy", "eV", true, vec![])
            .to_json()
            .unwrap();
        let path = write_document(dir.path(), "output.json", &json);

        let result = validate_file(&path, Some(RecordClass::Metadata));

        assert!(matches!(
            result,
            Err(CliError::Parse(ParseError::UnexpectedClass { .. }))
        ));
    }

    #[test]
    fn unsupported_version_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let json = ModelOutput::new("energy", "eV", true, vec![])
            .to_json()
            .unwrap()
            .replace("\"version\": 1", "\"version\": 2");
        let path = write_document(dir.path(), "output.json", &json);

        let result = validate_file(&path, None);

        assert!(matches!(
            result,
            Err(CliError::Parse(ParseError::UnsupportedVersion { found: 2 }))
        ));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        let result = validate_file(&path, None);

        match result {
            Err(CliError::FileRead { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected a file read error, got {:?}", other),
        }
    }

    #[test]
    fn mixed_batch_reports_failure_counts() {
        let dir = tempfile::tempdir().unwrap();
        let json = ModelOutput::new("energy", "eV", true, vec![])
            .to_json()
            .unwrap();
        let good = write_document(dir.path(), "good.json", &json);
        let bad = write_document(dir.path(), "bad.json", "{ not json");

        let args = ValidateArgs {
            files: vec![good, bad],
            class: None,
        };
        let result = run(args);

        assert!(matches!(
            result,
            Err(CliError::Validation {
                failed: 1,
                total: 2
            })
        ));
    }
}
