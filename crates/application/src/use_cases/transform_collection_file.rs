//! Transform collection file use case.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use postenv_domain::TransformReport;
use tracing::{info, warn};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{DocumentCodec, FileSystem};
use crate::transformer::{CollectionTransformer, Transformed};

/// Input for transforming a collection file.
#[derive(Debug, Clone)]
pub struct TransformCollectionFileInput {
    /// Path of the collection to read.
    pub input_path: PathBuf,
    /// Where to write the result. Defaults to [`transformed_path`] of the input.
    pub output_path: Option<PathBuf>,
}

impl TransformCollectionFileInput {
    /// Input writing to the default sibling path.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
        }
    }

    /// Overrides the output path.
    #[must_use]
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }
}

/// Output of a collection file transformation.
#[derive(Debug, Clone)]
pub struct TransformCollectionFileOutput {
    /// Where the rewritten collection was written.
    pub output_path: PathBuf,
    /// What the rewrite did.
    pub report: TransformReport,
}

/// Derives the output path for an input collection.
///
/// Every `.json` in the file name becomes `_transformed.json`. A name
/// without `.json` is returned unchanged, so the output overwrites the input.
///
/// # Errors
/// Returns [`ApplicationError::OutputPath`] if the input has no file name or
/// the file name is not valid UTF-8.
pub fn transformed_path(input: &Path) -> ApplicationResult<PathBuf> {
    let name = input
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| ApplicationError::OutputPath(input.to_path_buf()))?;
    Ok(input.with_file_name(name.replace(".json", "_transformed.json")))
}

/// Use case for reading a collection, rewriting it and writing the result.
///
/// The whole document is read before the rewrite starts and written after
/// it finishes; a read or decode failure leaves no output behind.
pub struct TransformCollectionFile<F: FileSystem, C: DocumentCodec> {
    fs: F,
    codec: C,
    transformer: CollectionTransformer,
}

impl<F: FileSystem, C: DocumentCodec> TransformCollectionFile<F, C> {
    /// Creates a new `TransformCollectionFile` use case with default settings.
    #[must_use]
    pub fn new(fs: F, codec: C) -> Self {
        Self::with_transformer(fs, codec, CollectionTransformer::new())
    }

    /// Creates the use case around a configured transformer.
    #[must_use]
    pub const fn with_transformer(fs: F, codec: C, transformer: CollectionTransformer) -> Self {
        Self {
            fs,
            codec,
            transformer,
        }
    }

    /// Rewrites the input collection into the output path.
    ///
    /// # Errors
    /// - Returns error if no output path was given and none can be derived
    /// - Returns error if the input cannot be read or is not valid JSON
    /// - Returns error if the output cannot be serialized or written
    pub fn execute(
        &self,
        input: TransformCollectionFileInput,
    ) -> ApplicationResult<TransformCollectionFileOutput> {
        let output_path = match input.output_path {
            Some(path) => path,
            None => transformed_path(&input.input_path)?,
        };

        let text = self.fs.read_file_string(&input.input_path)?;
        let document = self.codec.decode(&text)?;
        info!(path = %input.input_path.display(), "read collection");

        let Transformed { document, report } = self.transformer.transform(document);
        let stats = report.stats();
        info!(
            requests = report.requests_visited,
            groups = report.groups_visited,
            auth_requests = report.auth_requests,
            variables_added = report.variables_added,
            warnings = stats.warning_count,
            errors = stats.error_count,
            "transformed collection"
        );

        let bytes = self.codec.encode(&document)?;
        if output_path == input.input_path {
            warn!(path = %output_path.display(), "output path equals input path, overwriting input");
        } else if self.fs.exists(&output_path) {
            info!(path = %output_path.display(), "replacing existing output file");
        }
        self.fs.write_file(&output_path, &bytes)?;
        info!(path = %output_path.display(), "wrote transformed collection");

        Ok(TransformCollectionFileOutput {
            output_path,
            report,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ports::{CodecError, FileSystemError};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct InMemoryFileSystem {
        files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    }

    impl InMemoryFileSystem {
        fn with_file(path: &str, contents: &str) -> Self {
            let fs = Self::default();
            fs.files
                .borrow_mut()
                .insert(PathBuf::from(path), contents.as_bytes().to_vec());
            fs
        }

        fn has(&self, path: &str) -> bool {
            self.files.borrow().contains_key(Path::new(path))
        }

        fn read_json(&self, path: &str) -> Value {
            let files = self.files.borrow();
            let bytes = files.get(Path::new(path)).expect("file should exist");
            serde_json::from_slice(bytes).expect("valid JSON")
        }
    }

    impl FileSystem for &InMemoryFileSystem {
        fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
            self.files
                .borrow()
                .get(path)
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
        }

        fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }
    }

    struct SerdeCodec;

    impl DocumentCodec for SerdeCodec {
        fn decode(&self, text: &str) -> Result<Value, CodecError> {
            serde_json::from_str(text).map_err(|e| CodecError::Decode(e.to_string()))
        }

        fn encode(&self, document: &Value) -> Result<Vec<u8>, CodecError> {
            serde_json::to_vec_pretty(document).map_err(|e| CodecError::Encode(e.to_string()))
        }
    }

    #[test]
    fn test_transformed_path_replaces_suffix() {
        assert_eq!(
            transformed_path(Path::new("/tmp/api.json")).unwrap(),
            PathBuf::from("/tmp/api_transformed.json")
        );
    }

    #[test]
    fn test_transformed_path_only_touches_file_name() {
        assert_eq!(
            transformed_path(Path::new("exports.json/api.json")).unwrap(),
            PathBuf::from("exports.json/api_transformed.json")
        );
    }

    #[test]
    fn test_transformed_path_without_suffix_is_unchanged() {
        assert_eq!(
            transformed_path(Path::new("collection.txt")).unwrap(),
            PathBuf::from("collection.txt")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_file_name_is_rejected() {
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new(OsStr::from_bytes(b"caf\xe9.json"));
        assert!(matches!(
            transformed_path(input),
            Err(ApplicationError::OutputPath(path)) if path == input
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_input_is_never_overwritten() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.json");
        let fs = InMemoryFileSystem::default();
        fs.files
            .borrow_mut()
            .insert(PathBuf::from(name), br#"{"info": {}, "item": []}"#.to_vec());
        let use_case = TransformCollectionFile::new(&fs, SerdeCodec);

        let result = use_case.execute(TransformCollectionFileInput::new(name));

        assert!(matches!(result, Err(ApplicationError::OutputPath(_))));
        assert_eq!(
            fs.files.borrow().get(Path::new(name)).unwrap(),
            br#"{"info": {}, "item": []}"#
        );
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(matches!(
            transformed_path(Path::new("/")),
            Err(ApplicationError::OutputPath(_))
        ));
    }

    #[test]
    fn test_execute_writes_sibling_file() {
        let fs = InMemoryFileSystem::with_file(
            "api.json",
            r#"{"info": {"name": "API"}, "item": [
                {"name": "Get Items", "request": {"url": {"raw": "http://localhost:8080/api/items"}}}
            ]}"#,
        );
        let use_case = TransformCollectionFile::new(&fs, SerdeCodec);

        let output = use_case
            .execute(TransformCollectionFileInput::new("api.json"))
            .unwrap();

        assert_eq!(output.output_path, PathBuf::from("api_transformed.json"));
        let written = fs.read_json("api_transformed.json");
        assert_eq!(
            written["item"][0]["request"]["url"]["raw"],
            "{{base_url}}/api/items"
        );
        assert_eq!(written["variable"].as_array().unwrap().len(), 6);
        assert_eq!(output.report.requests_visited, 1);
    }

    #[test]
    fn test_execute_honours_output_override() {
        let fs = InMemoryFileSystem::with_file("api.json", r#"{"info": {}, "item": []}"#);
        let use_case = TransformCollectionFile::new(&fs, SerdeCodec);

        let output = use_case
            .execute(TransformCollectionFileInput::new("api.json").with_output("out/env.json"))
            .unwrap();

        assert_eq!(output.output_path, PathBuf::from("out/env.json"));
        assert!(fs.has("out/env.json"));
        assert!(!fs.has("api_transformed.json"));
    }

    #[test]
    fn test_invalid_collection_is_still_written() {
        let fs = InMemoryFileSystem::with_file("broken.json", r#"{"info": {"name": "x"}}"#);
        let use_case = TransformCollectionFile::new(&fs, SerdeCodec);

        let output = use_case
            .execute(TransformCollectionFileInput::new("broken.json"))
            .unwrap();

        assert!(!output.report.valid);
        assert_eq!(
            fs.read_json("broken_transformed.json"),
            json!({"info": {"name": "x"}})
        );
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let fs = InMemoryFileSystem::default();
        let use_case = TransformCollectionFile::new(&fs, SerdeCodec);

        let result = use_case.execute(TransformCollectionFileInput::new("missing.json"));

        assert!(matches!(
            result,
            Err(ApplicationError::FileSystem(FileSystemError::NotFound(_)))
        ));
        assert!(fs.files.borrow().is_empty());
    }

    #[test]
    fn test_invalid_json_writes_nothing() {
        let fs = InMemoryFileSystem::with_file("api.json", "{ not json");
        let use_case = TransformCollectionFile::new(&fs, SerdeCodec);

        let result = use_case.execute(TransformCollectionFileInput::new("api.json"));

        assert!(matches!(
            result,
            Err(ApplicationError::Codec(CodecError::Decode(_)))
        ));
        assert!(!fs.has("api_transformed.json"));
    }
}
