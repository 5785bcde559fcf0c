use markdown_lite_engine::MarkdownParser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// Convert everything readable from `reader` as one document.
pub fn convert_reader<R: Read>(
    parser: &mut MarkdownParser,
    mut reader: R,
) -> Result<String, ConvertError> {
    let mut markdown = String::new();
    reader
        .read_to_string(&mut markdown)
        .map_err(ConvertError::Stdin)?;
    Ok(parser.parse(&markdown))
}

pub fn convert_file(parser: &mut MarkdownParser, path: &Path) -> Result<String, ConvertError> {
    let markdown = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", markdown.len(), path.display());
    Ok(parser.parse(&markdown))
}

/// `dir/<stem>.html` for an input file.
pub fn output_path(input: &Path, dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".html");
    dir.join(name)
}

/// Convert `input` and write it into `dir`, returning the written path.
pub fn convert_file_to_dir(
    parser: &mut MarkdownParser,
    input: &Path,
    dir: &Path,
) -> Result<PathBuf, ConvertError> {
    let html = convert_file(parser, input)?;
    let out = output_path(input, dir);

    // Create the output directory if it doesn't exist
    fs::create_dir_all(dir).map_err(|source| ConvertError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(&out, html).map_err(|source| ConvertError::Write {
        path: out.clone(),
        source,
    })?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_convert_reader() {
        let mut parser = MarkdownParser::default();
        let html = convert_reader(&mut parser, "# Hi\n*there*".as_bytes()).unwrap();
        assert_eq!(html, "<h1>Hi</h1><p><em>there</em></p>");
    }

    #[test]
    fn test_output_path_replaces_extension() {
        let out = output_path(Path::new("notes/readme.md"), Path::new("/tmp/site"));
        assert_eq!(out, PathBuf::from("/tmp/site/readme.html"));
    }

    #[test]
    fn test_convert_missing_file() {
        let mut parser = MarkdownParser::default();
        let err = convert_file(&mut parser, Path::new("/this/path/does/not/exist.md")).unwrap_err();

        assert!(matches!(err, ConvertError::Read { .. }));
        assert!(err.to_string().contains("exist.md"));
    }

    #[test]
    fn test_convert_file_to_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("doc.md");
        fs::write(&input, "> quoted\n\n```sh\nls\n```\n").unwrap();
        let out_dir = temp_dir.path().join("html");

        let mut parser = MarkdownParser::default();
        let written = convert_file_to_dir(&mut parser, &input, &out_dir).unwrap();

        assert_eq!(written, out_dir.join("doc.html"));
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "<blockquote><p>quoted</p></blockquote><br><pre class=\"lang-sh\">ls\n</pre>"
        );
    }

    #[test]
    fn test_parser_reused_across_files() {
        let temp_dir = TempDir::new().unwrap();
        let open = temp_dir.path().join("open.md");
        let plain = temp_dir.path().join("plain.md");
        fs::write(&open, "> still quoted\n```\nnever closed").unwrap();
        fs::write(&plain, "plain").unwrap();

        let mut parser = MarkdownParser::default();
        convert_file(&mut parser, &open).unwrap();
        let html = convert_file(&mut parser, &plain).unwrap();

        assert_eq!(html, "<p>plain</p>");
    }
}
