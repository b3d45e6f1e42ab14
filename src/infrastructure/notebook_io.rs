// Notebook reader/writer - JSON on-disk layout
use crate::core::notebook::Notebook;
use crate::domain::error::{NbStripError, NbStripResult};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Name used in errors for documents read from standard input
pub const STDIN_NAME: &str = "<stdin>";

/// Parse a notebook from any reader
pub fn read_notebook<R: Read>(reader: R) -> NbStripResult<Notebook> {
    parse_notebook(reader, STDIN_NAME)
}

/// Serialize a notebook to any writer
pub fn write_notebook<W: Write>(mut writer: W, notebook: &Notebook, indent: usize) -> NbStripResult<()> {
    let bytes = to_bytes(notebook, indent)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read and parse the notebook stored at `path`
pub fn read_notebook_file(path: &Path) -> NbStripResult<Notebook> {
    let file = fs::File::open(path).map_err(|source| NbStripError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_notebook(std::io::BufReader::new(file), &path.display().to_string())
}

/// Overwrite `path` with the serialized notebook
pub fn write_notebook_file(path: &Path, notebook: &Notebook, indent: usize) -> NbStripResult<()> {
    let bytes = to_bytes(notebook, indent)?;
    fs::write(path, bytes).map_err(|source| NbStripError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_notebook<R: Read>(reader: R, source_name: &str) -> NbStripResult<Notebook> {
    serde_json::from_reader(reader).map_err(|source| {
        // serde_json reports read failures through its own error type
        if source.is_io() {
            NbStripError::Read {
                path: source_name.into(),
                source: std::io::Error::new(
                    source.io_error_kind().unwrap_or(std::io::ErrorKind::Other),
                    source.to_string(),
                ),
            }
        } else {
            NbStripError::Parse {
                source_name: source_name.to_string(),
                source,
            }
        }
    })
}

/// Keys come out sorted because `serde_json::Map` is ordered by key.
fn to_bytes(notebook: &Notebook, indent: usize) -> NbStripResult<Vec<u8>> {
    let serialize_error = |e: serde_json::Error| {
        NbStripError::Output(format!("Failed to serialize notebook: {}", e))
    };

    let value = serde_json::to_value(notebook).map_err(serialize_error)?;

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser).map_err(serialize_error)?;
    buf.push(b'\n');
    Ok(buf)
}
