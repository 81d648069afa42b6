use crate::error::ProjectError;
use crate::fixture::Series;
use crate::rewrite;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;
use std::path::Path;

const FIXTURE_INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionSummary {
    pub series: usize,
    pub seasons: usize,
    pub bytes_written: usize,
}

/// Reads a full series dump from `input` and writes the trimmed fixture to
/// `output`. Nothing is written unless every record projects cleanly.
pub fn project(input: &Path, output: &Path) -> Result<ProjectionSummary, ProjectError> {
    if is_same_file(input, output) {
        return Err(ProjectError::SameFile {
            path: output.to_path_buf(),
        });
    }

    let text = rewrite::read_text(input)?;
    let document: Value = serde_json::from_str(&text).map_err(|source| ProjectError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    let series = project_value(&document)?;
    log::info!("projected {} series from {}", series.len(), input.display());

    let bytes = to_fixture_json(&series)?;
    rewrite::write_atomic(output, &bytes)?;

    Ok(ProjectionSummary {
        series: series.len(),
        seasons: series.iter().map(|s| s.seasons.len()).sum(),
        bytes_written: bytes.len(),
    })
}

pub fn project_value(document: &Value) -> Result<Vec<Series>, ProjectError> {
    let records = document.as_array().ok_or(ProjectError::NotAnArray {
        found: json_type(document),
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let series = Series::deserialize(record)
                .map_err(|source| ProjectError::InvalidRecord { index, source })?;
            log::debug!(
                "series #{index} (id {}): {} seasons",
                series.id,
                series.seasons.len()
            );
            Ok(series)
        })
        .collect()
}

/// Pretty JSON with 4-space indentation, ASCII-only strings and no trailing
/// newline.
pub fn to_fixture_json(series: &[Series]) -> Result<Vec<u8>, ProjectError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, FixtureFormatter::new());
    series.serialize(&mut ser).map_err(ProjectError::Serialize)?;
    Ok(buf)
}

/// Indents like [`PrettyFormatter`] and writes every character outside
/// printable ASCII as a `\uXXXX` escape, surrogate pairs included.
struct FixtureFormatter {
    pretty: PrettyFormatter<'static>,
}

impl FixtureFormatter {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(FIXTURE_INDENT),
        }
    }
}

impl Formatter for FixtureFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
