use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error(transparent)]
    Io(#[from] RewriteError),

    #[error("refusing to overwrite the input file {}", path.display())]
    SameFile { path: PathBuf },

    #[error("{} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array at the root of the document, found {found}")]
    NotAnArray { found: &'static str },

    #[error("series #{index} cannot be projected")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize fixture")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error(transparent)]
    Io(#[from] RewriteError),

    #[error("invalid image name pattern")]
    Pattern(#[from] regex::Error),
}

/// Prints `err` and its chain of causes to stderr.
pub fn report(err: &dyn Error) {
    write_report(&mut io::stderr().lock(), err).ok();
}

pub fn write_report(out: &mut impl Write, err: &dyn Error) -> io::Result<()> {
    writeln!(out, "{} {err}", "Error:".red())?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(err: &dyn Error) -> Vec<String> {
        let mut buf = Vec::new();
        write_report(&mut buf, err).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_report_walks_cause_chain() {
        let source = serde_json::from_str::<Vec<u8>>("[1, \"two\"]").unwrap_err();
        let err = ProjectError::InvalidRecord { index: 3, source };

        let lines = render(&err);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Error:"));
        assert!(lines[0].ends_with("series #3 cannot be projected"));
        assert!(lines[1].starts_with("  caused by: invalid type: string"));
    }

    #[test]
    fn test_report_transparent_io_error() {
        let err = ProjectError::Io(RewriteError::Read {
            path: PathBuf::from("v3_series.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        });

        let lines = render(&err);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("cannot read v3_series.json"));
        assert_eq!(lines[1], "  caused by: no such file");
    }

    #[test]
    fn test_report_without_cause() {
        let err = ProjectError::NotAnArray { found: "null" };
        let lines = render(&err);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("found null"));
    }
}
