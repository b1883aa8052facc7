//! Text loader for QAP instances.
//!
//! The expected format is three blocks separated by lines that contain only
//! whitespace:
//!
//! ```raw
//! N
//!
//! d_1_1 ... d_1_N   (distance matrix, N rows)
//! ...
//! d_N_1 ... d_N_N
//!
//! f_1_1 ... f_1_N   (flow matrix, N rows)
//! ...
//! f_N_1 ... f_N_N
//! ```
//!
//! Consecutive separator lines count as one separator, and leading or
//! trailing blank lines are ignored.

use super::instance::QapInstance;
use crate::error::ValidationError;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Errors that can occur while loading a QAP instance.
#[derive(Debug)]
pub enum LoadError {
    /// An I/O error occurred while reading the file.
    Io(std::io::Error),
    /// The input ended before the named block was found.
    MissingBlock(&'static str),
    /// A token could not be parsed as a nonnegative integer.
    Parse {
        /// 1-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The parsed data does not form a valid instance.
    Validation(ValidationError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MissingBlock(block) => write!(f, "Missing {block} block"),
            Self::Parse { line, token } => write!(
                f,
                "Line {line}: could not parse '{token}' as a nonnegative integer"
            ),
            Self::Validation(e) => write!(f, "Invalid instance: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ValidationError> for LoadError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// A non-blank line with its 1-based line number.
type Line<'a> = (usize, &'a str);

/// Parses an instance from its text form.
pub fn parse_instance(input: &str) -> Result<QapInstance, LoadError> {
    let mut blocks = split_blocks(input).into_iter();

    let size_block = blocks.next().ok_or(LoadError::MissingBlock("size"))?;
    let n = parse_size(&size_block)?;

    let distance_block = blocks.next().ok_or(LoadError::MissingBlock("distance"))?;
    let distances = parse_matrix(&distance_block)?;

    let flow_block = blocks.next().ok_or(LoadError::MissingBlock("flow"))?;
    let flows = parse_matrix(&flow_block)?;

    let instance = QapInstance::new(n, distances, flows)?;
    tracing::debug!(n, "parsed QAP instance");
    Ok(instance)
}

/// Reads and parses an instance file.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<QapInstance, LoadError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_instance(&text)
}

impl FromStr for QapInstance {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(s)
    }
}

fn split_blocks(input: &str) -> Vec<Vec<Line<'_>>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((idx + 1, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_token(line: usize, token: &str) -> Result<u64, LoadError> {
    token.parse::<u64>().map_err(|_| LoadError::Parse {
        line,
        token: token.to_string(),
    })
}

fn parse_size(block: &[Line<'_>]) -> Result<usize, LoadError> {
    let mut tokens = block
        .iter()
        .flat_map(|&(line, text)| text.split_whitespace().map(move |t| (line, t)));
    let (line, token) = tokens.next().ok_or(LoadError::MissingBlock("size"))?;
    if let Some((extra_line, extra)) = tokens.next() {
        return Err(LoadError::Parse {
            line: extra_line,
            token: extra.to_string(),
        });
    }
    let n = parse_token(line, token)?;
    usize::try_from(n).map_err(|_| LoadError::Parse {
        line,
        token: token.to_string(),
    })
}

fn parse_matrix(block: &[Line<'_>]) -> Result<Vec<Vec<u64>>, LoadError> {
    block
        .iter()
        .map(|&(line, text)| {
            text.split_whitespace()
                .map(|token| parse_token(line, token))
                .collect::<Result<Vec<u64>, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::AcoProblem;

    const SAMPLE: &str = "3\n   \n0 1 2\n1 0 1\n2 1 0\n   \n0 5 1\n5 0 2\n1 2 0\n";

    #[test]
    fn test_parse_sample() {
        let qap = parse_instance(SAMPLE).unwrap();
        assert_eq!(qap.n(), 3);
        assert_eq!(qap.distances()[0], vec![0, 1, 2]);
        assert_eq!(qap.flows()[1], vec![5, 0, 2]);
        assert_eq!(qap.cost(&[1, 2, 3]), 18.0);
    }

    #[test]
    fn test_from_str_matches_parse() {
        let qap: QapInstance = SAMPLE.parse().unwrap();
        assert_eq!(qap, parse_instance(SAMPLE).unwrap());
    }

    #[test]
    fn test_tolerates_extra_blank_lines_and_indentation() {
        let text = "\n\n  2\n\n\t\n  0 4\n 4   0\n\n\n0 1\n1 0\n\n";
        let qap = parse_instance(text).unwrap();
        assert_eq!(qap.n(), 2);
        assert_eq!(qap.distances()[1], vec![4, 0]);
    }

    #[test]
    fn test_missing_flow_block() {
        let err = parse_instance("2\n\n0 1\n1 0\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingBlock("flow")));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_instance("   \n").unwrap_err();
        assert!(matches!(err, LoadError::MissingBlock("size")));
    }

    #[test]
    fn test_negative_entry_reports_line() {
        let err = parse_instance("2\n\n0 -1\n1 0\n\n0 1\n1 0\n").unwrap_err();
        match err {
            LoadError::Parse { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "-1");
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_size_block_with_extra_token() {
        let err = parse_instance("2 3\n\n0 1\n1 0\n\n0 1\n1 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_shape_mismatch_is_validation_error() {
        let err = parse_instance("3\n\n0 1\n1 0\n\n0 1\n1 0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Validation(ValidationError::MatrixShape {
                matrix: "distance",
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_instance("/definitely/not/here.dat").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("u-aco-loader-{}.dat", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let qap = load_instance(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(qap.n(), 3);
    }
}
