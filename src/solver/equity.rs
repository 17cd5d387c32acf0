use crate::Equity;
use std::path::Path;
use thiserror::Error;

/// Ways an equity matrix can fail to load. Structural problems are hard
/// errors; individual unparseable tokens inside a row are skipped.
#[derive(Debug, Error)]
pub enum EquityError {
    #[error("cannot read equity matrix: {0}")]
    Io(#[from] std::io::Error),
    #[error("equity matrix has no rows")]
    Empty,
    #[error("ragged equity row {row}: expected {expected} values, found {found}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("equity matrix is not square: {rows} rows of {cols} values")]
    NotSquare { rows: usize, cols: usize },
}

/// A dense K x K matrix of precomputed bucket-vs-bucket equities,
/// row-major. Produced offline, consumed read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityMatrix {
    k: usize,
    data: Vec<Equity>,
}

impl EquityMatrix {
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn at(&self, i: usize, j: usize) -> Equity {
        self.data[i * self.k + j]
    }

    /// Load from a CSV-ish file: rows of comma- or whitespace-separated
    /// floats, blank lines and `#` comments skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EquityError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    pub fn parse(input: &str) -> Result<Self, EquityError> {
        let rows = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                line.split(',')
                    .flat_map(str::split_whitespace)
                    .filter_map(|token| token.parse::<Equity>().ok())
                    .collect::<Vec<Equity>>()
            })
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();
        let k = rows.first().ok_or(EquityError::Empty)?.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != k {
                return Err(EquityError::Ragged {
                    row: i,
                    expected: k,
                    found: row.len(),
                });
            }
        }
        if rows.len() != k {
            return Err(EquityError::NotSquare {
                rows: rows.len(),
                cols: k,
            });
        }
        Ok(Self {
            k,
            data: rows.into_iter().flatten().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const K3: &str = "\
# pairwise bucket equities, K = 3
1.0, 0.6, 0.55

0.4 0.5 0.45
0.45,0.5,0.5
";

    #[test]
    fn loads_a_square_csv() {
        let path = std::env::temp_dir().join("quasar_equity_k3.csv");
        std::fs::write(&path, K3).unwrap();
        let matrix = EquityMatrix::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(matrix.k(), 3);
        assert_eq!(matrix.at(0, 0), 1.0);
        assert_eq!(matrix.at(0, 1), 0.6);
        assert_eq!(matrix.at(2, 1), 0.5);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let matrix = EquityMatrix::parse("# header\n\n1.0 0.5\n0.5 1.0\n").unwrap();
        assert_eq!(matrix.k(), 2);
    }

    #[test]
    fn ragged_rows_fail() {
        let err = EquityMatrix::parse("1.0 0.5\n0.5\n").unwrap_err();
        assert!(matches!(err, EquityError::Ragged { row: 1, .. }));
    }

    #[test]
    fn non_square_fails() {
        let err = EquityMatrix::parse("1.0 0.5\n").unwrap_err();
        assert!(matches!(err, EquityError::NotSquare { rows: 1, cols: 2 }));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            EquityMatrix::parse("# nothing here\n"),
            Err(EquityError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("quasar_equity_missing.csv");
        assert!(matches!(
            EquityMatrix::load(&path),
            Err(EquityError::Io(_))
        ));
    }
}
