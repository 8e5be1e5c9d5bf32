//! Two-column numeric tables read from plain text files.
//!
//! The format is the one written by the convergence studies: one point
//! per line, `x` and `y` separated by whitespace.  Everything after a `#`
//! is a comment; lines left blank are ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};
use log::{debug, warn};
use ndarray::{Array2, ArrayView1, Axis};
use crate::error::{Error, Result};

/// Ordered `(x, y)` points.  Row order is file order; it is the order in
/// which the points get connected when plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    data: Array2<f64>, // shape (n, 2)
}

impl DataTable {
    /// Build a table from `(x, y)` pairs, keeping their order.
    pub fn from_rows<I>(rows: I) -> Self
    where I: IntoIterator<Item = (f64, f64)> {
        let rows: Vec<(f64, f64)> = rows.into_iter().collect();
        let data = Array2::from_shape_fn((rows.len(), 2), |(i, j)| {
            if j == 0 { rows[i].0 } else { rows[i].1 } });
        Self { data }
    }

    /// Read the table stored in the file `path`.
    ///
    /// The file is closed before returning, whatever the outcome.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::missing_file(path, e))?;
        let table = Self::parse(BufReader::new(file), path)?;
        debug!("{}: {} rows", path.display(), table.len());
        Ok(table)
    }

    /// Parse the table from `reader`.  `path` only serves to identify
    /// the source in error messages.
    pub fn parse<R: BufRead>(reader: R, path: impl AsRef<Path>)
                             -> Result<Self> {
        let path = path.as_ref();
        let mut rows = Vec::new();
        for (i, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|e| Error::missing_file(path, e))?;
            let line = String::from_utf8(line).map_err(|e| {
                Error::malformed_row(path, i + 1,
                                     String::from_utf8_lossy(e.as_bytes()).trim())
            })?;
            let content = match line.find('#') {
                Some(k) => line[.. k].trim(),
                None => line.trim(),
            };
            if content.is_empty() {
                continue
            }
            let row = parse_row(content)
                .ok_or_else(|| Error::malformed_row(path, i + 1, content))?;
            if row.0 <= 0. || row.1 <= 0. {
                warn!("{}:{}: non-positive value in {:?} will not appear \
                       on a logarithmic axis", path.display(), i + 1, row);
            }
            rows.push(row);
        }
        Ok(Self::from_rows(rows))
    }

    /// Write the table in the format read by [`DataTable::parse`].
    /// Floats are printed with the shortest representation reading back
    /// to the same value.
    pub fn write<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        for (x, y) in self.rows() {
            writeln!(w, "{} {}", x, y)?;
        }
        w.flush()
    }

    /// Write the table to the file `path`, replacing its content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        File::create(path)
            .and_then(|f| self.write(BufWriter::new(f)))
            .map_err(|e| Error::missing_file(path, e))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First column.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.data.column(0)
    }

    /// Second column.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.data.column(1)
    }

    /// Iterate on the `(x, y)` pairs in order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.data.rows().into_iter().map(|r| (r[0], r[1]))
    }
}

/// Parse exactly two whitespace separated floats.
fn parse_row(s: &str) -> Option<(f64, f64)> {
    let mut tokens = s.split_whitespace();
    let x: f64 = tokens.next()?.parse().ok()?;
    let y: f64 = tokens.next()?.parse().ok()?;
    match tokens.next() {
        None => Some((x, y)),
        Some(_) => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(s: &str) -> Result<DataTable> {
        DataTable::parse(Cursor::new(s), "test.dat")
    }

    #[test]
    fn keeps_file_order() -> Result<()> {
        let t = parse("10 5.0\n20 2.5\n40 1.25\n")?;
        assert_eq!(t.len(), 3);
        assert_eq!(t.rows().collect::<Vec<_>>(),
                   [(10., 5.), (20., 2.5), (40., 1.25)]);
        assert_eq!(t.x().to_vec(), [10., 20., 40.]);
        assert_eq!(t.y().to_vec(), [5., 2.5, 1.25]);
        Ok(())
    }

    #[test]
    fn unsorted_rows_stay_unsorted() -> Result<()> {
        let t = parse("3 1\n1 2\n2 3")?;
        assert_eq!(t.rows().collect::<Vec<_>>(), [(3., 1.), (1., 2.), (2., 3.)]);
        Ok(())
    }

    #[test]
    fn whitespace_and_comments() -> Result<()> {
        let t = parse("# dof  error\n\n  1.5e2\t3e-1  \n\n200 0.1\r\n")?;
        assert_eq!(t.rows().collect::<Vec<_>>(), [(150., 0.3), (200., 0.1)]);
        Ok(())
    }

    #[test]
    fn trailing_comments() -> Result<()> {
        let t = parse("1 2 # coarse mesh\n3 4#fine\n   # indented\n")?;
        assert_eq!(t.rows().collect::<Vec<_>>(), [(1., 2.), (3., 4.)]);
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        match DataTable::parse(Cursor::new(&b"1 2\n3 \xff\n"[..]), "p.dat") {
            Err(Error::MalformedRow { path, line, content }) => {
                assert_eq!(path, Path::new("p.dat"));
                assert_eq!(line, 2);
                assert_eq!(content, "3 \u{FFFD}");
            }
            r => panic!("expected MalformedRow, got {:?}", r),
        }
    }

    #[test]
    fn empty_input() -> Result<()> {
        let t = parse("")?;
        assert!(t.is_empty());
        assert_eq!(t.x().len(), 0);
        Ok(())
    }

    #[test]
    fn one_number_is_malformed() {
        match parse("10 5.0\n20\n40 1.25\n") {
            Err(Error::MalformedRow { path, line, content }) => {
                assert_eq!(path, Path::new("test.dat"));
                assert_eq!(line, 2);
                assert_eq!(content, "20");
            }
            r => panic!("expected MalformedRow, got {:?}", r),
        }
    }

    #[test]
    fn three_numbers_are_malformed() {
        // Skipped lines still count for the line number.
        match parse("# header\n\n1 2 3\n") {
            Err(Error::MalformedRow { line, .. }) => assert_eq!(line, 3),
            r => panic!("expected MalformedRow, got {:?}", r),
        }
    }

    #[test]
    fn not_a_number_is_malformed() {
        assert!(matches!(parse("1 two\n"),
                         Err(Error::MalformedRow { line: 1, .. })));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conv_dof_est_h1.dat");
        match DataTable::load(&path) {
            Err(e @ Error::MissingFile { .. }) => {
                assert!(e.to_string().contains("conv_dof_est_h1.dat"));
            }
            r => panic!("expected MissingFile, got {:?}", r),
        }
    }

    #[test]
    fn save_then_load() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conv.dat");
        let t = DataTable::from_rows([(1e-3, 0.1 + 0.2), (std::f64::consts::PI, 1. / 3.),
                                      (123456789., 2.5e-300)]);
        t.save(&path)?;
        assert_eq!(DataTable::load(&path)?, t);
        Ok(())
    }

    #[test]
    fn malformed_file_names_the_file() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conv_cpu_est_h1.dat");
        std::fs::write(&path, "0.5 10\n1.0\n").unwrap();
        let e = DataTable::load(&path).unwrap_err();
        assert!(e.to_string().contains("conv_cpu_est_h1.dat:2"), "{}", e);
        Ok(())
    }
}
