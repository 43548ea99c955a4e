//! Dumping the merit surface on a uniform grid for plotting.

use crate::merit::merit_function;

use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default file name of the surface dump.
pub const SURFACE_PATH: &str = "func.dat";

/// Uniform grid over a half-open interval, used in both dimensions.
#[derive(Copy, Clone, Debug)]
pub struct GridRange {
    /// Inclusive lower bound.
    pub low: f64,
    /// Exclusive upper bound.
    pub high: f64,
    /// Step between adjacent grid points.
    pub step: f64,
}

impl GridRange {
    /// Number of grid points in `low..high`.
    pub fn len(&self) -> usize {
        ((self.high - self.low) / self.step).round() as usize
    }

    /// Return true if the range contains no grid points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate of grid point `index`.
    pub fn coord(&self, index: usize) -> f64 {
        self.low + index as f64 * self.step
    }
}

impl Default for GridRange {
    /// The grid used by the `save` mode: `[-5, 5)` in steps of `0.1`.
    fn default() -> Self {
        GridRange {
            low: -5.0,
            high: 5.0,
            step: 0.1,
        }
    }
}

/// Write `x  y  value` rows over `range` in both dimensions.
///
/// Each scanline (fixed `x`) is followed by a blank line, the layout
/// gnuplot expects for surface data. Scanlines are computed in parallel
/// and written in order.
pub fn write_surface<W: Write>(mut writer: W, range: GridRange) -> io::Result<()> {
    let scanlines: Vec<String> = (0..range.len())
        .into_par_iter()
        .map(|i| {
            let x = range.coord(i);
            let mut scanline = String::new();
            for j in 0..range.len() {
                let y = range.coord(j);
                let merit = merit_function(&[x, y]);
                scanline.push_str(&format!("{x}  {y}  {merit}\n"));
            }
            scanline.push('\n');
            scanline
        })
        .collect();
    for scanline in &scanlines {
        writer.write_all(scanline.as_bytes())?;
    }
    writer.flush()
}

/// Dump the merit surface over `range` to the file at `path`.
pub fn dump_surface(path: &Path, range: GridRange) -> io::Result<()> {
    log::info!("dumping merit surface to {}", path.display());
    let file = BufWriter::new(File::create(path)?);
    write_surface(file, range)
}

#[cfg(test)]
mod tests {
    use super::{write_surface, GridRange};
    use crate::merit::merit_function;

    #[test]
    fn default_range_has_100_points() {
        let range = GridRange::default();
        assert_eq!(range.len(), 100);
        assert_eq!(range.coord(0), -5.0);
        assert!(range.coord(99) < range.high);
    }

    #[test]
    fn rows_cover_grid_with_scanline_separators() {
        let mut buf = Vec::new();
        write_surface(&mut buf, GridRange::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // 100 scanlines of 100 rows, each scanline followed by a blank line
        assert_eq!(lines.len(), 100 * 101);
        for (i, line) in lines.iter().enumerate() {
            if i % 101 == 100 {
                assert!(line.is_empty(), "line {i} should separate scanlines");
            } else {
                assert_eq!(line.split_whitespace().count(), 3, "line {i}");
            }
        }
        assert!(lines[0].starts_with("-5  -5  "));
    }

    #[test]
    fn rows_hold_merit_values() {
        let mut buf = Vec::new();
        let range = GridRange {
            low: 0.0,
            high: 1.0,
            step: 0.5,
        };
        write_surface(&mut buf, range).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let first: Vec<&str> = text.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(first[0], "0");
        assert_eq!(first[1], "0");
        let value: f64 = first[2].parse().unwrap();
        assert_eq!(value, merit_function(&[0.0, 0.0]));
    }
}
