//! Shell (`.shl`) text format.
//!
//! ```text
//! <n_points> <n_facets> <scale>
//! x y z                      (n_points lines)
//! <count> i1 i2 ... icount   (n_facets lines, 1-based indices)
//! ```
//!
//! Scale is written with 6 decimals and coordinates with 8. Facet lines
//! carrying fewer than three indices are skipped on read.
//!
//! Some exporters append annotation text to shell files. When the strict
//! grammar fails, the reader retries after dropping every line that holds
//! a non-numeric token. If that also fails, the read fails.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use shell_types::{drop_duplicates, Facet, ShellMesh};
use tracing::{debug, warn};

use crate::error::{IoError, IoResult};

/// A parsed shell file: deduplicated geometry plus the header scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellFile {
    /// Deduplicated shell geometry.
    pub shell: ShellMesh,
    /// Scale factor from the header (1.0 when the header omits it).
    pub scale: f64,
}

/// Render a shell to `.shl` text.
///
/// Duplicate points are collapsed before writing.
///
/// # Errors
///
/// Returns an error if a facet references a point outside the shell.
///
/// # Example
///
/// ```
/// use shell_io::format_shell;
/// use shell_types::ShellMesh;
///
/// let shell = ShellMesh::from_triangles(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     &[[0, 1, 2]],
/// );
/// let text = format_shell(&shell, 1.0).unwrap();
/// assert_eq!(text.lines().next(), Some("3 1 1.000000"));
/// assert_eq!(text.lines().last(), Some("3 1 2 3"));
/// ```
pub fn format_shell(shell: &ShellMesh, scale: f64) -> IoResult<String> {
    let shell = drop_duplicates(shell.clone())?;
    let header = format!("{} {} {scale:.6}", shell.point_count(), shell.facet_count());
    let points = shell
        .points
        .iter()
        .map(|p| format!("{:.8} {:.8} {:.8}", p.x, p.y, p.z));
    let facets = shell.facets.iter().map(|facet| {
        std::iter::once(facet.len().to_string())
            .chain(facet.iter().map(|&i| (u64::from(i) + 1).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    });
    Ok(std::iter::once(header)
        .chain(points)
        .chain(facets)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Write a shell to a `.shl` file.
///
/// Duplicate points are collapsed before writing.
///
/// # Errors
///
/// Returns [`IoError::PermissionDenied`] when the file cannot be opened for
/// writing because of permissions, and other I/O errors as [`IoError::Io`].
///
/// # Example
///
/// ```no_run
/// use shell_io::save_shell;
/// use shell_types::box_shell;
///
/// save_shell(&box_shell(1.0, 1.0, 1.0), "cube.shl", 1.0).unwrap();
/// ```
pub fn save_shell<P: AsRef<Path>>(shell: &ShellMesh, path: P, scale: f64) -> IoResult<()> {
    let path = path.as_ref();
    let text = format_shell(shell, scale)?;
    let file = File::create(path).map_err(|e| IoError::on_write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    debug!(path = %path.display(), "Wrote shell file");
    Ok(())
}

/// Parse `.shl` text, falling back to the annotation-tolerant grammar.
///
/// The result is deduplicated.
///
/// # Errors
///
/// Returns [`IoError::Unparseable`] if neither grammar accepts the text.
///
/// # Example
///
/// ```
/// use shell_io::parse_shell;
///
/// let text = "3 1 1.0\n0 0 0\n1 0 0\n0 1 0\n3 1 2 3";
/// let parsed = parse_shell(text).unwrap();
/// assert_eq!(parsed.shell.point_count(), 3);
/// assert_eq!(parsed.shell.facets[0], vec![0, 1, 2]);
/// ```
pub fn parse_shell(text: &str) -> IoResult<ShellFile> {
    let lines: Vec<(usize, &str)> = text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect();

    let (shell, scale) = match parse_lines(&lines) {
        Ok(parsed) => parsed,
        Err(strict) => {
            let filtered: Vec<(usize, &str)> = lines
                .iter()
                .copied()
                .filter(|(_, l)| is_numeric_line(l))
                .collect();
            warn!(
                error = %strict,
                dropped = lines.len() - filtered.len(),
                "Strict shell parse failed; retrying without annotation lines"
            );
            parse_lines(&filtered).map_err(|filtered| IoError::Unparseable {
                strict: Box::new(strict),
                filtered: Box::new(filtered),
            })?
        }
    };

    Ok(ShellFile {
        shell: drop_duplicates(shell)?,
        scale,
    })
}

/// True when the line is non-empty and every token parses as a number.
fn is_numeric_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|t| t.parse::<f64>().is_ok())
}

/// Positional parse of header, points and facets.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn parse_lines(lines: &[(usize, &str)]) -> IoResult<(ShellMesh, f64)> {
    let &(header_no, header) = lines
        .first()
        .ok_or_else(|| IoError::syntax(1, "missing header"))?;

    let values: Vec<f64> = header
        .split_whitespace()
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| IoError::syntax(header_no, format!("invalid header value {t:?}")))
        })
        .collect::<IoResult<_>>()?;
    if values.len() < 2 {
        return Err(IoError::syntax(
            header_no,
            "header needs point and facet counts",
        ));
    }
    let count = |v: f64, what: &str| -> IoResult<usize> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
            Ok(v as usize)
        } else {
            Err(IoError::syntax(header_no, format!("invalid {what} count {v}")))
        }
    };
    let n_points = count(values[0], "point")?;
    let n_facets = count(values[1], "facet")?;
    let scale = values.get(2).copied().unwrap_or(1.0);

    let body = &lines[1..];
    if body.len() < n_points + n_facets {
        let last = lines.last().map_or(header_no, |&(n, _)| n);
        return Err(IoError::syntax(
            last,
            format!(
                "expected {n_points} point and {n_facets} facet lines, found {}",
                body.len()
            ),
        ));
    }

    let mut points = Vec::with_capacity(n_points);
    for &(line_no, line) in &body[..n_points] {
        points.push(parse_point(line_no, line)?);
    }

    let mut facets: Vec<Facet> = Vec::with_capacity(n_facets);
    for &(line_no, line) in &body[n_points..n_points + n_facets] {
        if let Some(facet) = parse_facet(line_no, line, n_points)? {
            facets.push(facet);
        }
    }

    Ok((ShellMesh::from_parts(points, facets), scale))
}

fn parse_point(line_no: usize, line: &str) -> IoResult<Point3<f64>> {
    let coords: Vec<f64> = line
        .split_whitespace()
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| IoError::syntax(line_no, format!("invalid coordinate {t:?}")))
        })
        .collect::<IoResult<_>>()?;
    match coords.as_slice() {
        &[x, y, z] => Ok(Point3::new(x, y, z)),
        other => Err(IoError::syntax(
            line_no,
            format!("expected 3 coordinates, found {}", other.len()),
        )),
    }
}

/// Parse a facet line; `None` for lines with fewer than three indices.
fn parse_facet(line_no: usize, line: &str, n_points: usize) -> IoResult<Option<Facet>> {
    // The leading vertex count is informational; the indices that follow it are used.
    let indices: Vec<u32> = line
        .split_whitespace()
        .skip(1)
        .map(|t| {
            let one_based: u64 = t
                .parse()
                .map_err(|_| IoError::syntax(line_no, format!("invalid point index {t:?}")))?;
            if one_based == 0 || one_based > n_points as u64 {
                return Err(IoError::syntax(
                    line_no,
                    format!("point index {one_based} outside 1..={n_points}"),
                ));
            }
            u32::try_from(one_based - 1)
                .map_err(|_| IoError::syntax(line_no, "point index overflows u32"))
        })
        .collect::<IoResult<_>>()?;

    Ok((indices.len() > 2).then_some(indices))
}
