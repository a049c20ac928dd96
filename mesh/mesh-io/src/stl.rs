//! STL (Stereolithography) reading and writing.
//!
//! Both formats store one record per triangle: a normal vector and three
//! vertices, 12 floats in all. Normals are written as zeros — downstream
//! consumers recompute them from winding — and ignored on load.
//!
//! # Binary layout
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal (zero placeholder)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (zero)
//! end
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use mesh_types::{Point3, Triangle, TriangleSoup};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one facet record in binary STL.
const FACET_SIZE: usize = 50;

/// Save a triangle soup to an STL file.
///
/// # Arguments
///
/// * `soup` - The triangles to save
/// * `path` - Output file path
/// * `binary` - If true, binary STL; if false, ASCII
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::save_stl;
/// use mesh_types::TriangleSoup;
///
/// let soup = TriangleSoup::new();
/// save_stl(&soup, "model.stl", true).unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(soup: &TriangleSoup, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if binary {
        write_stl_binary(soup, &mut writer)
    } else {
        write_stl_ascii(soup, &mut writer)
    }
}

/// Write binary STL to any writer.
pub fn write_stl_binary<W: Write>(soup: &TriangleSoup, writer: &mut W) -> IoResult<()> {
    let mut header = [0u8; HEADER_SIZE];
    let tag = b"Ridgeline STL Writer";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: STL's facet count field is u32 by format definition.
    let count = soup.len() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for tri in soup.iter() {
        // Zero placeholder normal.
        for _ in 0..3 {
            writer.write_all(&0.0f32.to_le_bytes())?;
        }
        for v in tri.vertices() {
            write_vertex(writer, &v)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write ASCII STL to any writer.
pub fn write_stl_ascii<W: Write>(soup: &TriangleSoup, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "solid ridgeline")?;
    for tri in soup.iter() {
        writeln!(writer, "  facet normal 0 0 0")?;
        writeln!(writer, "    outer loop")?;
        for v in tri.vertices() {
            writeln!(writer, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid ridgeline")?;
    Ok(())
}

/// Load a triangle soup from an STL file.
///
/// Detects ASCII vs binary automatically: ASCII files start with `solid`
/// and contain no NUL bytes in the header region.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid STL.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_stl;
///
/// let soup = load_stl("model.stl").unwrap();
/// println!("loaded {} triangles", soup.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<TriangleSoup> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);

    let mut head = [0u8; HEADER_SIZE + 4];
    let bytes_read = read_up_to(&mut reader, &mut head)?;
    if bytes_read < 6 {
        return Err(IoError::invalid_content("file too small to be valid STL"));
    }

    let looks_ascii = head.starts_with(b"solid") && !head[..bytes_read].contains(&0);

    if looks_ascii {
        // Re-read from the start for line-based parsing.
        let file = File::open(path)?;
        read_stl_ascii(BufReader::new(file))
    } else {
        read_stl_binary(&head[..bytes_read], reader)
    }
}

/// Read binary STL facets given the already-consumed header bytes.
fn read_stl_binary<R: Read>(head: &[u8], mut reader: R) -> IoResult<TriangleSoup> {
    if head.len() < HEADER_SIZE + 4 {
        return Err(IoError::invalid_content("binary STL header truncated"));
    }

    let count = u32::from_le_bytes([
        head[HEADER_SIZE],
        head[HEADER_SIZE + 1],
        head[HEADER_SIZE + 2],
        head[HEADER_SIZE + 3],
    ]);

    let mut soup = TriangleSoup::with_capacity(count as usize);
    let mut facet = [0u8; FACET_SIZE];

    for i in 0..count {
        let got = read_up_to(&mut reader, &mut facet)?;
        if got < FACET_SIZE {
            return Err(IoError::TruncatedFacets {
                expected: count,
                got: i,
            });
        }

        // Skip the 12-byte normal; read the three vertices.
        soup.push(Triangle::new(
            read_vertex(&facet[12..24]),
            read_vertex(&facet[24..36]),
            read_vertex(&facet[36..48]),
        ));
    }

    Ok(soup)
}

/// Read ASCII STL facets.
fn read_stl_ascii<R: BufRead>(reader: R) -> IoResult<TriangleSoup> {
    let mut soup = TriangleSoup::new();
    let mut vertices: Vec<Point3<f64>> = Vec::with_capacity(3);

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("vertex") => {
                let mut coord = || -> IoResult<f64> {
                    parts
                        .next()
                        .ok_or_else(|| IoError::invalid_content("vertex with fewer than 3 coordinates"))?
                        .parse::<f64>()
                        .map_err(IoError::from)
                };
                let x = coord()?;
                let y = coord()?;
                let z = coord()?;
                vertices.push(Point3::new(x, y, z));
            }
            Some("endfacet") => {
                if vertices.len() == 3 {
                    soup.push(Triangle::new(vertices[0], vertices[1], vertices[2]));
                }
                vertices.clear();
            }
            Some("endsolid") => break,
            _ => {}
        }
    }

    Ok(soup)
}

/// Fill `buf` as far as the reader allows; returns the bytes read.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<usize> {
    let mut total = 0;
    while total < buf.len() {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}

fn write_vertex<W: Write>(writer: &mut W, v: &Point3<f64>) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // f32 precision is what the STL format stores.
    for coord in [v.x as f32, v.y as f32, v.z as f32] {
        writer.write_all(&coord.to_le_bytes())?;
    }
    Ok(())
}

fn read_vertex(buf: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_soup() -> TriangleSoup {
        TriangleSoup::from_triangles(vec![
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.5]),
        ])
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ridgeline-stl-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn binary_round_trip() {
        let soup = sample_soup();
        let path = temp_path("bin.stl");

        save_stl(&soup, &path, true).unwrap();
        let loaded = load_stl(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), soup.len());
        assert_relative_eq!(loaded.triangles[1].v2.z, 0.5, epsilon = 1e-7);
    }

    #[test]
    fn ascii_round_trip() {
        let soup = sample_soup();
        let path = temp_path("ascii.stl");

        save_stl(&soup, &path, false).unwrap();
        let loaded = load_stl(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), soup.len());
        assert_relative_eq!(loaded.triangles[0].v1.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ascii_output_is_facet_records() {
        let mut bytes = Vec::new();
        write_stl_ascii(&sample_soup(), &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("solid"));
        assert_eq!(text.matches("facet normal").count(), 2);
        assert_eq!(text.matches("vertex").count(), 6);
        assert!(text.trim_end().ends_with("endsolid ridgeline"));
    }

    #[test]
    fn binary_facet_count_matches() {
        let mut bytes = Vec::new();
        write_stl_binary(&sample_soup(), &mut bytes).unwrap();

        assert_eq!(bytes.len(), HEADER_SIZE + 4 + 2 * FACET_SIZE);
        let count = u32::from_le_bytes([
            bytes[HEADER_SIZE],
            bytes[HEADER_SIZE + 1],
            bytes[HEADER_SIZE + 2],
            bytes[HEADER_SIZE + 3],
        ]);
        assert_eq!(count, 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_stl("definitely/not/here.stl").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn truncated_binary_fails() {
        let mut bytes = Vec::new();
        write_stl_binary(&sample_soup(), &mut bytes).unwrap();
        bytes.truncate(bytes.len() - 10);

        let path = temp_path("trunc.stl");
        std::fs::write(&path, &bytes).unwrap();
        let err = load_stl(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            err,
            IoError::TruncatedFacets {
                expected: 2,
                got: 1
            }
        ));
    }
}
