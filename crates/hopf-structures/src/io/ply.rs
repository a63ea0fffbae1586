//! PLY export and import.
//!
//! Points are written as a `vertex` element with `x`, `y`, `z` properties.
//! Meshes add a `face` element whose `vertex_indices` list holds 0-based
//! indices, as the PLY format expects, and optionally `nx`, `ny`, `nz`
//! vertex normals.

use std::io::{Read, Write};

use glam::DVec3;
use hopf_core::error::{HopfError, Result};
use hopf_core::options::{Options, PlyEncoding, PlyScalar};
use ply_rs::parser::Parser;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;

use crate::surface_mesh::SurfaceMesh;

const VERTEX: &str = "vertex";
const FACE: &str = "face";
const VERTEX_INDICES: &str = "vertex_indices";
const POSITION: [&str; 3] = ["x", "y", "z"];
const NORMAL: [&str; 3] = ["nx", "ny", "nz"];

/// Header settings for a PLY file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlyFormat {
    pub encoding: PlyEncoding,
    pub scalar: PlyScalar,
    /// Written as a `comment` header line when set.
    pub comment: Option<String>,
    /// Adds `nx`, `ny`, `nz` vertex properties to meshes.
    pub normals: bool,
}

impl From<&Options> for PlyFormat {
    fn from(options: &Options) -> Self {
        Self {
            encoding: options.ply_encoding,
            scalar: options.ply_scalar,
            comment: None,
            normals: options.vertex_normals,
        }
    }
}

impl PlyFormat {
    /// Sets the header comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    fn encoding(&self) -> Encoding {
        match self.encoding {
            PlyEncoding::Ascii => Encoding::Ascii,
            PlyEncoding::BinaryLittleEndian => Encoding::BinaryLittleEndian,
            PlyEncoding::BinaryBigEndian => Encoding::BinaryBigEndian,
        }
    }

    fn scalar_type(&self) -> ScalarType {
        match self.scalar {
            PlyScalar::Float => ScalarType::Float,
            PlyScalar::Double => ScalarType::Double,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn coordinate(&self, value: f64) -> Property {
        match self.scalar {
            PlyScalar::Float => Property::Float(value as f32),
            PlyScalar::Double => Property::Double(value),
        }
    }

    fn new_ply(&self, with_normals: bool) -> Ply<DefaultElement> {
        let mut ply = Ply::<DefaultElement>::new();
        ply.header.encoding = self.encoding();
        if let Some(comment) = &self.comment {
            ply.header.comments.push(comment.clone());
        }

        let mut vertex = ElementDef::new(VERTEX.to_string());
        let normal_keys: &[&str] = if with_normals { &NORMAL } else { &[] };
        for key in POSITION.iter().chain(normal_keys) {
            vertex.properties.add(PropertyDef::new(
                (*key).to_string(),
                PropertyType::Scalar(self.scalar_type()),
            ));
        }
        ply.header.elements.add(vertex);
        ply
    }

    fn insert_vec3(&self, element: &mut DefaultElement, keys: [&str; 3], v: DVec3) {
        for (key, value) in keys.into_iter().zip(v.to_array()) {
            element.insert(key.to_string(), self.coordinate(value));
        }
    }

    fn vertex_elements(&self, points: &[DVec3], normals: Option<&[DVec3]>) -> Vec<DefaultElement> {
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut element = DefaultElement::new();
                self.insert_vec3(&mut element, POSITION, p);
                if let Some(normals) = normals {
                    self.insert_vec3(&mut element, NORMAL, normals[i]);
                }
                element
            })
            .collect()
    }
}

/// Writes `points` as a PLY point cloud. Returns the number of bytes written.
///
/// Point clouds carry no normals, so `format.normals` is ignored.
pub fn write_ply_points<W: Write>(
    points: &[DVec3],
    out: &mut W,
    format: &PlyFormat,
) -> Result<usize> {
    let mut ply = format.new_ply(false);
    ply.payload
        .insert(VERTEX.to_string(), format.vertex_elements(points, None));

    let written = Writer::new().write_ply(out, &mut ply)?;
    log::debug!("wrote {} PLY vertices ({written} bytes)", points.len());
    Ok(written)
}

/// Writes a surface mesh as PLY vertices and faces. Returns the number of bytes written.
pub fn write_mesh_ply<W: Write>(
    mesh: &SurfaceMesh,
    out: &mut W,
    format: &PlyFormat,
) -> Result<usize> {
    let mut ply = format.new_ply(format.normals);

    let mut face = ElementDef::new(FACE.to_string());
    face.properties.add(PropertyDef::new(
        VERTEX_INDICES.to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::Int),
    ));
    ply.header.elements.add(face);

    let mut faces = Vec::with_capacity(mesh.num_faces());
    for (face_idx, indices) in mesh.faces().iter().enumerate() {
        // The list length is stored as an unsigned char.
        if indices.len() > usize::from(u8::MAX) {
            return Err(HopfError::Ply(format!(
                "face {face_idx} has {} corners, the list length allows at most 255",
                indices.len()
            )));
        }
        let list = indices
            .iter()
            .map(|&i| {
                i32::try_from(i).map_err(|_| HopfError::IndexOutOfBounds {
                    index: i as usize,
                    len: mesh.num_vertices(),
                })
            })
            .collect::<Result<Vec<i32>>>()?;
        let mut element = DefaultElement::new();
        element.insert(VERTEX_INDICES.to_string(), Property::ListInt(list));
        faces.push(element);
    }

    let normals = format.normals.then_some(mesh.vertex_normals());
    ply.payload.insert(
        VERTEX.to_string(),
        format.vertex_elements(mesh.vertices(), normals),
    );
    ply.payload.insert(FACE.to_string(), faces);

    let written = Writer::new().write_ply(out, &mut ply)?;
    log::debug!(
        "wrote PLY mesh with {} vertices and {} faces",
        mesh.num_vertices(),
        mesh.num_faces()
    );
    Ok(written)
}

/// Reads the `x`, `y`, `z` properties of every `vertex` element.
pub fn read_ply_points<R: Read>(input: &mut R) -> Result<Vec<DVec3>> {
    let parser = Parser::<DefaultElement>::new();
    let ply = parser.read_ply(input)?;

    let Some(vertices) = ply.payload.get(VERTEX) else {
        return Err(HopfError::Ply("missing vertex element".to_string()));
    };

    vertices
        .iter()
        .map(|element| read_vec3(element, POSITION))
        .collect()
}

fn read_vec3(element: &DefaultElement, keys: [&str; 3]) -> Result<DVec3> {
    Ok(DVec3::new(
        read_scalar(element, keys[0])?,
        read_scalar(element, keys[1])?,
        read_scalar(element, keys[2])?,
    ))
}

fn read_scalar(element: &DefaultElement, key: &str) -> Result<f64> {
    match element.get(key) {
        Some(Property::Float(v)) => Ok(f64::from(*v)),
        Some(Property::Double(v)) => Ok(*v),
        Some(other) => Err(HopfError::Ply(format!(
            "vertex property '{key}' has unsupported type {other:?}"
        ))),
        None => Err(HopfError::Ply(format!("vertex property '{key}' is missing"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<DVec3> {
        (0..10)
            .map(|i| {
                let t = f64::from(i) * 0.1;
                DVec3::new(t, -t * 2.0, 1.0 / (1.0 + t))
            })
            .collect()
    }

    #[test]
    fn test_ascii_header() {
        let mut buf = Vec::new();
        let format = PlyFormat::default().with_comment("hopf");
        write_ply_points(&sample_points()[..2], &mut buf, &format)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ply"));
        assert_eq!(lines.next(), Some("format ascii 1.0"));
        assert!(text.contains("comment hopf"));
        assert!(text.contains("element vertex 2"));
        assert!(text.contains("property double x"));
        assert!(text.contains("end_header"));
        let body: Vec<&str> = text
            .split("end_header")
            .nth(1)
            .unwrap()
            .trim()
            .lines()
            .collect();
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_roundtrip_ascii_double() {
        let points = sample_points();
        let mut buf = Vec::new();
        write_ply_points(&points, &mut buf, &PlyFormat::default())
            .unwrap();

        let back = read_ply_points(&mut buf.as_slice()).unwrap();
        assert_eq!(back.len(), points.len());
        for (a, b) in points.iter().zip(&back) {
            assert!((*a - *b).length() < 1e-9);
        }
    }

    fn assert_roundtrip(encoding: PlyEncoding, scalar: PlyScalar, tolerance: f64) {
        let points = sample_points();
        let format = PlyFormat {
            encoding,
            scalar,
            ..PlyFormat::default()
        };
        let mut buf = Vec::new();
        write_ply_points(&points, &mut buf, &format).unwrap();

        let back = read_ply_points(&mut buf.as_slice()).unwrap();
        assert_eq!(back.len(), points.len());
        for (a, b) in points.iter().zip(&back) {
            assert!((*a - *b).length() < tolerance, "{encoding:?} {scalar:?}: {a} vs {b}");
        }
    }

    #[test]
    fn test_roundtrip_binary_little_endian_float() {
        assert_roundtrip(PlyEncoding::BinaryLittleEndian, PlyScalar::Float, 1e-6);
    }

    #[test]
    fn test_roundtrip_binary_big_endian_double() {
        assert_roundtrip(PlyEncoding::BinaryBigEndian, PlyScalar::Double, 1e-12);
    }

    #[test]
    fn test_roundtrip_ascii_float() {
        assert_roundtrip(PlyEncoding::Ascii, PlyScalar::Float, 1e-6);
    }

    #[test]
    fn test_big_endian_header() {
        let format = PlyFormat {
            encoding: PlyEncoding::BinaryBigEndian,
            ..PlyFormat::default()
        };
        let mut buf = Vec::new();
        write_ply_points(&sample_points(), &mut buf, &format)
            .unwrap();
        let header_end = buf.windows(10).position(|w| w == b"end_header").unwrap();
        let header = std::str::from_utf8(&buf[..header_end]).unwrap();
        assert!(header.contains("format binary_big_endian 1.0"));
    }

    #[test]
    fn test_mesh_faces_are_zero_based() {
        let mesh = SurfaceMesh::new(
            "tri",
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![vec![0, 1, 2]],
        )
        .unwrap();
        let mut buf = Vec::new();
        write_mesh_ply(&mesh, &mut buf, &PlyFormat::default())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("element face 1"));
        assert!(text.contains("property list uchar int vertex_indices"));
        let last: Vec<&str> = text.lines().last().unwrap().split_whitespace().collect();
        assert_eq!(last, ["3", "0", "1", "2"]);
        assert_eq!(read_ply_points(&mut text.as_bytes()).unwrap().len(), 3);
    }

    #[test]
    fn test_mesh_normals_are_written_when_enabled() {
        let mesh = SurfaceMesh::new(
            "tri",
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![vec![0, 1, 2]],
        )
        .unwrap();

        let mut plain = Vec::new();
        write_mesh_ply(&mesh, &mut plain, &PlyFormat::default())
            .unwrap();
        let plain = String::from_utf8(plain).unwrap();
        assert!(!plain.contains("property double nx"));

        let format = PlyFormat {
            normals: true,
            ..PlyFormat::default()
        };
        let mut buf = Vec::new();
        write_mesh_ply(&mesh, &mut buf, &format).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("property double nx"));
        assert!(text.contains("property double nz"));

        let ply = Parser::<DefaultElement>::new()
            .read_ply(&mut text.as_bytes())
            .unwrap();
        let vertices = &ply.payload[VERTEX];
        assert_eq!(vertices.len(), 3);
        for element in vertices {
            let normal = read_vec3(element, NORMAL).unwrap();
            assert!((normal - DVec3::Z).length() < 1e-12);
        }
        assert_eq!(read_ply_points(&mut text.as_bytes()).unwrap().len(), 3);
    }

    #[test]
    fn test_missing_vertex_element() {
        let text = "ply\nformat ascii 1.0\nelement point 0\nproperty float x\nend_header\n";
        let err = read_ply_points(&mut text.as_bytes()).unwrap_err();
        assert!(matches!(err, HopfError::Ply(_)));
    }
}
