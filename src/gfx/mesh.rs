//! Primitive mesh interface
//!
//! Vertex/index buffer construction for the primitive shapes is handled by
//! an external collaborator; the scene core only selects which primitive to
//! draw and, for shapes with optional surfaces, which of them to render.

/// The primitive mesh kinds the renderer can load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Plane,
    Box,
    Cylinder,
    Cone,
    Sphere,
}

/// Which faces of a box to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxFaces {
    pub front: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoxFaces {
    pub const ALL: BoxFaces = BoxFaces {
        front: true,
        back: true,
        left: true,
        right: true,
        top: true,
        bottom: true,
    };
}

impl Default for BoxFaces {
    fn default() -> Self {
        BoxFaces::ALL
    }
}

/// One concrete draw request, including shape-specific surface flags.
///
/// A cylinder can be drawn with any combination of its top cap, bottom cap,
/// and side surface, and a box with any subset of its six faces; plane,
/// cone, and sphere have no per-surface variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Plane,
    Box(BoxFaces),
    Cylinder { top: bool, bottom: bool, sides: bool },
    Cone,
    Sphere,
}

impl Shape {
    /// Full cylinder with both caps and sides.
    pub fn cylinder() -> Self {
        Shape::Cylinder {
            top: true,
            bottom: true,
            sides: true,
        }
    }

    /// Box with all six faces.
    pub fn full_box() -> Self {
        Shape::Box(BoxFaces::ALL)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane => ShapeKind::Plane,
            Shape::Box(_) => ShapeKind::Box,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Cone => ShapeKind::Cone,
            Shape::Sphere => ShapeKind::Sphere,
        }
    }
}

/// Mesh loading and drawing, implemented by the external mesh collaborator.
///
/// `load` is called once per [`ShapeKind`] during scene preparation no
/// matter how many times the shape appears in the script; the draw calls
/// assume the corresponding kind has been loaded.
pub trait MeshRenderer {
    fn load(&mut self, kind: ShapeKind);

    fn draw_plane(&mut self);
    fn draw_box(&mut self, faces: BoxFaces);
    fn draw_cylinder(&mut self, top: bool, bottom: bool, sides: bool);
    fn draw_cone(&mut self);
    fn draw_sphere(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_mapping() {
        assert_eq!(Shape::Plane.kind(), ShapeKind::Plane);
        assert_eq!(Shape::cylinder().kind(), ShapeKind::Cylinder);
        assert_eq!(
            Shape::Cylinder {
                top: false,
                bottom: false,
                sides: true
            }
            .kind(),
            ShapeKind::Cylinder
        );
        assert_eq!(Shape::full_box().kind(), ShapeKind::Box);
        assert_eq!(
            Shape::Box(BoxFaces {
                front: true,
                ..BoxFaces::ALL
            })
            .kind(),
            ShapeKind::Box
        );
    }

    #[test]
    fn test_full_box_renders_every_face() {
        let Shape::Box(faces) = Shape::full_box() else {
            panic!("full_box is not a box");
        };
        assert_eq!(faces, BoxFaces::ALL);
        assert_eq!(BoxFaces::default(), BoxFaces::ALL);
        assert!(faces.front && faces.back && faces.left);
        assert!(faces.right && faces.top && faces.bottom);
    }
}
