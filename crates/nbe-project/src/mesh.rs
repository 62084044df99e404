//! Derived node geometry.

use nalgebra::{Point3, Vector3};

use crate::schema::Node;

/// World-space corners of every box in a node, eight per box.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMesh {
    pub corners: Vec<Point3<f32>>,
    /// Smallest box enclosing all corners; `None` for a node without boxes.
    pub bounds: Option<(Point3<f32>, Point3<f32>)>,
}

pub fn build_node_mesh(node: &Node) -> NodeMesh {
    let origin: Vector3<f32> = node.position.cast::<f32>();
    let mut corners = Vec::with_capacity(node.boxes.len() * 8);

    for nodebox in &node.boxes {
        let b = nodebox.normalized();
        for i in 0..8 {
            let x = if i & 1 == 0 { b.min.x } else { b.max.x };
            let y = if i & 2 == 0 { b.min.y } else { b.max.y };
            let z = if i & 4 == 0 { b.min.z } else { b.max.z };
            corners.push(Point3::from(origin + Vector3::new(x, y, z)));
        }
    }

    let bounds = corners.split_first().map(|(first, rest)| {
        rest.iter()
            .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)))
    });

    NodeMesh { corners, bounds }
}
