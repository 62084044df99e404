//! Project schema definitions.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::media::Media;
use crate::mesh::{NodeMesh, build_node_mesh};

/// One axis-aligned box of a node, in node-local units (a full node spans -0.5..0.5).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeBox {
    pub name: String,
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl NodeBox {
    pub fn new(name: impl Into<String>, min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// Box covering a whole node.
    pub fn full(name: impl Into<String>) -> Self {
        Self::new(
            name,
            Vector3::new(-0.5, -0.5, -0.5),
            Vector3::new(0.5, 0.5, 0.5),
        )
    }

    /// Same box with each component ordered so that `min <= max`.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.clone(),
            min: self.min.inf(&self.max),
            max: self.min.sup(&self.max),
        }
    }
}

fn origin() -> Vector3<i32> {
    Vector3::zeros()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub name: String,
    #[serde(default = "origin")]
    pub position: Vector3<i32>,
    #[serde(default)]
    pub boxes: Vec<NodeBox>,
    /// Texture names per face, top/bottom/right/left/back/front. Empty means untextured.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<String>,
}

impl Node {
    pub fn new(name: impl Into<String>, position: Vector3<i32>) -> Self {
        Self {
            name: name.into(),
            position,
            boxes: Vec::new(),
            tiles: Vec::new(),
        }
    }

    pub fn with_box(mut self, nodebox: NodeBox) -> Self {
        self.boxes.push(nodebox);
        self
    }
}

/// The document being edited.
///
/// Selection and derived meshes are session state: they are never persisted
/// and do not take part in equality.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub name: String,
    pub nodes: Vec<Node>,
    pub media: Media,
    selected: Option<usize>,
    meshes: Vec<NodeMesh>,
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.nodes == other.nodes && self.media == other.media
    }
}

/// Counts reported by [`Project::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub nodes_added: usize,
    pub nodes_renamed: usize,
    pub images_added: usize,
    pub images_skipped: usize,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builds a project from loaded parts and computes its meshes.
    pub fn from_parts(name: impl Into<String>, nodes: Vec<Node>, media: Media) -> Self {
        let mut project = Self {
            name: name.into(),
            nodes,
            media,
            selected: None,
            meshes: Vec::new(),
        };
        project.remesh();
        project
    }

    pub fn add_node(&mut self, node: Node) -> usize {
        self.meshes.push(build_node_mesh(&node));
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Selects the node at `index`. An out of range index clears the selection.
    pub fn select_node(&mut self, index: usize) -> bool {
        if index < self.nodes.len() {
            self.selected = Some(index);
            true
        } else {
            self.selected = None;
            false
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|idx| self.nodes.get(idx))
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Recomputes the derived geometry of every node.
    pub fn remesh(&mut self) {
        self.meshes = self.nodes.iter().map(build_node_mesh).collect();
        tracing::debug!(nodes = self.nodes.len(), "remeshed project");
    }

    pub fn meshes(&self) -> &[NodeMesh] {
        &self.meshes
    }

    /// Appends the nodes and images of `other`.
    ///
    /// Node names stay unique: a clashing name gets the first free `_N`
    /// suffix. Images whose name is already present are kept as they are.
    /// Derived meshes are left stale; call [`Project::remesh`] afterwards.
    pub fn merge(&mut self, other: Project) -> MergeSummary {
        let mut summary = MergeSummary::default();

        for mut node in other.nodes {
            if self.node_by_name(&node.name).is_some() {
                node.name = self.free_node_name(&node.name);
                summary.nodes_renamed += 1;
            }
            self.nodes.push(node);
            summary.nodes_added += 1;
        }

        for image in other.media.into_images() {
            if self.media.contains(&image.name) {
                summary.images_skipped += 1;
            } else {
                self.media.add(image);
                summary.images_added += 1;
            }
        }

        tracing::debug!(?summary, "merged project");
        summary
    }

    fn free_node_name(&self, base: &str) -> String {
        let mut suffix = 2;
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if self.node_by_name(&candidate).is_none() {
                return candidate;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Image;

    fn sample_project() -> Project {
        let mut project = Project::new("sample");
        project.add_node(Node::new("stair", Vector3::zeros()).with_box(NodeBox::full("base")));
        project.add_node(
            Node::new("slab", Vector3::new(1, 0, 0)).with_box(NodeBox::new(
                "half",
                Vector3::new(-0.5, -0.5, -0.5),
                Vector3::new(0.5, 0.0, 0.5),
            )),
        );
        project
    }

    #[test]
    fn select_node_in_and_out_of_range() {
        let mut project = sample_project();
        assert!(project.select_node(1));
        assert_eq!(project.selected_node().map(|n| n.name.as_str()), Some("slab"));

        assert!(!project.select_node(5));
        assert_eq!(project.selected_index(), None);
    }

    #[test]
    fn select_node_on_empty_project() {
        let mut project = Project::new("empty");
        assert!(!project.select_node(0));
        assert!(project.selected_node().is_none());
    }

    #[test]
    fn normalized_orders_corners() {
        let nodebox = NodeBox::new("flipped", Vector3::new(0.5, -0.5, 0.2), Vector3::new(-0.5, 0.5, 0.1));
        let fixed = nodebox.normalized();
        assert_eq!(fixed.min, Vector3::new(-0.5, -0.5, 0.1));
        assert_eq!(fixed.max, Vector3::new(0.5, 0.5, 0.2));
    }

    #[test]
    fn equality_ignores_session_state() {
        let mut a = sample_project();
        let b = sample_project();
        a.select_node(1);
        assert_eq!(a, b);
    }

    #[test]
    fn merge_renames_clashing_nodes() {
        let mut project = sample_project();
        let mut other = Project::new("other");
        other.add_node(Node::new("stair", Vector3::new(0, 1, 0)));
        other.add_node(Node::new("stair", Vector3::new(0, 2, 0)));
        other.add_node(Node::new("pillar", Vector3::new(0, 3, 0)));

        let summary = project.merge(other);
        assert_eq!(summary.nodes_added, 3);
        assert_eq!(summary.nodes_renamed, 2);

        let names: Vec<_> = project.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["stair", "slab", "stair_2", "stair_3", "pillar"]);
    }

    #[test]
    fn merge_keeps_existing_images() {
        let mut project = sample_project();
        project.media.add(Image::missing("wood.png"));

        let mut other = Project::new("other");
        other
            .media
            .add(Image::new("wood.png", image::RgbaImage::new(1, 1)));
        other.media.add(Image::missing("stone.png"));

        let summary = project.merge(other);
        assert_eq!(summary.images_added, 1);
        assert_eq!(summary.images_skipped, 1);
        assert!(project.media.get("wood.png").is_some_and(|img| img.get().is_none()));
        assert!(project.media.contains("stone.png"));
    }

    #[test]
    fn remesh_tracks_node_count_after_merge() {
        let mut project = sample_project();
        let mut other = Project::new("other");
        other.add_node(Node::new("extra", Vector3::zeros()).with_box(NodeBox::full("b")));
        project.merge(other);
        assert_eq!(project.meshes().len(), 2);

        project.remesh();
        assert_eq!(project.meshes().len(), 3);
    }
}
