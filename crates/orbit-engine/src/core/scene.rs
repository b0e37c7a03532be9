use std::collections::BTreeMap;

use glam::Vec3;
use serde::Serialize;

use crate::api::types::NodeId;

/// Primitive geometry the host knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Sphere { radius: f32, segments: u32 },
    Dodecahedron { radius: f32 },
}

/// Shading model requested from the host's graphics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Lit with specular highlights.
    Phong,
    /// Unlit.
    Basic,
    /// Physically based.
    Standard,
    /// Rim-light shader for atmospheric glow.
    Fresnel,
}

/// Material description. Texture slots map a host slot name ("map",
/// "bump_map", ...) to a texture path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub kind: MaterialKind,
    pub textures: BTreeMap<String, String>,
    /// 0xRRGGBB
    pub color: u32,
    pub opacity: f32,
    pub transparent: bool,
    pub additive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bump_scale: Option<f32>,
}

impl Material {
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            textures: BTreeMap::new(),
            color: 0xffffff,
            opacity: 1.0,
            transparent: false,
            additive: false,
            bump_scale: None,
        }
    }

    pub fn with_texture(mut self, slot: &str, path: impl Into<String>) -> Self {
        self.textures.insert(slot.to_string(), path.into());
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = opacity < 1.0 || self.transparent;
        self
    }

    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    pub fn additive(mut self) -> Self {
        self.additive = true;
        self
    }

    pub fn with_bump_scale(mut self, scale: f32) -> Self {
        self.bump_scale = Some(scale);
        self
    }
}

/// What a node is, from the host's point of view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Transform-only container.
    Group,
    Mesh { geometry: Geometry, material: Material },
    /// External model asset, cloned per node.
    Model { path: String, scale: f32 },
    /// Random point cloud backdrop.
    Starfield { count: u32 },
    /// A DOM element whose opacity follows the node.
    Overlay { element_id: String },
}

/// One entry in the scene description.
///
/// Static properties (kind, parent, position) are read by the host once from
/// [`Scene::to_json`]; rotation, scale, opacity and visibility are republished
/// every frame through the frame buffer.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub tag: String,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub position: Vec3,
    /// Euler angles in radians (XYZ order).
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
    pub opacity: f32,
    pub visible: bool,
    /// Orient the node toward the world origin after placement.
    pub face_origin: bool,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            tag: String::new(),
            parent: None,
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
            opacity: 1.0,
            visible: true,
            face_origin: false,
        }
    }

    pub fn group(id: NodeId) -> Self {
        Self::new(id, NodeKind::Group)
    }

    pub fn mesh(id: NodeId, geometry: Geometry, material: Material) -> Self {
        Self::new(id, NodeKind::Mesh { geometry, material })
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn facing_origin(mut self) -> Self {
        self.face_origin = true;
        self
    }
}

/// Flat node storage, in spawn order.
/// Designed for small scene descriptions (tens of nodes).
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Direct children of `parent`, in spawn order.
    pub fn children_of(&self, parent: NodeId) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.parent == Some(parent))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize the full description for the host's one-time scene build.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.nodes)
    }
}
