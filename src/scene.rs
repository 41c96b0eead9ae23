use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::core::Color;
use crate::error::{RaysceneError, RaysceneResult};
use crate::model::{
    Camera, Material, MaterialId, PointLight, Projection, Shader, Sphere, Triangle, Viewport,
};

/// Fully validated, immutable scene aggregate.
///
/// A `Scene` only ever comes out of the validating build pass, so every child
/// invariant holds and every [`MaterialId`] stored in a sphere or triangle
/// resolves within [`Scene::materials`]. Construction is append-only and
/// single-pass; the public API is read-only.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    camera: Camera,
    viewport: Viewport,
    projection: Projection,
    shader: Shader,
    background: Color,
    materials: Vec<Material>,
    point_lights: Vec<PointLight>,
    spheres: Vec<Sphere>,
    triangles: Vec<Triangle>,
}

impl Scene {
    pub(crate) fn new(
        camera: Camera,
        viewport: Viewport,
        projection: Projection,
        shader: Shader,
        background: Color,
    ) -> Self {
        Self {
            camera,
            viewport,
            projection,
            shader,
            background,
            materials: Vec::new(),
            point_lights: Vec::new(),
            spheres: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Build a scene from an already-parsed JSON document.
    pub fn from_json(doc: &Value) -> RaysceneResult<Self> {
        crate::build::build_scene(doc)
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RaysceneResult<Self> {
        let doc: Value = serde_json::from_reader(r)
            .map_err(|e| RaysceneError::syntax(format!("malformed JSON document: {e}")))?;
        Self::from_json(&doc)
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RaysceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| RaysceneError::io(path, e))?;
        tracing::debug!(path = %path.display(), "reading scene file");
        Self::from_reader(BufReader::new(f))
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn shader(&self) -> Shader {
        self.shader
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Resolve a material handle issued by this scene.
    ///
    /// Panics if `id` came from a different scene and is out of range here.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.index()]
    }

    /// Look up a material handle by name.
    pub fn material_by_name(&self, name: &str) -> Option<MaterialId> {
        self.materials
            .iter()
            .position(|m| m.name() == name)
            .map(MaterialId)
    }

    pub(crate) fn push_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    pub(crate) fn push_point_light(&mut self, light: PointLight) {
        self.point_lights.push(light);
    }

    pub(crate) fn push_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub(crate) fn push_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }
}
