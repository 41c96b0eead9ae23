use crate::core::{Color, Vec3};
use crate::error::{RaysceneError, RaysceneResult};

/// Camera pose: eye position plus up and view direction vectors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Camera {
    pub eye: Vec3,
    pub up: Vec3,
    pub view: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3, up: Vec3, view: Vec3) -> Self {
        Self { eye, up, view }
    }
}

/// Image resolution and the signed extents of the image plane.
///
/// The extents are signed by convention: left and bottom are negative, top
/// and right are positive, with the origin inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    x_resolution: u32,
    y_resolution: u32,
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Viewport {
    /// Create a validated viewport.
    pub fn new(
        x_resolution: u32,
        y_resolution: u32,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> RaysceneResult<Self> {
        if x_resolution == 0 {
            return Err(RaysceneError::out_of_range(
                "viewport x_resolution must be positive",
            ));
        }
        if y_resolution == 0 {
            return Err(RaysceneError::out_of_range(
                "viewport y_resolution must be positive",
            ));
        }
        if left >= 0.0 {
            return Err(RaysceneError::out_of_range("viewport left must be negative"));
        }
        if top <= 0.0 {
            return Err(RaysceneError::out_of_range("viewport top must be positive"));
        }
        if right <= 0.0 {
            return Err(RaysceneError::out_of_range(
                "viewport right must be positive",
            ));
        }
        if bottom >= 0.0 {
            return Err(RaysceneError::out_of_range(
                "viewport bottom must be negative",
            ));
        }
        Ok(Self {
            x_resolution,
            y_resolution,
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn x_resolution(self) -> u32 {
        self.x_resolution
    }

    pub fn y_resolution(self) -> u32 {
        self.y_resolution
    }

    pub fn left(self) -> f64 {
        self.left
    }

    pub fn top(self) -> f64 {
        self.top
    }

    pub fn right(self) -> f64 {
        self.right
    }

    pub fn bottom(self) -> f64 {
        self.bottom
    }
}

/// Projection model used to map the scene onto the image plane.
///
/// Closed set: consumers match exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Projection {
    Orthographic,
    Perspective { focal_length: f64 },
}

impl Projection {
    /// Create a validated perspective projection with `focal_length > 0`.
    pub fn perspective(focal_length: f64) -> RaysceneResult<Self> {
        if focal_length <= 0.0 {
            return Err(RaysceneError::out_of_range(
                "perspective focal_length must be positive",
            ));
        }
        Ok(Self::Perspective { focal_length })
    }
}

/// Shading model applied to scene surfaces.
///
/// Closed set: consumers match exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Shader {
    Flat,
    Phong {
        ambient_coeff: f64,
        diffuse_coeff: f64,
        specular_coeff: f64,
        ambient_color: Color,
    },
}

impl Shader {
    /// Create a validated Phong shader with all coefficients non-negative.
    pub fn phong(
        ambient_coeff: f64,
        diffuse_coeff: f64,
        specular_coeff: f64,
        ambient_color: Color,
    ) -> RaysceneResult<Self> {
        for (name, value) in [
            ("ambient_coeff", ambient_coeff),
            ("diffuse_coeff", diffuse_coeff),
            ("specular_coeff", specular_coeff),
        ] {
            if value < 0.0 {
                return Err(RaysceneError::out_of_range(format!(
                    "phong {name} must be non-negative"
                )));
            }
        }
        Ok(Self::Phong {
            ambient_coeff,
            diffuse_coeff,
            specular_coeff,
            ambient_color,
        })
    }
}

/// Stable handle to a material owned by a [`crate::scene::Scene`].
///
/// Handles are indices into the scene's append-only materials collection, so
/// they stay valid for the lifetime of the scene that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct MaterialId(pub(crate) usize);

impl MaterialId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Named surface material.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Material {
    name: String,
    shininess: f64,
    color: Color,
}

impl Material {
    /// Create a validated material with `shininess > 0`.
    pub fn new(name: impl Into<String>, shininess: f64, color: Color) -> RaysceneResult<Self> {
        if shininess <= 0.0 {
            return Err(RaysceneError::out_of_range(
                "material shininess must be positive",
            ));
        }
        Ok(Self {
            name: name.into(),
            shininess,
            color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shininess(&self) -> f64 {
        self.shininess
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Omnidirectional light source.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PointLight {
    location: Vec3,
    color: Color,
    intensity: f64,
}

impl PointLight {
    /// Create a validated point light with `intensity > 0`.
    pub fn new(location: Vec3, color: Color, intensity: f64) -> RaysceneResult<Self> {
        if intensity <= 0.0 {
            return Err(RaysceneError::out_of_range(
                "point light intensity must be positive",
            ));
        }
        Ok(Self {
            location,
            color,
            intensity,
        })
    }

    pub fn location(self) -> Vec3 {
        self.location
    }

    pub fn color(self) -> Color {
        self.color
    }

    pub fn intensity(self) -> f64 {
        self.intensity
    }
}

/// Sphere primitive referencing a scene material.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Sphere {
    material: MaterialId,
    center: Vec3,
    radius: f64,
}

impl Sphere {
    /// Create a validated sphere with `radius > 0`.
    pub fn new(material: MaterialId, center: Vec3, radius: f64) -> RaysceneResult<Self> {
        if radius <= 0.0 {
            return Err(RaysceneError::out_of_range(
                "sphere radius must be positive",
            ));
        }
        Ok(Self {
            material,
            center,
            radius,
        })
    }

    pub fn material(self) -> MaterialId {
        self.material
    }

    pub fn center(self) -> Vec3 {
        self.center
    }

    pub fn radius(self) -> f64 {
        self.radius
    }
}

/// Triangle primitive referencing a scene material.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Triangle {
    material: MaterialId,
    a: Vec3,
    b: Vec3,
    c: Vec3,
}

impl Triangle {
    /// Create a validated triangle with pairwise-distinct vertices.
    pub fn new(material: MaterialId, a: Vec3, b: Vec3, c: Vec3) -> RaysceneResult<Self> {
        if a == b || a == c || b == c {
            return Err(RaysceneError::degenerate_geometry(
                "triangle is degenerate due to duplicated vertices",
            ));
        }
        Ok(Self { material, a, b, c })
    }

    pub fn material(self) -> MaterialId {
        self.material
    }

    pub fn a(self) -> Vec3 {
        self.a
    }

    pub fn b(self) -> Vec3 {
        self.b
    }

    pub fn c(self) -> Vec3 {
        self.c
    }
}
