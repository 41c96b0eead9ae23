//! Rayscene deserializes a JSON description of a 3-D rendering scene into a
//! strongly-typed, invariant-checked model.
//!
//! The public API is load-oriented:
//!
//! - Parse and validate a [`Scene`] with [`Scene::from_path`],
//!   [`Scene::from_reader`], or [`Scene::from_json`]
//! - Walk the immutable aggregate: camera, viewport, projection, shader,
//!   background, materials, lights, and primitives
//!
//! Any schema violation aborts the whole build with a single
//! [`RaysceneError`] naming the offending field; no partial scene is ever
//! produced.
#![forbid(unsafe_code)]

mod build;
pub mod core;
pub mod error;
pub mod model;
pub mod scene;
pub mod schema;

pub use crate::core::{Color, Vec3};
pub use crate::error::{RaysceneError, RaysceneResult};
pub use crate::model::{
    Camera, Material, MaterialId, PointLight, Projection, Shader, Sphere, Triangle, Viewport,
};
pub use crate::scene::Scene;
