//! Single-pass scene assembly over a parsed JSON document.
//!
//! Materials are fully parsed and uniqueness-checked before any sphere or
//! triangle, because primitives resolve material names against the completed
//! set. The pass short-circuits on the first violation; no partially built
//! scene ever escapes.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{RaysceneError, RaysceneResult};
use crate::model::{
    Camera, Material, MaterialId, PointLight, Projection, Shader, Sphere, Triangle, Viewport,
};
use crate::scene::Scene;
use crate::schema;

#[tracing::instrument(skip(doc))]
pub(crate) fn build_scene(doc: &Value) -> RaysceneResult<Scene> {
    let root = doc.as_object().ok_or_else(|| {
        RaysceneError::wrong_type("scene description must be a single JSON object")
    })?;

    let camera = Camera::new(
        schema::get_vector3(root, "camera_eye")?,
        schema::get_vector3(root, "camera_up")?,
        schema::get_vector3(root, "camera_view")?,
    );

    let viewport = Viewport::new(
        schema::get_positive_integer(root, "x_resolution")?,
        schema::get_positive_integer(root, "y_resolution")?,
        schema::get_negative_float(root, "viewport_left")?,
        schema::get_positive_float(root, "viewport_top")?,
        schema::get_positive_float(root, "viewport_right")?,
        schema::get_negative_float(root, "viewport_bottom")?,
    )?;

    let projection = resolve_projection(root)?;
    let shader = resolve_shader(root)?;
    let background = schema::get_color(root, "background")?;

    let mut scene = Scene::new(camera, viewport, projection, shader, background);

    if let Some(items) = optional_array(root, "point_lights")? {
        for (index, item) in items.iter().enumerate() {
            let light = schema::element_object(item, "point_lights", index)?;
            scene.push_point_light(PointLight::new(
                schema::get_vector3(light, "location")?,
                schema::get_color(light, "color")?,
                schema::get_positive_float(light, "intensity")?,
            )?);
        }
    }

    // The materials key itself is required; an empty list is fine.
    for (index, item) in schema::get_array(root, "materials")?.iter().enumerate() {
        let material = schema::element_object(item, "materials", index)?;
        scene.push_material(Material::new(
            schema::get_string(material, "name")?,
            schema::get_positive_float(material, "shininess")?,
            schema::get_color(material, "color")?,
        )?);
    }

    let mut materials_by_name = HashMap::new();
    for (index, material) in scene.materials().iter().enumerate() {
        let previous = materials_by_name.insert(material.name().to_owned(), MaterialId(index));
        if previous.is_some() {
            return Err(RaysceneError::duplicate_name(format!(
                "duplicate material name \"{}\"",
                material.name()
            )));
        }
    }

    if let Some(items) = optional_array(root, "spheres")? {
        for (index, item) in items.iter().enumerate() {
            let sphere = schema::element_object(item, "spheres", index)?;
            let material = resolve_material(
                &materials_by_name,
                &schema::get_string(sphere, "material")?,
                "sphere",
            )?;
            scene.push_sphere(Sphere::new(
                material,
                schema::get_vector3(sphere, "center")?,
                schema::get_positive_float(sphere, "radius")?,
            )?);
        }
    }

    if let Some(items) = optional_array(root, "triangles")? {
        for (index, item) in items.iter().enumerate() {
            let triangle = schema::element_object(item, "triangles", index)?;
            let material_name = schema::get_string(triangle, "material")?;
            let a = schema::get_vector3(triangle, "a")?;
            let b = schema::get_vector3(triangle, "b")?;
            let c = schema::get_vector3(triangle, "c")?;
            // Degeneracy is reported once all three vertices parse, before
            // the material reference is resolved.
            if a == b || a == c || b == c {
                return Err(RaysceneError::degenerate_geometry(
                    "triangle is degenerate due to duplicated vertices",
                ));
            }
            let material = resolve_material(&materials_by_name, &material_name, "triangle")?;
            scene.push_triangle(Triangle::new(material, a, b, c)?);
        }
    }

    Ok(scene)
}

/// Select exactly one of `ortho_projection` or `persp_focal_length`.
fn resolve_projection(root: &Map<String, Value>) -> RaysceneResult<Projection> {
    const ORTHO_KEY: &str = "ortho_projection";
    const PERSP_KEY: &str = "persp_focal_length";

    match (root.contains_key(ORTHO_KEY), root.contains_key(PERSP_KEY)) {
        (true, true) => Err(RaysceneError::conflicting_variant(format!(
            "cannot have both {ORTHO_KEY} and {PERSP_KEY}"
        ))),
        (false, false) => Err(RaysceneError::missing_variant(format!(
            "must have {ORTHO_KEY} or {PERSP_KEY}"
        ))),
        (true, false) => {
            if !schema::get_bool(root, ORTHO_KEY)? {
                return Err(RaysceneError::invalid_value(format!(
                    "{ORTHO_KEY}, if present, must be true"
                )));
            }
            Ok(Projection::Orthographic)
        }
        (false, true) => Projection::perspective(schema::get_positive_float(root, PERSP_KEY)?),
    }
}

/// Select exactly one of `flat_shader` or `phong_shader`.
fn resolve_shader(root: &Map<String, Value>) -> RaysceneResult<Shader> {
    const FLAT_KEY: &str = "flat_shader";
    const PHONG_KEY: &str = "phong_shader";

    match (root.contains_key(FLAT_KEY), root.contains_key(PHONG_KEY)) {
        (true, true) => Err(RaysceneError::conflicting_variant(format!(
            "cannot have both {FLAT_KEY} and {PHONG_KEY}"
        ))),
        (false, false) => Err(RaysceneError::missing_variant(format!(
            "must have {FLAT_KEY} or {PHONG_KEY}"
        ))),
        (true, false) => {
            if !schema::get_bool(root, FLAT_KEY)? {
                return Err(RaysceneError::invalid_value(format!(
                    "{FLAT_KEY}, if present, must be true"
                )));
            }
            Ok(Shader::Flat)
        }
        (false, true) => {
            let child = schema::get_object(root, PHONG_KEY)?;
            Shader::phong(
                schema::get_nonnegative_float(child, "ambient_coeff")?,
                schema::get_nonnegative_float(child, "diffuse_coeff")?,
                schema::get_nonnegative_float(child, "specular_coeff")?,
                schema::get_color(child, "ambient_color")?,
            )
        }
    }
}

fn optional_array<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> RaysceneResult<Option<&'a Vec<Value>>> {
    match root.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_array()
            .map(Some)
            .ok_or_else(|| RaysceneError::wrong_type(format!("expected \"{key}\" to be an array"))),
    }
}

fn resolve_material(
    materials_by_name: &HashMap<String, MaterialId>,
    name: &str,
    referrer: &str,
) -> RaysceneResult<MaterialId> {
    materials_by_name.get(name).copied().ok_or_else(|| {
        RaysceneError::unknown_reference(format!(
            "{referrer} references undefined material \"{name}\""
        ))
    })
}
