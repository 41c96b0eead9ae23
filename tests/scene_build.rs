use rayscene::{Projection, RaysceneError, Scene, Shader, Vec3};
use serde_json::{Value, json};

/// Minimal valid document used as the baseline for single-field mutations.
fn base_doc() -> Value {
    json!({
        "camera_eye": [1.0, 1.0, 1.0],
        "camera_up": [0.0, 1.0, 0.0],
        "camera_view": [0.0, 0.0, -1.0],
        "x_resolution": 640,
        "y_resolution": 480,
        "viewport_left": -1.0,
        "viewport_top": 1.0,
        "viewport_right": 1.0,
        "viewport_bottom": -1.0,
        "ortho_projection": true,
        "flat_shader": true,
        "background": [0.0, 0.0, 0.0],
        "materials": [
            {"name": "m", "shininess": 1, "color": [1.0, 1.0, 1.0]}
        ],
        "spheres": [
            {"material": "m", "center": [0, 0, -5], "radius": 1}
        ]
    })
}

fn with(doc: &Value, key: &str, value: Value) -> Value {
    let mut doc = doc.clone();
    doc.as_object_mut().unwrap().insert(key.to_owned(), value);
    doc
}

fn without(doc: &Value, key: &str) -> Value {
    let mut doc = doc.clone();
    doc.as_object_mut().unwrap().remove(key);
    doc
}

#[test]
fn concrete_scenario_builds_exactly() {
    let scene = Scene::from_json(&base_doc()).unwrap();

    assert_eq!(scene.camera().eye, Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(scene.camera().up, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(scene.camera().view, Vec3::new(0.0, 0.0, -1.0));

    assert_eq!(scene.viewport().x_resolution(), 640);
    assert_eq!(scene.viewport().y_resolution(), 480);
    assert_eq!(scene.viewport().left(), -1.0);
    assert_eq!(scene.viewport().top(), 1.0);
    assert_eq!(scene.viewport().right(), 1.0);
    assert_eq!(scene.viewport().bottom(), -1.0);

    assert_eq!(scene.projection(), Projection::Orthographic);
    assert_eq!(scene.shader(), Shader::Flat);

    let bg = scene.background();
    assert_eq!((bg.r(), bg.g(), bg.b()), (0.0, 0.0, 0.0));

    assert_eq!(scene.materials().len(), 1);
    assert_eq!(scene.spheres().len(), 1);
    assert_eq!(scene.triangles().len(), 0);
    assert_eq!(scene.point_lights().len(), 0);

    let sphere = scene.spheres()[0];
    assert_eq!(sphere.center(), Vec3::new(0.0, 0.0, -5.0));
    assert_eq!(sphere.radius(), 1.0);
    assert_eq!(scene.material(sphere.material()).name(), "m");
    assert_eq!(scene.material_by_name("m"), Some(sphere.material()));
}

#[test]
fn building_twice_is_deterministic() {
    let doc = base_doc();
    let first = Scene::from_json(&doc).unwrap();
    let second = Scene::from_json(&doc).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_required_field_is_required() {
    let required = [
        "camera_eye",
        "camera_up",
        "camera_view",
        "x_resolution",
        "y_resolution",
        "viewport_left",
        "viewport_top",
        "viewport_right",
        "viewport_bottom",
        "background",
        "materials",
    ];
    let doc = base_doc();
    for key in required {
        let err = Scene::from_json(&without(&doc, key)).unwrap_err();
        assert!(
            matches!(err, RaysceneError::MissingField(_)),
            "{key}: {err}"
        );
        assert!(err.to_string().contains(key), "{key}: {err}");
    }
}

#[test]
fn wrong_typed_fields_fail_and_repair_restores_success() {
    let doc = base_doc();
    let cases = [
        ("camera_eye", json!("not a vector")),
        ("camera_up", json!([0.0, 1.0])),
        ("x_resolution", json!("640")),
        ("x_resolution", json!(1.5)),
        ("viewport_left", json!(true)),
        ("background", json!([0.0, 0.0])),
        ("materials", json!(7)),
    ];
    for (key, bad) in cases {
        let broken = with(&doc, key, bad.clone());
        let err = Scene::from_json(&broken).unwrap_err();
        assert!(
            matches!(
                err,
                RaysceneError::WrongType(_) | RaysceneError::WrongLength(_)
            ),
            "{key}={bad}: {err}"
        );

        // Re-supplying the original value alone restores success.
        let repaired = with(&broken, key, doc[key].clone());
        Scene::from_json(&repaired).unwrap();
    }
}

#[test]
fn out_of_range_fields_fail_and_repair_restores_success() {
    let doc = base_doc();
    let cases = [
        ("x_resolution", json!(0)),
        ("y_resolution", json!(-480)),
        ("viewport_left", json!(1.0)),
        ("viewport_top", json!(-1.0)),
        ("viewport_right", json!(-1.0)),
        ("viewport_bottom", json!(1.0)),
        ("background", json!([0.0, 1.5, 0.0])),
    ];
    for (key, bad) in cases {
        let broken = with(&doc, key, bad.clone());
        let err = Scene::from_json(&broken).unwrap_err();
        assert!(
            matches!(err, RaysceneError::OutOfRange(_)),
            "{key}={bad}: {err}"
        );

        let repaired = with(&broken, key, doc[key].clone());
        Scene::from_json(&repaired).unwrap();
    }
}

#[test]
fn all_four_variant_combinations_succeed() {
    let phong = json!({
        "ambient_coeff": 0.1,
        "diffuse_coeff": 0.6,
        "specular_coeff": 0.3,
        "ambient_color": [0.2, 0.2, 0.2]
    });

    let base = base_doc();
    let ortho = |doc: &Value| doc.clone();
    let persp = |doc: &Value| {
        with(&without(doc, "ortho_projection"), "persp_focal_length", json!(2.5))
    };
    let flat = |doc: &Value| doc.clone();
    let phong_of = |doc: &Value| with(&without(doc, "flat_shader"), "phong_shader", phong.clone());

    let scene = Scene::from_json(&flat(&ortho(&base))).unwrap();
    assert_eq!(scene.projection(), Projection::Orthographic);
    assert_eq!(scene.shader(), Shader::Flat);

    let scene = Scene::from_json(&phong_of(&ortho(&base))).unwrap();
    assert_eq!(scene.projection(), Projection::Orthographic);
    assert!(matches!(scene.shader(), Shader::Phong { .. }));

    let scene = Scene::from_json(&flat(&persp(&base))).unwrap();
    assert_eq!(scene.projection(), Projection::Perspective { focal_length: 2.5 });
    assert_eq!(scene.shader(), Shader::Flat);

    let scene = Scene::from_json(&phong_of(&persp(&base))).unwrap();
    assert_eq!(scene.projection(), Projection::Perspective { focal_length: 2.5 });
    let Shader::Phong {
        ambient_coeff,
        diffuse_coeff,
        specular_coeff,
        ambient_color,
    } = scene.shader()
    else {
        panic!("expected phong shader");
    };
    assert_eq!(ambient_coeff, 0.1);
    assert_eq!(diffuse_coeff, 0.6);
    assert_eq!(specular_coeff, 0.3);
    assert_eq!(
        (ambient_color.r(), ambient_color.g(), ambient_color.b()),
        (0.2, 0.2, 0.2)
    );
}

#[test]
fn projection_variants_are_mutually_exclusive() {
    let doc = base_doc();

    let err = Scene::from_json(&with(&doc, "persp_focal_length", json!(2.0))).unwrap_err();
    assert!(matches!(err, RaysceneError::ConflictingVariant(_)), "{err}");

    let err = Scene::from_json(&without(&doc, "ortho_projection")).unwrap_err();
    assert!(matches!(err, RaysceneError::MissingVariant(_)), "{err}");

    let err = Scene::from_json(&with(&doc, "ortho_projection", json!(false))).unwrap_err();
    assert!(matches!(err, RaysceneError::InvalidValue(_)), "{err}");

    let err = Scene::from_json(&with(&doc, "ortho_projection", json!(1))).unwrap_err();
    assert!(matches!(err, RaysceneError::WrongType(_)), "{err}");
}

#[test]
fn shader_variants_are_mutually_exclusive() {
    let doc = base_doc();
    let phong = json!({
        "ambient_coeff": 0.1,
        "diffuse_coeff": 0.6,
        "specular_coeff": 0.3,
        "ambient_color": [0.2, 0.2, 0.2]
    });

    let err = Scene::from_json(&with(&doc, "phong_shader", phong.clone())).unwrap_err();
    assert!(matches!(err, RaysceneError::ConflictingVariant(_)), "{err}");

    let err = Scene::from_json(&without(&doc, "flat_shader")).unwrap_err();
    assert!(matches!(err, RaysceneError::MissingVariant(_)), "{err}");

    let err = Scene::from_json(&with(&doc, "flat_shader", json!(false))).unwrap_err();
    assert!(matches!(err, RaysceneError::InvalidValue(_)), "{err}");

    let phong_doc = with(&without(&doc, "flat_shader"), "phong_shader", phong);
    let err = Scene::from_json(&with(
        &phong_doc,
        "phong_shader",
        json!({
            "ambient_coeff": -0.1,
            "diffuse_coeff": 0.6,
            "specular_coeff": 0.3,
            "ambient_color": [0.2, 0.2, 0.2]
        }),
    ))
    .unwrap_err();
    assert!(matches!(err, RaysceneError::OutOfRange(_)), "{err}");
}

#[test]
fn duplicate_material_names_are_rejected() {
    let doc = with(
        &base_doc(),
        "materials",
        json!([
            {"name": "m", "shininess": 1.0, "color": [1.0, 1.0, 1.0]},
            {"name": "m", "shininess": 2.0, "color": [0.5, 0.5, 0.5]}
        ]),
    );
    let err = Scene::from_json(&doc).unwrap_err();
    assert!(matches!(err, RaysceneError::DuplicateName(_)), "{err}");
    assert!(err.to_string().contains("\"m\""));

    // Changing either name restores success.
    let doc = with(
        &doc,
        "materials",
        json!([
            {"name": "m", "shininess": 1.0, "color": [1.0, 1.0, 1.0]},
            {"name": "m2", "shininess": 2.0, "color": [0.5, 0.5, 0.5]}
        ]),
    );
    let scene = Scene::from_json(&doc).unwrap();
    assert_eq!(scene.materials().len(), 2);
}

#[test]
fn duplicate_names_are_reported_before_primitive_references() {
    // The sphere below also references a missing material, but the material
    // list is validated first.
    let doc = with(
        &with(
            &base_doc(),
            "materials",
            json!([
                {"name": "m", "shininess": 1.0, "color": [1.0, 1.0, 1.0]},
                {"name": "m", "shininess": 2.0, "color": [0.5, 0.5, 0.5]}
            ]),
        ),
        "spheres",
        json!([{"material": "ghost", "center": [0, 0, -5], "radius": 1.0}]),
    );
    let err = Scene::from_json(&doc).unwrap_err();
    assert!(matches!(err, RaysceneError::DuplicateName(_)), "{err}");
}

#[test]
fn unknown_material_references_are_rejected() {
    let doc = with(
        &base_doc(),
        "spheres",
        json!([{"material": "ghost", "center": [0, 0, -5], "radius": 1.0}]),
    );
    let err = Scene::from_json(&doc).unwrap_err();
    assert!(matches!(err, RaysceneError::UnknownReference(_)), "{err}");
    assert!(err.to_string().contains("\"ghost\""));

    let doc = with(
        &base_doc(),
        "triangles",
        json!([{
            "material": "ghost",
            "a": [0, 0, 0],
            "b": [1, 0, 0],
            "c": [0, 1, 0]
        }]),
    );
    let err = Scene::from_json(&doc).unwrap_err();
    assert!(matches!(err, RaysceneError::UnknownReference(_)), "{err}");
}

#[test]
fn degenerate_triangles_are_rejected_in_every_arrangement() {
    let p = json!([0, 0, 0]);
    let q = json!([1, 0, 0]);
    let r = json!([0, 1, 0]);

    for (a, b, c) in [
        (p.clone(), p.clone(), r.clone()),
        (p.clone(), q.clone(), p.clone()),
        (p.clone(), q.clone(), q.clone()),
    ] {
        let doc = with(
            &base_doc(),
            "triangles",
            json!([{"material": "m", "a": a, "b": b, "c": c}]),
        );
        let err = Scene::from_json(&doc).unwrap_err();
        assert!(matches!(err, RaysceneError::DegenerateGeometry(_)), "{err}");
    }

    // Restoring distinctness succeeds.
    let doc = with(
        &base_doc(),
        "triangles",
        json!([{"material": "m", "a": p, "b": q, "c": r}]),
    );
    let scene = Scene::from_json(&doc).unwrap();
    assert_eq!(scene.triangles().len(), 1);
}

#[test]
fn degeneracy_is_reported_even_with_an_unknown_material() {
    let doc = with(
        &base_doc(),
        "triangles",
        json!([{
            "material": "ghost",
            "a": [0, 0, 0],
            "b": [0, 0, 0],
            "c": [0, 1, 0]
        }]),
    );
    let err = Scene::from_json(&doc).unwrap_err();
    assert!(matches!(err, RaysceneError::DegenerateGeometry(_)), "{err}");
}

#[test]
fn optional_lists_default_to_empty() {
    let doc = without(&without(&base_doc(), "spheres"), "point_lights");
    let scene = Scene::from_json(&doc).unwrap();
    assert!(scene.point_lights().is_empty());
    assert!(scene.spheres().is_empty());
    assert!(scene.triangles().is_empty());
}

#[test]
fn materials_list_may_be_empty() {
    let doc = with(&without(&base_doc(), "spheres"), "materials", json!([]));
    let scene = Scene::from_json(&doc).unwrap();
    assert!(scene.materials().is_empty());
}

#[test]
fn point_lights_are_validated_per_element() {
    let doc = with(
        &base_doc(),
        "point_lights",
        json!([{
            "location": [10.0, 10.0, 0.0],
            "color": [1.0, 1.0, 1.0],
            "intensity": 2.5
        }]),
    );
    let scene = Scene::from_json(&doc).unwrap();
    assert_eq!(scene.point_lights().len(), 1);
    assert_eq!(scene.point_lights()[0].intensity(), 2.5);

    let doc = with(
        &base_doc(),
        "point_lights",
        json!([{
            "location": [10.0, 10.0, 0.0],
            "color": [1.0, 1.0, 1.0],
            "intensity": 0.0
        }]),
    );
    let err = Scene::from_json(&doc).unwrap_err();
    assert!(matches!(err, RaysceneError::OutOfRange(_)), "{err}");

    let doc = with(&base_doc(), "point_lights", json!([42]));
    let err = Scene::from_json(&doc).unwrap_err();
    assert!(matches!(err, RaysceneError::WrongType(_)), "{err}");
}

#[test]
fn malformed_bytes_are_a_syntax_error() {
    let err = Scene::from_reader("{not json".as_bytes()).unwrap_err();
    assert!(matches!(err, RaysceneError::Syntax(_)), "{err}");
}

#[test]
fn non_object_root_is_rejected() {
    let err = Scene::from_reader("[1, 2, 3]".as_bytes()).unwrap_err();
    assert!(matches!(err, RaysceneError::WrongType(_)), "{err}");
}

#[test]
fn unreadable_path_is_an_io_error() {
    let err = Scene::from_path("target/definitely/does/not/exist.json").unwrap_err();
    assert!(matches!(err, RaysceneError::Io { .. }), "{err}");
    assert!(err.to_string().contains("exist.json"));
}
