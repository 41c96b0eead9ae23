use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use rayscene::{Color, Projection, Scene, Shader, Vec3};

#[derive(Parser, Debug)]
#[command(name = "rayscene", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a scene file and print a description of its contents.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input scene JSON.
    path: PathBuf,

    /// Dump the validated scene as pretty JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let scene = Scene::from_path(&args.path)
        .with_context(|| format!("load scene '{}'", args.path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    print_scene(&args.path, &scene);
    Ok(())
}

const TAB: &str = "    ";

fn fmt_vec3(v: Vec3) -> String {
    format!("<x={}, y={}, z={}>", v.x, v.y, v.z)
}

fn fmt_color(c: Color) -> String {
    format!("[r={}, g={}, b={}]", c.r(), c.g(), c.b())
}

fn print_scene(path: &std::path::Path, scene: &Scene) {
    println!("path: \"{}\"", path.display());

    let camera = scene.camera();
    println!("camera:");
    println!("{TAB}eye = {}", fmt_vec3(camera.eye));
    println!("{TAB}up = {}", fmt_vec3(camera.up));
    println!("{TAB}view = {}", fmt_vec3(camera.view));

    let viewport = scene.viewport();
    println!("viewport:");
    println!("{TAB}x_resolution = {}", viewport.x_resolution());
    println!("{TAB}y_resolution = {}", viewport.y_resolution());
    println!("{TAB}left = {}", viewport.left());
    println!("{TAB}top = {}", viewport.top());
    println!("{TAB}right = {}", viewport.right());
    println!("{TAB}bottom = {}", viewport.bottom());

    println!("projection:");
    match scene.projection() {
        Projection::Orthographic => println!("{TAB}orthographic"),
        Projection::Perspective { focal_length } => {
            println!("{TAB}perspective, focal_length = {focal_length}");
        }
    }

    println!("shader:");
    match scene.shader() {
        Shader::Flat => println!("{TAB}flat"),
        Shader::Phong {
            ambient_coeff,
            diffuse_coeff,
            specular_coeff,
            ambient_color,
        } => {
            println!(
                "{TAB}phong ambient_coeff={ambient_coeff}, diffuse_coeff={diffuse_coeff}, \
                 specular_coeff={specular_coeff}, ambient_color={}",
                fmt_color(ambient_color)
            );
        }
    }

    println!("background = {}", fmt_color(scene.background()));

    println!("point_lights:");
    if scene.point_lights().is_empty() {
        println!("{TAB}(none)");
    } else {
        for light in scene.point_lights() {
            println!(
                "{TAB}location={}, color={}, intensity={}",
                fmt_vec3(light.location()),
                fmt_color(light.color()),
                light.intensity()
            );
        }
    }

    println!("materials:");
    if scene.materials().is_empty() {
        println!("{TAB}(none)");
    } else {
        for material in scene.materials() {
            println!(
                "{TAB}name=\"{}\", shininess={}, color={}",
                material.name(),
                material.shininess(),
                fmt_color(material.color())
            );
        }
    }

    println!("spheres:");
    if scene.spheres().is_empty() {
        println!("{TAB}(none)");
    } else {
        for sphere in scene.spheres() {
            println!(
                "{TAB}material=\"{}\", center={}, radius={}",
                scene.material(sphere.material()).name(),
                fmt_vec3(sphere.center()),
                sphere.radius()
            );
        }
    }

    println!("triangles:");
    if scene.triangles().is_empty() {
        println!("{TAB}(none)");
    } else {
        for triangle in scene.triangles() {
            println!(
                "{TAB}material=\"{}\", a={}, b={}, c={}",
                scene.material(triangle.material()).name(),
                fmt_vec3(triangle.a()),
                fmt_vec3(triangle.b()),
                fmt_vec3(triangle.c())
            );
        }
    }
}
