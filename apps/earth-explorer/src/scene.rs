//! Earth scene construction: globe layers, decorations, starfield, intro
//! overlay, sun and camera.

use glam::Vec3;
use orbit_engine::{
    AssetManifest, DirectionalLight, EngineContext, Geometry, Material, MaterialKind, Node, NodeId,
    NodeKind, PerspectiveCamera, Rng,
};

use crate::catalog::SatelliteKind;
use crate::config::ExplorerConfig;
use crate::explore::ExploreTargets;

// ── Layout ───────────────────────────────────────────────────────────

const EARTH_RADIUS: f32 = 1.0;
const SPHERE_SEGMENTS: u32 = 64;
const AXIAL_TILT_DEG: f32 = -23.4;

const CLOUD_SCALE: f32 = 1.003;
const CLOUD_OPACITY: f32 = 0.8;
const GLOW_SCALE: f32 = 1.01;
const HALO_RADIUS: f32 = 1.1;
const HALO_SCALE: f32 = 1.03;
const BUMP_SCALE: f32 = 0.04;

const STAR_COUNT: u32 = 2000;

const SATELLITE_COUNT: usize = 5;
const SATELLITE_ORBIT: f32 = 1.5;
const ASTEROID_COUNT: usize = 15;
const ASTEROID_ORBIT: f32 = 1.7;
const ASTEROID_RADIUS: f32 = 0.02;
const ASTEROID_COLOR: u32 = 0x808080;

const SUN_COLOR: u32 = 0xffffff;
const SUN_INTENSITY: f32 = 5.0;

/// DOM id of the intro text the explore sequence fades out.
pub const INTRO_ELEMENT: &str = "introText";

/// Files the scene needs. Spreadsheet entries are filled from config.
const DEFAULT_MANIFEST: &str = r#"{
    "textures": {
        "earth_diffuse": "./textures/Earth_Diffuse_6K.jpg",
        "earth_specular": "./textures/Earth_Glossiness_6K.jpg",
        "earth_bump": "./textures/Earth_Bump_6K.jpg",
        "earth_lights": "./textures/Earth_Lights_6K.jpg",
        "earth_clouds": "./textures/Earth_Clouds_6K.jpg"
    },
    "models": {
        "satellite": { "path": "./simple_satellite_low_poly_free/scene.gltf", "scale": 0.02 }
    }
}"#;

/// The app's asset manifest, with dataset paths taken from `config`.
pub fn manifest(config: &ExplorerConfig) -> AssetManifest {
    let mut manifest = match AssetManifest::from_json(DEFAULT_MANIFEST) {
        Ok(m) => m,
        Err(err) => {
            log::error!("bad built-in manifest: {}", err);
            AssetManifest::default()
        }
    };
    manifest.data.insert(SatelliteKind::Comet.label().to_string(), config.comet_url.clone());
    manifest.data.insert(SatelliteKind::Manmade.label().to_string(), config.manmade_url.clone());
    manifest
}

/// Node ids the app animates after the build.
#[derive(Debug, Clone)]
pub struct SceneHandles {
    pub earth: NodeId,
    pub halo: NodeId,
    pub intro: NodeId,
    pub satellites: Vec<NodeId>,
    pub asteroids: Vec<NodeId>,
}

impl SceneHandles {
    pub fn explore_targets(&self) -> ExploreTargets {
        ExploreTargets { intro: self.intro, halo: self.halo }
    }
}

fn textured(kind: MaterialKind, manifest: &AssetManifest, slots: &[(&str, &str)]) -> Material {
    slots.iter().fold(Material::new(kind), |material, (slot, name)| match manifest.texture(name) {
        Some(path) => material.with_texture(slot, path),
        None => {
            log::warn!("texture '{}' missing from manifest", name);
            material
        }
    })
}

fn sphere(radius: f32) -> Geometry {
    Geometry::Sphere { radius, segments: SPHERE_SEGMENTS }
}

/// Build the whole scene into `ctx` and reset camera and sun.
pub fn build(ctx: &mut EngineContext, manifest: &AssetManifest, seed: u64) -> SceneHandles {
    let mut rng = Rng::new(seed);

    ctx.camera = PerspectiveCamera::default();
    ctx.sun = DirectionalLight::new(SUN_COLOR, SUN_INTENSITY).with_position(Vec3::new(-2.0, 0.5, 1.5));

    let earth = ctx.next_id();
    ctx.scene.spawn(
        Node::group(earth)
            .with_tag("earth")
            .with_rotation(Vec3::new(0.0, 0.0, AXIAL_TILT_DEG.to_radians())),
    );

    let surface = textured(
        MaterialKind::Phong,
        manifest,
        &[("map", "earth_diffuse"), ("specular_map", "earth_specular"), ("bump_map", "earth_bump")],
    )
    .with_bump_scale(BUMP_SCALE);
    let id = ctx.next_id();
    ctx.scene.spawn(Node::mesh(id, sphere(EARTH_RADIUS), surface).with_tag("surface").with_parent(earth));

    let lights = textured(MaterialKind::Basic, manifest, &[("map", "earth_lights")]).additive();
    let id = ctx.next_id();
    ctx.scene.spawn(Node::mesh(id, sphere(EARTH_RADIUS), lights).with_tag("city_lights").with_parent(earth));

    let clouds = textured(
        MaterialKind::Standard,
        manifest,
        &[("map", "earth_clouds"), ("alpha_map", "earth_clouds")],
    )
    .with_opacity(CLOUD_OPACITY)
    .additive();
    let id = ctx.next_id();
    ctx.scene.spawn(
        Node::mesh(id, sphere(EARTH_RADIUS), clouds)
            .with_tag("clouds")
            .with_parent(earth)
            .with_scale(CLOUD_SCALE),
    );

    let id = ctx.next_id();
    ctx.scene.spawn(
        Node::mesh(id, sphere(EARTH_RADIUS), Material::new(MaterialKind::Fresnel))
            .with_tag("glow")
            .with_parent(earth)
            .with_scale(GLOW_SCALE),
    );

    let halo = ctx.next_id();
    ctx.scene.spawn(
        Node::mesh(halo, sphere(HALO_RADIUS), Material::new(MaterialKind::Fresnel).transparent().additive())
            .with_tag("halo")
            .with_parent(earth)
            .with_scale(HALO_SCALE),
    );

    let id = ctx.next_id();
    ctx.scene.spawn(Node::new(id, NodeKind::Starfield { count: STAR_COUNT }).with_tag("stars"));

    let satellite_group = ctx.next_id();
    ctx.scene.spawn(Node::group(satellite_group).with_tag("satellites").with_parent(earth));
    let mut satellites = Vec::with_capacity(SATELLITE_COUNT);
    match manifest.model("satellite") {
        Some(model) => {
            for _ in 0..SATELLITE_COUNT {
                let id = ctx.next_id();
                let position = rng.unit_vector() * EARTH_RADIUS * SATELLITE_ORBIT;
                ctx.scene.spawn(
                    Node::new(id, NodeKind::Model { path: model.path.clone(), scale: model.scale })
                        .with_parent(satellite_group)
                        .with_position(position)
                        .facing_origin(),
                );
                satellites.push(id);
            }
        }
        None => log::error!("satellite model missing from manifest"),
    }

    let asteroid_group = ctx.next_id();
    ctx.scene.spawn(Node::group(asteroid_group).with_tag("asteroids").with_parent(earth));
    let rock = Material::new(MaterialKind::Standard).with_color(ASTEROID_COLOR);
    let mut asteroids = Vec::with_capacity(ASTEROID_COUNT);
    for _ in 0..ASTEROID_COUNT {
        let id = ctx.next_id();
        let position = rng.unit_vector() * EARTH_RADIUS * ASTEROID_ORBIT;
        ctx.scene.spawn(
            Node::mesh(id, Geometry::Dodecahedron { radius: ASTEROID_RADIUS }, rock.clone())
                .with_parent(asteroid_group)
                .with_position(position)
                .facing_origin(),
        );
        asteroids.push(id);
    }

    let intro = ctx.next_id();
    ctx.scene.spawn(
        Node::new(intro, NodeKind::Overlay { element_id: INTRO_ELEMENT.to_string() }).with_tag("intro"),
    );

    log::info!("scene built: {} nodes", ctx.scene.len());

    SceneHandles { earth, halo, intro, satellites, asteroids }
}
