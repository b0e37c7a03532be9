//! Earth Explorer: a lit, spinning globe with a day-night cycle, a scripted
//! camera tour, and satellite search over two spreadsheet datasets.
//!
//! The host owns the canvas, DOM and orbit controls. This app owns the
//! animation state and the catalog, and answers search calls synchronously.

use orbit_engine::{App, AppConfig, AssetManifest, EngineContext, InputEvent, InputQueue};

use crate::catalog::{Catalog, SatelliteKind, SatelliteRecord};
use crate::config::ExplorerConfig;
use crate::controller::SceneController;
use crate::explore::AnimationPhase;
use crate::info::ImageSources;
use crate::scene::{self, SceneHandles};
use crate::search_box::{SearchBox, SearchOutcome, Suggestion};

// ── Custom event kinds from the host ─────────────────────────────────

/// The host UI dispatched `exploreClicked`.
pub const CUSTOM_EXPLORE: u32 = 1;

pub struct EarthExplorer {
    config: ExplorerConfig,
    fixed_dt: f32,
    manifest: AssetManifest,
    images: ImageSources,
    catalog: Catalog,
    search: SearchBox,
    controller: SceneController,
    handles: Option<SceneHandles>,
}

impl EarthExplorer {
    pub fn new() -> Self {
        Self::with_config(ExplorerConfig::default())
    }

    pub fn with_config(config: ExplorerConfig) -> Self {
        Self {
            fixed_dt: AppConfig::default().fixed_dt,
            manifest: scene::manifest(&config),
            images: ImageSources {
                dir: config.image_dir.clone(),
                fallback: config.fallback_image.clone(),
            },
            catalog: Catalog::new(),
            search: SearchBox::new(),
            controller: SceneController::new(&config),
            handles: None,
            config,
        }
    }

    pub fn settings(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Swap in new settings. Sun and globe angles carry over; refused while
    /// an explore sequence is running. The scene itself is not rebuilt.
    pub fn apply_config(&mut self, config: ExplorerConfig) -> bool {
        if self.controller.explore.in_flight() {
            log::warn!("config change refused while exploring");
            return false;
        }
        let mut controller = SceneController::new(&config);
        controller.day_night.angle = self.controller.day_night.angle;
        controller.spin.angle = self.controller.spin.angle;
        controller.interaction = self.controller.interaction;
        self.controller = controller;

        self.manifest = scene::manifest(&config);
        self.images = ImageSources {
            dir: config.image_dir.clone(),
            fallback: config.fallback_image.clone(),
        };
        self.config = config;
        log::info!("config applied");
        true
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.search
    }

    pub fn controller(&self) -> &SceneController {
        &self.controller
    }

    pub fn handles(&self) -> Option<&SceneHandles> {
        self.handles.as_ref()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.controller.explore.phase()
    }

    /// Dataset URLs, comet first.
    pub fn dataset_sources(&self) -> Vec<(SatelliteKind, String)> {
        [SatelliteKind::Comet, SatelliteKind::Manmade]
            .into_iter()
            .filter_map(|kind| {
                let url = self.manifest.data_file(kind.label())?;
                Some((kind, url.to_string()))
            })
            .collect()
    }

    pub fn install_catalog(&mut self, kind: SatelliteKind, records: Vec<SatelliteRecord>) -> bool {
        self.catalog.install(kind, records)
    }

    // ---- Search entry points ----

    pub fn suggest(&mut self, query: &str) -> Vec<Suggestion> {
        self.search.on_input(query, &self.catalog).to_vec()
    }

    pub fn submit(&mut self, query: &str) -> SearchOutcome {
        self.search.on_submit(query, &self.catalog, &self.images)
    }

    pub fn pick(&mut self, name: &str) -> SearchOutcome {
        self.search.on_pick(name, &self.catalog, &self.images)
    }

    pub fn dismiss_autocomplete(&mut self) {
        self.search.on_outside_click();
    }
}

impl Default for EarthExplorer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for EarthExplorer {
    fn config(&self) -> AppConfig {
        AppConfig {
            fixed_dt: self.fixed_dt,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.handles = Some(scene::build(ctx, &self.manifest, self.config.seed));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::ControlStart => self.controller.interaction.begin(),
                InputEvent::ControlEnd => self.controller.interaction.end(),
                InputEvent::Resize { width, height } => ctx.camera.resize(width, height),
                InputEvent::Custom { kind: CUSTOM_EXPLORE, .. } => {
                    self.controller.explore.request();
                }
                InputEvent::Custom { kind, .. } => log::debug!("unhandled custom event {}", kind),
            }
        }

        if let Some(handles) = &self.handles {
            self.controller
                .step(self.fixed_dt, ctx, handles.earth, &handles.explore_targets());
        }
    }
}
