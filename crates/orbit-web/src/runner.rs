use orbit_engine::{
    App, AppConfig, EngineContext,
    InputEvent, InputQueue,
    FixedTimestep, ProtocolLayout, FrameWriter,
};

/// Generic app runner that wires up the render loop.
///
/// Each concrete app creates a `thread_local!` AppRunner through
/// [`export_app!`](crate::export_app) and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs.
///
/// One host frame is: `app_tick(dt)` here, then the host's
/// `controls.update()`, then `renderer.render(scene, camera)`.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: AppConfig,
    frame: FrameWriter,
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let frame = FrameWriter::new(ProtocolLayout::from_config(&config));

        Self {
            app,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            timestep,
            frame,
            config,
            initialized: false,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.frame = FrameWriter::new(ProtocolLayout::from_config(&self.config));
        self.app.init(&mut self.ctx);
        self.frame.write(self.timestep.frames(), &self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: fixed-step updates, tweens, then publish the frame.
    ///
    /// Input is seen by the first fixed step only; frames that run zero steps
    /// keep their input for the next frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.app.update(&mut self.ctx, &self.input);
            self.ctx.tick_tweens(self.timestep.dt());
            self.input.drain();
        }

        self.frame.write(self.timestep.frames(), &self.ctx);
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Frame buffer accessors (read by the host via wasm_bindgen exports) ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.as_slice().len() as u32
    }

    pub fn frame(&self) -> &[f32] {
        self.frame.as_slice()
    }

    /// Scene description for the host's one-time build. Empty array on failure.
    pub fn scene_json(&self) -> String {
        match self.ctx.scene.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("scene serialization failed: {}", err);
                "[]".to_string()
            }
        }
    }
}
