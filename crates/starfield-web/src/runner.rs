use starfield_engine::{ColorMode, FieldConfig, ParticleField, Surface, TickAccumulator};

/// Seconds of simulated time one tick is worth. The field steps a fixed
/// amount per tick, so this only paces catch-up, not visual speed.
pub const TICK_DT: f32 = 1.0 / 60.0;

/// Drives a [`ParticleField`] against a [`Surface`].
///
/// The host supplies frame callbacks (`tick`), viewport changes (`resize`),
/// and lifecycle events. Everything is a silent no-op before `init` and
/// after `teardown`; a runner without a live field does no work.
pub struct FieldRunner<S: Surface> {
    surface: S,
    field: Option<ParticleField>,
    timestep: TickAccumulator,
    config: FieldConfig,
    mode: ColorMode,
}

impl<S: Surface> FieldRunner<S> {
    pub fn new(surface: S, config: FieldConfig, mode: ColorMode) -> Self {
        Self {
            surface,
            field: None,
            timestep: TickAccumulator::new(TICK_DT),
            config,
            mode,
        }
    }

    /// Activate against a viewport: size the surface and build the pool.
    pub fn init(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.field = Some(ParticleField::new(
            self.config.clone(),
            self.mode,
            width as f32,
            height as f32,
        ));
        log::info!(
            "starfield: initialized {}x{} on {}",
            width,
            height,
            self.surface.backend()
        );
    }

    pub fn is_running(&self) -> bool {
        self.field.is_some()
    }

    /// One host frame: run the whole ticks this delta is worth, then repaint.
    pub fn tick(&mut self, dt: f32) {
        let Some(field) = self.field.as_mut() else {
            return;
        };
        let ticks = self.timestep.accumulate(dt);
        for _ in 0..ticks {
            field.tick();
        }
        field.rebuild_paint_buffer();
        self.surface.draw(field.paint_buffer());
    }

    /// Viewport change. Surface and field bounds follow the new size
    /// exactly; particles are not repositioned.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        if let Some(field) = self.field.as_mut() {
            field.resize(width as f32, height as f32);
        }
    }

    /// Forward a theme change to the field (full pool reset).
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
        if let Some(field) = self.field.as_mut() {
            field.set_color_mode(mode);
        }
    }

    /// Swap configuration; a running field is rebuilt around it.
    pub fn configure(&mut self, config: FieldConfig) {
        self.config = config.clone();
        if let Some(field) = self.field.as_mut() {
            field.reconfigure(config);
        }
    }

    /// Stop: drop the field so no further ticks paint.
    pub fn teardown(&mut self) {
        self.field = None;
        log::info!("starfield: torn down");
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }
}
