//! Viewer state for Tessera
//!
//! Owns the displayed model and swaps it on a timer, substituting a fallback
//! model when a load fails. All state lives here and is advanced by
//! `ViewerState::update` once per frame.

use std::path::{Path, PathBuf};

use tessera_assets::{LoadOptions, Model};
use tessera_core::{FrameClock, Interval, ShadingMode};
use tessera_render::MeshBuffers;
use tracing::{info, warn};

use crate::settings::ViewerSettings;

/// What happened when the viewer tried to show a model
#[derive(Debug, Clone, PartialEq)]
pub enum SwapOutcome {
    /// The requested model is now shown
    Loaded(PathBuf),
    /// The requested model failed; the fallback model is shown instead
    Fallback { failed: PathBuf, error: String },
    /// Neither the requested model nor a fallback could be shown
    Failed { failed: PathBuf, error: String },
}

impl SwapOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Viewer application state
pub struct ViewerState {
    model: Model,
    buffers: MeshBuffers,
    playlist: Vec<PathBuf>,
    next: usize,
    fallback: Option<PathBuf>,
    swap: Interval,
    clock: FrameClock,
    shading: ShadingMode,
}

impl ViewerState {
    pub fn new(settings: &ViewerSettings, options: LoadOptions) -> Self {
        Self {
            model: Model::new(options),
            buffers: MeshBuffers::empty(),
            playlist: settings.models.clone(),
            next: 0,
            fallback: settings.fallback_model.clone(),
            swap: Interval::new(settings.swap_interval),
            clock: FrameClock::default(),
            shading: settings.shading,
        }
    }

    /// Show the first model of the playlist, if any
    pub fn start(&mut self) -> Option<SwapOutcome> {
        self.swap.reset();
        self.advance()
    }

    /// Advance by one frame; swaps the model when the interval elapses
    pub fn update(&mut self, raw_delta: f32) -> Option<SwapOutcome> {
        self.clock.update(raw_delta);

        if self.playlist.len() > 1 && self.swap.tick(self.clock.delta_time) {
            self.advance()
        } else {
            None
        }
    }

    /// Load the next playlist entry, falling back on failure
    pub fn advance(&mut self) -> Option<SwapOutcome> {
        let path = self.playlist.get(self.next)?.clone();
        self.next = (self.next + 1) % self.playlist.len();

        let outcome = self.show(&path);
        self.buffers = MeshBuffers::from_mesh(self.model.mesh());
        Some(outcome)
    }

    fn show(&mut self, path: &Path) -> SwapOutcome {
        let error = match self.model.load_obj(path) {
            Ok(_) => return SwapOutcome::Loaded(path.to_path_buf()),
            Err(e) => e.to_string(),
        };

        let Some(fallback) = self.fallback.clone() else {
            return SwapOutcome::Failed {
                failed: path.to_path_buf(),
                error,
            };
        };

        match self.model.load_obj(&fallback) {
            Ok(_) => {
                info!("Showing fallback model {:?}", fallback);
                SwapOutcome::Fallback {
                    failed: path.to_path_buf(),
                    error,
                }
            }
            Err(e) => {
                warn!("Fallback model failed too: {}", e);
                SwapOutcome::Failed {
                    failed: path.to_path_buf(),
                    error,
                }
            }
        }
    }

    /// Switch to the next shading mode
    pub fn cycle_shading(&mut self) -> ShadingMode {
        self.shading = self.shading.next();
        self.shading
    }

    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Buffers for the currently shown model
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
