//! Configuration for plotline applications.

use crate::{logging, profiling};

/// Runtime configuration applied once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directives; `None` defers to `RUST_LOG` and the default filter.
    pub log_filter: Option<String>,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: None,
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to 'puffin_viewer' over HTTP
    #[cfg(feature = "profiling-server")]
    WithWebserver,
}

impl Config {
    /// Set an explicit log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Set the profiling mode.
    pub fn with_profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }

    /// Install logging and start profiling according to this configuration.
    pub fn apply(&self) {
        match &self.log_filter {
            Some(filter) => logging::init_with_filter(filter),
            None => logging::init(),
        };

        match self.profiling {
            ProfilingMode::Off => {}
            ProfilingMode::On => profiling::init_profiling(profiling::ProfilingBackend::InProcess),
            #[cfg(feature = "profiling-server")]
            ProfilingMode::WithWebserver => {
                profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp)
            }
        }
    }
}
