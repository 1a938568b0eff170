//! This module provides the directory of containers and level settings.
//!
//! A `Registry` hands out one `Container` per label for its whole lifetime
//! and remembers the minimum level to give handlers built for each label.
//! All of its state sits behind a single mutex.
use super::{CapturingHandler, Container};
use crate::config::CaptureConfig;
use crate::level::Level;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

#[derive(Debug, Default)]
struct RegistryState {
    containers: HashMap<String, Arc<Container>>,
    levels: HashMap<String, Level>,
}

impl RegistryState {
    fn container(&mut self, label: &str) -> Arc<Container> {
        let container = self
            .containers
            .entry(label.to_string())
            .or_insert_with(|| Arc::new(Container::new(label)));
        Arc::clone(container)
    }
}

/// Maps labels to their containers and configured minimum levels.
#[derive(Debug)]
pub struct Registry {
    state: Mutex<RegistryState>,
    default_level: Level,
}

impl Registry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CaptureConfig::default())
    }

    /// Creates an empty registry seeded with the levels of `config`.
    pub fn with_config(config: CaptureConfig) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                containers: HashMap::new(),
                levels: config.label_levels.into_iter().collect(),
            }),
            default_level: config.default_level,
        }
    }

    /// The process-wide registry used by `bootstrap`.
    ///
    /// Created on first use from `CaptureConfig::from_env`; an unparsable
    /// `LOG_CAPTURE_LEVEL` falls back to the default configuration.
    pub fn global() -> &'static Arc<Registry> {
        GLOBAL.get_or_init(|| {
            Arc::new(Registry::with_config(
                CaptureConfig::from_env().unwrap_or_default(),
            ))
        })
    }

    /// Returns the container for `label`, creating it on first request.
    ///
    /// Every call with the same label returns the same instance.
    pub fn container(&self, label: &str) -> Arc<Container> {
        self.lock().container(label)
    }

    /// Sets the minimum level for handlers built for `label` from now on.
    ///
    /// Handlers that already exist keep the level they were built with.
    pub fn set_log_level(&self, level: Level, label: &str) {
        let previous = self.lock().levels.insert(label.to_string(), level);
        tracing::debug!(
            target: crate::LOG_TARGET,
            label,
            %level,
            previous = ?previous,
            "log level updated"
        );
    }

    /// The minimum level configured for `label`, or the registry default.
    pub fn log_level(&self, label: &str) -> Level {
        self.lock()
            .levels
            .get(label)
            .copied()
            .unwrap_or(self.default_level)
    }

    /// The level used for labels without an explicit setting.
    pub fn default_level(&self) -> Level {
        self.default_level
    }

    /// Builds a handler for `label` bound to its container and current level.
    ///
    /// The container lookup and level read happen under one lock acquisition.
    pub fn handler(&self, label: &str) -> CapturingHandler {
        let mut state = self.lock();
        let container = state.container(label);
        let level = state
            .levels
            .get(label)
            .copied()
            .unwrap_or(self.default_level);
        CapturingHandler::new(container, level)
    }

    /// Labels that currently have a container, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.lock().containers.keys().cloned().collect();
        labels.sort();
        labels
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::{LogHandler, Record};
    use std::collections::BTreeMap;
    use std::thread;

    fn record(level: Level) -> Record<'static> {
        Record {
            level,
            message: "message",
            metadata: None,
            file: "registry.rs",
            function: "record",
            line: 3,
        }
    }

    #[test]
    fn container_is_memoized_per_label() {
        let registry = Registry::new();
        let first = registry.container("registry.identity");
        let second = registry.container("registry.identity");
        let other = registry.container("registry.other");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(first.label(), "registry.identity");
        assert_eq!(registry.labels(), vec!["registry.identity", "registry.other"]);
    }

    #[test]
    fn concurrent_first_lookups_share_one_container() {
        let registry = Arc::new(Registry::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.container("registry.race"))
            })
            .collect();
        let containers: Vec<Arc<Container>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        for container in &containers[1..] {
            assert!(Arc::ptr_eq(&containers[0], container));
        }
    }

    #[test]
    fn log_level_defaults_and_updates() {
        let registry = Registry::new();
        assert_eq!(registry.log_level("registry.level"), Level::Info);

        registry.set_log_level(Level::Critical, "registry.level");
        assert_eq!(registry.log_level("registry.level"), Level::Critical);
        assert_eq!(registry.log_level("registry.unset"), Level::Info);
    }

    #[test]
    fn level_changes_only_affect_new_handlers() {
        let registry = Registry::new();
        let label = "registry.frozen";
        let before = registry.handler(label);

        registry.set_log_level(Level::Critical, label);
        let after = registry.handler(label);

        assert_eq!(before.log_level(), Level::Info);
        assert_eq!(after.log_level(), Level::Critical);

        before.log(&record(Level::Info));
        after.log(&record(Level::Info));
        assert_eq!(registry.container(label).len(), 1);
    }

    #[test]
    fn config_seeds_levels() {
        let config = CaptureConfig {
            default_level: Level::Debug,
            label_levels: BTreeMap::from([("registry.quiet".to_string(), Level::Error)]),
        };
        let registry = Registry::with_config(config);

        assert_eq!(registry.default_level(), Level::Debug);
        assert_eq!(registry.log_level("registry.any"), Level::Debug);
        assert_eq!(registry.handler("registry.quiet").log_level(), Level::Error);
    }
}
