//! Registration hooks run when a details manager is built

use std::fmt;

use super::manager::DetailsManager;

/// Callback that registers sections, controls and settings
pub type RegisterCallback = Box<dyn Fn(&mut DetailsManager) + Send + Sync>;

/// Ordered list of registration callbacks
///
/// Callbacks run in the order they were added, once per manager.
#[derive(Default)]
pub struct RegistrationHooks {
    callbacks: Vec<RegisterCallback>,
}

impl RegistrationHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks preloaded with the stock project fields
    pub fn with_project_details() -> Self {
        let mut hooks = Self::new();
        hooks.add(super::defaults::register_project_details);
        hooks
    }

    /// Append a callback
    pub fn add<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&mut DetailsManager) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
        self
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Run every callback against `manager`
    pub fn run(&self, manager: &mut DetailsManager) {
        for callback in &self.callbacks {
            callback(manager);
        }
    }
}

impl fmt::Debug for RegistrationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationHooks")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
