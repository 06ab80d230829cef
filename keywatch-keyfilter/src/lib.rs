//! Keyboard filter system for keywatch.
//!
//! This crate compiles compact key specs into event predicates and wires
//! them to handlers and action names.
//!
//! Features:
//! - Key filter compilation (`"ctrl+alt+i"`, alternatives, custom predicates)
//! - A plain keyboard event model with a winit adapter
//! - Handler bindings with explicit setup/teardown
//! - A combo → action registry built from config keybindings

pub mod event;
pub mod filter;
pub mod platform;

pub use event::{KeyEvent, ModifierState};
pub use filter::{KeyFilter, KeySpec, combo_lint, compile};
// Re-export the config types that appear in this crate's API
pub use keywatch_config::{FilterOptions, KeyBinding, KeyEventKind};

/// Opaque handle to a registered binding, returned by
/// [`EventBindings::bind`] and consumed by [`EventBindings::unbind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

struct EventBinding {
    id: BindingId,
    kind: KeyEventKind,
    filter: KeyFilter,
    handler: Box<dyn FnMut(&KeyEvent) + Send>,
}

/// Key filter subscriptions: compiled filters paired with handlers.
///
/// This is the listener lifecycle made explicit: [`bind`](Self::bind) is
/// setup, [`dispatch`](Self::dispatch) is the per-event pass, and
/// [`unbind`](Self::unbind) is teardown. Dispatch runs handlers in
/// registration order.
#[derive(Default)]
pub struct EventBindings {
    bindings: Vec<EventBinding>,
    next_id: u64,
}

impl EventBindings {
    /// Create an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for events of `kind` that pass the filter
    /// compiled from `spec`.
    pub fn bind<H>(
        &mut self,
        kind: KeyEventKind,
        spec: impl Into<KeySpec>,
        options: &FilterOptions,
        handler: H,
    ) -> BindingId
    where
        H: FnMut(&KeyEvent) + Send + 'static,
    {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push(EventBinding {
            id,
            kind,
            filter: compile(spec.into(), options),
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a binding.
    ///
    /// Returns false when the id is unknown (already unbound).
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|binding| binding.id != id);
        self.bindings.len() != before
    }

    /// Feed one keyboard event through the bindings.
    ///
    /// Every handler bound to `kind` whose filter passes is invoked with
    /// the event, in registration order. Returns the number of handlers
    /// invoked.
    pub fn dispatch(&mut self, kind: KeyEventKind, event: &KeyEvent) -> usize {
        let mut invoked = 0;
        for binding in &mut self.bindings {
            if binding.kind == kind && (binding.filter)(event) {
                (binding.handler)(event);
                invoked += 1;
            }
        }
        invoked
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check whether any bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Registry mapping key filters to action names.
#[derive(Default)]
pub struct FilterRegistry {
    bindings: Vec<(KeyFilter, String)>,
}

impl FilterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from config keybindings.
    ///
    /// Compilation is total, so every entry is registered; combos that
    /// can never match are logged and kept.
    pub fn from_config(keybindings: &[KeyBinding], options: &FilterOptions) -> Self {
        let mut registry = Self::new();

        log::info!(
            "Building filter registry from {} config keybindings",
            keybindings.len()
        );
        for binding in keybindings {
            if let Some(note) = combo_lint(&binding.keys) {
                log::warn!("Keybinding for action '{}': {}", binding.action, note);
            }
            log::info!(
                "Registered keybinding: '{}' -> {}",
                binding.keys,
                binding.action
            );
            registry.bindings.push((
                compile(KeySpec::Combo(binding.keys.clone()), options),
                binding.action.clone(),
            ));
        }

        registry
    }

    /// Look up an action for a key event.
    ///
    /// Returns the first registered action whose filter passes.
    pub fn lookup(&self, event: &KeyEvent) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(filter, _)| filter(event))
            .map(|(_, action)| action.as_str())
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
