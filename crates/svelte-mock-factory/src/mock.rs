//! Mocked component constructors and the instance proxy they hand out.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use svelte_mock_core::error::short_type_name;
use svelte_mock_core::{ComponentOptions, PropHistory, Props, ResolveMock, Result};

use crate::call_history::CallHistory;
use crate::component::{ComponentConstructor, ComponentInstance, SvelteComponent};

/// Create a mocked constructor for `C`, in module-export shape.
///
/// # Example
/// ```
/// use serde_json::json;
/// use svelte_mock_core::{ComponentOptions, Props, Result};
/// use svelte_mock_factory::{mock_component, ComponentInstance, SvelteComponent};
///
/// struct Label;
///
/// impl ComponentInstance for Label {
///     fn set(&mut self, _props: Props) {}
/// }
///
/// impl SvelteComponent for Label {
///     fn construct(_options: &ComponentOptions) -> Result<Self> {
///         Ok(Label)
///     }
/// }
///
/// let module = mock_component::<Label>();
/// let options = ComponentOptions::from_props(json!({ "text": "Hi" })).unwrap();
/// let mut label = module.default.construct(options).unwrap();
/// label.set_props(json!({ "text": "Bye" })).unwrap();
///
/// assert_eq!(module.default.calls().len(), 1);
/// assert_eq!(module.default.set_spy().call_count(), 1);
/// ```
pub fn mock_component<C: SvelteComponent>() -> ModuleExport<C> {
    ModuleExport {
        default: MockedComponent::new(),
    }
}

/// A mock wrapped the way a module exposes its default export.
pub struct ModuleExport<C> {
    /// The mocked constructor
    pub default: MockedComponent<C>,
}

impl<C> ResolveMock for ModuleExport<C> {
    fn resolve_mock(&self) -> &dyn PropHistory {
        &self.default
    }
}

impl<C> Clone for ModuleExport<C> {
    fn clone(&self) -> Self {
        Self {
            default: self.default.clone(),
        }
    }
}

impl<C> fmt::Debug for ModuleExport<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleExport")
            .field("default", &self.default)
            .finish()
    }
}

/// Observable stand-in for the constructor of `C`.
///
/// Clones share their call history and set spy.
pub struct MockedComponent<C> {
    calls: CallHistory<ComponentOptions>,
    set_spy: CallHistory<Props>,
    component: PhantomData<fn() -> C>,
}

impl<C> MockedComponent<C> {
    /// Create a mock with empty histories.
    pub fn new() -> Self {
        Self {
            calls: CallHistory::new(),
            set_spy: CallHistory::new(),
            component: PhantomData,
        }
    }

    /// Options of every construction, oldest first.
    pub fn calls(&self) -> Vec<ComponentOptions> {
        self.calls.calls()
    }

    /// Construction call history handle.
    pub fn call_history(&self) -> &CallHistory<ComponentOptions> {
        &self.calls
    }

    /// Recorder of every `$set` call across all instances.
    pub fn set_spy(&self) -> &CallHistory<Props> {
        &self.set_spy
    }

    /// Forget recorded constructions and updates.
    pub fn mock_clear(&self) {
        self.calls.clear();
        self.set_spy.clear();
    }
}

impl<C: SvelteComponent> MockedComponent<C> {
    /// Construct a real `C` behind a recording proxy.
    ///
    /// The call is recorded before the real constructor runs, so a failed
    /// construction still shows up in [`MockedComponent::calls`].
    pub fn construct(&self, options: ComponentOptions) -> Result<ComponentProxy<C>> {
        self.calls.record(options.clone());
        tracing::debug!(
            component = short_type_name::<C>(),
            construction = self.calls.call_count(),
            props = options.props.len(),
            "constructing mocked component"
        );

        let instance = C::construct(&options)?;
        Ok(ComponentProxy {
            instance,
            set_spy: self.set_spy.clone(),
        })
    }

    /// Construct from initial props only.
    pub fn construct_with_props(&self, props: Props) -> Result<ComponentProxy<C>> {
        self.construct(ComponentOptions::with_props(props))
    }
}

impl<C: SvelteComponent> ComponentConstructor for MockedComponent<C> {
    type Instance = ComponentProxy<C>;

    fn construct(&self, options: ComponentOptions) -> Result<ComponentProxy<C>> {
        MockedComponent::construct(self, options)
    }
}

impl<C> PropHistory for MockedComponent<C> {
    fn constructions(&self) -> Vec<ComponentOptions> {
        self.calls.calls()
    }

    fn updates(&self) -> Vec<Props> {
        self.set_spy.calls()
    }

    fn last_construction_props(&self) -> Option<Props> {
        self.calls.last_call().map(|options| options.props)
    }
}

impl<C> ResolveMock for MockedComponent<C> {
    fn resolve_mock(&self) -> &dyn PropHistory {
        self
    }
}

impl<C> Default for MockedComponent<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for MockedComponent<C> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            set_spy: self.set_spy.clone(),
            component: PhantomData,
        }
    }
}

impl<C> fmt::Debug for MockedComponent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockedComponent")
            .field("component", &short_type_name::<C>())
            .field("calls", &self.calls.call_count())
            .field("set_calls", &self.set_spy.call_count())
            .finish()
    }
}

/// A genuine component instance with its `$set` redirected to a recorder.
///
/// Derefs to the wrapped instance, so its fields and methods stay reachable.
pub struct ComponentProxy<C> {
    instance: C,
    set_spy: CallHistory<Props>,
}

impl<C: SvelteComponent> ComponentInstance for ComponentProxy<C> {
    /// Record a partial update. The wrapped instance never sees it.
    fn set(&mut self, props: Props) {
        tracing::trace!(
            component = short_type_name::<C>(),
            keys = ?props.keys().collect::<Vec<_>>(),
            "recorded $set"
        );
        self.set_spy.record(props);
    }

    /// Forwarded to the wrapped instance.
    fn destroy(&mut self) {
        self.instance.destroy();
    }
}

impl<C> ComponentProxy<C> {
    /// Unwrap the genuine instance.
    pub fn into_inner(self) -> C {
        self.instance
    }
}

impl<C> Deref for ComponentProxy<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.instance
    }
}

impl<C> DerefMut for ComponentProxy<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.instance
    }
}

impl<C: fmt::Debug> fmt::Debug for ComponentProxy<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentProxy")
            .field("instance", &self.instance)
            .finish_non_exhaustive()
    }
}
