//! The component protocol the factory knows how to wrap.
//!
//! Code that renders child components takes a [`ComponentConstructor`]
//! instead of naming the child type, so a test can hand it a
//! [`MockedComponent`](crate::MockedComponent) where production code passes
//! a [`Constructor`].

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;
use svelte_mock_core::{to_props, ComponentOptions, Props, Result};

/// A live component instance.
pub trait ComponentInstance {
    /// Apply a partial props update (`$set`).
    ///
    /// This is the single interception point: on a mocked component the
    /// call is recorded instead of reaching the implementation.
    fn set(&mut self, props: Props);

    /// Tear the component down (`$destroy`).
    fn destroy(&mut self) {}

    /// `$set` with any value that serializes to a JSON object.
    fn set_props<T: Serialize>(&mut self, props: T) -> Result<()>
    where
        Self: Sized,
    {
        self.set(to_props(props)?);
        Ok(())
    }

    /// `$set` of a single prop.
    fn set_prop(&mut self, name: impl Into<String>, value: impl Into<Value>)
    where
        Self: Sized,
    {
        let mut props = Props::new();
        props.insert(name.into(), value.into());
        self.set(props);
    }
}

/// A component type that can be built from construction options.
pub trait SvelteComponent: ComponentInstance + Sized {
    /// Build a component from its construction options.
    fn construct(options: &ComponentOptions) -> Result<Self>;
}

/// Something that builds component instances: the real type or a mock.
pub trait ComponentConstructor {
    /// What construction produces
    type Instance: ComponentInstance;

    /// Build an instance.
    fn construct(&self, options: ComponentOptions) -> Result<Self::Instance>;
}

/// The genuine constructor of `C`.
pub struct Constructor<C>(PhantomData<fn() -> C>);

impl<C> Constructor<C> {
    /// Constructor for `C`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<C> Default for Constructor<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Constructor<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C> Copy for Constructor<C> {}

impl<C> fmt::Debug for Constructor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Constructor<{}>",
            svelte_mock_core::error::short_type_name::<C>()
        )
    }
}

impl<C: SvelteComponent> ComponentConstructor for Constructor<C> {
    type Instance = C;

    fn construct(&self, options: ComponentOptions) -> Result<C> {
        C::construct(&options)
    }
}
