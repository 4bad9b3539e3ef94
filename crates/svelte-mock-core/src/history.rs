//! Read side of a mock's recorded calls.
//!
//! The factory records, the matchers read. Both meet at these two traits so
//! neither crate depends on the other.

use crate::{ComponentOptions, Props};

/// Recorded construction and update calls of a mocked component.
pub trait PropHistory {
    /// Every construction call, oldest first.
    fn constructions(&self) -> Vec<ComponentOptions>;

    /// Every partial update passed to the update entry point, oldest first.
    ///
    /// Belongs to the mock as a whole and spans all constructions.
    fn updates(&self) -> Vec<Props>;

    /// Initial props of the most recent construction, if any.
    fn last_construction_props(&self) -> Option<Props> {
        self.constructions().pop().map(|options| options.props)
    }
}

/// Shape resolution between a bare mock and a module-export wrapper.
///
/// A wrapper holding a `default` mock resolves to that mock; a bare mock
/// resolves to itself.
pub trait ResolveMock {
    /// The call history assertions should read.
    fn resolve_mock(&self) -> &dyn PropHistory;
}

impl<T: ResolveMock + ?Sized> ResolveMock for &T {
    fn resolve_mock(&self) -> &dyn PropHistory {
        (**self).resolve_mock()
    }
}
