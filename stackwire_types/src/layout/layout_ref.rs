use crate::error::{CodecError, Result};
use std::any;
use std::fmt;
use std::sync::{Arc, Weak};

/// How a composite [`DataType`](crate::layout::DataType) reaches its layout.
///
/// Ordinary references are strong. A layout that contains itself holds a weak
/// back-reference to its own allocation, made by `new_cyclic` on the layout
/// types, so self-referencing schemas do not form `Arc` cycles.
pub struct LayoutRef<L>(Inner<L>);

enum Inner<L> {
    Strong(Arc<L>),
    Back(Weak<L>),
}

impl<L> LayoutRef<L> {
    pub(crate) fn back(weak: Weak<L>) -> Self {
        Self(Inner::Back(weak))
    }

    /// Fails only for a back-reference whose layout has been dropped.
    pub fn resolve(&self) -> Result<Arc<L>> {
        match &self.0 {
            Inner::Strong(layout) => Ok(Arc::clone(layout)),
            Inner::Back(weak) => weak.upgrade().ok_or_else(|| {
                CodecError::invalid_layout(format!(
                    "The self-reference to a {} outlived its layout.",
                    short_type_name::<L>()
                ))
            }),
        }
    }

    pub fn is_back_reference(&self) -> bool {
        matches!(self.0, Inner::Back(_))
    }
}

impl<L> From<Arc<L>> for LayoutRef<L> {
    fn from(layout: Arc<L>) -> Self {
        Self(Inner::Strong(layout))
    }
}

impl<L> Clone for LayoutRef<L> {
    fn clone(&self) -> Self {
        match &self.0 {
            Inner::Strong(layout) => Self(Inner::Strong(Arc::clone(layout))),
            Inner::Back(weak) => Self(Inner::Back(Weak::clone(weak))),
        }
    }
}

/* A back-reference is printed opaquely; following it would never terminate. */
impl<L: fmt::Debug> fmt::Debug for LayoutRef<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Strong(layout) => layout.fmt(f),
            Inner::Back(_) => write!(f, "<self {}>", short_type_name::<L>()),
        }
    }
}

fn short_type_name<L>() -> &'static str {
    let full = any::type_name::<L>();
    full.rsplit("::").next().unwrap_or(full)
}
