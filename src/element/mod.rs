//! Element handles and identifier resolution.
//!
//! The host UI owns the live node tree; this side of the boundary only
//! ever sees [`ElementRef`] handles carrying the attributes needed to
//! identify an element in a serialized record. Resolution goes through
//! the [`ResolveName`] seam so components can swap the scheme (tests
//! mock it, hosts with their own registry replace it).

use crate::types::ResolverConfig;

/// Handle to an interactive element in the hosted UI tree.
///
/// Carries only identification attributes, never a live node. Absent
/// attributes are distinct from empty ones: an element whose `name`
/// attribute is the empty string is identifiable (as `""`), an element
/// with no `name` attribute is not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementRef {
    name: Option<String>,
    id: Option<String>,
}

impl ElementRef {
    /// Handle with no identification attributes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Value of the element's `name` attribute, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Value of the element's `id` attribute, if set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Resolution of a transport-safe identifier for an element.
///
/// Total over absent input: a `None` element resolves to `None`, never
/// an error. Events reach the serializers with their `target` /
/// `related_target` already gone in some dispatch orders (blur of a
/// removed node), so absence is a normal input here.
#[cfg_attr(test, mockall::automock)]
pub trait ResolveName {
    /// Resolve an identifier for `element`, or `None` when the element
    /// is absent or carries no usable identification attribute.
    fn resolve<'a>(&self, element: Option<&'a ElementRef>) -> Option<String>;
}

/// Attribute-based resolver: the element's `name` attribute, falling
/// back to its `id` when [`ResolverConfig::fallback_to_id`] is set.
#[derive(Debug, Clone, Default)]
pub struct AttributeNameResolver {
    config: ResolverConfig,
}

impl AttributeNameResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }
}

impl ResolveName for AttributeNameResolver {
    fn resolve(&self, element: Option<&ElementRef>) -> Option<String> {
        let element = element?;
        element
            .name()
            .map(str::to_owned)
            .or_else(|| {
                if self.config.fallback_to_id {
                    element.id().map(str::to_owned)
                } else {
                    None
                }
            })
    }
}
