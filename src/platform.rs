/// The surface a generated link will be opened on.
///
/// GitHub renders the same page with different element ids depending on whether it is
/// viewed in a browser or embedded in a native view, so anchors have to follow suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingContext {
    Native,
    Web,
}

/// A pair of values, one per rendering context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByContext<T> {
    /// Used for native contexts.
    pub default: T,
    pub web: T,
}

/// Answers which rendering context we are in, if it can be determined at all.
pub trait ContextProvider {
    fn rendering_context(&self) -> Option<RenderingContext>;

    fn is_web(&self) -> bool {
        self.rendering_context() == Some(RenderingContext::Web)
    }
}

impl ContextProvider for RenderingContext {
    fn rendering_context(&self) -> Option<RenderingContext> {
        Some(*self)
    }
}

/// `None` stands for "undeterminable".
impl ContextProvider for Option<RenderingContext> {
    fn rendering_context(&self) -> Option<RenderingContext> {
        *self
    }
}

/// Pick `choices.web` on the web, `choices.default` on native.
///
/// When the context is unknown, `fallback_to_web` decides.
pub fn select<T>(
    context: Option<RenderingContext>,
    choices: ByContext<T>,
    fallback_to_web: bool,
) -> T {
    match context {
        Some(RenderingContext::Web) => choices.web,
        Some(RenderingContext::Native) => choices.default,
        None if fallback_to_web => choices.web,
        None => choices.default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> ByContext<&'static str> {
        ByContext {
            default: "native",
            web: "web",
        }
    }

    #[test]
    fn known_context_ignores_fallback() {
        assert_eq!(select(Some(RenderingContext::Web), choices(), false), "web");
        assert_eq!(select(Some(RenderingContext::Native), choices(), true), "native");
    }

    #[test]
    fn unknown_context_uses_fallback() {
        assert_eq!(select(None, choices(), true), "web");
        assert_eq!(select(None, choices(), false), "native");
    }

    #[test]
    fn providers() {
        assert!(RenderingContext::Web.is_web());
        assert!(!RenderingContext::Native.is_web());
        let unknown: Option<RenderingContext> = None;
        assert_eq!(unknown.rendering_context(), None);
        assert!(!unknown.is_web());
    }
}
