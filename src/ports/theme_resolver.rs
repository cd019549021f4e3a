//! ThemeResolver port - Ambient light/dark preference supplied by the host.

/// Answers whether the host environment prefers a dark theme.
///
/// Consulted on demand whenever the configured theme is absent; the widget
/// never watches the environment itself.
pub trait ThemeResolver: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ThemeResolver) {}
}
