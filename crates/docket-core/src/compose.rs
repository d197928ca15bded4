use crate::order::{order_plugins, Ordered};

/// Fold `hook` over `plugins` in the given order, starting from `seed`.
///
/// Each hook receives the value returned by the previous one. A plugin that
/// does not customize the aspect simply returns its input.
pub fn apply_across<P, T, F>(seed: T, plugins: &[P], mut hook: F) -> T
where
    F: FnMut(&P, T) -> T,
{
    plugins.iter().fold(seed, |draft, plugin| hook(plugin, draft))
}

/// A plugin set sorted once and reused for every hook of a composition pass.
#[derive(Debug, Clone)]
pub struct PluginChain<P> {
    plugins: Vec<P>,
}

impl<P: Ordered> PluginChain<P> {
    pub fn new(plugins: Vec<P>) -> Self {
        Self {
            plugins: order_plugins(plugins),
        }
    }
}

impl<P> PluginChain<P> {
    pub fn apply<T, F>(&self, seed: T, hook: F) -> T
    where
        F: FnMut(&P, T) -> T,
    {
        apply_across(seed, &self.plugins, hook)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.plugins.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.plugins
    }
}

impl<P: Ordered> Default for PluginChain<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P: Ordered> FromIterator<P> for PluginChain<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
