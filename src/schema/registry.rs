use crate::blocks::{BlockBehavior, register_builtins};
use crate::schema::kind::BlockKind;
use ahash::AHashMap;

/// The static catalog of block kinds known to an executor.
///
/// Kinds are registered once at process start. Registering a kind under an
/// id that already exists replaces the previous behavior, which lets hosts
/// override a builtin.
pub struct BlockRegistry {
    behaviors: AHashMap<String, Box<dyn BlockBehavior>>,
}

impl BlockRegistry {
    /// An empty registry, for hosts that want full control over the catalog.
    pub fn new() -> Self {
        Self {
            behaviors: AHashMap::new(),
        }
    }

    /// A registry pre-populated with the five baseline block kinds.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    pub fn register(&mut self, behavior: Box<dyn BlockBehavior>) {
        self.behaviors.insert(behavior.kind().to_string(), behavior);
    }

    pub fn get(&self, kind: &str) -> Option<&dyn BlockBehavior> {
        self.behaviors.get(kind).map(|b| b.as_ref())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.behaviors.contains_key(kind)
    }

    /// Descriptors for every registered kind, sorted by id so palettes
    /// render in a stable order.
    pub fn list(&self) -> Vec<BlockKind> {
        let mut kinds: Vec<BlockKind> = self.behaviors.values().map(|b| b.descriptor()).collect();
        kinds.sort_by(|a, b| a.id.cmp(&b.id));
        kinds
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
