/// An auxiliary data structure for tracking statistics about builder
/// performance (for fine-tuning)
#[derive(Debug, Clone)]
pub struct BuilderStats {
    /// number of recursive calls made by `restrict`, `sum`, and `prod`
    pub num_recursive_calls: usize,
    /// number of live interned nodes
    pub num_nodes: usize,
}

impl BuilderStats {
    pub fn new() -> BuilderStats {
        BuilderStats {
            num_recursive_calls: 0,
            num_nodes: 0,
        }
    }
}

impl Default for BuilderStats {
    fn default() -> Self {
        Self::new()
    }
}
