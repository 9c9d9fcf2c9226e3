use crate::dag::Dag;
use indexmap::IndexMap;
use serde::Serialize;

/// The identifier prefix that marks a DAG as a sub DAG.
pub const DEFAULT_SUBORDINATE_PREFIX: &str = "sub_";

/// All DAGs of one input: at most one primary DAG plus the named sub DAGs.
///
/// Sub DAGs keep the order in which their identifier was first seen, even when a
/// later document with the same identifier replaces the content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DagRegistry {
    primary: Option<Dag>,
    subordinates: IndexMap<String, Dag>,
}

impl DagRegistry {
    /// Classifies `dags` using the default `sub_` prefix.
    pub fn from_dags(dags: impl IntoIterator<Item = Dag>) -> Self {
        RegistryBuilder::new().build(dags)
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn primary(&self) -> Option<&Dag> {
        self.primary.as_ref()
    }

    pub fn subordinate(&self, id: &str) -> Option<&Dag> {
        self.subordinates.get(id)
    }

    pub fn subordinates(&self) -> impl Iterator<Item = &Dag> {
        self.subordinates.values()
    }

    /// The DAG rendered at the top level: the primary, else the first sub DAG.
    pub fn root(&self) -> Option<&Dag> {
        self.primary
            .as_ref()
            .or_else(|| self.subordinates.values().next())
    }

    /// Every DAG in the registry, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &Dag> {
        self.primary.iter().chain(self.subordinates.values())
    }

    pub fn len(&self) -> usize {
        usize::from(self.primary.is_some()) + self.subordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.subordinates.is_empty()
    }
}

/// Builds a `DagRegistry`, optionally with a custom sub DAG prefix.
pub struct RegistryBuilder {
    subordinate_prefix: String,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            subordinate_prefix: DEFAULT_SUBORDINATE_PREFIX.to_string(),
        }
    }

    pub fn with_subordinate_prefix(mut self, prefix: &str) -> Self {
        self.subordinate_prefix = prefix.to_string();
        self
    }

    /// Classifies each DAG in encounter order.
    ///
    /// The first DAG whose id lacks the sub DAG prefix becomes the primary and is never
    /// replaced. Everything else is stored as a sub DAG under its own id, with later
    /// documents overwriting earlier ones.
    pub fn build(&self, dags: impl IntoIterator<Item = Dag>) -> DagRegistry {
        let mut registry = DagRegistry::default();

        for dag in dags {
            let is_subordinate = dag.id.starts_with(&self.subordinate_prefix);
            if registry.primary.is_none() && !is_subordinate {
                tracing::debug!(dag_id = %dag.id, "Registered primary DAG");
                registry.primary = Some(dag);
                continue;
            }

            if !is_subordinate {
                tracing::debug!(dag_id = %dag.id, "Primary already assigned; storing as sub DAG");
            }
            if let Some(previous) = registry.subordinates.insert(dag.id.clone(), dag) {
                tracing::debug!(dag_id = %previous.id, "Sub DAG overwritten by a later document");
            }
        }

        registry
    }
}
