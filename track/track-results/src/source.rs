//! Access to named result time series.
//!
//! Result sets are addressed by dotted names that form a hierarchy:
//! `CONTACT_1.track_2.I_Point` is a child of `CONTACT_1.track_2`, which is
//! a child of `CONTACT_1`. Each set holds named components, each an
//! ordered series of values.

use tracing::debug;

use crate::error::{ResultsError, ResultsResult};

/// A read-only provider of simulation result series.
///
/// Implementors supply [`time`](Self::time), [`component`](Self::component),
/// [`result_sets`](Self::result_sets) and [`components`](Self::components);
/// the hierarchy queries have default implementations over those.
pub trait ResultSource {
    /// The analysis time base.
    fn time(&self) -> &[f64];

    /// Values of component `component` in set `set`.
    fn component(&self, set: &str, component: &str) -> Option<&[f64]>;

    /// Names of all result sets, in a stable order.
    fn result_sets(&self) -> Vec<&str>;

    /// Names of the components of `set`, in a stable order.
    fn components(&self, set: &str) -> Vec<&str>;

    /// True if `name` is a result set or has descendant sets.
    fn has_result_set(&self, name: &str) -> bool {
        self.result_sets()
            .iter()
            .any(|s| *s == name || is_descendant(s, name))
    }

    /// Immediate children of `parent` whose last name segment starts with
    /// `prefix`, as full dotted names in first-seen order.
    fn child_sets(&self, parent: &str, prefix: &str) -> Vec<String> {
        let mut children: Vec<String> = Vec::new();
        for set in self.result_sets() {
            if !is_descendant(set, parent) {
                continue;
            }
            let rest = &set[parent.len() + 1..];
            let segment = rest.split('.').next().unwrap_or(rest);
            if segment.starts_with(prefix) {
                let child = format!("{parent}.{segment}");
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        }
        children
    }

    /// Like [`component`](Self::component) but missing data is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ResultsError::MissingComponent`] if the component is absent.
    fn require(&self, set: &str, component: &str) -> ResultsResult<&[f64]> {
        self.component(set, component)
            .ok_or_else(|| ResultsError::missing_component(set, component))
    }
}

fn is_descendant(set: &str, parent: &str) -> bool {
    set.len() > parent.len() + 1
        && set.starts_with(parent)
        && set.as_bytes()[parent.len()] == b'.'
}

/// One named series with its units.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultComponent {
    /// Component name.
    pub name: String,
    /// Units label.
    pub units: String,
    /// Ordered values.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
struct ResultSet {
    name: String,
    components: Vec<ResultComponent>,
}

/// In-memory [`ResultSource`] preserving insertion order.
///
/// # Example
///
/// ```
/// use track_results::{ResultSource, ResultStore};
///
/// let mut store = ResultStore::with_time(vec![0.0, 0.1, 0.2]);
/// store.insert("CONTACT_1.track_1.I_Point", "X", vec![1.0, 2.0, 3.0]);
///
/// assert!(store.has_result_set("CONTACT_1"));
/// assert_eq!(store.child_sets("CONTACT_1", "track_"), vec!["CONTACT_1.track_1"]);
/// assert_eq!(store.component("CONTACT_1.track_1.I_Point", "X"), Some(&[1.0, 2.0, 3.0][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    time: Vec<f64>,
    sets: Vec<ResultSet>,
}

impl ResultStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given time base.
    #[must_use]
    pub fn with_time(time: Vec<f64>) -> Self {
        Self {
            time,
            sets: Vec::new(),
        }
    }

    /// Replace the time base.
    pub fn set_time(&mut self, time: Vec<f64>) {
        self.time = time;
    }

    fn set_mut(&mut self, name: &str) -> &mut ResultSet {
        let index = match self.sets.iter().position(|s| s.name == name) {
            Some(i) => i,
            None => {
                self.sets.push(ResultSet {
                    name: name.to_string(),
                    components: Vec::new(),
                });
                self.sets.len() - 1
            }
        };
        &mut self.sets[index]
    }

    /// Insert or replace a component with no units.
    pub fn insert(&mut self, set: &str, component: &str, values: Vec<f64>) {
        self.insert_with_units(set, component, values, "");
    }

    /// Insert or replace a component.
    pub fn insert_with_units(&mut self, set: &str, component: &str, values: Vec<f64>, units: &str) {
        let entry = ResultComponent {
            name: component.to_string(),
            units: units.to_string(),
            values,
        };
        let set = self.set_mut(set);
        match set.components.iter_mut().find(|c| c.name == component) {
            Some(existing) => *existing = entry,
            None => set.components.push(entry),
        }
    }

    /// Full component record, including units.
    #[must_use]
    pub fn get(&self, set: &str, component: &str) -> Option<&ResultComponent> {
        self.sets
            .iter()
            .find(|s| s.name == set)?
            .components
            .iter()
            .find(|c| c.name == component)
    }

    /// True if the store has no result sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl ResultSource for ResultStore {
    fn time(&self) -> &[f64] {
        &self.time
    }

    fn component(&self, set: &str, component: &str) -> Option<&[f64]> {
        self.get(set, component).map(|c| c.values.as_slice())
    }

    fn result_sets(&self) -> Vec<&str> {
        self.sets.iter().map(|s| s.name.as_str()).collect()
    }

    fn components(&self, set: &str) -> Vec<&str> {
        self.sets
            .iter()
            .find(|s| s.name == set)
            .map(|s| s.components.iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Create a new result component in `store`.
///
/// # Errors
///
/// Returns [`ResultsError::EmptyValues`] if `values` is empty and
/// [`ResultsError::ComponentExists`] if `set.component` is already present.
///
/// # Example
///
/// ```
/// use track_results::{create_result, ResultSource, ResultStore};
///
/// let mut store = ResultStore::new();
/// create_result(&mut store, "WEAR", "DEPTH", vec![0.0, 0.01], "mm").unwrap();
/// assert!(create_result(&mut store, "WEAR", "DEPTH", vec![1.0], "mm").is_err());
/// assert!(create_result(&mut store, "WEAR", "RATE", vec![], "mm/s").is_err());
/// ```
pub fn create_result(
    store: &mut ResultStore,
    set: &str,
    component: &str,
    values: Vec<f64>,
    units: &str,
) -> ResultsResult<()> {
    if values.is_empty() {
        return Err(ResultsError::EmptyValues {
            set: set.to_string(),
            component: component.to_string(),
        });
    }
    if store.get(set, component).is_some() {
        return Err(ResultsError::ComponentExists {
            set: set.to_string(),
            component: component.to_string(),
        });
    }
    debug!(set, component, values = values.len(), units, "Creating result component");
    store.insert_with_units(set, component, values, units);
    Ok(())
}
