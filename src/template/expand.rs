use std::collections::BTreeMap;

use serde_json::Value;

/// Variable name to its ordered candidate values.
pub type VarSets = BTreeMap<String, Vec<Value>>;

/// One concrete assignment of a value to every variable.
pub type Binding = BTreeMap<String, Value>;

/// Enumerates the cartesian product of `var_sets`.
///
/// An empty set of variables yields a single empty binding; a variable with
/// no values yields no bindings at all. Bindings come out with the first
/// variable (in key order) varying slowest, but callers should only rely on
/// the set of bindings, not their order.
#[must_use]
pub fn expand(var_sets: &VarSets) -> Vec<Binding> {
    let mut combinations = vec![Binding::new()];

    for (name, values) in var_sets {
        let mut next = Vec::with_capacity(combinations.len().saturating_mul(values.len()));
        for combination in &combinations {
            for value in values {
                let mut extended = combination.clone();
                extended.insert(name.clone(), value.clone());
                next.push(extended);
            }
        }
        combinations = next;
    }

    combinations
}

#[must_use]
pub fn combination_count(var_sets: &VarSets) -> usize {
    var_sets
        .values()
        .fold(1usize, |total, values| total.saturating_mul(values.len()))
}
