use serde::Serialize;
use std::fmt;

/// A single named distribution parameter.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Parameter {
    pub name: &'static str,
    pub value: f64,
}

/// Insertion-ordered set of fitted distribution parameters.
///
/// Created once during estimation and never mutated afterwards. Iteration
/// order is the order the variant defines its parameters in, which is also
/// the order used when rendering the ranking table's parameter column.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ParameterSet {
    entries: Vec<Parameter>,
}

impl ParameterSet {
    pub fn from_entries(entries: &[(&'static str, f64)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|&(name, value)| Parameter { name, value })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value)
    }

    /// Like [`ParameterSet::get`], but failure is a synthesis error: a
    /// variant asking for a parameter its own estimation did not produce.
    pub(crate) fn require(&self, name: &str) -> Result<f64, crate::error::Error> {
        self.get(name)
            .ok_or_else(|| crate::error::Error::Synthesis(format!("missing parameter {name}")))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|p| p.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `"Name (value) "` concatenation used by the ranking table's
    /// parameter column, with a trailing space per entry.
    pub fn format_brief(&self) -> String {
        let mut out = String::new();
        for p in &self.entries {
            out.push_str(&format!("{} ({}) ", p.name, p.value));
        }
        out
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.format_brief().trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_brief_keeps_insertion_order() {
        let params = ParameterSet::from_entries(&[("Mu", 12.6), ("Sigma", 4.1)]);
        assert_eq!(params.format_brief(), "Mu (12.6) Sigma (4.1) ");
    }

    #[test]
    fn get_by_name() {
        let params = ParameterSet::from_entries(&[("Scale", 3.2)]);
        assert_eq!(params.get("Scale"), Some(3.2));
        assert_eq!(params.get("Shape"), None);
    }

    #[test]
    fn require_missing_is_synthesis_error() {
        let params = ParameterSet::from_entries(&[("A", 1.0)]);
        assert!(matches!(
            params.require("B"),
            Err(crate::error::Error::Synthesis(_))
        ));
    }
}
