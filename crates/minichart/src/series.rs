// File: crates/minichart/src/series.rs
// Summary: Series model pairing ordered values with positional labels.
// Notes:
// - `new` stays permissive to match how dashboard callers hand over raw
//   arrays; `try_new` is the stricter constructor for callers that want
//   invariants enforced up front.

#[derive(Clone, Debug, Default)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    /// Pair labels with values positionally. Labels may be shorter than
    /// values; the excess values render unlabeled.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    /// Values only, no labels.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { labels: Vec::new(), values }
    }

    /// Try to construct a series enforcing magnitude invariants:
    /// every value finite and non-negative.
    pub fn try_new(labels: Vec<String>, values: Vec<f64>) -> Result<Self, &'static str> {
        for &v in &values {
            if !v.is_finite() {
                return Err("non-finite value in series");
            }
            if v < 0.0 {
                return Err("negative value in series");
            }
        }
        Ok(Self { labels, values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label at `i`, or `None` past the end of the label sequence.
    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels.get(i).map(String::as_str)
    }

    /// Number of values (bars/points to draw).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
