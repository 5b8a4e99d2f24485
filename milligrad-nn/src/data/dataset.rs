use milligrad_core::{Graph, MilligradError, NodeId};

/// Inputs and labels held as persistent leaf nodes of a graph.
#[derive(Debug, Clone)]
pub struct VecDataset {
    inputs: Vec<Vec<NodeId>>,
    labels: Vec<NodeId>,
    input_width: usize,
}

impl VecDataset {
    /// Creates one leaf per input value and per label.
    ///
    /// # Errors
    /// `LengthMismatch` if `rows` and `labels` differ in length, `DimensionMismatch` if
    /// the rows are not all the same width.
    pub fn from_rows(
        graph: &Graph,
        rows: &[Vec<f64>],
        labels: &[f64],
    ) -> Result<Self, MilligradError> {
        if rows.len() != labels.len() {
            return Err(MilligradError::LengthMismatch {
                operation: "VecDataset::from_rows".to_string(),
                left: rows.len(),
                right: labels.len(),
            });
        }
        let input_width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|r| r.len() != input_width) {
            return Err(MilligradError::DimensionMismatch {
                expected: input_width,
                actual: row.len(),
            });
        }

        let inputs: Vec<Vec<NodeId>> = rows
            .iter()
            .map(|row| graph.leaves(row).iter().map(|v| v.id()).collect())
            .collect();
        let labels: Vec<NodeId> = graph.leaves(labels).iter().map(|v| v.id()).collect();

        Ok(VecDataset {
            inputs,
            labels,
            input_width,
        })
    }

    /// Input nodes and label node of example `index`.
    pub fn get(&self, index: usize) -> Option<(&[NodeId], NodeId)> {
        let inputs = self.inputs.get(index)?;
        let label = *self.labels.get(index)?;
        Some((inputs.as_slice(), label))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[NodeId], NodeId)> + '_ {
        self.inputs
            .iter()
            .map(Vec::as_slice)
            .zip(self.labels.iter().copied())
    }

    pub fn labels(&self) -> &[NodeId] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
