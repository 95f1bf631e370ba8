use indexmap::IndexMap;

/// The measured depth of every operation in a document, keyed by operation
/// name (`""` for an anonymous operation) in document order.
///
/// Operations that exceeded the maximum depth are included too. Their depth
/// is measured only down to the first level past the maximum.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepthReport {
    pub(crate) depths: IndexMap<String, u32>,
}
impl DepthReport {
    pub fn get(&self, operation_key: &str) -> Option<u32> {
        self.depths.get(operation_key).copied()
    }

    pub fn depths(&self) -> &IndexMap<String, u32> {
        &self.depths
    }

    pub fn into_depths(self) -> IndexMap<String, u32> {
        self.depths
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.depths.iter().map(|(key, depth)| (key.as_str(), *depth))
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub(crate) fn insert(&mut self, operation_key: String, depth: u32) {
        self.depths.insert(operation_key, depth);
    }
}

impl<K: Into<String>> std::iter::FromIterator<(K, u32)> for DepthReport {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self {
            depths: iter.into_iter()
                .map(|(key, depth)| (key.into(), depth))
                .collect(),
        }
    }
}
