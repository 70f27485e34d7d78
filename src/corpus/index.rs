use super::types::Pattern;

/// Category label → member positions in the record store.
///
/// Labels keep first-encounter order while scanning the store; member lists
/// keep store order. Built once at load, since the store never changes.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    entries: Vec<(String, Vec<usize>)>,
}

impl CategoryIndex {
    pub fn build(records: &[Pattern]) -> Self {
        let mut entries: Vec<(String, Vec<usize>)> = Vec::new();
        for (pos, record) in records.iter().enumerate() {
            for category in &record.categories {
                match entries.iter_mut().find(|(label, _)| label == category) {
                    Some((_, members)) => {
                        // A record listing the same label twice is still one member.
                        if members.last() != Some(&pos) {
                            members.push(pos);
                        }
                    }
                    None => entries.push((category.clone(), vec![pos])),
                }
            }
        }
        Self { entries }
    }

    /// Positions of the records carrying `category`, in store order.
    pub fn members(&self, category: &str) -> &[usize] {
        self.entries
            .iter()
            .find(|(label, _)| label == category)
            .map(|(_, members)| members.as_slice())
            .unwrap_or(&[])
    }

    /// `(label, count)` pairs in first-encounter order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(label, members)| (label.as_str(), members.len()))
    }

    /// Known labels, sorted alphabetically.
    pub fn labels_sorted(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.entries.iter().map(|(l, _)| l.as_str()).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
