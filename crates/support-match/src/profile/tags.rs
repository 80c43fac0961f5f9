use serde::{Deserialize, Serialize};

/// Multi-select answer with set semantics.
///
/// Values keep the order the user picked them in (the draft letters quote the first few), but a
/// value can only appear once and equality ignores order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(
        serialize = "T: Serialize + Clone",
        deserialize = "T: Deserialize<'de> + PartialEq"
    )
)]
pub struct TagSet<T> {
    items: Vec<T>,
}

impl<T: PartialEq> TagSet<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Adds the value unless already present. Returns `true` when the set changed.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes the value if present. Returns `true` when the set changed.
    pub fn remove(&mut self, value: &T) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != value);
        before != self.items.len()
    }

    /// Form checkbox behavior: add if absent, remove if present. Returns whether the value is now
    /// selected.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.remove(&value) {
            false
        } else {
            self.items.push(value);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The first `limit` selections in pick order.
    pub fn first(&self, limit: usize) -> &[T] {
        &self.items[..limit.min(self.items.len())]
    }
}

impl<T: PartialEq> Default for TagSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for TagSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq> Eq for TagSet<T> {}

impl<T: PartialEq> From<Vec<T>> for TagSet<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<TagSet<T>> for Vec<T> {
    fn from(set: TagSet<T>) -> Self {
        set.items
    }
}

impl<T: PartialEq> FromIterator<T> for TagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a TagSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::vocabulary::{FinancialNeed, Skill};

    #[test]
    fn toggle_adds_then_removes() {
        let mut needs = TagSet::new();
        assert!(needs.toggle(FinancialNeed::DisabilityPension));
        assert!(needs.contains(&FinancialNeed::DisabilityPension));
        assert!(!needs.toggle(FinancialNeed::DisabilityPension));
        assert!(needs.is_empty());
    }

    #[test]
    fn insert_never_duplicates() {
        let mut skills = TagSet::new();
        assert!(skills.insert(Skill::Writing));
        assert!(!skills.insert(Skill::Writing));
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn deserializing_collapses_duplicates_and_keeps_pick_order() {
        let skills: TagSet<Skill> =
            serde_json::from_str(r#"["Writing", "Research", "Writing", "Teaching"]"#).unwrap();
        assert_eq!(
            skills.iter().copied().collect::<Vec<_>>(),
            vec![Skill::Writing, Skill::Research, Skill::Teaching]
        );
        assert_eq!(skills.first(2), &[Skill::Writing, Skill::Research]);
        assert_eq!(skills.first(10).len(), 3);
    }

    #[test]
    fn equality_ignores_order() {
        let left: TagSet<Skill> = vec![Skill::Writing, Skill::Research].into();
        let right: TagSet<Skill> = vec![Skill::Research, Skill::Writing].into();
        assert_eq!(left, right);
    }

    #[test]
    fn unknown_tags_fail_to_deserialize() {
        assert!(serde_json::from_str::<TagSet<Skill>>(r#"["Juggling"]"#).is_err());
    }
}
