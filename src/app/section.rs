use serde::{Deserialize, Serialize};

use super::error::{ResumeError, Result};

/// An ordered list of records within one resume section.
///
/// Array order is presentation order, so entries keep their relative
/// positions across every operation. Removal and update are explicitly
/// bounds-checked: a bad index surfaces as `IndexOutOfRange` and leaves
/// the list untouched instead of panicking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section<T>(Vec<T>);

impl<T> Section<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a record at the end of the section.
    pub fn add(&mut self, record: T) {
        self.0.push(record);
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_bounds(index)?;
        Ok(self.0.remove(index))
    }

    /// Replaces the record at `index` with `record`.
    pub fn update(&mut self, index: usize, record: T) -> Result<()> {
        self.check_bounds(index)?;
        self.0[index] = record;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.0.len() {
            return Err(ResumeError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(())
    }
}

// Manual impl so `Section<T>: Default` doesn't require `T: Default`.
impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Section<T> {
    fn from(records: Vec<T>) -> Self {
        Self(records)
    }
}

impl<T> std::ops::Index<usize> for Section<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<'a, T> IntoIterator for &'a Section<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_call_order() {
        let mut section = Section::new();
        section.add("first");
        section.add("second");
        section.add("third");
        assert_eq!(section.len(), 3);
        assert_eq!(section[0], "first");
        assert_eq!(section[2], "third");
    }

    #[test]
    fn test_remove_shifts_later_records() {
        let mut section = Section::from(vec![10, 20, 30, 40]);
        let removed = section.remove(1).unwrap();
        assert_eq!(removed, 20);
        assert_eq!(section.iter().copied().collect::<Vec<_>>(), vec![10, 30, 40]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_state() {
        let mut section = Section::from(vec![1, 2]);
        let err = section.remove(5).unwrap_err();
        assert!(matches!(
            err,
            ResumeError::IndexOutOfRange { index: 5, len: 2 }
        ));
        assert_eq!(section.len(), 2);
    }

    #[test]
    fn test_update_touches_only_target() {
        let mut section = Section::from(vec!["a".to_string(), "b".to_string()]);
        section.update(1, "z".to_string()).unwrap();
        assert_eq!(section[0], "a");
        assert_eq!(section[1], "z");
    }

    #[test]
    fn test_update_out_of_range() {
        let mut section: Section<i32> = Section::new();
        let err = section.update(0, 7).unwrap_err();
        assert!(matches!(
            err,
            ResumeError::IndexOutOfRange { index: 0, len: 0 }
        ));
    }

    #[test]
    fn test_serde_transparent() {
        let section = Section::from(vec![1, 2, 3]);
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Section<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);
    }
}
