//! Compatibility table: non-overlapping version ranges
use molecule_core::{CapabilityError, VersionId, VersionRange};

#[derive(Debug, Clone, Default)]
pub struct RangeTable {
    ranges: Vec<VersionRange>,
}

impl RangeTable {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Append `range`, returning its slot. Rejects any intersection.
    pub fn insert(&mut self, range: VersionRange) -> Result<usize, CapabilityError> {
        if let Some(existing) = self.ranges.iter().find(|r| r.intersects(&range)) {
            return Err(CapabilityError::OverlappingRange {
                existing: existing.to_string(),
                new: range.to_string(),
            });
        }
        self.ranges.push(range);
        Ok(self.ranges.len() - 1)
    }

    /// Slot of the range containing `version`; at most one can.
    pub fn position(&self, version: &VersionId) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(version))
    }

    pub fn ranges(&self) -> &[VersionRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: &str, max: &str) -> VersionRange {
        VersionRange::parse(min, max).unwrap()
    }

    #[test]
    fn test_disjoint_inserts() {
        let mut table = RangeTable::new();
        assert_eq!(table.insert(range("1.8.0", "1.8.9")).unwrap(), 0);
        assert_eq!(table.insert(range("1.9.0", "1.9.9")).unwrap(), 1);
        assert_eq!(table.position(&VersionId::new(1, 9, 3)), Some(1));
        assert_eq!(table.position(&VersionId::new(2, 0, 0)), None);
    }

    #[test]
    fn test_overlap_rejected() {
        let mut table = RangeTable::new();
        table.insert(range("1.8.0", "1.9.0")).unwrap();
        let err = table.insert(range("1.9.0", "1.10.2")).unwrap_err();
        assert_eq!(
            err,
            CapabilityError::OverlappingRange {
                existing: "[1.8.0, 1.9.0]".into(),
                new: "[1.9.0, 1.10.2]".into(),
            }
        );
        assert_eq!(table.len(), 1);
    }
}
