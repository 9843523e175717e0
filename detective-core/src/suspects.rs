//! Clue to suspect lookup table.
//!
//! A fixed number of buckets, each a chain of associations. The bucket for a
//! clue is the sum of its character codes modulo the bucket count, so
//! collisions are common and resolved by scanning the chain.

use crate::dataset::AssociationSpec;
use thiserror::Error;

/// Default number of buckets.
pub const DEFAULT_BUCKETS: usize = 20;

/// Errors from building a suspect table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuspectTableError {
    #[error("Suspect table needs at least one bucket")]
    NoBuckets,
}

#[derive(Debug, Clone)]
struct Association {
    clue: String,
    suspect: String,
    /// Global insertion sequence number.
    seq: usize,
}

/// Maps clue text to the suspect it implicates.
#[derive(Debug, Clone)]
pub struct SuspectTable {
    /// Chains are kept oldest first and scanned from the back, so the newest
    /// association for a clue is always found first.
    buckets: Vec<Vec<Association>>,
    len: usize,
}

impl Default for SuspectTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectTable {
    /// Create an empty table with `DEFAULT_BUCKETS` buckets.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_BUCKETS],
            len: 0,
        }
    }

    /// Create an empty table with a custom bucket count.
    pub fn with_buckets(count: usize) -> Result<Self, SuspectTableError> {
        if count == 0 {
            return Err(SuspectTableError::NoBuckets);
        }
        Ok(Self {
            buckets: vec![Vec::new(); count],
            len: 0,
        })
    }

    /// Build a table from dataset associations, inserted in order.
    pub fn from_associations<'a>(
        count: usize,
        associations: impl IntoIterator<Item = &'a AssociationSpec>,
    ) -> Result<Self, SuspectTableError> {
        let mut table = Self::with_buckets(count)?;
        for association in associations {
            table.insert(association.clue.as_str(), association.suspect.as_str());
        }
        Ok(table)
    }

    /// Bucket index for a clue.
    pub fn bucket_of(&self, clue: &str) -> usize {
        let sum = clue
            .chars()
            .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))));
        (sum % self.buckets.len() as u64) as usize
    }

    /// Record that `clue` implicates `suspect`.
    ///
    /// A later association for the same clue shadows the earlier one.
    pub fn insert(&mut self, clue: impl Into<String>, suspect: impl Into<String>) {
        let clue = clue.into();
        let bucket = self.bucket_of(&clue);
        self.buckets[bucket].push(Association {
            clue,
            suspect: suspect.into(),
            seq: self.len,
        });
        self.len += 1;
    }

    /// The suspect implicated by `clue`, if any.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.buckets[self.bucket_of(clue)]
            .iter()
            .rev()
            .find(|a| a.clue == clue)
            .map(|a| a.suspect.as_str())
    }

    /// Whether `clue` implicates exactly `suspect`.
    pub fn implicates(&self, clue: &str, suspect: &str) -> bool {
        self.lookup(clue) == Some(suspect)
    }

    /// Number of recorded associations, shadowed ones included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the chain in one bucket.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map(Vec::len).unwrap_or(0)
    }

    /// Distinct suspects implicated by at least one clue, in the order they
    /// were first inserted. Shadowed associations don't count.
    pub fn suspects(&self) -> Vec<&str> {
        let mut live: Vec<&Association> = self
            .buckets
            .iter()
            .flatten()
            .filter(|a| self.lookup(&a.clue) == Some(a.suspect.as_str()))
            .collect();
        live.sort_by_key(|a| a.seq);

        let mut names: Vec<&str> = Vec::new();
        for association in live {
            if !names.contains(&association.suspect.as_str()) {
                names.push(&association.suspect);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MansionDataset;

    #[test]
    fn test_insert_then_lookup() {
        let mut table = SuspectTable::new();
        table.insert("Faca com manchas suspeitas", "Mordomo James");
        assert_eq!(
            table.lookup("Faca com manchas suspeitas"),
            Some("Mordomo James")
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lookup_absent() {
        let table = SuspectTable::new();
        assert_eq!(table.lookup("anything"), None);
        assert_eq!(table.lookup(""), None);

        let builtin = MansionDataset::builtin();
        let table = SuspectTable::from_associations(DEFAULT_BUCKETS, &builtin.associations).unwrap();
        assert_eq!(table.lookup("Uma pegada estranha"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_most_recent_wins() {
        let mut table = SuspectTable::new();
        table.insert("Carta", "Sra. Johnson");
        table.insert("Carta", "Dr. Smith");
        assert_eq!(table.lookup("Carta"), Some("Dr. Smith"));
        assert!(table.implicates("Carta", "Dr. Smith"));
        assert!(!table.implicates("Carta", "Sra. Johnson"));
    }

    #[test]
    fn test_hash_is_char_sum() {
        let table = SuspectTable::new();
        // 'a' = 97, 'b' = 98 -> 195 % 20 = 15
        assert_eq!(table.bucket_of("ab"), 15);
        assert_eq!(table.bucket_of("ba"), 15);
        assert_eq!(table.bucket_of(""), 0);
        // 'ê' = 234
        assert_eq!(table.bucket_of("ê"), 234 % 20);
    }

    #[test]
    fn test_collisions_are_chained() {
        let mut table = SuspectTable::new();
        // Anagrams always share a bucket.
        table.insert("ab", "Alice");
        table.insert("ba", "Bob");
        let bucket = table.bucket_of("ab");
        assert_eq!(table.chain_len(bucket), 2);
        assert_eq!(table.lookup("ab"), Some("Alice"));
        assert_eq!(table.lookup("ba"), Some("Bob"));
    }

    #[test]
    fn test_single_bucket_still_correct() {
        let builtin = MansionDataset::builtin();
        let table = SuspectTable::from_associations(1, &builtin.associations).unwrap();
        assert_eq!(table.chain_len(0), 10);
        for association in &builtin.associations {
            assert_eq!(
                table.lookup(&association.clue),
                Some(association.suspect.as_str())
            );
        }
    }

    #[test]
    fn test_zero_buckets_rejected() {
        assert_eq!(
            SuspectTable::with_buckets(0).unwrap_err(),
            SuspectTableError::NoBuckets
        );
    }

    #[test]
    fn test_suspects_roster() {
        let builtin = MansionDataset::builtin();
        let table = SuspectTable::from_associations(DEFAULT_BUCKETS, &builtin.associations).unwrap();
        assert_eq!(
            table.suspects(),
            vec!["Dr. Smith", "Sra. Johnson", "Sr. Williams", "Mordomo James"]
        );
    }

    #[test]
    fn test_suspects_ignores_shadowed() {
        let mut table = SuspectTable::new();
        table.insert("Carta", "Sra. Johnson");
        table.insert("Carta", "Dr. Smith");
        assert_eq!(table.suspects(), vec!["Dr. Smith"]);
    }
}
