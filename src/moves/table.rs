use super::code::Code;
use super::variant::Variant;
use crate::board::Point;
use crate::board::Square;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// One table row: a packed move code plus the direction flag. The first
/// appearance of a code in schedule order reads its endpoints in
/// ascending bit order; every later appearance reads them swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub code: Code,
    pub primary: bool,
}

/// The full action space of one variant, index-compatible with the
/// engine's compiled-in enumeration. Rows are never resorted and
/// duplicate codes are never collapsed; both would desynchronize every
/// action index crossing the engine boundary.
#[derive(Debug, Clone)]
pub struct Table {
    variant: Variant,
    entries: Vec<Entry>,
}

impl From<Variant> for Table {
    fn from(variant: Variant) -> Self {
        let mut seen = HashSet::new();
        let entries = variant
            .strides()
            .iter()
            .flat_map(|stride| stride.origins().map(|o| stride.code(o)).collect::<Vec<_>>())
            .map(|code| Entry {
                code,
                primary: seen.insert(code),
            })
            .collect::<Vec<Entry>>();
        assert!(entries.len() == variant.actions());
        Self { variant, entries }
    }
}

impl Table {
    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Human reading of one action index: (origin, destination) display
    /// points. Fails on out-of-range indices or malformed codes, both of
    /// which mean the table and the engine were built from different
    /// geometry.
    pub fn decode(&self, index: usize) -> anyhow::Result<(Point, Point)> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("action index {} exceeds table of {}", index, self.len()))?;
        let (lo, hi) = entry.code.split()?;
        let from = Point::from(Square::from(lo));
        let till = Point::from(Square::from(hi));
        match entry.primary {
            true => Ok((from, till)),
            false => Ok((till, from)),
        }
    }

    /// Expand an engine valid-move bitmask into addressable human moves.
    /// The mask length must match the table exactly; a mismatch is a
    /// version skew between this build and the engine.
    pub fn labels(&self, valids: &[bool]) -> anyhow::Result<BTreeMap<usize, (Point, Point)>> {
        if valids.len() != self.len() {
            anyhow::bail!(
                "valid-move mask of {} against table of {}",
                valids.len(),
                self.len()
            );
        }
        valids
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| self.decode(i).map(|pair| (i, pair)))
            .collect()
    }

    /// Inverse of decode: the unique index reading as this ordered pair.
    pub fn encode(&self, from: Point, till: Point) -> Option<usize> {
        (0..self.len()).find(|i| matches!(self.decode(*i), Ok(pair) if pair == (from, till)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Bit;

    #[test]
    fn lengths_match_the_engine() {
        for v in Variant::all() {
            assert_eq!(Table::from(*v).len(), v.actions());
        }
    }

    #[test]
    fn every_code_has_two_bits() {
        for v in Variant::all() {
            for entry in Table::from(*v).entries() {
                assert!(entry.code.split().is_ok());
            }
        }
    }

    #[test]
    fn every_code_appears_twice() {
        for v in Variant::all() {
            let table = Table::from(*v);
            let primary = table.entries().iter().filter(|e| e.primary).count();
            assert_eq!(primary * 2, table.len());
        }
    }

    #[test]
    fn known_step_sits_at_index_ten() {
        // right-forward step off native square 11: visual (0,5) -> (1,4)
        let table = Table::from(Variant::American);
        let entry = table.entries()[10];
        assert_eq!(u64::from(entry.code), 0x11000);
        assert!(entry.primary);
        let (from, till) = table.decode(10).unwrap();
        assert_eq!(from, Point::new(0, 5));
        assert_eq!(till, Point::new(1, 4));
    }

    #[test]
    fn twin_reads_swapped() {
        for v in Variant::all() {
            let table = Table::from(*v);
            for (i, entry) in table.entries().iter().enumerate().filter(|(_, e)| e.primary) {
                let twin = table
                    .entries()
                    .iter()
                    .position(|e| e.code == entry.code && !e.primary)
                    .unwrap();
                assert!(twin > i);
                let (from, till) = table.decode(i).unwrap();
                assert_eq!(table.decode(twin).unwrap(), (till, from));
            }
        }
    }

    #[test]
    fn readings_are_unique_per_index() {
        // every index decodes to a distinct ordered pair
        for v in Variant::all() {
            let table = Table::from(*v);
            let mut seen = HashSet::new();
            for i in 0..table.len() {
                assert!(seen.insert(table.decode(i).unwrap()));
            }
        }
    }

    #[test]
    fn encode_inverts_decode() {
        let table = Table::from(Variant::Russian);
        for i in 0..table.len() {
            let (from, till) = table.decode(i).unwrap();
            assert_eq!(table.encode(from, till), Some(i));
        }
    }

    #[test]
    fn american_schedule_blocks() {
        // 25 + 24 + 25 + 24 steps, then 18 * 4 jumps
        let table = Table::from(Variant::American);
        assert!(table.entries()[..49].iter().all(|e| e.primary));
        assert!(table.entries()[49..98].iter().all(|e| !e.primary));
        assert!(table.entries()[98..134].iter().all(|e| e.primary));
        assert!(table.entries()[134..].iter().all(|e| !e.primary));
    }

    #[test]
    fn first_rows_read_off_the_white_home_row() {
        // lowest bits enumerate first
        let table = Table::from(Variant::American);
        let (from, till) = table.decode(0).unwrap();
        assert_eq!(from, Point::from(Square::from(Bit::from(0u8))));
        assert_eq!(from, Point::new(6, 7));
        assert_eq!(till, Point::new(7, 6));
    }

    #[test]
    fn labels_reject_skewed_masks() {
        let table = Table::from(Variant::American);
        assert!(table.labels(&vec![false; 169]).is_err());
        assert!(table.labels(&vec![false; 171]).is_err());
    }

    #[test]
    fn labels_expand_set_indices_only() {
        let table = Table::from(Variant::American);
        let mut valids = vec![false; table.len()];
        valids[10] = true;
        valids[98] = true;
        let labels = table.labels(&valids).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[&10], (Point::new(0, 5), Point::new(1, 4)));
        assert!(labels.get(&0).is_none());
    }
}
