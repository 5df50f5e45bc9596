use plainsort::core::InsertTarget;
use plainsort::prelude::*;

// Simulate an external collection type (for example a fixed-stride column
// store) that wants to accept sorted insertions without converting through
// an intermediate Vec.
struct PriceColumn {
    cents: Vec<u64>,
    insertions: usize,
}

impl PriceColumn {
    fn new(cents: &[u64]) -> Self {
        Self {
            cents: cents.to_vec(),
            insertions: 0,
        }
    }
}

// Implement InsertTarget for the external struct. This proves the trait is
// implementable by "outside crates".
impl InsertTarget<u64> for PriceColumn {
    fn len(&self) -> usize {
        self.cents.len()
    }

    fn get(&self, index: usize) -> &u64 {
        &self.cents[index]
    }

    fn insert(&mut self, index: usize, value: u64) {
        self.cents.insert(index, value);
        self.insertions += 1;
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut column = PriceColumn::new(&[100, 250, 900]);
    insertion_sort(&[400, 50, 250], &mut column);

    assert_eq!(column.cents, vec![50, 100, 250, 250, 400, 900]);
    assert!(is_sorted(&column.cents));

    // Exactly one positional insert per source element.
    assert_eq!(column.insertions, 3);
}
