//! Uniform random record selection ("surprise me").

use crate::catalog::{Catalog, ToolRecord};
use crate::types::{Error, Result};
use rand::Rng;

impl Catalog {
    /// Pick one record uniformly at random, independently each call.
    ///
    /// An empty catalog is a precondition violation — callers guard before
    /// exposing the affordance.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&ToolRecord> {
        if self.is_empty() {
            return Err(Error::validation("cannot pick from an empty catalog"));
        }
        let index = rng.gen_range(0..self.len());
        // index < len, so this lookup cannot fail
        self.get(index)
            .ok_or_else(|| Error::validation("catalog index out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::record;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_from_empty_is_error() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(catalog.pick_random(&mut rng).is_err());
    }

    #[test]
    fn test_pick_single_record() {
        let catalog = Catalog::from_records(vec![record("Only", "X")]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(catalog.pick_random(&mut rng).unwrap().name, "Only");
    }

    #[test]
    fn test_pick_reaches_every_record() {
        let catalog = Catalog::from_records(vec![
            record("A", "X"),
            record("B", "X"),
            record("C", "X"),
        ]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(catalog.pick_random(&mut rng).unwrap().name.clone());
        }
        assert_eq!(seen.len(), 3);
    }
}
