use rand::Rng;

/// Fisher-Yates, walking `i` upwards and swapping with a uniform `j` in `[i, n)`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
  let n = items.len();
  for i in 0..n {
    let j = rng.gen_range(i..n);
    items.swap(i, j);
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use proptest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};

  use super::*;

  #[test]
  fn same_seed_same_order() {
    let mut a: Vec<u32> = (0..100).collect();
    let mut b = a.clone();
    fisher_yates(&mut a, &mut StdRng::seed_from_u64(7));
    fisher_yates(&mut b, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);

    let mut c: Vec<u32> = (0..100).collect();
    fisher_yates(&mut c, &mut StdRng::seed_from_u64(8));
    assert_ne!(a, c);
  }

  #[test]
  fn empty_and_single() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut empty: Vec<u8> = vec![];
    fisher_yates(&mut empty, &mut rng);
    assert!(empty.is_empty());
    let mut one = vec![42];
    fisher_yates(&mut one, &mut rng);
    assert_eq!(one, vec![42]);
  }

  #[test]
  fn every_permutation_of_three_shows_up_evenly() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
    for _ in 0..6000 {
      let mut items = vec![0u8, 1, 2];
      fisher_yates(&mut items, &mut rng);
      *counts.entry(items).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    for (perm, count) in counts {
      assert!((800..1200).contains(&count), "{:?} drawn {} times", perm, count);
    }
  }

  proptest! {
    #[test]
    fn shuffle_is_a_permutation(items in prop::collection::vec(any::<u16>(), 0..200), seed in any::<u64>()) {
      let mut shuffled = items.clone();
      fisher_yates(&mut shuffled, &mut StdRng::seed_from_u64(seed));
      let mut expected = items;
      expected.sort_unstable();
      shuffled.sort_unstable();
      prop_assert_eq!(shuffled, expected);
    }
  }
}
