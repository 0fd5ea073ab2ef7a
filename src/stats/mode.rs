use std::collections::HashMap;

/// Frequency table that remembers the order in which distinct values first appear.
#[derive(Debug, Default)]
pub struct Frequencies {
    index: HashMap<u64, usize>,
    entries: Vec<(f64, usize)>,
}

impl Frequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `val`.
    pub fn add(&mut self, val: f64) {
        let key = bit_key(val);
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((val, 1));
            }
        }
    }

    /// Highest frequency seen, 0 when nothing was added.
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|&(_, c)| c).max().unwrap_or(0)
    }

    /// All values whose frequency equals the highest one, in first-seen order.
    ///
    /// Returns `None` when no value repeats (every frequency is 1) or when empty.
    pub fn modes(&self) -> Option<Vec<f64>> {
        let top = self.max_count();
        if top <= 1 {
            return None;
        }
        Some(
            self.entries
                .iter()
                .filter(|&&(_, c)| c == top)
                .map(|&(v, _)| v)
                .collect(),
        )
    }
}

impl FromIterator<f64> for Frequencies {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut freqs = Frequencies::new();
        for val in iter {
            freqs.add(val);
        }
        freqs
    }
}

// -0.0 and 0.0 compare equal, so they share a bucket.
fn bit_key(val: f64) -> u64 {
    if val == 0.0 { 0.0f64.to_bits() } else { val.to_bits() }
}

/// Mode(s) of a set of data, see [`Frequencies::modes`].
pub fn modes(values: &[f64]) -> Option<Vec<f64>> {
    values.iter().copied().collect::<Frequencies>().modes()
}
