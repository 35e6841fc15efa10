use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCount {
    pub symbol: char,
    pub count: usize,
}

/// Occurrence counts of every distinct symbol, kept in the order each symbol
/// was first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: Vec<SymbolCount>,
    index: HashMap<char, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }

    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        symbols
            .into_iter()
            .fold(FrequencyTable::default(), |mut acc, symbol| {
                acc.record(symbol);
                acc
            })
    }

    fn record(&mut self, symbol: char) {
        let next = self.counts.len();
        let slot = *self.index.entry(symbol).or_insert(next);
        if slot == next {
            self.counts.push(SymbolCount { symbol, count: 0 });
        }
        self.counts[slot].count += 1;
        self.total += 1;
    }

    pub fn count(&self, symbol: char) -> usize {
        self.index
            .get(&symbol)
            .map_or(0, |&slot| self.counts[slot].count)
    }

    /// Number of symbols counted, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct symbols in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolCount> {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_symbols() {
        let freqs = FrequencyTable::from_text("aabbbcc");

        assert_eq!(freqs.count('a'), 2);
        assert_eq!(freqs.count('b'), 3);
        assert_eq!(freqs.count('c'), 2);
        assert_eq!(freqs.count('z'), 0);
        assert_eq!(freqs.total(), 7);
        assert_eq!(freqs.len(), 3);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let freqs = FrequencyTable::from_text("zebra zoo");
        let order: String = freqs.iter().map(|c| c.symbol).collect();

        assert_eq!(order, "zebra o");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let freqs = FrequencyTable::from_text("héé");

        assert_eq!(freqs.count('é'), 2);
        assert_eq!(freqs.total(), 3);
    }

    #[test]
    fn empty_input() {
        let freqs = FrequencyTable::from_text("");

        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
        assert_eq!(freqs.iter().count(), 0);
    }
}
