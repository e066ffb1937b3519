/// The last value a view was rendered from.
///
/// Compared structurally against each new candidate to decide whether a
/// re-render is needed. An empty memo equals an absent candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Memo<T> {
    value: Option<T>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: PartialEq + Clone> Memo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` differs from the remembered value.
    pub fn differs(&self, candidate: Option<&T>) -> bool {
        self.value.as_ref() != candidate
    }

    pub fn remember(&mut self, value: &T) {
        self.value = Some(value.clone());
    }

    pub fn forget(&mut self) {
        self.value = None;
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_memo_matches_nothing_selected() {
        let memo: Memo<u32> = Memo::new();
        assert!(!memo.differs(None));
        assert!(memo.differs(Some(&1)));
    }

    #[test]
    fn structural_comparison() {
        let mut memo = Memo::new();
        memo.remember(&vec![1, 2, 3]);

        assert!(!memo.differs(Some(&vec![1, 2, 3])));
        assert!(memo.differs(Some(&vec![1, 2])));
        assert!(memo.differs(None));

        memo.forget();
        assert_eq!(memo.get(), None);
    }
}
