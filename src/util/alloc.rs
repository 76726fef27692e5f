use std::cell::Cell;
use std::rc::Rc;

/// A value that bumps a shared counter when dropped, for checking that the set neither leaks nor
/// double-drops elements while moving them between allocations.
///
/// Equality and hashing only consider `id`, so several counters can share one tally while still
/// being distinct set members.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub id: usize,
    pub drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn many(count: usize) -> (Rc<Cell<usize>>, impl Iterator<Item = CountedDrop>) {
        let drops = Rc::new(Cell::new(0));
        let shared = drops.clone();
        (
            drops,
            (0..count).map(move |id| CountedDrop {
                id,
                drops: shared.clone(),
            }),
        )
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CountedDrop {}

impl std::hash::Hash for CountedDrop {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
