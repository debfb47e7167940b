/// A difficulty object that lives inside an owned, append-only sequence.
///
/// Neighbours are looked up by index into that sequence; lookups beyond its
/// bounds return `None`.
pub trait IDifficultyObject: HasStartTime + Sized {
    /// Position of the object within its sequence.
    fn idx(&self) -> usize;

    /// The object `backwards_idx + 1` positions before this one.
    fn previous<'a>(&self, backwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        self.idx()
            .checked_sub(backwards_idx + 1)
            .and_then(|idx| diff_objects.get(idx))
    }

    /// The object `forwards_idx + 1` positions after this one.
    fn next<'a>(&self, forwards_idx: usize, diff_objects: &'a [Self]) -> Option<&'a Self> {
        diff_objects.get(self.idx() + (forwards_idx + 1))
    }
}

pub trait HasStartTime {
    fn start_time(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Obj {
        idx: usize,
        start_time: f64,
    }

    impl HasStartTime for Obj {
        fn start_time(&self) -> f64 {
            self.start_time
        }
    }

    impl IDifficultyObject for Obj {
        fn idx(&self) -> usize {
            self.idx
        }
    }

    fn objects(n: usize) -> Vec<Obj> {
        (0..n)
            .map(|idx| Obj {
                idx,
                start_time: idx as f64 * 100.0,
            })
            .collect()
    }

    #[test]
    fn neighbours_within_bounds() {
        let objects = objects(5);
        let curr = &objects[2];

        assert_eq!(curr.previous(0, &objects).map(|obj| obj.idx), Some(1));
        assert_eq!(curr.previous(1, &objects).map(|obj| obj.idx), Some(0));
        assert_eq!(curr.next(0, &objects).map(|obj| obj.idx), Some(3));
        assert_eq!(curr.next(1, &objects).map(HasStartTime::start_time), Some(400.0));
    }

    #[test]
    fn neighbours_out_of_bounds() {
        let objects = objects(3);

        assert!(objects[0].previous(0, &objects).is_none());
        assert!(objects[1].previous(1, &objects).is_none());
        assert!(objects[2].next(0, &objects).is_none());
    }
}
