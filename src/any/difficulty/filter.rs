use std::borrow::Cow;

/// Which hit objects a mode's difficulty calculation gets to see.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ObjectFilter {
    /// Every object that contributes to scoring.
    #[default]
    Scoring,
    /// Only objects that contribute to the combo.
    Combo,
}

/// Classification of a hit object with regards to [`ObjectFilter`].
pub trait FilterObject {
    /// Whether the object contributes to scoring at all.
    fn is_scoring(&self) -> bool {
        true
    }

    /// Whether the object contributes to the combo.
    fn is_combo(&self) -> bool;
}

impl ObjectFilter {
    /// Whether the filter lets the object pass.
    pub fn retain<O: FilterObject>(self, obj: &O) -> bool {
        match self {
            Self::Scoring => obj.is_scoring(),
            Self::Combo => obj.is_scoring() && obj.is_combo(),
        }
    }

    /// References to all objects that pass the filter, in order.
    pub fn apply<O: FilterObject>(self, objects: &[O]) -> Vec<&O> {
        objects.iter().filter(|obj| self.retain(*obj)).collect()
    }

    /// All objects that pass the filter, in order.
    ///
    /// The slice is only copied if the filter actually drops an object.
    pub fn apply_slice<O: FilterObject + Clone>(self, objects: &[O]) -> Cow<'_, [O]> {
        if objects.iter().all(|obj| self.retain(obj)) {
            Cow::Borrowed(objects)
        } else {
            Cow::Owned(self.apply(objects).into_iter().cloned().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Kind {
        Note,
        Bonus,
        Filler,
    }

    impl FilterObject for Kind {
        fn is_scoring(&self) -> bool {
            !matches!(self, Self::Filler)
        }

        fn is_combo(&self) -> bool {
            matches!(self, Self::Note)
        }
    }

    #[test]
    fn policies() {
        let objects = [Kind::Note, Kind::Bonus, Kind::Filler, Kind::Note];

        assert_eq!(ObjectFilter::Scoring.apply(&objects).len(), 3);
        assert_eq!(
            ObjectFilter::Combo.apply(&objects),
            [&Kind::Note, &Kind::Note]
        );
    }

    #[test]
    fn slice_is_only_copied_when_dropping() {
        let notes = [Kind::Note, Kind::Note];
        let mixed = [Kind::Note, Kind::Filler, Kind::Bonus];

        assert!(matches!(ObjectFilter::Combo.apply_slice(&notes), Cow::Borrowed(_)));
        assert!(matches!(ObjectFilter::Scoring.apply_slice(&mixed), Cow::Owned(_)));
        assert_eq!(*ObjectFilter::Combo.apply_slice(&mixed), [Kind::Note]);
    }
}
