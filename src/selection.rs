/// Which record the detail panel is bound to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Closed,
    Open(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Closed
    }
}

impl<T> Selection<T> {
    /// Bind the panel to `record`, replacing any current one. `None` leaves
    /// the selection untouched.
    pub fn select(&mut self, record: Option<T>) {
        if let Some(record) = record {
            *self = Selection::Open(record);
        }
    }

    pub fn dismiss(&mut self) {
        *self = Selection::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Selection::Open(record) => Some(record),
            Selection::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDataGenerator;

    #[test]
    fn select_replace_dismiss() {
        let leads = MockDataGenerator::seeded(1).leads(2, 0);
        let (a, b) = (leads[0].clone(), leads[1].clone());

        let mut selection: Selection<crate::types::Lead> = Selection::default();
        assert_eq!(selection, Selection::Closed);

        selection.select(Some(a.clone()));
        assert_eq!(selection, Selection::Open(a));

        selection.select(Some(b.clone()));
        assert_eq!(selection.current(), Some(&b));
        assert!(selection.is_open());

        selection.dismiss();
        assert_eq!(selection, Selection::Closed);
        assert!(selection.current().is_none());
    }

    #[test]
    fn selecting_nothing_is_noop() {
        let mut selection: Selection<u32> = Selection::Closed;
        selection.select(None);
        assert!(!selection.is_open());

        selection.select(Some(7));
        selection.select(None);
        assert_eq!(selection.current(), Some(&7));
    }

    #[test]
    fn dismiss_when_closed_stays_closed() {
        let mut selection: Selection<u32> = Selection::Closed;
        selection.dismiss();
        assert_eq!(selection, Selection::Closed);
    }
}
