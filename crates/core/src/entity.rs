use crate::predicate::Predicate;
use crate::selection::{Selection, Selector};

/// A config object that carries a field/predicate selection for the
/// platform's query layer.
pub trait EntityConfig {
    fn selection(&self) -> &Selection;
    fn selection_mut(&mut self) -> &mut Selection;

    fn fields(&self) -> &[String] {
        self.selection().fields()
    }

    fn predicates(&self) -> &[Predicate] {
        self.selection().predicates()
    }

    fn add_predicate(&mut self, predicate: Predicate) {
        self.selection_mut().add_predicate(predicate);
    }

    fn to_selector(&self) -> Selector {
        self.selection().to_selector()
    }
}
