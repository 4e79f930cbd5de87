//! Field and predicate selection shared by every config object.

use serde::{Deserialize, Serialize};

use crate::predicate::Predicate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    fields: Vec<String>,
    predicates: Vec<Predicate>,
}

/// Serializable selector handed to the platform's entity services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selector {
    pub fields: Vec<String>,
    pub predicates: Vec<Predicate>,
}

impl Selection {
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            predicates: Vec::new(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn set_fields(&mut self, fields: Vec<String>) -> &mut Self {
        self.fields = fields;
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn add_predicate(&mut self, predicate: Predicate) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    pub fn set_predicates(&mut self, predicates: Vec<Predicate>) -> &mut Self {
        self.predicates = predicates;
        self
    }

    pub fn to_selector(&self) -> Selector {
        Selector {
            fields: self.fields.clone(),
            predicates: self.predicates.clone(),
        }
    }
}
