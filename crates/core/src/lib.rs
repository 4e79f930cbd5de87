pub mod config;
pub mod dates;
pub mod de;
pub mod entity;
pub mod error;
pub mod predicate;
pub mod selection;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use entity::EntityConfig;
pub use error::{AdwordsError, AdwordsResult};
pub use predicate::{Predicate, PredicateOperator};
pub use selection::{Selection, Selector};
pub use session::AdwordsSession;
