pub mod categorizer;
pub mod learner;
pub mod reassign;
pub mod store;

pub use categorizer::{Categorizer, CategoryGroups};
pub use learner::{LearnError, Suggestion};
pub use reassign::reassign;
pub use store::{CategoryStore, RulesError, DEFAULT_RULES, INCOME, UNCATEGORIZED};
