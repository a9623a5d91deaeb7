mod option_precedence;
mod power_budget;

pub use option_precedence::OptionPrecedence;
pub use power_budget::PowerBudget;
