pub mod action_response;
pub mod table_query;
pub mod validation;

pub use action_response::ActionResponse;
pub use validation::ValidationRules;
