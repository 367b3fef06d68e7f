pub mod aggregate;
pub mod request;
pub mod response;

pub use aggregate::Task;
