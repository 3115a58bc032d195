pub mod queue;
pub mod request;
