pub mod pipeline;
pub mod sections;
