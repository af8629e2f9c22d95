pub mod use_campaign;
pub mod use_instructions;
pub mod use_session;

pub use use_campaign::use_campaign;
pub use use_instructions::use_instructions;
pub use use_session::use_session;
