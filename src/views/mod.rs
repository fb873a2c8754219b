pub mod chat;
pub mod start;

pub use chat::ChatView;
pub use start::StartView;
