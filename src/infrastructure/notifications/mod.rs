pub mod composite;
pub mod email;
pub mod terminal;

pub use composite::CompositeNotifier;
pub use email::EmailNotifier;
pub use terminal::TerminalNotifier;
