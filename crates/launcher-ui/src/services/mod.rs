pub mod options;
pub mod session;

pub use options::OptionsBridge;
pub use session::SessionService;
