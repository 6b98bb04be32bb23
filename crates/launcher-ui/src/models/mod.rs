pub mod java;
pub mod options;
pub mod user;

pub use java::JavaVersion;
pub use options::{GameOptions, LauncherFlag, LauncherOptions};
pub use user::{Session, UserData, UserLookup};
