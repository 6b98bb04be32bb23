use std::fmt::Display;

/// Java runtimes the VM page offers for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaVersion {
    Java8,
    Java17,
    Java21,
}

impl JavaVersion {
    pub const ALL: [JavaVersion; 3] = [JavaVersion::Java8, JavaVersion::Java17, JavaVersion::Java21];
}

impl Display for JavaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JavaVersion::Java8 => f.write_str("Java 8"),
            JavaVersion::Java17 => f.write_str("Java 17"),
            JavaVersion::Java21 => f.write_str("Java 21"),
        }
    }
}
