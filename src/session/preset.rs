//! Built-in example program used to seed a fresh session

/// Name of the preset loaded on startup
pub const DEFAULT_PRESET: &str = "hello-world";

/// A named pair of program source and standard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub program: &'static str,
    pub stdin: &'static str,
}

const HELLO_WORLD: Preset = Preset {
    name: DEFAULT_PRESET,
    program: "func main() {\n  a = inputi();\n  print(\"Hello \", a);\n}",
    stdin: "1234",
};

impl Preset {
    /// The preset a new session starts from
    pub fn default_preset() -> Preset {
        HELLO_WORLD
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::default_preset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_reads_and_echoes_a_number() {
        let preset = Preset::default();
        assert_eq!(preset.name, "hello-world");
        assert!(preset.program.contains("inputi()"));
        assert_eq!(preset.stdin, "1234");
    }
}
