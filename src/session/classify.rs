use serde::{Deserialize, Serialize};

/// Environment severity label as produced by upstream inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum EnvClass {
    Normal,
    Interference,
    Critical,
    /// No inference received yet, or an unrecognized label on the wire.
    #[default]
    Unknown,
}

impl From<String> for EnvClass {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Normal" => Self::Normal,
            "Interference" => Self::Interference,
            "Critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Classification {
    pub class: EnvClass,
    #[serde(default)]
    pub probability: Option<f64>,
}

impl Classification {
    pub fn new(class: EnvClass, probability: Option<f64>) -> Self {
        Self { class, probability }
    }
}

/// Result of one store update.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// True when the class label differs from the previous one.
    /// A probability-only change does not count.
    pub changed: bool,
    pub previous: Classification,
}

/// Holds the latest inference result. Updates replace it wholesale; there is
/// no partial merge.
#[derive(Debug, Default)]
pub struct ClassificationStore {
    current: Classification,
}

impl ClassificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Classification {
        &self.current
    }

    pub fn update(&mut self, next: Classification) -> Transition {
        let previous = std::mem::replace(&mut self.current, next);
        Transition {
            changed: previous.class != self.current.class,
            previous,
        }
    }
}
