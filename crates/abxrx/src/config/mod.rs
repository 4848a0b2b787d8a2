//! Configuration injected into the fusion and correlation components.

mod colours;
mod scope;
mod settings;

pub use colours::ColourScheme;
pub use scope::AnalysisScope;
pub use settings::{AntibioticClasses, Settings};
