//! Syllabus Statement Builder Library
//!
//! Core of the AI-use syllabus statement builder: the selection store, the
//! paragraph generator, the wizard navigator, and the terminal front end
//! built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod generator;
pub mod selection;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use config::BuilderConfig;
pub use error::BuilderError;
pub use generator::{GeneratorConfig, generate};
pub use selection::{SelectionError, SelectionRecord, SelectionValue};
pub use types::{Cardinality, Category, JoinMode};
pub use wizard::{Wizard, WizardStep};
