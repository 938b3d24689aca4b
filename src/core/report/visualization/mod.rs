//! Visualization helpers for reports

pub mod mermaid;

pub use mermaid::MermaidGenerator;
