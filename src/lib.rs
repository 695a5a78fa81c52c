//! Workspace-level integration tests for FactCalc-rs live in `tests/`.
