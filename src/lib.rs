//! Eligibility screening service for caregiver support schemes.
//!
//! The crate is organized around workflows: `workflows::screening` owns the
//! scheme eligibility engine, the PCHI means calculator, and the intake,
//! service, and HTTP layers that surround them. `config`, `telemetry`, and
//! `error` carry the runtime scaffolding shared by the binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
