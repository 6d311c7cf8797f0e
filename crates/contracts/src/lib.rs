//! Shared contracts between the backend and any API consumer:
//! domain aggregates, DTOs, enums, usecase and dashboard types.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod usecases;
