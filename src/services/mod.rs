pub(crate) mod allocation_service;
pub(crate) mod generation_service;
pub(crate) mod simulation_service;
