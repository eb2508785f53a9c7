pub mod assembler;
pub mod rigid_body;
pub mod rigid_body_system;
