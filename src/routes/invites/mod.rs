pub mod invite_handlers;
pub mod invite_models;
