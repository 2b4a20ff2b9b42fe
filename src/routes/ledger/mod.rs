pub mod ledger_handlers;
pub mod ledger_models;
