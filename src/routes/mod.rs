pub mod groups;
pub mod invites;
pub mod ledger;
pub mod login;
pub mod routes;
