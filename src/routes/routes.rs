use actix_web::web;

use super::groups::group_handlers;
use super::invites::invite_handlers;
use super::ledger::ledger_handlers;
use super::login::login_handlers;

pub fn login_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-login")
            .route("/register", web::post().to(login_handlers::register))
            .route("/login", web::post().to(login_handlers::login))
            .route("/logout", web::post().to(login_handlers::logout))
            .route("/me", web::get().to(login_handlers::me)),
    );
}

pub fn groups_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-groups")
            .route("/create-group", web::post().to(group_handlers::create_group))
            .route("/group-list", web::post().to(group_handlers::group_list))
            .route("/group-detail", web::get().to(group_handlers::group_detail))
            .route("/remove-member", web::post().to(group_handlers::remove_member)),
    );
}

pub fn invites_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-invites")
            .route("/send-invite", web::post().to(invite_handlers::send_invite))
            .route("/get-invite", web::get().to(invite_handlers::get_invite))
            .route("/accept-invite", web::post().to(invite_handlers::accept_invite)),
    );
}

pub fn ledger_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api-ledger")
            .route("/add-expense", web::post().to(ledger_handlers::add_expense))
            .route("/remove-expense", web::post().to(ledger_handlers::remove_expense))
            .route("/add-saving", web::post().to(ledger_handlers::add_saving))
            .route("/remove-saving", web::post().to(ledger_handlers::remove_saving)),
    );
}
