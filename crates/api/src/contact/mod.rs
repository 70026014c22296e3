mod delete_contact;
mod get_contact;
mod get_contacts;
mod submit_contact;
mod update_contact;

use actix_web::web;
use delete_contact::delete_contact_controller;
use get_contact::get_contact_controller;
use get_contacts::get_contacts_controller;
use submit_contact::submit_contact_controller;
use update_contact::update_contact_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact_controller));
    cfg.route("/contact", web::get().to(get_contacts_controller));
    cfg.route(
        "/contact/{contact_id}",
        web::get().to(get_contact_controller),
    );
    cfg.route(
        "/contact/{contact_id}",
        web::put().to(update_contact_controller),
    );
    cfg.route(
        "/contact/{contact_id}",
        web::delete().to(delete_contact_controller),
    );
}
