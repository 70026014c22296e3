mod approve_testimonial;
mod create_testimonial;
mod delete_testimonial;
mod get_featured_testimonials;
mod get_testimonials_admin;
mod list_testimonials;
mod set_testimonial_featured;
mod submit_testimonial;
mod update_testimonial;

use actix_web::web;
use approve_testimonial::approve_testimonial_controller;
use create_testimonial::create_testimonial_controller;
use delete_testimonial::delete_testimonial_controller;
use get_featured_testimonials::get_featured_testimonials_controller;
use get_testimonials_admin::get_testimonials_admin_controller;
use list_testimonials::list_testimonials_controller;
use set_testimonial_featured::set_testimonial_featured_controller;
use submit_testimonial::submit_testimonial_controller;
use update_testimonial::update_testimonial_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/testimonials", web::get().to(list_testimonials_controller));
    cfg.route(
        "/testimonials/featured",
        web::get().to(get_featured_testimonials_controller),
    );
    cfg.route(
        "/testimonials",
        web::post().to(submit_testimonial_controller),
    );

    cfg.route(
        "/testimonials/admin",
        web::get().to(get_testimonials_admin_controller),
    );
    cfg.route(
        "/testimonials/admin",
        web::post().to(create_testimonial_controller),
    );
    cfg.route(
        "/testimonials/{testimonial_id}",
        web::put().to(update_testimonial_controller),
    );
    cfg.route(
        "/testimonials/{testimonial_id}/approve",
        web::put().to(approve_testimonial_controller),
    );
    cfg.route(
        "/testimonials/{testimonial_id}/featured",
        web::put().to(set_testimonial_featured_controller),
    );
    cfg.route(
        "/testimonials/{testimonial_id}",
        web::delete().to(delete_testimonial_controller),
    );
}
