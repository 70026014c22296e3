mod cancel_booking;
mod create_booking;
mod delete_booking;
mod get_booking;
mod get_bookings;
mod update_booking;

use actix_web::web;
use cancel_booking::cancel_booking_controller;
use create_booking::create_booking_controller;
use delete_booking::delete_booking_controller;
use get_booking::get_booking_controller;
use get_bookings::get_bookings_controller;
use update_booking::update_booking_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings", web::post().to(create_booking_controller));
    cfg.route("/bookings", web::get().to(get_bookings_controller));
    cfg.route(
        "/bookings/{booking_id}",
        web::get().to(get_booking_controller),
    );
    cfg.route(
        "/bookings/{booking_id}",
        web::put().to(update_booking_controller),
    );
    cfg.route(
        "/bookings/{booking_id}/cancel",
        web::put().to(cancel_booking_controller),
    );
    cfg.route(
        "/bookings/{booking_id}",
        web::delete().to(delete_booking_controller),
    );
}
