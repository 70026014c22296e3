mod booking;
mod contact;
mod notification;
mod phone;
mod sequence;
mod service;
mod shared;
mod testimonial;

pub use booking::{Booking, BookingStatus, PreferredTime, ServiceType};
pub use contact::{
    ConcernType, Contact, ContactNote, ContactStatus, PreferredContact, Priority,
};
pub use notification::{
    booking_channels, contact_channels, truncate_sms_body, BookingMessageData, Channel,
    ChannelFlags, ChannelMedium, ChannelRecipient, ContactMessageData, MessageTemplate,
    RenderedMessage, SMS_BODY_HARD_CAP,
};
pub use phone::{format_phone_number, validate_phone_number};
pub use sequence::{
    format_booking_number, format_contact_number, BOOKING_SEQUENCE_PREFIX,
    CONTACT_SEQUENCE_PREFIX,
};
pub use service::{CleaningService, PriceUnit};
pub use shared::entity::{Entity, ID};
pub use testimonial::{InvalidTestimonialError, Testimonial, TestimonialSource};
