pub mod entitlement;
pub mod hotels;
pub mod tickets;

pub use hotels::HotelService;
pub use tickets::TicketService;
