use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelSenseError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),
}
