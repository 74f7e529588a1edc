use stay_derive::stay_error;

#[stay_error]
pub enum DemoError {
    #[error("not available")]
    NotAvailable,

    #[error("no such hotel: {id}")]
    InvalidHotel { id: String },
}

fn main() {
    assert_eq!(DemoError::NotAvailable.kind(), DemoErrorKind::NotAvailable);
    assert_ne!(
        DemoError::InvalidHotel { id: "x".to_owned() }.kind(),
        DemoErrorKind::NotAvailable
    );
    assert_eq!(DemoError::NotAvailable.to_string(), "not available");
}
