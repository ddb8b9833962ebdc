pub mod airline;
pub mod courier;
pub mod shipment;
