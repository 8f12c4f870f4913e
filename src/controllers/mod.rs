pub mod order_controller;
pub mod ticket_controller;
