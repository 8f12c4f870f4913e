pub mod order_dto;
pub mod ticket_dto;
