pub mod generate_logo_dto;
