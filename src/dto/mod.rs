pub mod common_dto;
pub mod question_dto;
pub mod test_submission_dto;
pub mod test_taker_dto;
