pub mod question;
pub mod record;
pub mod test_submission;
pub mod test_taker;
