mod admin_tests;
mod chirp_tests;
mod health_tests;
