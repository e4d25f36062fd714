mod health_tests;
mod user_tests;
