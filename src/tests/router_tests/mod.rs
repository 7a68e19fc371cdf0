mod booking_tests;
mod chat_tests;
mod page_tests;
