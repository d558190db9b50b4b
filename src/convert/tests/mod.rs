mod dec_tests;
mod deg_tests;
mod mms_tests;
