mod lexical_tests;
mod terminator_tests;
mod unclosed_tests;
mod unexpected_tests;
mod validation_tests;
