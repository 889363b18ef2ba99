mod declarations_tests;
mod expressions_tests;
mod literals_tests;
mod statements_tests;
mod trivia_tests;
