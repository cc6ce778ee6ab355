mod declaration_tests;
mod expression_tests;
mod statement_tests;
mod switch_tests;
mod trivia_tests;
