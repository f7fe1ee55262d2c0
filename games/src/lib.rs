pub mod chatbot;
pub mod recommender;
pub mod tictactoe;
