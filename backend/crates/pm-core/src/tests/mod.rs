mod board;
mod models;
