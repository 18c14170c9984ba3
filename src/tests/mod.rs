mod ast;
mod config;
mod format;
mod scanner;
