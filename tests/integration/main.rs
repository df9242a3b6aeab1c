mod common;
mod library;
mod run;
