mod common;
mod engine;
mod validator;
