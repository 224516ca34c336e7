mod parameter;
mod parser;
