pub mod line_tokenizer;
pub mod token;
pub mod word_tokenizer;
