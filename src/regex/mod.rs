// Compiled-once regular expressions

mod cache;
