pub mod ideas;
