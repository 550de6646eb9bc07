pub mod pinyin;

pub use pinyin::{pinyin_first, pinyin_full};
