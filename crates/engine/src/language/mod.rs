pub mod defaults;
mod table;

pub use table::{ExtensionTable, LanguageMap, extension_of, merge};
