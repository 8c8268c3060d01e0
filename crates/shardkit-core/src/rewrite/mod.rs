//! Statement rewriting for execution: turning one logical statement into
//! the executable units sent to shards.

pub mod insert;
