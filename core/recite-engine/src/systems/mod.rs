pub mod promote;
pub mod reveal;
