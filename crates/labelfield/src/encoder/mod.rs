//! # Label Encoding

mod encoder_options;
mod label_encoder;
mod label_encoding;

#[doc(inline)]
pub use encoder_options::*;
#[doc(inline)]
pub use label_encoder::*;
#[doc(inline)]
pub use label_encoding::*;
