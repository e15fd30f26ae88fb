mod rect;
mod wrap;

pub use rect::Rect;
pub use wrap::WrapLayout;
