//! CSS Computed Style representation and value parsing
//!
//! This module implements CSS2 value types and computed style representation per:
//! - [CSS 2.1 § 4.3 Values](https://www.w3.org/TR/CSS2/syndata.html#values)
//! - [CSS 2.1 § 6.1 Specified, computed, and actual values](https://www.w3.org/TR/CSS2/cascade.html#value-stages)
//! - [CSS 2.1 § 8 Box model](https://www.w3.org/TR/CSS2/box.html)

pub mod computed;
mod properties;
mod values;

pub use computed::Style;
pub use properties::PropertyId;
pub use values::{
    BorderStyle, Clear, Color, DEFAULT_FONT_SIZE_PX, DisplayType, Float, FontStyle, FontVariant,
    Length, LengthOrAuto, LengthOrNone, LineHeight, ListStyleType, Position, Side, Sides,
    TextAlign, Visibility, WhiteSpace,
};
