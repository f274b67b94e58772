//! [CSS 2.1 Appendix F Full property table](https://www.w3.org/TR/CSS2/propidx.html)
//!
//! The properties [`Style`](super::Style) understands. Names are looked up
//! through the `strum`-generated `FromStr`, case-insensitively.

use strum_macros::{Display, EnumString, IntoStaticStr};

/// A CSS2 property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum PropertyId {
    // § 9 Visual formatting model
    Display,
    Position,
    Float,
    Clear,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    // § 10 Visual formatting model details
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    LineHeight,
    // § 11 Visual effects
    Visibility,
    // § 8 Box model
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    BorderWidth,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    BorderStyle,
    BorderTopStyle,
    BorderRightStyle,
    BorderBottomStyle,
    BorderLeftStyle,
    BorderColor,
    BorderTopColor,
    BorderRightColor,
    BorderBottomColor,
    BorderLeftColor,
    Border,
    BorderTop,
    BorderRight,
    BorderBottom,
    BorderLeft,
    // § 14 Colors and backgrounds
    Color,
    BackgroundColor,
    Background,
    // § 15 Fonts
    FontFamily,
    FontSize,
    FontStyle,
    FontVariant,
    FontWeight,
    // § 16 Text
    TextAlign,
    TextIndent,
    WhiteSpace,
    // § 12 Generated content, automatic numbering, and lists
    ListStyleType,
}

impl PropertyId {
    /// The property name as written in a stylesheet.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether the property is inherited ("Inherited: yes" in its definition).
    #[must_use]
    pub const fn is_inherited(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::FontFamily
                | Self::FontSize
                | Self::FontStyle
                | Self::FontVariant
                | Self::FontWeight
                | Self::LineHeight
                | Self::TextAlign
                | Self::TextIndent
                | Self::WhiteSpace
                | Self::ListStyleType
                | Self::Visibility
        )
    }

    /// Whether the property sets several others at once.
    #[must_use]
    pub const fn is_shorthand(self) -> bool {
        matches!(
            self,
            Self::Margin
                | Self::Padding
                | Self::BorderWidth
                | Self::BorderStyle
                | Self::BorderColor
                | Self::Border
                | Self::BorderTop
                | Self::BorderRight
                | Self::BorderBottom
                | Self::BorderLeft
                | Self::Background
        )
    }
}
