//! CSS Computed Style
//!
//! [§ 6.1.2 Computed values](https://www.w3.org/TR/CSS2/cascade.html#computed-value)
//! "Specified values are resolved to computed values during the cascade"

use serde::Serialize;
use tracing::debug;

use cascadia_common::warning::warn_once;

use super::properties::PropertyId;
use super::values::{
    self, BorderStyle, Clear, Color, DEFAULT_FONT_SIZE_PX, DisplayType, Float, FontStyle,
    FontVariant, Length, LengthOrAuto, LengthOrNone, LineHeight, ListStyleType,
    MEDIUM_BORDER_WIDTH, Position, Side, Sides, TextAlign, Visibility, WhiteSpace,
};
use crate::color::Rgb;
use crate::stylesheet::Declaration;
use crate::term::Term;

/// Computed styles for an element.
///
/// Every property holds a value: [`Style::default`] is the CSS2 initial
/// value of each property, and [`Style::inherit_from`] starts from a
/// parent's inherited properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    /// [§ 9.2.4 'display'](https://www.w3.org/TR/CSS2/visuren.html#propdef-display)
    pub display: DisplayType,
    /// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#propdef-position)
    pub position: Position,
    /// [§ 9.5.1 'float'](https://www.w3.org/TR/CSS2/visuren.html#propdef-float)
    pub float: Float,
    /// [§ 9.5.2 'clear'](https://www.w3.org/TR/CSS2/visuren.html#propdef-clear)
    pub clear: Clear,
    /// [§ 9.3.2 Box offsets](https://www.w3.org/TR/CSS2/visuren.html#position-props):
    /// 'top', 'right', 'bottom', 'left'.
    pub offsets: Sides<LengthOrAuto>,
    /// [§ 9.9.1 'z-index'](https://www.w3.org/TR/CSS2/visuren.html#propdef-z-index);
    /// `None` is `auto`.
    pub z_index: Option<i32>,

    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#propdef-width)
    pub width: LengthOrAuto,
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#propdef-height)
    pub height: LengthOrAuto,
    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#propdef-min-width)
    pub min_width: Length,
    /// [§ 10.4 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#propdef-max-width)
    pub max_width: LengthOrNone,
    /// [§ 10.7 'min-height'](https://www.w3.org/TR/CSS2/visudet.html#propdef-min-height)
    pub min_height: Length,
    /// [§ 10.7 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#propdef-max-height)
    pub max_height: LengthOrNone,
    /// [§ 10.8 'line-height'](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
    pub line_height: LineHeight,

    /// [§ 11.2 'visibility'](https://www.w3.org/TR/CSS2/visufx.html#propdef-visibility)
    pub visibility: Visibility,

    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    pub margin: Sides<LengthOrAuto>,
    /// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    pub padding: Sides<Length>,
    /// [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties), in pixels.
    pub border_width: Sides<f64>,
    /// [§ 8.5.3 Border style](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
    pub border_style: Sides<BorderStyle>,
    /// [§ 8.5.2 Border color](https://www.w3.org/TR/CSS2/box.html#border-color-properties)
    pub border_color: Sides<Color>,

    /// [§ 14.1 'color'](https://www.w3.org/TR/CSS2/colors.html#propdef-color)
    pub color: Rgb,
    /// [§ 14.2.1 'background-color'](https://www.w3.org/TR/CSS2/colors.html#propdef-background-color)
    pub background_color: Color,

    /// [§ 15.3 'font-family'](https://www.w3.org/TR/CSS2/fonts.html#propdef-font-family)
    pub font_family: Vec<String>,
    /// [§ 15.7 'font-size'](https://www.w3.org/TR/CSS2/fonts.html#propdef-font-size), in pixels.
    pub font_size: f64,
    /// [§ 15.4 'font-style'](https://www.w3.org/TR/CSS2/fonts.html#propdef-font-style)
    pub font_style: FontStyle,
    /// [§ 15.5 'font-variant'](https://www.w3.org/TR/CSS2/fonts.html#propdef-font-variant)
    pub font_variant: FontVariant,
    /// [§ 15.6 'font-weight'](https://www.w3.org/TR/CSS2/fonts.html#propdef-font-weight)
    pub font_weight: u16,

    /// [§ 16.2 'text-align'](https://www.w3.org/TR/CSS2/text.html#propdef-text-align)
    pub text_align: TextAlign,
    /// [§ 16.1 'text-indent'](https://www.w3.org/TR/CSS2/text.html#propdef-text-indent)
    pub text_indent: Length,
    /// [§ 16.6 'white-space'](https://www.w3.org/TR/CSS2/text.html#propdef-white-space)
    pub white_space: WhiteSpace,
    /// [§ 12.5.1 'list-style-type'](https://www.w3.org/TR/CSS2/generate.html#propdef-list-style-type)
    pub list_style_type: ListStyleType,
}

impl Default for Style {
    /// The initial value of every property.
    fn default() -> Self {
        Self {
            display: DisplayType::Inline,
            position: Position::Static,
            float: Float::None,
            clear: Clear::None,
            offsets: Sides::all(LengthOrAuto::Auto),
            z_index: None,
            width: LengthOrAuto::Auto,
            height: LengthOrAuto::Auto,
            min_width: Length::ZERO,
            max_width: LengthOrNone::None,
            min_height: Length::ZERO,
            max_height: LengthOrNone::None,
            line_height: LineHeight::Normal,
            visibility: Visibility::Visible,
            margin: Sides::all(LengthOrAuto::Length(Length::ZERO)),
            padding: Sides::all(Length::ZERO),
            border_width: Sides::all(MEDIUM_BORDER_WIDTH),
            border_style: Sides::all(BorderStyle::None),
            border_color: Sides::all(Color::CurrentColor),
            // "Initial: depends on user agent"
            color: Rgb::BLACK,
            background_color: Color::Transparent,
            font_family: vec!["serif".to_string()],
            font_size: DEFAULT_FONT_SIZE_PX,
            font_style: FontStyle::Normal,
            font_variant: FontVariant::Normal,
            font_weight: 400,
            text_align: TextAlign::Left,
            text_indent: Length::ZERO,
            white_space: WhiteSpace::Normal,
            list_style_type: ListStyleType::Disc,
        }
    }
}

impl Style {
    /// [§ 6.2 Inheritance](https://www.w3.org/TR/CSS2/cascade.html#inheritance)
    /// "some values are inherited by the children of an element in the
    /// document tree"
    ///
    /// Initial values for every property, except inherited properties,
    /// which take the parent's computed value.
    #[must_use]
    pub fn inherit_from(parent: &Self) -> Self {
        Self {
            color: parent.color,
            font_family: parent.font_family.clone(),
            font_size: parent.font_size,
            font_style: parent.font_style,
            font_variant: parent.font_variant,
            font_weight: parent.font_weight,
            line_height: parent.line_height,
            text_align: parent.text_align,
            text_indent: parent.text_indent,
            white_space: parent.white_space,
            list_style_type: parent.list_style_type,
            visibility: parent.visibility,
            ..Self::default()
        }
    }

    /// Apply one declaration.
    ///
    /// [§ 6.2.1 The 'inherit' value](https://www.w3.org/TR/CSS2/cascade.html#value-def-inherit)
    /// "the property takes the same specified value as the property for the
    /// element's parent". `parent` is also the reference for relative font
    /// sizes.
    ///
    /// Returns `false` when the property is unknown or the value invalid;
    /// "User agents must ignore a declaration with an illegal value."
    pub fn apply_declaration(&mut self, declaration: &Declaration, parent: &Self) -> bool {
        let Ok(property) = declaration.property.parse::<PropertyId>() else {
            let _ = warn_once(
                "CSS",
                &format!("unsupported property '{}'", declaration.property),
            );
            return false;
        };
        if declaration.is_inherit() {
            self.inherit_property(property, parent);
            return true;
        }
        let applied = self.apply_value(property, &declaration.value, parent).is_some();
        if !applied {
            debug!(%declaration, "ignoring declaration with an invalid value");
        }
        applied
    }

    /// Fix up values that depend on other properties once every declaration
    /// has been applied.
    ///
    /// - [§ 8.5.3](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
    ///   a border with style `none` or `hidden` has a computed width of 0.
    /// - [§ 8.5.2](https://www.w3.org/TR/CSS2/box.html#border-color-properties)
    ///   an unspecified border color is the element's `color`.
    /// - [§ 9.7](https://www.w3.org/TR/CSS2/visuren.html#dis-pos-flo)
    ///   absolutely positioned boxes do not float, and positioned or floated
    ///   boxes are block-level.
    pub fn finalize(&mut self) {
        for side in Side::ALL {
            if self.border_style.get(side).has_no_width() {
                *self.border_width.get_mut(side) = 0.0;
            }
            let border_color = self.border_color.get_mut(side);
            if *border_color == Color::CurrentColor {
                *border_color = Color::Rgb(self.color);
            }
        }

        if self.display == DisplayType::None {
            return;
        }
        if matches!(self.position, Position::Absolute | Position::Fixed) {
            self.float = Float::None;
            self.display = self.display.blockified();
        } else if self.float != Float::None {
            self.display = self.display.blockified();
        }
    }

    /// The used line height in pixels.
    #[must_use]
    pub fn line_height_px(&self) -> f64 {
        match self.line_height {
            // A "reasonable value" between 1.0 and 1.2.
            LineHeight::Normal => self.font_size * 1.2,
            LineHeight::Number(factor) => self.font_size * factor,
            LineHeight::Px(px) => px,
        }
    }

    fn inherit_property(&mut self, property: PropertyId, parent: &Self) {
        match property {
            PropertyId::Display => self.display = parent.display,
            PropertyId::Position => self.position = parent.position,
            PropertyId::Float => self.float = parent.float,
            PropertyId::Clear => self.clear = parent.clear,
            PropertyId::Top => self.offsets.top = parent.offsets.top,
            PropertyId::Right => self.offsets.right = parent.offsets.right,
            PropertyId::Bottom => self.offsets.bottom = parent.offsets.bottom,
            PropertyId::Left => self.offsets.left = parent.offsets.left,
            PropertyId::ZIndex => self.z_index = parent.z_index,
            PropertyId::Width => self.width = parent.width,
            PropertyId::Height => self.height = parent.height,
            PropertyId::MinWidth => self.min_width = parent.min_width,
            PropertyId::MaxWidth => self.max_width = parent.max_width,
            PropertyId::MinHeight => self.min_height = parent.min_height,
            PropertyId::MaxHeight => self.max_height = parent.max_height,
            PropertyId::LineHeight => self.line_height = parent.line_height,
            PropertyId::Visibility => self.visibility = parent.visibility,
            PropertyId::Margin => self.margin = parent.margin,
            PropertyId::MarginTop => self.margin.top = parent.margin.top,
            PropertyId::MarginRight => self.margin.right = parent.margin.right,
            PropertyId::MarginBottom => self.margin.bottom = parent.margin.bottom,
            PropertyId::MarginLeft => self.margin.left = parent.margin.left,
            PropertyId::Padding => self.padding = parent.padding,
            PropertyId::PaddingTop => self.padding.top = parent.padding.top,
            PropertyId::PaddingRight => self.padding.right = parent.padding.right,
            PropertyId::PaddingBottom => self.padding.bottom = parent.padding.bottom,
            PropertyId::PaddingLeft => self.padding.left = parent.padding.left,
            PropertyId::BorderWidth => self.border_width = parent.border_width,
            PropertyId::BorderStyle => self.border_style = parent.border_style,
            PropertyId::BorderColor => self.border_color = parent.border_color,
            PropertyId::Border => {
                self.border_width = parent.border_width;
                self.border_style = parent.border_style;
                self.border_color = parent.border_color;
            }
            PropertyId::BorderTopWidth
            | PropertyId::BorderRightWidth
            | PropertyId::BorderBottomWidth
            | PropertyId::BorderLeftWidth
            | PropertyId::BorderTopStyle
            | PropertyId::BorderRightStyle
            | PropertyId::BorderBottomStyle
            | PropertyId::BorderLeftStyle
            | PropertyId::BorderTopColor
            | PropertyId::BorderRightColor
            | PropertyId::BorderBottomColor
            | PropertyId::BorderLeftColor
            | PropertyId::BorderTop
            | PropertyId::BorderRight
            | PropertyId::BorderBottom
            | PropertyId::BorderLeft => {
                let (side, part) = border_longhand(property);
                if matches!(part, BorderPart::Width | BorderPart::All) {
                    *self.border_width.get_mut(side) = *parent.border_width.get(side);
                }
                if matches!(part, BorderPart::Style | BorderPart::All) {
                    *self.border_style.get_mut(side) = *parent.border_style.get(side);
                }
                if matches!(part, BorderPart::Color | BorderPart::All) {
                    *self.border_color.get_mut(side) = *parent.border_color.get(side);
                }
            }
            PropertyId::Color => self.color = parent.color,
            PropertyId::BackgroundColor | PropertyId::Background => {
                self.background_color = parent.background_color;
            }
            PropertyId::FontFamily => self.font_family.clone_from(&parent.font_family),
            PropertyId::FontSize => self.font_size = parent.font_size,
            PropertyId::FontStyle => self.font_style = parent.font_style,
            PropertyId::FontVariant => self.font_variant = parent.font_variant,
            PropertyId::FontWeight => self.font_weight = parent.font_weight,
            PropertyId::TextAlign => self.text_align = parent.text_align,
            PropertyId::TextIndent => self.text_indent = parent.text_indent,
            PropertyId::WhiteSpace => self.white_space = parent.white_space,
            PropertyId::ListStyleType => self.list_style_type = parent.list_style_type,
        }
    }

    fn apply_value(&mut self, property: PropertyId, value: &[Term], parent: &Self) -> Option<()> {
        // Lengths in em are relative to this element's font size, which the
        // resolver applies first; font-size itself is relative to the parent.
        let em = self.font_size;
        match property {
            PropertyId::Display => self.display = values::keyword(values::single(value)?)?,
            PropertyId::Position => self.position = values::keyword(values::single(value)?)?,
            PropertyId::Float => self.float = values::keyword(values::single(value)?)?,
            PropertyId::Clear => self.clear = values::keyword(values::single(value)?)?,
            PropertyId::Visibility => {
                self.visibility = values::keyword(values::single(value)?)?;
            }
            PropertyId::Top | PropertyId::Right | PropertyId::Bottom | PropertyId::Left => {
                let side = match property {
                    PropertyId::Top => Side::Top,
                    PropertyId::Right => Side::Right,
                    PropertyId::Bottom => Side::Bottom,
                    _ => Side::Left,
                };
                *self.offsets.get_mut(side) = values::length_or_auto(values::single(value)?, em)?;
            }
            PropertyId::ZIndex => self.z_index = values::z_index(values::single(value)?)?,

            PropertyId::Width => {
                self.width = non_negative_or_auto(values::single(value)?, em)?;
            }
            PropertyId::Height => {
                self.height = non_negative_or_auto(values::single(value)?, em)?;
            }
            PropertyId::MinWidth => {
                self.min_width = values::non_negative_length(values::single(value)?, em)?;
            }
            PropertyId::MinHeight => {
                self.min_height = values::non_negative_length(values::single(value)?, em)?;
            }
            PropertyId::MaxWidth => {
                self.max_width = values::length_or_none(values::single(value)?, em)?;
            }
            PropertyId::MaxHeight => {
                self.max_height = values::length_or_none(values::single(value)?, em)?;
            }
            PropertyId::LineHeight => {
                self.line_height = values::line_height(values::single(value)?, em)?;
            }

            // [§ 8.3](https://www.w3.org/TR/CSS2/box.html#propdef-margin)
            // "Value: <margin-width>{1,4} | inherit"
            PropertyId::Margin => {
                let widths = value
                    .iter()
                    .map(|term| values::length_or_auto(term, em))
                    .collect::<Option<Vec<_>>>()?;
                self.margin = Sides::from_list(&widths)?;
            }
            PropertyId::MarginTop
            | PropertyId::MarginRight
            | PropertyId::MarginBottom
            | PropertyId::MarginLeft => {
                let side = box_side(property);
                *self.margin.get_mut(side) = values::length_or_auto(values::single(value)?, em)?;
            }
            // [§ 8.4](https://www.w3.org/TR/CSS2/box.html#propdef-padding)
            // "Values for padding values cannot be negative."
            PropertyId::Padding => {
                let widths = value
                    .iter()
                    .map(|term| values::non_negative_length(term, em))
                    .collect::<Option<Vec<_>>>()?;
                self.padding = Sides::from_list(&widths)?;
            }
            PropertyId::PaddingTop
            | PropertyId::PaddingRight
            | PropertyId::PaddingBottom
            | PropertyId::PaddingLeft => {
                let side = box_side(property);
                *self.padding.get_mut(side) =
                    values::non_negative_length(values::single(value)?, em)?;
            }

            PropertyId::BorderWidth => {
                let widths = value
                    .iter()
                    .map(|term| values::border_width(term, em))
                    .collect::<Option<Vec<_>>>()?;
                self.border_width = Sides::from_list(&widths)?;
            }
            PropertyId::BorderStyle => {
                let styles = value
                    .iter()
                    .map(values::keyword)
                    .collect::<Option<Vec<BorderStyle>>>()?;
                self.border_style = Sides::from_list(&styles)?;
            }
            PropertyId::BorderColor => {
                let colors = value
                    .iter()
                    .map(values::color)
                    .collect::<Option<Vec<_>>>()?;
                self.border_color = Sides::from_list(&colors)?;
            }
            // [§ 8.5.4](https://www.w3.org/TR/CSS2/box.html#propdef-border)
            // "The 'border' property is a shorthand property for setting the
            // same width, color, and style for all four borders of a box."
            PropertyId::Border => {
                let (width, style, color) = border_shorthand(value, em)?;
                self.border_width = Sides::all(width);
                self.border_style = Sides::all(style);
                self.border_color = Sides::all(color);
            }
            PropertyId::BorderTopWidth
            | PropertyId::BorderRightWidth
            | PropertyId::BorderBottomWidth
            | PropertyId::BorderLeftWidth
            | PropertyId::BorderTopStyle
            | PropertyId::BorderRightStyle
            | PropertyId::BorderBottomStyle
            | PropertyId::BorderLeftStyle
            | PropertyId::BorderTopColor
            | PropertyId::BorderRightColor
            | PropertyId::BorderBottomColor
            | PropertyId::BorderLeftColor
            | PropertyId::BorderTop
            | PropertyId::BorderRight
            | PropertyId::BorderBottom
            | PropertyId::BorderLeft => {
                let (side, part) = border_longhand(property);
                match part {
                    BorderPart::Width => {
                        *self.border_width.get_mut(side) =
                            values::border_width(values::single(value)?, em)?;
                    }
                    BorderPart::Style => {
                        *self.border_style.get_mut(side) =
                            values::keyword(values::single(value)?)?;
                    }
                    BorderPart::Color => {
                        *self.border_color.get_mut(side) = values::color(values::single(value)?)?;
                    }
                    BorderPart::All => {
                        let (width, style, color) = border_shorthand(value, em)?;
                        *self.border_width.get_mut(side) = width;
                        *self.border_style.get_mut(side) = style;
                        *self.border_color.get_mut(side) = color;
                    }
                }
            }

            // [§ 14.1](https://www.w3.org/TR/CSS2/colors.html#propdef-color)
            PropertyId::Color => match values::color(values::single(value)?)? {
                Color::Rgb(rgb) => self.color = rgb,
                Color::Transparent | Color::CurrentColor => return None,
            },
            PropertyId::BackgroundColor => {
                self.background_color = values::color(values::single(value)?)?;
            }
            // Only the color component of the 'background' shorthand is
            // kept; "The 'background' property is a shorthand property for
            // setting the individual background properties".
            PropertyId::Background => {
                self.background_color = value
                    .iter()
                    .find_map(values::color)
                    .unwrap_or(Color::Transparent);
            }

            PropertyId::FontFamily => self.font_family = values::font_family(value)?,
            PropertyId::FontSize => {
                self.font_size = values::font_size(values::single(value)?, parent.font_size)?;
            }
            PropertyId::FontStyle => self.font_style = values::keyword(values::single(value)?)?,
            PropertyId::FontVariant => {
                self.font_variant = values::keyword(values::single(value)?)?;
            }
            PropertyId::FontWeight => {
                self.font_weight = values::font_weight(values::single(value)?, parent.font_weight)?;
            }

            PropertyId::TextAlign => self.text_align = values::keyword(values::single(value)?)?,
            PropertyId::TextIndent => {
                self.text_indent = values::length(values::single(value)?, em)?;
            }
            PropertyId::WhiteSpace => self.white_space = values::keyword(values::single(value)?)?,
            PropertyId::ListStyleType => {
                self.list_style_type = values::keyword(values::single(value)?)?;
            }
        }
        Some(())
    }
}

/// "Negative values for 'width' are illegal."
fn non_negative_or_auto(term: &Term, em: f64) -> Option<LengthOrAuto> {
    if term.is_ident("auto") {
        return Some(LengthOrAuto::Auto);
    }
    values::non_negative_length(term, em).map(LengthOrAuto::Length)
}

fn box_side(property: PropertyId) -> Side {
    match property {
        PropertyId::MarginTop | PropertyId::PaddingTop => Side::Top,
        PropertyId::MarginRight | PropertyId::PaddingRight => Side::Right,
        PropertyId::MarginBottom | PropertyId::PaddingBottom => Side::Bottom,
        _ => Side::Left,
    }
}

/// Which part of a border a property sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BorderPart {
    Width,
    Style,
    Color,
    All,
}

fn border_longhand(property: PropertyId) -> (Side, BorderPart) {
    match property {
        PropertyId::BorderTopWidth => (Side::Top, BorderPart::Width),
        PropertyId::BorderRightWidth => (Side::Right, BorderPart::Width),
        PropertyId::BorderBottomWidth => (Side::Bottom, BorderPart::Width),
        PropertyId::BorderLeftWidth => (Side::Left, BorderPart::Width),
        PropertyId::BorderTopStyle => (Side::Top, BorderPart::Style),
        PropertyId::BorderRightStyle => (Side::Right, BorderPart::Style),
        PropertyId::BorderBottomStyle => (Side::Bottom, BorderPart::Style),
        PropertyId::BorderLeftStyle => (Side::Left, BorderPart::Style),
        PropertyId::BorderTopColor => (Side::Top, BorderPart::Color),
        PropertyId::BorderRightColor => (Side::Right, BorderPart::Color),
        PropertyId::BorderBottomColor => (Side::Bottom, BorderPart::Color),
        PropertyId::BorderLeftColor => (Side::Left, BorderPart::Color),
        PropertyId::BorderRight => (Side::Right, BorderPart::All),
        PropertyId::BorderBottom => (Side::Bottom, BorderPart::All),
        PropertyId::BorderLeft => (Side::Left, BorderPart::All),
        _ => (Side::Top, BorderPart::All),
    }
}

/// [§ 8.5.4](https://www.w3.org/TR/CSS2/box.html#border-shorthand-properties)
/// "Value: [ <border-width> || <border-style> || 'border-top-color' ] | inherit"
///
/// Each part may appear once, in any order; omitted parts take their
/// initial values.
fn border_shorthand(value: &[Term], em: f64) -> Option<(f64, BorderStyle, Color)> {
    let (mut width, mut style, mut color) = (None, None, None);
    for term in value {
        if term.separator.is_some() {
            return None;
        }
        if width.is_none()
            && let Some(w) = values::border_width(term, em)
        {
            width = Some(w);
        } else if style.is_none()
            && let Some(s) = values::keyword::<BorderStyle>(term)
        {
            style = Some(s);
        } else if color.is_none()
            && let Some(c) = values::color(term)
        {
            color = Some(c);
        } else {
            return None;
        }
    }
    Some((
        width.unwrap_or(MEDIUM_BORDER_WIDTH),
        style.unwrap_or_default(),
        color.unwrap_or(Color::CurrentColor),
    ))
}
