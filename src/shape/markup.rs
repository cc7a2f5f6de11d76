//! Stencil markup accumulator.
//!
//! Layouts push fragments into four ordered runs (connections, outline,
//! text, stems) and [`ShapeBuilder::finish`] joins them once, so the
//! emission order of the document never depends on the order in which a
//! layout computes things.

use std::fmt::Write;

use super::geometry::{fmt_num, Point, Rect};
use crate::models::RgbColor;

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Text starts at the anchor
    Left,
    /// Text is centred on the anchor
    Center,
    /// Text ends at the anchor
    Right,
}

impl Align {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// A single `<text>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    at: Point,
    align: Align,
    bold: bool,
    placeholders: bool,
}

impl Text {
    /// Creates a left-aligned text element anchored at `at`.
    pub fn new(content: impl Into<String>, at: Point) -> Self {
        Self {
            content: content.into(),
            at,
            align: Align::Left,
            bold: false,
            placeholders: false,
        }
    }

    /// Sets the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Marks the element bold via its own `fontstyle` attribute.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Lets the editor substitute `%name%` tokens from shape properties.
    pub fn placeholders(mut self) -> Self {
        self.placeholders = true;
        self
    }

    fn render(&self) -> String {
        let mut out = format!(
            r#"<text str="{}" x="{}" y="{}" align="{}" valign="top" align-shape="1""#,
            escape_attr(&self.content),
            fmt_num(self.at.x),
            fmt_num(self.at.y),
            self.align.as_str(),
        );
        if self.bold {
            out.push_str(r#" fontstyle="1""#);
        }
        if self.placeholders {
            out.push_str(r#" placeholders="1""#);
        }
        out.push_str(" />");
        out
    }
}

/// Ordered fragment accumulator for one shape document.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    connections: Vec<String>,
    outline: Vec<String>,
    text: Vec<String>,
    stems: Vec<String>,
}

impl ShapeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a connection point in normalised (0-1) shape coordinates.
    pub fn constraint(&mut self, x: f64, y: f64) -> &mut Self {
        self.connections.push(format!(
            r#"<constraint x="{}" y="{}" />"#,
            fmt_num(x),
            fmt_num(y)
        ));
        self
    }

    /// Adds a closed rectangle to the background outline path.
    pub fn outline_rect(&mut self, rect: Rect) -> &mut Self {
        let [first, rest @ ..] = rect.corners();
        self.outline.push(point_tag("move", first));
        for corner in rest {
            self.outline.push(point_tag("line", corner));
        }
        self.outline.push("<close />".to_string());
        self
    }

    /// Sets the font style for following text (0 regular, 1 bold).
    pub fn font_style(&mut self, style: u8) -> &mut Self {
        self.text.push(format!(r#"<fontstyle style="{style}" />"#));
        self
    }

    /// Sets the font size for following text.
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.text.push(format!(r#"<fontsize size="{size}" />"#));
        self
    }

    /// Appends a text element in the current font settings.
    pub fn text(&mut self, text: Text) -> &mut Self {
        self.text.push(text.render());
        self
    }

    /// Appends a text element in `colour`, restoring black right after it.
    pub fn coloured_text(&mut self, colour: RgbColor, text: Text) -> &mut Self {
        self.text.push(colour_tag("fontcolor", colour));
        self.text.push(text.render());
        self.text.push(colour_tag("fontcolor", RgbColor::BLACK));
        self
    }

    /// Draws a straight stem in `colour`, restoring a black stroke right after it.
    pub fn stem(&mut self, colour: RgbColor, (from, to): (Point, Point)) -> &mut Self {
        self.stems.push(colour_tag("strokecolor", colour));
        self.stems.push("<path>".to_string());
        self.stems.push(point_tag("move", from));
        self.stems.push(point_tag("line", to));
        self.stems.push("</path>".to_string());
        self.stems.push("<stroke />".to_string());
        self.stems.push(colour_tag("strokecolor", RgbColor::BLACK));
        self
    }

    /// Number of connection points declared so far.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Joins all fragments into the final document.
    ///
    /// The text run and the stem run are concatenated without a separator.
    #[must_use]
    pub fn finish(&self, width: f64, height: f64) -> String {
        let mut shape = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            shape,
            "\n<shape w=\"{}\" h=\"{}\" aspect=\"relative\" strokewidth=\"inherit\">\n    <connections>\n",
            fmt_num(width),
            fmt_num(height)
        );
        shape.push_str(&self.connections.join("\n"));
        shape.push_str("\n    </connections>\n    <background>\n        <path>\n");
        shape.push_str(&self.outline.join("\n"));
        shape.push_str("\n        </path>\n    </background>\n    <foreground>\n        <fillstroke/>\n");
        shape.push_str(&self.text.join("\n"));
        shape.push_str(&self.stems.join("\n"));
        shape.push_str("\n    </foreground>\n</shape>\n");
        shape
    }
}

fn point_tag(tag: &str, point: Point) -> String {
    format!(
        r#"<{tag} x="{}" y="{}" />"#,
        fmt_num(point.x),
        fmt_num(point.y)
    )
}

fn colour_tag(tag: &str, colour: RgbColor) -> String {
    format!(r#"<{tag} color="{}" />"#, colour.to_hex())
}

/// Escapes a string for use inside a double-quoted XML attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
