//! Compact layout: a single 60-unit-high box with at most one input and one
//! output, both centred vertically.

use super::geometry::{Frame, Point};
use super::markup::{Align, ShapeBuilder, Text};
use super::ShapeResult;
use crate::error::ShapeError;
use crate::models::{Device, SocketRole};
use crate::sockets::SocketRegistry;

/// Fixed height of a compact shape.
pub const HEIGHT: f64 = 60.0;

const TITLE_Y: f64 = 11.0;
const SUBTITLE_Y: f64 = 30.0;
const LOCATION_Y: f64 = 45.0;

/// Renders the compact layout.
///
/// Only the first input and the first output are drawn; any further sockets
/// are ignored by this layout.
pub fn render(device: &Device, registry: &SocketRegistry) -> Result<ShapeResult, ShapeError> {
    let frame = Frame::new(device.options.body_width());
    let width = frame.width();
    let height = HEIGHT;
    let center_x = frame.center_x();
    let pin_y = height / 2.0;

    let mut shape = ShapeBuilder::new();
    shape.outline_rect(frame.body_band(0.0, height));

    let subtitle = if device.options.placeholders {
        "%model%".to_string()
    } else {
        format!("{} {}", device.options.vendor, device.options.model)
    };

    shape
        .font_style(1)
        .font_size(13)
        .text(
            Text::new("%title%", Point::new(center_x, TITLE_Y))
                .align(Align::Center)
                .bold()
                .placeholders(),
        )
        .font_style(0)
        .font_size(8)
        .text(
            Text::new(subtitle, Point::new(center_x, SUBTITLE_Y))
                .align(Align::Center)
                .placeholders(),
        )
        .font_size(10)
        .text(
            Text::new("%location%", Point::new(center_x, LOCATION_Y))
                .align(Align::Center)
                .placeholders(),
        )
        .font_size(9);

    if let Some(input) = device.inputs.first() {
        let socket_type = registry.lookup(input, SocketRole::Input)?;
        shape
            .constraint(0.0, 0.5)
            .font_size(6)
            .coloured_text(
                socket_type.colour,
                Text::new(&socket_type.label, frame.input_type_label(pin_y)).align(Align::Right),
            )
            .stem(socket_type.colour, frame.input_stem(pin_y));
    }

    if let Some(output) = device.outputs.first() {
        let socket_type = registry.lookup(output, SocketRole::Output)?;
        shape
            .constraint(1.0, 0.5)
            .font_size(6)
            .coloured_text(
                socket_type.colour,
                Text::new(&socket_type.label, frame.output_type_label(pin_y)).align(Align::Left),
            )
            .stem(socket_type.colour, frame.output_stem(pin_y));
    }

    Ok(ShapeResult {
        markup: shape.finish(width, height),
        width,
        height,
    })
}
