//! Standard layout: header, pin body and footer stacked vertically, with one
//! row per socket.

use super::geometry::{Frame, Point};
use super::markup::{Align, ShapeBuilder, Text};
use super::ShapeResult;
use crate::error::ShapeError;
use crate::models::{Device, Socket, SocketRole};
use crate::sockets::SocketRegistry;

/// Vertical slot reserved per pin row.
pub const PIN_OFFSET: f64 = 20.0;
/// Height of the header band holding title, vendor and model.
pub const HEADER_HEIGHT: f64 = 50.0;
/// Height of the footer band holding IP and location.
pub const FOOTER_HEIGHT: f64 = 40.0;

/// Inset of a socket name from the body edge.
const NAME_INSET: f64 = 5.0;
/// Vertical offset of a socket name above its stem.
const NAME_RISE: f64 = 5.0;

/// Vertical metrics of a standard shape, derived from the socket counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    /// Rows available for pins (`max(inputs, outputs)`)
    pub max_pins: usize,
    /// Height of the pin body
    pub pins_height: f64,
    /// Overall shape height
    pub height: f64,
}

impl Bands {
    /// Computes the bands for a device.
    #[must_use]
    pub fn for_device(device: &Device) -> Self {
        let max_pins = device.max_pins();
        let pins_height = PIN_OFFSET * (max_pins as f64 + 1.0);
        Self {
            max_pins,
            pins_height,
            height: HEADER_HEIGHT + pins_height + FOOTER_HEIGHT,
        }
    }

    /// Top of the footer band.
    #[must_use]
    pub fn footer_top(&self) -> f64 {
        HEADER_HEIGHT + self.pins_height
    }

    /// Relative position of pin `index` within the pin body (0-1 exclusive).
    #[must_use]
    pub fn pin_fraction(&self, index: usize) -> f64 {
        (index as f64 + 1.0) / (self.max_pins as f64 + 1.0)
    }

    /// Absolute y of pin `index`.
    #[must_use]
    pub fn pin_y(&self, index: usize) -> f64 {
        HEADER_HEIGHT + self.pins_height * self.pin_fraction(index)
    }

    /// Normalised y of pin `index` for its connection point.
    #[must_use]
    pub fn constraint_y(&self, index: usize) -> f64 {
        self.pin_fraction(index) * (self.pins_height / self.height) + HEADER_HEIGHT / self.height
    }
}

/// Renders the standard layout.
///
/// Inputs and outputs are spaced independently with the same formula, so
/// rows only line up across sides at matching indices.
pub fn render(device: &Device, registry: &SocketRegistry) -> Result<ShapeResult, ShapeError> {
    let frame = Frame::new(device.options.body_width());
    let bands = Bands::for_device(device);
    let width = frame.width();
    let height = bands.height;
    let center_x = frame.center_x();

    let mut shape = ShapeBuilder::new();
    shape
        .outline_rect(frame.body_band(0.0, HEADER_HEIGHT))
        .outline_rect(frame.body_band(HEADER_HEIGHT, bands.footer_top()))
        .outline_rect(frame.body_band(bands.footer_top(), height));

    let (vendor, model) = if device.options.placeholders {
        ("%vendor%", "%model%")
    } else {
        (device.options.vendor.as_str(), device.options.model.as_str())
    };

    shape
        .font_style(1)
        .font_size(13)
        .text(
            Text::new("%title%", Point::new(center_x, 11.0))
                .align(Align::Center)
                .bold()
                .placeholders(),
        )
        .font_style(0)
        .font_size(8)
        .text(
            Text::new(vendor, Point::new(center_x, 30.0))
                .align(Align::Center)
                .placeholders(),
        )
        .text(
            Text::new(model, Point::new(center_x, 39.0))
                .align(Align::Center)
                .placeholders(),
        );

    for (index, input) in device.inputs.iter().enumerate() {
        add_pin(&mut shape, registry, &frame, &bands, SocketRole::Input, index, input)?;
    }
    for (index, output) in device.outputs.iter().enumerate() {
        add_pin(&mut shape, registry, &frame, &bands, SocketRole::Output, index, output)?;
    }

    shape
        .font_size(10)
        .text(
            Text::new("%ip%", Point::new(center_x, bands.footer_top() + 8.0))
                .align(Align::Center)
                .placeholders(),
        )
        .text(
            Text::new("%location%", Point::new(center_x, bands.footer_top() + 22.0))
                .align(Align::Center)
                .placeholders(),
        )
        .font_size(9);

    Ok(ShapeResult {
        markup: shape.finish(width, height),
        width,
        height,
    })
}

fn add_pin(
    shape: &mut ShapeBuilder,
    registry: &SocketRegistry,
    frame: &Frame,
    bands: &Bands,
    role: SocketRole,
    index: usize,
    socket: &Socket,
) -> Result<(), ShapeError> {
    let socket_type = registry.lookup(socket, role)?;
    let pin_y = bands.pin_y(index);
    let name_y = pin_y - NAME_RISE;

    match role {
        SocketRole::Input => {
            shape
                .constraint(0.0, bands.constraint_y(index))
                .font_size(9)
                .text(
                    Text::new(&socket.name, Point::new(frame.body_left() + NAME_INSET, name_y))
                        .align(Align::Left),
                )
                .font_size(6)
                .coloured_text(
                    socket_type.colour,
                    Text::new(&socket_type.label, frame.input_type_label(pin_y))
                        .align(Align::Right),
                )
                .stem(socket_type.colour, frame.input_stem(pin_y));
        }
        SocketRole::Output => {
            shape
                .constraint(1.0, bands.constraint_y(index))
                .font_size(9)
                .text(
                    Text::new(
                        &socket.name,
                        Point::new(frame.width() - frame.body_left() - NAME_INSET, name_y),
                    )
                    .align(Align::Right),
                )
                .font_size(6)
                .coloured_text(
                    socket_type.colour,
                    Text::new(&socket_type.label, frame.output_type_label(pin_y))
                        .align(Align::Left),
                )
                .stem(socket_type.colour, frame.output_stem(pin_y));
        }
    }
    Ok(())
}
