/// Loading spinner shown in place of the feed
use iced::widget::canvas::{self, path, Path, Stroke};
use iced::widget::{canvas as canvas_widget, container};
use iced::{mouse, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

use super::theme;

/// Diameter of the spinner in logical pixels
const SIZE: f32 = 48.0;
const STROKE_WIDTH: f32 = 4.0;
/// Rotation per animation tick (radians)
const STEP: f32 = 0.12;
/// Length of the moving arc
const SWEEP: f32 = PI * 0.6;

/// Rotating arc; the angle advances on every tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spinner {
    angle: f32,
}

impl Spinner {
    pub fn advance(&mut self) {
        self.angle = (self.angle + STEP) % TAU;
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - STROKE_WIDTH;

        // Faint full ring, then the bright moving arc on top
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_color(theme::PRIMARY_60)
                .with_width(STROKE_WIDTH),
        );

        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(self.angle),
                end_angle: Radians(self.angle + SWEEP),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_color(theme::PRIMARY_50)
                .with_width(STROKE_WIDTH),
        );

        vec![frame.into_geometry()]
    }
}

pub fn view<'a, Message: 'a>(spinner: Spinner) -> Element<'a, Message> {
    container(
        canvas_widget(spinner)
            .width(Length::Fixed(SIZE))
            .height(Length::Fixed(SIZE)),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_wraps_around() {
        let mut spinner = Spinner::default();
        for _ in 0..200 {
            spinner.advance();
            assert!(spinner.angle >= 0.0 && spinner.angle < TAU);
        }
        assert_ne!(spinner, Spinner::default());
    }
}
