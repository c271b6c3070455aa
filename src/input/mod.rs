use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::geometry::Point;

mod router;
pub use router::route_event;

/// Pointer events in canvas pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A button was pressed over the canvas
    PointerDown { pos: Point, button: PointerButton },
    /// The pointer moved while at least one button was held.
    ///
    /// Moves keep being reported outside the canvas during a drag, so the
    /// stroke can run off the edge and be clipped there.
    PointerMove {
        pos: Point,
        held_buttons: Vec<PointerButton>,
    },
    /// A button was released anywhere
    PointerUp { button: PointerButton },
}

/// Keyboard shortcuts, all on Ctrl (Cmd on macOS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Save,
    ChooseColor,
    ToggleEraser,
    Clear,
    DecreaseBrush,
    IncreaseBrush,
}

impl Shortcut {
    pub const ALL: [Shortcut; 6] = [
        Shortcut::Save,
        Shortcut::ChooseColor,
        Shortcut::ToggleEraser,
        Shortcut::Clear,
        Shortcut::DecreaseBrush,
        Shortcut::IncreaseBrush,
    ];

    pub fn key(self) -> Key {
        match self {
            Shortcut::Save => Key::S,
            Shortcut::ChooseColor => Key::C,
            Shortcut::ToggleEraser => Key::E,
            Shortcut::Clear => Key::N,
            Shortcut::DecreaseBrush => Key::OpenBracket,
            Shortcut::IncreaseBrush => Key::CloseBracket,
        }
    }

    /// Hint shown next to the matching button
    pub fn hint(self) -> &'static str {
        match self {
            Shortcut::Save => "Ctrl+S",
            Shortcut::ChooseColor => "Ctrl+C",
            Shortcut::ToggleEraser => "Ctrl+E",
            Shortcut::Clear => "Ctrl+N",
            Shortcut::DecreaseBrush => "Ctrl+[",
            Shortcut::IncreaseBrush => "Ctrl+]",
        }
    }
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Handles converting raw egui input into canvas events
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update where the canvas is on screen; its top-left corner is pixel (0, 0)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Screen position to canvas pixel
    pub fn to_canvas(&self, pos: Pos2) -> Option<Point> {
        let rect = self.canvas_rect?;
        Some(Point::from_pos(pos - rect.min.to_vec2()))
    }

    fn is_over_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(pos))
    }

    /// Process raw egui pointer input for this frame
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.canvas_rect.is_none() {
            return events;
        }

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();

            for button in BUTTONS {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = hover.filter(|p| self.is_over_canvas(*p)) {
                        if let Some(pos) = self.to_canvas(pos) {
                            events.push(InputEvent::PointerDown { pos, button });
                        }
                    }
                }
            }

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos {
                    let held_buttons: Vec<PointerButton> = BUTTONS
                        .into_iter()
                        .filter(|b| input.pointer.button_down(*b))
                        .collect();
                    if !held_buttons.is_empty() {
                        if let Some(pos) = self.to_canvas(pos) {
                            // A press reported together with the motion that led to it
                            // is not a move away from the press point.
                            let pressed_here = events.iter().any(|e| {
                                matches!(e, InputEvent::PointerDown { pos: down, .. } if *down == pos)
                            });
                            if !pressed_here {
                                events.push(InputEvent::PointerMove { pos, held_buttons });
                            }
                        }
                    }
                }
            }
            self.last_pointer_pos = hover;

            for button in BUTTONS {
                if input.pointer.button_released(button) {
                    events.push(InputEvent::PointerUp { button });
                }
            }
        });

        events
    }

    /// Consume this frame's shortcut key presses
    pub fn process_shortcuts(&mut self, ctx: &Context) -> Vec<Shortcut> {
        let mut shortcuts = Vec::new();
        ctx.input_mut(|input| {
            for shortcut in Shortcut::ALL {
                if input.consume_key(Modifiers::COMMAND, shortcut.key()) {
                    shortcuts.push(shortcut);
                }
            }
            // Some backends turn Ctrl+C into a copy event instead of a key press.
            if !shortcuts.contains(&Shortcut::ChooseColor)
                && input.events.iter().any(|e| matches!(e, egui::Event::Copy))
            {
                shortcuts.push(Shortcut::ChooseColor);
            }
        });
        shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canvas_is_relative_to_rect() {
        let mut handler = InputHandler::new();
        assert_eq!(handler.to_canvas(Pos2::new(5.0, 5.0)), None);

        handler.set_canvas_rect(Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(600.0, 400.0)));
        assert_eq!(handler.to_canvas(Pos2::new(110.0, 70.0)), Some(Point::new(10, 20)));
        assert_eq!(handler.to_canvas(Pos2::new(90.0, 40.0)), Some(Point::new(-10, -10)));
    }

    fn frame(ctx: &Context, handler: &mut InputHandler, events: Vec<egui::Event>) -> Vec<InputEvent> {
        let raw = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut out = Vec::new();
        let _ = ctx.run(raw, |ctx| out = handler.process_input(ctx));
        out
    }

    fn press(pos: Pos2) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_click_in_single_frame_emits_only_down() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();
        handler.set_canvas_rect(Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0)));

        let p = Pos2::new(20.0, 30.0);
        let events = frame(&ctx, &mut handler, vec![egui::Event::PointerMoved(p), press(p)]);
        assert_eq!(
            events,
            vec![InputEvent::PointerDown {
                pos: Point::new(20, 30),
                button: PointerButton::Primary,
            }]
        );

        let events = frame(&ctx, &mut handler, vec![egui::Event::PointerMoved(Pos2::new(40.0, 30.0))]);
        assert_eq!(
            events,
            vec![InputEvent::PointerMove {
                pos: Point::new(40, 30),
                held_buttons: vec![PointerButton::Primary],
            }]
        );
    }

    #[test]
    fn test_shortcut_keys_are_distinct() {
        for (i, a) in Shortcut::ALL.iter().enumerate() {
            for b in &Shortcut::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }
}
