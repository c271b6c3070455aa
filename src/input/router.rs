use egui::PointerButton;

use crate::command::Command;
use crate::document::Document;
use crate::error::CanvasResult;

use super::InputEvent;

/// Routes a canvas input event to the document.
///
/// The primary button draws; a middle click samples the color under the
/// pointer. Everything else is ignored.
pub fn route_event(event: &InputEvent, document: &mut Document) -> CanvasResult<()> {
    match event {
        InputEvent::PointerDown {
            pos,
            button: PointerButton::Primary,
        } => document.on_pointer_down(pos.x, pos.y),
        InputEvent::PointerDown {
            pos,
            button: PointerButton::Middle,
        } => Command::PickColor(*pos).execute(document)?,
        InputEvent::PointerMove { pos, held_buttons } => {
            if held_buttons.contains(&PointerButton::Primary) {
                document.on_pointer_move(pos.x, pos.y);
            }
        }
        InputEvent::PointerUp {
            button: PointerButton::Primary,
        } => document.on_pointer_up(),
        _ => {}
    }
    Ok(())
}
