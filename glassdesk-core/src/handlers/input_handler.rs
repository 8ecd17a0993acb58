use super::{InputEvent, Position, ShellAction, Size, State};
use crate::input_event::{PointerButton, PointerRegion};
use crate::models::DragTarget;
use crate::snap;

impl State {
    /// Apply one raw input event. Returns true when state changed.
    pub fn input_handler(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown {
                target,
                region,
                button,
                pointer,
                size,
            } => self.pointer_down(target, region, button, pointer, size),
            InputEvent::PointerMove { pointer } => self.pointer_move(pointer),
            InputEvent::PointerUp { pointer } => self.pointer_up(pointer),
            InputEvent::PointerCancel => self.pointer_cancel(),
            InputEvent::KeyDown {
                widget,
                direction,
                fine,
                size,
            } => self.nudge_widget(&widget, direction, fine, size),
            InputEvent::ViewportResized { size } => {
                if !size.is_finite() {
                    tracing::warn!("Ignoring viewport size {:?}", size);
                    return false;
                }
                tracing::debug!("Viewport resized to {}x{}", size.width, size.height);
                self.viewport = size;
                true
            }
        }
    }

    fn pointer_down(
        &mut self,
        target: DragTarget,
        region: PointerRegion,
        button: PointerButton,
        pointer: Position,
        size: Size,
    ) -> bool {
        let starts_drag = button == PointerButton::Primary && region == PointerRegion::Handle;
        match target {
            DragTarget::Window(id) => {
                let Some(origin) = self
                    .windows
                    .get(id)
                    .filter(|w| w.is_visible())
                    .map(|w| w.position)
                else {
                    return false;
                };
                // Any press on a window raises it, before it moves.
                let raised = self.focus_app(id);
                if starts_drag {
                    self.drag.begin(DragTarget::Window(id), origin, size, pointer);
                }
                raised
            }
            DragTarget::Widget(id) => {
                if !starts_drag {
                    return false;
                }
                let Some(origin) = self.desktop.widgets().get(&id).map(|w| w.position) else {
                    return false;
                };
                self.drag.begin(DragTarget::Widget(id), origin, size, pointer)
            }
        }
    }

    fn pointer_move(&mut self, pointer: Position) -> bool {
        let Some(session) = self.drag.session_mut() else {
            return false;
        };
        let local = session.track(pointer);
        match session.target.clone() {
            DragTarget::Window(id) => {
                if self.windows.move_window(id, local) {
                    self.actions
                        .push_back(ShellAction::WindowMoved { id, position: local });
                }
            }
            DragTarget::Widget(id) => {
                let element_size = session.element_size;
                let Some(resolved) = self.resolve(local, element_size) else {
                    return false;
                };
                if let Some(session) = self.drag.session_mut() {
                    session.preview = Some(resolved);
                }
                let ghost = snap::is_significant(local, resolved.position).then_some(resolved.position);
                self.actions.push_back(ShellAction::WidgetDragPreview {
                    id,
                    local,
                    ghost,
                    zone: resolved.zone,
                });
            }
        }
        true
    }

    fn pointer_up(&mut self, pointer: Position) -> bool {
        let Some(mut session) = self.drag.end() else {
            return false;
        };
        let local = session.track(pointer);
        match session.target {
            DragTarget::Window(id) => self.move_app_window(id, local),
            DragTarget::Widget(id) => self.drop_widget(&id, local, session.element_size),
        }
    }

    /// Abandon the drag. Windows stay wherever they were last moved; widgets
    /// fall back to their committed position.
    fn pointer_cancel(&mut self) -> bool {
        let Some(session) = self.drag.end() else {
            return false;
        };
        let DragTarget::Widget(id) = session.target else {
            return true;
        };
        if let Some(widget) = self.desktop.widgets().get(&id) {
            self.actions.push_back(ShellAction::WidgetDragCancelled {
                position: widget.position,
                id,
            });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppId, Manager, WidgetId, WidgetKind};
    use crate::snap::SnapZone;

    const ELEMENT: Size = Size::new(240.0, 160.0);

    fn grab(target: DragTarget, pointer: Position, size: Size) -> InputEvent {
        InputEvent::PointerDown {
            target,
            region: PointerRegion::Handle,
            button: PointerButton::Primary,
            pointer,
            size,
        }
    }

    fn widget(state: &mut State) -> WidgetId {
        state.add_widget(WidgetKind::Time);
        state.desktop.widgets().all()[0].id.clone()
    }

    #[test]
    fn widget_drag_previews_and_commits_only_on_release() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = widget(state);
        // Widget sits at (100, 100); grab it 10px into its handle.
        state.input_handler(grab(DragTarget::Widget(id.clone()), Position::new(110.0, 110.0), ELEMENT));
        state.input_handler(InputEvent::PointerMove {
            pointer: Position::new(1270.0, 30.0),
        });
        assert_eq!(state.desktop.widgets().get(&id).unwrap().position, Position::new(100.0, 100.0));
        assert_eq!(
            state.actions.back(),
            Some(&ShellAction::WidgetDragPreview {
                id: id.clone(),
                local: Position::new(1260.0, 20.0),
                ghost: Some(Position::new(1028.0, 12.0)),
                zone: Some(SnapZone::TopRight),
            })
        );

        state.input_handler(InputEvent::PointerUp {
            pointer: Position::new(1270.0, 30.0),
        });
        let committed = state.desktop.widgets().get(&id).unwrap();
        assert_eq!(committed.position, Position::new(1028.0, 12.0));
        assert_eq!(committed.snap_zone, Some(SnapZone::TopRight));
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn small_corrections_show_no_ghost() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = widget(state);
        state.input_handler(grab(DragTarget::Widget(id), Position::new(100.0, 100.0), ELEMENT));
        state.input_handler(InputEvent::PointerMove {
            pointer: Position::new(241.0, 193.0),
        });
        assert!(matches!(
            state.actions.back(),
            Some(ShellAction::WidgetDragPreview { ghost: None, .. })
        ));
    }

    #[test]
    fn cancelling_a_widget_drag_restores_its_position() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = widget(state);
        state.input_handler(grab(DragTarget::Widget(id.clone()), Position::new(100.0, 100.0), ELEMENT));
        state.input_handler(InputEvent::PointerMove {
            pointer: Position::new(700.0, 400.0),
        });
        assert!(state.input_handler(InputEvent::PointerCancel));
        assert_eq!(
            state.actions.back(),
            Some(&ShellAction::WidgetDragCancelled {
                id: id.clone(),
                position: Position::new(100.0, 100.0),
            })
        );
        assert_eq!(state.desktop.widgets().get(&id).unwrap().position, Position::new(100.0, 100.0));
    }

    #[test]
    fn controls_and_secondary_buttons_never_start_a_drag() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = widget(state);
        state.input_handler(InputEvent::PointerDown {
            target: DragTarget::Widget(id.clone()),
            region: PointerRegion::Control,
            button: PointerButton::Primary,
            pointer: Position::new(100.0, 100.0),
            size: ELEMENT,
        });
        assert!(!state.drag.is_dragging());
        state.input_handler(InputEvent::PointerDown {
            target: DragTarget::Widget(id),
            region: PointerRegion::Handle,
            button: PointerButton::Secondary,
            pointer: Position::new(100.0, 100.0),
            size: ELEMENT,
        });
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn pressing_a_window_raises_it_before_it_moves() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.launch_app(AppId::Writer);
        state.launch_app(AppId::Browser);
        state.move_app_window(AppId::Writer, Position::new(0.0, 0.0));
        state.actions.clear();

        state.input_handler(InputEvent::PointerDown {
            target: DragTarget::Window(AppId::Writer),
            region: PointerRegion::Content,
            button: PointerButton::Primary,
            pointer: Position::new(5.0, 5.0),
            size: Size::new(700.0, 500.0),
        });
        assert_eq!(state.windows.focused(), Some(AppId::Writer));
        assert!(!state.drag.is_dragging());
        assert!(matches!(
            state.actions.front(),
            Some(ShellAction::WindowRaised {
                id: AppId::Writer,
                ..
            })
        ));
    }

    #[test]
    fn window_drags_follow_the_pointer_unclamped() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        state.launch_app(AppId::Writer);
        state.move_app_window(AppId::Writer, Position::new(100.0, 100.0));
        state.input_handler(grab(
            DragTarget::Window(AppId::Writer),
            Position::new(150.0, 110.0),
            Size::new(700.0, 500.0),
        ));
        state.input_handler(InputEvent::PointerMove {
            pointer: Position::new(20.0, 5.0),
        });
        assert_eq!(
            state.windows.get(AppId::Writer).unwrap().position,
            Position::new(-30.0, -5.0)
        );
        state.input_handler(InputEvent::PointerUp {
            pointer: Position::new(40.0, 15.0),
        });
        assert_eq!(
            state.windows.get(AppId::Writer).unwrap().position,
            Position::new(-10.0, 5.0)
        );
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn hidden_windows_ignore_presses() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        assert!(!state.input_handler(grab(
            DragTarget::Window(AppId::Calculator),
            Position::default(),
            Size::new(320.0, 480.0),
        )));
        assert_eq!(state.windows.focused(), None);
    }

    #[test]
    fn keyboard_nudges_wait_for_the_drag_to_end() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = widget(state);
        state.input_handler(grab(DragTarget::Widget(id.clone()), Position::new(100.0, 100.0), ELEMENT));
        assert!(!state.input_handler(InputEvent::KeyDown {
            widget: id,
            direction: snap::Direction::Down,
            fine: false,
            size: ELEMENT,
        }));
    }

    #[test]
    fn viewport_changes_feed_later_resolutions() {
        let mut manager = Manager::new_test();
        let state = &mut manager.state;
        let id = widget(state);
        state.input_handler(InputEvent::ViewportResized {
            size: Size::new(800.0, 600.0),
        });
        state.drop_widget(&id, Position::new(5000.0, 5000.0), ELEMENT);
        assert_eq!(
            state.desktop.widgets().get(&id).unwrap().position,
            Position::new(548.0, 380.0)
        );
    }
}
