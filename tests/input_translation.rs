use eframe_grid_paint::panels::central_panel;
use eframe_grid_paint::{
    CanvasEvent, CellGrid, GridConfig, GridLayout, GridRenderer, InputHandler, PaintContext,
    PointerSnapshot,
};
use egui::{Color32, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, pos2, vec2};

fn setup() -> (CellGrid, InputHandler) {
    let layout = GridLayout::new(Pos2::ZERO, 10.0, 2);
    let grid = CellGrid::new(4, layout);
    let input = InputHandler::new(layout.extent(grid.len()));
    (grid, input)
}

fn at(x: f32, y: f32) -> PointerSnapshot {
    PointerSnapshot {
        pos: Some(pos2(x, y)),
        ..Default::default()
    }
}

#[test]
fn press_reports_move_then_down() {
    let (grid, mut input) = setup();
    let pointer = PointerSnapshot {
        primary_down: true,
        primary_pressed: true,
        ..at(5.0, 5.0)
    };
    let target = grid.id_at(0);
    assert_eq!(
        input.translate(pointer, &grid),
        vec![
            CanvasEvent::PointerMove {
                target,
                pos: pos2(5.0, 5.0),
                primary_held: true,
            },
            CanvasEvent::PointerDown {
                target,
                pos: pos2(5.0, 5.0),
            },
        ]
    );
}

#[test]
fn moves_are_reported_once_per_cell() {
    let (grid, mut input) = setup();
    assert_eq!(input.translate(at(2.0, 2.0), &grid).len(), 1);
    assert!(input.translate(at(8.0, 8.0), &grid).is_empty());

    let events = input.translate(at(12.0, 8.0), &grid);
    assert_eq!(
        events,
        vec![CanvasEvent::PointerMove {
            target: grid.id_at(1),
            pos: pos2(12.0, 8.0),
            primary_held: false,
        }]
    );
    assert_eq!(input.hovered(), grid.id_at(1));
}

#[test]
fn pointer_outside_the_surface_is_dropped() {
    let (grid, mut input) = setup();
    input.translate(at(5.0, 5.0), &grid);

    let outside = PointerSnapshot {
        primary_released: true,
        ..at(50.0, 50.0)
    };
    assert!(input.translate(outside, &grid).is_empty());
    assert_eq!(input.hovered(), None);

    let gone = PointerSnapshot::default();
    assert!(input.translate(gone, &grid).is_empty());
}

#[test]
fn re_entering_a_cell_reports_it_again() {
    let (grid, mut input) = setup();
    input.translate(at(5.0, 5.0), &grid);
    input.translate(PointerSnapshot::default(), &grid);
    assert_eq!(input.translate(at(5.0, 5.0), &grid).len(), 1);
}

#[test]
fn release_inside_reports_up() {
    let (grid, mut input) = setup();
    input.translate(at(15.0, 15.0), &grid);
    let release = PointerSnapshot {
        primary_released: true,
        ..at(15.0, 15.0)
    };
    assert_eq!(
        input.translate(release, &grid),
        vec![CanvasEvent::PointerUp {
            target: grid.id_at(3),
            pos: pos2(15.0, 15.0),
        }]
    );
}

#[test]
fn resized_surface_changes_what_is_forwarded() {
    let (grid, mut input) = setup();
    input.set_surface(Rect::from_min_max(Pos2::ZERO, pos2(10.0, 10.0)));
    assert!(input.translate(at(15.0, 5.0), &grid).is_empty());
}

/// Runs one egui frame with `events` as input and the grid in the central
/// panel. With `overlay` a foreground window covers the top left corner.
fn run_frame(
    ctx: &egui::Context,
    events: Vec<Event>,
    overlay: bool,
    context: &mut PaintContext,
    input: &mut InputHandler,
) {
    let raw = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
        events,
        ..Default::default()
    };
    let renderer = GridRenderer::default();
    let _ = ctx.run(raw, |ctx| {
        central_panel(ctx, context, input, &renderer, 12.0, Color32::WHITE);
        if overlay {
            egui::Area::new(egui::Id::new("overlay"))
                .order(egui::Order::Foreground)
                .fixed_pos(Pos2::ZERO)
                .show(ctx, |ui| {
                    ui.allocate_exact_size(vec2(400.0, 400.0), egui::Sense::click());
                });
        }
    });
}

/// Hover, then press and release the primary button at `pos`
fn click_through_frames(overlay: bool) -> PaintContext {
    let ctx = egui::Context::default();
    let mut context = PaintContext::new(GridConfig::default()).unwrap();
    let mut input = InputHandler::new(Rect::NOTHING);
    let pos = pos2(60.0, 30.0);
    let button = |pressed| Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    };

    // two idle frames so egui knows every widget rect before the press
    for _ in 0..2 {
        run_frame(&ctx, vec![Event::PointerMoved(pos)], overlay, &mut context, &mut input);
    }
    run_frame(&ctx, vec![button(true)], overlay, &mut context, &mut input);
    run_frame(&ctx, vec![button(false)], overlay, &mut context, &mut input);
    context
}

#[test]
fn click_on_the_grid_paints_the_cell_under_it() {
    let context = click_through_frames(false);
    assert_eq!(context.grid().painted_count(), 1);
}

#[test]
fn click_on_a_window_above_the_grid_does_not_paint() {
    let context = click_through_frames(true);
    assert_eq!(context.grid().painted_count(), 0);
}
