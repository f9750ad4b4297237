use std::time::{Duration, Instant};
use pxa_grid_engine::app::commands::AppCommand;
use pxa_grid_engine::app::config::EngineConfig;
use pxa_grid_engine::app::events::{EngineEffect, InputEvent};
use pxa_grid_engine::app::state::{PointerButton, ToolType};
use pxa_grid_engine::core::color::Color;
use pxa_grid_engine::core::selection::Selection;
use pxa_grid_engine::Engine;

const RED: Color = Color::new(255, 0, 0);
const GREEN: Color = Color::new(0, 255, 0);

fn setup_app(width: usize, height: usize) -> Engine {
    let _ = env_logger::builder().is_test(true).try_init();
    Engine::with_config(EngineConfig { width, height, ..EngineConfig::default() })
}

fn down(app: &mut Engine, index: usize, now: Instant) -> EngineEffect {
    app.handle_input_at(InputEvent::PointerDown { index: Some(index), button: PointerButton::Primary }, now)
}

fn drag(app: &mut Engine, path: &[usize], now: Instant) {
    down(app, path[0], now);
    for &i in &path[1..] {
        app.handle_input_at(InputEvent::PointerMove { index: Some(i) }, now);
    }
    let last = path[path.len() - 1];
    app.handle_input_at(InputEvent::PointerUp { index: Some(last) }, now);
}

fn painted(app: &Engine) -> Vec<usize> {
    let pixels = app.store().active_pixels();
    (0..pixels.len()).filter(|&i| pixels.get(i).is_some()).collect()
}

#[test]
fn test_fill_empty_grid() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetColor(RED), t0);
    app.execute_at(AppCommand::SetTool(ToolType::Fill), t0);

    let effect = down(&mut app, 0, t0);
    assert_eq!(effect, EngineEffect::ToolCommitted);
    app.handle_input_at(InputEvent::PointerUp { index: Some(0) }, t0);

    let pixels = app.store().active_pixels();
    assert!(pixels.cells().iter().all(|c| *c == Some(RED)));
    assert_eq!(app.history().len(), 2);
    assert_eq!(app.pending_commits(), 0);

    // Same color again changes nothing and records nothing.
    assert_eq!(down(&mut app, 5, t0), EngineEffect::None);
    assert_eq!(app.history().len(), 2);
}

#[test]
fn test_pencil_thickness_three_footprint() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetColor(GREEN), t0);
    app.execute_at(AppCommand::SetBrushThickness(3), t0);
    drag(&mut app, &[5], t0);
    assert_eq!(painted(&app), vec![1, 4, 5, 6, 9]);
    assert!(painted(&app).iter().all(|&i| app.store().active_pixels().get(i) == Some(GREEN)));
}

#[test]
fn test_pencil_half_opacity_blends() {
    let mut app = setup_app(2, 1);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetColor(RED), t0);
    drag(&mut app, &[0, 1], t0);
    app.execute_at(AppCommand::SetColor(Color::BLACK), t0);
    app.execute_at(AppCommand::SetBrushOpacity(5), t0);
    drag(&mut app, &[0], t0);
    assert_eq!(app.store().active_pixels().get(0), Some(Color::new(128, 0, 0)));
    assert_eq!(app.store().active_pixels().get(1), Some(RED));
}

#[test]
fn test_right_click_erases_with_pencil() {
    let mut app = setup_app(3, 3);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetColor(RED), t0);
    drag(&mut app, &[4], t0);
    assert_eq!(painted(&app), vec![4]);

    app.handle_input_at(InputEvent::PointerDown { index: Some(4), button: PointerButton::Secondary }, t0);
    app.handle_input_at(InputEvent::PointerUp { index: Some(4) }, t0);
    assert!(painted(&app).is_empty());
    assert_eq!(app.active_tool(), ToolType::Pencil);
}

#[test]
fn test_line_endpoints_on_row() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetTool(ToolType::Line), t0);
    drag(&mut app, &[0, 3], t0);
    assert_eq!(painted(&app), vec![0, 1, 2, 3]);
}

#[test]
fn test_rectangle_preview_does_not_accumulate() {
    let mut app = setup_app(5, 5);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetTool(ToolType::Rectangle), t0);
    drag(&mut app, &[0, 24, 12], t0);
    let replayed = painted(&app);

    let mut direct = setup_app(5, 5);
    direct.execute_at(AppCommand::SetTool(ToolType::Rectangle), t0);
    drag(&mut direct, &[0, 12], t0);
    assert_eq!(replayed, painted(&direct));
    assert_eq!(replayed, vec![0, 1, 2, 5, 7, 10, 11, 12]);
}

#[test]
fn test_shape_released_off_canvas_reverts() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetTool(ToolType::Circle), t0);
    down(&mut app, 5, t0);
    app.handle_input_at(InputEvent::PointerMove { index: Some(7) }, t0);
    assert!(!painted(&app).is_empty());
    app.handle_input_at(InputEvent::PointerUp { index: None }, t0);
    assert!(painted(&app).is_empty());
    app.tick(t0 + Duration::from_millis(20));
    assert_eq!(app.history().len(), 1);
}

#[test]
fn test_move_selection_drops_cells_past_edge() {
    let mut app = setup_app(8, 8);
    let t0 = Instant::now();
    {
        let settings = app.settings_mut();
        settings.color = RED;
    }
    // Row 6 red, row 7 green, columns 1..=2.
    drag(&mut app, &[49], t0);
    drag(&mut app, &[50], t0);
    app.execute_at(AppCommand::SetColor(GREEN), t0);
    drag(&mut app, &[57], t0);
    drag(&mut app, &[58], t0);

    app.execute_at(AppCommand::SetTool(ToolType::RectangleSelection), t0);
    drag(&mut app, &[49, 58], t0);
    assert_eq!(app.store().selection, Selection::from_indices([49, 50, 57, 58]));

    drag(&mut app, &[49, 57], t0);
    let pixels = app.store().active_pixels();
    assert_eq!(pixels.get(57), Some(RED));
    assert_eq!(pixels.get(58), Some(RED));
    assert_eq!(pixels.get(49), None);
    assert_eq!(pixels.get(50), None);
    assert!(pixels.cells().iter().all(|c| *c != Some(GREEN)));
    assert_eq!(app.store().selection, Selection::from_indices([57, 58]));
}

#[test]
fn test_click_outside_selection_clears_it() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetTool(ToolType::RectangleSelection), t0);
    drag(&mut app, &[0, 5], t0);
    assert_eq!(app.store().selection.len(), 4);
    drag(&mut app, &[15], t0);
    assert!(app.store().selection.is_empty());
}

#[test]
fn test_tool_switch_clears_selection() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetTool(ToolType::RectangleSelection), t0);
    drag(&mut app, &[0, 5], t0);
    app.execute_at(AppCommand::SetTool(ToolType::LassoSelection), t0);
    assert_eq!(app.store().selection.len(), 4);
    app.execute_at(AppCommand::SetTool(ToolType::Pencil), t0);
    assert!(app.store().selection.is_empty());
}

#[test]
fn test_lasso_selects_enclosed_cells() {
    let mut app = setup_app(5, 5);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetTool(ToolType::LassoSelection), t0);
    drag(&mut app, &[0, 4, 24, 20], t0);
    let selection = &app.store().selection;
    assert!(selection.contains(0));
    assert!(selection.contains(12));
    assert!(selection.contains(24));
}

#[test]
fn test_color_picker_reads_active_layer() {
    let mut app = setup_app(3, 3);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetColor(RED), t0);
    drag(&mut app, &[2], t0);
    app.flush_pending(t0);
    app.execute_at(AppCommand::SetColor(Color::BLACK), t0);
    app.execute_at(AppCommand::SetTool(ToolType::ColorPicker), t0);
    assert_eq!(down(&mut app, 2, t0), EngineEffect::SettingsChanged);
    assert_eq!(app.store().settings.color, RED);

    // Empty cells leave the color alone.
    down(&mut app, 0, t0);
    assert_eq!(app.store().settings.color, RED);
}

#[test]
fn test_crop_tool_then_apply() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetColor(RED), t0);
    drag(&mut app, &[5], t0);
    app.execute_at(AppCommand::SetTool(ToolType::Crop), t0);
    drag(&mut app, &[5, 10], t0);
    assert!(app.crop_proposal().is_some());

    assert_eq!(app.execute_at(AppCommand::ApplyCrop, t0), EngineEffect::ToolCommitted);
    assert_eq!((app.store().size.width, app.store().size.height), (2, 2));
    assert_eq!(app.store().active_pixels().get(0), Some(RED));
    assert!(app.crop_proposal().is_none());
    assert!(matches!(app.execute_at(AppCommand::ApplyCrop, t0), EngineEffect::Error(_)));
}

#[test]
fn test_out_of_range_index_is_ignored() {
    let mut app = setup_app(2, 2);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetColor(RED), t0);
    drag(&mut app, &[99], t0);
    assert!(painted(&app).is_empty());
}

#[test]
fn test_undo_drops_crop_proposal() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::ResizeGrid(8, 8), t0);
    app.execute_at(AppCommand::SetTool(ToolType::Crop), t0);
    drag(&mut app, &[0, 63], t0);
    assert!(app.crop_proposal().is_some());

    assert!(app.undo_at(t0 + Duration::from_millis(1)));
    assert_eq!((app.store().size.width, app.store().size.height), (4, 4));
    assert!(app.crop_proposal().is_none());
    assert!(matches!(app.execute_at(AppCommand::ApplyCrop, t0), EngineEffect::Error(_)));
    assert_eq!((app.store().size.width, app.store().size.height), (4, 4));
}

#[test]
fn test_leaving_crop_tool_drops_proposal() {
    let mut app = setup_app(4, 4);
    let t0 = Instant::now();
    app.execute_at(AppCommand::SetTool(ToolType::Crop), t0);
    drag(&mut app, &[5, 10], t0);
    assert!(app.crop_proposal().is_some());

    app.execute_at(AppCommand::SetTool(ToolType::Pencil), t0);
    assert!(app.crop_proposal().is_none());
    assert!(matches!(app.execute_at(AppCommand::ApplyCrop, t0), EngineEffect::Error(_)));
    assert_eq!((app.store().size.width, app.store().size.height), (4, 4));
}
