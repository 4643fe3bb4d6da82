use super::layout::{Floor, LocationId};
use super::surface::DrawSurface;

/// Fixed size of the plano drawing area, in surface units.
pub const CANVAS_WIDTH: f64 = 450.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Draws `floor` onto `surface`, filling the room whose id equals
/// `highlight` in yellow (if that id occurs on this floor; a foreign or
/// absent id simply highlights nothing).
///
/// The surface is never cleared here; a host re-rendering a new state clears
/// first. Surface state is overwritten freely and left wherever the last
/// primitive set it.
pub fn render(surface: &mut dyn DrawSurface, floor: Floor, highlight: Option<LocationId>) {
    // Shared settings every floor starts from
    surface.set_line_width(5.0);
    surface.set_stroke_color("black");
    surface.set_fill_color("black");

    match floor {
        Floor::Gymnasium => draw_gymnasium(surface, highlight),
        Floor::Ground => draw_ground(surface, highlight),
        Floor::Top => draw_top(surface, highlight),
    }
}

fn draw_ground(surface: &mut dyn DrawSurface, highlight: Option<LocationId>) {
    let ids = Floor::Ground.rooms();

    // Left-side rooms
    for i in 0..5 {
        draw_room(surface, 0.0, 92.5 + i as f64 * 85.0, ids[i], false, None, highlight);
    }

    // The circular patio
    draw_circle_room(surface, 225.0, 160.0, ids[5], highlight);

    // Inside room
    draw_room(surface, 150.0, 432.5, ids[6], false, None, highlight);

    draw_boundary(surface, false);
}

fn draw_gymnasium(surface: &mut dyn DrawSurface, highlight: Option<LocationId>) {
    let ids = Floor::Gymnasium.rooms();

    draw_stage(surface, 85.0, 10.0, ids[0], highlight);

    // Left-side stands
    for i in 0..3 {
        draw_room(surface, 0.0, 177.5 + i as f64 * 85.0, ids[i + 1], true, None, highlight);
    }

    // Right-side stands
    for i in 0..4 {
        draw_room(surface, 375.0, 92.5 + i as f64 * 85.0, ids[i + 4], true, None, highlight);
    }

    // Inside rooms next to the entrance
    draw_room(surface, 187.5, 450.0, ids[8], true, None, highlight);
    draw_room(surface, 187.5, 525.0, ids[9], false, None, highlight);

    draw_entrance(surface, 287.5, 525.0);

    // The gymnasium takes the whole canvas
    draw_boundary(surface, true);
}

fn draw_top(surface: &mut dyn DrawSurface, highlight: Option<LocationId>) {
    let ids = Floor::Top.rooms();

    // Left-side rooms
    for i in 0..5 {
        draw_room(surface, 0.0, 92.5 + i as f64 * 85.0, ids[i], false, None, highlight);
    }

    // Right-side room
    draw_room(surface, 375.0, 75.0, ids[5], false, None, highlight);

    // Decorative circle in the hall, no label
    surface.set_stroke_color("black");
    surface.stroke_circle(205.0, 190.0, 40.0);

    // Two narrow inside rooms
    for i in 0..2 {
        draw_room(surface, 260.0 + i as f64 * 60.0, 150.0, ids[i + 6], false, Some(50.0), highlight);
    }

    // Lower inside and outside rooms
    draw_room(surface, 150.0, 375.0, ids[8], false, None, highlight);
    draw_room(surface, 150.0, 525.0, ids[9], false, None, highlight);

    // Hall corridors; stroke color stays whatever the last room left it at
    surface.stroke_line(150.0, 150.0, 375.0, 150.0);
    surface.stroke_line(150.0, 150.0, 150.0, 375.0);

    draw_boundary(surface, false);
}

/// A rectangular room, 75 units tall and `width` (default 75) wide. Stands
/// get a dashed outline; the dash pattern is reset again afterwards.
fn draw_room(
    surface: &mut dyn DrawSurface,
    x: f64,
    y: f64,
    id: LocationId,
    stand: bool,
    width: Option<f64>,
    highlight: Option<LocationId>,
) {
    let w = width.unwrap_or(75.0);

    if stand {
        surface.set_line_dash(&[1.0]);
    }

    // Highlight fill goes under the outline
    if highlight == Some(id) {
        surface.set_fill_color("yellow");
        surface.fill_rect(x, y, w, 75.0);
    }

    surface.set_stroke_color("blue");
    surface.stroke_rect(x, y, w, 75.0);

    surface.set_fill_color("black");
    surface.set_font("25px sans-serif");
    surface.set_text_align("center");
    surface.set_text_baseline("middle");
    surface.fill_text(&id.to_string(), x + w / 2.0, y + 37.5);

    surface.set_line_dash(&[]);
}

fn draw_circle_room(surface: &mut dyn DrawSurface, x: f64, y: f64, id: LocationId, highlight: Option<LocationId>) {
    surface.set_stroke_color("blue");

    if highlight == Some(id) {
        surface.set_fill_color("yellow");
        surface.fill_circle(x, y, 75.0);
    }

    surface.stroke_circle(x, y, 75.0);

    surface.set_fill_color("black");
    surface.set_font("25px sans-serif");
    surface.set_text_align("center");
    surface.set_text_baseline("middle");
    surface.fill_text(&id.to_string(), x, y);
}

fn draw_stage(surface: &mut dyn DrawSurface, x: f64, y: f64, id: LocationId, highlight: Option<LocationId>) {
    if highlight == Some(id) {
        surface.set_fill_color("yellow");
        surface.fill_rect(x, y, 280.0, 150.0);
    }

    surface.set_stroke_color("black");
    surface.stroke_rect(x, y, 280.0, 150.0);

    surface.set_fill_color("black");
    surface.set_font("25px sans-serif");
    surface.set_text_align("center");
    surface.set_text_baseline("middle");
    surface.fill_text(&id.to_string(), x + 140.0, y + 75.0);
}

/// The entrance marker: green outline, fixed caption, never highlighted.
fn draw_entrance(surface: &mut dyn DrawSurface, x: f64, y: f64) {
    surface.set_stroke_color("green");
    surface.stroke_rect(x, y, 75.0, 75.0);

    surface.set_fill_color("black");
    surface.set_font("18px sans-serif");
    surface.set_text_align("center");
    surface.set_text_baseline("middle");
    surface.fill_text("Entrada", x + 37.5, y + 37.5);
}

/// The floor outline: the whole canvas for the gymnasium, a centered
/// sub-region for the other floors.
fn draw_boundary(surface: &mut dyn DrawSurface, full: bool) {
    surface.set_stroke_color("black");
    if full {
        surface.stroke_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
    } else {
        surface.stroke_rect(75.0, 75.0, 300.0, 450.0);
    }
}
