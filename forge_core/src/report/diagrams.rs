//! Parametric diagrams drawn as absolutely placed Typst shapes.
//!
//! Each diagram is a fixed-size block; every shape is `#place`d at a point
//! offset from the block's top-left corner. Geometry scales off the design's
//! external envelope, door and burner dimensions.

use super::escape_typst;
use crate::calculations::ForgeSpecs;
use crate::units::format_inches;

const STEEL_FILL: &str = r##"rgb("#c9d1d9")"##;
const INSULATION_FILL: &str = r##"rgb("#f4d6a0")"##;
const CHAMBER_FILL: &str = r##"rgb("#fff4e6")"##;
const OPENING_FILL: &str = r##"rgb("#3a3a3a")"##;
const BRICK_FILL: &str = r##"rgb("#e8c39e")"##;
const CASTING_FILL: &str = r##"rgb("#d9d9d9")"##;
const HOLE_FILL: &str = r##"rgb("#222222")"##;
const BOLT_FILL: &str = r##"rgb("#555555")"##;

const OUTLINE: &str = "0.8pt + black";
const THIN: &str = "0.5pt + gray";
const DIMENSION: &str = r##"0.5pt + rgb("#2c5aa0")"##;

/// Points per inch for the overview and orthographic views.
///
/// `min(12, 120 / max(W, H), 80 / L)` keeps the front face inside 120pt and
/// the side view inside 80pt for any chamber.
pub fn diagram_scale(specs: &ForgeSpecs) -> f64 {
    let env = &specs.envelope;
    12f64
        .min(120.0 / env.external_width_in.max(env.external_height_in))
        .min(80.0 / env.external_length_in)
}

/// A fixed-size drawing area collecting placed shapes.
pub(crate) struct Canvas {
    width: f64,
    height: f64,
    body: String,
}

impl Canvas {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Canvas {
            width,
            height,
            body: String::new(),
        }
    }

    pub(crate) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str) {
        self.body.push_str(&format!(
            "  #place(top + left, dx: {:.1}pt, dy: {:.1}pt, rect(width: {:.1}pt, height: {:.1}pt, fill: {}, stroke: {}))\n",
            x,
            y,
            w.max(0.0),
            h.max(0.0),
            fill,
            stroke
        ));
    }

    pub(crate) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        self.body.push_str(&format!(
            "  #place(top + left, line(start: ({:.1}pt, {:.1}pt), end: ({:.1}pt, {:.1}pt), stroke: {}))\n",
            x1, y1, x2, y2, stroke
        ));
    }

    pub(crate) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.body.push_str(&format!(
            "  #place(top + left, dx: {:.1}pt, dy: {:.1}pt, circle(radius: {:.1}pt, fill: {}, stroke: none))\n",
            cx - r,
            cy - r,
            r,
            fill
        ));
    }

    /// Label centered on (x, y)
    pub(crate) fn label(&mut self, x: f64, y: f64, size: f64, text: &str) {
        self.body.push_str(&format!(
            "  #place(top + left, dx: {:.1}pt, dy: {:.1}pt, box(width: 90pt, align(center, text(size: {:.1}pt)[{}])))\n",
            x - 45.0,
            y - size * 0.6,
            size,
            escape_typst(text)
        ));
    }

    /// Label starting at (x, y)
    pub(crate) fn label_left(&mut self, x: f64, y: f64, size: f64, text: &str) {
        self.body.push_str(&format!(
            "  #place(top + left, dx: {:.1}pt, dy: {:.1}pt, text(size: {:.1}pt)[{}])\n",
            x,
            y - size * 0.6,
            size,
            escape_typst(text)
        ));
    }

    /// Label ending at (x, y)
    pub(crate) fn label_right(&mut self, x: f64, y: f64, size: f64, text: &str) {
        self.body.push_str(&format!(
            "  #place(top + left, dx: {:.1}pt, dy: {:.1}pt, box(width: 70pt, align(right, text(size: {:.1}pt)[{}])))\n",
            x - 70.0,
            y - size * 0.6,
            size,
            escape_typst(text)
        ));
    }

    /// Horizontal dimension line with end ticks and the label above it.
    pub(crate) fn dimension_h(&mut self, x1: f64, x2: f64, y: f64, text: &str) {
        self.line(x1, y, x2, y, DIMENSION);
        self.line(x1, y - 3.0, x1, y + 3.0, DIMENSION);
        self.line(x2, y - 3.0, x2, y + 3.0, DIMENSION);
        self.label((x1 + x2) / 2.0, y - 7.0, 7.0, text);
    }

    /// Vertical dimension line with end ticks and the label to its left.
    pub(crate) fn dimension_v(&mut self, x: f64, y1: f64, y2: f64, text: &str) {
        self.line(x, y1, x, y2, DIMENSION);
        self.line(x - 3.0, y1, x + 3.0, y1, DIMENSION);
        self.line(x - 3.0, y2, x + 3.0, y2, DIMENSION);
        self.label_right(x - 4.0, (y1 + y2) / 2.0, 7.0, text);
    }

    pub(crate) fn finish(self) -> String {
        format!(
            "#align(center)[#block(width: {:.1}pt, height: {:.1}pt)[\n{}]]\n",
            self.width, self.height, self.body
        )
    }
}

/// Oblique view of the assembled forge for the title page.
pub fn assembly_overview(specs: &ForgeSpecs) -> String {
    let s = diagram_scale(specs);
    let env = &specs.envelope;
    let w = env.external_width_in * s;
    let h = env.external_height_in * s;
    // Oblique depth, receding up and to the right
    let dx = env.external_length_in * s * 0.6;
    let dy = env.external_length_in * s * 0.4;

    let mut c = Canvas::new(320.0, 230.0);
    let x0 = 100.0;
    let y0 = 200.0 - h;

    // Top and side faces
    c.line(x0, y0, x0 + dx, y0 - dy, OUTLINE);
    c.line(x0 + w, y0, x0 + w + dx, y0 - dy, OUTLINE);
    c.line(x0 + dx, y0 - dy, x0 + w + dx, y0 - dy, OUTLINE);
    c.line(x0 + w + dx, y0 - dy, x0 + w + dx, y0 + h - dy, OUTLINE);
    c.line(x0 + w, y0 + h, x0 + w + dx, y0 + h - dy, OUTLINE);

    // Front face with door opening
    c.rect(x0, y0, w, h, STEEL_FILL, OUTLINE);
    let door_w = specs.doors.front_door_width_in * s;
    let door_h = specs.doors.front_door_height_in * s;
    c.rect(x0 + (w - door_w) / 2.0, y0 + h - door_h - 0.5 * s, door_w, door_h, OPENING_FILL, THIN);

    // Burner housing on the top face, halfway back
    let burner_len = specs.burner.burner_length_in * s * 0.6;
    let bx = x0 + w / 2.0 + dx * 0.5 - burner_len / 2.0;
    let by = y0 - dy * 0.5;
    c.rect(bx, by - 3.0 * s, burner_len, 3.0 * s, CASTING_FILL, OUTLINE);
    c.line(
        bx + burner_len / 2.0,
        by - 3.0 * s,
        bx + burner_len / 2.0,
        by - 3.0 * s - 18.0,
        OUTLINE,
    );
    c.label_left(
        bx + burner_len / 2.0 + 4.0,
        by - 3.0 * s - 14.0,
        7.0,
        "Ribbon burner + air inlet",
    );

    let front_door = door_size(specs.doors.front_door_width_in, specs.doors.front_door_height_in);
    c.label(x0 + w / 2.0, y0 + h + 12.0, 7.0, &format!("Front door {}", front_door));
    c.dimension_v(x0 - 8.0, y0, y0 + h, &format_inches(env.external_height_in));
    c.label_left(
        x0 + w + dx + 6.0,
        y0 + h / 2.0 - dy,
        7.0,
        &format!("L = {}", format_inches(env.external_length_in)),
    );

    c.finish()
}

/// Front and side orthographic views with shell, insulation and chamber.
pub fn orthographic_views(specs: &ForgeSpecs) -> String {
    let s = diagram_scale(specs);
    let env = &specs.envelope;
    let input = &specs.input;
    let ext_w = env.external_width_in * s;
    let ext_h = env.external_height_in * s;
    let ext_l = env.external_length_in * s;
    let wall = (input.insulation_in + 0.25) * s;

    let mut c = Canvas::new(380.0, 200.0);
    let top = 40.0;

    // Front view
    let fx = 60.0;
    c.label(fx + ext_w / 2.0, top - 22.0, 8.0, "FRONT");
    c.rect(fx, top, ext_w, ext_h, INSULATION_FILL, OUTLINE);
    c.rect(fx + wall, top + wall, input.width_in * s, input.height_in * s, CHAMBER_FILL, THIN);
    let door_w = specs.doors.front_door_width_in * s;
    let door_h = specs.doors.front_door_height_in * s;
    c.rect(
        fx + (ext_w - door_w) / 2.0,
        top + wall + (input.height_in * s - door_h),
        door_w,
        door_h,
        "none",
        r#"(paint: black, thickness: 0.6pt, dash: "dashed")"#,
    );
    c.dimension_h(fx, fx + ext_w, top + ext_h + 14.0, &format_inches(env.external_width_in));
    c.dimension_v(fx - 8.0, top, top + ext_h, &format_inches(env.external_height_in));

    // Side view with burner on top
    let sx = 230.0;
    c.label(sx + ext_l / 2.0, top - 22.0, 8.0, "SIDE");
    c.rect(sx, top, ext_l, ext_h, INSULATION_FILL, OUTLINE);
    let end_plate = 0.5 * s;
    c.rect(
        sx + end_plate,
        top + wall,
        input.length_in * s,
        input.height_in * s,
        CHAMBER_FILL,
        THIN,
    );
    let burner_len = specs.burner.burner_length_in * s;
    let burner_x = sx + (ext_l - burner_len) / 2.0;
    c.rect(burner_x, top - 3.0 * s, burner_len, 3.0 * s, CASTING_FILL, OUTLINE);
    c.dimension_h(sx, sx + ext_l, top + ext_h + 14.0, &format_inches(env.external_length_in));
    c.label_left(
        sx + ext_l + 6.0,
        top - 1.5 * s,
        7.0,
        &format!("Burner {}", format_inches(specs.burner.burner_length_in)),
    );

    c.label(190.0, top + ext_h + 34.0, 7.0, &format!(
        "Chamber {} x {} x {}, {} insulation",
        format_inches(input.width_in),
        format_inches(input.height_in),
        format_inches(input.length_in),
        format_inches(input.insulation_in)
    ));

    c.finish()
}

/// Bolted corner joint: angle iron post with two plates and bolts.
pub fn corner_detail() -> String {
    let mut c = Canvas::new(300.0, 190.0);
    let (x0, y0) = (90.0, 30.0);

    // Angle iron, 2" legs at 20pt/in, 1/8" wall
    c.rect(x0, y0, 40.0, 6.0, STEEL_FILL, OUTLINE);
    c.rect(x0, y0, 6.0, 40.0, STEEL_FILL, OUTLINE);

    // Plates outside the angle
    c.rect(x0 - 5.0, y0 - 5.0, 140.0, 5.0, STEEL_FILL, OUTLINE);
    c.rect(x0 - 5.0, y0, 5.0, 130.0, STEEL_FILL, OUTLINE);

    // Blanket against the plates
    c.rect(x0 + 6.0, y0 + 6.0, 129.0, 40.0, INSULATION_FILL, THIN);
    c.rect(x0 + 6.0, y0 + 46.0, 40.0, 84.0, INSULATION_FILL, THIN);

    // Bolts through plate and angle leg
    for offset in [18.0, 32.0] {
        c.circle(x0 + offset, y0 + 1.0, 3.0, BOLT_FILL);
        c.circle(x0 + 1.0, y0 + offset, 3.0, BOLT_FILL);
    }

    c.label_left(x0 + 145.0, y0 - 2.0, 7.0, "1/4\" plate");
    c.label_left(x0 + 50.0, y0 + 14.0, 7.0, "2\" x 2\" x 1/8\" angle");
    c.label_left(x0 + 50.0, y0 + 60.0, 7.0, "2\" ceramic blanket");
    c.label_right(x0 - 10.0, y0 + 25.0, 7.0, "5/16\" bolts");
    c.label(150.0, 178.0, 7.0, "Corner joint (top view, not to scale)");

    c.finish()
}

/// Burner casting face with the staggered port pattern.
pub fn burner_pattern(specs: &ForgeSpecs) -> String {
    let burner = &specs.burner;
    let b = 30f64.min(280.0 / burner.burner_length_in);
    let len = burner.burner_length_in * b;
    let wid = burner.burner_width_in * b;

    let mut c = Canvas::new(380.0, wid + 70.0);
    let x0 = (380.0 - len) / 2.0;
    let y0 = 25.0;

    c.rect(x0, y0, len, wid, CASTING_FILL, OUTLINE);

    let pitch = 0.75 * b;
    let radius = (0.125 * b).max(1.5);
    for row in 0..burner.rows {
        let stagger = if row % 2 == 1 { pitch / 2.0 } else { 0.0 };
        let y = y0 + wid * (row + 1) as f64 / (burner.rows + 1) as f64;
        for hole in 0..burner.holes_per_row {
            let x = x0 + 0.75 * b + stagger + pitch * hole as f64;
            c.circle(x, y, radius, HOLE_FILL);
        }
    }

    c.dimension_h(x0, x0 + len, y0 + wid + 14.0, &format_inches(burner.burner_length_in));
    c.dimension_v(x0 - 8.0, y0, y0 + wid, &format_inches(burner.burner_width_in));
    c.label(
        190.0,
        y0 + wid + 34.0,
        7.0,
        &format!(
            "{} ports, 1/4\" dia, {} rows x {} staggered at 3/4\"",
            burner.burner_holes, burner.rows, burner.holes_per_row
        ),
    );

    c.finish()
}

/// Front panel with the opening, the sliding brick door and its track.
pub fn door_system(specs: &ForgeSpecs) -> String {
    let env = &specs.envelope;
    let f = 16f64.min(160.0 / env.external_width_in.max(env.external_height_in));
    let panel_w = env.external_width_in * f;
    let panel_h = env.external_height_in * f;
    let door_w = specs.doors.front_door_width_in * f;
    let door_h = specs.doors.front_door_height_in * f;
    let track = (specs.doors.front_door_width_in + 12.0) * f;

    let mut c = Canvas::new(380.0, panel_h + 80.0);
    let x0 = (380.0 - panel_w) / 2.0;
    let y0 = 45.0;

    c.rect(x0, y0, panel_w, panel_h, STEEL_FILL, OUTLINE);
    let open_x = x0 + (panel_w - door_w) / 2.0;
    let open_y = y0 + panel_h - door_h - 0.5 * f;
    c.rect(open_x, open_y, door_w, door_h, OPENING_FILL, THIN);

    // Door slid half open, frame is 1" larger than the opening
    let frame_w = door_w + f;
    let frame_h = door_h + f;
    let door_x = open_x + door_w * 0.5 - f / 2.0;
    c.rect(door_x, open_y - f / 2.0, frame_w, frame_h, BRICK_FILL, OUTLINE);

    // Track rod above the opening, centered on the opening
    let track_y = open_y - f / 2.0 - 10.0;
    let track_x = open_x + door_w / 2.0 - track / 2.0;
    c.line(track_x, track_y, track_x + track, track_y, "2pt + black");
    c.line(door_x + f, track_y, door_x + f, open_y - f / 2.0, OUTLINE);
    c.line(door_x + frame_w - f, track_y, door_x + frame_w - f, open_y - f / 2.0, OUTLINE);

    c.dimension_h(
        track_x,
        track_x + track,
        track_y - 14.0,
        &format!("Track {}", format_inches(specs.doors.front_door_width_in + 12.0)),
    );
    c.dimension_h(
        open_x,
        open_x + door_w,
        y0 + panel_h + 14.0,
        &format!("Opening {}", format_inches(specs.doors.front_door_width_in)),
    );
    c.label(
        x0 + panel_w / 2.0,
        y0 + panel_h + 34.0,
        7.0,
        "Front panel with sliding IFB door (shown half open)",
    );

    c.finish()
}

fn door_size(width_in: f64, height_in: f64) -> String {
    format!("{} x {}", format_inches(width_in), format_inches(height_in))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute_specs;
    use crate::input::{ChamberInput, DoorConfig};

    #[test]
    fn test_scale_default_chamber_limited_by_length() {
        let specs = compute_specs(&ChamberInput::default());
        // 80 / 15 is smaller than 12 and 120 / 10.5
        assert!((diagram_scale(&specs) - 80.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_small_chamber_capped() {
        let specs = compute_specs(&ChamberInput::new(3.0, 3.0, 4.0, 1.0, DoorConfig::FrontOnly));
        // W = H = 5.5, L = 5: 120 / 5.5 = 21.8, 80 / 5 = 16, so the cap wins
        assert_eq!(diagram_scale(&specs), 12.0);
    }

    #[test]
    fn test_canvas_output() {
        let mut c = Canvas::new(100.0, 50.0);
        c.rect(1.0, 2.0, 10.0, -5.0, "none", OUTLINE);
        c.label(50.0, 20.0, 8.0, "1/4\" #plate");
        let out = c.finish();
        assert!(out.starts_with("#align(center)[#block(width: 100.0pt, height: 50.0pt)["));
        assert!(out.contains("rect(width: 10.0pt, height: 0.0pt"));
        assert!(out.contains("[1/4\" \\#plate]"));
    }

    #[test]
    fn test_burner_pattern_draws_every_port() {
        let specs = compute_specs(&ChamberInput::default());
        let out = burner_pattern(&specs);
        assert_eq!(out.matches("circle(").count(), 27);
        assert!(out.contains("27 ports"));
    }

    #[test]
    fn test_diagrams_use_design_dimensions() {
        let specs = compute_specs(&ChamberInput::default());
        assert!(orthographic_views(&specs).contains("10.5\""));
        assert!(door_system(&specs).contains("Track 17.1\""));
        assert!(assembly_overview(&specs).contains("Front door 5.1\" x 5.1\""));
        assert_eq!(corner_detail().matches("circle(").count(), 4);
    }

    #[test]
    fn test_fill_colors_are_typst_rgb() {
        let specs = compute_specs(&ChamberInput::default());
        let out = door_system(&specs);
        assert!(out.contains(r##"fill: rgb("#c9d1d9"), stroke: 0.8pt + black"##));
        assert!(out.contains(r##"fill: rgb("#e8c39e")"##));
        assert!(out.contains(r##"stroke: 0.5pt + rgb("#2c5aa0")"##));
    }
}
