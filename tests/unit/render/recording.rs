use super::*;

#[test]
fn fills_capture_the_active_color() {
    let mut s = RecordingSurface::new();
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let blue = Rgba::rgb(0.0, 0.0, 1.0);

    s.set_fill_color(red);
    s.save();
    s.set_fill_color(blue);
    s.fill_circle(Point::new(1.0, 2.0), 3.0);
    s.restore();
    s.fill_circle(Point::new(4.0, 5.0), 6.0);

    let fills = s.fill_circles();
    assert_eq!(fills.len(), 2);
    assert_eq!(fills[0].color, blue);
    assert_eq!(fills[1].color, red);
    assert_eq!(s.current_fill(), red);
    assert_eq!(s.save_depth(), 0);
    assert_eq!(s.commands().len(), 6);
}

#[test]
fn unbalanced_restore_is_recorded_but_ignored() {
    let mut s = RecordingSurface::new();
    let c = Rgba::rgb(0.5, 0.5, 0.5);
    s.set_fill_color(c);
    s.restore();
    assert_eq!(s.current_fill(), c);
    assert_eq!(s.commands().last(), Some(&DrawCommand::Restore));
}

#[test]
fn take_drains_everything() {
    let mut s = RecordingSurface::new();
    s.save();
    s.fill_circle(Point::ZERO, 1.0);
    let cmds = s.take();
    assert_eq!(cmds.len(), 2);
    assert!(s.commands().is_empty());
    assert!(s.fill_circles().is_empty());
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn commands_serialize_with_op_tags() {
    let cmd = DrawCommand::FillCircle {
        center: Point::new(1.0, 2.0),
        radius: 3.0,
    };
    let v = serde_json::to_value(cmd).unwrap();
    assert_eq!(v["op"], "fill_circle");
    assert_eq!(v["radius"], 3.0);
    assert_eq!(serde_json::to_value(DrawCommand::Save).unwrap()["op"], "save");
}
