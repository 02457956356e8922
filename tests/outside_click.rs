use egui::{Rect, pos2, vec2};
use sketch_pad::canvas::StrokeCanvas;
use sketch_pad::dismiss::PointerListeners;
use sketch_pad::{Popover, SketchConfig, SketchPad};

fn trigger_rect(popover: Popover) -> Rect {
    match popover {
        Popover::ColorPicker => Rect::from_min_size(pos2(0.0, 0.0), vec2(20.0, 20.0)),
        Popover::BrushSlider => Rect::from_min_size(pos2(300.0, 0.0), vec2(20.0, 20.0)),
    }
}

fn popover_rect(popover: Popover) -> Rect {
    match popover {
        Popover::ColorPicker => Rect::from_min_size(pos2(0.0, 30.0), vec2(200.0, 200.0)),
        Popover::BrushSlider => Rect::from_min_size(pos2(220.0, 30.0), vec2(100.0, 60.0)),
    }
}

/// Simulates one layout pass recording every open popover and its trigger
fn lay_out(pad: &mut SketchPad<StrokeCanvas>) {
    pad.begin_layout();
    for popover in Popover::ALL {
        let open = pad.session().popovers().is_open(popover);
        let regions = pad.regions_mut(popover);
        regions.trigger.add(trigger_rect(popover));
        if open {
            regions.popover.add(popover_rect(popover));
        }
    }
}

fn new_pad() -> (SketchPad<StrokeCanvas>, PointerListeners) {
    let listeners = PointerListeners::new();
    let pad = SketchPad::new(&SketchConfig::default(), listeners.clone());
    (pad, listeners)
}

#[test]
fn test_press_outside_closes_popover() {
    let (mut pad, listeners) = new_pad();
    pad.toggle_popover(Popover::ColorPicker);
    lay_out(&mut pad);
    assert_eq!(listeners.attached_count(), 1);

    let closed = pad.pointer_down(pos2(600.0, 600.0));
    assert_eq!(closed, vec![Popover::ColorPicker]);
    assert!(!pad.session().popovers().color_picker);
    assert_eq!(listeners.attached_count(), 0);
}

#[test]
fn test_press_inside_popover_or_trigger_keeps_it_open() {
    let (mut pad, listeners) = new_pad();
    pad.toggle_popover(Popover::ColorPicker);
    lay_out(&mut pad);

    assert!(pad.pointer_down(pos2(50.0, 100.0)).is_empty());
    assert!(pad.pointer_down(pos2(10.0, 10.0)).is_empty());
    assert!(pad.session().popovers().color_picker);
    assert_eq!(listeners.attached_count(), 1);
}

#[test]
fn test_popover_without_layout_is_not_dismissed() {
    let (mut pad, _listeners) = new_pad();
    pad.toggle_popover(Popover::BrushSlider);
    // Nothing laid out yet: the press cannot be judged
    pad.begin_layout();

    assert!(pad.pointer_down(pos2(600.0, 600.0)).is_empty());
    assert!(pad.session().popovers().brush_slider);
}

#[test]
fn test_each_popover_judges_its_own_regions() {
    let (mut pad, listeners) = new_pad();
    pad.open_popover(Popover::ColorPicker);
    pad.open_popover(Popover::BrushSlider);
    lay_out(&mut pad);

    // Inside the slider popover, outside the color picker
    let closed = pad.pointer_down(pos2(250.0, 50.0));
    assert_eq!(closed, vec![Popover::ColorPicker]);
    assert!(pad.session().popovers().brush_slider);
    assert_eq!(listeners.attached_count(), 1);

    lay_out(&mut pad);
    let closed = pad.pointer_down(pos2(600.0, 600.0));
    assert_eq!(closed, vec![Popover::BrushSlider]);
    assert_eq!(listeners.attached_count(), 0);
}

#[test]
fn test_second_trigger_counts_as_inside() {
    let (mut pad, _listeners) = new_pad();
    pad.open_popover(Popover::ColorPicker);
    lay_out(&mut pad);
    let swatch = Rect::from_min_size(pos2(100.0, 500.0), vec2(18.0, 18.0));
    pad.regions_mut(Popover::ColorPicker).trigger.add(swatch);

    assert!(pad.pointer_down(swatch.center()).is_empty());
    assert!(pad.session().popovers().color_picker);
}

#[test]
fn test_at_most_one_listener_over_any_sequence() {
    let (mut pad, listeners) = new_pad();
    let steps = [
        Popover::ColorPicker,
        Popover::BrushSlider,
        Popover::ColorPicker,
        Popover::ColorPicker,
        Popover::BrushSlider,
        Popover::BrushSlider,
        Popover::ColorPicker,
    ];

    for popover in steps {
        pad.toggle_popover(popover);
        let expected = usize::from(pad.session().popovers().any_open());
        assert_eq!(listeners.attached_count(), expected);
        assert_eq!(pad.dismissal().is_listening(), expected == 1);
    }
}

#[test]
fn test_palette_actions_release_listener() {
    let (mut pad, listeners) = new_pad();
    pad.open_popover(Popover::ColorPicker);
    assert_eq!(listeners.attached_count(), 1);
    pad.cancel_custom_color();
    assert_eq!(listeners.attached_count(), 0);

    pad.open_popover(Popover::BrushSlider);
    assert_eq!(listeners.attached_count(), 1);
    pad.toggle_erase();
    assert_eq!(listeners.attached_count(), 0);
}

#[test]
fn test_dropping_pad_detaches_listener() {
    let (mut pad, listeners) = new_pad();
    pad.open_popover(Popover::ColorPicker);
    assert_eq!(listeners.attached_count(), 1);

    drop(pad);
    assert_eq!(listeners.attached_count(), 0);
}

#[test]
fn test_presses_without_open_popover_are_ignored() {
    let (mut pad, listeners) = new_pad();
    lay_out(&mut pad);
    assert!(pad.pointer_down(pos2(600.0, 600.0)).is_empty());
    assert_eq!(listeners.attached_count(), 0);
}
