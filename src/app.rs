use crate::canvas::StrokeCanvas;
use crate::config::SketchConfig;
use crate::dismiss::PointerListeners;
use crate::export::ExportHandle;
use crate::pad::SketchPad;
use crate::panels;

/// The sketch pad window: toolbar on top, status strip below, canvas in between.
pub struct SketchApp {
    pad: SketchPad<StrokeCanvas>,
    config: SketchConfig,
    listeners: PointerListeners,
    // Size the canvas was laid out at last frame, shown in the status strip
    canvas_size: egui::Vec2,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        let listeners = PointerListeners::new();
        Self {
            pad: SketchPad::new(&config, listeners.clone()),
            config,
            listeners,
            canvas_size: egui::Vec2::ZERO,
        }
    }

    pub fn pad(&self) -> &SketchPad<StrokeCanvas> {
        &self.pad
    }

    pub fn pad_mut(&mut self) -> &mut SketchPad<StrokeCanvas> {
        &mut self.pad
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Pointer listeners currently attached for this window
    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }

    /// Export bridge for whatever hosts the pad
    pub fn export_handle(&self) -> ExportHandle<StrokeCanvas> {
        self.pad.export_handle()
    }

    fn handle_pointer_press(&mut self, ctx: &egui::Context) {
        let press = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = press {
            let closed = self.pad.pointer_down(pos);
            if !closed.is_empty() {
                log::debug!("Dismissed {:?} on outside press", closed);
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        use egui::{Key, KeyboardShortcut, Modifiers};

        // Redo first: Cmd+Shift+Z would otherwise also match Cmd+Z
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&KeyboardShortcut::new(
                Modifiers::COMMAND | Modifiers::SHIFT,
                Key::Z,
            )) || i.consume_shortcut(&KeyboardShortcut::new(Modifiers::COMMAND, Key::Y));
            let undo = i.consume_shortcut(&KeyboardShortcut::new(Modifiers::COMMAND, Key::Z));
            (redo, undo)
        });
        if redo {
            self.pad.redo();
        }
        if undo {
            self.pad.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Presses are judged against the regions laid out last frame
        self.handle_pointer_press(ctx);
        self.handle_shortcuts(ctx);
        self.pad.begin_layout();

        let anchors = panels::toolbar(&mut self.pad, ctx);
        panels::status_strip(&mut self.pad, ctx, self.canvas_size);
        self.canvas_size = panels::canvas_panel(&mut self.pad, &self.config, ctx);

        panels::color_picker_popover(&mut self.pad, ctx, anchors.color_trigger);
        panels::brush_slider_popover(&mut self.pad, ctx, anchors.brush_trigger);
    }
}
